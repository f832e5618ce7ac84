//! Ranker pipeline component
//!
//! [`RankerComponent`] wraps any [`Ranker`] with the component lifecycle:
//! weighting then ordering per document, plus an optional lazy cache. The
//! wrapped ranker must agree with the component configuration, so cached
//! rankings are always produced by the settings the configuration names.
//!
//! # Lazy cache
//!
//! When a `lazy_directory` is configured, every computed ranking is written
//! to `<lazy_directory>/<name>/<doc_id>.ranking.json`. When `lazy` is also
//! set, an existing file is loaded instead of ranking the document again.

use std::fs;
use std::path::{Path, PathBuf};

use keyrank_core::{
    Cluster, Document, RankedResult, RankerConfig, RankingEngine, Result, WeightMap,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ranker::KeyphraseRanker;

/// Extension of cached ranking files
pub const CACHE_FILE_SUFFIX: &str = ".ranking.json";

// ============================================================================
// Ranker trait
// ============================================================================

/// The two per-document operations a ranking component runs
pub trait Ranker {
    /// Check that `config` describes this ranker
    ///
    /// # Errors
    ///
    /// [`keyrank_core::Error::InvalidConfig`] when a ranking setting differs.
    fn check_config(&self, config: &RankerConfig) -> Result<()>;

    /// Weight every candidate of `document`
    fn weighting(
        &mut self,
        document: &Document,
        candidates: &[String],
        clusters: &[Cluster],
    ) -> Result<WeightMap>;

    /// Order weighted candidates into the final ranking
    fn ordering(&self, weights: &WeightMap, clusters: &[Cluster]) -> Result<RankedResult>;
}

impl Ranker for KeyphraseRanker {
    fn check_config(&self, config: &RankerConfig) -> Result<()> {
        KeyphraseRanker::check_config(self, config)
    }

    fn weighting(
        &mut self,
        document: &Document,
        candidates: &[String],
        clusters: &[Cluster],
    ) -> Result<WeightMap> {
        KeyphraseRanker::weighting(self, document, candidates, clusters)
    }

    fn ordering(&self, weights: &WeightMap, clusters: &[Cluster]) -> Result<RankedResult> {
        KeyphraseRanker::ordering(self, weights, clusters)
    }
}

// ============================================================================
// Cache format
// ============================================================================

/// Contents of one cache file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedRanking {
    /// Engine weights, in weighting order
    pub weights: WeightMap,
    /// Final ranking
    pub ranking: RankedResult,
}

// ============================================================================
// RankerComponent
// ============================================================================

/// A ranker with its component configuration
#[derive(Debug)]
pub struct RankerComponent<R: Ranker> {
    config: RankerConfig,
    ranker: R,
}

impl<R: Ranker> RankerComponent<R> {
    /// Wrap `ranker`
    ///
    /// # Errors
    ///
    /// [`keyrank_core::Error::InvalidConfig`] if `config` does not validate
    /// or does not describe `ranker`.
    pub fn new(config: RankerConfig, ranker: R) -> Result<Self> {
        config.validate()?;
        ranker.check_config(&config)?;
        Ok(RankerComponent { config, ranker })
    }

    /// Component configuration
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Wrapped ranker
    pub fn ranker(&self) -> &R {
        &self.ranker
    }

    /// Wrapped ranker, mutably
    pub fn ranker_mut(&mut self) -> &mut R {
        &mut self.ranker
    }

    /// Cache file of `doc_id`, if caching is configured
    ///
    /// Path separators in `doc_id` are replaced with `_` so every document
    /// maps to a file directly under the component directory.
    pub fn cache_path(&self, doc_id: &str) -> Option<PathBuf> {
        let dir = self.config.lazy_directory.as_ref()?;
        let file = format!("{}{}", doc_id.replace(['/', '\\'], "_"), CACHE_FILE_SUFFIX);
        Some(dir.join(&self.config.name).join(file))
    }

    /// Rank one document
    ///
    /// # Errors
    ///
    /// Any ranking error, plus I/O and serialization errors of the cache.
    pub fn rank_document(
        &mut self,
        doc_id: &str,
        document: &Document,
        candidates: &[String],
        clusters: &[Cluster],
    ) -> Result<RankedResult> {
        let path = self.cache_path(doc_id);

        if self.config.lazy {
            if let Some(cached) = path.as_deref().map(load_cached).transpose()?.flatten() {
                info!(
                    target: "keyrank::cache",
                    component = %self.config.name,
                    doc_id,
                    "Loaded cached ranking"
                );
                return Ok(cached.ranking);
            }
        }

        let weights = self.ranker.weighting(document, candidates, clusters)?;
        if self.config.debug {
            for (phrase, score) in weights.iter() {
                debug!(target: "keyrank::weighting", doc_id, phrase, score, "Weight");
            }
        }

        let ranking = self.ranker.ordering(&weights, clusters)?;
        if self.config.debug {
            for (rank, entry) in ranking.iter().enumerate() {
                debug!(
                    target: "keyrank::ordering",
                    doc_id,
                    rank,
                    phrase = %entry.phrase,
                    score = entry.score,
                    "Ranked"
                );
            }
        }

        if let Some(path) = path {
            let cached = CachedRanking { weights, ranking };
            store_cached(&path, &cached)?;
            info!(
                target: "keyrank::cache",
                component = %self.config.name,
                doc_id,
                path = %path.display(),
                "Stored ranking"
            );
            return Ok(cached.ranking);
        }

        Ok(ranking)
    }
}

impl RankerComponent<KeyphraseRanker> {
    /// Build the ranker from `config` around `engine`
    ///
    /// # Errors
    ///
    /// [`keyrank_core::Error::InvalidConfig`] if `config` does not validate.
    pub fn from_engine(config: RankerConfig, engine: Box<dyn RankingEngine>) -> Result<Self> {
        let ranker = KeyphraseRanker::from_config(engine, &config)?;
        Ok(RankerComponent { config, ranker })
    }
}

/// Read a cache file, `None` if it does not exist
fn load_cached(path: &Path) -> Result<Option<CachedRanking>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

fn store_cached(path: &Path, cached: &CachedRanking) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(cached)?)?;
    Ok(())
}
