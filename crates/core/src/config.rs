//! Ranker configuration via `keyrank.toml`
//!
//! Holds the construction parameters of a ranker component (name, lazy
//! caching, debug tracing) together with the ordering policy and the graph
//! convergence settings. Every field has a default, so an empty file is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{GraphParams, OrderingCriterion, PhraseMatching, ScoringMethod};

/// Config file name used by [`RankerConfig::write_default`].
pub const CONFIG_FILE_NAME: &str = "keyrank.toml";

/// Default component name
pub const DEFAULT_COMPONENT_NAME: &str = "keyphrase_ranker";

/// Ranker configuration loaded from `keyrank.toml`.
///
/// # Example
///
/// ```toml
/// name = "topicrank"
/// lazy = true
/// lazy_directory = "/tmp/keyrank-cache"
/// ordering = "position"
///
/// [graph]
/// damping = 0.85
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Component name, also the cache sub-directory
    #[serde(default = "default_name")]
    pub name: String,
    /// Reuse cached rankings when present
    #[serde(default)]
    pub lazy: bool,
    /// Where rankings are cached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy_directory: Option<PathBuf>,
    /// Trace every processing step
    #[serde(default)]
    pub debug: bool,
    /// `"position"`, `"frequency"` or `"centroid"`
    #[serde(default = "default_ordering")]
    pub ordering: String,
    /// `"substring"` or `"word_boundary"`
    #[serde(default = "default_matching")]
    pub matching: String,
    /// `"sum"` or `"mean"`: scoring of multi-word candidates
    #[serde(default = "default_scoring")]
    pub scoring: String,
    /// Convergence settings for the ranking engine
    #[serde(default)]
    pub graph: GraphParams,
}

fn default_name() -> String {
    DEFAULT_COMPONENT_NAME.to_string()
}

fn default_ordering() -> String {
    OrderingCriterion::default().as_str().to_string()
}

fn default_matching() -> String {
    PhraseMatching::default().as_str().to_string()
}

fn default_scoring() -> String {
    ScoringMethod::default().as_str().to_string()
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            lazy: false,
            lazy_directory: None,
            debug: false,
            ordering: default_ordering(),
            matching: default_matching(),
            scoring: default_scoring(),
            graph: GraphParams::default(),
        }
    }
}

impl RankerConfig {
    /// Builder: set the component name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: enable lazy loading from `dir`
    pub fn with_lazy_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lazy = true;
        self.lazy_directory = Some(dir.into());
        self
    }

    /// Builder: set the ordering criterion
    pub fn with_ordering(mut self, criterion: OrderingCriterion) -> Self {
        self.ordering = criterion.as_str().to_string();
        self
    }

    /// Builder: set the phrase matching mode
    pub fn with_matching(mut self, matching: PhraseMatching) -> Self {
        self.matching = matching.as_str().to_string();
        self
    }

    /// Builder: set the candidate scoring method
    pub fn with_scoring(mut self, scoring: ScoringMethod) -> Self {
        self.scoring = scoring.as_str().to_string();
        self
    }

    /// Builder: toggle debug tracing
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parse the ordering string into an [`OrderingCriterion`].
    pub fn ordering_criterion(&self) -> Result<OrderingCriterion> {
        self.ordering.parse()
    }

    /// Parse the matching string into a [`PhraseMatching`].
    pub fn phrase_matching(&self) -> Result<PhraseMatching> {
        self.matching.parse()
    }

    /// Parse the scoring string into a [`ScoringMethod`].
    pub fn scoring_method(&self) -> Result<ScoringMethod> {
        self.scoring.parse()
    }

    /// Check every value eagerly.
    pub fn validate(&self) -> Result<()> {
        self.ordering_criterion()?;
        self.phrase_matching()?;
        self.scoring_method()?;

        if self.name.trim().is_empty() {
            return Err(Error::invalid_config("Component name must not be empty"));
        }
        if self.lazy && self.lazy_directory.is_none() {
            return Err(Error::invalid_config(
                "lazy = true requires a lazy_directory",
            ));
        }
        let graph = &self.graph;
        if !(graph.damping > 0.0 && graph.damping < 1.0) {
            return Err(Error::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                graph.damping
            )));
        }
        if graph.tolerance.is_nan() || graph.tolerance <= 0.0 {
            return Err(Error::invalid_config(format!(
                "tolerance must be positive, got {}",
                graph.tolerance
            )));
        }
        if graph.max_iterations == 0 {
            return Err(Error::invalid_config("max_iterations must be positive"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Keyphrase ranker configuration
#
# Component name, also used as the cache sub-directory
name = "keyphrase_ranker"

# Reuse previously computed rankings from lazy_directory (default: false)
lazy = false
# lazy_directory = "/var/cache/keyrank"

# Trace every processing step (default: false)
debug = false

# How the representative phrase of a cluster is chosen:
#   "position"  = first occurring phrase in the document (default)
#   "frequency" = ascending occurrence count
#   "centroid"  = phrase most similar to the rest of its cluster
ordering = "position"

# How phrases are located in sentences:
#   "substring"     = plain substring search (default)
#   "word_boundary" = matches must align with word boundaries
matching = "substring"

# Score of a multi-word candidate from the weights of its words:
#   "sum"  = sum of the word weights (default)
#   "mean" = average of the word weights
scoring = "sum"

[graph]
tolerance = 0.0001
damping = 0.85
max_iterations = 1000000
"#
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RankerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::SerializationError(msg) => Error::SerializationError(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::SerializationError(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
