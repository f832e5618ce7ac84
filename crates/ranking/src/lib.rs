//! Keyphrase weighting and ordering
//!
//! This crate provides:
//! - Tag stripping and stemming of POS-tagged phrases
//! - Word-overlap similarity and cluster centroid selection
//! - First-position / frequency analysis over a document
//! - ClusterOrderer for choosing one representative per cluster
//! - KeyphraseRanker for weighting and global ordering
//! - RankerComponent for the per-document lifecycle with lazy caching
//!
//! # Usage
//!
//! ```ignore
//! use keyrank_ranking::{KeyphraseRanker, RankerComponent};
//!
//! let ranker = KeyphraseRanker::from_config(engine, &config)?;
//! let mut component = RankerComponent::new(config, ranker)?;
//! let ranking = component.rank_document("doc-1", &document, &candidates, &clusters)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod centroid;
pub mod cluster_order;
pub mod component;
pub mod occurrence;
pub mod ranker;
pub mod similarity;
pub mod tagging;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use centroid::{centroid_index, cluster_centroid};
pub use cluster_order::ClusterOrderer;
pub use component::{CachedRanking, Ranker, RankerComponent, CACHE_FILE_SUFFIX};
pub use occurrence::{find_phrase, DocumentOccurrences};
pub use ranker::KeyphraseRanker;
pub use similarity::word_overlap_similarity;
pub use tagging::{fake_tag_phrase, stem_tagged_phrase, untag_phrase, untag_word, word_count};
