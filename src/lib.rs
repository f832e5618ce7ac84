//! Keyrank - cluster-aware keyphrase ranking
//!
//! Keyrank weights keyphrase candidates with a graph-based ranking engine
//! and orders them into a final ranking. When candidates have been grouped
//! into clusters of near-duplicates, one representative per cluster is
//! chosen by position, frequency or centroid similarity.
//!
//! # Quick Start
//!
//! ```ignore
//! use keyrank::{KeyphraseRanker, OrderingCriterion};
//!
//! let mut ranker = KeyphraseRanker::new(engine, OrderingCriterion::Position);
//! let weights = ranker.weighting(&document, &candidates, &clusters)?;
//! let ranking = ranker.ordering(&weights, &clusters)?;
//! ```
//!
//! # Architecture
//!
//! The ranking engine, its strategy and the stemmer are external
//! collaborators plugged in through the traits of [`keyrank_core`].
//! Everything algorithmic lives in [`keyrank_ranking`].

pub use keyrank_core::*;
pub use keyrank_ranking::*;
