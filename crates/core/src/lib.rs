//! Core types and traits for keyphrase ranking
//!
//! This crate defines the foundational types used throughout the system:
//! - TaggedSentence / Document: Pre-processed input
//! - Cluster, WeightMap, RankedPhrase: Ranking data model
//! - OrderingCriterion, PhraseMatching, ScoringMethod, GraphParams: Ranking policy
//! - Error: Error type hierarchy
//! - Traits: Collaborator seams (Stemmer, RankingStrategy, RankingEngine, CandidateScoring)
//! - RankerConfig: `keyrank.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use config::{RankerConfig, CONFIG_FILE_NAME, DEFAULT_COMPONENT_NAME};
pub use error::{Error, Result, SimilarityError};
pub use traits::{
    CandidateScoring, IdentityStemmer, RankRequest, RankingEngine, RankingStrategy, Stemmer, TopicClusters,
};
pub use types::{
    Cluster, Document, GraphParams, OrderingCriterion, PhraseMatching, RankedPhrase,
    RankedResult, ScoringMethod, TaggedSentence, WeightMap, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
