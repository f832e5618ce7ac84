//! Error types for keyphrase ranking
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the keyphrase ranker
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (lazy cache, config files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A cluster member was never found in the document text.
    ///
    /// Upstream candidate generation guarantees every candidate occurs in the
    /// document, so this is a contract violation rather than a default-able gap.
    #[error("Phrase '{phrase}' has no recorded occurrence in the document")]
    MissingOccurrence {
        /// The phrase that was looked up
        phrase: String,
    },

    /// A cluster representative has no weight
    #[error("Phrase '{phrase}' has no weight")]
    MissingWeight {
        /// The phrase that was looked up
        phrase: String,
    },

    /// A cluster with no members reached the orderer
    #[error("Cluster {cluster_id} is empty")]
    EmptyCluster {
        /// Identifier of the cluster in the strategy's token grouping
        cluster_id: usize,
    },

    /// The external ranking engine failed
    #[error("Ranking engine error: {0}")]
    Engine(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build a [`Error::MissingOccurrence`] for `phrase`
    pub fn missing_occurrence(phrase: impl Into<String>) -> Self {
        Error::MissingOccurrence {
            phrase: phrase.into(),
        }
    }

    /// Build a [`Error::MissingWeight`] for `phrase`
    pub fn missing_weight(phrase: impl Into<String>) -> Self {
        Error::MissingWeight {
            phrase: phrase.into(),
        }
    }

    /// Build an [`Error::Engine`] from any message
    pub fn engine(msg: impl Into<String>) -> Self {
        Error::Engine(msg.into())
    }

    /// Build an [`Error::InvalidConfig`] from any message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

/// Failure of a single similarity computation.
///
/// Never escapes centroid selection: a failed pair contributes zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// One side of the comparison has no words
    #[error("Cannot compare against an empty phrase")]
    EmptyPhrase,
}
