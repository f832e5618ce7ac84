//! Collaborator traits for the ranking pipeline
//!
//! The ranker consumes three external capabilities through these traits:
//! - Stemmer: word normalization
//! - RankingStrategy: tag separator, stemmer and sentence context of the
//!   document currently being ranked, plus an optional topic capability
//! - RankingEngine: the graph-based scorer producing one weight per candidate
//! - CandidateScoring: how the engine turns word weights into the score of a
//!   multi-word candidate
//!
//! Cluster-aware behaviour is a capability (`RankingStrategy::topics`), not a
//! concrete type, and the cluster list reaches the engine as an explicit
//! field of [`RankRequest`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::Result;
use crate::types::{Cluster, GraphParams, ScoringMethod, TaggedSentence};

/// Word normalization
///
/// Implementations must be deterministic: the same word always yields the
/// same stem.
pub trait Stemmer: Send + Sync {
    /// Stem a single untagged word
    fn stem(&self, word: &str) -> String;
}

/// Stemmer that returns words unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Capability exposed by cluster-aware (topic) strategies
pub trait TopicClusters {
    /// Authoritative clusters of tagged phrases, keyed by topic id
    ///
    /// This grouping can differ from the cluster list handed to the ranker:
    /// it is whatever the engine actually built its graph from.
    fn token_ids(&self) -> BTreeMap<usize, Vec<String>>;
}

/// Graph construction strategy used by a ranking engine
pub trait RankingStrategy: Send + Sync {
    /// Separator between a word and its POS tag
    fn tag_separator(&self) -> &str;

    /// Stemmer used to normalize words
    fn stemmer(&self) -> &dyn Stemmer;

    /// Tagged sentences of the document last ranked, in reading order
    fn context(&self) -> &[TaggedSentence];

    /// Topic capability, present only for cluster-aware strategies
    fn topics(&self) -> Option<&dyn TopicClusters> {
        None
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

/// Score of a candidate computed from the weights of its words
///
/// Engines rank words, then call this for every candidate. `word_weights`
/// is keyed by untagged word.
pub trait CandidateScoring: Send + Sync {
    /// Score `phrase` from the weights of its whitespace-separated words
    fn score(&self, phrase: &str, word_weights: &HashMap<String, f64>) -> f64;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

impl fmt::Debug for dyn CandidateScoring + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateScoring({})", self.name())
    }
}

impl CandidateScoring for ScoringMethod {
    fn score(&self, phrase: &str, word_weights: &HashMap<String, f64>) -> f64 {
        let (total, words) = phrase
            .split_whitespace()
            .fold((0.0, 0usize), |(total, words), word| {
                (total + word_weights.get(word).copied().unwrap_or(0.0), words + 1)
            });

        match self {
            ScoringMethod::Sum => total,
            ScoringMethod::Mean if words == 0 => 0.0,
            ScoringMethod::Mean => total / words as f64,
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Input of one engine invocation
#[derive(Debug, Clone, Copy)]
pub struct RankRequest<'a> {
    /// Candidates to weight
    pub candidates: &'a [String],
    /// Full text of the document
    pub full_text: &'a str,
    /// Current clustering, set only when the strategy is cluster-aware
    pub clusters: Option<&'a [Cluster]>,
    /// Convergence settings
    pub params: GraphParams,
    /// Scoring of multi-word candidates
    pub scoring: &'a dyn CandidateScoring,
}

/// Graph-based ranking engine
///
/// `rank` takes `&mut self` because engines rebuild per-document state
/// (graph, strategy context). One engine instance ranks one document at a
/// time.
pub trait RankingEngine: Send {
    /// Weight every candidate of the request
    ///
    /// Returns `(candidate, score)` pairs, ordered as the engine sees fit.
    fn rank(&mut self, request: &RankRequest<'_>) -> Result<Vec<(String, f64)>>;

    /// Strategy driving graph construction
    fn strategy(&self) -> &dyn RankingStrategy;
}
