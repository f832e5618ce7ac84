//! Core types for keyphrase ranking
//!
//! This module defines the foundational types:
//! - TaggedSentence: A POS-tagged sentence (`word<sep>TAG` tokens)
//! - Document: Ordered tagged sentences plus the flat full text
//! - Cluster: Candidates denoting the same concept
//! - WeightMap: Insertion-ordered candidate → score mapping
//! - RankedPhrase / RankedResult: The externally visible output
//! - OrderingCriterion: How a cluster's representative is chosen
//! - PhraseMatching: How phrases are located inside sentences
//! - GraphParams: Convergence settings handed to the ranking engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A candidate keyphrase cluster
///
/// Members are untagged when supplied by the pipeline, and tagged when read
/// back from a strategy's token grouping.
pub type Cluster = Vec<String>;

// ============================================================================
// TaggedSentence / Document
// ============================================================================

/// A sentence of POS-tagged tokens separated by whitespace
///
/// Each token binds a word to its tag through the strategy's tag separator,
/// e.g. `cat/NN` with separator `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggedSentence(String);

impl TaggedSentence {
    /// Create a sentence from its tagged text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build a sentence from `(word, tag)` pairs
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
        tag_separator: &str,
    ) -> Self {
        let tokens: Vec<String> = pairs
            .into_iter()
            .map(|(word, tag)| format!("{}{}{}", word, tag_separator, tag))
            .collect();
        Self(tokens.join(" "))
    }

    /// The raw tagged text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tagged tokens in reading order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl From<&str> for TaggedSentence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaggedSentence {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TaggedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pre-processed document
///
/// Sentences are in reading order. `full_text` is only consumed by the
/// ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sentences: Vec<TaggedSentence>,
    full_text: String,
}

impl Document {
    /// Create a document whose full text is the tagged sentences, one per line
    pub fn new(sentences: Vec<TaggedSentence>) -> Self {
        let full_text = sentences
            .iter()
            .map(TaggedSentence::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            sentences,
            full_text,
        }
    }

    /// Create a document with an externally produced full text
    pub fn with_full_text(sentences: Vec<TaggedSentence>, full_text: impl Into<String>) -> Self {
        Self {
            sentences,
            full_text: full_text.into(),
        }
    }

    /// Tagged sentences in reading order
    pub fn sentences(&self) -> &[TaggedSentence] {
        &self.sentences
    }

    /// Flat text handed to the ranking engine
    pub fn full_text(&self) -> &str {
        &self.full_text
    }
}

// ============================================================================
// WeightMap
// ============================================================================

/// Candidate → score mapping that remembers insertion order
///
/// Re-inserting a phrase replaces its score but keeps its original slot, so
/// iteration order is the order in which phrases were first weighted. Stable
/// sorts over this order are what make equal scores deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")]
pub struct WeightMap {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl WeightMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score of `phrase`, returning the previous score if any
    pub fn insert(&mut self, phrase: impl Into<String>, score: f64) -> Option<f64> {
        let phrase = phrase.into();
        match self.index.get(&phrase) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, score)),
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, score));
                None
            }
        }
    }

    /// Score of `phrase`, if weighted
    pub fn get(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).map(|&slot| self.entries[slot].1)
    }

    /// Whether `phrase` has a score
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Number of weighted phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no phrase has been weighted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(phrase, score)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(p, s)| (p.as_str(), *s))
    }
}

impl FromIterator<(String, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut map = WeightMap::new();
        for (phrase, score) in iter {
            map.insert(phrase, score);
        }
        map
    }
}

impl From<Vec<(String, f64)>> for WeightMap {
    fn from(entries: Vec<(String, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<WeightMap> for Vec<(String, f64)> {
    fn from(map: WeightMap) -> Self {
        map.entries
    }
}

// ============================================================================
// RankedResult
// ============================================================================

/// One entry of the final ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPhrase {
    /// The untagged keyphrase
    pub phrase: String,
    /// Weight assigned by the ranking engine
    pub score: f64,
}

impl RankedPhrase {
    /// Create a ranked phrase
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Ordered keyphrases, best first, scores non-increasing
pub type RankedResult = Vec<RankedPhrase>;

// ============================================================================
// OrderingCriterion
// ============================================================================

/// Policy used to pick the representative phrase of a cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingCriterion {
    /// The phrase occurring first in the document wins
    #[default]
    Position,
    /// Ascending sentence count: the least frequent phrase sorts first
    Frequency,
    /// The cluster centroid wins
    Centroid,
}

impl OrderingCriterion {
    /// Lowercase name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingCriterion::Position => "position",
            OrderingCriterion::Frequency => "frequency",
            OrderingCriterion::Centroid => "centroid",
        }
    }
}

impl FromStr for OrderingCriterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(OrderingCriterion::Position),
            "frequency" => Ok(OrderingCriterion::Frequency),
            "centroid" => Ok(OrderingCriterion::Centroid),
            other => Err(Error::invalid_config(format!(
                "Unknown ordering criterion '{}'. Expected \"position\", \"frequency\" or \"centroid\".",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PhraseMatching
// ============================================================================

/// How a phrase is located inside an untagged sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseMatching {
    /// Plain substring search: "cat" matches inside "catalog"
    #[default]
    Substring,
    /// The match must start and end on a word boundary
    WordBoundary,
}

impl PhraseMatching {
    /// snake_case name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseMatching::Substring => "substring",
            PhraseMatching::WordBoundary => "word_boundary",
        }
    }
}

impl FromStr for PhraseMatching {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substring" => Ok(PhraseMatching::Substring),
            "word_boundary" => Ok(PhraseMatching::WordBoundary),
            other => Err(Error::invalid_config(format!(
                "Unknown phrase matching mode '{}'. Expected \"substring\" or \"word_boundary\".",
                other
            ))),
        }
    }
}

// ============================================================================
// ScoringMethod
// ============================================================================

/// Built-in ways of scoring a multi-word candidate from its word weights
///
/// Both implement [`crate::CandidateScoring`]. Words without a weight
/// contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Sum of the word weights
    #[default]
    Sum,
    /// Sum of the word weights divided by the number of words
    Mean,
}

impl ScoringMethod {
    /// Lowercase name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Sum => "sum",
            ScoringMethod::Mean => "mean",
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(ScoringMethod::Sum),
            "mean" => Ok(ScoringMethod::Mean),
            other => Err(Error::invalid_config(format!(
                "Unknown scoring method '{}'. Expected \"sum\" or \"mean\".",
                other
            ))),
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GraphParams
// ============================================================================

/// Default convergence tolerance of the graph ranking
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Default damping factor of the graph ranking
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default iteration cap of the graph ranking
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Convergence settings for the external ranking engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphParams {
    /// Stop iterating once scores move less than this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Random-walk damping factor
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Hard cap on iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
