//! Static collaborators for tests
//!
//! `StaticStrategy` serves a fixed sentence context and, for topic
//! strategies, a fixed clustering. `StaticEngine` answers every request with
//! a fixed score list, or scores the requested candidates from fixed word
//! weights with the request's scoring, and records what it was asked.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream test suites.

#![doc(hidden)]
#![allow(missing_docs)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use keyrank_core::{
    Cluster, Error, GraphParams, IdentityStemmer, RankRequest, RankingEngine, RankingStrategy,
    Result, Stemmer, TaggedSentence, TopicClusters,
};
use parking_lot::Mutex;

/// Fixed topic clustering, ids assigned in insertion order
#[derive(Debug, Clone, Default)]
pub struct StaticTopics {
    clusters: BTreeMap<usize, Vec<String>>,
}

impl StaticTopics {
    pub fn new(clusters: Vec<Vec<String>>) -> Self {
        StaticTopics {
            clusters: clusters.into_iter().enumerate().collect(),
        }
    }
}

impl TopicClusters for StaticTopics {
    fn token_ids(&self) -> BTreeMap<usize, Vec<String>> {
        self.clusters.clone()
    }
}

/// Strategy with a fixed context
pub struct StaticStrategy {
    separator: String,
    stemmer: Box<dyn Stemmer>,
    context: Vec<TaggedSentence>,
    topics: Option<StaticTopics>,
}

impl StaticStrategy {
    /// Flat (word-level) strategy
    pub fn word(separator: &str, context: Vec<TaggedSentence>) -> Self {
        StaticStrategy {
            separator: separator.to_string(),
            stemmer: Box::new(IdentityStemmer),
            context,
            topics: None,
        }
    }

    /// Cluster-aware strategy whose topics are `clusters` of tagged phrases
    pub fn topic(separator: &str, context: Vec<TaggedSentence>, clusters: Vec<Vec<String>>) -> Self {
        StaticStrategy {
            topics: Some(StaticTopics::new(clusters)),
            ..Self::word(separator, context)
        }
    }

    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Box::new(stemmer);
        self
    }
}

impl RankingStrategy for StaticStrategy {
    fn tag_separator(&self) -> &str {
        &self.separator
    }

    fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    fn context(&self) -> &[TaggedSentence] {
        &self.context
    }

    fn topics(&self) -> Option<&dyn TopicClusters> {
        self.topics.as_ref().map(|t| t as &dyn TopicClusters)
    }

    fn name(&self) -> &str {
        if self.topics.is_some() {
            "static_topic"
        } else {
            "static_word"
        }
    }
}

/// Owned copy of a [`RankRequest`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub candidates: Vec<String>,
    pub full_text: String,
    pub clusters: Option<Vec<Cluster>>,
    pub params: GraphParams,
    pub scoring: String,
}

impl From<&RankRequest<'_>> for RecordedRequest {
    fn from(request: &RankRequest<'_>) -> Self {
        RecordedRequest {
            candidates: request.candidates.to_vec(),
            full_text: request.full_text.to_string(),
            clusters: request.clusters.map(<[Cluster]>::to_vec),
            params: request.params,
            scoring: request.scoring.name().to_string(),
        }
    }
}

/// Shared log of the requests an engine received
pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// Engine returning fixed scores
pub struct StaticEngine {
    strategy: StaticStrategy,
    scores: Vec<(String, f64)>,
    word_weights: Option<HashMap<String, f64>>,
    failure: Option<String>,
    requests: RequestLog,
}

impl StaticEngine {
    pub fn new(strategy: StaticStrategy, scores: Vec<(String, f64)>) -> Self {
        StaticEngine {
            strategy,
            scores,
            word_weights: None,
            failure: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Engine scoring each requested candidate from `word_weights`
    pub fn from_word_weights(strategy: StaticStrategy, word_weights: &[(&str, f64)]) -> Self {
        StaticEngine {
            word_weights: Some(
                word_weights
                    .iter()
                    .map(|(w, s)| (w.to_string(), *s))
                    .collect(),
            ),
            ..Self::new(strategy, Vec::new())
        }
    }

    /// Engine whose every call fails with `message`
    pub fn failing(strategy: StaticStrategy, message: &str) -> Self {
        StaticEngine {
            failure: Some(message.to_string()),
            ..Self::new(strategy, Vec::new())
        }
    }

    /// Handle on the request log, valid after the engine is boxed
    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

impl RankingEngine for StaticEngine {
    fn rank(&mut self, request: &RankRequest<'_>) -> Result<Vec<(String, f64)>> {
        self.requests.lock().push(RecordedRequest::from(request));
        if let Some(message) = &self.failure {
            return Err(Error::engine(message.as_str()));
        }
        match &self.word_weights {
            Some(word_weights) => Ok(request
                .candidates
                .iter()
                .map(|c| (c.clone(), request.scoring.score(c, word_weights)))
                .collect()),
            None => Ok(self.scores.clone()),
        }
    }

    fn strategy(&self) -> &dyn RankingStrategy {
        &self.strategy
    }
}
