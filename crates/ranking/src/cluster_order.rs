//! Within-cluster ordering
//!
//! Reorders the members of one cluster so that index 0 is the phrase that
//! represents the cluster. Members are sorted ascending, stably, on a
//! two-part key whose second part is always the negated word count (longer
//! phrases first):
//!
//! | Criterion   | Primary key                                  |
//! |-------------|----------------------------------------------|
//! | `Position`  | first-occurrence offset in the document      |
//! | `Frequency` | number of sentences containing the phrase    |
//! | `Centroid`  | `0` for the centroid, `1` for everyone else  |
//!
//! `Frequency` sorts ASCENDING, so the least frequent member comes first.
//! That is the established behaviour of this ranker even though the
//! criterion reads as "most frequent first"; it is kept as is until the
//! direction is settled.

use keyrank_core::{OrderingCriterion, PhraseMatching, RankingStrategy, Result};
use tracing::debug;

use crate::centroid::centroid_index;
use crate::occurrence::DocumentOccurrences;
use crate::tagging::{fake_tag_phrase, word_count};

/// Orders cluster members according to a fixed criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterOrderer {
    criterion: OrderingCriterion,
    matching: PhraseMatching,
}

impl ClusterOrderer {
    /// Create an orderer using substring matching
    pub fn new(criterion: OrderingCriterion) -> Self {
        Self {
            criterion,
            matching: PhraseMatching::default(),
        }
    }

    /// Builder: set how phrases are located in sentences
    pub fn with_matching(mut self, matching: PhraseMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Active criterion
    pub fn criterion(&self) -> OrderingCriterion {
        self.criterion
    }

    /// Active matching mode
    pub fn matching(&self) -> PhraseMatching {
        self.matching
    }

    /// Reorder untagged `cluster` members, representative first
    ///
    /// The document is read from `strategy.context()`.
    ///
    /// # Errors
    ///
    /// [`keyrank_core::Error::MissingOccurrence`] when the criterion needs the
    /// document statistics of a member that never occurs in the document.
    pub fn order(&self, cluster: &[String], strategy: &dyn RankingStrategy) -> Result<Vec<String>> {
        let separator = strategy.tag_separator();

        let primary: Vec<f64> = match self.criterion {
            OrderingCriterion::Position | OrderingCriterion::Frequency => {
                let occurrences =
                    DocumentOccurrences::scan(strategy.context(), cluster, separator, self.matching);
                cluster
                    .iter()
                    .map(|phrase| match self.criterion {
                        OrderingCriterion::Frequency => occurrences.frequency(phrase),
                        _ => occurrences.first_position(phrase).map(|pos| pos as f64),
                    })
                    .collect::<Result<Vec<f64>>>()?
            }
            OrderingCriterion::Centroid => {
                let tagged: Vec<String> = cluster
                    .iter()
                    .map(|phrase| fake_tag_phrase(phrase, separator))
                    .collect();
                let centroid = centroid_index(&tagged, separator, strategy.stemmer())
                    .map_or("", |i| cluster[i].as_str());
                debug!(target: "keyrank::cluster", centroid, "Cluster centroid selected");

                cluster
                    .iter()
                    .map(|phrase| if phrase == centroid { 0.0 } else { 1.0 })
                    .collect()
            }
        };

        let mut keyed: Vec<(f64, usize, &String)> = cluster
            .iter()
            .zip(primary)
            .map(|(phrase, key)| (key, word_count(phrase), phrase))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| b.1.cmp(&a.1)));

        Ok(keyed.into_iter().map(|(_, _, phrase)| phrase.clone()).collect())
    }
}
