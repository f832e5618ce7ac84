//! Keyphrase ranker
//!
//! Two steps run per document, in this order:
//!
//! 1. **Weighting**: the ranking engine scores every candidate. Cluster-aware
//!    strategies receive the document's cluster list as part of the request.
//! 2. **Ordering**: the weights become the final ranking. Flat strategies
//!    rank every candidate; cluster-aware strategies rank one representative
//!    per cluster, chosen by the [`ClusterOrderer`].
//!
//! Both paths finish with a stable descending sort on score, so equal
//! scores keep weight-map order.

use std::collections::HashSet;

use keyrank_core::{
    CandidateScoring, Cluster, Document, Error, GraphParams, OrderingCriterion, PhraseMatching,
    RankRequest, RankedPhrase, RankedResult, RankerConfig, RankingEngine, RankingStrategy, Result,
    ScoringMethod, WeightMap,
};
use tracing::{debug, warn};

use crate::cluster_order::ClusterOrderer;
use crate::tagging::untag_phrase;

// ============================================================================
// KeyphraseRanker
// ============================================================================

/// Graph-based keyphrase ranker with cluster-aware ordering
pub struct KeyphraseRanker {
    engine: Box<dyn RankingEngine>,
    orderer: ClusterOrderer,
    params: GraphParams,
    scoring: Box<dyn CandidateScoring>,
}

impl KeyphraseRanker {
    /// Create a ranker with default graph parameters, substring matching and
    /// sum scoring
    pub fn new(engine: Box<dyn RankingEngine>, criterion: OrderingCriterion) -> Self {
        KeyphraseRanker {
            engine,
            orderer: ClusterOrderer::new(criterion),
            params: GraphParams::default(),
            scoring: Box::new(ScoringMethod::default()),
        }
    }

    /// Create a ranker from a validated configuration
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when the configuration does not validate or
    /// names an unknown criterion, matching mode or scoring method.
    pub fn from_config(engine: Box<dyn RankingEngine>, config: &RankerConfig) -> Result<Self> {
        config.validate()?;
        Ok(KeyphraseRanker {
            engine,
            orderer: ClusterOrderer::new(config.ordering_criterion()?)
                .with_matching(config.phrase_matching()?),
            params: config.graph,
            scoring: Box::new(config.scoring_method()?),
        })
    }

    /// Check that `config` describes this ranker
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] naming the first setting that differs.
    pub fn check_config(&self, config: &RankerConfig) -> Result<()> {
        let criterion = config.ordering_criterion()?;
        if criterion != self.criterion() {
            return Err(Error::invalid_config(format!(
                "ordering = \"{}\" but the ranker orders by {}",
                criterion,
                self.criterion()
            )));
        }
        let matching = config.phrase_matching()?;
        if matching != self.matching() {
            return Err(Error::invalid_config(format!(
                "matching = \"{}\" but the ranker matches by {}",
                matching.as_str(),
                self.matching().as_str()
            )));
        }
        if config.scoring != self.scoring.name() {
            return Err(Error::invalid_config(format!(
                "scoring = \"{}\" but the ranker scores by {}",
                config.scoring,
                self.scoring.name()
            )));
        }
        if config.graph != self.params {
            return Err(Error::invalid_config(format!(
                "[graph] {:?} differs from the ranker's {:?}",
                config.graph, self.params
            )));
        }
        Ok(())
    }

    /// Builder: set how phrases are located in sentences
    pub fn with_matching(mut self, matching: PhraseMatching) -> Self {
        self.orderer = self.orderer.with_matching(matching);
        self
    }

    /// Builder: set how the engine scores multi-word candidates
    pub fn with_scoring(mut self, scoring: impl CandidateScoring + 'static) -> Self {
        self.scoring = Box::new(scoring);
        self
    }

    /// Builder: set the engine convergence parameters
    pub fn with_params(mut self, params: GraphParams) -> Self {
        self.params = params;
        self
    }

    /// Active ordering criterion
    pub fn criterion(&self) -> OrderingCriterion {
        self.orderer.criterion()
    }

    /// Active matching mode
    pub fn matching(&self) -> PhraseMatching {
        self.orderer.matching()
    }

    /// Scoring sent with every request
    pub fn scoring(&self) -> &dyn CandidateScoring {
        self.scoring.as_ref()
    }

    /// Convergence parameters sent with every request
    pub fn params(&self) -> GraphParams {
        self.params
    }

    /// Strategy of the underlying engine
    pub fn strategy(&self) -> &dyn RankingStrategy {
        self.engine.strategy()
    }

    /// Whether the strategy exposes topic clusters
    pub fn is_cluster_aware(&self) -> bool {
        self.strategy().topics().is_some()
    }

    // ========================================================================
    // Weighting
    // ========================================================================

    /// Score every candidate with the ranking engine
    ///
    /// Engine results are inserted in the order returned, so a repeated
    /// phrase keeps its first slot and its last score.
    ///
    /// # Errors
    ///
    /// Whatever the engine reports.
    pub fn weighting(
        &mut self,
        document: &Document,
        candidates: &[String],
        clusters: &[Cluster],
    ) -> Result<WeightMap> {
        let cluster_aware = self.is_cluster_aware();
        let request = RankRequest {
            candidates,
            full_text: document.full_text(),
            clusters: cluster_aware.then_some(clusters),
            params: self.params,
            scoring: self.scoring.as_ref(),
        };

        debug!(
            target: "keyrank::weighting",
            strategy = self.engine.strategy().name(),
            candidates = candidates.len(),
            clusters = clusters.len(),
            cluster_aware,
            scoring = self.scoring.name(),
            "Ranking candidates"
        );

        let scored = self.engine.rank(&request)?;

        let known: HashSet<&str> = candidates.iter().map(String::as_str).collect();
        let mut weights = WeightMap::new();
        for (phrase, score) in scored {
            if !known.contains(phrase.as_str()) {
                warn!(target: "keyrank::weighting", %phrase, "Engine scored an unknown candidate");
            }
            weights.insert(phrase, score);
        }

        debug!(target: "keyrank::weighting", weighted = weights.len(), "Weighting complete");
        Ok(weights)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Turn weights into the final ranking
    ///
    /// The cluster list is not consulted: cluster-aware strategies supply
    /// their own grouping through [`keyrank_core::TopicClusters::token_ids`],
    /// which is what the engine built its graph from.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCluster`] when a topic has no members
    /// - [`Error::MissingOccurrence`] when a member never occurs in the document
    /// - [`Error::MissingWeight`] when a representative was never weighted
    pub fn ordering(&self, weights: &WeightMap, _clusters: &[Cluster]) -> Result<RankedResult> {
        let strategy = self.engine.strategy();

        let mut ranked: RankedResult = match strategy.topics() {
            None => weights
                .iter()
                .map(|(phrase, score)| RankedPhrase::new(phrase, score))
                .collect(),
            Some(topics) => {
                let separator = strategy.tag_separator();
                let token_ids = topics.token_ids();
                let mut representatives = Vec::with_capacity(token_ids.len());

                for (cluster_id, members) in token_ids {
                    let untagged: Vec<String> = members
                        .iter()
                        .map(|member| untag_phrase(member, separator))
                        .collect();
                    let ordered = self.orderer.order(&untagged, strategy)?;

                    let top = ordered
                        .into_iter()
                        .next()
                        .ok_or(Error::EmptyCluster { cluster_id })?;
                    let score = weights
                        .get(&top)
                        .ok_or_else(|| Error::missing_weight(top.as_str()))?;

                    debug!(
                        target: "keyrank::ordering",
                        cluster_id,
                        representative = %top,
                        score,
                        "Cluster representative chosen"
                    );
                    representatives.push(RankedPhrase::new(top, score));
                }
                representatives
            }
        };

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            target: "keyrank::ordering",
            criterion = %self.criterion(),
            ranked = ranked.len(),
            "Ordering complete"
        );
        Ok(ranked)
    }
}

impl std::fmt::Debug for KeyphraseRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyphraseRanker")
            .field("strategy", &self.engine.strategy().name())
            .field("orderer", &self.orderer)
            .field("params", &self.params)
            .field("scoring", &self.scoring.name())
            .finish()
    }
}
