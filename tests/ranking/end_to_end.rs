//! Weighting followed by ordering on small documents.

use crate::common::*;

#[test]
fn test_flat_cat_dog() {
    let doc = cat_dog_document();
    let (mut ranker, _) = word_ranker(&doc, &[("cat", 0.7), ("dog", 0.3)], OrderingCriterion::Position);
    let clusters = vec![phrases(&["cat"]), phrases(&["dog"])];

    let weights = ranker
        .weighting(&doc, &phrases(&["cat", "dog"]), &clusters)
        .unwrap();
    let ranking = ranker.ordering(&weights, &clusters).unwrap();

    assert_eq!(
        ranking,
        vec![RankedPhrase::new("cat", 0.7), RankedPhrase::new("dog", 0.3)]
    );
}

#[test]
fn test_topic_position_picks_earliest_member() {
    let doc = document(&[
        "we train neural networks",
        "neural networks generalize",
        "networks of graphs",
    ]);
    let clusters = vec![phrases(&["neural networks", "networks"]), phrases(&["graphs"])];
    let (mut ranker, _) = topic_ranker(
        &doc,
        &clusters,
        &[("neural networks", 0.2), ("networks", 0.9), ("graphs", 0.5)],
        OrderingCriterion::Position,
    );

    let candidates = phrases(&["neural networks", "networks", "graphs"]);
    let weights = ranker.weighting(&doc, &candidates, &clusters).unwrap();
    let ranking = ranker.ordering(&weights, &clusters).unwrap();

    // "networks" outscores its representative but is not ranked
    assert_eq!(
        ranking,
        vec![
            RankedPhrase::new("graphs", 0.5),
            RankedPhrase::new("neural networks", 0.2),
        ]
    );
}

#[test]
fn test_position_and_frequency_disagree() {
    // alpha: first at offset 1, in three sentences; beta: offset 7, in one
    let doc = document(&["alpha beta", "alpha", "alpha"]);
    let clusters = vec![phrases(&["alpha", "beta"])];
    let scores = [("alpha", 0.4), ("beta", 0.6)];
    let w = weights(&scores);

    let (by_position, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Position);
    assert_eq!(
        by_position.ordering(&w, &clusters).unwrap(),
        vec![RankedPhrase::new("alpha", 0.4)]
    );

    // Frequency sorts ascending: the LEAST frequent member represents the cluster
    let (by_frequency, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Frequency);
    assert_eq!(
        by_frequency.ordering(&w, &clusters).unwrap(),
        vec![RankedPhrase::new("beta", 0.6)]
    );
}

#[test]
fn test_centroid_criterion() {
    let doc = document(&["deep learning and machine learning", "learning machine"]);
    let clusters = vec![phrases(&["deep learning", "machine learning", "learning machine"])];
    let scores = [
        ("deep learning", 0.9),
        ("machine learning", 0.5),
        ("learning machine", 0.1),
    ];
    let (ranker, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Centroid);

    let ranking = ranker.ordering(&weights(&scores), &clusters).unwrap();
    assert_eq!(ranking, vec![RankedPhrase::new("machine learning", 0.5)]);
}

#[test]
fn test_ordering_follows_strategy_grouping() {
    let doc = document(&["cat and dog"]);
    let grouping = vec![phrases(&["cat"]), phrases(&["dog"])];
    let scores = [("cat", 0.3), ("dog", 0.8)];
    let (ranker, _) = topic_ranker(&doc, &grouping, &scores, OrderingCriterion::Position);

    // the caller's cluster list merges both, the strategy keeps them apart
    let merged = vec![phrases(&["cat", "dog"])];
    let ranking = ranker.ordering(&weights(&scores), &merged).unwrap();
    assert_eq!(ranked_phrases(&ranking), vec!["dog", "cat"]);
}

#[test]
fn test_member_missing_from_document() {
    let doc = document(&["cat and dog"]);
    let clusters = vec![phrases(&["cat", "unicorn"])];
    let scores = [("cat", 0.3), ("unicorn", 0.8)];

    let (by_position, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Position);
    let err = by_position.ordering(&weights(&scores), &clusters).unwrap_err();
    assert!(matches!(err, Error::MissingOccurrence { ref phrase } if phrase == "unicorn"));

    // centroid ordering never reads the document
    let (by_centroid, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Centroid);
    assert_eq!(by_centroid.ordering(&weights(&scores), &clusters).unwrap().len(), 1);
}

#[test]
fn test_word_boundary_from_config() {
    let doc = document(&["catalog of things", "a cat"]);
    let clusters = vec![phrases(&["cat", "catalog"])];
    let scores = [("cat", 0.9), ("catalog", 0.1)];
    let w = weights(&scores);

    let (substring, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Position);
    assert_eq!(ranked_phrases(&substring.ordering(&w, &clusters).unwrap()), vec!["cat"]);

    let config = RankerConfig::default().with_matching(PhraseMatching::WordBoundary);
    let (bounded, _) = topic_ranker(&doc, &clusters, &scores, OrderingCriterion::Position);
    let bounded = bounded.with_matching(config.phrase_matching().unwrap());
    assert_eq!(ranked_phrases(&bounded.ordering(&w, &clusters).unwrap()), vec!["catalog"]);
}

#[test]
fn test_request_carries_document_text_and_params() {
    let doc = cat_dog_document();
    let clusters = vec![phrases(&["cat"]), phrases(&["dog"])];
    let (mut ranker, log) = topic_ranker(&doc, &clusters, &[], OrderingCriterion::Position);

    ranker
        .weighting(&doc, &phrases(&["cat", "dog"]), &clusters)
        .unwrap();

    let requests = log.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].full_text, "the/DT cat/NN sat/VBD\nthe/DT dog/NN ran/VBD");
    assert_eq!(requests[0].candidates, phrases(&["cat", "dog"]));
    assert_eq!(requests[0].clusters.as_deref(), Some(clusters.as_slice()));
    assert_eq!(requests[0].params.damping, 0.85);
    assert_eq!(requests[0].params.tolerance, 0.0001);
    assert_eq!(requests[0].params.max_iterations, 1_000_000);
    assert_eq!(requests[0].scoring, "sum");
}

#[test]
fn test_configured_scoring_reaches_engine() {
    let doc = document(&["graph model ranks", "the model"]);
    let config = RankerConfig::default().with_scoring(ScoringMethod::Mean);
    let engine = StaticEngine::from_word_weights(
        StaticStrategy::word(SEP, doc.sentences().to_vec()),
        &[("graph", 0.6), ("model", 0.2), ("ranks", 0.1)],
    );
    let log = engine.requests();
    let mut ranker = KeyphraseRanker::from_config(Box::new(engine), &config).unwrap();

    let w = ranker
        .weighting(&doc, &phrases(&["graph model", "ranks"]), &[])
        .unwrap();
    assert!((w.get("graph model").unwrap() - 0.4).abs() < 1e-12);
    assert!((w.get("ranks").unwrap() - 0.1).abs() < 1e-12);
    assert_eq!(log.lock()[0].scoring, "mean");

    let ranking = ranker.ordering(&w, &[]).unwrap();
    assert_eq!(ranked_phrases(&ranking), vec!["graph model", "ranks"]);
}
