//! Component construction from config files and the lazy ranking cache.

use std::fs;

use keyrank::{CachedRanking, CONFIG_FILE_NAME};
use tempfile::TempDir;

use crate::common::*;

#[test]
fn test_component_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    cache_config(&dir.path().join("cache"))
        .with_name("topicrank")
        .with_ordering(OrderingCriterion::Frequency)
        .write_to_file(&path)
        .unwrap();

    let config = RankerConfig::from_file(&path).unwrap();
    assert_eq!(config.name, "topicrank");
    assert!(config.lazy);

    // alpha occurs in both sentences, beta in one
    let doc = document(&["alpha beta", "alpha"]);
    let clusters = vec![phrases(&["alpha", "beta"])];
    let engine = StaticEngine::new(
        StaticStrategy::topic(
            SEP,
            doc.sentences().to_vec(),
            vec![vec![tag_words("alpha"), tag_words("beta")]],
        ),
        vec![("alpha".to_string(), 0.3), ("beta".to_string(), 0.6)],
    );
    let ranker = KeyphraseRanker::from_config(Box::new(engine), &config).unwrap();
    assert_eq!(ranker.criterion(), OrderingCriterion::Frequency);

    let mut component = RankerComponent::new(config, ranker).unwrap();
    let ranking = component
        .rank_document("doc-1", &doc, &phrases(&["alpha", "beta"]), &clusters)
        .unwrap();
    assert_eq!(ranking, vec![RankedPhrase::new("beta", 0.6)]);

    let cached = dir
        .path()
        .join("cache")
        .join("topicrank")
        .join("doc-1.ranking.json");
    assert!(cached.exists());
}

#[test]
fn test_config_file_rejects_differently_built_ranker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    RankerConfig::default()
        .with_ordering(OrderingCriterion::Frequency)
        .write_to_file(&path)
        .unwrap();
    let config = RankerConfig::from_file(&path).unwrap();

    let doc = document(&["alpha beta", "alpha"]);
    let clusters = vec![phrases(&["alpha", "beta"])];
    let (ranker, log) = topic_ranker(
        &doc,
        &clusters,
        &[("alpha", 0.3), ("beta", 0.6)],
        OrderingCriterion::Position,
    );

    let err = RankerComponent::new(config.clone(), ranker).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert!(log.lock().is_empty());

    let engine = StaticEngine::new(
        StaticStrategy::topic(
            SEP,
            doc.sentences().to_vec(),
            vec![vec![tag_words("alpha"), tag_words("beta")]],
        ),
        vec![("alpha".to_string(), 0.3), ("beta".to_string(), 0.6)],
    );
    let mut component = RankerComponent::from_engine(config, Box::new(engine)).unwrap();
    let ranking = component
        .rank_document("doc-1", &doc, &phrases(&["alpha", "beta"]), &clusters)
        .unwrap();
    assert_eq!(ranked_phrases(&ranking), vec!["beta"]);
}

#[test]
fn test_cache_shared_between_components() {
    let dir = TempDir::new().unwrap();
    let doc = cat_dog_document();
    let candidates = phrases(&["cat", "dog"]);

    let (first_ranker, first_log) =
        word_ranker(&doc, &[("cat", 0.7), ("dog", 0.3)], OrderingCriterion::Position);
    let mut first = RankerComponent::new(cache_config(dir.path()), first_ranker).unwrap();
    let stored = first.rank_document("doc-1", &doc, &candidates, &[]).unwrap();
    assert_eq!(first_log.lock().len(), 1);

    // a second component with different engine scores reuses the stored ranking
    let (second_ranker, second_log) =
        word_ranker(&doc, &[("cat", 0.1), ("dog", 0.9)], OrderingCriterion::Position);
    let mut second = RankerComponent::new(cache_config(dir.path()), second_ranker).unwrap();
    let loaded = second.rank_document("doc-1", &doc, &candidates, &[]).unwrap();

    assert_eq!(loaded, stored);
    assert!(second_log.lock().is_empty());

    // an unseen document is ranked by the second engine
    let fresh = second.rank_document("doc-2", &doc, &candidates, &[]).unwrap();
    assert_eq!(ranked_phrases(&fresh), vec!["dog", "cat"]);
    assert_eq!(second_log.lock().len(), 1);
}

#[test]
fn test_cache_file_contents() {
    let dir = TempDir::new().unwrap();
    let doc = cat_dog_document();
    let (ranker, _) = word_ranker(&doc, &[("dog", 0.3), ("cat", 0.7)], OrderingCriterion::Position);
    let mut component = RankerComponent::new(cache_config(dir.path()), ranker).unwrap();

    component
        .rank_document("batch/doc-7", &doc, &phrases(&["cat", "dog"]), &[])
        .unwrap();

    let path = component.cache_path("batch/doc-7").unwrap();
    assert_eq!(path.file_name().unwrap(), "batch_doc-7.ranking.json");

    let cached: CachedRanking = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    // weights keep engine order, the ranking is sorted
    let weight_order: Vec<&str> = cached.weights.iter().map(|(p, _)| p).collect();
    assert_eq!(weight_order, vec!["dog", "cat"]);
    assert_eq!(ranked_phrases(&cached.ranking), vec!["cat", "dog"]);
}

#[test]
fn test_engine_error_stores_nothing() {
    let dir = TempDir::new().unwrap();
    let engine = StaticEngine::failing(StaticStrategy::word(SEP, vec![]), "no graph");
    let ranker = KeyphraseRanker::new(Box::new(engine), OrderingCriterion::Position);
    let mut component = RankerComponent::new(cache_config(dir.path()), ranker).unwrap();

    let err = component
        .rank_document("doc-1", &cat_dog_document(), &phrases(&["cat"]), &[])
        .unwrap_err();
    assert!(matches!(err, Error::Engine(_)));
    assert!(!component.cache_path("doc-1").unwrap().exists());
}
