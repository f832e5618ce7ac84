//! Cluster centroid selection
//!
//! The centroid is the member whose stemmed form has the greatest average
//! word-overlap similarity to every member of the cluster, itself included.
//! Averages divide by the cluster size. A failed similarity (empty phrase)
//! counts as zero. Ties keep the first maximum encountered.

use keyrank_core::Stemmer;

use crate::similarity::word_overlap_similarity;
use crate::tagging::stem_tagged_phrase;

/// Position of the centroid within a cluster of tagged phrases
///
/// Returns `None` for an empty cluster.
pub fn centroid_index<S: AsRef<str>>(
    cluster: &[S],
    tag_separator: &str,
    stemmer: &dyn Stemmer,
) -> Option<usize> {
    let stems: Vec<String> = cluster
        .iter()
        .map(|term| stem_tagged_phrase(term.as_ref(), tag_separator, stemmer))
        .collect();
    let size = stems.len() as f64;

    let mut best: Option<(usize, f64)> = None;
    for (i, stem) in stems.iter().enumerate() {
        let total: f64 = stems
            .iter()
            .map(|other| word_overlap_similarity(stem, other).unwrap_or(0.0))
            .sum();
        let average = total / size;

        // strict: a later equal average never replaces the current best
        if best.map_or(true, |(_, max)| average > max) {
            best = Some((i, average));
        }
    }

    best.map(|(i, _)| i)
}

/// The centroid member of a cluster of tagged phrases
pub fn cluster_centroid<'a, S: AsRef<str>>(
    cluster: &'a [S],
    tag_separator: &str,
    stemmer: &dyn Stemmer,
) -> Option<&'a str> {
    centroid_index(cluster, tag_separator, stemmer).map(|i| cluster[i].as_ref())
}
