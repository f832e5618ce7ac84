//! Word-overlap similarity between phrases

use keyrank_core::SimilarityError;
use std::collections::HashSet;

/// Overlap coefficient of the word sets of two phrases
///
/// `|A ∩ B| / min(|A|, |B|)`, in `[0, 1]`. Symmetric, and `1.0` whenever one
/// phrase's words are a subset of the other's.
///
/// # Errors
///
/// [`SimilarityError::EmptyPhrase`] when either phrase has no words.
pub fn word_overlap_similarity(a: &str, b: &str) -> Result<f64, SimilarityError> {
    let a: HashSet<&str> = a.split_whitespace().collect();
    let b: HashSet<&str> = b.split_whitespace().collect();

    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return Err(SimilarityError::EmptyPhrase);
    }

    let shared = a.intersection(&b).count();
    Ok(shared as f64 / smaller as f64)
}
