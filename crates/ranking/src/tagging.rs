//! Tag stripping and stemming of POS-tagged phrases
//!
//! A tagged token binds a word to its tag through a separator (`cat/NN`).
//! The tag is whatever follows the LAST separator, so words that contain
//! the separator themselves survive untagging (`and/or/CC` → `and/or`).

use keyrank_core::Stemmer;

/// Tag attached to every word of a synthetically tagged phrase
pub const PLACEHOLDER_TAG: &str = "fk";

/// Word part of a tagged token
#[inline]
pub fn untag_word<'a>(token: &'a str, tag_separator: &str) -> &'a str {
    token
        .rsplit_once(tag_separator)
        .map_or(token, |(word, _tag)| word)
}

/// Drop the tags of a tagged phrase, rejoining words with single spaces
pub fn untag_phrase(tagged: &str, tag_separator: &str) -> String {
    tagged
        .split_whitespace()
        .map(|token| untag_word(token, tag_separator))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stemmed, untagged form of a tagged phrase
pub fn stem_tagged_phrase(tagged: &str, tag_separator: &str, stemmer: &dyn Stemmer) -> String {
    tagged
        .split_whitespace()
        .map(|token| stemmer.stem(untag_word(token, tag_separator)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tag every word of an untagged phrase with [`PLACEHOLDER_TAG`]
pub fn fake_tag_phrase(phrase: &str, tag_separator: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| format!("{}{}{}", word, tag_separator, PLACEHOLDER_TAG))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-separated words
#[inline]
pub fn word_count(phrase: &str) -> usize {
    phrase.split_whitespace().count()
}
