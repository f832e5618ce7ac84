//! First-position and frequency analysis over a document
//!
//! Sentences are scanned once, in reading order. Each sentence is untagged
//! and every phrase is searched in it:
//!
//! - the first sentence containing a phrase fixes its first position at
//!   `accumulated_length + match_index + 1`, where `accumulated_length` is the
//!   total untagged length of the preceding sentences;
//! - every sentence containing a phrase adds one to its frequency, however
//!   many times the phrase occurs inside that sentence.
//!
//! Offsets and lengths are byte counts of the untagged text. Sentences are
//! concatenated without separators when accumulating, so the offsets are a
//! monotone ordering key rather than positions in any real string.

use keyrank_core::{Error, PhraseMatching, Result, TaggedSentence};
use std::collections::HashMap;

use crate::tagging::untag_phrase;

/// Where and how often phrases occur in a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentOccurrences {
    first_positions: HashMap<String, usize>,
    frequencies: HashMap<String, f64>,
}

impl DocumentOccurrences {
    /// Scan `sentences` for every phrase of `phrases`
    ///
    /// Phrases that never match get no entry at all.
    pub fn scan<S: AsRef<str>>(
        sentences: &[TaggedSentence],
        phrases: &[S],
        tag_separator: &str,
        matching: PhraseMatching,
    ) -> Self {
        let mut occurrences = DocumentOccurrences::default();
        let mut accumulated = 0usize;

        for sentence in sentences {
            let untagged = untag_phrase(sentence.as_str(), tag_separator);

            for phrase in phrases {
                let phrase = phrase.as_ref();
                if let Some(pos) = find_phrase(&untagged, phrase, matching) {
                    occurrences
                        .first_positions
                        .entry(phrase.to_string())
                        .or_insert(accumulated + pos + 1);
                    *occurrences
                        .frequencies
                        .entry(phrase.to_string())
                        .or_insert(0.0) += 1.0;
                }
            }

            accumulated += untagged.len();
        }

        occurrences
    }

    /// First-occurrence offset of `phrase`
    ///
    /// # Errors
    ///
    /// [`Error::MissingOccurrence`] if the phrase was never found.
    pub fn first_position(&self, phrase: &str) -> Result<usize> {
        self.first_positions
            .get(phrase)
            .copied()
            .ok_or_else(|| Error::missing_occurrence(phrase))
    }

    /// Number of sentences containing `phrase`
    ///
    /// # Errors
    ///
    /// [`Error::MissingOccurrence`] if the phrase was never found.
    pub fn frequency(&self, phrase: &str) -> Result<f64> {
        self.frequencies
            .get(phrase)
            .copied()
            .ok_or_else(|| Error::missing_occurrence(phrase))
    }

    /// Whether `phrase` was found at least once
    pub fn contains(&self, phrase: &str) -> bool {
        self.first_positions.contains_key(phrase)
    }

    /// Number of distinct phrases found
    pub fn len(&self) -> usize {
        self.first_positions.len()
    }

    /// Whether no phrase was found
    pub fn is_empty(&self) -> bool {
        self.first_positions.is_empty()
    }
}

/// Byte index of the first match of `phrase` in `sentence`
pub fn find_phrase(sentence: &str, phrase: &str, matching: PhraseMatching) -> Option<usize> {
    match matching {
        PhraseMatching::Substring => sentence.find(phrase),
        PhraseMatching::WordBoundary => sentence
            .match_indices(phrase)
            .map(|(start, _)| start)
            .find(|&start| on_word_boundary(sentence, start, start + phrase.len())),
    }
}

fn on_word_boundary(sentence: &str, start: usize, end: usize) -> bool {
    let bytes = sentence.as_bytes();
    let starts_word = start == 0 || bytes[start - 1] == b' ';
    let ends_word = end == bytes.len() || bytes[end] == b' ';
    starts_word && ends_word
}
