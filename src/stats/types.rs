//! Type definitions for text statistics

use std::fmt;

use super::counter;

/// Statistics computed from a single text
///
/// Snapshots are immutable values recomputed from scratch on every edit.
/// The default snapshot is the one computed from the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatisticsSnapshot {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Empty when the text has no words
    pub most_common_word: String,
}

impl StatisticsSnapshot {
    /// Run every counter over `text`
    pub fn compute(text: &str) -> Self {
        Self {
            word_count: counter::count_words(text),
            sentence_count: counter::count_sentences(text),
            paragraph_count: counter::count_paragraphs(text),
            most_common_word: counter::most_common_word(text),
        }
    }

    /// True if this is the snapshot of an empty text
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Words: {}  Sentences: {}  Paragraphs: {}",
            self.word_count, self.sentence_count, self.paragraph_count
        )
    }
}
