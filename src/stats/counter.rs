//! Single-pass text counters
//!
//! Every function here is a pure, total function of its input: it never
//! panics, holds no state between calls, and scans the text left to right once.

use std::collections::HashMap;

/// Characters that end a sentence
const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Count maximal runs of non-whitespace characters
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences
///
/// Non-empty text always holds at least one sentence. A terminator seen
/// after a letter arms a pending boundary, and the next letter consumes it
/// and adds a sentence. A terminator with no letter after it adds nothing,
/// so `"Hello."` is one sentence and `"Hi. Bye."` is two.
pub fn count_sentences(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut sentences = 1;
    let mut inside_word = false;
    let mut pending_boundary = false;

    for ch in text.chars() {
        if TERMINATORS.contains(&ch) {
            if inside_word {
                pending_boundary = true;
            }
            inside_word = false;
        } else if ch.is_alphabetic() {
            inside_word = true;
            if pending_boundary {
                sentences += 1;
                pending_boundary = false;
            }
        }
    }

    sentences
}

/// Count paragraphs
///
/// A break needs two consecutive `'\n'` with letter content since the start
/// or the previous break. The paragraph is only counted once a letter
/// follows the break, so further newlines in the same run add nothing.
pub fn count_paragraphs(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut paragraphs = 1;
    let mut prev_newline = false;
    let mut has_content = false;
    let mut pending_break = false;

    for ch in text.chars() {
        if ch == '\n' {
            if prev_newline && has_content {
                pending_break = true;
                prev_newline = false;
                has_content = false;
                continue;
            }
            prev_newline = true;
            continue;
        }

        prev_newline = false;
        if ch.is_alphabetic() {
            has_content = true;
            if pending_break {
                paragraphs += 1;
                pending_break = false;
            }
        }
    }

    paragraphs
}

/// Find the most frequent whitespace-separated token
///
/// Tokens are compared exactly (case and punctuation included). The winner
/// is the first token to reach a new strict maximum, so ties go to the word
/// that got there first. Returns an empty string when there are no words.
pub fn most_common_word(text: &str) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut max_count = 0;
    let mut most_common = "";

    for word in text.split_whitespace() {
        let count = counts.entry(word).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            most_common = word;
        }
    }

    most_common.to_string()
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod counter_tests;
