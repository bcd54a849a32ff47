//! Pure transform functions, one per tool, grouped by domain.
//!
//! Every function here takes plain values (text plus the options it needs)
//! and returns a `String` or a [`TransformError`](crate::error::TransformError).
//! None of them read configuration, touch I/O or keep state between calls;
//! randomized generators take the random source as an argument.

pub mod analysis;
pub mod ascii_art;
pub mod case;
pub mod cleanup;
pub mod color;
pub mod diff;
pub mod encoding;
pub mod generate;
pub mod hash;
pub mod json;
pub mod lines;
pub mod markup;
pub mod pattern;
pub mod seo;
pub mod xml;

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Word tokens as `\b\w+\b` sees them (punctuation never part of a word).
pub(crate) fn word_tokens(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Non-empty sentences, split on runs of `.`, `!` and `?`.
pub(crate) fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Converts byte offsets into character offsets.
///
/// Offsets asked for in ascending order cost one pass over the text in
/// total; asking for an earlier offset rescans from the start.
pub(crate) struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, byte: 0, chars: 0 }
    }

    /// Count of characters before byte offset `byte_idx`.
    pub(crate) fn at(&mut self, byte_idx: usize) -> usize {
        if byte_idx < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte_idx].chars().count();
        self.byte = byte_idx;
        self.chars
    }
}

/// Entries of a frequency table sorted by descending count; ties keep first-seen order.
pub(crate) fn sorted_by_count<K: Clone + Eq + std::hash::Hash>(
    items: impl IntoIterator<Item = K>,
) -> Vec<(K, usize)> {
    let mut order: Vec<(K, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(item.clone(), order.len());
                order.push((item, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}
