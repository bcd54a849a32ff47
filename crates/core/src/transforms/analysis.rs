//! Counting and frequency reports.

use super::{sentences, sorted_by_count, word_tokens, yes_no};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

const COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those", "i", "you", "he",
    "she", "it", "we", "they",
];

/// Basic counts shared by the word counter and the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    /// Whitespace-separated tokens.
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    /// Non-blank blocks separated by an empty line.
    pub paragraphs: usize,
    pub lines: usize,
}

impl TextCounts {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            sentences: sentences(text).len(),
            paragraphs: PARAGRAPH_BREAK
                .split(text)
                .filter(|p| !p.trim().is_empty())
                .count(),
            lines: text.split('\n').count(),
        }
    }

    /// Words per sentence, 0 when there are no sentences.
    pub fn words_per_sentence(&self) -> f64 {
        ratio(self.words, self.sentences)
    }

    pub fn characters_per_word(&self) -> f64 {
        ratio(self.characters_no_spaces, self.words)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Like `{:.1}` but prints a bare `0` for an undefined average.
fn average(value: f64, defined: bool) -> String {
    if defined {
        format!("{value:.1}")
    } else {
        "0".to_string()
    }
}

// ============================================================================
// Word counter / statistics
// ============================================================================

pub fn word_count(text: &str) -> String {
    let counts = TextCounts::of(text);
    format!(
        "Words: {}\nCharacters: {}\nCharacters (no spaces): {}\nParagraphs: {}\nLines: {}\nAverage words per sentence: {:.1}",
        counts.words,
        counts.characters,
        counts.characters_no_spaces,
        counts.paragraphs,
        counts.lines,
        counts.words_per_sentence(),
    )
}

pub fn text_statistics(text: &str) -> String {
    let counts = TextCounts::of(text);

    let cleaned = text.split_whitespace().map(|word| {
        word.to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect::<String>()
    });
    let top_words = sorted_by_count(cleaned.filter(|word| !word.is_empty()));

    let mut out = String::from("=== TEXT STATISTICS ===\n\n");
    out.push_str("Basic Counts:\n");
    let _ = writeln!(out, "• Words: {}", counts.words);
    let _ = writeln!(out, "• Characters: {}", counts.characters);
    let _ = writeln!(out, "• Characters (no spaces): {}", counts.characters_no_spaces);
    let _ = writeln!(out, "• Sentences: {}", counts.sentences);
    let _ = writeln!(out, "• Paragraphs: {}", counts.paragraphs);
    let _ = writeln!(out, "• Lines: {}\n", counts.lines);

    out.push_str("Averages:\n");
    let _ = writeln!(
        out,
        "• Words per sentence: {}",
        average(counts.words_per_sentence(), counts.sentences > 0)
    );
    let _ = writeln!(
        out,
        "• Characters per word: {}\n",
        average(counts.characters_per_word(), counts.words > 0)
    );

    out.push_str("Top 10 Most Frequent Words:\n");
    for (index, (word, count)) in top_words.iter().take(10).enumerate() {
        let _ = writeln!(out, "{}. \"{word}\" - {count} times", index + 1);
    }

    out
}

// ============================================================================
// Word frequency
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFrequencyOptions {
    pub min_word_length: usize,
    pub case_insensitive: bool,
    pub ignore_common: bool,
}

pub fn word_frequency(text: &str, options: WordFrequencyOptions) -> String {
    let words: Vec<String> = word_tokens(text)
        .into_iter()
        .map(|word| {
            if options.case_insensitive {
                word.to_lowercase()
            } else {
                word.to_string()
            }
        })
        .filter(|word| word.chars().count() >= options.min_word_length)
        .filter(|word| !options.ignore_common || !COMMON_WORDS.contains(&word.to_lowercase().as_str()))
        .collect();

    let total = words.len();
    let frequencies = sorted_by_count(words);

    let mut out = String::from("Word Frequency Analysis\n========================\n\n");
    let _ = writeln!(out, "Total words analyzed: {total}");
    let _ = writeln!(out, "Unique words: {}", frequencies.len());
    let _ = writeln!(out, "Minimum word length: {}\n", options.min_word_length);

    out.push_str("Top Word Frequencies:\n---------------------\n");
    for (index, (word, count)) in frequencies.iter().take(20).enumerate() {
        let percentage = ratio(*count, total) * 100.0;
        let _ = writeln!(out, "{}. \"{word}\" - {count} times ({percentage:.2}%)", index + 1);
    }

    out
}

// ============================================================================
// Character frequency
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharFrequencyOptions {
    pub include_spaces: bool,
    pub case_sensitive: bool,
    pub show_percentages: bool,
}

fn display_char(symbol: &str) -> &str {
    match symbol {
        " " => "[SPACE]",
        "\n" => "[NEWLINE]",
        "\t" => "[TAB]",
        other => other,
    }
}

pub fn char_frequency(text: &str, options: CharFrequencyOptions) -> String {
    let symbols: Vec<String> = text
        .chars()
        .filter(|c| options.include_spaces || *c != ' ')
        .map(|c| {
            if options.case_sensitive {
                c.to_string()
            } else {
                c.to_lowercase().collect()
            }
        })
        .collect();

    let total = symbols.len();
    let frequencies = sorted_by_count(symbols);

    let mut out = String::from("Character Frequency Analysis\n============================\n\n");
    let _ = writeln!(out, "Total characters: {total}");
    let _ = writeln!(out, "Unique characters: {}", frequencies.len());
    let _ = writeln!(out, "Include spaces: {}", yes_no(options.include_spaces));
    let _ = writeln!(out, "Case sensitive: {}\n", yes_no(options.case_sensitive));

    out.push_str("Character Frequencies:\n----------------------\n");
    for (index, (symbol, count)) in frequencies.iter().enumerate() {
        let percentage = if options.show_percentages {
            format!(" ({:.2}%)", ratio(*count, total) * 100.0)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{}. \"{}\" - {count} times{percentage}",
            index + 1,
            display_char(symbol)
        );
    }

    out
}

// ============================================================================
// Readability
// ============================================================================

/// Approximate syllables in an English word.
///
/// Short words count as one; a trailing silent `e`/`es`/`ed` and a leading
/// `y` are dropped before counting vowel groups.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let word = SILENT_SUFFIX.replace(&word, "");
    let word = word.strip_prefix('y').unwrap_or(&word);
    VOWEL_GROUP.find_iter(word).count().max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadabilityReport {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub words_per_sentence: f64,
    pub syllables_per_word: f64,
    /// Flesch Reading Ease.
    pub score: f64,
    /// Flesch-Kincaid grade, floored at 0.
    pub grade_level: f64,
    pub level: &'static str,
}

impl ReadabilityReport {
    pub fn of(text: &str) -> Self {
        let sentences = sentences(text).len();
        let words = word_tokens(text);
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

        let words_per_sentence = ratio(words.len(), sentences);
        let syllables_per_word = ratio(syllables, words.len());

        let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let grade_level = (0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59).max(0.0);

        Self {
            sentences,
            words: words.len(),
            syllables,
            words_per_sentence,
            syllables_per_word,
            score,
            grade_level,
            level: reading_level(score),
        }
    }
}

pub fn reading_level(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "Very Easy (5th grade)",
        s if s >= 80.0 => "Easy (6th grade)",
        s if s >= 70.0 => "Fairly Easy (7th grade)",
        s if s >= 60.0 => "Standard (8th-9th grade)",
        s if s >= 50.0 => "Fairly Difficult (10th-12th grade)",
        s if s >= 30.0 => "Difficult (College level)",
        _ => "Very Difficult (Graduate level)",
    }
}

pub fn readability(text: &str) -> String {
    let report = ReadabilityReport::of(text);

    let mut out = String::from("Readability Analysis\n===================\n\n");
    out.push_str("Text Statistics:\n");
    let _ = writeln!(out, "• Sentences: {}", report.sentences);
    let _ = writeln!(out, "• Words: {}", report.words);
    let _ = writeln!(out, "• Syllables: {}", report.syllables);
    let _ = writeln!(out, "• Average words per sentence: {:.2}", report.words_per_sentence);
    let _ = writeln!(out, "• Average syllables per word: {:.2}\n", report.syllables_per_word);
    out.push_str("Readability Scores:\n");
    let _ = writeln!(out, "• Flesch Reading Ease: {:.1}", report.score);
    let _ = writeln!(out, "• Reading Level: {}", report.level);
    let _ = writeln!(out, "• Flesch-Kincaid Grade Level: {:.1}", report.grade_level);

    out
}
