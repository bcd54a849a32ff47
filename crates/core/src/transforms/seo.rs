//! SEO and writing helpers: keyword density, meta tags, title checks,
//! a toy grammar checker and a repeated-phrase finder.

use super::{sentences, word_tokens, CharOffsets};
use crate::error::TransformError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

// ============================================================================
// Keyword density
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordDensity {
    pub total_words: usize,
    /// Whole-word occurrences of the keyword.
    pub exact_matches: usize,
    /// Words that contain the keyword without being equal to it.
    pub partial_matches: usize,
    /// Percentage of all words that are exact matches.
    pub density: f64,
    /// Character offsets of each exact match, in document order.
    pub positions: Vec<usize>,
}

impl KeywordDensity {
    pub fn measure(text: &str, keyword: &str, case_insensitive: bool) -> Result<Self, TransformError> {
        let words = word_tokens(text);
        let fold = |s: &str| {
            if case_insensitive {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };
        let needle = fold(keyword);

        // An escaped keyword only fails to build when it exceeds the regex size limit.
        let re = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| TransformError::InvalidPattern(format!("Keyword cannot be searched: {e}")))?;
        let mut offsets = CharOffsets::new(text);
        let positions: Vec<usize> = re.find_iter(text).map(|m| offsets.at(m.start())).collect();

        let partial_matches = words
            .iter()
            .map(|w| fold(*w))
            .filter(|w| w.contains(&needle) && *w != needle)
            .count();

        let density = if words.is_empty() {
            0.0
        } else {
            positions.len() as f64 / words.len() as f64 * 100.0
        };

        Ok(Self {
            total_words: words.len(),
            exact_matches: positions.len(),
            partial_matches,
            density,
            positions,
        })
    }

    pub fn recommendation(&self, keyword: &str) -> String {
        if self.density < 0.5 {
            format!("Density is too low. Consider adding more instances of \"{keyword}\"")
        } else if self.density > 3.0 {
            "Density is too high. Risk of keyword stuffing. Consider reducing usage.".to_string()
        } else {
            "Keyword density is within optimal range (0.5% - 3%)".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordOptions<'a> {
    pub keyword: &'a str,
    pub min_keyword_length: usize,
    pub case_insensitive: bool,
    pub show_positions: bool,
}

pub fn keyword_density(text: &str, options: &KeywordOptions<'_>) -> Result<String, TransformError> {
    let keyword = options.keyword;
    if keyword.trim().is_empty() {
        return Ok("Please enter a target keyword to analyze.".to_string());
    }
    if keyword.trim().chars().count() < options.min_keyword_length {
        return Ok(format!(
            "Keyword \"{keyword}\" is shorter than the minimum keyword length ({}).",
            options.min_keyword_length
        ));
    }

    let report = KeywordDensity::measure(text, keyword, options.case_insensitive)?;

    let mut out = String::from("Keyword Density Analysis\n========================\n\n");
    let _ = writeln!(out, "Target Keyword: \"{keyword}\"");
    let _ = writeln!(out, "Total Words: {}", report.total_words);
    let _ = writeln!(out, "Exact Matches: {}", report.exact_matches);
    let _ = writeln!(out, "Partial Matches: {}", report.partial_matches);
    let _ = writeln!(out, "Keyword Density: {:.2}%\n", report.density);

    out.push_str("SEO Recommendations:\n--------------------\n");
    let _ = writeln!(out, "• {}", report.recommendation(keyword));

    if options.show_positions && !report.positions.is_empty() {
        out.push_str("\nKeyword Positions:\n------------------\n");
        for (index, position) in report.positions.iter().enumerate() {
            let _ = writeln!(out, "{}. Position {position}", index + 1);
        }
    }

    Ok(out)
}

// ============================================================================
// Meta tags
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTagOptions<'a> {
    pub page_title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
    pub author: &'a str,
    pub robots: &'a str,
}

const MAX_TITLE: usize = 60;
const MAX_DESCRIPTION: usize = 160;

pub fn meta_tags(options: &MetaTagOptions<'_>) -> String {
    let title = options.page_title;
    let description = options.description;

    let mut out = String::from("Generated Meta Tags\n==================\n\n");
    out.push_str("Copy and paste these meta tags into your HTML <head> section:\n\n");

    out.push_str("<!-- Basic Meta Tags -->\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    if !title.is_empty() {
        let _ = writeln!(out, "<title>{title}</title>");
        let _ = writeln!(out, "<meta property=\"og:title\" content=\"{title}\">");
    }
    if !description.is_empty() {
        let _ = writeln!(out, "<meta name=\"description\" content=\"{description}\">");
        let _ = writeln!(out, "<meta property=\"og:description\" content=\"{description}\">");
    }
    if !options.keywords.is_empty() {
        let _ = writeln!(out, "<meta name=\"keywords\" content=\"{}\">", options.keywords);
    }
    if !options.author.is_empty() {
        let _ = writeln!(out, "<meta name=\"author\" content=\"{}\">", options.author);
    }
    let _ = writeln!(out, "<meta name=\"robots\" content=\"{}\">\n", options.robots);

    out.push_str("<!-- Open Graph Meta Tags -->\n");
    out.push_str("<meta property=\"og:type\" content=\"website\">\n");
    out.push_str("<meta property=\"og:url\" content=\"https://yourwebsite.com\">\n");
    out.push_str("<meta property=\"og:site_name\" content=\"Your Site Name\">\n\n");

    out.push_str("<!-- Twitter Card Meta Tags -->\n");
    out.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
    out.push_str("<meta name=\"twitter:site\" content=\"@yourtwitterhandle\">\n");
    if !title.is_empty() {
        let _ = writeln!(out, "<meta name=\"twitter:title\" content=\"{title}\">");
    }
    if !description.is_empty() {
        let _ = writeln!(out, "<meta name=\"twitter:description\" content=\"{description}\">");
    }

    out.push_str("\n<!-- Analysis -->\n");
    if !title.is_empty() {
        let length = title.chars().count();
        let verdict = if length > MAX_TITLE {
            "(Too long - recommended max 60)"
        } else {
            "(Good)"
        };
        let _ = writeln!(out, "Title Length: {length} characters {verdict}");
    }
    if !description.is_empty() {
        let length = description.chars().count();
        let verdict = if length > MAX_DESCRIPTION {
            "(Too long - recommended max 160)"
        } else {
            "(Good)"
        };
        let _ = writeln!(out, "Description Length: {length} characters {verdict}");
    }

    out
}

// ============================================================================
// Title & description optimizer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOptions<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub focus_keyword: &'a str,
}

fn keyword_presence(out: &mut String, subject: &str, keyword: &str) {
    if keyword.is_empty() {
        return;
    }
    if subject.to_lowercase().contains(&keyword.to_lowercase()) {
        out.push_str("Focus keyword present: ✓\n");
    } else {
        let _ = writeln!(out, "Focus keyword missing: Consider adding \"{keyword}\"");
    }
}

pub fn title_optimizer(options: &TitleOptions<'_>) -> String {
    let mut out = String::from("SEO Title & Description Analysis\n=================================\n\n");

    if !options.title.is_empty() {
        let length = options.title.chars().count();
        out.push_str("Title Analysis:\n---------------\n");
        let _ = writeln!(out, "Title: \"{}\"", options.title);
        let _ = writeln!(out, "Length: {length} characters");
        let status = match length {
            0..=29 => "Too short (recommended: 50-60 characters)",
            30..=60 => "Good length ✓",
            _ => "Too long (may be truncated in search results)",
        };
        let _ = writeln!(out, "Status: {status}");
        keyword_presence(&mut out, options.title, options.focus_keyword);
        out.push('\n');
    }

    if !options.description.is_empty() {
        let length = options.description.chars().count();
        out.push_str("Meta Description Analysis:\n--------------------------\n");
        let _ = writeln!(out, "Description: \"{}\"", options.description);
        let _ = writeln!(out, "Length: {length} characters");
        let status = match length {
            0..=119 => "Too short (recommended: 150-160 characters)",
            120..=160 => "Good length ✓",
            _ => "Too long (may be truncated in search results)",
        };
        let _ = writeln!(out, "Status: {status}");
        keyword_presence(&mut out, options.description, options.focus_keyword);
        out.push('\n');
    }

    out.push_str("SEO Recommendations:\n--------------------\n");
    out.push_str("• Include your focus keyword near the beginning of the title\n");
    out.push_str("• Make titles compelling and click-worthy\n");
    out.push_str("• Write unique titles and descriptions for each page\n");
    out.push_str("• Include a call-to-action in meta descriptions\n");
    out.push_str("• Use power words like \"Best\", \"Ultimate\", \"Complete\", \"Free\"\n");
    out.push_str("• Avoid keyword stuffing\n");

    out
}

// ============================================================================
// Grammar helper
// ============================================================================

const MISSPELLINGS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("adn", "and"),
    ("recieve", "receive"),
    ("seperate", "separate"),
    ("definately", "definitely"),
    ("occured", "occurred"),
    ("neccessary", "necessary"),
];

const PASSIVE_MARKERS: &[&str] = &["was", "were", "been", "being"];
const WEAK_MODIFIERS: &[&str] = &["very", "really", "quite", "rather", "somewhat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarOptions {
    pub check_spelling: bool,
    pub check_grammar: bool,
    pub suggest_improvements: bool,
}

/// Issues found by the enabled checks, in report order.
pub fn grammar_issues(text: &str, options: GrammarOptions) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words = word_tokens(text);
    let sentence_count = sentences(text).len();
    let words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        words.len() as f64 / sentence_count as f64
    };

    let mut issues = Vec::new();

    if options.check_spelling {
        for (mistake, fix) in MISSPELLINGS {
            if lowered.contains(mistake) {
                issues.push(format!("Possible spelling error: \"{mistake}\" → \"{fix}\""));
            }
        }
    }

    if options.check_grammar {
        if text.contains(" i ") || text.starts_with("i ") {
            issues.push("Consider capitalizing \"I\" when used as a pronoun".to_string());
        }
        if WHITESPACE_RUN.is_match(text) {
            issues.push("Multiple consecutive spaces found".to_string());
        }
        if words_per_sentence > 25.0 {
            issues.push("Some sentences may be too long (>25 words average)".to_string());
        }
    }

    if options.suggest_improvements {
        let lowered_words = word_tokens(&lowered);
        let passive = lowered_words
            .iter()
            .filter(|w| PASSIVE_MARKERS.contains(w))
            .count();
        if passive as f64 > words.len() as f64 * 0.1 {
            issues.push("Consider reducing passive voice usage".to_string());
        }

        for weak in WEAK_MODIFIERS {
            if lowered.contains(weak) {
                issues.push(format!("Consider replacing weak modifier: \"{weak}\""));
            }
        }
    }

    issues
}

pub fn grammar_check(text: &str, options: GrammarOptions) -> String {
    let words = word_tokens(text).len();
    let sentence_count = sentences(text).len();
    let average = if sentence_count == 0 {
        0.0
    } else {
        words as f64 / sentence_count as f64
    };

    let mut out = String::from("Grammar & Style Analysis\n========================\n\n");
    out.push_str("Text Statistics:\n");
    let _ = writeln!(out, "• Sentences: {sentence_count}");
    let _ = writeln!(out, "• Words: {words}");
    let _ = writeln!(out, "• Average words per sentence: {average:.1}\n");

    let issues = grammar_issues(text, options);
    if issues.is_empty() {
        out.push_str("No major issues found! ✓\n");
    } else {
        out.push_str("Issues Found:\n-------------\n");
        for (index, issue) in issues.iter().enumerate() {
            let _ = writeln!(out, "{}. {issue}", index + 1);
        }
    }

    out.push_str(
        "\nNote: This is a basic grammar checker. For comprehensive checking, consider using professional tools like Grammarly or ProWritingAid.",
    );
    out
}

// ============================================================================
// Repeated phrase finder
// ============================================================================

const COMMON_PHRASES: &[&str] = &[
    "in order to",
    "as well as",
    "in addition to",
    "on the other hand",
    "in conclusion",
    "for example",
    "such as",
    "in fact",
    "in other words",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlagiarismOptions {
    pub min_match_length: usize,
    pub ignore_common_phrases: bool,
    pub case_sensitive: bool,
}

/// Every `length`-word phrase that occurs more than once, with its count,
/// in order of first occurrence.
pub fn repeated_phrases(text: &str, length: usize, case_sensitive: bool) -> Vec<(String, usize)> {
    let words = word_tokens(text);
    if length == 0 || words.len() < length {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for window in words.windows(length) {
        let phrase = window.join(" ");
        let phrase = if case_sensitive { phrase } else { phrase.to_lowercase() };
        match index.get(&phrase) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(phrase.clone(), counts.len());
                counts.push((phrase, 1));
            }
        }
    }

    counts.retain(|(_, count)| *count > 1);
    counts
}

fn is_common_phrase(phrase: &str) -> bool {
    COMMON_PHRASES.iter().any(|common| phrase.contains(common))
}

pub fn plagiarism_check(text: &str, options: PlagiarismOptions) -> String {
    let mut out = String::from("Plagiarism Analysis\n==================\n\n");
    out.push_str("Note: This is a basic text similarity analyzer, not a comprehensive plagiarism detector.\n");
    out.push_str("For thorough plagiarism checking, use professional tools like Turnitin or Copyscape.\n\n");

    out.push_str("Text Analysis:\n");
    let _ = writeln!(out, "• Total sentences: {}", sentences(text).len());
    let _ = writeln!(out, "• Total words: {}", word_tokens(text).len());
    let _ = writeln!(out, "• Minimum match length: {} words\n", options.min_match_length);

    let repeated = repeated_phrases(text, options.min_match_length, options.case_sensitive);
    if repeated.is_empty() {
        out.push_str("No repeated phrases found within the text.\n");
    } else {
        out.push_str("Repeated Phrases Found:\n----------------------\n");
        for (phrase, count) in &repeated {
            if options.ignore_common_phrases && is_common_phrase(phrase) {
                continue;
            }
            let _ = writeln!(out, "\"{phrase}\" - appears {count} times");
        }
    }

    out.push_str("\nRecommendations:\n");
    out.push_str("• Use professional plagiarism checkers for academic or professional work\n");
    out.push_str("• Always cite sources properly\n");
    out.push_str("• Paraphrase content and add original insights\n");
    out.push_str("• Use quotation marks for direct quotes\n");
    out
}
