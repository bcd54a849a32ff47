//! Whitespace and punctuation clean-up tools.

use regex::{Captures, Regex, RegexBuilder};
use std::sync::LazyLock;

static BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static SPACE_BEFORE_STOP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([.!?])").unwrap());
static STOP_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.!?])\s*").unwrap());
static LOWER_SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[.!?]\s+)([a-z])").unwrap());
static MISSING_STOP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());

const PROPER_NOUNS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static PROPER_NOUN_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    PROPER_NOUNS
        .iter()
        .map(|noun| {
            let re = RegexBuilder::new(&format!(r"\b{noun}\b"))
                .case_insensitive(true)
                .build()
                .unwrap();
            (re, capitalize(noun))
        })
        .collect()
});

/// Collapse every whitespace run into one space and trim the ends.
pub fn remove_extra_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn remove_line_breaks(text: &str) -> String {
    let joined = text.replace('\n', " ");
    WHITESPACE.replace_all(&joined, " ").trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    pub remove_extra_spaces: bool,
    pub remove_line_breaks: bool,
    pub remove_special_chars: bool,
    pub trim_lines: bool,
}

/// Apply the enabled clean-up passes in a fixed order: trim lines, squeeze
/// blanks, join lines, then drop special characters.
pub fn clean_text(text: &str, options: CleanOptions) -> String {
    let mut result = text.to_string();

    if options.trim_lines {
        result = result.split('\n').map(str::trim).collect::<Vec<_>>().join("\n");
    }

    if options.remove_extra_spaces {
        result = BLANKS.replace_all(&result, " ").into_owned();
    }

    if options.remove_line_breaks {
        let joined = NEWLINES.replace_all(&result, " ");
        result = WHITESPACE.replace_all(&joined, " ").trim().to_string();
    }

    if options.remove_special_chars {
        result = SPECIAL.replace_all(&result, "").into_owned();
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub auto_capitalize: bool,
    pub fix_punctuation: bool,
    pub proper_nouns: bool,
    pub fix_spacing: bool,
}

pub fn smart_format(text: &str, options: FormatOptions) -> String {
    let mut result = text.to_string();

    if options.fix_spacing {
        result = remove_extra_spaces(&result);
        result = SPACE_BEFORE_STOP.replace_all(&result, "$1").into_owned();
        result = STOP_SPACING
            .replace_all(&result, "$1 ")
            .trim_end()
            .to_string();
    }

    if options.auto_capitalize {
        result = LOWER_SENTENCE_START
            .replace_all(&result, |caps: &Captures| {
                format!("{}{}", &caps[1], caps[2].to_uppercase())
            })
            .into_owned();
    }

    if options.fix_punctuation {
        result = MISSING_STOP.replace_all(&result, "${1}. ${2}").into_owned();
        result = SPACE_BEFORE_STOP.replace_all(&result, "$1").into_owned();
    }

    if options.proper_nouns {
        for (re, replacement) in PROPER_NOUN_PATTERNS.iter() {
            result = re.replace_all(&result, replacement.as_str()).into_owned();
        }
    }

    result
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLEAN: CleanOptions = CleanOptions {
        remove_extra_spaces: true,
        remove_line_breaks: true,
        remove_special_chars: true,
        trim_lines: true,
    };

    const NO_FORMAT: FormatOptions = FormatOptions {
        auto_capitalize: false,
        fix_punctuation: false,
        proper_nouns: false,
        fix_spacing: false,
    };

    // ============================================================================
    // remove_extra_spaces / remove_line_breaks tests
    // ============================================================================

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(remove_extra_spaces("  a   b\t\tc \n d  "), "a b c d");
    }

    #[test]
    fn test_remove_extra_spaces_is_idempotent() {
        let once = remove_extra_spaces(" x  y   z ");
        assert_eq!(remove_extra_spaces(&once), once);
    }

    #[test]
    fn test_remove_line_breaks() {
        assert_eq!(remove_line_breaks("one\ntwo\n\nthree  four"), "one two three four");
    }

    // ============================================================================
    // clean_text tests
    // ============================================================================

    #[test]
    fn test_clean_text_all_options() {
        let input = "  Hello,   world!  \n\n  Second\tline?  ";
        assert_eq!(clean_text(input, ALL_CLEAN), "Hello world Second line");
    }

    #[test]
    fn test_clean_text_only_trim_lines() {
        let options = CleanOptions {
            remove_extra_spaces: false,
            remove_line_breaks: false,
            remove_special_chars: false,
            trim_lines: true,
        };
        assert_eq!(clean_text("  a  \n  b  ", options), "a\nb");
    }

    #[test]
    fn test_clean_text_keeps_newlines_when_not_removing_breaks() {
        let options = CleanOptions {
            remove_line_breaks: false,
            ..ALL_CLEAN
        };
        assert_eq!(clean_text("a   b\n c", options), "a b\nc");
    }

    // ============================================================================
    // smart_format tests
    // ============================================================================

    #[test]
    fn test_smart_format_spacing_and_capitalization() {
        let options = FormatOptions {
            auto_capitalize: true,
            fix_spacing: true,
            ..NO_FORMAT
        };
        assert_eq!(
            smart_format("hello   there .how are you ?fine", options),
            "Hello there. How are you? Fine"
        );
    }

    #[test]
    fn test_smart_format_fix_punctuation_inserts_stop() {
        let options = FormatOptions {
            fix_punctuation: true,
            ..NO_FORMAT
        };
        assert_eq!(smart_format("first partSecond part", options), "first part. Second part");
    }

    #[test]
    fn test_smart_format_proper_nouns() {
        let options = FormatOptions {
            proper_nouns: true,
            ..NO_FORMAT
        };
        assert_eq!(
            smart_format("see you on MONDAY in june", options),
            "see you on Monday in June"
        );
    }

    #[test]
    fn test_smart_format_no_options_is_identity() {
        assert_eq!(smart_format("  odd  spacing ", NO_FORMAT), "  odd  spacing ");
    }
}
