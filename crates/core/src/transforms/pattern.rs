//! Find & replace and the regex tester.

use super::CharOffsets;
use crate::error::TransformError;
use regex::{NoExpand, Regex, RegexBuilder};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindReplace<'a> {
    pub find: &'a str,
    pub replace: &'a str,
    pub case_sensitive: bool,
    pub regex_mode: bool,
}

/// Replace every occurrence of `find`.
///
/// In literal mode both the pattern and the replacement are taken verbatim.
/// In regex mode the replacement understands `$1`, `$<name>`, `$&` and `$$`.
pub fn find_and_replace(text: &str, options: &FindReplace<'_>) -> Result<String, TransformError> {
    if options.find.is_empty() {
        return Ok(text.to_string());
    }

    let pattern = if options.regex_mode {
        options.find.to_string()
    } else {
        regex::escape(options.find)
    };

    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|_| TransformError::InvalidPattern("Error: Invalid regular expression".to_string()))?;

    let replaced = if options.regex_mode {
        let template = expand_syntax(options.replace, re.captures_len() - 1);
        re.replace_all(text, template.as_str())
    } else {
        re.replace_all(text, NoExpand(options.replace))
    };

    Ok(replaced.into_owned())
}

/// Rewrite a `$1` / `$&` / `$<name>` replacement template into the
/// `${1}` / `${0}` / `${name}` form the regex crate expands. A `$` that
/// starts none of these is kept literally.
///
/// `$nn` refers to group `nn` only when the pattern has that many groups;
/// otherwise it is group `n` followed by a literal digit. A reference to a
/// group that does not exist stays literal text.
fn expand_syntax(template: &str, groups: usize) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push_str("$$");
            }
            Some('&') => {
                chars.next();
                out.push_str("${0}");
            }
            Some(first) if first.is_ascii_digit() => {
                chars.next();
                let one = first.to_digit(10).map_or(0, |d| d as usize);
                let two = chars
                    .peek()
                    .and_then(|second| second.to_digit(10))
                    .map(|second| one * 10 + second as usize);

                match two {
                    Some(two) if (1..=groups).contains(&two) => {
                        chars.next();
                        let _ = write!(out, "${{{two}}}");
                    }
                    _ if (1..=groups).contains(&one) => {
                        let _ = write!(out, "${{{one}}}");
                    }
                    _ => {
                        out.push_str("$$");
                        out.push(first);
                    }
                }
            }
            Some('<') => {
                let rest: String = chars.clone().collect();
                match rest.find('>') {
                    Some(end) if end > 1 => {
                        let _ = write!(out, "${{{}}}", &rest[1..end]);
                        for _ in 0..rest[..=end].chars().count() {
                            chars.next();
                        }
                    }
                    _ => out.push_str("$$"),
                }
            }
            _ => out.push_str("$$"),
        }
    }

    out
}

// ============================================================================
// Regex tester
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    pub text: String,
    /// Character offset of the match start.
    pub offset: usize,
    /// Capture groups 1..n; a group that did not participate is empty.
    pub groups: Vec<String>,
}

/// Compile `pattern` with JavaScript-style flags. `g` selects every match
/// instead of the first; `i`, `m` and `s` map to the usual modifiers and any
/// other flag character is ignored.
pub fn find_matches(pattern: &str, flags: &str, text: &str) -> Result<Vec<RegexMatch>, TransformError> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()
        .map_err(|e| TransformError::InvalidPattern(format!("Invalid regex pattern: {e}")))?;

    let limit = if flags.contains('g') { usize::MAX } else { 1 };
    Ok(collect_matches(&re, text, limit))
}

fn collect_matches(re: &Regex, text: &str, limit: usize) -> Vec<RegexMatch> {
    let mut offsets = CharOffsets::new(text);
    re.captures_iter(text)
        .take(limit)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RegexMatch {
                text: whole.as_str().to_string(),
                offset: offsets.at(whole.start()),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexTest<'a> {
    pub pattern: &'a str,
    pub flags: &'a str,
    pub show_groups: bool,
}

pub fn test_regex(text: &str, options: &RegexTest<'_>) -> Result<String, TransformError> {
    if options.pattern.is_empty() {
        return Ok("Please enter a regex pattern to test.".to_string());
    }

    let matches = find_matches(options.pattern, options.flags, text)?;

    let mut out = String::from("Regex Test Results\n==================\n\n");
    let _ = writeln!(out, "Pattern: {}", options.pattern);
    let _ = writeln!(out, "Flags: {}", options.flags);
    let _ = writeln!(out, "Total matches: {}\n", matches.len());

    if matches.is_empty() {
        out.push_str("No matches found.");
        return Ok(out);
    }

    out.push_str("Matches:\n--------\n");
    for (index, found) in matches.iter().enumerate() {
        let _ = writeln!(out, "{}. \"{}\" at position {}", index + 1, found.text, found.offset);
        if options.show_groups {
            for (group, value) in found.groups.iter().enumerate() {
                let _ = writeln!(out, "   Group {}: \"{value}\"", group + 1);
            }
        }
    }

    Ok(out)
}
