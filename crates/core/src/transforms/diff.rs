//! Line-by-line comparison of two texts.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// 1-based line number.
    pub line: usize,
    pub left: String,
    pub right: String,
}

/// Every line position where the two texts disagree. The shorter text is
/// padded with empty lines.
pub fn line_differences(left: &str, right: &str) -> Vec<LineDifference> {
    let left: Vec<&str> = left.split('\n').collect();
    let right: Vec<&str> = right.split('\n').collect();
    let lines = left.len().max(right.len());

    (0..lines)
        .filter_map(|i| {
            let l = left.get(i).copied().unwrap_or_default();
            let r = right.get(i).copied().unwrap_or_default();
            (l != r).then(|| LineDifference {
                line: i + 1,
                left: l.to_string(),
                right: r.to_string(),
            })
        })
        .collect()
}

pub fn compare_texts(left: &str, right: Option<&str>) -> String {
    let right = match right {
        Some(text) if !text.is_empty() => text,
        _ => return "Please enter text in the second text area to compare.".to_string(),
    };

    let differences = line_differences(left, right);
    if differences.is_empty() {
        return "No differences found. The texts are identical.".to_string();
    }

    let mut out = format!("Found {} difference(s):\n\nDifferences found:\n\n", differences.len());
    for diff in &differences {
        let _ = write!(
            out,
            "Line {}:\nText 1: \"{}\"\nText 2: \"{}\"\n\n",
            diff.line, diff.left, diff.right
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        assert_eq!(
            compare_texts("a\nb", Some("a\nb")),
            "No differences found. The texts are identical."
        );
    }

    #[test]
    fn test_missing_second_text_prompts() {
        let prompt = "Please enter text in the second text area to compare.";
        assert_eq!(compare_texts("a", None), prompt);
        assert_eq!(compare_texts("a", Some("")), prompt);
    }

    #[test]
    fn test_reports_changed_and_missing_lines() {
        let out = compare_texts("one\ntwo\nthree", Some("one\n2"));
        assert_eq!(
            out,
            "Found 2 difference(s):\n\nDifferences found:\n\n\
             Line 2:\nText 1: \"two\"\nText 2: \"2\"\n\n\
             Line 3:\nText 1: \"three\"\nText 2: \"\"\n\n"
        );
    }

    #[test]
    fn test_line_differences_symmetric_positions() {
        let ab: Vec<usize> = line_differences("a\nb\nc", "a\nx").iter().map(|d| d.line).collect();
        let ba: Vec<usize> = line_differences("a\nx", "a\nb\nc").iter().map(|d| d.line).collect();
        assert_eq!(ab, vec![2, 3]);
        assert_eq!(ab, ba);
    }
}
