//! Property-based tests for the text transforms.
//!
//! Covers the algebraic guarantees callers rely on: encoders round-trip,
//! cleanup transforms are idempotent, the line tools preserve their input
//! lines, and formatting JSON never changes its value.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::collections::HashSet;
use textkit_core::dispatch::{dispatch_with_rng, TransformRequest};
use textkit_core::error::ErrorKind;
use textkit_core::transforms::analysis::ReadabilityReport;
use textkit_core::transforms::case::uppercase;
use textkit_core::transforms::cleanup::remove_extra_spaces;
use textkit_core::transforms::diff::line_differences;
use textkit_core::transforms::encoding::{
    base64_encode_decode, html_decode, html_encode, url_encode_decode, Direction,
};
use textkit_core::transforms::json::{format_json, parse, JsonAction};
use textkit_core::transforms::lines::{locale_compare, remove_duplicate_lines, sort_lines, SortOrder};
use textkit_core::transforms::pattern::find_matches;
use textkit_core::transforms::seo::KeywordDensity;

fn lines_of(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

fn json_value() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        "\\PC{0,12}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| serde_json::Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    // ============================================================================
    // Round trips
    // ============================================================================

    #[test]
    fn url_encoding_round_trips(text in "\\PC{0,64}") {
        let encoded = url_encode_decode(&text, Direction::Encode).unwrap();
        prop_assert_eq!(url_encode_decode(&encoded, Direction::Decode).unwrap(), text);
    }

    #[test]
    fn base64_round_trips(text in "\\PC{0,64}") {
        let encoded = base64_encode_decode(&text, Direction::Encode).unwrap();
        prop_assert_eq!(base64_encode_decode(&encoded, Direction::Decode).unwrap(), text);
    }

    #[test]
    fn html_entities_round_trip(text in "\\PC{0,64}") {
        prop_assert_eq!(html_decode(&html_encode(&text)), text);
    }

    // ============================================================================
    // Idempotence
    // ============================================================================

    #[test]
    fn uppercase_is_idempotent(text in "\\PC{0,64}") {
        let once = uppercase(&text);
        prop_assert_eq!(uppercase(&once), once);
    }

    #[test]
    fn remove_extra_spaces_is_idempotent(text in "[ a-z\\t\\n]{0,64}") {
        let once = remove_extra_spaces(&text);
        prop_assert_eq!(remove_extra_spaces(&once), once);
    }

    // ============================================================================
    // Diff
    // ============================================================================

    #[test]
    fn identical_texts_have_no_differences(text in "[a-c\\n]{0,32}") {
        prop_assert!(line_differences(&text, &text).is_empty());
    }

    #[test]
    fn differences_are_symmetric(left in "[a-c\\n]{0,32}", right in "[a-c\\n]{0,32}") {
        let forward: Vec<usize> = line_differences(&left, &right).iter().map(|d| d.line).collect();
        let backward: Vec<usize> = line_differences(&right, &left).iter().map(|d| d.line).collect();
        prop_assert_eq!(forward, backward);
    }

    // ============================================================================
    // Line tools
    // ============================================================================

    #[test]
    fn duplicate_removal_keeps_first_occurrences(text in "[ab]{0,2}(\\n[ab]{0,2}){0,12}") {
        let output = remove_duplicate_lines(&text);
        let kept = lines_of(&output);

        let unique: HashSet<&str> = kept.iter().copied().collect();
        prop_assert_eq!(unique.len(), kept.len());
        prop_assert!(kept.len() <= lines_of(&text).len());

        let mut seen = HashSet::new();
        let expected: Vec<&str> = lines_of(&text).into_iter().filter(|l| seen.insert(*l)).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn sorting_is_an_ordered_permutation(text in "[a-cA-C ]{0,4}(\\n[a-cA-C ]{0,4}){0,12}") {
        let output = sort_lines(&text, SortOrder::Ascending);
        let sorted = lines_of(&output);

        let mut before = lines_of(&text);
        let mut after = sorted.clone();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        for pair in sorted.windows(2) {
            prop_assert_ne!(locale_compare(pair[0], pair[1]), Ordering::Greater);
        }
    }

    // ============================================================================
    // JSON
    // ============================================================================

    #[test]
    fn formatting_json_preserves_its_value(value in json_value(), indent in 1usize..=8) {
        let source = value.to_string();
        let formatted = format_json(&source, JsonAction::Format, indent).unwrap();
        let minified = format_json(&formatted, JsonAction::Minify, indent).unwrap();
        prop_assert_eq!(parse(&minified).unwrap(), value);
    }
}

// ============================================================================
// Fixed examples
// ============================================================================

#[test]
fn short_simple_sentences_read_very_easy() {
    let report = ReadabilityReport::of("The cat sat. The dog ran.");
    assert_eq!(report.sentences, 2);
    assert_eq!(report.words, 6);
    assert!(report.score >= 90.0, "score {}", report.score);
    assert!(report.level.starts_with("Very Easy"));
}

#[test]
fn numeric_password_uses_only_digits() {
    let request = TransformRequest::new("password", "")
        .set("length", 10_i64)
        .set("uppercase", false)
        .set("lowercase", false)
        .set("numbers", true)
        .set("symbols", false);
    let result = dispatch_with_rng(&request, &mut StdRng::seed_from_u64(3));
    let password = result.output_text();
    assert_eq!(password.chars().count(), 10);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn password_without_character_classes_is_a_configuration_error() {
    let request = TransformRequest::new("password", "")
        .set("uppercase", false)
        .set("lowercase", false)
        .set("numbers", false)
        .set("symbols", false);
    let result = dispatch_with_rng(&request, &mut StdRng::seed_from_u64(3));
    assert_eq!(result.error_kind(), Some(ErrorKind::ConfigurationError));
}

#[test]
fn keyword_density_counts_whole_words() {
    let density = KeywordDensity::measure("cat cat dog", "cat", true).unwrap();
    assert_eq!(density.exact_matches, 2);
    assert_eq!(density.total_words, 3);
    assert!((density.density - 66.67).abs() < 0.01);
}

#[test]
fn global_regex_reports_every_match() {
    let matches = find_matches("a+", "g", "aabaaa").unwrap();
    let found: Vec<(&str, usize)> = matches.iter().map(|m| (m.text.as_str(), m.offset)).collect();
    assert_eq!(found, vec![("aa", 0), ("aaa", 3)]);
}

#[test]
fn deeply_nested_xml_is_a_document_error() {
    let xml = "<a>".repeat(20_000) + &"</a>".repeat(20_000);
    let request = TransformRequest::new("xmltojson", xml);
    let result = dispatch_with_rng(&request, &mut StdRng::seed_from_u64(1));
    assert_eq!(result.error_kind(), Some(ErrorKind::InvalidDocument));
}

#[test]
fn signed_percent_escapes_do_not_decode() {
    for bad in ["%+1", "%-1", "%G1"] {
        let request = TransformRequest::new("encode", bad).set("action", "decode");
        let result = dispatch_with_rng(&request, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.error_kind(), Some(ErrorKind::InvalidEncoding), "{bad}");
    }
}
