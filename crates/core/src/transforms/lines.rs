//! Line-oriented tools: de-duplication, sorting and random sampling.

use rand::{Rng, RngCore};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Drop exact repeats of a line, keeping the first occurrence of each.
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    text.split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sort_lines(text: &str, order: SortOrder) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    match order {
        SortOrder::Ascending => lines.sort_by(|a, b| locale_compare(a, b)),
        SortOrder::Descending => lines.sort_by(|a, b| locale_compare(b, a)),
    }
    lines.join("\n")
}

/// Human-oriented string ordering.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts
/// before uppercase, and any remaining tie falls back to code points so the
/// order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();

    folded(a)
        .cmp(&folded(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Pick up to `count` distinct non-empty lines at random, without replacement.
pub fn pick_random_lines(text: &str, count: usize, rng: &mut dyn RngCore) -> String {
    let mut pool: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let take = count.min(pool.len());
    let mut picked = Vec::with_capacity(take);
    for _ in 0..take {
        let index = rng.gen_range(0..pool.len());
        picked.push(pool.remove(index));
    }

    picked.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // ============================================================================
    // remove_duplicate_lines tests
    // ============================================================================

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        assert_eq!(remove_duplicate_lines("b\na\nb\nc\na"), "b\na\nc");
    }

    #[test]
    fn test_remove_duplicates_is_case_and_space_sensitive() {
        assert_eq!(remove_duplicate_lines("a\nA\na \na"), "a\nA\na ");
    }

    // ============================================================================
    // sort_lines tests
    // ============================================================================

    #[test]
    fn test_sort_ascending_ignores_case_first() {
        assert_eq!(sort_lines("banana\nApple\ncherry", SortOrder::Ascending), "Apple\nbanana\ncherry");
    }

    #[test]
    fn test_sort_descending() {
        assert_eq!(sort_lines("b\nc\na", SortOrder::Descending), "c\nb\na");
    }

    #[test]
    fn test_locale_compare_lowercase_first_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_sort_order_from_choice() {
        assert_eq!(SortOrder::from_choice("desc"), SortOrder::Descending);
        assert_eq!(SortOrder::from_choice("asc"), SortOrder::Ascending);
    }

    // ============================================================================
    // pick_random_lines tests
    // ============================================================================

    #[test]
    fn test_pick_random_lines_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_random_lines("a\nb\nc\nd", 3, &mut rng);
        let lines: Vec<&str> = picked.split('\n').collect();
        assert_eq!(lines.len(), 3);
        let unique: HashSet<_> = lines.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(lines.iter().all(|l| ["a", "b", "c", "d"].contains(l)));
    }

    #[test]
    fn test_pick_random_lines_more_than_available_returns_all() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = pick_random_lines("x\n\n  \ny", 10, &mut rng);
        let mut lines: Vec<&str> = picked.split('\n').collect();
        lines.sort();
        assert_eq!(lines, vec!["x", "y"]);
    }

    #[test]
    fn test_pick_random_lines_is_deterministic_for_a_seed() {
        let text = "1\n2\n3\n4\n5\n6";
        let a = pick_random_lines(text, 2, &mut StdRng::seed_from_u64(42));
        let b = pick_random_lines(text, 2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_random_lines_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_random_lines("\n \n", 3, &mut rng), "");
    }
}
