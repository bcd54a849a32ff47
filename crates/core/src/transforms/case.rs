use regex::{Captures, Regex};
use std::sync::LazyLock;

static TITLE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\S*").unwrap());
static SENTENCE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w|[.!?]\s*\w").unwrap());

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Capitalize the first character of every `\w\S*` token and lowercase the rest.
pub fn title_case(text: &str) -> String {
    TITLE_TOKEN
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Lowercase everything, then capitalize the first word character of the
/// text and the first word character after each `.`, `!` or `?`.
pub fn sentence_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    SENTENCE_START
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
