//! Random text generators. Both take the random source as an argument.

use crate::error::TransformError;
use rand::{Rng, RngCore};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl PasswordOptions {
    /// The union of the selected character classes.
    pub fn charset(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .iter()
        .filter(|(selected, _)| *selected)
        .flat_map(|(_, class)| class.chars())
        .collect()
    }
}

/// `length` characters drawn uniformly, with replacement, from the selected classes.
pub fn generate_password(options: PasswordOptions, rng: &mut dyn RngCore) -> Result<String, TransformError> {
    let charset = options.charset();
    if charset.is_empty() {
        return Err(TransformError::Configuration(
            "Please select at least one character type.".to_string(),
        ));
    }

    Ok((0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lorem_sentence(rng: &mut dyn RngCore) -> String {
    let words = rng.gen_range(5..=14);
    let mut sentence: Vec<String> = Vec::with_capacity(words);
    for i in 0..words {
        let word = LOREM_WORDS[rng.gen_range(0..LOREM_WORDS.len())];
        sentence.push(if i == 0 { capitalize(word) } else { word.to_string() });
    }
    format!("{}.", sentence.join(" "))
}

/// Placeholder paragraphs of 3 to 7 sentences, separated by a blank line.
pub fn generate_lorem(paragraphs: usize, rng: &mut dyn RngCore) -> String {
    let mut out = Vec::with_capacity(paragraphs);
    for _ in 0..paragraphs {
        let count = rng.gen_range(3..=7);
        let mut sentences = Vec::with_capacity(count);
        for _ in 0..count {
            sentences.push(lorem_sentence(rng));
        }
        out.push(sentences.join(" "));
    }
    out.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DIGITS_ONLY: PasswordOptions = PasswordOptions {
        length: 10,
        uppercase: false,
        lowercase: false,
        numbers: true,
        symbols: false,
    };

    // ============================================================================
    // Password tests
    // ============================================================================

    #[test]
    fn test_password_digits_only() {
        let mut rng = StdRng::seed_from_u64(3);
        let password = generate_password(DIGITS_ONLY, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 10);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_password_without_classes_fails() {
        let options = PasswordOptions {
            numbers: false,
            ..DIGITS_ONLY
        };
        let err = generate_password(options, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
        assert_eq!(err.to_string(), "Please select at least one character type.");
    }

    #[test]
    fn test_password_charset_union() {
        let options = PasswordOptions {
            length: 4,
            uppercase: true,
            lowercase: false,
            numbers: false,
            symbols: true,
        };
        let charset = options.charset();
        assert_eq!(charset.len(), 26 + SYMBOLS.len());
        assert!(charset.contains(&'Q') && charset.contains(&'?'));
        assert!(!charset.contains(&'q'));
    }

    #[test]
    fn test_password_is_seed_deterministic() {
        let a = generate_password(DIGITS_ONLY, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_password(DIGITS_ONLY, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    // ============================================================================
    // Lorem ipsum tests
    // ============================================================================

    #[test]
    fn test_lorem_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = generate_lorem(4, &mut rng);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 4);

        for paragraph in paragraphs {
            let sentences: Vec<&str> = paragraph.split(". ").collect();
            assert!((3..=7).contains(&sentences.len()), "{paragraph}");
            for sentence in sentences {
                let sentence = sentence.trim_end_matches('.');
                let words: Vec<&str> = sentence.split(' ').collect();
                assert!((5..=14).contains(&words.len()), "{sentence}");
                assert!(words[0].chars().next().is_some_and(char::is_uppercase));
                assert!(words.iter().all(|w| LOREM_WORDS.contains(&w.to_lowercase().as_str())));
            }
        }
    }

    #[test]
    fn test_lorem_zero_paragraphs() {
        assert_eq!(generate_lorem(0, &mut StdRng::seed_from_u64(1)), "");
    }
}
