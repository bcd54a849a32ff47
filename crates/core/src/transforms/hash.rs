//! Demonstration hash generator.
//!
//! The "digests" here are a 32-bit rolling hash zero-padded to the width of
//! the named algorithm. They are NOT MD5/SHA values and the report says so.

use super::yes_no;
use std::fmt::Write;

const DEMO_NOTE: &str = "Note: This is a demonstration hash generator. For production use, implement proper cryptographic hashing using Web Crypto API or a dedicated crypto library.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    /// Width in hex characters of the real algorithm's digest.
    pub fn width(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashSelection {
    One(HashAlgorithm),
    All,
}

impl HashSelection {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "md5" => HashSelection::One(HashAlgorithm::Md5),
            "sha1" => HashSelection::One(HashAlgorithm::Sha1),
            "all" => HashSelection::All,
            _ => HashSelection::One(HashAlgorithm::Sha256),
        }
    }
}

/// `h = h * 31 + unit` over UTF-16 code units with 32-bit wraparound.
pub fn rolling_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

pub fn demo_digest(text: &str, algorithm: HashAlgorithm, uppercase: bool) -> String {
    let magnitude = i64::from(rolling_hash(text)).abs();
    let digest = format!("{magnitude:0>width$x}", width = algorithm.width());
    if uppercase {
        digest.to_uppercase()
    } else {
        digest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    pub selection: HashSelection,
    pub uppercase: bool,
    pub include_length: bool,
}

pub fn generate_hashes(text: &str, options: HashOptions) -> String {
    if text.trim().is_empty() {
        return "Please enter text to generate hashes.".to_string();
    }

    let mut out = String::from("Hash Generation Results\n=======================\n\n");
    let _ = writeln!(out, "Input text: \"{text}\"");
    let _ = writeln!(out, "Text length: {} characters\n", text.chars().count());

    match options.selection {
        HashSelection::All => {
            for algorithm in HashAlgorithm::ALL {
                let digest = demo_digest(text, algorithm, options.uppercase);
                let _ = writeln!(out, "{}:\n{digest}", algorithm.label());
                if options.include_length {
                    let _ = writeln!(out, "Length: {} characters", digest.len());
                }
                out.push('\n');
            }
        }
        HashSelection::One(algorithm) => {
            let digest = demo_digest(text, algorithm, options.uppercase);
            let _ = writeln!(out, "{} Hash:\n{digest}", algorithm.label());
            if options.include_length {
                let _ = writeln!(out, "Hash length: {} characters", digest.len());
            }
        }
    }

    let _ = writeln!(out, "\n{DEMO_NOTE}");

    out.push_str("\nOptions:\n");
    let algorithm = match options.selection {
        HashSelection::All => "All algorithms",
        HashSelection::One(algorithm) => algorithm.label(),
    };
    let _ = writeln!(out, "• Algorithm: {algorithm}");
    let _ = writeln!(out, "• Uppercase: {}", yes_no(options.uppercase));
    let _ = writeln!(out, "• Include length: {}", yes_no(options.include_length));
    out
}
