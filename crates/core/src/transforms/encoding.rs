//! URL, Base64 and HTML entity encoders.

use crate::error::TransformError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "decode" => Direction::Decode,
            _ => Direction::Encode,
        }
    }
}

/// Standard alphabet; padding optional, trailing bits ignored and whitespace
/// stripped beforehand, the way browsers decode Base64.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

static ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%[0-9A-F]{2}").unwrap());

/// Marks that `encodeURIComponent` leaves alone but percent-encoding crates escape.
const COMPONENT_SAFE: &[u8] = b"!'()*";
/// Reserved characters additionally preserved when encoding or decoding a whole URI.
const URI_RESERVED: &[u8] = b";,/?:@&=+$#";

const MALFORMED_URI: &str = "URI malformed";

// ============================================================================
// Percent-encoding
// ============================================================================

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(text: &str) -> String {
    restore_escapes(&urlencoding::encode(text), COMPONENT_SAFE)
}

/// Like [`encode_uri_component`] but keeps URI delimiters such as `/`, `?` and `#`.
pub fn encode_uri(text: &str) -> String {
    let keep: Vec<u8> = COMPONENT_SAFE.iter().chain(URI_RESERVED).copied().collect();
    restore_escapes(&urlencoding::encode(text), &keep)
}

fn restore_escapes(encoded: &str, keep: &[u8]) -> String {
    ESCAPE
        .replace_all(encoded, |caps: &Captures| {
            let escape = &caps[0];
            match u8::from_str_radix(&escape[1..], 16) {
                Ok(byte) if keep.contains(&byte) => char::from(byte).to_string(),
                _ => escape.to_string(),
            }
        })
        .into_owned()
}

/// Decode every percent escape. Malformed escapes or invalid UTF-8 are errors.
pub fn decode_uri_component(text: &str) -> Result<String, TransformError> {
    percent_decode(text, &[])
}

/// Decode percent escapes except those that encode a reserved URI delimiter.
pub fn decode_uri(text: &str) -> Result<String, TransformError> {
    percent_decode(text, URI_RESERVED)
}

fn percent_decode(text: &str, keep_escaped: &[u8]) -> Result<String, TransformError> {
    let malformed = || TransformError::InvalidEncoding(MALFORMED_URI.to_string());
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let hex = bytes
            .get(i + 1..i + 3)
            .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            .ok_or_else(malformed)?;
        let hex = std::str::from_utf8(hex).map_err(|_| malformed())?;
        let byte = u8::from_str_radix(hex, 16).map_err(|_| malformed())?;

        if keep_escaped.contains(&byte) {
            out.extend_from_slice(&bytes[i..i + 3]);
        } else {
            out.push(byte);
        }
        i += 3;
    }

    String::from_utf8(out).map_err(|_| malformed())
}

pub fn url_encode_decode(text: &str, direction: Direction) -> Result<String, TransformError> {
    match direction {
        Direction::Encode => Ok(encode_uri_component(text)),
        Direction::Decode => decode_uri_component(text).map_err(|_| {
            TransformError::InvalidEncoding("Error: Invalid input for decoding".to_string())
        }),
    }
}

// ============================================================================
// Base64
// ============================================================================

pub fn base64_encode_decode(text: &str, direction: Direction) -> Result<String, TransformError> {
    match direction {
        Direction::Encode => Ok(LENIENT_BASE64.encode(text.as_bytes())),
        Direction::Decode => {
            let invalid = || TransformError::InvalidEncoding("Error: Invalid Base64 input".to_string());
            let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            let bytes = LENIENT_BASE64.decode(compact).map_err(|_| invalid())?;
            String::from_utf8(bytes).map_err(|_| invalid())
        }
    }
}

// ============================================================================
// HTML entities
// ============================================================================

pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn html_decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

pub fn html_encode_decode(text: &str, direction: Direction) -> String {
    match direction {
        Direction::Encode => html_encode(text),
        Direction::Decode => html_decode(text),
    }
}

// ============================================================================
// URL Encoder/Decoder Pro
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlToolOptions {
    pub direction: Direction,
    pub encode_components: bool,
    pub show_url_parts: bool,
}

/// Scheme with its trailing colon, the way browsers report `protocol`.
fn protocol(url: &Url) -> String {
    format!("{}:", url.scheme())
}

fn port(url: &Url) -> String {
    url.port().map_or_else(|| "default".to_string(), |p| p.to_string())
}

fn search(url: &Url) -> String {
    url.query().map(|q| format!("?{q}")).unwrap_or_default()
}

fn hash(url: &Url) -> String {
    url.fragment().map(|f| format!("#{f}")).unwrap_or_default()
}

pub fn url_toolkit(text: &str, options: UrlToolOptions) -> Result<String, TransformError> {
    let heading = match options.direction {
        Direction::Encode => "URL Encoding Results",
        Direction::Decode => "URL Decoding Results",
    };
    let mut out = format!("{heading}\n{}\n\n", "=".repeat(heading.len()));

    match options.direction {
        Direction::Encode => {
            if options.encode_components {
                match Url::parse(text) {
                    Ok(url) => {
                        let host = url.host_str().unwrap_or_default();
                        let path = encode_uri_component(url.path());
                        let query = encode_uri_component(&search(&url));
                        let fragment = encode_uri_component(&hash(&url));

                        out.push_str("Component-wise Encoding:\n");
                        let _ = writeln!(out, "• Protocol: {}", protocol(&url));
                        let _ = writeln!(out, "• Host: {host}");
                        let _ = writeln!(out, "• Port: {}", port(&url));
                        let _ = writeln!(out, "• Path: {path}");
                        let _ = writeln!(out, "• Query: {query}");
                        let _ = writeln!(out, "• Fragment: {fragment}\n");

                        let port_suffix = url.port().map(|p| format!(":{p}")).unwrap_or_default();
                        let _ = writeln!(
                            out,
                            "Full Encoded URL:\n{}//{host}{port_suffix}{path}{query}{fragment}\n",
                            protocol(&url)
                        );
                    }
                    Err(_) => {
                        let _ = writeln!(out, "Full URL Encoding:\n{}\n", encode_uri_component(text));
                    }
                }
            } else {
                let _ = writeln!(out, "Encoded Text:\n{}\n", encode_uri_component(text));
            }

            out.push_str("Alternative Encodings:\n");
            let _ = writeln!(out, "• encodeURI(): {}", encode_uri(text));
            let _ = writeln!(out, "• encodeURIComponent(): {}", encode_uri_component(text));
        }
        Direction::Decode => {
            let decoded = decode_uri_component(text)
                .map_err(|e| TransformError::InvalidEncoding(format!("{out}Error: {e}")))?;
            let _ = writeln!(out, "Decoded Text:\n{decoded}\n");
            out.push_str("Alternative Decoding:\n");
            match decode_uri(text) {
                Ok(partial) => {
                    let _ = writeln!(out, "• decodeURI(): {partial}");
                }
                Err(e) => {
                    let _ = writeln!(out, "• decodeURI(): Error - {e}");
                }
            }
        }
    }

    if options.show_url_parts && text.contains("://") {
        let target = match options.direction {
            Direction::Decode => decode_uri_component(text)?,
            Direction::Encode => text.to_string(),
        };
        match Url::parse(&target) {
            Ok(url) => {
                out.push_str("\nURL Parts Breakdown:\n");
                let _ = writeln!(out, "• Protocol: {}", protocol(&url));
                let _ = writeln!(out, "• Hostname: {}", url.host_str().unwrap_or_default());
                let _ = writeln!(out, "• Port: {}", port(&url));
                let _ = writeln!(out, "• Pathname: {}", url.path());
                let _ = writeln!(out, "• Search: {}", search(&url));
                let _ = writeln!(out, "• Hash: {}", hash(&url));
                let _ = writeln!(out, "• Origin: {}", url.origin().ascii_serialization());
            }
            Err(e) => {
                let _ = writeln!(out, "\nURL parsing failed: {e}");
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // ============================================================================
    // URL component tests
    // ============================================================================

    #[test]
    fn test_encode_uri_component_matches_browser_set() {
        assert_eq!(encode_uri_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
    }

    #[test]
    fn test_encode_uri_keeps_delimiters() {
        assert_eq!(
            encode_uri("https://x.io/a b?q=1#top"),
            "https://x.io/a%20b?q=1#top"
        );
    }

    #[test]
    fn test_decode_uri_component() {
        assert_eq!(decode_uri_component("a%20b%2Fc%C3%A9").unwrap(), "a b/cé");
        assert_eq!(decode_uri_component("plus+stays").unwrap(), "plus+stays");
    }

    #[test]
    fn test_decode_uri_keeps_reserved_escapes() {
        assert_eq!(decode_uri("a%20b%2Fc").unwrap(), "a b%2Fc");
    }

    #[test]
    fn test_decode_rejects_malformed_sequences() {
        for bad in ["%", "%zz", "abc%4", "%C3", "%+1", "%-1", "%G1", "% 1"] {
            let err = decode_uri_component(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidEncoding, "{bad}");
        }
    }

    #[test]
    fn test_url_encode_decode_error_message() {
        let err = url_encode_decode("%E0%A4%A", Direction::Decode).unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid input for decoding");
    }

    // ============================================================================
    // Base64 tests
    // ============================================================================

    #[test]
    fn test_base64_encodes_utf8() {
        assert_eq!(base64_encode_decode("hello", Direction::Encode).unwrap(), "aGVsbG8=");
        assert_eq!(base64_encode_decode("✓", Direction::Encode).unwrap(), "4pyT");
    }

    #[test]
    fn test_base64_decode_tolerates_whitespace_and_missing_padding() {
        assert_eq!(base64_encode_decode("aGVs\nbG8", Direction::Decode).unwrap(), "hello");
    }

    #[test]
    fn test_base64_decode_ignores_trailing_bits() {
        assert_eq!(base64_encode_decode("QR==", Direction::Decode).unwrap(), "A");
        assert_eq!(base64_encode_decode("QR", Direction::Decode).unwrap(), "A");
    }

    #[test]
    fn test_base64_decode_invalid() {
        let err = base64_encode_decode("not base64!", Direction::Decode).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert_eq!(err.to_string(), "Error: Invalid Base64 input");
    }

    #[test]
    fn test_base64_decode_rejects_non_utf8_payload() {
        assert!(base64_encode_decode("/w==", Direction::Decode).is_err());
    }

    // ============================================================================
    // HTML entity tests
    // ============================================================================

    #[test]
    fn test_html_encode() {
        assert_eq!(
            html_encode(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_html_decode() {
        assert_eq!(html_decode("&lt;b&gt; &amp;&amp; &quot;q&quot; &#39;s"), "<b> && \"q\" 's");
    }

    // ============================================================================
    // url_toolkit tests
    // ============================================================================

    #[test]
    fn test_url_toolkit_component_encoding() {
        let options = UrlToolOptions {
            direction: Direction::Encode,
            encode_components: true,
            show_url_parts: false,
        };
        let out = url_toolkit("https://example.com/a b?x=1", options).unwrap();
        assert!(out.starts_with("URL Encoding Results\n====================\n\n"));
        assert!(out.contains("• Protocol: https:\n"));
        assert!(out.contains("• Host: example.com\n"));
        assert!(out.contains("• Port: default\n"));
        assert!(out.contains("• Path: %2Fa%2520b\n"));
        assert!(out.contains("• Query: %3Fx%3D1\n"));
        assert!(out.contains("• encodeURIComponent(): https%3A%2F%2Fexample.com%2Fa%20b%3Fx%3D1"));
    }

    #[test]
    fn test_url_toolkit_plain_text_falls_back() {
        let options = UrlToolOptions {
            direction: Direction::Encode,
            encode_components: true,
            show_url_parts: false,
        };
        let out = url_toolkit("just words", options).unwrap();
        assert!(out.contains("Full URL Encoding:\njust%20words\n"));
    }

    #[test]
    fn test_url_toolkit_decode_with_parts() {
        let options = UrlToolOptions {
            direction: Direction::Decode,
            encode_components: false,
            show_url_parts: true,
        };
        let out = url_toolkit("https://example.com:8080/p%20x?q=1", options).unwrap();
        assert!(out.contains("Decoded Text:\nhttps://example.com:8080/p x?q=1\n"));
        assert!(out.contains("• Port: 8080\n"));
        assert!(out.contains("• Origin: https://example.com:8080\n"));
    }

    #[test]
    fn test_url_toolkit_decode_malformed() {
        let options = UrlToolOptions {
            direction: Direction::Decode,
            encode_components: false,
            show_url_parts: false,
        };
        let err = url_toolkit("%zz", options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert!(err.to_string().ends_with("Error: URI malformed"));
    }
}
