//! Block-letter banner rendering.
//!
//! This is a toy renderer: only A-Z and space have glyphs, everything else
//! is drawn as a blank cell, and only the first ten characters are used.

const ROWS: usize = 5;
const MAX_CHARS: usize = 10;

type Glyph = [&'static str; ROWS];

const BLANK: Glyph = ["     ", "     ", "     ", "     ", "     "];

fn glyph(c: char) -> &'static Glyph {
    match c {
        'A' => &["  █  ", " █ █ ", "█████", "█   █", "█   █"],
        'B' => &["████ ", "█   █", "████ ", "█   █", "████ "],
        'C' => &[" ████", "█    ", "█    ", "█    ", " ████"],
        'D' => &["████ ", "█   █", "█   █", "█   █", "████ "],
        'E' => &["█████", "█    ", "███  ", "█    ", "█████"],
        'F' => &["█████", "█    ", "███  ", "█    ", "█    "],
        'G' => &[" ████", "█    ", "█ ███", "█   █", " ████"],
        'H' => &["█   █", "█   █", "█████", "█   █", "█   █"],
        'I' => &["█████", "  █  ", "  █  ", "  █  ", "█████"],
        'J' => &["█████", "    █", "    █", "█   █", " ████"],
        'K' => &["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
        'L' => &["█    ", "█    ", "█    ", "█    ", "█████"],
        'M' => &["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'N' => &["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        'O' => &[" ███ ", "█   █", "█   █", "█   █", " ███ "],
        'P' => &["████ ", "█   █", "████ ", "█    ", "█    "],
        'Q' => &[" ███ ", "█   █", "█ █ █", "█  ██", " ████"],
        'R' => &["████ ", "█   █", "████ ", "█  █ ", "█   █"],
        'S' => &[" ████", "█    ", " ███ ", "    █", "████ "],
        'T' => &["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        'U' => &["█   █", "█   █", "█   █", "█   █", " ███ "],
        'V' => &["█   █", "█   █", "█   █", " █ █ ", "  █  "],
        'W' => &["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
        'X' => &["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
        'Y' => &["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
        'Z' => &["█████", "   █ ", "  █  ", " █   ", "█████"],
        _ => &BLANK,
    }
}

/// Render the first ten characters (after uppercasing) as a five-row banner.
pub fn text_to_ascii(text: &str) -> String {
    let mut rows: [String; ROWS] = Default::default();

    for c in text.to_uppercase().chars().take(MAX_CHARS) {
        for (row, line) in rows.iter_mut().zip(glyph(c)) {
            row.push_str(line);
            row.push(' ');
        }
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter() {
        assert_eq!(
            text_to_ascii("i"),
            "█████ \n  █   \n  █   \n  █   \n█████ "
        );
    }

    #[test]
    fn test_unknown_characters_render_blank() {
        assert_eq!(text_to_ascii("7"), text_to_ascii(" "));
        assert!(text_to_ascii("!").split('\n').all(|row| row == "      "));
    }

    #[test]
    fn test_truncates_to_ten_characters() {
        let banner = text_to_ascii("abcdefghijklmnop");
        for row in banner.split('\n') {
            assert_eq!(row.chars().count(), 10 * 6);
        }
    }

    #[test]
    fn test_has_five_rows() {
        assert_eq!(text_to_ascii("hi there").split('\n').count(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text_to_ascii(""), "\n\n\n\n");
    }
}
