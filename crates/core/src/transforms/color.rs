//! Color code detection and HEX/RGB/HSL conversion.

use crate::error::TransformError;
use regex::Regex;
use std::fmt;
use std::fmt::Write;
use std::sync::LazyLock;

static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());
static RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());
static HSL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hsl\s*\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)").unwrap());

const UNRECOGNIZED: &str = "Could not detect color format. Supported formats:\n\
• HEX: #FF0000 or #F00\n\
• RGB: rgb(255, 0, 0)\n\
• HSL: hsl(0, 100%, 50%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Hex => write!(f, "HEX"),
            ColorFormat::Rgb => write!(f, "RGB"),
            ColorFormat::Hsl => write!(f, "HSL"),
        }
    }
}

/// Which grammars `parse_color` may try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Auto,
    Only(ColorFormat),
}

impl InputFormat {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "hex" => InputFormat::Only(ColorFormat::Hex),
            "rgb" => InputFormat::Only(ColorFormat::Rgb),
            "hsl" => InputFormat::Only(ColorFormat::Hsl),
            _ => InputFormat::Auto,
        }
    }

    fn allows(self, format: ColorFormat) -> bool {
        match self {
            InputFormat::Auto => true,
            InputFormat::Only(only) => only == format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h * 12.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (value * 255.0).round() as u8
        };

        Rgb {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedColor {
    pub format: ColorFormat,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

fn component(caps: &regex::Captures<'_>, index: usize, max: u16) -> Option<u16> {
    caps[index].parse::<u16>().ok().filter(|v| *v <= max)
}

fn parse_hex(input: &str) -> Option<Rgb> {
    let caps = HEX.captures(input)?;
    let digits = &caps[1];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb {
        r: byte(0)?,
        g: byte(2)?,
        b: byte(4)?,
    })
}

fn parse_rgb(input: &str) -> Option<Rgb> {
    let caps = RGB.captures(input)?;
    Some(Rgb {
        r: component(&caps, 1, 255)? as u8,
        g: component(&caps, 2, 255)? as u8,
        b: component(&caps, 3, 255)? as u8,
    })
}

fn parse_hsl(input: &str) -> Option<Hsl> {
    let caps = HSL.captures(input)?;
    Some(Hsl {
        h: component(&caps, 1, 360)?,
        s: component(&caps, 2, 100)? as u8,
        l: component(&caps, 3, 100)? as u8,
    })
}

/// Detect the color grammar, trying HEX, then RGB, then HSL.
///
/// Components outside their range (`0..=255` for RGB channels, `0..=360`
/// for hue, `0..=100` for percentages) make the input unrecognized.
pub fn parse_color(input: &str, format: InputFormat) -> Result<ParsedColor, TransformError> {
    let input = input.trim();

    if format.allows(ColorFormat::Hex) {
        if let Some(rgb) = parse_hex(input) {
            return Ok(ParsedColor {
                format: ColorFormat::Hex,
                rgb,
                hsl: rgb.to_hsl(),
            });
        }
    }
    if format.allows(ColorFormat::Rgb) {
        if let Some(rgb) = parse_rgb(input) {
            return Ok(ParsedColor {
                format: ColorFormat::Rgb,
                rgb,
                hsl: rgb.to_hsl(),
            });
        }
    }
    if format.allows(ColorFormat::Hsl) {
        if let Some(hsl) = parse_hsl(input) {
            return Ok(ParsedColor {
                format: ColorFormat::Hsl,
                rgb: hsl.to_rgb(),
                hsl,
            });
        }
    }

    Err(TransformError::InvalidFormat(UNRECOGNIZED.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOptions {
    pub input_format: InputFormat,
    pub show_all_formats: bool,
    pub show_color_preview: bool,
}

fn percent(channel: u8) -> u32 {
    (f64::from(channel) / 255.0 * 100.0).round() as u32
}

pub fn convert_color(text: &str, options: ColorOptions) -> Result<String, TransformError> {
    let input = text.trim();
    if input.is_empty() {
        return Ok("Please enter a color code to convert.".to_string());
    }

    let color = parse_color(input, options.input_format)?;
    let Rgb { r, g, b } = color.rgb;
    let Hsl { h, s, l } = color.hsl;
    let hex = color.rgb.to_hex();

    let mut out = String::from("Color Code Conversion\n====================\n\n");
    let _ = writeln!(out, "Input: {input} ({})\n", color.format);

    if options.show_all_formats {
        out.push_str("All Color Formats:\n");
        let _ = writeln!(out, "• HEX: {hex}");
        let _ = writeln!(out, "• RGB: rgb({r}, {g}, {b})");
        let _ = writeln!(out, "• HSL: hsl({h}, {s}%, {l}%)");
        let _ = writeln!(out, "• RGB Decimal: {r}, {g}, {b}");
        let _ = writeln!(
            out,
            "• RGB Percentage: {}%, {}%, {}%\n",
            percent(r),
            percent(g),
            percent(b)
        );
    } else {
        match color.format {
            ColorFormat::Hex => {
                let _ = writeln!(out, "RGB: rgb({r}, {g}, {b})");
                let _ = writeln!(out, "HSL: hsl({h}, {s}%, {l}%)");
            }
            ColorFormat::Rgb => {
                let _ = writeln!(out, "HEX: {hex}");
                let _ = writeln!(out, "HSL: hsl({h}, {s}%, {l}%)");
            }
            ColorFormat::Hsl => {
                let _ = writeln!(out, "HEX: {hex}");
                let _ = writeln!(out, "RGB: rgb({r}, {g}, {b})");
            }
        }
    }

    if options.show_color_preview {
        out.push_str("\nColor Preview:\n");
        for _ in 0..3 {
            out.push_str(&"█".repeat(25));
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "Note: Color preview shown as blocks. In a browser, this would be: rgb({r}, {g}, {b})"
        );
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const AUTO: ColorOptions = ColorOptions {
        input_format: InputFormat::Auto,
        show_all_formats: false,
        show_color_preview: false,
    };

    // ============================================================================
    // Conversion tests
    // ============================================================================

    #[test]
    fn test_hex_short_and_long() {
        let short = parse_color("#f00", InputFormat::Auto).unwrap();
        let long = parse_color("FF0000", InputFormat::Auto).unwrap();
        assert_eq!(short.rgb, Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(short.rgb, long.rgb);
        assert_eq!(short.format, ColorFormat::Hex);
        assert_eq!(short.hsl, Hsl { h: 0, s: 100, l: 50 });
    }

    #[test]
    fn test_rgb_to_hsl() {
        let color = parse_color("rgb(0, 128, 255)", InputFormat::Auto).unwrap();
        assert_eq!(color.format, ColorFormat::Rgb);
        assert_eq!(color.hsl, Hsl { h: 210, s: 100, l: 50 });
        assert_eq!(color.rgb.to_hex(), "#0080FF");
    }

    #[test]
    fn test_hsl_to_rgb() {
        let color = parse_color("hsl(120, 100%, 25%)", InputFormat::Auto).unwrap();
        assert_eq!(color.format, ColorFormat::Hsl);
        assert_eq!(color.rgb, Rgb { r: 0, g: 128, b: 0 });
    }

    #[test]
    fn test_grey_has_no_hue() {
        let color = parse_color("#808080", InputFormat::Auto).unwrap();
        assert_eq!(color.hsl, Hsl { h: 0, s: 0, l: 50 });
    }

    #[test]
    fn test_restricted_format() {
        let err = parse_color("#fff", InputFormat::Only(ColorFormat::Rgb)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(parse_color("rgb(1,2,3)", InputFormat::from_choice("rgb")).is_ok());
    }

    #[test]
    fn test_out_of_range_components_are_rejected() {
        for bad in ["rgb(256, 0, 0)", "hsl(361, 50%, 50%)", "hsl(10, 101%, 50%)"] {
            assert!(parse_color(bad, InputFormat::Auto).is_err(), "{bad}");
        }
    }

    // ============================================================================
    // Report tests
    // ============================================================================

    #[test]
    fn test_convert_primary_output() {
        let out = convert_color("  #00ff00 ", AUTO).unwrap();
        assert_eq!(
            out,
            "Color Code Conversion\n====================\n\nInput: #00ff00 (HEX)\n\nRGB: rgb(0, 255, 0)\nHSL: hsl(120, 100%, 50%)\n"
        );
    }

    #[test]
    fn test_convert_all_formats_and_preview() {
        let options = ColorOptions {
            show_all_formats: true,
            show_color_preview: true,
            ..AUTO
        };
        let out = convert_color("rgb(255, 128, 0)", options).unwrap();
        assert!(out.contains("• HEX: #FF8000\n"));
        assert!(out.contains("• RGB Percentage: 100%, 50%, 0%\n"));
        assert!(out.contains("Color Preview:\n█████████████████████████\n"));
        assert!(out.ends_with("this would be: rgb(255, 128, 0)\n"));
    }

    #[test]
    fn test_convert_prompts_and_errors() {
        assert_eq!(convert_color(" ", AUTO).unwrap(), "Please enter a color code to convert.");
        let err = convert_color("blue", AUTO).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().starts_with("Could not detect color format."));
        assert!(err.to_string().ends_with("• HSL: hsl(0, 100%, 50%)"));
    }
}
