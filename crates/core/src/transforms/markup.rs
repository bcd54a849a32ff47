//! Regex-driven HTML, CSS and JavaScript formatters.
//!
//! None of these parse their input language; they rewrite whitespace and
//! braces with a handful of patterns and are meant for quick clean-ups.

use super::yes_no;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());
static BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<([A-Za-z][\w:-]*)").unwrap());

static CSS_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());
static CSS_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([{};:,])\s*").unwrap());
static HEX6: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([0-9a-fA-F]{6})").unwrap());
static RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());
static CSS_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^{]+)\{([^}]+)\}").unwrap());

static CONDITIONAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(if|for|while|switch)\(").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// ============================================================================
// HTML
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlAction {
    Minify,
    Beautify,
}

impl HtmlAction {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "beautify" => HtmlAction::Beautify,
            _ => HtmlAction::Minify,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    pub action: HtmlAction,
    pub remove_comments: bool,
    pub remove_whitespace: bool,
}

pub fn minify_html(text: &str, remove_comments: bool, remove_whitespace: bool) -> String {
    let mut result = text.to_string();
    if remove_comments {
        result = HTML_COMMENT.replace_all(&result, "").into_owned();
    }
    if remove_whitespace {
        let joined = BETWEEN_TAGS.replace_all(&result, "><");
        result = WHITESPACE.replace_all(&joined, " ").trim().to_string();
    }
    result
}

/// Does this line leave an element open for the following lines?
fn opens_block(line: &str) -> bool {
    if line.starts_with("</") || line.ends_with("/>") || line.contains("</") {
        return false;
    }
    match OPENING_TAG.captures(line) {
        Some(caps) => !VOID_ELEMENTS.contains(&caps[1].to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// One tag per line, indented two spaces per open element.
pub fn beautify_html(text: &str) -> String {
    let split = text.replace("><", ">\n<");
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for line in split.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }
        lines.push(format!("{}{line}", "  ".repeat(depth)));
        if opens_block(line) {
            depth += 1;
        }
    }

    lines.join("\n")
}

pub fn html_minifier(text: &str, options: HtmlOptions) -> String {
    match options.action {
        HtmlAction::Minify => minify_html(text, options.remove_comments, options.remove_whitespace),
        HtmlAction::Beautify => beautify_html(text),
    }
}

// ============================================================================
// CSS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssOptions {
    pub remove_comments: bool,
    pub remove_whitespace: bool,
    pub optimize_colors: bool,
    pub merge_rules: bool,
}

/// `#aabbcc` becomes `#abc`; `rgb(r, g, b)` becomes hex when that is shorter.
pub fn optimize_colors(css: &str) -> String {
    let shortened = HEX6.replace_all(css, |caps: &Captures| {
        let digits: Vec<char> = caps[1].chars().collect();
        if digits[0] == digits[1] && digits[2] == digits[3] && digits[4] == digits[5] {
            format!("#{}{}{}", digits[0], digits[2], digits[4])
        } else {
            caps[0].to_string()
        }
    });

    RGB.replace_all(&shortened, |caps: &Captures| {
        let channels: Result<Vec<u64>, _> = (1..=3).map(|i| caps[i].parse::<u64>()).collect();
        match channels {
            Ok(channels) => {
                let hex: String = channels.iter().map(|c| format!("{c:02x}")).collect();
                let hex = format!("#{hex}");
                if hex.len() <= caps[0].len() {
                    hex
                } else {
                    caps[0].to_string()
                }
            }
            Err(_) => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// Group rules with identical declaration blocks under one selector list.
pub fn merge_rules(css: &str) -> String {
    let mut rules: Vec<(&str, String)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for caps in CSS_RULE.captures_iter(css) {
        let selector = caps.get(1).map_or("", |m| m.as_str()).trim();
        let declarations = caps.get(2).map_or("", |m| m.as_str()).trim();
        match index.get(declarations) {
            Some(&i) => {
                let selectors = &mut rules[i].1;
                selectors.push(',');
                selectors.push_str(selector);
            }
            None => {
                index.insert(declarations, rules.len());
                rules.push((declarations, selector.to_string()));
            }
        }
    }

    rules
        .iter()
        .map(|(declarations, selectors)| format!("{selectors}{{{declarations}}}"))
        .collect()
}

pub fn minify_css(text: &str, options: CssOptions) -> String {
    let mut minified = text.to_string();

    if options.remove_comments {
        minified = CSS_COMMENT.replace_all(&minified, "").into_owned();
    }
    if options.remove_whitespace {
        let collapsed = WHITESPACE.replace_all(&minified, " ");
        minified = CSS_PUNCTUATION.replace_all(&collapsed, "$1").trim().to_string();
    }
    if options.optimize_colors {
        minified = optimize_colors(&minified);
    }
    if options.merge_rules {
        let merged = merge_rules(&minified);
        if merged.chars().count() < minified.chars().count() {
            minified = merged;
        }
    }

    let original_size = text.chars().count();
    let minified_size = minified.chars().count();
    let savings = original_size as i64 - minified_size as i64;
    let percentage = if original_size == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", savings as f64 / original_size as f64 * 100.0)
    };

    let mut out = String::from("CSS Minification Results\n========================\n\n");
    let _ = writeln!(out, "Minified CSS:\n{minified}\n");
    out.push_str("Optimization Results:\n");
    let _ = writeln!(out, "• Original size: {original_size} characters");
    let _ = writeln!(out, "• Minified size: {minified_size} characters");
    let _ = writeln!(out, "• Size reduction: {savings} characters ({percentage}%)\n");
    out.push_str("Options applied:\n");
    let _ = writeln!(out, "• Remove comments: {}", yes_no(options.remove_comments));
    let _ = writeln!(out, "• Remove whitespace: {}", yes_no(options.remove_whitespace));
    let _ = writeln!(out, "• Optimize colors: {}", yes_no(options.optimize_colors));
    let _ = writeln!(out, "• Merge rules: {}", yes_no(options.merge_rules));
    out
}

// ============================================================================
// JavaScript
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "tab" => Indent::Tab,
            n => Indent::Spaces(n.parse().unwrap_or(4)),
        }
    }

    fn unit(self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(n),
            Indent::Tab => "\t".to_string(),
        }
    }

    fn describe(self) -> String {
        match self {
            Indent::Spaces(n) => format!("{n} spaces"),
            Indent::Tab => "Tab".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsOptions {
    pub indent: Indent,
    pub preserve_newlines: bool,
    pub space_before_conditional: bool,
}

/// Break after `;`, `{`, `,` and around `}`, then re-indent by brace depth.
pub fn beautify_js_source(text: &str, options: JsOptions) -> String {
    let broken = WHITESPACE
        .replace_all(text, " ")
        .replace(';', ";\n")
        .replace('{', " {\n")
        .replace('}', "\n}\n")
        .replace(',', ",\n");

    let unit = options.indent.unit();
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for line in broken.split('\n').map(str::trim) {
        if line.is_empty() {
            if options.preserve_newlines {
                lines.push(String::new());
            }
            continue;
        }
        if line.starts_with('}') {
            depth = depth.saturating_sub(1);
        }
        lines.push(format!("{}{line}", unit.repeat(depth)));
        if line.ends_with('{') {
            depth += 1;
        }
    }

    let mut beautified = lines.join("\n");
    if options.space_before_conditional {
        beautified = CONDITIONAL.replace_all(&beautified, "$1 (").into_owned();
    }
    BLANK_RUN.replace_all(&beautified, "\n\n").into_owned()
}

pub fn beautify_js(text: &str, options: JsOptions) -> String {
    let beautified = beautify_js_source(text, options);

    let mut out = String::from("JavaScript Beautification Results\n=================================\n\n");
    let _ = writeln!(out, "Beautified JavaScript:\n{beautified}\n");
    out.push_str("Formatting Options:\n");
    let _ = writeln!(out, "• Indent: {}", options.indent.describe());
    let _ = writeln!(out, "• Preserve newlines: {}", yes_no(options.preserve_newlines));
    let _ = writeln!(
        out,
        "• Space before conditionals: {}",
        yes_no(options.space_before_conditional)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // HTML tests
    // ============================================================================

    #[test]
    fn test_minify_html() {
        let html = "<div>\n  <!-- note -->\n  <p>Hello   world</p>\n</div>\n";
        assert_eq!(minify_html(html, true, true), "<div><p>Hello world</p></div>");
        assert_eq!(minify_html(html, false, false), html);
    }

    #[test]
    fn test_beautify_html_indents_nested_elements() {
        let html = "<html><body><div><p>Hi</p><br><img src=\"a.png\"/></div></body></html>";
        assert_eq!(
            beautify_html(html),
            "<html>\n  <body>\n    <div>\n      <p>Hi</p>\n      <br>\n      <img src=\"a.png\"/>\n    </div>\n  </body>\n</html>"
        );
    }

    #[test]
    fn test_beautify_html_never_goes_negative() {
        assert_eq!(beautify_html("</a></b><c>"), "</a>\n</b>\n<c>");
    }

    // ============================================================================
    // CSS tests
    // ============================================================================

    const ALL_CSS: CssOptions = CssOptions {
        remove_comments: true,
        remove_whitespace: true,
        optimize_colors: true,
        merge_rules: true,
    };

    #[test]
    fn test_optimize_colors() {
        assert_eq!(optimize_colors("color:#AABBCC;b:#aabbcd"), "color:#ABC;b:#aabbcd");
        assert_eq!(optimize_colors("c:rgb(255, 0, 16)"), "c:#ff0010");
    }

    #[test]
    fn test_merge_rules() {
        assert_eq!(merge_rules("a{color:red}b{margin:0}c{color:red}"), "a,c{color:red}b{margin:0}");
    }

    #[test]
    fn test_merge_rules_many_distinct_blocks() {
        let css: String = (0..10_000).map(|i| format!(".c{i}{{z-index:{}}}", i % 100)).collect();
        let merged = merge_rules(&css);
        assert_eq!(merged.matches('{').count(), 100);
        assert!(merged.starts_with(".c0,.c100,.c200,"));
    }

    #[test]
    fn test_minify_css_report() {
        let css = "/* header */\nh1 {\n  color : #ffffff ;\n}\nh2 { color: #ffffff; }\n";
        let out = minify_css(css, ALL_CSS);
        assert!(out.contains("Minified CSS:\nh1,h2{color:#fff;}\n\n"));
        assert!(out.contains("• Original size: 63 characters\n• Minified size: 18 characters\n"));
        assert!(out.contains("• Size reduction: 45 characters (71.4%)\n"));
        assert!(out.ends_with("• Merge rules: Yes\n"));
    }

    #[test]
    fn test_minify_css_empty_input() {
        assert!(minify_css("", ALL_CSS).contains("• Size reduction: 0 characters (0%)"));
    }

    // ============================================================================
    // JavaScript tests
    // ============================================================================

    #[test]
    fn test_beautify_js() {
        let options = JsOptions {
            indent: Indent::Spaces(2),
            preserve_newlines: false,
            space_before_conditional: true,
        };
        assert_eq!(
            beautify_js_source("function f(a,b){if(a){return b;}}", options),
            "function f(a,\nb) {\n  if (a) {\n    return b;\n  }\n}"
        );
    }

    #[test]
    fn test_beautify_js_with_tabs_and_blank_lines() {
        let options = JsOptions {
            indent: Indent::Tab,
            preserve_newlines: true,
            space_before_conditional: false,
        };
        assert_eq!(beautify_js_source("x{y;}", options), "x {\n\ty;\n\n}\n");
    }

    #[test]
    fn test_beautify_js_report() {
        let options = JsOptions {
            indent: Indent::from_choice("4"),
            preserve_newlines: false,
            space_before_conditional: false,
        };
        let out = beautify_js("a;", options);
        assert!(out.contains("Beautified JavaScript:\na;\n\n"));
        assert!(out.contains("• Indent: 4 spaces\n"));
    }

    #[test]
    fn test_indent_from_choice() {
        assert_eq!(Indent::from_choice("tab"), Indent::Tab);
        assert_eq!(Indent::from_choice("2"), Indent::Spaces(2));
    }
}
