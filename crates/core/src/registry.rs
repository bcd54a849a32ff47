//! Static catalog of every tool, its display metadata and its configuration fields.
//!
//! The catalog is built once on first access and never mutated afterwards.
//! Presentation layers use it to render controls; the dispatcher uses it to
//! resolve a caller's configuration into typed [`crate::config::Settings`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Identifier of a tool. The serialized form is the lowercase id used by
/// every front-end (`"titlecase"`, `"jsonformatter"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Uppercase,
    Lowercase,
    TitleCase,
    SentenceCase,
    WordCount,
    Reverse,
    RemoveSpaces,
    RemoveBreaks,
    RemoveDuplicates,
    SortLines,
    RandomLine,
    Encode,
    Base64,
    Html,
    Ascii,
    Password,
    Lorem,
    Diff,
    Stats,
    FindReplace,
    TextCleaner,
    SmartFormatter,
    WordFrequency,
    Readability,
    JsonFormatter,
    HtmlMinifier,
    RegexTester,
    CharFrequency,
    KeywordDensity,
    MetaTag,
    TitleOptimizer,
    Grammar,
    Plagiarism,
    XmlToJson,
    UrlEncoder,
    CssMinifier,
    JsBeautifier,
    ColorConverter,
    HashGenerator,
}

impl ToolId {
    pub const ALL: [ToolId; 39] = [
        ToolId::Uppercase,
        ToolId::Lowercase,
        ToolId::TitleCase,
        ToolId::SentenceCase,
        ToolId::WordCount,
        ToolId::Reverse,
        ToolId::RemoveSpaces,
        ToolId::RemoveBreaks,
        ToolId::RemoveDuplicates,
        ToolId::SortLines,
        ToolId::RandomLine,
        ToolId::Encode,
        ToolId::Base64,
        ToolId::Html,
        ToolId::Ascii,
        ToolId::Password,
        ToolId::Lorem,
        ToolId::Diff,
        ToolId::Stats,
        ToolId::FindReplace,
        ToolId::TextCleaner,
        ToolId::SmartFormatter,
        ToolId::WordFrequency,
        ToolId::Readability,
        ToolId::JsonFormatter,
        ToolId::HtmlMinifier,
        ToolId::RegexTester,
        ToolId::CharFrequency,
        ToolId::KeywordDensity,
        ToolId::MetaTag,
        ToolId::TitleOptimizer,
        ToolId::Grammar,
        ToolId::Plagiarism,
        ToolId::XmlToJson,
        ToolId::UrlEncoder,
        ToolId::CssMinifier,
        ToolId::JsBeautifier,
        ToolId::ColorConverter,
        ToolId::HashGenerator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Uppercase => "uppercase",
            ToolId::Lowercase => "lowercase",
            ToolId::TitleCase => "titlecase",
            ToolId::SentenceCase => "sentencecase",
            ToolId::WordCount => "wordcount",
            ToolId::Reverse => "reverse",
            ToolId::RemoveSpaces => "removespaces",
            ToolId::RemoveBreaks => "removebreaks",
            ToolId::RemoveDuplicates => "removeduplicates",
            ToolId::SortLines => "sortlines",
            ToolId::RandomLine => "randomline",
            ToolId::Encode => "encode",
            ToolId::Base64 => "base64",
            ToolId::Html => "html",
            ToolId::Ascii => "ascii",
            ToolId::Password => "password",
            ToolId::Lorem => "lorem",
            ToolId::Diff => "diff",
            ToolId::Stats => "stats",
            ToolId::FindReplace => "findreplace",
            ToolId::TextCleaner => "textcleaner",
            ToolId::SmartFormatter => "smartformatter",
            ToolId::WordFrequency => "wordfrequency",
            ToolId::Readability => "readability",
            ToolId::JsonFormatter => "jsonformatter",
            ToolId::HtmlMinifier => "htmlminifier",
            ToolId::RegexTester => "regextester",
            ToolId::CharFrequency => "charfrequency",
            ToolId::KeywordDensity => "keyworddensity",
            ToolId::MetaTag => "metatag",
            ToolId::TitleOptimizer => "titleoptimizer",
            ToolId::Grammar => "grammar",
            ToolId::Plagiarism => "plagiarism",
            ToolId::XmlToJson => "xmltojson",
            ToolId::UrlEncoder => "urlencoder",
            ToolId::CssMinifier => "cssminifier",
            ToolId::JsBeautifier => "jsbeautifier",
            ToolId::ColorConverter => "colorconverter",
            ToolId::HashGenerator => "hashgenerator",
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown tool: {s}"))
    }
}

/// What a tool consumes besides its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Primary text only.
    Text,
    /// Primary text compared against a secondary text.
    TextPair,
    /// No input text; output is generated from the configuration.
    Generator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    SingleSelect,
    RadioGroup,
}

impl FieldKind {
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::SingleSelect | FieldKind::RadioGroup)
    }
}

/// A configuration value as supplied by a caller or declared as a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawFieldValue")]
pub enum FieldValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

/// Wire shape of a [`FieldValue`]. Fractional numbers truncate toward zero.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<RawFieldValue> for FieldValue {
    fn from(raw: RawFieldValue) -> Self {
        match raw {
            RawFieldValue::Bool(b) => FieldValue::Bool(b),
            RawFieldValue::Integer(n) => FieldValue::Number(n),
            RawFieldValue::Float(f) => FieldValue::Number(f.trunc() as i64),
            RawFieldValue::Text(s) => FieldValue::Text(s),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [Choice],
}

fn no_options(options: &&'static [Choice]) -> bool {
    options.is_empty()
}

/// Declarative description of one configuration control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: FieldValue,
    pub constraints: Constraints,
}

impl FieldSpec {
    fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            default: FieldValue::Text(String::new()),
            constraints: Constraints::default(),
        }
    }

    fn number(
        name: &'static str,
        label: &'static str,
        default: i64,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            default: FieldValue::Number(default),
            constraints: Constraints {
                min,
                max,
                options: &[],
            },
        }
    }

    fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Boolean,
            default: FieldValue::Bool(default),
            constraints: Constraints::default(),
        }
    }

    fn select(
        name: &'static str,
        label: &'static str,
        default: &'static str,
        options: &'static [Choice],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::SingleSelect,
            default: FieldValue::Text(default.to_string()),
            constraints: Constraints {
                min: None,
                max: None,
                options,
            },
        }
    }

    fn radio(
        name: &'static str,
        label: &'static str,
        default: &'static str,
        options: &'static [Choice],
    ) -> Self {
        Self {
            kind: FieldKind::RadioGroup,
            ..Self::select(name, label, default, options)
        }
    }

    /// Whether `value` has the right shape for this field and satisfies its constraints.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self.kind, value) {
            (FieldKind::Boolean, FieldValue::Bool(_)) => true,
            (FieldKind::Number, FieldValue::Number(n)) => {
                self.constraints.min.map_or(true, |min| *n >= min)
                    && self.constraints.max.map_or(true, |max| *n <= max)
            }
            (FieldKind::Text, FieldValue::Text(_)) => true,
            (kind, FieldValue::Text(s)) if kind.is_choice() => {
                self.constraints.options.iter().any(|c| c.value == s)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub title: &'static str,
    pub description: &'static str,
    pub input: InputMode,
    pub fields: Vec<FieldSpec>,
}

impl ToolDescriptor {
    fn new(id: ToolId, title: &'static str, description: &'static str) -> Self {
        Self {
            id,
            title,
            description,
            input: InputMode::Text,
            fields: Vec::new(),
        }
    }

    fn input(mut self, input: InputMode) -> Self {
        self.input = input;
        self
    }

    fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const ENCODE_ACTIONS: &[Choice] = &[choice("encode", "Encode"), choice("decode", "Decode")];
const SORT_ORDERS: &[Choice] = &[
    choice("asc", "Ascending (A-Z)"),
    choice("desc", "Descending (Z-A)"),
];
const JSON_ACTIONS: &[Choice] = &[
    choice("format", "Format & Beautify"),
    choice("minify", "Minify"),
    choice("validate", "Validate Only"),
];
const HTML_MINIFY_ACTIONS: &[Choice] = &[choice("minify", "Minify"), choice("beautify", "Beautify")];
const ROBOTS_DIRECTIVES: &[Choice] = &[
    choice("index,follow", "Index, Follow"),
    choice("noindex,follow", "No Index, Follow"),
    choice("index,nofollow", "Index, No Follow"),
    choice("noindex,nofollow", "No Index, No Follow"),
];
const URL_OPERATIONS: &[Choice] = &[choice("encode", "Encode URL"), choice("decode", "Decode URL")];
const JS_INDENTS: &[Choice] = &[
    choice("2", "2 spaces"),
    choice("4", "4 spaces"),
    choice("tab", "Tab"),
];
const COLOR_FORMATS: &[Choice] = &[
    choice("auto", "Auto-detect"),
    choice("hex", "HEX (#RRGGBB)"),
    choice("rgb", "RGB (r, g, b)"),
    choice("hsl", "HSL (h, s%, l%)"),
];
const HASH_ALGORITHMS: &[Choice] = &[
    choice("md5", "MD5"),
    choice("sha1", "SHA-1"),
    choice("sha256", "SHA-256"),
    choice("all", "All algorithms"),
];

static REGISTRY: LazyLock<Vec<ToolDescriptor>> = LazyLock::new(build_registry);

fn build_registry() -> Vec<ToolDescriptor> {
    use FieldSpec as F;
    use ToolDescriptor as T;
    use ToolId::*;

    vec![
        T::new(Uppercase, "Uppercase Converter", "Convert text to UPPERCASE letters"),
        T::new(Lowercase, "Lowercase Converter", "Convert text to lowercase letters"),
        T::new(TitleCase, "Title Case Converter", "Convert Text To Title Case Format"),
        T::new(SentenceCase, "Sentence Case Converter", "Convert text to sentence case format"),
        T::new(WordCount, "Word Counter", "Count words, characters, and paragraphs"),
        T::new(Reverse, "Text Reverser", "Reverse your text backwards"),
        T::new(RemoveSpaces, "Remove Extra Spaces", "Clean up extra spaces from text"),
        T::new(RemoveBreaks, "Remove Line Breaks", "Remove all line breaks from text"),
        T::new(RemoveDuplicates, "Remove Duplicate Lines", "Remove duplicate lines from text"),
        T::new(SortLines, "Sort Lines", "Sort text lines alphabetically")
            .fields(vec![F::select("order", "Sort order", "asc", SORT_ORDERS)]),
        T::new(RandomLine, "Random Line Picker", "Pick random lines from text")
            .fields(vec![F::number("count", "Number of lines", 1, Some(1), None)]),
        T::new(Encode, "URL Encoder/Decoder", "Encode or decode URL text")
            .fields(vec![F::select("action", "Action", "encode", ENCODE_ACTIONS)]),
        T::new(Base64, "Base64 Encoder/Decoder", "Encode or decode Base64 text")
            .fields(vec![F::select("action", "Action", "encode", ENCODE_ACTIONS)]),
        T::new(Html, "HTML Encoder/Decoder", "Encode or decode HTML entities")
            .fields(vec![F::select("action", "Action", "encode", ENCODE_ACTIONS)]),
        T::new(Ascii, "Text to ASCII Art", "Convert text to ASCII art"),
        T::new(Password, "Password Generator", "Generate secure passwords")
            .input(InputMode::Generator)
            .fields(vec![
                F::number("length", "Length", 12, Some(4), Some(128)),
                F::flag("uppercase", "Uppercase", true),
                F::flag("lowercase", "Lowercase", true),
                F::flag("numbers", "Numbers", true),
                F::flag("symbols", "Symbols", false),
            ]),
        T::new(Lorem, "Lorem Ipsum Generator", "Generate placeholder text")
            .input(InputMode::Generator)
            .fields(vec![F::number("paragraphs", "Paragraphs", 3, Some(1), Some(20))]),
        T::new(Diff, "Text Difference Checker", "Compare two texts for differences")
            .input(InputMode::TextPair),
        T::new(Stats, "Text Statistics", "Detailed text analysis and statistics"),
        T::new(FindReplace, "Find & Replace", "Find and replace text patterns").fields(vec![
            F::text("find", "Find text"),
            F::text("replace", "Replace with"),
            F::flag("case_sensitive", "Case sensitive", false),
            F::flag("regex_mode", "Regex mode", false),
        ]),
        T::new(
            TextCleaner,
            "Text Cleaner Pro",
            "Remove extra spaces, line breaks, and special characters",
        )
        .fields(vec![
            F::flag("remove_extra_spaces", "Remove extra spaces", true),
            F::flag("remove_line_breaks", "Remove line breaks", true),
            F::flag("remove_special_chars", "Remove special characters", false),
            F::flag("trim_lines", "Trim each line", true),
        ]),
        T::new(SmartFormatter, "Smart Formatter", "Automatically format and capitalize text")
            .fields(vec![
                F::flag("auto_capitalize", "Auto capitalize sentences", true),
                F::flag("fix_punctuation", "Fix punctuation", true),
                F::flag("proper_nouns", "Capitalize proper nouns", false),
                F::flag("fix_spacing", "Fix spacing", true),
            ]),
        T::new(
            WordFrequency,
            "Word Frequency Analyzer",
            "Analyze word frequency and usage patterns",
        )
        .fields(vec![
            F::number("min_word_length", "Min word length", 3, Some(1), None),
            F::flag("case_insensitive", "Case insensitive", true),
            F::flag("ignore_common", "Ignore common words", true),
        ]),
        T::new(Readability, "Readability Score", "Calculate Flesch Reading Ease and grade level"),
        T::new(JsonFormatter, "JSON Formatter", "Format, validate and beautify JSON").fields(vec![
            F::select("action", "Action", "format", JSON_ACTIONS),
            F::number("indent_size", "Indent size", 2, Some(1), Some(8)),
        ]),
        T::new(HtmlMinifier, "HTML Minifier", "Minify or beautify HTML code").fields(vec![
            F::select("action", "Action", "minify", HTML_MINIFY_ACTIONS),
            F::flag("remove_comments", "Remove comments", true),
            F::flag("remove_whitespace", "Remove extra whitespace", true),
        ]),
        T::new(RegexTester, "Regex Tester", "Test regular expressions and find matches").fields(
            vec![
                F::text("pattern", "Regex pattern"),
                FieldSpec {
                    default: FieldValue::Text("g".to_string()),
                    ..F::text("flags", "Flags (g,i,m,s)")
                },
                F::flag("show_groups", "Show capture groups", false),
            ],
        ),
        T::new(
            CharFrequency,
            "Character Frequency",
            "Analyze character frequency and distribution",
        )
        .fields(vec![
            F::flag("include_spaces", "Include spaces", true),
            F::flag("case_sensitive", "Case sensitive", false),
            F::flag("show_percentages", "Show percentages", true),
        ]),
        T::new(
            KeywordDensity,
            "Keyword Density Checker",
            "Check keyword density for SEO optimization",
        )
        .fields(vec![
            F::text("keyword", "Target keyword"),
            F::number("min_keyword_length", "Min keyword length", 2, Some(1), None),
            F::flag("case_insensitive", "Case insensitive", true),
            F::flag("show_positions", "Show positions", false),
        ]),
        T::new(MetaTag, "Meta Tag Generator", "Generate SEO meta tags for websites")
            .input(InputMode::Generator)
            .fields(vec![
                F::text("page_title", "Page Title (max 60 chars)"),
                F::text("description", "Meta Description (max 160 chars)"),
                F::text("keywords", "Keywords (comma separated)"),
                F::text("author", "Author Name"),
                F::select("robots", "Robots directive", "index,follow", ROBOTS_DIRECTIVES),
            ]),
        T::new(
            TitleOptimizer,
            "Title & Description Optimizer",
            "Optimize page titles and meta descriptions",
        )
        .input(InputMode::Generator)
        .fields(vec![
            F::text("title", "SEO Title"),
            F::text("description", "Meta Description"),
            F::text("focus_keyword", "Focus keyword (optional)"),
        ]),
        T::new(Grammar, "Grammar Helper", "Basic grammar and spelling checker").fields(vec![
            F::flag("check_spelling", "Check spelling", true),
            F::flag("check_grammar", "Check grammar", true),
            F::flag("suggest_improvements", "Suggest improvements", true),
        ]),
        T::new(Plagiarism, "Plagiarism Checker", "Check text for potential plagiarism").fields(
            vec![
                F::number("min_match_length", "Min match length", 5, Some(3), None),
                F::flag("ignore_common_phrases", "Ignore common phrases", true),
                F::flag("case_sensitive", "Case sensitive", false),
            ],
        ),
        T::new(XmlToJson, "XML to JSON Converter", "Convert XML data to JSON format").fields(
            vec![
                F::flag("pretty_print", "Pretty print JSON", true),
                F::flag("preserve_attributes", "Preserve XML attributes", true),
                F::flag("array_notation", "Use array notation for single elements", false),
            ],
        ),
        T::new(
            UrlEncoder,
            "URL Encoder/Decoder Pro",
            "Advanced URL encoding and decoding with component support",
        )
        .fields(vec![
            F::radio("operation", "Operation", "encode", URL_OPERATIONS),
            F::flag("encode_components", "Encode URL components separately", true),
            F::flag("show_url_parts", "Show URL parts breakdown", false),
        ]),
        T::new(CssMinifier, "CSS Minifier", "Minify and optimize CSS code").fields(vec![
            F::flag("remove_comments", "Remove comments", true),
            F::flag("remove_whitespace", "Remove whitespace", true),
            F::flag("optimize_colors", "Optimize color codes", true),
            F::flag("merge_rules", "Merge duplicate rules", false),
        ]),
        T::new(JsBeautifier, "JavaScript Beautifier", "Format and beautify JavaScript code")
            .fields(vec![
                F::select("indent", "Indent Size", "4", JS_INDENTS),
                F::flag("preserve_newlines", "Preserve newlines", true),
                F::flag("space_before_conditional", "Space before conditionals", true),
            ]),
        T::new(
            ColorConverter,
            "Color Code Converter",
            "Convert between HEX, RGB, HSL color formats",
        )
        .fields(vec![
            F::select("input_format", "Input Format", "auto", COLOR_FORMATS),
            F::flag("show_all_formats", "Show all formats", true),
            F::flag("show_color_preview", "Show color preview", true),
        ]),
        T::new(
            HashGenerator,
            "Hash Generator",
            "Generate demonstration MD5, SHA1, SHA256-length hashes (not cryptographic)",
        )
        .fields(vec![
            F::select("algorithm", "Hash Algorithm", "sha256", HASH_ALGORITHMS),
            F::flag("uppercase", "Uppercase output", false),
            F::flag("include_length", "Include hash length", false),
        ]),
    ]
}

/// Every tool in catalog order.
pub fn list_tools() -> &'static [ToolDescriptor] {
    &REGISTRY
}

/// Find a tool by its string id. Unknown ids return `None`.
pub fn lookup(id: &str) -> Option<&'static ToolDescriptor> {
    let id = id.parse::<ToolId>().ok()?;
    descriptor(id)
}

pub fn descriptor(id: ToolId) -> Option<&'static ToolDescriptor> {
    REGISTRY.iter().find(|tool| tool.id == id)
}

/// Title to show for a tool id, `"Unknown Tool"` when the id is not registered.
pub fn display_title(id: &str) -> &'static str {
    lookup(id).map_or("Unknown Tool", |tool| tool.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_covers_every_tool_id_once() {
        let ids: Vec<ToolId> = list_tools().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), ToolId::ALL.len());
        assert_eq!(ids, ToolId::ALL.to_vec());
    }

    #[test]
    fn test_every_default_satisfies_its_constraints() {
        for tool in list_tools() {
            for field in &tool.fields {
                assert!(
                    field.accepts(&field.default),
                    "{}.{} default {:?} violates its constraints",
                    tool.id,
                    field.name,
                    field.default
                );
            }
        }
    }

    #[test]
    fn test_field_names_are_unique_per_tool() {
        for tool in list_tools() {
            let names: HashSet<_> = tool.fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), tool.fields.len(), "duplicate field in {}", tool.id);
        }
    }

    #[test]
    fn test_tool_id_round_trips_through_str() {
        for id in ToolId::ALL {
            assert_eq!(id.as_str().parse::<ToolId>().unwrap(), id);
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("base64").unwrap().title, "Base64 Encoder/Decoder");
        assert!(lookup("nope").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_display_title_unknown() {
        assert_eq!(display_title("sortlines"), "Sort Lines");
        assert_eq!(display_title("frobnicate"), "Unknown Tool");
    }

    #[test]
    fn test_input_modes() {
        assert_eq!(descriptor(ToolId::Diff).unwrap().input, InputMode::TextPair);
        assert_eq!(descriptor(ToolId::Password).unwrap().input, InputMode::Generator);
        assert_eq!(descriptor(ToolId::Lorem).unwrap().input, InputMode::Generator);
        assert_eq!(descriptor(ToolId::Uppercase).unwrap().input, InputMode::Text);
    }

    #[test]
    fn test_accepts_rejects_wrong_shape() {
        let tool = descriptor(ToolId::SortLines).unwrap();
        let order = tool.field("order").unwrap();
        assert!(order.accepts(&FieldValue::Text("desc".into())));
        assert!(!order.accepts(&FieldValue::Text("sideways".into())));
        assert!(!order.accepts(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_accepts_checks_number_bounds() {
        let tool = descriptor(ToolId::Password).unwrap();
        let length = tool.field("length").unwrap();
        assert!(length.accepts(&FieldValue::Number(4)));
        assert!(length.accepts(&FieldValue::Number(128)));
        assert!(!length.accepts(&FieldValue::Number(3)));
        assert!(!length.accepts(&FieldValue::Number(129)));
    }
}
