//! Routes a [`TransformRequest`] to the transform for its tool.
//!
//! The dispatcher resolves the caller's configuration against the tool's
//! fields, runs the pure transform and folds any failure into a
//! [`TransformResult`]. It never panics on user input.

use crate::config::{Configuration, Settings};
use crate::error::{ErrorKind, TransformError};
use crate::registry::{self, FieldValue, InputMode, ToolDescriptor, ToolId};
use crate::transforms::{
    analysis, ascii_art, case, cleanup, color, diff, encoding, generate, hash, json, lines, markup,
    pattern, seo, xml,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// One invocation of a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub tool_id: String,
    #[serde(default)]
    pub primary_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    #[serde(default)]
    pub configuration: Configuration,
}

impl TransformRequest {
    pub fn new(tool_id: impl Into<String>, primary_text: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            primary_text: primary_text.into(),
            ..Self::default()
        }
    }

    pub fn secondary(mut self, text: impl Into<String>) -> Self {
        self.secondary_text = Some(text.into());
        self
    }

    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.configuration.set(name, value);
        self
    }
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransformResult {
    Output { output_text: String },
    Failed { error_kind: ErrorKind, message: String },
}

impl TransformResult {
    /// Text to show the user: the output, or the failure message.
    pub fn output_text(&self) -> &str {
        match self {
            TransformResult::Output { output_text } => output_text,
            TransformResult::Failed { message, .. } => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TransformResult::Failed { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            TransformResult::Output { .. } => None,
            TransformResult::Failed { error_kind, .. } => Some(*error_kind),
        }
    }
}

impl From<Result<String, TransformError>> for TransformResult {
    fn from(result: Result<String, TransformError>) -> Self {
        match result {
            Ok(output_text) => TransformResult::Output { output_text },
            Err(e) => TransformResult::Failed {
                error_kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// Dispatch with the thread-local random source.
pub fn dispatch(request: &TransformRequest) -> TransformResult {
    dispatch_with_rng(request, &mut rand::thread_rng())
}

/// Dispatch with an injected random source.
///
/// An unregistered tool id echoes the primary text back unchanged.
pub fn dispatch_with_rng(request: &TransformRequest, rng: &mut dyn RngCore) -> TransformResult {
    match registry::lookup(&request.tool_id) {
        Some(tool) => run(tool, request, rng).into(),
        None => TransformResult::Output {
            output_text: request.primary_text.clone(),
        },
    }
}

/// Like [`dispatch_with_rng`], but an unregistered tool id is an
/// [`ErrorKind::UnknownTool`] failure.
pub fn dispatch_known(request: &TransformRequest, rng: &mut dyn RngCore) -> TransformResult {
    match registry::lookup(&request.tool_id) {
        Some(tool) => run(tool, request, rng).into(),
        None => Err(TransformError::UnknownTool(request.tool_id.clone())).into(),
    }
}

fn run(
    tool: &ToolDescriptor,
    request: &TransformRequest,
    rng: &mut dyn RngCore,
) -> Result<String, TransformError> {
    let settings = Settings::resolve(tool, &request.configuration)?;
    let text = request.primary_text.as_str();

    if tool.input != InputMode::Generator && text.is_empty() {
        return Ok(String::new());
    }

    apply(tool.id, text, request.secondary_text.as_deref(), &settings, rng)
}

fn apply(
    id: ToolId,
    text: &str,
    secondary: Option<&str>,
    settings: &Settings,
    rng: &mut dyn RngCore,
) -> Result<String, TransformError> {
    let output = match id {
        ToolId::Uppercase => case::uppercase(text),
        ToolId::Lowercase => case::lowercase(text),
        ToolId::TitleCase => case::title_case(text),
        ToolId::SentenceCase => case::sentence_case(text),
        ToolId::Reverse => case::reverse(text),
        ToolId::WordCount => analysis::word_count(text),
        ToolId::RemoveSpaces => cleanup::remove_extra_spaces(text),
        ToolId::RemoveBreaks => cleanup::remove_line_breaks(text),
        ToolId::RemoveDuplicates => lines::remove_duplicate_lines(text),
        ToolId::SortLines => {
            lines::sort_lines(text, lines::SortOrder::from_choice(settings.text("order")))
        }
        ToolId::RandomLine => lines::pick_random_lines(text, settings.count("count"), rng),
        ToolId::Encode => encoding::url_encode_decode(text, direction(settings, "action"))?,
        ToolId::Base64 => encoding::base64_encode_decode(text, direction(settings, "action"))?,
        ToolId::Html => encoding::html_encode_decode(text, direction(settings, "action")),
        ToolId::Ascii => ascii_art::text_to_ascii(text),
        ToolId::Password => generate::generate_password(
            generate::PasswordOptions {
                length: settings.count("length"),
                uppercase: settings.flag("uppercase"),
                lowercase: settings.flag("lowercase"),
                numbers: settings.flag("numbers"),
                symbols: settings.flag("symbols"),
            },
            rng,
        )?,
        ToolId::Lorem => generate::generate_lorem(settings.count("paragraphs"), rng),
        ToolId::Diff => diff::compare_texts(text, secondary),
        ToolId::Stats => analysis::text_statistics(text),
        ToolId::FindReplace => pattern::find_and_replace(
            text,
            &pattern::FindReplace {
                find: settings.text("find"),
                replace: settings.text("replace"),
                case_sensitive: settings.flag("case_sensitive"),
                regex_mode: settings.flag("regex_mode"),
            },
        )?,
        ToolId::TextCleaner => cleanup::clean_text(
            text,
            cleanup::CleanOptions {
                remove_extra_spaces: settings.flag("remove_extra_spaces"),
                remove_line_breaks: settings.flag("remove_line_breaks"),
                remove_special_chars: settings.flag("remove_special_chars"),
                trim_lines: settings.flag("trim_lines"),
            },
        ),
        ToolId::SmartFormatter => cleanup::smart_format(
            text,
            cleanup::FormatOptions {
                auto_capitalize: settings.flag("auto_capitalize"),
                fix_punctuation: settings.flag("fix_punctuation"),
                proper_nouns: settings.flag("proper_nouns"),
                fix_spacing: settings.flag("fix_spacing"),
            },
        ),
        ToolId::WordFrequency => analysis::word_frequency(
            text,
            analysis::WordFrequencyOptions {
                min_word_length: settings.count("min_word_length"),
                case_insensitive: settings.flag("case_insensitive"),
                ignore_common: settings.flag("ignore_common"),
            },
        ),
        ToolId::Readability => analysis::readability(text),
        ToolId::JsonFormatter => json::format_json(
            text,
            json::JsonAction::from_choice(settings.text("action")),
            settings.count("indent_size"),
        )?,
        ToolId::HtmlMinifier => markup::html_minifier(
            text,
            markup::HtmlOptions {
                action: markup::HtmlAction::from_choice(settings.text("action")),
                remove_comments: settings.flag("remove_comments"),
                remove_whitespace: settings.flag("remove_whitespace"),
            },
        ),
        ToolId::RegexTester => pattern::test_regex(
            text,
            &pattern::RegexTest {
                pattern: settings.text("pattern"),
                flags: settings.text("flags"),
                show_groups: settings.flag("show_groups"),
            },
        )?,
        ToolId::CharFrequency => analysis::char_frequency(
            text,
            analysis::CharFrequencyOptions {
                include_spaces: settings.flag("include_spaces"),
                case_sensitive: settings.flag("case_sensitive"),
                show_percentages: settings.flag("show_percentages"),
            },
        ),
        ToolId::KeywordDensity => seo::keyword_density(
            text,
            &seo::KeywordOptions {
                keyword: settings.text("keyword"),
                min_keyword_length: settings.count("min_keyword_length"),
                case_insensitive: settings.flag("case_insensitive"),
                show_positions: settings.flag("show_positions"),
            },
        )?,
        ToolId::MetaTag => seo::meta_tags(&seo::MetaTagOptions {
            page_title: settings.text("page_title"),
            description: settings.text("description"),
            keywords: settings.text("keywords"),
            author: settings.text("author"),
            robots: settings.text("robots"),
        }),
        ToolId::TitleOptimizer => seo::title_optimizer(&seo::TitleOptions {
            title: settings.text("title"),
            description: settings.text("description"),
            focus_keyword: settings.text("focus_keyword"),
        }),
        ToolId::Grammar => seo::grammar_check(
            text,
            seo::GrammarOptions {
                check_spelling: settings.flag("check_spelling"),
                check_grammar: settings.flag("check_grammar"),
                suggest_improvements: settings.flag("suggest_improvements"),
            },
        ),
        ToolId::Plagiarism => seo::plagiarism_check(
            text,
            seo::PlagiarismOptions {
                min_match_length: settings.count("min_match_length"),
                ignore_common_phrases: settings.flag("ignore_common_phrases"),
                case_sensitive: settings.flag("case_sensitive"),
            },
        ),
        ToolId::XmlToJson => xml::xml_to_json(
            text,
            xml::XmlOptions {
                pretty_print: settings.flag("pretty_print"),
                preserve_attributes: settings.flag("preserve_attributes"),
                array_notation: settings.flag("array_notation"),
            },
        )?,
        ToolId::UrlEncoder => encoding::url_toolkit(
            text,
            encoding::UrlToolOptions {
                direction: direction(settings, "operation"),
                encode_components: settings.flag("encode_components"),
                show_url_parts: settings.flag("show_url_parts"),
            },
        )?,
        ToolId::CssMinifier => markup::minify_css(
            text,
            markup::CssOptions {
                remove_comments: settings.flag("remove_comments"),
                remove_whitespace: settings.flag("remove_whitespace"),
                optimize_colors: settings.flag("optimize_colors"),
                merge_rules: settings.flag("merge_rules"),
            },
        ),
        ToolId::JsBeautifier => markup::beautify_js(
            text,
            markup::JsOptions {
                indent: markup::Indent::from_choice(settings.text("indent")),
                preserve_newlines: settings.flag("preserve_newlines"),
                space_before_conditional: settings.flag("space_before_conditional"),
            },
        ),
        ToolId::ColorConverter => color::convert_color(
            text,
            color::ColorOptions {
                input_format: color::InputFormat::from_choice(settings.text("input_format")),
                show_all_formats: settings.flag("show_all_formats"),
                show_color_preview: settings.flag("show_color_preview"),
            },
        )?,
        ToolId::HashGenerator => hash::generate_hashes(
            text,
            hash::HashOptions {
                selection: hash::HashSelection::from_choice(settings.text("algorithm")),
                uppercase: settings.flag("uppercase"),
                include_length: settings.flag("include_length"),
            },
        ),
    };

    Ok(output)
}

fn direction(settings: &Settings, field: &str) -> encoding::Direction {
    encoding::Direction::from_choice(settings.text(field))
}
