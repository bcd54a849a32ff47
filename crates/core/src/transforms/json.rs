//! JSON pretty-printer, minifier and validator.

use crate::error::TransformError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonAction {
    Format,
    Minify,
    Validate,
}

impl JsonAction {
    pub fn from_choice(value: &str) -> Self {
        match value {
            "minify" => JsonAction::Minify,
            "validate" => JsonAction::Validate,
            _ => JsonAction::Format,
        }
    }
}

pub fn parse(text: &str) -> Result<Value, TransformError> {
    serde_json::from_str(text)
        .map_err(|e| TransformError::InvalidDocument(format!("Invalid JSON ✗\n\nError: {e}")))
}

/// Serialize `value` with `indent` spaces per level. Object keys keep
/// their document order.
pub fn to_pretty(value: &Value, indent: usize) -> Result<String, TransformError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| TransformError::InvalidDocument(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| TransformError::InvalidDocument(e.to_string()))
}

pub fn format_json(text: &str, action: JsonAction, indent: usize) -> Result<String, TransformError> {
    let value = parse(text)?;
    match action {
        JsonAction::Format => to_pretty(&value, indent),
        JsonAction::Minify => {
            serde_json::to_string(&value).map_err(|e| TransformError::InvalidDocument(e.to_string()))
        }
        JsonAction::Validate => Ok(format!("Valid JSON ✓\n\nFormatted:\n{}", to_pretty(&value, indent)?)),
    }
}
