//! Caller-supplied configuration and its resolution against a tool's fields.

use crate::error::TransformError;
use crate::registry::{FieldKind, FieldSpec, FieldValue, ToolDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw configuration values keyed by field name, as the presentation layer
/// collected them. Values may be loosely typed (e.g. `"true"` from a CLI flag).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, FieldValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A configuration resolved against one tool: every field present and typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: BTreeMap<&'static str, FieldValue>,
}

impl Settings {
    /// Resolve `config` for `tool`.
    ///
    /// Missing fields take their declared default, numbers are clamped into
    /// range, and a value of the wrong shape is a configuration error.
    /// Keys that the tool does not declare are ignored.
    pub fn resolve(tool: &ToolDescriptor, config: &Configuration) -> Result<Self, TransformError> {
        let mut values = BTreeMap::new();

        for field in &tool.fields {
            let value = match config.get(field.name) {
                Some(raw) => coerce(field, raw)?,
                None => field.default.clone(),
            };
            values.insert(field.name, value);
        }

        Ok(Self { values })
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Bool(true)))
    }

    pub fn number(&self, name: &str) -> i64 {
        match self.values.get(name) {
            Some(FieldValue::Number(n)) => *n,
            _ => 0,
        }
    }

    /// Number field as a count; negative values collapse to zero.
    pub fn count(&self, name: &str) -> usize {
        usize::try_from(self.number(name)).unwrap_or(0)
    }
}

fn coerce(field: &FieldSpec, raw: &FieldValue) -> Result<FieldValue, TransformError> {
    let mismatch = || {
        TransformError::Configuration(format!(
            "Invalid value '{raw}' for field '{}'",
            field.name
        ))
    };

    match field.kind {
        FieldKind::Boolean => match raw {
            FieldValue::Bool(b) => Ok(FieldValue::Bool(*b)),
            FieldValue::Number(n) => Ok(FieldValue::Bool(*n != 0)),
            FieldValue::Text(s) => parse_flag(s).map(FieldValue::Bool).ok_or_else(mismatch),
        },
        FieldKind::Number => {
            let n = match raw {
                FieldValue::Number(n) => *n,
                FieldValue::Text(s) => parse_number(s).ok_or_else(mismatch)?,
                FieldValue::Bool(_) => return Err(mismatch()),
            };
            Ok(FieldValue::Number(clamp(field, n)))
        }
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::SingleSelect | FieldKind::RadioGroup => {
            let candidate = FieldValue::Text(raw.to_string());
            if field.accepts(&candidate) {
                Ok(candidate)
            } else {
                let allowed: Vec<&str> = field.constraints.options.iter().map(|c| c.value).collect();
                Err(TransformError::Configuration(format!(
                    "Invalid value '{raw}' for field '{}' (expected one of: {})",
                    field.name,
                    allowed.join(", ")
                )))
            }
        }
    }
}

fn clamp(field: &FieldSpec, n: i64) -> i64 {
    let n = field.constraints.min.map_or(n, |min| n.max(min));
    field.constraints.max.map_or(n, |max| n.min(max))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Integer text, or finite decimal text truncated toward zero.
fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::registry::{descriptor, ToolId};

    fn tool(id: ToolId) -> &'static ToolDescriptor {
        descriptor(id).unwrap()
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = Settings::resolve(tool(ToolId::Password), &Configuration::new()).unwrap();
        assert_eq!(settings.number("length"), 12);
        assert!(settings.flag("uppercase"));
        assert!(!settings.flag("symbols"));
    }

    #[test]
    fn test_string_values_are_coerced() {
        let config = Configuration::new()
            .with("length", "20")
            .with("symbols", "yes")
            .with("uppercase", "off");
        let settings = Settings::resolve(tool(ToolId::Password), &config).unwrap();
        assert_eq!(settings.number("length"), 20);
        assert!(settings.flag("symbols"));
        assert!(!settings.flag("uppercase"));
    }

    #[test]
    fn test_numbers_are_clamped() {
        let config = Configuration::new().with("length", 1000_i64);
        let settings = Settings::resolve(tool(ToolId::Password), &config).unwrap();
        assert_eq!(settings.number("length"), 128);

        let config = Configuration::new().with("length", -5_i64);
        let settings = Settings::resolve(tool(ToolId::Password), &config).unwrap();
        assert_eq!(settings.number("length"), 4);
    }

    #[test]
    fn test_unparseable_number_is_configuration_error() {
        let config = Configuration::new().with("length", "lots");
        let err = Settings::resolve(tool(ToolId::Password), &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    }

    #[test]
    fn test_unknown_select_option_is_rejected() {
        let config = Configuration::new().with("order", "random");
        let err = Settings::resolve(tool(ToolId::SortLines), &config).unwrap_err();
        assert!(err.to_string().contains("expected one of: asc, desc"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Configuration::new().with("bogus", true);
        let settings = Settings::resolve(tool(ToolId::SortLines), &config).unwrap();
        assert_eq!(settings.text("order"), "asc");
    }

    #[test]
    fn test_configuration_deserializes_from_json_object() {
        let config: Configuration =
            serde_json::from_str(r#"{"length": 8, "symbols": true, "order": "desc"}"#).unwrap();
        assert_eq!(config.get("length"), Some(&FieldValue::Number(8)));
        assert_eq!(config.get("symbols"), Some(&FieldValue::Bool(true)));
        assert_eq!(config.get("order"), Some(&FieldValue::Text("desc".into())));
    }

    #[test]
    fn test_fractional_numbers_truncate() {
        let config: Configuration = serde_json::from_str(r#"{"length": 20.0, "count": 3.9}"#).unwrap();
        assert_eq!(config.get("length"), Some(&FieldValue::Number(20)));
        assert_eq!(config.get("count"), Some(&FieldValue::Number(3)));

        let config = Configuration::new().with("length", "16.7");
        let settings = Settings::resolve(tool(ToolId::Password), &config).unwrap();
        assert_eq!(settings.number("length"), 16);

        let config = Configuration::new().with("length", "inf");
        assert!(Settings::resolve(tool(ToolId::Password), &config).is_err());
    }

    #[test]
    fn test_count_never_negative() {
        let settings = Settings::default();
        assert_eq!(settings.count("missing"), 0);
    }
}
