use serde::{Deserialize, Serialize};

/// Category of a failed transform, surfaced to callers next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidEncoding,
    InvalidPattern,
    InvalidDocument,
    InvalidFormat,
    ConfigurationError,
    UnknownTool,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEncoding => "invalid_encoding",
            ErrorKind::InvalidPattern => "invalid_pattern",
            ErrorKind::InvalidDocument => "invalid_document",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::ConfigurationError => "configuration_error",
            ErrorKind::UnknownTool => "unknown_tool",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by individual transforms.
///
/// The `Display` text is what ends up in the output pane, so it is written
/// for end users rather than for logs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("{0}")]
    InvalidEncoding(String),

    #[error("{0}")]
    InvalidPattern(String),

    #[error("{0}")]
    InvalidDocument(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransformError::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
            TransformError::InvalidPattern(_) => ErrorKind::InvalidPattern,
            TransformError::InvalidDocument(_) => ErrorKind::InvalidDocument,
            TransformError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            TransformError::Configuration(_) => ErrorKind::ConfigurationError,
            TransformError::UnknownTool(_) => ErrorKind::UnknownTool,
        }
    }
}
