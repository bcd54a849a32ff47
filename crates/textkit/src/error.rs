#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid setting '{0}': expected NAME=VALUE")]
    InvalidSetting(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{kind}: {message}")]
    Transform { kind: String, message: String },
}
