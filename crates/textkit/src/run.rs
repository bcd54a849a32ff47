use crate::prelude::*;
use crate::prelude::{println, eprintln};
use colored::Colorize;
use std::path::{Path, PathBuf};
use textkit_core::config::Configuration;
use textkit_core::dispatch::{dispatch_known, TransformRequest, TransformResult};
use textkit_core::registry::{self, InputMode};
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Args)]
pub struct RunOptions {
    /// Tool id (see `textkit tools list`)
    tool: String,

    /// Input text. Read from --input or stdin when omitted.
    text: Option<String>,

    /// Read the input text from a file
    #[arg(short, long, env = "TEXTKIT_INPUT", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Read the text to compare against from a file (diff)
    #[arg(long, conflicts_with = "second_text")]
    second: Option<PathBuf>,

    /// Text to compare against (diff)
    #[arg(long)]
    second_text: Option<String>,

    /// Tool option as NAME=VALUE; repeatable
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    settings: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(options: RunOptions, global: crate::Global) -> Result<()> {
    let tool = registry::lookup(&options.tool).ok_or_else(|| Error::UnknownTool(options.tool.clone()))?;

    let configuration = parse_settings(&options.settings)?;
    let primary_text = match (&options.text, &options.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_file(path).await?,
        (None, None) if tool.input == InputMode::Generator => String::new(),
        (None, None) => read_stdin().await?,
    };
    let secondary_text = match (&options.second_text, &options.second) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(read_file(path).await?),
        (None, None) => None,
    };

    let mut request = TransformRequest::new(tool.id.as_str(), primary_text).configuration(configuration);
    request.secondary_text = secondary_text;

    log::debug!(
        "dispatching {} ({} chars, settings: {:?})",
        request.tool_id,
        request.primary_text.chars().count(),
        options.settings
    );
    if global.verbose {
        eprintln!("{} {}", "Running".green(), tool.title.bright_white().bold());
    }

    let result = dispatch_known(&request, &mut global.rng());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        TransformResult::Output { output_text } => {
            if !options.json {
                println!("{output_text}");
            }
            Ok(())
        }
        TransformResult::Failed { error_kind, message } => Err(Error::Transform {
            kind: error_kind.to_string(),
            message,
        }
        .into()),
    }
}

/// Parse repeated `NAME=VALUE` flags. Values stay text; the core coerces them
/// to each field's type.
pub fn parse_settings(settings: &[String]) -> Result<Configuration, Error> {
    let mut configuration = Configuration::new();
    for setting in settings {
        let (name, value) = setting
            .split_once('=')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| Error::InvalidSetting(setting.clone()))?;
        configuration.set(name.trim(), value);
    }
    Ok(configuration)
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("Failed to read stdin")?;
    Ok(strip_trailing_newline(buffer))
}

/// Drop the single line terminator a shell pipe appends.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
