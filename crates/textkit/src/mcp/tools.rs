use crate::prelude::*;
use crate::prelude::eprintln;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use textkit_core::config::Configuration;
use textkit_core::dispatch::{dispatch_known, TransformRequest};
use textkit_core::registry::{self, FieldKind, FieldSpec, InputMode, ToolDescriptor};

pub use super::{JsonRpcError, Tool};

/// Every registry tool is published as `text_<id>`.
const TOOL_PREFIX: &str = "text_";

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// Arguments of a tool call: the texts, plus every other key as tool configuration.
#[derive(Debug, Deserialize)]
struct CallArguments {
    #[serde(default)]
    text: String,
    #[serde(default)]
    secondary_text: Option<String>,
    #[serde(flatten)]
    configuration: Configuration,
}

pub fn handle_initialize() -> Result<Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
        },
        server_info: ServerInfo {
            name: "textkit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_list() -> Result<Value, JsonRpcError> {
    let tools = registry::list_tools()
        .iter()
        .map(|tool| Tool {
            name: format!("{TOOL_PREFIX}{}", tool.id.as_str()),
            description: format!("{}: {}", tool.title, tool.description),
            input_schema: input_schema(tool),
        })
        .collect();

    serde_json::to_value(ToolsList { tools })
        .map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

pub fn handle_tools_call(params: Option<Value>, global: &crate::Global) -> Result<Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

    let tool = params
        .name
        .strip_prefix(TOOL_PREFIX)
        .and_then(registry::lookup)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

    let args: CallArguments = serde_json::from_value(params.arguments.unwrap_or_else(|| json!({})))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))?;

    if global.verbose {
        eprintln!(
            "Calling {}: {} chars, {} setting(s)",
            params.name,
            args.text.chars().count(),
            args.configuration.keys().count()
        );
    }
    log::debug!("dispatching {} over MCP", tool.id.as_str());

    let mut request = TransformRequest::new(tool.id.as_str(), args.text).configuration(args.configuration);
    request.secondary_text = args.secondary_text;

    let result = dispatch_known(&request, &mut global.rng());

    let call_result = CallToolResult {
        content: vec![Content::Text {
            text: result.output_text().to_string(),
        }],
        is_error: result.is_failure().then_some(true),
    };

    serde_json::to_value(call_result).map_err(|e| JsonRpcError::internal(format!("Internal error: {e}")))
}

/// JSON schema for a tool's arguments, generated from its input mode and fields.
fn input_schema(tool: &ToolDescriptor) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    if tool.input != InputMode::Generator {
        properties.insert(
            "text".to_string(),
            json!({"type": "string", "description": "Text to process"}),
        );
        required.push("text");
    }
    if tool.input == InputMode::TextPair {
        properties.insert(
            "secondary_text".to_string(),
            json!({"type": "string", "description": "Text to compare against"}),
        );
    }

    for field in &tool.fields {
        properties.insert(field.name.to_string(), field_schema(field));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn field_schema(field: &FieldSpec) -> Value {
    let mut schema = match field.kind {
        FieldKind::Text => json!({"type": "string"}),
        FieldKind::Boolean => json!({"type": "boolean"}),
        FieldKind::Number => json!({"type": "integer"}),
        FieldKind::SingleSelect | FieldKind::RadioGroup => {
            let options: Vec<&str> = field.constraints.options.iter().map(|c| c.value).collect();
            json!({"type": "string", "enum": options})
        }
    };

    if let Some(min) = field.constraints.min {
        schema["minimum"] = json!(min);
    }
    if let Some(max) = field.constraints.max {
        schema["maximum"] = json!(max);
    }
    schema["default"] = json!(field.default);
    schema["description"] = json!(format!("{} (default: {})", field.label, field.default));

    schema
}
