//! Ping tool definition.
//!
//! Echoes the message back with a server timestamp.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, required_str};
use crate::core::config::Config;

/// Validated parameters for the ping tool.
#[derive(Debug, Clone, PartialEq)]
pub struct PingParams {
    pub message: String,
}

/// Ping output: the echoed message plus an RFC 3339 UTC timestamp.
#[derive(Debug, Serialize)]
pub struct PingOutput {
    pub echo: String,
    pub ts: String,
}

/// Ping tool - echoes a message and adds a timestamp.
pub struct PingTool;

impl PingTool {
    pub const NAME: &'static str = "ping";
    pub const DESCRIPTION: &'static str = "Odbija wiadomość i dodaje znacznik czasu.";

    /// Validate raw input against the tool's schema.
    pub fn validate(input: &Value) -> Result<PingParams, Vec<FieldError>> {
        ensure_object(input)?;
        let message = required_str(input, "message").map_err(|e| vec![e])?;
        Ok(PingParams { message })
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &PingParams, _config: &Config) -> Result<Value, ToolError> {
        let output = PingOutput {
            echo: params.message.clone(),
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        serde_json::to_value(output).map_err(|e| ToolError::Internal(e.to_string()))
    }

    fn run(input: &Value, config: &Config) -> Result<Value, ToolCallError> {
        let params = Self::validate(input)?;
        Ok(Self::execute(&params, config)?)
    }

    /// Registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            manifest: ManifestEntry {
                name: Self::NAME,
                description: Self::DESCRIPTION,
                input_schema: json!({
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": {
                            "type": "string",
                            "description": "Tekst do odesłania przez serwer"
                        }
                    }
                }),
            },
            run: Self::run,
        }
    }
}
