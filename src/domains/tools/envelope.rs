//! Request envelope classification.
//!
//! The dispatch endpoint accepts three wire shapes:
//!
//! - typed use:    `{ "type": "tool_use", "tool": ..., "input": ... }`
//! - typed result: `{ "type": "tool_result", "tool": ..., "output": ... }`
//! - legacy:       `{ "tool": ..., "input": ... }` (no `type` field)
//!
//! Classification is a discriminated parse on the `type` field with fixed
//! precedence, not a trial-and-error cascade across schemas. A body matching
//! none of the shapes is a protocol error reported as field errors.

use serde_json::Value;

use super::schema::{FieldError, required_str};

/// A normalized inbound request, tagged by wire shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEnvelope {
    /// Typed `tool_use` invocation.
    Use { tool: String, input: Value },

    /// Typed `tool_result` from an external tool executor. Dispatch
    /// acknowledges it without invoking any handler.
    Result { tool: String, output: Value },

    /// Flat legacy invocation with no `type` discriminator.
    Legacy { tool: String, input: Value },
}

impl RequestEnvelope {
    /// Classify a raw JSON body into one of the accepted envelope shapes.
    pub fn classify(body: &Value) -> Result<Self, Vec<FieldError>> {
        if !body.is_object() {
            return Err(vec![FieldError::new("", "request body must be a JSON object")]);
        }

        match body.get("type") {
            Some(Value::String(kind)) if kind == "tool_use" => {
                let tool = required_str(body, "tool").map_err(|e| vec![e])?;
                let input = body.get("input").cloned().unwrap_or(Value::Null);
                Ok(Self::Use { tool, input })
            }
            Some(Value::String(kind)) if kind == "tool_result" => {
                let tool = required_str(body, "tool").map_err(|e| vec![e])?;
                let output = body.get("output").cloned().unwrap_or(Value::Null);
                Ok(Self::Result { tool, output })
            }
            Some(_) => Err(vec![FieldError::new(
                "type",
                "type must be \"tool_use\" or \"tool_result\"",
            )]),
            None => {
                let tool = required_str(body, "tool").map_err(|e| vec![e])?;
                let input = body.get("input").cloned().unwrap_or(Value::Null);
                Ok(Self::Legacy { tool, input })
            }
        }
    }

    /// The tool name carried by the envelope, regardless of shape.
    pub fn tool(&self) -> &str {
        match self {
            Self::Use { tool, .. } | Self::Result { tool, .. } | Self::Legacy { tool, .. } => tool,
        }
    }
}
