//! Tool dispatch - the envelope-to-response protocol.
//!
//! One inbound body walks the chain classify -> (ack | lookup) -> validate ->
//! invoke -> respond. Validation failures and unknown tools terminate with
//! structured client errors; domain errors raised by handlers are surfaced
//! separately so the transport can map them to their own status codes.

use serde_json::Value;
use tracing::{info, warn};

use super::envelope::RequestEnvelope;
use super::error::{ToolCallError, ToolError};
use super::registry::ToolRegistry;
use super::schema::FieldError;
use crate::core::config::Config;

/// Successful dispatch outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResponse {
    /// A handler ran and produced output.
    Result { tool: String, output: Value },

    /// A `tool_result` envelope was acknowledged without invoking anything.
    Ack { tool: String },
}

/// Failed dispatch outcome. The transport layer maps each variant to an
/// HTTP status and body.
#[derive(Debug)]
pub enum DispatchError {
    /// The body matched none of the accepted envelope shapes.
    Protocol(Vec<FieldError>),

    /// No tool is registered under the requested name. Terminal and
    /// non-retryable; no fuzzy matching is attempted.
    UnknownTool(String),

    /// Tool-specific schema validation failed.
    InvalidInput(Vec<FieldError>),

    /// The handler raised a business-rule violation.
    Domain(ToolError),
}

/// Run one request body through the dispatch protocol.
pub fn dispatch(
    registry: &ToolRegistry,
    config: &Config,
    body: &Value,
) -> Result<ToolResponse, DispatchError> {
    let envelope = RequestEnvelope::classify(body).map_err(DispatchError::Protocol)?;

    let (tool, input) = match envelope {
        // A result envelope is a passive sink: acknowledge receipt and stop.
        // No lookup happens, so even unknown tool names are acknowledged.
        RequestEnvelope::Result { tool, .. } => {
            info!(tool = %tool, "Acknowledging tool_result envelope");
            return Ok(ToolResponse::Ack { tool });
        }
        RequestEnvelope::Use { tool, input } | RequestEnvelope::Legacy { tool, input } => {
            (tool, input)
        }
    };

    let definition = registry.get(&tool).ok_or_else(|| {
        warn!(tool = %tool, "Unknown tool requested");
        DispatchError::UnknownTool(tool.clone())
    })?;

    info!(tool = %tool, "Dispatching tool call");
    match (definition.run)(&input, config) {
        Ok(output) => Ok(ToolResponse::Result {
            tool: definition.name.to_string(),
            output,
        }),
        Err(ToolCallError::Invalid(details)) => {
            info!(tool = %tool, errors = details.len(), "Input validation failed");
            Err(DispatchError::InvalidInput(details))
        }
        Err(ToolCallError::Domain(err)) => {
            warn!(tool = %tool, error = %err, "Tool handler failed");
            Err(DispatchError::Domain(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_config(root: &TempDir) -> Config {
        let mut config = Config::default();
        config.security.root_path = root.path().to_path_buf();
        config
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::with_default_tools().unwrap()
    }

    #[test]
    fn test_dispatch_ping_legacy_envelope() {
        let root = TempDir::new().unwrap();
        let body = json!({ "tool": "ping", "input": { "message": "hello" } });
        let response = dispatch(&registry(), &test_config(&root), &body).unwrap();

        match response {
            ToolResponse::Result { tool, output } => {
                assert_eq!(tool, "ping");
                assert_eq!(output["echo"], "hello");
            }
            other => panic!("expected result, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_ping_typed_envelope() {
        let root = TempDir::new().unwrap();
        let body = json!({ "type": "tool_use", "tool": "ping", "input": { "message": "hi" } });
        let response = dispatch(&registry(), &test_config(&root), &body).unwrap();
        assert!(matches!(response, ToolResponse::Result { ref tool, .. } if tool == "ping"));
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let root = TempDir::new().unwrap();
        let body = json!({ "tool": "does_not_exist", "input": {} });
        let err = dispatch(&registry(), &test_config(&root), &body).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(name) if name == "does_not_exist"));
    }

    #[test]
    fn test_dispatch_validation_failure() {
        let root = TempDir::new().unwrap();
        let body = json!({ "tool": "ping", "input": {} });
        let err = dispatch(&registry(), &test_config(&root), &body).unwrap_err();

        match err {
            DispatchError::InvalidInput(details) => {
                assert!(!details.is_empty());
                assert_eq!(details[0].message, "message is required");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_tool_result_envelope_is_acked_without_invocation() {
        // Ack applies even to names no handler exists for: the lookup is
        // skipped entirely.
        let root = TempDir::new().unwrap();
        let body = json!({ "type": "tool_result", "tool": "no_such_tool", "output": { "x": 1 } });
        let response = dispatch(&registry(), &test_config(&root), &body).unwrap();
        assert_eq!(response, ToolResponse::Ack { tool: "no_such_tool".into() });
    }

    #[test]
    fn test_dispatch_protocol_error() {
        let root = TempDir::new().unwrap();
        let body = json!({ "type": "bogus", "tool": "ping" });
        let err = dispatch(&registry(), &test_config(&root), &body).unwrap_err();
        assert!(matches!(err, DispatchError::Protocol(_)));
    }

    #[test]
    fn test_dispatch_domain_error_surfaces() {
        let root = TempDir::new().unwrap();
        let body = json!({ "tool": "read_file", "input": { "path": "../../etc/passwd" } });
        let err = dispatch(&registry(), &test_config(&root), &body).unwrap_err();
        assert!(matches!(err, DispatchError::Domain(e) if e.is_forbidden()));
    }
}
