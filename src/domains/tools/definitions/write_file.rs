//! Write file tool definition.
//!
//! Writes text to a file inside the project root, creating intermediate
//! directories as needed.

use std::fs;

use serde_json::{Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, required_str};
use crate::core::config::Config;
use crate::core::security::resolve_sandbox_path;

/// Validated parameters for the write file tool.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteFileParams {
    pub path: String,
    pub content: String,
}

/// Write file tool - saves text content to a file.
pub struct WriteFileTool;

impl WriteFileTool {
    pub const NAME: &'static str = "write_file";
    pub const DESCRIPTION: &'static str = "Zapisuje tekst do pliku.";

    pub fn validate(input: &Value) -> Result<WriteFileParams, Vec<FieldError>> {
        ensure_object(input)?;
        let mut errors = Vec::new();

        let path = required_str(input, "path").map_err(|e| errors.push(e)).ok();
        let content = required_str(input, "content")
            .map_err(|e| errors.push(e))
            .ok();

        match (path, content) {
            (Some(path), Some(content)) if errors.is_empty() => {
                Ok(WriteFileParams { path, content })
            }
            _ => Err(errors),
        }
    }

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &WriteFileParams, config: &Config) -> Result<Value, ToolError> {
        let safe_path = resolve_sandbox_path(&params.path, &config.security.root_path)?;

        if let Some(parent) = safe_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ToolError::Write {
                path: params.path.clone(),
                source,
            })?;
        }

        fs::write(&safe_path, &params.content).map_err(|source| ToolError::Write {
            path: params.path.clone(),
            source,
        })?;

        // Echo the path as the caller gave it, not the resolved one.
        Ok(json!({ "success": true, "path": params.path }))
    }

    fn run(input: &Value, config: &Config) -> Result<Value, ToolCallError> {
        let params = Self::validate(input)?;
        Ok(Self::execute(&params, config)?)
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            manifest: ManifestEntry {
                name: Self::NAME,
                description: Self::DESCRIPTION,
                input_schema: json!({
                    "type": "object",
                    "required": ["path", "content"],
                    "properties": {
                        "path": { "type": "string", "description": "Ścieżka zapisu pliku" },
                        "content": { "type": "string", "description": "Zawartość do zapisania" }
                    }
                }),
            },
            run: Self::run,
        }
    }
}
