//! Read file tool definition.
//!
//! Reads a UTF-8 text file from inside the project root.

use std::fs;

use serde_json::{Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, required_str};
use crate::core::config::Config;
use crate::core::security::resolve_sandbox_path;

/// Validated parameters for the read file tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadFileParams {
    pub path: String,
}

/// Read file tool - returns the contents of a text file.
pub struct ReadFileTool;

impl ReadFileTool {
    pub const NAME: &'static str = "read_file";
    pub const DESCRIPTION: &'static str = "Odczytuje zawartość pliku tekstowego.";

    pub fn validate(input: &Value) -> Result<ReadFileParams, Vec<FieldError>> {
        ensure_object(input)?;
        let path = required_str(input, "path").map_err(|e| vec![e])?;
        Ok(ReadFileParams { path })
    }

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &ReadFileParams, config: &Config) -> Result<Value, ToolError> {
        let safe_path = resolve_sandbox_path(&params.path, &config.security.root_path)?;

        let content = fs::read_to_string(&safe_path).map_err(|source| ToolError::Read {
            path: params.path.clone(),
            source,
        })?;

        Ok(json!({ "content": content }))
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
                    "required": ["path"],
                    "properties": {
                        "path": {
                            "type": "string",
                            "description": "Ścieżka do pliku (relatywna do katalogu projektu)"
                        }
                    }
                }),
            },
            run: Self::run,
        }
    }
}
