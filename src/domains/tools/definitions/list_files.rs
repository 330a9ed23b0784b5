//! List files tool definition.
//!
//! Lists directory entries inside the project root.

use std::fs;

use serde_json::{Value, json};
use tracing::instrument;

use super::super::error::{ToolCallError, ToolError};
use super::super::registry::{ManifestEntry, ToolDefinition};
use super::super::schema::{FieldError, ensure_object, optional_str_or};
use crate::core::config::Config;
use crate::core::security::resolve_sandbox_path;

/// Validated parameters for the list files tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilesParams {
    pub directory: String,
}

/// List files tool - lists entries in a project directory.
pub struct ListFilesTool;

impl ListFilesTool {
    pub const NAME: &'static str = "list_files";
    pub const DESCRIPTION: &'static str = "Listuje pliki w katalogu.";

    /// Default directory when none is given.
    pub const DEFAULT_DIRECTORY: &'static str = ".";

    pub fn validate(input: &Value) -> Result<ListFilesParams, Vec<FieldError>> {
        ensure_object(input)?;
        let directory =
            optional_str_or(input, "directory", Self::DEFAULT_DIRECTORY).map_err(|e| vec![e])?;
        Ok(ListFilesParams { directory })
    }

    #[instrument(skip_all, fields(directory = %params.directory))]
    pub fn execute(params: &ListFilesParams, config: &Config) -> Result<Value, ToolError> {
        let safe_path = resolve_sandbox_path(&params.directory, &config.security.root_path)?;

        let entries = fs::read_dir(&safe_path).map_err(|source| ToolError::Read {
            path: params.directory.clone(),
            source,
        })?;

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        // Directory iteration order is platform-dependent; sort for a
        // deterministic listing.
        files.sort();

        Ok(json!({ "files": files }))
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
                    "properties": {
                        "directory": {
                            "type": "string",
                            "description": "Katalog do listowania",
                            "default": "."
                        }
                    }
                }),
            },
            run: Self::run,
        }
    }
}
