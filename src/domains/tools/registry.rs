//! Tool Registry - central registration and lookup for all tools.
//!
//! The registry is an ordered, immutable dispatch table built once at
//! startup. Registration order is part of the manifest's observable
//! contract, so definitions are kept in a `Vec` rather than a map.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::definitions::{
    AnalyzeDataTool, GenerateInfographicTool, ListFilesTool, ParseCsvTool, PingTool, ReadFileTool,
    WriteFileTool,
};
use super::error::ToolCallError;
use crate::core::config::Config;

/// Manifest fragment advertised for one tool.
///
/// `input_schema` is a JSON-Schema-like structural description
/// (`type`/`required`/`properties`), kept consistent with the tool's
/// validator but independent of its internal representation.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Handler signature shared by every tool: raw JSON input in, JSON output or
/// a validation/domain error out.
pub type ToolRunFn = fn(&Value, &Config) -> Result<Value, ToolCallError>;

/// One registered tool: identity, manifest fragment, and handler.
pub struct ToolDefinition {
    /// Unique registry key, matched case-sensitively on dispatch.
    pub name: &'static str,

    /// Human-readable description, echoed into the manifest.
    pub description: &'static str,

    /// Manifest fragment advertised to clients.
    pub manifest: ManifestEntry,

    /// Validate-and-invoke entry point.
    pub run: ToolRunFn,
}

/// Errors raised while building the registry. These are startup failures;
/// the process must not come up with a malformed registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),

    #[error("manifest name '{manifest}' does not match tool name '{tool}'")]
    ManifestMismatch { tool: String, manifest: String },
}

/// Ordered, immutable set of tool definitions.
pub struct ToolRegistry {
    definitions: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Create a registry with all built-in tools, in their fixed order.
    pub fn with_default_tools() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(PingTool::definition())?;
        registry.register(ReadFileTool::definition())?;
        registry.register(WriteFileTool::definition())?;
        registry.register(ListFilesTool::definition())?;
        registry.register(ParseCsvTool::definition())?;
        registry.register(AnalyzeDataTool::definition())?;
        registry.register(GenerateInfographicTool::definition())?;
        Ok(registry)
    }

    /// Register a tool definition, enforcing name uniqueness and
    /// name/manifest consistency.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), RegistryError> {
        if definition.manifest.name != definition.name {
            return Err(RegistryError::ManifestMismatch {
                tool: definition.name.to_string(),
                manifest: definition.manifest.name.to_string(),
            });
        }
        if self.get(definition.name).is_some() {
            return Err(RegistryError::DuplicateName(definition.name.to_string()));
        }
        self.definitions.push(definition);
        Ok(())
    }

    /// Exact, case-sensitive lookup by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Manifest entries in registration order.
    pub fn manifests(&self) -> Vec<&ManifestEntry> {
        self.definitions.iter().map(|d| &d.manifest).collect()
    }

    /// All registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.name).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
