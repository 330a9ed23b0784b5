//! MCP tool server core.
//!
//! `McpServer` owns the process-lifetime state: the immutable tool registry
//! and the configuration. It exposes the two operations the HTTP layer
//! needs - manifest publishing and tool dispatch - without knowing anything
//! about HTTP itself.

use std::sync::Arc;

use serde_json::{Value, json};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{DispatchError, ToolRegistry, ToolResponse, dispatch};

/// The main server handle, cheap to clone across request handlers.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Ordered tool registry, built once and never mutated.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails fast when the built-in registry is malformed (duplicate names
    /// or manifest mismatches) - the process must not start in that state.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::with_default_tools()?;
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Build the manifest document: static service metadata merged with the
    /// live tool listing, in registration order. Pure and infallible.
    pub fn manifest(&self) -> Value {
        json!({
            "name": self.config.server.name,
            "version": self.config.server.version,
            "description": self.config.server.description,
            "capabilities": { "tools": true },
            "tools": self.registry.manifests(),
        })
    }

    /// Run one request body through the dispatch protocol.
    pub fn dispatch(&self, body: &Value) -> std::result::Result<ToolResponse, DispatchError> {
        dispatch(&self.registry, &self.config, body)
    }
}
