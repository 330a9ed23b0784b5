//! Error types and handling for the MCP tool server.
//!
//! This module defines a unified error type for startup and infrastructure
//! failures: registry construction and the listener lifecycle. Per-request
//! errors travel as `DispatchError` through the dispatch path instead.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry could not be built.
    #[error("Registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// I/O errors from binding or serving the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolRegistry;
    use crate::domains::tools::definitions::PingTool;

    #[test]
    fn test_registry_failure_converts_to_server_error() {
        let mut registry = ToolRegistry::with_default_tools().unwrap();
        let err: Error = registry.register(PingTool::definition()).unwrap_err().into();
        assert!(matches!(err, Error::Registry(_)));
        assert!(err.to_string().contains("duplicate tool name"));
    }

    #[test]
    fn test_io_failure_converts_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }
}
