//! Configuration management for the MCP tool server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and manifest metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
///
/// These fields form the static part of the manifest served at
/// `/.well-known/mcp/manifest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Human-readable description echoed into the manifest.
    pub description: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

/// Configuration for security and path validation.
///
/// All file-system tools resolve their paths against `root_path` and reject
/// anything that escapes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Sandbox root for path operations.
    pub root_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mr-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Serwer MCP z narzędziami do plików i danych CSV".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig {
                host: "0.0.0.0".to_string(),
                port: 8765,
                enable_cors: true,
            },
            security: SecurityConfig {
                root_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`; the bare `PORT`
    /// variable is honored as a fallback for the listener port.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            config.http.host = host;
        }

        if let Some(port) = std::env::var("MCP_HTTP_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.http.port = port;
        }

        if let Ok(cors) = std::env::var("MCP_HTTP_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = PathBuf::from(root_path);
            info!(
                "Path sandbox root set to {:?} from environment",
                config.security.root_path
            );
        } else {
            warn!(
                "MCP_ROOT_PATH not set - using the current directory {:?} as sandbox root",
                config.security.root_path
            );
        }

        config
    }
}
