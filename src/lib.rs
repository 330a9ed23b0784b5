//! MCP Tool Server Library
//!
//! A small HTTP service exposing a fixed registry of named tools (ping,
//! file read/write, directory listing, CSV parsing, CSV statistics, HTML
//! infographic generation) behind a uniform dispatch endpoint, plus a
//! manifest endpoint describing the available tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server core, path
//!   security, and the HTTP transport
//! - **domains::tools**: the tool registry, the envelope/dispatch protocol,
//!   input validation, and one definition file per tool
//!
//! # Example
//!
//! ```rust,no_run
//! use mr_mcp::core::{Config, HttpServer, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     HttpServer::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, HttpServer, McpServer, Result, build_router};
