//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! error handling, configuration, the server core, the HTTP transport, and
//! path security.

pub mod config;
pub mod error;
pub mod http;
pub mod security;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use http::{HttpServer, build_router};
pub use security::{PathSecurityError, resolve_sandbox_path};
pub use server::McpServer;
