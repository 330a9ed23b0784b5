//! Tools domain module.
//!
//! Everything between a raw `/tools/call` body and a tool's output lives
//! here:
//!
//! - `definitions/` - individual tool implementations (one file per tool)
//! - `registry.rs` - ordered dispatch table built once at startup
//! - `envelope.rs` - classification of the three accepted request shapes
//! - `dispatch.rs` - lookup/validate/invoke protocol and its error taxonomy
//! - `schema.rs` - field-level validation helpers and `FieldError`
//! - `error.rs` - domain error types raised by handlers
//!
//! ## Adding a new tool
//!
//! 1. Create a new file in `definitions/` with params, `validate()`,
//!    `execute()` and `definition()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::with_default_tools()`

pub mod definitions;
pub mod dispatch;
pub mod envelope;
mod error;
pub mod registry;
pub mod schema;

pub use dispatch::{DispatchError, ToolResponse, dispatch};
pub use envelope::RequestEnvelope;
pub use error::{ToolCallError, ToolError};
pub use registry::{ManifestEntry, RegistryError, ToolDefinition, ToolRegistry};
pub use schema::FieldError;
