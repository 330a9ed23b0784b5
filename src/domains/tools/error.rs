//! Tool-specific error types.

use thiserror::Error;

use super::schema::FieldError;
use crate::core::security::PathSecurityError;

/// Domain errors raised by tool handlers.
///
/// These are business-rule violations (sandbox escape, missing column, I/O
/// failure), distinct from schema validation failures which are reported as
/// `FieldError` lists before a handler ever runs.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The resolved path escapes the sandbox root.
    #[error("access denied: '{path}' is outside the project root")]
    Forbidden { path: String },

    /// The requested CSV column does not exist.
    #[error("column '{column}' does not exist in the CSV file")]
    MissingColumn { column: String },

    /// Reading a file or directory failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a file (or creating its parent directories) failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// True for sandbox violations, which map to a permission-denied
    /// response rather than a generic client error.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

impl From<PathSecurityError> for ToolError {
    fn from(err: PathSecurityError) -> Self {
        match err {
            PathSecurityError::OutsideRoot { path, .. } => Self::Forbidden {
                path: path.display().to_string(),
            },
            PathSecurityError::InvalidRoot { root, error } => Self::Internal(format!(
                "invalid sandbox root '{}': {error}",
                root.display()
            )),
        }
    }
}

/// Outcome of running a tool against raw input: either the input failed the
/// tool's schema, or the handler itself raised a domain error.
#[derive(Debug)]
pub enum ToolCallError {
    /// Schema validation failed; always a recoverable client error.
    Invalid(Vec<FieldError>),

    /// The handler raised a business-rule violation.
    Domain(ToolError),
}

impl From<Vec<FieldError>> for ToolCallError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Invalid(errors)
    }
}

impl From<ToolError> for ToolCallError {
    fn from(err: ToolError) -> Self {
        Self::Domain(err)
    }
}
