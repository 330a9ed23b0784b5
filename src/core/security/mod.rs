// Security module for path validation and access control
//
// Every file-system tool resolves its paths through this module, which
// restricts access to the configured project root and rejects traversal
// outside of it.

pub mod path_validator;

pub use path_validator::{PathSecurityError, resolve_sandbox_path};
