use std::io;
use std::path::{Component, Path, PathBuf};

/// Errors that can occur during sandbox path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("path '{path}' is outside allowed root directory '{root}'")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("cannot resolve sandbox root '{root}': {error}")]
    InvalidRoot { root: PathBuf, error: io::Error },
}

/// Resolve a requested path against the sandbox root and reject any result
/// that escapes it.
///
/// The check is lexical and segment-based: the joined path is normalized by
/// component (`.` removed, `..` popped) and the result must share the root's
/// leading components. Comparing components rather than string prefixes means
/// a sibling directory like `/proj-other` can never pass for a root of
/// `/proj`. The target itself does not have to exist, so the same check
/// covers both read and write paths.
///
/// Relative paths resolve against the root; absolute paths are accepted only
/// when they already lie inside it.
pub fn resolve_sandbox_path(requested: &str, root: &Path) -> Result<PathBuf, PathSecurityError> {
    // The root must exist; canonicalize it so symlinked roots (e.g. /tmp on
    // macOS) compare correctly.
    let root = root
        .canonicalize()
        .map_err(|error| PathSecurityError::InvalidRoot {
            root: root.to_path_buf(),
            error,
        })?;

    let requested_path = Path::new(requested);
    let joined = if requested_path.is_absolute() {
        requested_path.to_path_buf()
    } else {
        root.join(requested_path)
    };

    let normalized = normalize_lexically(&joined);
    if !normalized.starts_with(&root) {
        return Err(PathSecurityError::OutsideRoot {
            path: normalized,
            root,
        });
    }

    Ok(normalized)
}

/// Normalize a path without touching the filesystem: drop `.` components and
/// resolve `..` against the preceding component. Popping past the filesystem
/// root leaves the path there, which the containment check then rejects.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}
