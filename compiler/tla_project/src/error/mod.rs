//! Loader errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to read a project from disk.
///
/// Parse errors are not load errors: a file that fails to parse still
/// loads, and its errors are kept on its [`crate::SourceFile`].
#[derive(Debug)]
pub enum LoadError {
    /// Reading a directory or file failed.
    Io { path: PathBuf, source: io::Error },
    /// A configured source directory is not a directory.
    NotADirectory(PathBuf),
}

impl LoadError {
    #[cold]
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => match source.kind() {
                io::ErrorKind::NotFound => write!(f, "cannot find '{}'", path.display()),
                io::ErrorKind::PermissionDenied => {
                    write!(f, "permission denied reading '{}'", path.display())
                }
                io::ErrorKind::InvalidData => {
                    write!(f, "'{}' contains invalid UTF-8 data", path.display())
                }
                _ => write!(f, "error reading '{}': {source}", path.display()),
            },
            LoadError::NotADirectory(path) => {
                write!(f, "'{}' is not a directory", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::NotADirectory(_) => None,
        }
    }
}
