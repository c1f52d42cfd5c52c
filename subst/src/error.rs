//! Error taxonomy for substitution failures.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by a substitution run. None are recovered locally.
#[derive(Debug, Error)]
pub enum SubstError {
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SubstError {
    /// Classify an I/O error on `path` by its kind.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, SubstError>;
