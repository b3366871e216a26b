//! Error types for listing operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the caller of a [`FileListing`](crate::FileListing).
///
/// Per-node failures during a traversal never show up here; they are logged
/// and the node is skipped or recorded as inaccessible.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The path could not be resolved to an existing filesystem node.
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but a directory was required.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The start directory of a listing was rejected.
    #[error("Invalid start directory: {path}")]
    InvalidStartDirectory {
        path: PathBuf,
        #[source]
        source: Box<ListingError>,
    },

    /// I/O failure outside of a traversal.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListingError {
    /// Create an invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InvalidPath {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error as a rejected start directory.
    pub fn start_directory(path: impl Into<PathBuf>, source: ListingError) -> Self {
        Self::InvalidStartDirectory {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Whether the error means the target does not exist.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Self::InvalidPath { .. } => true,
            Self::InvalidStartDirectory { source, .. } => source.is_invalid_path(),
            _ => false,
        }
    }
}
