//! Error types for content discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while discovering documents on disk.
///
/// Index construction itself never fails: mismatched paths are skipped and
/// identifier collisions resolve last-wins. Only the filesystem walk that
/// feeds it can go wrong.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The discovery root does not exist or is not a directory.
    #[error("content root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file could not be read during the walk.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure while walking the tree.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for content discovery.
pub type Result<T> = std::result::Result<T, ContentError>;
