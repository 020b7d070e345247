//! Error types for ruleset-gen.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for ruleset-gen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path missing or not a file/directory
    #[error("{} not found or unsupported type.", .0.display())]
    PathNotFound(PathBuf),

    /// File is not inside an Egern/Singbox output tree
    #[error("no ancestor directory named {root} for {}", .path.display())]
    PlatformRootNotFound {
        /// Expected platform root directory name
        root: &'static str,
        /// Offending file path
        path: PathBuf,
    },

    /// Path escaped the tree it was expected to live under
    #[error("{} is outside of {}", .path.display(), .base.display())]
    OutsideTree {
        /// Offending path
        path: PathBuf,
        /// Tree root the path was resolved against
        base: PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal error
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias for ruleset-gen operations.
pub type Result<T> = std::result::Result<T, Error>;
