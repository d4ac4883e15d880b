//! Error types for the indexer.
//!
//! Per-file extraction problems are handled locally by the scanners and
//! never surface here; these variants cover the structural failures that
//! abort a build (enumeration of an existing source tree, serialization,
//! writing the output file).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the indexer library.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// Home directory could not be resolved for a default root path.
    #[error("Could not determine home directory; pass --{flag} explicitly")]
    NoHomeDir { flag: &'static str },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Recursive directory walk failed inside an existing source tree.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Failed to write the index file.
    #[error("Failed to write index to {}: {source}", path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for indexer operations.
pub type Result<T> = std::result::Result<T, IndexerError>;
