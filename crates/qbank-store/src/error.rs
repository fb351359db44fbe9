//! Store error types

use qbank_domain::CollectionError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing collections
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection directory does not exist
    #[error("Collection directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// No collection with this name
    #[error("Collection '{0}' not found")]
    NotFound(String),

    /// Filesystem failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Offending file
        path: PathBuf,
        /// Parser error
        source: serde_json::Error,
    },

    /// JSON is valid but not a collection
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Could not acquire the collection lock
    #[error("Failed to lock collection '{name}': {source}")]
    Lock {
        /// Collection name
        name: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk collection directory: {0}")]
    Walk(#[from] walkdir::Error),
}
