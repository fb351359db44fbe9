//! Error types for batch runs

use thiserror::Error;

/// Errors that end a batch run before any collection is processed
#[derive(Error, Debug)]
pub enum BatchError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// The store holds no collections
    #[error("No collections found")]
    NoCollections,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
