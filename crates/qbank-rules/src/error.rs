//! Rule set error types

use crate::Category;
use thiserror::Error;

/// Result type alias for rule set operations.
pub type Result<T> = std::result::Result<T, RulesError>;

/// Errors raised while loading or validating a rule set
#[derive(Debug, Error)]
pub enum RulesError {
    /// Failed to read a rule file
    #[error("Failed to read rule file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse rule set TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize rule set: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Rule set written for another table version
    #[error("Unsupported rule set version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Version this build understands
        supported: u32,
    },

    /// The same category appears twice
    #[error("Duplicate rule group for category '{0}'")]
    DuplicateCategory(Category),

    /// A keyword list is empty or holds a blank keyword
    #[error("Rule group '{0}' has an empty or blank keyword")]
    BlankKeyword(Category),

    /// A sub-rule names a parent that does not precede it
    #[error("Rule group '{category}' refers to parent '{parent}' which is not defined before it")]
    UnknownParent {
        /// Sub-rule category
        category: Category,
        /// Referenced parent
        parent: Category,
    },

    /// Two topic rules for the same topic
    #[error("Duplicate topic rule for '{0}'")]
    DuplicateTopic(String),
}
