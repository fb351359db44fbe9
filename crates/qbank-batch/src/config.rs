//! Configuration for batch runs

use serde::{Deserialize, Serialize};

/// Default number of issues listed per (category, collection) group
pub const DEFAULT_MAX_ISSUES_PER_GROUP: usize = 5;

fn default_lock() -> bool {
    true
}

fn default_max_issues_per_group() -> usize {
    DEFAULT_MAX_ISSUES_PER_GROUP
}

/// Configuration for the batch runner
///
/// # Examples
///
/// ```
/// use qbank_batch::BatchConfig;
///
/// let config = BatchConfig::default();
/// assert!(!config.dry_run);
/// assert_eq!(config.max_issues_per_group, 5);
///
/// // Refine without writing anything back
/// let config = BatchConfig::dry_run();
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Dry-run mode: count what would change without saving
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,

    /// Hold an exclusive lock on each collection while it is rewritten
    /// Default: true
    #[serde(default = "default_lock")]
    pub lock: bool,

    /// Issues listed per (category, collection) group in reports
    /// Default: 5
    #[serde(default = "default_max_issues_per_group")]
    pub max_issues_per_group: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            lock: default_lock(),
            max_issues_per_group: DEFAULT_MAX_ISSUES_PER_GROUP,
        }
    }
}

impl BatchConfig {
    /// Configuration that never writes
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    /// Check that values are usable
    pub fn validate(&self) -> Result<(), crate::BatchError> {
        if self.max_issues_per_group == 0 {
            return Err(crate::BatchError::Config(
                "max_issues_per_group must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
