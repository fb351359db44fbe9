//! Command implementations.

pub mod refine;
pub mod rules;
pub mod verify;

pub use self::refine::execute_refine;
pub use self::rules::execute_rules;
pub use self::verify::execute_verify;

use crate::error::CliError;
use qbank_batch::BatchError;
use std::path::Path;

/// Attach the collection directory to a batch error where it helps.
pub(crate) fn batch_error(err: BatchError, dir: &Path) -> CliError {
    match err {
        BatchError::NoCollections => CliError::NoCollections(dir.to_path_buf()),
        other => CliError::Batch(other),
    }
}
