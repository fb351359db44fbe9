//! qbank Batch
//!
//! Drives refinement and verification across every collection in a store.
//!
//! # Overview
//!
//! The batch runner is responsible for:
//! - **Refinement**: refining each record and writing each collection back
//! - **Verification**: re-checking each record and grouping the findings
//! - **Metrics**: counting processed and modified records and failures
//!
//! Collections are processed sequentially in name order. One unreadable
//! collection never stops the run.
//!
//! # Usage
//!
//! ```no_run
//! use qbank_batch::{BatchConfig, BatchRunner};
//! use qbank_store::JsonDirStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonDirStore::new("questions");
//! let runner = BatchRunner::builtin(BatchConfig::default());
//!
//! let metrics = runner.refine_all(&store)?;
//! println!("{}", metrics.summary());
//!
//! let report = runner.verify_all(&store)?;
//! println!("{} issues", report.total_issues());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The runner can be configured via TOML:
//!
//! ```toml
//! [batch]
//! dry_run = false
//! lock = true
//! max_issues_per_group = 5
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
mod runner;

pub use config::{BatchConfig, DEFAULT_MAX_ISSUES_PER_GROUP};
pub use error::BatchError;
pub use metrics::{CollectionStats, RefineMetrics};
pub use runner::BatchRunner;
