//! qbank Store
//!
//! Persistence for question collections.
//!
//! - [`JsonDirStore`]: one pretty-printed JSON file per collection in a
//!   directory. Writes go to a temporary file that is renamed over the
//!   target, and read-modify-write cycles hold an exclusive advisory lock.
//! - [`MemoryStore`]: an in-memory store for tests and dry runs.
//!
//! Both implement [`qbank_domain::CollectionStore`].

#![warn(missing_docs)]

mod error;
mod json_dir;
mod memory;

pub use error::{Result, StoreError};
pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
