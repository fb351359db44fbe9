//! qbank Domain Layer
//!
//! This crate contains the domain model shared by every other qbank crate:
//! interview-question records, the collections that group them, and the
//! trait boundary to whatever persists those collections.
//!
//! ## Key Concepts
//!
//! - **QuestionRecord**: one interview question, an ordered JSON object with
//!   typed views over the fields classification cares about
//! - **Difficulty**: the closed `{entry, junior, mid, senior}` scale
//! - **Taxonomy**: the nominal value domains for positions, seniority levels,
//!   interview types and company types
//! - **Collection**: a named document holding open-ended and multiple-choice
//!   question groups
//!
//! ## Architecture
//!
//! - No I/O: loading and saving live behind [`traits::CollectionStore`]
//! - Unknown record fields are carried through untouched and in place

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod difficulty;
pub mod record;
pub mod taxonomy;
pub mod traits;

// Re-exports for convenience
pub use collection::{Collection, CollectionError, QuestionGroup};
pub use difficulty::Difficulty;
pub use record::{field, ListField, QuestionRecord};
pub use traits::CollectionStore;
