//! qbank Refiner
//!
//! Derives classification metadata for question records.
//!
//! The refiner provides:
//! - Entry seniority for entry-level and foundational junior questions
//! - Position expansion from keyword and topic rules
//! - Competitive interview type for senior and mid-level questions
//! - Company type normalization
//!
//! Refinement only ever adds values, and refining a refined record is a
//! no-op.
//!
//! # Examples
//!
//! ```
//! use qbank_domain::{field, QuestionRecord};
//! use qbank_refiner::Refiner;
//!
//! let refiner = Refiner::builtin();
//! let record = QuestionRecord::new()
//!     .with(field::DIFFICULTY, "entry")
//!     .with(field::TITLE, "What is a variable?");
//!
//! let refined = refiner.refine(&record);
//! assert_eq!(refined.seniority_levels().items(), ["entry".to_string()]);
//! assert_eq!(refined.positions().items(), ["fullstack".to_string()]);
//! ```

#![warn(missing_docs)]

mod refiner;

pub use refiner::Refiner;
