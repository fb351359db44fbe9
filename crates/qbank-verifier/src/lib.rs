//! qbank Verifier
//!
//! Re-checks stored question metadata against the rule table.
//!
//! The verifier provides:
//! - Seniority and competitive interview-type checks
//! - Keyword rule expectations (security, database, API, frontend)
//! - Company type and list shape checks
//! - A report grouped by issue category and collection
//!
//! Verification never modifies a record and only flags values that are
//! missing; extra values are never an issue.
//!
//! # Examples
//!
//! ```
//! use qbank_domain::{field, QuestionRecord};
//! use qbank_verifier::{issue_category, Verifier};
//! use serde_json::json;
//!
//! let verifier = Verifier::builtin();
//! let record = QuestionRecord::new()
//!     .with(field::ID, "q-1")
//!     .with(field::DIFFICULTY, "entry")
//!     .with(field::SENIORITY_LEVELS, json!(["junior"]))
//!     .with(field::POSITIONS, json!(["fullstack"]))
//!     .with(field::COMPANY_TYPE, json!(["faang", "startup", "enterprise"]));
//!
//! let issues = verifier.verify(&record, "rust");
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].category, issue_category::MISSING_ENTRY_SENIORITY);
//! ```

#![warn(missing_docs)]

mod config;
mod issue;
mod report;
mod verifier;

pub use config::VerifierConfig;
pub use issue::{issue_category, Issue};
pub use report::{IssueEntry, VerificationReport};
pub use verifier::Verifier;
