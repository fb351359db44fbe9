//! qbank Rules
//!
//! The keyword rule set and the classifier that evaluates it.
//!
//! A [`RuleSet`] is one versioned table consulted by both call sites:
//! enrichment (which derives metadata) and verification (which re-checks
//! it). Where the two historically used different keyword lists, a rule
//! group carries an explicit `verify_keywords` list instead of a second,
//! hand-maintained table.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use qbank_domain::{field, QuestionRecord};
//! use qbank_rules::{Category, Classifier, RuleSet};
//!
//! let classifier = Classifier::enrichment(Arc::new(RuleSet::builtin()));
//! let record = QuestionRecord::new().with(field::TITLE, "Build a Docker image");
//!
//! let result = classifier.classify(&record);
//! assert!(result.has_fired(Category::Devops));
//! assert!(result.positions.contains("devops"));
//! ```

#![warn(missing_docs)]

mod builtin;
mod classifier;
mod error;
mod haystack;
mod rule;
mod ruleset;

pub use classifier::{competitive_required, Classification, Classifier};
pub use error::{Result, RulesError};
pub use haystack::{keyword_matches, Haystack};
pub use rule::{
    Category, Effect, Expectation, MatchMode, Profile, Requirement, RuleGroup, TargetField,
    TextScope, TopicRule,
};
pub use ruleset::{RuleSet, RULESET_VERSION};
