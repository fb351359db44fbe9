//! Record refinement

use qbank_domain::taxonomy::{company_type, interview_type, position, seniority};
use qbank_domain::{field, QuestionRecord};
use qbank_rules::{Classifier, RuleSet};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::trace;

/// Applies the rule table to records, merging derived metadata
#[derive(Debug, Clone)]
pub struct Refiner {
    classifier: Classifier,
}

impl Refiner {
    /// Create a refiner over a rule table
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            classifier: Classifier::enrichment(rules),
        }
    }

    /// Create a refiner over the built-in rule table
    pub fn builtin() -> Self {
        Self::new(Arc::new(RuleSet::builtin()))
    }

    /// Return a refined copy of `record`
    pub fn refine(&self, record: &QuestionRecord) -> QuestionRecord {
        let mut refined = record.clone();
        self.refine_in_place(&mut refined);
        refined
    }

    /// Refine `record` in place, returning whether anything changed
    ///
    /// Change detection ignores field order. Stored list values are never
    /// dropped: a bare value counts as a one-item list and non-string
    /// elements are kept after the string ones.
    pub fn refine_in_place(&self, record: &mut QuestionRecord) -> bool {
        let before = record.clone();
        for key in [field::SENIORITY_LEVELS, field::POSITIONS, field::INTERVIEW_TYPES] {
            if record.list(key).is_malformed() {
                let values = record.list_values(key);
                record.set_values(key, values);
            }
        }
        let derived = self.classifier.classify(record);

        // 1. Seniority: entry goes first, an existing entry stays put
        let (mut levels, level_extras) = partition(record.list_values(field::SENIORITY_LEVELS));
        if derived.add_entry_seniority && !levels.iter().any(|l| l == seniority::ENTRY) {
            levels.insert(0, seniority::ENTRY.to_string());
        }

        // 2. Positions: sorted union, fullstack when nothing applies
        let (prior, position_extras) = partition(record.list_values(field::POSITIONS));
        let mut positions: BTreeSet<String> = prior.into_iter().collect();
        positions.extend(derived.positions.iter().cloned());
        if positions.is_empty() {
            positions.insert(position::FULLSTACK.to_string());
        }

        // 3. Interview types: first occurrence wins
        let (stored, type_extras) = partition(record.list_values(field::INTERVIEW_TYPES));
        let mut types: Vec<String> = Vec::new();
        for t in stored {
            if !types.contains(&t) {
                types.push(t);
            }
        }
        if derived.add_competitive && !types.iter().any(|t| t == interview_type::COMPETITIVE) {
            types.push(interview_type::COMPETITIVE.to_string());
        }

        record.set_values(field::SENIORITY_LEVELS, merge(levels, level_extras));
        record.set_values(field::POSITIONS, merge(positions, position_extras));
        record.set_values(field::INTERVIEW_TYPES, merge(types, type_extras));
        record.set_list(field::COMPANY_TYPE, company_type::ALL);

        let changed = *record != before;
        if changed {
            trace!(id = record.id(), fired = ?derived.fired, "Refined record");
        }
        changed
    }
}

/// Split stored elements into strings and everything else
fn partition(values: Vec<Value>) -> (Vec<String>, Vec<Value>) {
    let mut strings = Vec::new();
    let mut others = Vec::new();
    for value in values {
        match value {
            Value::String(s) => strings.push(s),
            other => others.push(other),
        }
    }
    (strings, others)
}

fn merge(strings: impl IntoIterator<Item = String>, others: Vec<Value>) -> Vec<Value> {
    strings.into_iter().map(Value::String).chain(others).collect()
}

impl Default for Refiner {
    fn default() -> Self {
        Self::builtin()
    }
}
