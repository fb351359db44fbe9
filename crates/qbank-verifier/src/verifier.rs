//! Record verification logic

use crate::issue::{issue_category, Issue};
use crate::VerifierConfig;
use qbank_domain::taxonomy::{company_type, interview_type, position, seniority};
use qbank_domain::{Collection, Difficulty, ListField, QuestionRecord};
use qbank_rules::{Classifier, Expectation, Requirement, RuleGroup, RuleSet};
use std::sync::Arc;
use tracing::trace;

/// Re-evaluates the rule table against stored record metadata
#[derive(Debug, Clone)]
pub struct Verifier {
    classifier: Classifier,
    config: VerifierConfig,
}

impl Verifier {
    /// Create a verifier over a rule table
    pub fn new(rules: Arc<RuleSet>, config: VerifierConfig) -> Self {
        Self {
            classifier: Classifier::verification(rules),
            config,
        }
    }

    /// Create a verifier over the built-in table with default checks
    pub fn builtin() -> Self {
        Self::new(Arc::new(RuleSet::builtin()), VerifierConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Check one record, returning every violated check
    ///
    /// # Arguments
    ///
    /// * `record` - The record to check
    /// * `collection` - Name of the collection the record came from
    pub fn verify(&self, record: &QuestionRecord, collection: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        let id = record.id();
        let mut raise = |category: &str, detail: String| {
            issues.push(Issue::new(category, collection, id, detail));
        };

        let difficulty = record.difficulty();
        let positions = record.positions();
        let levels = record.seniority_levels();
        let types = record.interview_types();

        // 1. Positions present
        if self.config.check_list_shapes && !positions.is_malformed() && positions.is_empty() {
            raise(issue_category::EMPTY_POSITIONS, "No positions assigned".to_string());
        }

        // 2. Entry difficulty
        if self.config.check_entry_seniority
            && difficulty == Difficulty::Entry
            && !levels.contains(seniority::ENTRY)
        {
            raise(
                issue_category::MISSING_ENTRY_SENIORITY,
                format!(
                    "Difficulty is 'entry' but seniorityLevels doesn't include 'entry': {:?}",
                    levels.items()
                ),
            );
        }

        // 3. Keyword rule expectations
        if self.config.check_keyword_rules {
            for group in self.classifier.fired_groups(record) {
                let Some(expectation) = &group.expectation else {
                    continue;
                };
                let stored = record.list(expectation.field.key());
                if !expectation.require.is_satisfied(stored.items()) {
                    raise(&expectation.issue, expectation_detail(group, expectation, &stored));
                }
            }
        }

        // 4. Competitive interview type
        if self.config.check_competitive && !types.contains(interview_type::COMPETITIVE) {
            if levels.contains(seniority::SENIOR) {
                raise(
                    issue_category::MISSING_COMPETITIVE_SENIOR,
                    format!(
                        "Senior question missing 'competitive' in interviewTypes: {:?}",
                        types.items()
                    ),
                );
            }
            if levels.contains(seniority::MID) && difficulty == Difficulty::Mid {
                raise(
                    issue_category::MISSING_COMPETITIVE_MID,
                    format!(
                        "Mid-level mid-difficulty question missing 'competitive': {:?}",
                        types.items()
                    ),
                );
            }
        }

        // 5. Company type
        if self.config.check_company_type {
            match record.company_type() {
                ListField::Malformed { kind } => raise(
                    issue_category::COMPANY_TYPE_NOT_ARRAY,
                    format!("companyType should be array, got: {}", kind),
                ),
                other if other.items() != company_type::ALL => raise(
                    issue_category::WRONG_COMPANY_TYPES,
                    format!(
                        "companyType should be {:?}, got: {:?}",
                        company_type::ALL,
                        other.items()
                    ),
                ),
                _ => {}
            }
        }

        // 6. List shapes
        if self.config.check_list_shapes {
            if let ListField::Malformed { kind } = types {
                raise(
                    issue_category::INTERVIEW_TYPES_NOT_ARRAY,
                    format!("interviewTypes should be array, got: {}", kind),
                );
            }
            if let ListField::Malformed { kind } = positions {
                raise(
                    issue_category::POSITIONS_NOT_ARRAY,
                    format!("positions should be array, got: {}", kind),
                );
            }
            if let Some(dup) = first_duplicate(positions.items()) {
                raise(
                    issue_category::DUPLICATE_POSITIONS,
                    format!("'{}' appears more than once in positions: {:?}", dup, positions.items()),
                );
            }
            if let Some(dup) = first_duplicate(types.items()) {
                raise(
                    issue_category::DUPLICATE_INTERVIEW_TYPES,
                    format!("'{}' appears more than once in interviewTypes: {:?}", dup, types.items()),
                );
            }
            if !positions.items().windows(2).all(|w| w[0] <= w[1]) {
                raise(
                    issue_category::UNSORTED_POSITIONS,
                    format!("positions should be sorted: {:?}", positions.items()),
                );
            }
        }

        // 7. Nominal domain
        if self.config.flag_unknown_positions {
            for p in positions.items().iter().filter(|p| !position::is_known(p)) {
                raise(
                    issue_category::UNKNOWN_POSITION,
                    format!("'{}' is not a known position", p),
                );
            }
        }

        issues
    }

    /// Check every record of a collection, open-ended questions first
    pub fn verify_collection(&self, collection: &Collection) -> Vec<Issue> {
        collection
            .records()
            .flat_map(|(_, record)| {
                let issues = self.verify(record, collection.name());
                if !issues.is_empty() {
                    trace!(
                        collection = collection.name(),
                        id = record.id(),
                        count = issues.len(),
                        "Record has issues"
                    );
                }
                issues
            })
            .collect()
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::builtin()
    }
}

fn expectation_detail(group: &RuleGroup, expectation: &Expectation, stored: &ListField) -> String {
    let field = expectation.field.key();
    match &expectation.require {
        Requirement::AllOf(values) => format!(
            "{} question missing {} in {}: {:?}",
            group.category,
            quoted(values),
            field,
            stored.items()
        ),
        Requirement::AnyOf(values) => format!(
            "{} question should include {} in {}: {:?}",
            group.category,
            values.join("/"),
            field,
            stored.items()
        ),
    }
}

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].contains(item))
        .map(|(_, item)| item.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_domain::QuestionGroup;
    use serde_json::{json, Value};

    fn record(value: Value) -> QuestionRecord {
        serde_json::from_value(value).unwrap()
    }

    /// A record that passes every default check
    fn clean() -> Value {
        json!({
            "id": "ok-1",
            "title": "Lifetimes",
            "description": "",
            "difficulty": "junior",
            "positions": ["fullstack"],
            "seniorityLevels": ["junior"],
            "interviewTypes": ["regular"],
            "companyType": ["faang", "startup", "enterprise"]
        })
    }

    fn with(mut base: Value, key: &str, value: Value) -> QuestionRecord {
        base[key] = value;
        record(base)
    }

    fn categories(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.category.as_str()).collect()
    }

    #[test]
    fn test_clean_record() {
        let issues = Verifier::builtin().verify(&record(clean()), "rust");
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_entry_difficulty_needs_entry_level() {
        let mut base = clean();
        base["difficulty"] = json!("entry");
        let issues = Verifier::builtin().verify(&record(base), "rust");

        assert_eq!(categories(&issues), vec![issue_category::MISSING_ENTRY_SENIORITY]);
        assert_eq!(issues[0].collection, "rust");
        assert_eq!(issues[0].record_id, "ok-1");
        assert_eq!(
            issues[0].detail,
            "Difficulty is 'entry' but seniorityLevels doesn't include 'entry': [\"junior\"]"
        );
    }

    #[test]
    fn test_foundational_junior_needs_entry() {
        let r = with(clean(), "title", json!("What is a lifetime?"));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec!["Missing Entry for Foundational"]);
    }

    #[test]
    fn test_security_expectations() {
        let r = with(clean(), "title", json!("CSRF tokens"));
        let issues = Verifier::builtin().verify(&r, "web");
        assert_eq!(categories(&issues), vec!["Missing Cybersecurity Position"]);
        assert!(issues[0].detail.contains("'cybersecurity'"));

        let mut base = clean();
        base["title"] = json!("CSRF tokens");
        base["positions"] = json!(["cybersecurity"]);
        let issues = Verifier::builtin().verify(&record(base), "web");
        assert_eq!(
            categories(&issues),
            vec!["Missing Backend/Fullstack for Web Security"]
        );
    }

    #[test]
    fn test_database_api_frontend_expectations() {
        let mut base = clean();
        base["title"] = json!("Postgres schema for a REST endpoint rendered in React");
        base["positions"] = json!(["mobile"]);
        let issues = Verifier::builtin().verify(&record(base), "misc");
        assert_eq!(
            categories(&issues),
            vec![
                "Missing Data-Engineer Position",
                "Missing Backend/Fullstack for API",
                "Missing Frontend/Fullstack",
            ]
        );
    }

    #[test]
    fn test_extras_are_never_flagged() {
        let r = with(
            clean(),
            "positions",
            json!(["backend", "cybersecurity", "data-engineer", "devops", "fullstack"]),
        );
        assert!(Verifier::builtin().verify(&r, "rust").is_empty());
    }

    #[test]
    fn test_competitive_checks() {
        let mut base = clean();
        base["seniorityLevels"] = json!(["mid", "senior"]);
        base["difficulty"] = json!("mid");
        let issues = Verifier::builtin().verify(&record(base), "rust");
        assert_eq!(
            categories(&issues),
            vec![
                issue_category::MISSING_COMPETITIVE_SENIOR,
                issue_category::MISSING_COMPETITIVE_MID
            ]
        );
    }

    #[test]
    fn test_company_type_checks() {
        let r = with(clean(), "companyType", json!("faang"));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::COMPANY_TYPE_NOT_ARRAY]);
        assert_eq!(issues[0].detail, "companyType should be array, got: string");

        let r = with(clean(), "companyType", json!(["startup", "faang", "enterprise"]));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::WRONG_COMPANY_TYPES]);

        let mut base = clean();
        base.as_object_mut().unwrap().remove("companyType");
        let issues = Verifier::builtin().verify(&record(base), "rust");
        assert_eq!(categories(&issues), vec![issue_category::WRONG_COMPANY_TYPES]);
    }

    #[test]
    fn test_shape_checks() {
        let r = with(clean(), "positions", json!({"a": "backend"}));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::POSITIONS_NOT_ARRAY]);

        let r = with(clean(), "interviewTypes", json!(5));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::INTERVIEW_TYPES_NOT_ARRAY]);
    }

    #[test]
    fn test_empty_positions() {
        let r = with(clean(), "positions", json!([]));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::EMPTY_POSITIONS]);
    }

    #[test]
    fn test_duplicates_and_order() {
        let r = with(clean(), "positions", json!(["mobile", "backend", "mobile"]));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(
            categories(&issues),
            vec![
                issue_category::DUPLICATE_POSITIONS,
                issue_category::UNSORTED_POSITIONS
            ]
        );
        assert!(issues[0].detail.starts_with("'mobile'"));

        let r = with(clean(), "interviewTypes", json!(["flash", "flash"]));
        let issues = Verifier::builtin().verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::DUPLICATE_INTERVIEW_TYPES]);
    }

    #[test]
    fn test_strict_flags_unknown_positions() {
        let r = with(clean(), "positions", json!(["fullstack", "wizard"]));
        assert!(Verifier::builtin().verify(&r, "rust").is_empty());

        let strict = Verifier::new(Arc::new(RuleSet::builtin()), VerifierConfig::strict());
        let issues = strict.verify(&r, "rust");
        assert_eq!(categories(&issues), vec![issue_category::UNKNOWN_POSITION]);
    }

    #[test]
    fn test_permissive_only_checks_keywords() {
        let permissive = Verifier::new(Arc::new(RuleSet::builtin()), VerifierConfig::permissive());
        let r = record(json!({"id": "x", "title": "GraphQL schema", "difficulty": "entry"}));
        let issues = permissive.verify(&r, "rust");
        assert_eq!(
            categories(&issues),
            vec!["Missing Data-Engineer Position", "Missing Backend/Fullstack for API"]
        );
    }

    #[test]
    fn test_missing_id_reported_as_unknown() {
        let mut base = clean();
        base.as_object_mut().unwrap().remove("id");
        base["positions"] = json!([]);
        let issues = Verifier::builtin().verify(&record(base), "rust");
        assert_eq!(issues[0].record_id, "unknown");
    }

    #[test]
    fn test_verify_collection_visits_both_groups() {
        let bad = with(clean(), "positions", json!([]));
        let collection = Collection::new("mixed")
            .with_group(QuestionGroup::OpenEnded, vec![bad.clone()])
            .with_group(QuestionGroup::MultipleChoice, vec![record(clean()), bad]);

        let issues = Verifier::builtin().verify_collection(&collection);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.collection == "mixed"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use qbank_domain::field;
    use qbank_refiner::Refiner;
    use serde_json::json;

    fn arb_record() -> impl Strategy<Value = QuestionRecord> {
        (
            prop::collection::vec(
                prop::sample::select(vec![
                    "what is", "define", "senior", "jwt", "sql", "api", "react", "docker", "ai", "x",
                ]),
                0..5,
            ),
            prop::sample::select(vec!["entry", "junior", "mid", "senior", "staff"]),
            prop::collection::vec(prop::sample::select(vec!["entry", "junior", "mid", "senior"]), 0..3),
            prop::collection::vec(prop::sample::select(vec!["regular", "competitive"]), 0..3),
        )
            .prop_map(|(words, difficulty, levels, types)| {
                QuestionRecord::new()
                    .with(field::ID, "p")
                    .with(field::TITLE, words.join(" "))
                    .with(field::DIFFICULTY, difficulty)
                    .with(field::SENIORITY_LEVELS, json!(levels))
                    .with(field::INTERVIEW_TYPES, json!(types))
            })
    }

    proptest! {
        /// Property: a refined record passes seniority, competitive,
        /// company type and positions checks
        #[test]
        fn test_refined_records_close_invariants(r in arb_record()) {
            let refined = Refiner::builtin().refine(&r);
            let issues = Verifier::builtin().verify(&refined, "prop");

            let closed = [
                issue_category::EMPTY_POSITIONS,
                issue_category::MISSING_ENTRY_SENIORITY,
                "Missing Entry for Foundational",
                issue_category::MISSING_COMPETITIVE_SENIOR,
                issue_category::MISSING_COMPETITIVE_MID,
                issue_category::WRONG_COMPANY_TYPES,
                issue_category::COMPANY_TYPE_NOT_ARRAY,
                issue_category::DUPLICATE_POSITIONS,
                issue_category::DUPLICATE_INTERVIEW_TYPES,
                issue_category::UNSORTED_POSITIONS,
            ];
            for issue in &issues {
                prop_assert!(!closed.contains(&issue.category.as_str()), "{:?}", issue);
            }
        }

        /// Property: verification never changes the record
        #[test]
        fn test_verify_is_read_only(r in arb_record()) {
            let before = r.clone();
            let _ = Verifier::builtin().verify(&r, "prop");
            prop_assert_eq!(r, before);
        }
    }
}
