//! Verification report grouped by category and collection

use crate::Issue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A reported record within one (category, collection) group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueEntry {
    /// Record identifier
    pub record_id: String,
    /// Explanation
    pub detail: String,
}

/// Aggregated findings of a verification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Records verified per collection
    pub collections: BTreeMap<String, usize>,

    /// Issues keyed by category, then collection, in discovery order
    pub issues: BTreeMap<String, BTreeMap<String, Vec<IssueEntry>>>,
}

impl VerificationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that a collection was read and how many records it held
    pub fn record_collection(&mut self, name: &str, records: usize) {
        self.collections.insert(name.to_string(), records);
    }

    /// Add one issue
    pub fn add(&mut self, issue: Issue) {
        self.issues
            .entry(issue.category)
            .or_default()
            .entry(issue.collection)
            .or_default()
            .push(IssueEntry {
                record_id: issue.record_id,
                detail: issue.detail,
            });
    }

    /// Add many issues
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.add(issue);
        }
    }

    /// Number of collections read successfully
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Number of records verified
    pub fn record_count(&self) -> usize {
        self.collections.values().sum()
    }

    /// Total number of issues
    pub fn total_issues(&self) -> usize {
        self.issues
            .values()
            .flat_map(|by_collection| by_collection.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether no issue was found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue count per category, largest first (ties by name)
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .issues
            .iter()
            .map(|(category, by_collection)| {
                (category.as_str(), by_collection.values().map(Vec::len).sum())
            })
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    /// First `max` entries of a group and the number left out
    pub fn capped<'a>(entries: &'a [IssueEntry], max: usize) -> (&'a [IssueEntry], usize) {
        let shown = entries.len().min(max);
        (&entries[..shown], entries.len() - shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(category: &str, collection: &str, id: &str) -> Issue {
        Issue::new(category, collection, id, format!("detail for {id}"))
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = VerificationReport::new();
        assert!(report.is_clean());
        assert_eq!(report.total_issues(), 0);
        assert!(report.category_counts().is_empty());
    }

    #[test]
    fn test_grouping_and_counts() {
        let mut report = VerificationReport::new();
        report.record_collection("go", 3);
        report.record_collection("rust", 4);
        report.extend([
            issue("Wrong Company Types", "rust", "r1"),
            issue("Empty Positions", "rust", "r2"),
            issue("Wrong Company Types", "go", "g1"),
            issue("Wrong Company Types", "rust", "r3"),
        ]);

        assert_eq!(report.collection_count(), 2);
        assert_eq!(report.record_count(), 7);
        assert_eq!(report.total_issues(), 4);
        assert_eq!(
            report.category_counts(),
            vec![("Wrong Company Types", 3), ("Empty Positions", 1)]
        );

        let rust = &report.issues["Wrong Company Types"]["rust"];
        let ids: Vec<&str> = rust.iter().map(|e| e.record_id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let mut report = VerificationReport::new();
        report.add(issue("b", "x", "1"));
        report.add(issue("a", "x", "2"));
        assert_eq!(report.category_counts(), vec![("a", 1), ("b", 1)]);
    }

    #[test]
    fn test_capped() {
        let entries: Vec<IssueEntry> = (0..7)
            .map(|i| IssueEntry {
                record_id: i.to_string(),
                detail: String::new(),
            })
            .collect();

        let (shown, rest) = VerificationReport::capped(&entries, 5);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 2);

        let (shown, rest) = VerificationReport::capped(&entries[..3], 5);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_file_read_error_entry() {
        let mut report = VerificationReport::new();
        report.add(Issue::file_read_error("broken", "expected value at line 1"));
        let entry = &report.issues["File Read Error"]["broken"][0];
        assert_eq!(entry.record_id, "N/A");
        assert_eq!(entry.detail, "expected value at line 1");
    }
}
