//! Metrics collected during refinement runs

use serde::Serialize;
use std::collections::BTreeMap;

/// Record counts for one collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    /// Records processed
    pub total: usize,
    /// Records whose metadata changed
    pub modified: usize,
}

/// Metrics collected during a refinement run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefineMetrics {
    /// Counts per successfully processed collection
    pub collections: BTreeMap<String, CollectionStats>,

    /// Collections that failed, with the reason
    pub failures: BTreeMap<String, String>,

    /// Whether changes were written back
    pub dry_run: bool,
}

impl RefineMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed collection
    pub fn record_collection(&mut self, name: &str, stats: CollectionStats) {
        self.collections.insert(name.to_string(), stats);
    }

    /// Record a collection that could not be processed
    pub fn record_error(&mut self, name: &str, error: impl std::fmt::Display) {
        self.failures.insert(name.to_string(), error.to_string());
    }

    /// Records processed across all collections
    pub fn total_records(&self) -> usize {
        self.collections.values().map(|s| s.total).sum()
    }

    /// Records modified across all collections
    pub fn total_modified(&self) -> usize {
        self.collections.values().map(|s| s.modified).sum()
    }

    /// Number of failed collections
    pub fn errors(&self) -> usize {
        self.failures.len()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Refinement Summary".to_string(),
            "==================".to_string(),
            format!("Collections processed: {}", self.collections.len()),
            format!("Total questions: {}", self.total_records()),
            format!("Questions modified: {}", self.total_modified()),
            format!("Errors: {}", self.errors()),
        ];
        if self.dry_run {
            lines.push("Dry run: no files were written".to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = RefineMetrics::new();
        assert_eq!(metrics.total_records(), 0);
        assert_eq!(metrics.total_modified(), 0);
        assert_eq!(metrics.errors(), 0);
    }

    #[test]
    fn test_totals() {
        let mut metrics = RefineMetrics::new();
        metrics.record_collection("go", CollectionStats { total: 4, modified: 1 });
        metrics.record_collection("rust", CollectionStats { total: 6, modified: 6 });
        metrics.record_error("broken", "expected value at line 1 column 1");

        assert_eq!(metrics.total_records(), 10);
        assert_eq!(metrics.total_modified(), 7);
        assert_eq!(metrics.errors(), 1);
    }

    #[test]
    fn test_summary() {
        let mut metrics = RefineMetrics::new();
        metrics.record_collection("go", CollectionStats { total: 3, modified: 2 });
        metrics.dry_run = true;

        let summary = metrics.summary();
        assert!(summary.contains("Collections processed: 1"));
        assert!(summary.contains("Total questions: 3"));
        assert!(summary.contains("Questions modified: 2"));
        assert!(summary.contains("Errors: 0"));
        assert!(summary.contains("Dry run"));
    }
}
