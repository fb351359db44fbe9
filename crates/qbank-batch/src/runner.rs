//! Batch refinement and verification over a collection store

use crate::metrics::CollectionStats;
use crate::{BatchConfig, BatchError, RefineMetrics};
use qbank_domain::{Collection, CollectionStore};
use qbank_refiner::Refiner;
use qbank_rules::RuleSet;
use qbank_verifier::{Issue, VerificationReport, Verifier, VerifierConfig};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the refiner or verifier over every collection of a store
///
/// Collections are processed one at a time in name order. A collection
/// that cannot be read is reported and skipped; the run continues.
///
/// # Examples
///
/// ```
/// use qbank_batch::{BatchConfig, BatchRunner};
/// use qbank_store::MemoryStore;
/// use serde_json::json;
///
/// let store = MemoryStore::new()
///     .with_document("rust", json!({"open_questions": [{"id": "r1", "title": "Docker"}]}));
/// let runner = BatchRunner::builtin(BatchConfig::default());
///
/// let metrics = runner.refine_all(&store).unwrap();
/// assert_eq!(metrics.total_modified(), 1);
///
/// let report = runner.verify_all(&store).unwrap();
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    refiner: Refiner,
    verifier: Verifier,
    config: BatchConfig,
}

impl BatchRunner {
    /// Create a runner sharing one rule table between refiner and verifier
    pub fn new(rules: Arc<RuleSet>, verifier: VerifierConfig, config: BatchConfig) -> Self {
        Self {
            refiner: Refiner::new(Arc::clone(&rules)),
            verifier: Verifier::new(rules, verifier),
            config,
        }
    }

    /// Create a runner over the built-in rule table with default checks
    pub fn builtin(config: BatchConfig) -> Self {
        Self::new(
            Arc::new(RuleSet::builtin()),
            VerifierConfig::default(),
            config,
        )
    }

    /// Active configuration
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Refine every collection, writing each back unless in dry-run mode
    ///
    /// Every successfully loaded collection is rewritten in full, even when
    /// no record changed.
    pub fn refine_all<S: CollectionStore>(&self, store: &S) -> Result<RefineMetrics, BatchError>
    where
        S::Error: Display,
    {
        let names = self.collection_names(store)?;
        let mut metrics = RefineMetrics {
            dry_run: self.config.dry_run,
            ..RefineMetrics::new()
        };

        for name in &names {
            let outcome = if self.config.dry_run {
                store
                    .load_collection(name)
                    .map(|mut collection| self.refine_collection(&mut collection))
            } else {
                store.update_collection(name, |collection| self.refine_collection(collection))
            };

            match outcome {
                Ok(stats) => {
                    info!(
                        collection = %name,
                        total = stats.total,
                        modified = stats.modified,
                        "Refined collection"
                    );
                    metrics.record_collection(name, stats);
                }
                Err(e) => {
                    warn!(collection = %name, error = %e, "Failed to refine collection");
                    metrics.record_error(name, e);
                }
            }
        }
        Ok(metrics)
    }

    /// Refine the records of one collection in memory
    pub fn refine_collection(&self, collection: &mut Collection) -> CollectionStats {
        let mut stats = CollectionStats::default();
        let name = collection.name().to_string();
        for record in collection.records_mut() {
            stats.total += 1;
            if self.refiner.refine_in_place(record) {
                stats.modified += 1;
                debug!(collection = %name, id = record.id(), "Modified record");
            }
        }
        stats
    }

    /// Verify every collection
    ///
    /// Unreadable collections become a `File Read Error` issue.
    pub fn verify_all<S: CollectionStore>(
        &self,
        store: &S,
    ) -> Result<VerificationReport, BatchError>
    where
        S::Error: Display,
    {
        let names = self.collection_names(store)?;
        let mut report = VerificationReport::new();

        for name in &names {
            match store.load_collection(name) {
                Ok(collection) => {
                    let issues = self.verifier.verify_collection(&collection);
                    info!(
                        collection = %name,
                        records = collection.len(),
                        issues = issues.len(),
                        "Verified collection"
                    );
                    report.record_collection(name, collection.len());
                    report.extend(issues);
                }
                Err(e) => {
                    warn!(collection = %name, error = %e, "Failed to read collection");
                    report.add(Issue::file_read_error(name.as_str(), e));
                }
            }
        }
        Ok(report)
    }

    fn collection_names<S: CollectionStore>(&self, store: &S) -> Result<Vec<String>, BatchError>
    where
        S::Error: Display,
    {
        let names = store
            .list_collections()
            .map_err(|e| BatchError::Store(e.to_string()))?;
        if names.is_empty() {
            return Err(BatchError::NoCollections);
        }
        info!(count = names.len(), "Found collections");
        Ok(names)
    }
}
