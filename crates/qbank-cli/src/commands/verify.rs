//! Verify command implementation.

use crate::cli::VerifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use qbank_batch::BatchRunner;
use qbank_store::JsonDirStore;
use qbank_verifier::VerifierConfig;
use std::sync::Arc;
use tracing::info;

/// Execute the verify command.
///
/// Returns the number of issues found.
pub fn execute_verify(args: VerifyArgs, config: &Config, formatter: &Formatter) -> Result<usize> {
    let max_per_group = args
        .max_per_group
        .unwrap_or(config.batch.max_issues_per_group);
    if max_per_group == 0 {
        return Err(CliError::InvalidInput(
            "max-per-group must be at least 1".to_string(),
        ));
    }

    let dir = config.collections_dir(args.dir);
    let rules = Arc::new(config.rule_set(args.rules.as_deref())?);
    let checks = if args.strict {
        VerifierConfig::strict()
    } else {
        VerifierConfig::default()
    };

    info!(dir = %dir.display(), strict = args.strict, "Verifying collections");
    let store = JsonDirStore::new(&dir);
    let runner = BatchRunner::new(rules, checks, config.batch.clone());
    let report = runner
        .verify_all(&store)
        .map_err(|e| super::batch_error(e, &dir))?;

    println!("{}", formatter.format_report(&report, max_per_group)?);
    Ok(report.total_issues())
}
