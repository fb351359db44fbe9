//! Refine command implementation.

use crate::cli::RefineArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qbank_batch::BatchRunner;
use qbank_store::JsonDirStore;
use qbank_verifier::VerifierConfig;
use std::sync::Arc;
use tracing::info;

/// Execute the refine command.
pub fn execute_refine(args: RefineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let dir = config.collections_dir(args.dir);
    let rules = Arc::new(config.rule_set(args.rules.as_deref())?);

    let mut batch = config.batch.clone();
    batch.dry_run |= args.dry_run;

    info!(dir = %dir.display(), dry_run = batch.dry_run, "Refining collections");
    let store = JsonDirStore::new(&dir).with_locking(batch.lock);
    let runner = BatchRunner::new(rules, VerifierConfig::default(), batch);
    let metrics = runner
        .refine_all(&store)
        .map_err(|e| super::batch_error(e, &dir))?;

    println!("{}", formatter.format_refine(&metrics)?);
    Ok(())
}
