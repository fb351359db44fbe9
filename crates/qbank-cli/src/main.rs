//! qbank - Refine and verify interview question collections.

use clap::Parser;
use qbank_cli::commands;
use qbank_cli::{Cli, Command, Config, Formatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> qbank_cli::Result<ExitCode> {
    let config = Config::load_from(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Refine(args) => {
            commands::execute_refine(args, &config, &formatter)?;
        }
        Command::Verify(args) => {
            let fail_on_issues = args.fail_on_issues;
            let issues = commands::execute_verify(args, &config, &formatter)?;
            if fail_on_issues && issues > 0 {
                return Ok(ExitCode::from(2));
            }
        }
        Command::Rules(args) => {
            commands::execute_rules(args, &config, &formatter)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
