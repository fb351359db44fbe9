//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qbank - Refine and verify interview question collections.
#[derive(Debug, Parser)]
#[command(name = "qbank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QBANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive classification metadata and rewrite every collection
    Refine(RefineArgs),

    /// Re-check stored metadata against the rules
    Verify(VerifyArgs),

    /// Show the active rule table
    Rules(RulesArgs),
}

/// Arguments for the refine command.
#[derive(Debug, Parser)]
pub struct RefineArgs {
    /// Collection directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// TOML rule table to use instead of the built-in one
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Count changes without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Collection directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// TOML rule table to use instead of the built-in one
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Also flag positions outside the known set
    #[arg(long)]
    pub strict: bool,

    /// Issues listed per category and collection
    #[arg(short, long)]
    pub max_per_group: Option<usize>,

    /// Exit with status 2 when any issue is found
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Arguments for the rules command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// TOML rule table to show instead of the built-in one
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Print the table as TOML
    #[arg(long)]
    pub toml: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_command() {
        let cli = Cli::parse_from(["qbank", "refine", "--dir", "banks", "--dry-run"]);
        match cli.command {
            Command::Refine(args) => {
                assert_eq!(args.dir, Some(PathBuf::from("banks")));
                assert!(args.dry_run);
                assert!(args.rules.is_none());
            }
            _ => panic!("Expected Refine command"),
        }
    }

    #[test]
    fn test_verify_command_with_global_flags() {
        let cli = Cli::parse_from([
            "qbank",
            "verify",
            "--strict",
            "--max-per-group",
            "3",
            "--fail-on-issues",
            "--format",
            "json",
            "--no-color",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        match cli.command {
            Command::Verify(args) => {
                assert!(args.strict);
                assert!(args.fail_on_issues);
                assert_eq!(args.max_per_group, Some(3));
            }
            _ => panic!("Expected Verify command"),
        }
    }

    #[test]
    fn test_rules_command() {
        let cli = Cli::parse_from(["qbank", "-v", "rules", "--toml"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Rules(RulesArgs { toml: true, .. })));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["qbank"]).is_err());
    }
}
