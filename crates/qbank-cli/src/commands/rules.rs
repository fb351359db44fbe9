//! Rules command implementation.

use crate::cli::RulesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the rules command.
pub fn execute_rules(args: RulesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let rules = config.rule_set(args.rules.as_deref())?;

    if args.toml {
        print!("{}", rules.to_toml_string()?);
    } else {
        println!("{}", formatter.format_rules(&rules)?);
    }
    Ok(())
}
