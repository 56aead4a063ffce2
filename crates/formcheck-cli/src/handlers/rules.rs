//! Rules command handler

use crate::cli::RulesArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use formcheck_core::{RuleTable, UNVALIDATED_FIELDS};

/// Handle the rules command
pub fn handle_rules(args: RulesArgs, output: &mut OutputWriter) -> Result<()> {
    let table = RuleTable::new()?;
    output.rule_table(&table, args.patterns)?;
    output.info(&format!(
        "Not validated: {}",
        UNVALIDATED_FIELDS.join(", ")
    ))?;
    Ok(())
}
