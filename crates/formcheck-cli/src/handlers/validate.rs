//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::load_record;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use formcheck_core::{FormValidator, ValidationEngine};
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(config, output), fields(file = %args.record.display(), strict = args.strict))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.record.display()));
    info!("Starting validation process");
    output.info(&format!("Validating record: {}", args.record.display()))?;

    let loaded = load_record(&args.record)?;
    loaded.warn_skipped(output)?;

    let engine = ValidationEngine::new()?;
    let strict = args.strict || config.validation.strict;
    debug!(strict, "Evaluating record");

    let result = {
        let _validation_timer = Timer::new("record_validation");
        if strict {
            engine.evaluate_strict(&loaded.record)?
        } else {
            engine.evaluate(&loaded.record)
        }
    };

    output.validation_result(&result)?;

    if args.detailed {
        output.section("Record")?;
        output.data(&loaded.record.redacted())?;
    }

    if result.is_valid() {
        info!("Validation completed successfully");
        Ok(())
    } else {
        warn!(failing = result.error_count(), "Validation failed");
        Err(Error::ValidationFailed {
            count: result.error_count(),
        })
    }
}
