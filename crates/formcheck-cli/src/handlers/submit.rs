//! Submit command handler

use crate::cli::SubmitArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::load_record;
use crate::logging::timing::Timer;
use crate::output::{OutputFormatter, OutputWriter};
use formcheck_core::{FormController, LogSink, MemorySink, SubmitOutcome};
use std::fs;
use tracing::{info, instrument};

/// Handle the submit command: validate through the form controller and
/// hand the record to the submission log when it passes
#[instrument(skip(config, output), fields(file = %args.record.display()))]
pub fn handle_submit(args: SubmitArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("submit_command", &format!("file: {}", args.record.display()));

    let loaded = load_record(&args.record)?;
    loaded.warn_skipped(output)?;
    let mut form = FormController::standard()?;
    if config.validation.strict {
        form.load(&loaded.record)?;
    } else {
        for (name, value) in loaded.record.iter() {
            if form.set_value(name, value).is_err() {
                output.warning(&format!("Ignoring unknown field: {}", name))?;
            }
        }
    }

    let mut sinks = (LogSink::new(), MemorySink::new());
    let outcome = form.submit(&mut sinks)?;

    if let Some(result) = form.last_result() {
        output.validation_result(result)?;
    }

    match outcome {
        SubmitOutcome::Submitted => {
            output.success("✓ Record submitted")?;

            if let (Some(path), Some(submission)) = (args.save_to.as_ref(), sinks.1.last()) {
                fs::write(path, output.format().format(submission)?)?;
                info!(path = %path.display(), "Submission saved");
                output.success(&format!("✓ Submission saved to {}", path.display()))?;
            }
            Ok(())
        }
        SubmitOutcome::Rejected { failing } => Err(Error::ValidationFailed { count: failing }),
    }
}
