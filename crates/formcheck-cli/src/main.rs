//! Formcheck CLI - validate and submit registration form records
//!
//! This is the main entry point for the formcheck CLI application, providing
//! commands for validating records, submitting them, and inspecting the
//! rule table.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration feeds the logging setup, so load it first
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // Initialize logging; the guard flushes file output on exit
    let log_guard = match init_logging(&cli, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    if let Err(e) = run(cli, &config) {
        // process::exit skips destructors
        drop(log_guard);
        exit_with(&e);
    }
}

/// Print an error and exit with its code
fn exit_with(e: &error::Error) -> ! {
    eprintln!("{}", error::format_error(e, control::SHOULD_COLORIZE.should_colorize()));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(cli.output, config);
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::Submit(args) => handlers::handle_submit(args, config, &mut output),
        Commands::Rules(args) => handlers::handle_rules(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// The `--output` flag wins over the configured default
fn resolve_output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| OutputFormat::from_config_name(&config.output.format))
        .unwrap_or(OutputFormat::Human)
}

/// Initialize the logging system
fn init_logging(
    cli: &Cli,
    config: &Config,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.apply_file_config(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
