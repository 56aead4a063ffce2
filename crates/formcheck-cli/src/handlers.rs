//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod rules;
mod submit;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use rules::handle_rules;
pub use submit::handle_submit;
pub use validate::handle_validate;
