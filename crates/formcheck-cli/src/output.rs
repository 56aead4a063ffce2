//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with specialized
//! rendering for validation results and the rule table.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use formcheck_core::{RuleTable, ValidationResult, INVALID_FORM_BANNER};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation result with one line per failing field
    fn format_validation_result(&self, result: &ValidationResult) -> Result<String>;

    /// Format the rule table
    fn format_rule_table(&self, table: &RuleTable, patterns: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_result(&self, result: &ValidationResult) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_result_human(result)),
            _ => self.format(result),
        }
    }

    fn format_rule_table(&self, table: &RuleTable, patterns: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_rule_table_human(table, patterns)),
            _ => self.format(&rule_rows(table)),
        }
    }
}

/// Serializable view of one rule
#[derive(Debug, Serialize)]
pub struct RuleRow {
    pub field: String,
    pub label: String,
    pub pattern: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    pub message: String,
}

/// Flatten the rule table for machine-readable output
pub fn rule_rows(table: &RuleTable) -> Vec<RuleRow> {
    table
        .iter()
        .map(|rule| RuleRow {
            field: rule.field().name().to_string(),
            label: rule.field().label().to_string(),
            pattern: rule.pattern().accept_source().to_string(),
            requires: rule.pattern().require_sources().map(str::to_string).collect(),
            message: rule.message().to_string(),
        })
        .collect()
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let mut value_json = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value_json);
        trace!(data = %value_json, "Outputting data");

        let formatted = self.format.format(value)?;

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            // Machine formats are written as-is
            self.write(&formatted)
        }
    }

    /// Write a validation result with specialized formatting
    pub fn validation_result(&mut self, result: &ValidationResult) -> Result<()> {
        let formatted = self.format.format_validation_result(result)?;
        if self.format == OutputFormat::Human && self.use_color {
            let colored = if result.is_valid() {
                formatted.green().to_string()
            } else {
                formatted.red().to_string()
            };
            return self.writeln(&colored);
        }
        self.writeln(&formatted)
    }

    /// Write the rule table with specialized formatting
    pub fn rule_table(&mut self, table: &RuleTable, patterns: bool) -> Result<()> {
        let formatted = self.format.format_rule_table(table, patterns)?;
        self.writeln(&formatted)
    }
}

/// Format a validation result for human reading
fn format_validation_result_human(result: &ValidationResult) -> String {
    if result.is_valid() {
        return "✓ Record is valid".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "✗ Record failed validation - {} error(s)\n",
        result.error_count()
    ));
    output.push_str(INVALID_FORM_BANNER);
    output.push('\n');

    for (field, message) in result.errors() {
        output.push_str(&format!("\n  • {} ({}): {}", field.label(), field, message));
    }

    output
}

/// Format the rule table as aligned columns
fn format_rule_table_human(table: &RuleTable, patterns: bool) -> String {
    let rows = rule_rows(table);
    let field_width = rows.iter().map(|r| r.field.len()).max().unwrap_or(0).max("Field".len());

    let mut output = format!("{:width$} │ Message\n", "Field", width = field_width);
    output.push_str(&format!("{}─┼─{}\n", "─".repeat(field_width), "─".repeat(40)));

    for row in &rows {
        output.push_str(&format!("{:width$} │ {}\n", row.field, row.message, width = field_width));
        if patterns {
            output.push_str(&format!("{:width$} │   pattern: {}\n", "", row.pattern, width = field_width));
            for require in &row.requires {
                output.push_str(&format!("{:width$} │   requires: {}\n", "", require, width = field_width));
            }
        }
    }

    output
}
