//! Shared utilities for command handlers

use crate::error::{Error, Result};
use crate::output::OutputWriter;
use formcheck_core::{is_form_field, Record};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A record read from disk
#[derive(Debug)]
pub struct LoadedRecord {
    pub record: Record,
    /// Non-form members that were present but not strings
    pub skipped: Vec<String>,
}

impl LoadedRecord {
    /// Tell the user which members were left out of the record
    pub fn warn_skipped(&self, output: &mut OutputWriter) -> Result<()> {
        if self.skipped.is_empty() {
            return Ok(());
        }
        output.warning(&format!(
            "Ignoring non-text members: {}",
            self.skipped.join(", ")
        ))
    }
}

/// Load a record from a JSON or YAML file.
///
/// The document must be an object; string members become record values.
/// A form field holding anything but a string (YAML reads `phoneNo: 9876543210`
/// as a number) is rejected rather than silently dropped.
pub fn load_record(path: &Path) -> Result<LoadedRecord> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    debug!("File read successfully, {} bytes", content.len());

    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    let value: serde_json::Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|_e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|_e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
        })?
    };

    let object = value.as_object().ok_or_else(|| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: "an object of field names to values".to_string(),
    })?;

    if let Some((name, value)) = object
        .iter()
        .find(|(name, value)| is_form_field(name) && !value.is_string())
    {
        return Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!(
                "a text value for {name} (found {value}); quote it, e.g. {name}: \"{value}\""
            ),
        });
    }

    let skipped = object
        .iter()
        .filter(|(_, v)| !v.is_string())
        .map(|(k, _)| k.clone())
        .collect();

    Ok(LoadedRecord {
        record: Record::from_json_object(object),
        skipped,
    })
}
