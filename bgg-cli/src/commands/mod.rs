pub(crate) mod config;
pub(crate) mod show;

use std::fmt::Display;
use std::fs;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;
use serde_json::Value;

use bgg_objects::{Describe, InvalidRecordError};

use crate::CliError;
use crate::settings::{OutputFormat, OutputSettings};

/// Read a JSON file holding either one record or an array of records.
pub(crate) fn load_records(path: &Path) -> Result<Vec<Value>, CliError> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| CliError::parse(path, e))?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Build one object per record, in order.
///
/// With `skip_invalid`, records that fail to build are reported and left
/// out. Otherwise the first failure aborts.
pub(crate) fn build_all<T>(
    records: &[Value],
    skip_invalid: bool,
    build: impl Fn(&Value) -> Result<T, InvalidRecordError>,
) -> Result<Vec<T>, CliError> {
    let mut built = Vec::with_capacity(records.len());
    for (index, raw) in records.iter().enumerate() {
        match build(raw) {
            Ok(item) => built.push(item),
            Err(e) if skip_invalid => {
                log::warn!(
                    "{} record {}: {}",
                    "Skipping".if_supports_color(Stdout, |t| t.yellow()),
                    index,
                    e
                );
            }
            Err(e) => return Err(CliError::invalid_record(index, e)),
        }
    }
    Ok(built)
}

/// Write objects in the configured output format.
pub(crate) fn render<T>(items: &[T], output: &OutputSettings) -> Result<(), CliError>
where
    T: Describe + Display + Serialize,
{
    match output.format {
        OutputFormat::Json => {
            log::info!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Text => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    log::info!("");
                }
                log::info!("{}", item.if_supports_color(Stdout, |t| t.bold()));
                for line in item.dump().lines() {
                    log::info!("  {}", line);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
