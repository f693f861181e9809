//! CLI settings (`~/.config/bgg-objects/settings.toml`).
//!
//! Resolution priority for each value:
//!
//! 1. Command-line flag
//! 2. Environment (`BGG_OUTPUT_FORMAT`)
//! 3. `settings.toml`
//! 4. Built-in default

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable overriding `output.format`.
pub(crate) const FORMAT_ENV: &str = "BGG_OUTPUT_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    pub format: OutputFormat,
    /// Skip malformed records in a batch instead of aborting.
    pub skip_invalid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub output: OutputSettings,
}

/// Canonical path to the settings file: `~/.config/bgg-objects/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bgg-objects").join("settings.toml")
}

impl Settings {
    /// Read settings from `path`. A missing or unreadable file yields defaults.
    pub(crate) fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply an environment override for the output format. Unknown values
    /// are ignored with a warning.
    pub(crate) fn with_env_format(mut self, value: Option<String>) -> Self {
        if let Some(raw) = value {
            match raw.parse() {
                Ok(format) => self.output.format = format,
                Err(e) => log::warn!("Ignoring {FORMAT_ENV}: {e}"),
            }
        }
        self
    }

    /// Apply command-line flags. Flags only ever switch behavior on.
    pub(crate) fn with_flags(mut self, json: bool, skip_invalid: bool) -> Self {
        if json {
            self.output.format = OutputFormat::Json;
        }
        if skip_invalid {
            self.output.skip_invalid = true;
        }
        self
    }

    /// Effective settings from the settings file and the environment.
    pub(crate) fn resolve() -> Self {
        Self::load_from(&settings_path()).with_env_format(std::env::var(FORMAT_ENV).ok())
    }

    pub(crate) fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
