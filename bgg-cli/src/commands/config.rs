use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{FORMAT_ENV, Settings, settings_path};

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!("{}", "bgg Configuration".if_supports_color(Stdout, |t| t.bold()));
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if let Ok(value) = std::env::var(FORMAT_ENV) {
        log::info!("  {FORMAT_ENV}: {value}");
    }
    log::info!("");

    let settings = Settings::resolve();
    let text = settings
        .to_toml()
        .map_err(|e| CliError::config(format!("Failed to render settings: {e}")))?;
    for line in text.lines() {
        log::info!("  {}", line);
    }

    Ok(())
}
