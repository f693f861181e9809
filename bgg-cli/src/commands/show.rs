use std::path::Path;

use bgg_objects::{BoardGame, CollectionBoardGame};

use crate::CliError;
use crate::commands::{build_all, load_records, render};
use crate::settings::OutputSettings;

/// Build and print the games in a file of full game records.
pub(crate) fn run_show(path: &Path, output: &OutputSettings) -> Result<(), CliError> {
    let records = load_records(path)?;
    let games = build_all(&records, output.skip_invalid, BoardGame::from_value)?;
    log::debug!("Built {} of {} game records", games.len(), records.len());
    render(&games, output)
}

/// Build and print the entries in a file of collection records.
pub(crate) fn run_collection(path: &Path, output: &OutputSettings) -> Result<(), CliError> {
    let records = load_records(path)?;
    let items = build_all(&records, output.skip_invalid, CollectionBoardGame::from_value)?;
    log::debug!("Built {} of {} collection records", items.len(), records.len());
    render(&items, output)
}
