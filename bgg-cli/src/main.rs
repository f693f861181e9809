//! bgg CLI
//!
//! Debugging tool that builds board game objects from already-decoded JSON
//! records and prints them.

mod commands;
mod error;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::config::{run_config_path, run_config_show};
use crate::commands::show::{run_collection, run_show};
use crate::settings::Settings;

pub(crate) use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bgg")]
#[command(about = "Build and inspect board game records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by the commands that print objects.
#[derive(Args, Clone)]
struct OutputArgs {
    /// Print objects as JSON instead of the text dump
    #[arg(long)]
    json: bool,

    /// Skip records that fail to build instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build games from a JSON file of full game records
    Show {
        /// File holding one game record or an array of them
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build collection entries from a JSON file of collection records
    Collection {
        /// File holding one collection record or an array of them
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Inspect CLI settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, output } => {
            let settings = Settings::resolve().with_flags(output.json, output.skip_invalid);
            run_show(&file, &settings.output)
        }
        Commands::Collection { file, output } => {
            let settings = Settings::resolve().with_flags(output.json, output.skip_invalid);
            run_collection(&file, &settings.output)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(),
            ConfigAction::Path => run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{} {}", "Error:".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}
