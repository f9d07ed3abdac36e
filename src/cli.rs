use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kalends_calendar::DateBound;

/// Kalends month-view date picker.
#[derive(Parser)]
#[command(
    name = "kalends",
    version,
    about = "Month-view date picker for the terminal"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a single month.
    Show(ShowArgs),
    /// Apply a sequence of picker actions, then render the result.
    Script(ScriptArgs),
}

/// Options shared by every subcommand that builds a picker.
#[derive(clap::Args, Debug, Default)]
pub struct PickerArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial view date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<DateBound>,

    /// Date to select before rendering (YYYY-MM-DD).
    #[arg(short, long)]
    pub select: Option<DateBound>,

    /// Override the earliest selectable date from config.
    #[arg(long)]
    pub min: Option<DateBound>,

    /// Override the latest selectable date from config.
    #[arg(long)]
    pub max: Option<DateBound>,

    /// Print a JSON snapshot instead of the text calendar.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub picker: PickerArgs,
}

/// Arguments for the `script` subcommand.
#[derive(clap::Args)]
pub struct ScriptArgs {
    #[command(flatten)]
    pub picker: PickerArgs,

    /// Print every published event to stderr.
    #[arg(long)]
    pub trace_events: bool,

    /// Actions in order: prev, next, show=D, select=D, clamp=D, year=Y, month=M (1-12).
    #[arg(required = true, value_name = "ACTION")]
    pub actions: Vec<String>,
}
