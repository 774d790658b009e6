use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// ClassCal: turn a weekly class timetable into calendar events.
#[derive(Debug, Parser)]
#[command(name = "classcal", version, about)]
pub struct Cli {
    /// Config file (TOML or JSON). Without it, environment variables are
    /// tried first, then `classcal.toml`/`config.toml` and friends.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and parse the timetable, printing events and diagnostics as JSON.
    Parse {
        #[command(flatten)]
        input: InputArgs,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Extract, parse and insert every event into the configured calendar.
    Publish {
        #[command(flatten)]
        input: InputArgs,
        /// Parse and list the events without contacting the calendar.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Overrides for the timetable section of the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Timetable document (PDF or plain text).
    pub path: Option<PathBuf>,
    /// Monday of the week to instantiate, as YYYY-MM-DD.
    #[arg(long, value_name = "DATE", value_parser = parse_week_start)]
    pub week_start: Option<NaiveDate>,
}

fn parse_week_start(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
