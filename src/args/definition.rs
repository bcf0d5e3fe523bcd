//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// flightdesk - A terminal admin console for flight schedules
#[derive(Parser, Debug, Default)]
#[command(name = "flightdesk")]
#[command(version)]
#[command(about = "A terminal admin console for browsing, editing and exporting flight schedules", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Load flight records from a JSON file instead of the built-in schedule
    #[arg(long, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Read settings from this file instead of ~/.config/flightdesk/settings.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the filtered and sorted schedule to stdout and exit
    #[arg(short, long)]
    pub print: bool,

    /// Export the filtered and sorted schedule and exit
    #[arg(short, long)]
    pub export: bool,

    /// Keep flights whose number contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub flight: Option<String>,

    /// Keep flights departing from these cities (repeat or comma-separate)
    #[arg(long, value_delimiter = ',')]
    pub origin: Vec<String>,

    /// Keep flights arriving at these cities (repeat or comma-separate)
    #[arg(long, value_delimiter = ',')]
    pub destination: Vec<String>,

    /// Start of the effective-date window (YYYY-MM-DD, excluded unless --inclusive)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the effective-date window (YYYY-MM-DD, excluded unless --inclusive)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Keep flights dated exactly on --from or --to
    #[arg(long)]
    pub inclusive: bool,

    /// Sort by flight_number or effective_date
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending (use with --sort)
    #[arg(long)]
    pub desc: bool,

    /// Export format: csv or json (default from settings)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Directory the export is written to (default from settings)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Whether the run prints or exports instead of opening the TUI.
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.print || self.export
    }
}
