//! Command-line parsing for the fantasy points tracker.
//!
//! Argument parsing and command dispatch stay separate from the scraping and
//! scoring code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::io::DEFAULT_OUTPUT_FILE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "IPL fantasy team points tracker (top-11 scoring)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in to the fantasy site, score every roster, and write the report.
    ///
    /// The login email comes from IPL_FANTASY_EMAIL (or `.env`) when set,
    /// otherwise it is prompted for; the one-time code is always prompted for.
    Run(RunArgs),
    /// Score rosters against a saved stats-page HTML file instead of a live login.
    Score(ScoreArgs),
    /// Print the active rosters, or export them as a JSON roster file.
    Rosters(RosterArgs),
}

/// Options shared by every command that produces a report.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Roster JSON file to use instead of the built-in league rosters.
    #[arg(long, value_name = "JSON")]
    pub rosters: Option<PathBuf>,

    /// Spreadsheet to write (overwritten every run).
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also export the team results as JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Skip the terminal summary after writing the report.
    #[arg(long)]
    pub no_summary: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: ReportArgs,

    /// Seconds to wait for the player table after each page reload.
    #[arg(long, default_value_t = 15)]
    pub table_timeout: u64,

    /// Seconds to wait at each step of the login flow.
    #[arg(long, default_value_t = 20)]
    pub login_timeout: u64,

    /// Show the browser window instead of running headless.
    #[arg(long)]
    pub show_browser: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub common: ReportArgs,

    /// Saved HTML of the stats page, captured after the player table loaded.
    #[arg(long, value_name = "HTML")]
    pub html: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct RosterArgs {
    /// Roster JSON file to show instead of the built-in league rosters.
    #[arg(long, value_name = "JSON")]
    pub rosters: Option<PathBuf>,

    /// Write the rosters to this JSON file instead of printing them.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
