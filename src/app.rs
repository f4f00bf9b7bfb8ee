//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - resolves rosters (built-in or `--rosters` file)
//! - opens a session (live browser login or saved page)
//! - runs the scoring pipeline and prints the summary

use std::io::Write;
use std::path::Path;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use crate::cli::{Command, RosterArgs, RunArgs, ScoreArgs};
use crate::domain::{Rosters, RunConfig};
use crate::error::AppError;
use crate::session::{ChromeOptions, ChromeSession, ConsolePrompt, EnvEmail, PlayerSession, StaticPage};

pub mod pipeline;

/// Entry point for the `tally` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    // `tally` with no subcommand (or only flags) behaves like `tally run ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Score(args) => handle_score(args),
        Command::Rosters(args) => handle_rosters(args),
    }
}

/// `<timestamp> - <LEVEL> - <message>` on stderr; `RUST_LOG` overrides the
/// default `info` filter.
fn init_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} - {} - {}", buf.timestamp(), record.level(), record.args()))
        .try_init();
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    println!("IPL Fantasy Team Points Tracker");
    println!("{}", "=".repeat(40));

    let rosters = resolve_rosters(args.common.rosters.as_deref())?;
    let config = run_config_from_args(&args);

    let mut credentials = EnvEmail::from_env(ConsolePrompt::stdio());
    let mut session = ChromeSession::authenticate(&chrome_options(&config), &mut credentials)?;

    let outcome = report_and_summarize(&mut session, &rosters, &config);
    println!("\nSession ended.");
    outcome
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let rosters = resolve_rosters(args.common.rosters.as_deref())?;
    let config = RunConfig {
        output: args.common.output.clone(),
        export_json: args.common.export_json.clone(),
        summary: !args.common.no_summary,
        ..RunConfig::default()
    };

    log::info!("Scoring against saved page {}", args.html.display());
    let mut session = StaticPage::from_file(&args.html)?;
    report_and_summarize(&mut session, &rosters, &config)
}

fn handle_rosters(args: RosterArgs) -> Result<(), AppError> {
    let rosters = resolve_rosters(args.rosters.as_deref())?;

    if let Some(path) = &args.export {
        crate::io::write_rosters_json(path, &rosters)?;
        println!("Wrote {} rosters to {}", rosters.len(), path.display());
        return Ok(());
    }

    for team in rosters.teams() {
        println!("{} ({} players)", team.name, team.players.len());
        for (idx, player) in team.players.iter().enumerate() {
            println!("{:>4}. {player}", idx + 1);
        }
    }
    Ok(())
}

fn report_and_summarize(
    session: &mut dyn PlayerSession,
    rosters: &Rosters,
    config: &RunConfig,
) -> Result<(), AppError> {
    match pipeline::run_report(session, rosters, config) {
        Ok(run) => {
            println!("\nSuccessfully saved data with team totals!");
            if config.summary {
                println!("{}", crate::report::format_run_summary(&run.results, run.generated_at));
            }
            Ok(())
        }
        Err(err) => {
            log::error!("{err}");
            println!("\nFailed to save data. Check log for details.");
            Err(err)
        }
    }
}

/// Built-in rosters unless a roster file was given.
pub fn resolve_rosters(path: Option<&Path>) -> Result<Rosters, AppError> {
    match path {
        Some(path) => {
            let rosters = crate::io::read_rosters_json(path)?;
            log::info!("Loaded {} rosters from {}", rosters.len(), path.display());
            Ok(rosters)
        }
        None => Ok(crate::data::default_rosters()),
    }
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        output: args.common.output.clone(),
        export_json: args.common.export_json.clone(),
        table_timeout: std::time::Duration::from_secs(args.table_timeout),
        login_timeout: std::time::Duration::from_secs(args.login_timeout),
        show_browser: args.show_browser,
        summary: !args.common.no_summary,
    }
}

fn chrome_options(config: &RunConfig) -> ChromeOptions {
    ChromeOptions {
        headless: !config.show_browser,
        login_timeout: config.login_timeout,
    }
}

/// Insert `run` when argv has no subcommand, so bare `tally` and
/// `tally --output x.xlsx` scrape live. Top-level help and version flags pass
/// through, as does any other positional (clap reports unknown ones).
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let needs_run = match argv.get(1).map(String::as_str) {
        None => true,
        Some("-h" | "--help" | "-V" | "--version") => false,
        Some(first) => first.starts_with('-'),
    };
    if needs_run {
        argv.insert(argv.len().min(1), "run".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs() {
        assert_eq!(rewrite_args(argv(&["tally"])), argv(&["tally", "run"]));
    }

    #[test]
    fn leading_flags_go_to_run() {
        assert_eq!(
            rewrite_args(argv(&["tally", "--output", "x.xlsx"])),
            argv(&["tally", "run", "--output", "x.xlsx"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for args in [
            argv(&["tally", "score", "--html", "p.html"]),
            argv(&["tally", "rosters"]),
            argv(&["tally", "--help"]),
            argv(&["tally", "-V"]),
        ] {
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }

    #[test]
    fn run_flags_map_to_config() {
        let cli = crate::cli::Cli::parse_from(argv(&[
            "tally",
            "run",
            "--output",
            "out/league.xlsx",
            "--table-timeout",
            "30",
            "--show-browser",
            "--no-summary",
        ]));
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        let config = run_config_from_args(&args);
        assert_eq!(config.output, Path::new("out/league.xlsx"));
        assert_eq!(config.table_timeout.as_secs(), 30);
        assert_eq!(config.login_timeout.as_secs(), 20);
        assert!(config.show_browser);
        assert!(!config.summary);
        assert!(config.export_json.is_none());

        let options = chrome_options(&config);
        assert!(!options.headless);
        assert_eq!(options.login_timeout.as_secs(), 20);
    }

    #[test]
    fn browser_is_headless_unless_asked() {
        let options = chrome_options(&RunConfig::default());
        assert!(options.headless);
        assert_eq!(options.login_timeout, RunConfig::default().login_timeout);
    }

    #[test]
    fn unknown_positional_is_left_for_clap() {
        assert_eq!(rewrite_args(argv(&["tally", "bogus"])), argv(&["tally", "bogus"]));
        assert_eq!(rewrite_args(argv(&["tally", "help", "run"])), argv(&["tally", "help", "run"]));
    }

    #[test]
    fn default_rosters_without_file() {
        assert_eq!(resolve_rosters(None).unwrap().len(), 6);
    }
}
