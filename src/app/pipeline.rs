//! Shared scoring pipeline used by both the live (`run`) and offline (`score`)
//! commands.
//!
//! session → per-team reload + table wait → lookups → aggregation → layout →
//! workbook (+ optional JSON)
//!
//! Nothing is written until every team has been scored, so a session failure
//! midway leaves the previous report in place.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::domain::{Rosters, RunConfig, TeamResult};
use crate::error::AppError;
use crate::report::{ReportLayout, build_report};
use crate::score::{aggregate, find_player};
use crate::session::PlayerSession;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<TeamResult>,
    pub layout: ReportLayout,
    pub generated_at: DateTime<Local>,
}

/// Score every roster against the session, one team at a time.
///
/// The page is reloaded and the table awaited before each team so every
/// roster is scored against a freshly rendered table.
pub fn score_teams(
    session: &mut dyn PlayerSession,
    rosters: &Rosters,
    table_timeout: Duration,
) -> Result<Vec<TeamResult>, AppError> {
    let mut results = Vec::with_capacity(rosters.len());

    for roster in rosters.teams() {
        log::info!("Processing {}...", roster.name);
        session.reload()?;
        session.wait_for_table(table_timeout)?;
        let rows = session.current_player_rows()?;
        log::debug!("{}: {} rows on page", roster.name, rows.len());

        let result = aggregate(roster, |name| find_player(&rows, name));
        log::info!(
            "{}: {}/{} players found, {} missing, top-11 total {}",
            result.team_name,
            result.players.len(),
            roster.players.len(),
            result.missing.len(),
            result.total_points
        );
        results.push(result);
    }

    Ok(results)
}

/// Score all teams, then write the spreadsheet (and JSON export if configured).
pub fn run_report(
    session: &mut dyn PlayerSession,
    rosters: &Rosters,
    config: &RunConfig,
) -> Result<RunOutput, AppError> {
    let results = score_teams(session, rosters, config.table_timeout)?;
    let layout = build_report(&results);
    let generated_at = Local::now();

    crate::io::write_report_xlsx(&config.output, &layout)?;
    log::info!("Data saved to {}", display_path(&config.output));

    if let Some(path) = &config.export_json {
        crate::io::write_results_json(path, &results, generated_at)?;
        log::info!("Results exported to {}", display_path(path));
    }

    Ok(RunOutput {
        results,
        layout,
        generated_at,
    })
}

fn display_path(path: &std::path::Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
