//! Read/write roster JSON files.
//!
//! Format: an array of teams, kept in file order.
//!
//! ```json
//! [{ "name": "Team A", "players": ["Virat Kohli", "Rohit Sharma"] }]
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::domain::{Rosters, TeamRoster};
use crate::error::AppError;

/// Read a roster file. Team names must be unique and non-empty.
pub fn read_rosters_json(path: &Path) -> Result<Rosters, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open roster JSON '{}': {e}", path.display())))?;
    let teams: Vec<TeamRoster> = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid roster JSON '{}': {e}", path.display())))?;
    validate(teams)
}

/// Write `rosters` as a roster file (e.g. as a starting point for editing).
pub fn write_rosters_json(path: &Path, rosters: &Rosters) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::report_write(format!("Failed to create roster JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(BufWriter::new(file), rosters.teams())
        .map_err(|e| AppError::report_write(format!("Failed to write roster JSON: {e}")))
}

fn validate(teams: Vec<TeamRoster>) -> Result<Rosters, AppError> {
    for (idx, team) in teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            return Err(AppError::config(format!("Roster #{} has an empty team name.", idx + 1)));
        }
        if teams[..idx].iter().any(|t| t.name == team.name) {
            return Err(AppError::config(format!("Duplicate team name '{}' in rosters.", team.name)));
        }
        if let Some(blank) = team.players.iter().position(|p| p.trim().is_empty()) {
            // An empty name would match every row on the page.
            return Err(AppError::config(format!(
                "Team '{}' has an empty player name at position {}.",
                team.name,
                blank + 1
            )));
        }
    }
    Ok(Rosters::new(teams))
}
