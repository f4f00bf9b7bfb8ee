//! JSON export of a run's team results.

use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::{TOP_PLAYERS, TeamResult};
use crate::error::AppError;
use crate::io::write_atomic;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub top_players: usize,
    pub teams: Vec<TeamResult>,
}

impl ResultsFile {
    pub fn new(results: &[TeamResult], generated_at: DateTime<Local>) -> Self {
        Self {
            tool: "tally".to_string(),
            generated_at,
            top_players: TOP_PLAYERS,
            teams: results.to_vec(),
        }
    }
}

pub fn write_results_json(path: &Path, results: &[TeamResult], generated_at: DateTime<Local>) -> Result<(), AppError> {
    let file = ResultsFile::new(results, generated_at);
    let bytes = serde_json::to_vec_pretty(&file)
        .map_err(|e| AppError::report_write(format!("Failed to encode results JSON: {e}")))?;
    write_atomic(path, &bytes)
}
