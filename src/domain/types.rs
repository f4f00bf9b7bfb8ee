//! Shared domain types.
//!
//! Records and results are serializable so they can be exported to JSON
//! alongside the spreadsheet report.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of highest-scoring players that count toward a team total.
pub const TOP_PLAYERS: usize = 11;

/// One row of the stats table as rendered on the page.
///
/// Cells are optional because the page occasionally renders a row before its
/// team or points cell is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub name: String,
    pub team: Option<String>,
    pub points: Option<String>,
}

/// A player's fantasy points as scraped from the stats page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub ipl_team: String,
    pub points: i64,
}

/// One fantasy team's ordered list of player display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    pub players: Vec<String>,
}

impl TeamRoster {
    pub fn new<I, S>(name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            players: players.into_iter().map(Into::into).collect(),
        }
    }
}

/// All configured rosters, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rosters {
    teams: Vec<TeamRoster>,
}

impl Rosters {
    pub fn new(teams: Vec<TeamRoster>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[TeamRoster] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Aggregated score for one team.
///
/// `players` holds every player that was found, sorted by points descending
/// (ties keep roster order). `total_points` only counts the first
/// [`TOP_PLAYERS`] of them. `missing` lists roster names with no row on the
/// page, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team_name: String,
    pub players: Vec<PlayerRecord>,
    pub total_points: i64,
    #[serde(default)]
    pub missing: Vec<String>,
}

impl TeamResult {
    /// Whether the player at 0-based `index` of `players` counts toward the total.
    pub fn in_top(&self, index: usize) -> bool {
        index < self.players.len() && index < TOP_PLAYERS
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output: PathBuf,
    pub export_json: Option<PathBuf>,
    /// Bound on waiting for the stats table after each reload.
    pub table_timeout: Duration,
    /// Bound on each wait during the login flow.
    pub login_timeout: Duration,
    pub show_browser: bool,
    pub summary: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::io::DEFAULT_OUTPUT_FILE),
            export_json: None,
            table_timeout: Duration::from_secs(15),
            login_timeout: Duration::from_secs(20),
            show_browser: false,
            summary: true,
        }
    }
}
