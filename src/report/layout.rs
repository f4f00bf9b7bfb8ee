//! Spreadsheet layout for a set of team results.

use crate::domain::{PlayerRecord, TeamResult};

/// Header cells of each team's table, left to right.
pub const COLUMN_HEADERS: [&str; 4] = ["Player Name", "IPL Team", "Points", "In Top 11"];
/// Label of the per-team total row.
pub const TOTAL_LABEL: &str = "Total Points (Top 11 Players)";
/// Column widths in Excel character units, matching `COLUMN_HEADERS`.
pub const COLUMN_WIDTHS: [f64; 4] = [25.0, 20.0, 15.0, 12.0];

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// Team name across all four columns.
    Banner { team: String },
    /// The four column headers.
    Header,
    /// A found player; `rank` is 1-based within the team.
    Player { rank: usize, record: PlayerRecord, in_top: bool },
    /// Label across the first three columns, total in the fourth.
    Total { points: i64 },
    /// Separator before the next team.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportLayout {
    pub rows: Vec<ReportRow>,
}

impl ReportLayout {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lay out all teams in input order.
///
/// Each team contributes a banner, a header row, one row per found player in
/// ranked order, a total row and a blank separator.
pub fn build_report(results: &[TeamResult]) -> ReportLayout {
    let capacity = results.iter().map(|r| r.players.len() + 4).sum();
    let mut rows = Vec::with_capacity(capacity);

    for result in results {
        rows.push(ReportRow::Banner {
            team: result.team_name.clone(),
        });
        rows.push(ReportRow::Header);
        for (idx, record) in result.players.iter().enumerate() {
            rows.push(ReportRow::Player {
                rank: idx + 1,
                record: record.clone(),
                in_top: result.in_top(idx),
            });
        }
        rows.push(ReportRow::Total {
            points: result.total_points,
        });
        rows.push(ReportRow::Blank);
    }

    ReportLayout { rows }
}

/// Text of the "In Top 11" cell.
pub fn top_flag(in_top: bool) -> &'static str {
    if in_top { "Yes" } else { "No" }
}
