//! Plain-text run summary for the terminal.

use chrono::{DateTime, Local};

use crate::domain::TeamResult;

/// One block per team, highest scorers first, top-11 players marked with `*`.
pub fn format_run_summary(results: &[TeamResult], generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("=== IPL Fantasy Team Points ===\n");
    out.push_str(&format!("Generated: {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")));

    for result in results {
        out.push_str(&format!(
            "\n{} (Total: {} pts, {} players found):\n",
            result.team_name,
            result.total_points,
            result.players.len()
        ));
        for (idx, p) in result.players.iter().enumerate() {
            let marker = if result.in_top(idx) { "*" } else { " " };
            out.push_str(
                format!(
                    "{marker} {:>2}. {:<24} {:<6} {:>6}\n",
                    idx + 1,
                    truncate(&p.name, 24),
                    truncate(&p.ipl_team, 6),
                    p.points
                )
                .trim_end(),
            );
            out.push('\n');
        }
        if !result.missing.is_empty() {
            out.push_str(&format!("  Not found: {}\n", result.missing.join(", ")));
        }
    }

    if let Some(leader) = leader(results) {
        out.push_str(&format!("\nLeader: {} ({} pts)\n", leader.team_name, leader.total_points));
    }

    out
}

/// Highest total; the earliest team wins a tie.
fn leader(results: &[TeamResult]) -> Option<&TeamResult> {
    results
        .iter()
        .fold(None, |best: Option<&TeamResult>, r| match best {
            Some(b) if b.total_points >= r.total_points => Some(b),
            _ => Some(r),
        })
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
