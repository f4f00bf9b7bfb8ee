//! Player lookup against the rendered stats table.

use crate::domain::{PlayerRecord, RenderedRow};

/// Find the first row whose rendered name contains `query`, ignoring case.
///
/// Matching is by substring, not equality, so a short query can hit the wrong
/// player when names overlap ("Rahul" hits "KL Rahul" before "Rahul
/// Tripathi" if that is the page order). Rosters rely on this for partial
/// names like "Jake" or "Porel", so the policy is kept as is.
///
/// A matching row missing its team or points cell is skipped and the scan
/// continues.
pub fn find_player(rows: &[RenderedRow], query: &str) -> Option<PlayerRecord> {
    let needle = query.to_lowercase();

    for row in rows {
        if !row.name.to_lowercase().contains(&needle) {
            continue;
        }
        let (Some(team), Some(points)) = (&row.team, &row.points) else {
            log::debug!("Skipping incomplete row '{}' while looking up '{query}'", row.name);
            continue;
        };
        return Some(PlayerRecord {
            name: row.name.clone(),
            ipl_team: team.clone(),
            points: parse_points(&row.name, points),
        });
    }

    log::warn!("Player '{query}' not found");
    None
}

/// Parse a points cell such as `"1,234"`. Anything unparseable counts as 0.
pub fn parse_points(player: &str, raw: &str) -> i64 {
    let cleaned = raw.replace(',', "");
    match cleaned.trim().parse::<i64>() {
        Ok(points) => points,
        Err(_) => {
            log::warn!("Unreadable points '{raw}' for '{player}', counting as 0");
            0
        }
    }
}
