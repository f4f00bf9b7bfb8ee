//! Top-11 team aggregation.

use crate::domain::{PlayerRecord, TOP_PLAYERS, TeamResult, TeamRoster};

/// Score one roster.
///
/// `lookup` is called once per roster name, in roster order; names it cannot
/// resolve are left out of `players` and listed in `missing`. The found records are sorted by points descending
/// with a stable sort, so tied players stay in roster order, which decides who
/// lands inside the top 11 when a tie straddles the cut.
pub fn aggregate<F>(roster: &TeamRoster, mut lookup: F) -> TeamResult
where
    F: FnMut(&str) -> Option<PlayerRecord>,
{
    let mut players: Vec<PlayerRecord> = Vec::with_capacity(roster.players.len());
    let mut missing = Vec::new();
    for name in &roster.players {
        match lookup(name) {
            Some(record) => players.push(record),
            None => {
                log::warn!("{}: omitting '{name}', not on the page", roster.name);
                missing.push(name.clone());
            }
        }
    }

    players.sort_by(|a, b| b.points.cmp(&a.points));
    let total_points = top_total(&players);

    TeamResult {
        team_name: roster.name.clone(),
        players,
        total_points,
        missing,
    }
}

/// Sum of the first [`TOP_PLAYERS`] records (all of them if fewer).
///
/// Saturates at the `i64` bounds instead of overflowing on absurd page values.
pub fn top_total(sorted: &[PlayerRecord]) -> i64 {
    sorted
        .iter()
        .take(TOP_PLAYERS)
        .fold(0i64, |acc, p| acc.saturating_add(p.points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, points: i64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            ipl_team: "XI".to_string(),
            points,
        }
    }

    fn lookup_in(page: &[PlayerRecord]) -> impl FnMut(&str) -> Option<PlayerRecord> + '_ {
        move |name| page.iter().find(|p| p.name == name).cloned()
    }

    #[test]
    fn empty_roster_scores_zero() {
        let roster = TeamRoster::new("Empty", Vec::<String>::new());
        let result = aggregate(&roster, |_| None);
        assert_eq!(result.team_name, "Empty");
        assert!(result.players.is_empty());
        assert_eq!(result.total_points, 0);
    }

    #[test]
    fn all_missing_scores_zero() {
        let roster = TeamRoster::new("Ghosts", ["A", "B"]);
        let result = aggregate(&roster, |_| None);
        assert!(result.players.is_empty());
        assert_eq!(result.total_points, 0);
        assert_eq!(result.missing, vec!["A", "B"]);
    }

    #[test]
    fn missing_players_are_omitted() {
        let page = vec![record("A", 10), record("C", 30)];
        let roster = TeamRoster::new("T", ["A", "B", "C"]);
        let result = aggregate(&roster, lookup_in(&page));

        assert_eq!(result.players.len(), 2);
        assert_eq!(result.players[0].name, "C");
        assert_eq!(result.players[1].name, "A");
        assert_eq!(result.total_points, 40);
        assert_eq!(result.missing, vec!["B"]);
    }

    #[test]
    fn huge_points_saturate_instead_of_overflowing() {
        let page = vec![record("Big", i64::MAX), record("Small", 1), record("Bigger", i64::MAX)];
        let result = aggregate(&TeamRoster::new("T", ["Big", "Small", "Bigger"]), lookup_in(&page));
        assert_eq!(result.total_points, i64::MAX);

        let negative = vec![record("Low", i64::MIN), record("Lower", -1)];
        assert_eq!(top_total(&negative), i64::MIN);
    }

    #[test]
    fn huge_points_from_page_text_do_not_abort() {
        let rows = vec![
            crate::domain::RenderedRow {
                name: "Max Out".to_string(),
                team: Some("GT".to_string()),
                points: Some("9,223,372,036,854,775,807".to_string()),
            },
            crate::domain::RenderedRow {
                name: "One Run".to_string(),
                team: Some("GT".to_string()),
                points: Some("1".to_string()),
            },
        ];
        let roster = TeamRoster::new("T", ["Max Out", "One Run"]);
        let result = aggregate(&roster, |name| crate::score::find_player(&rows, name));
        assert_eq!(result.players[0].points, i64::MAX);
        assert_eq!(result.total_points, i64::MAX);
    }

    #[test]
    fn only_top_eleven_count() {
        let page: Vec<PlayerRecord> = (1..=15).map(|i| record(&format!("P{i}"), i * 10)).collect();
        let names: Vec<String> = page.iter().map(|p| p.name.clone()).collect();
        let result = aggregate(&TeamRoster::new("T", names), lookup_in(&page));

        assert_eq!(result.players.len(), 15);
        let expected: i64 = (5..=15).map(|i| i * 10).sum();
        assert_eq!(result.total_points, expected);
        assert_eq!(result.total_points, top_total(&result.players));
        assert!(result.players.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn eleven_or_fewer_all_count() {
        let page: Vec<PlayerRecord> = (1..=11).map(|i| record(&format!("P{i}"), i)).collect();
        let names: Vec<String> = page.iter().map(|p| p.name.clone()).collect();
        let result = aggregate(&TeamRoster::new("T", names), lookup_in(&page));
        assert_eq!(result.total_points, 66);
        assert!((0..11).all(|i| result.in_top(i)));
    }

    #[test]
    fn ties_keep_roster_order_across_the_cut() {
        // Ten clear leaders, then three players tied on 5 points for the last slot.
        let mut page: Vec<PlayerRecord> = (1..=10).map(|i| record(&format!("Lead{i}"), 100 + i)).collect();
        page.extend([record("TieX", 5), record("TieY", 5), record("TieZ", 5)]);

        let roster = TeamRoster::new(
            "T",
            ["TieY", "Lead1", "TieZ", "Lead2", "Lead3", "Lead4", "Lead5", "Lead6", "Lead7", "Lead8", "Lead9", "Lead10", "TieX"],
        );
        let result = aggregate(&roster, lookup_in(&page));

        let tail: Vec<&str> = result.players[10..].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(tail, vec!["TieY", "TieZ", "TieX"]);
        assert!(result.in_top(10));
        assert!(!result.in_top(11));
        let leaders: i64 = (1..=10).map(|i| 100 + i).sum();
        assert_eq!(result.total_points, leaders + 5);
    }

    #[test]
    fn lookups_follow_roster_order() {
        let roster = TeamRoster::new("T", ["C", "A", "B"]);
        let mut seen = Vec::new();
        let _ = aggregate(&roster, |name| {
            seen.push(name.to_string());
            None
        });
        assert_eq!(seen, vec!["C", "A", "B"]);
    }
}
