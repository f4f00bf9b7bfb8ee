//! End-to-end run against a saved stats page: HTML snapshot in, workbook and
//! JSON export out.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use ipl_tally::app::pipeline::run_report;
use ipl_tally::domain::{RunConfig, Rosters, TeamRoster};
use ipl_tally::io::ResultsFile;
use ipl_tally::report::ReportRow;
use ipl_tally::session::StaticPage;

fn stats_page(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(name, team, points)| {
            format!(
                r#"<div class="m11c-tbl__row">
                     <div class="m11c-tbl__cell--thumb"><div class="m11c-plyrSel__team"><span>{team}</span></div></div>
                     <div class="m11c-tbl__cell--name"><div class="m11c-plyrSel__name"><span>{name}</span></div></div>
                     <div class="m11c-tbl__cell--amt"><span>{points}</span></div>
                   </div>"#
            )
        })
        .collect();
    format!(
        r#"<!doctype html><html><body><ul class="stats"><li><div class="m11c-tbl"><div class="m11c-tbl__body">{body}</div></div></li></ul></body></html>"#
    )
}

fn workdir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ipl-tally-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn saved_page_produces_report_and_export() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut page_rows: Vec<(String, String, String)> = (1..=13)
        .map(|i| (format!("Batter {i:02}"), "MI".to_string(), format!("{}", 1400 - i * 100)))
        .collect();
    page_rows.push(("KL Rahul".to_string(), "DC".to_string(), "1,150".to_string()));
    page_rows.push(("Rahul Tripathi".to_string(), "CSK".to_string(), "90".to_string()));
    page_rows.push(("Mystery Man".to_string(), "PBKS".to_string(), "TBD".to_string()));
    let borrowed: Vec<(&str, &str, &str)> = page_rows
        .iter()
        .map(|(a, b, c)| (a.as_str(), b.as_str(), c.as_str()))
        .collect();

    let dir = workdir();
    let html_path = dir.join("stats.html");
    fs::write(&html_path, stats_page(&borrowed)).unwrap();

    let deep: Vec<String> = (1..=13).map(|i| format!("Batter {i:02}")).collect();
    let rosters = Rosters::new(vec![
        TeamRoster::new("Deep Bench", deep),
        TeamRoster::new("Overlap", ["rahul", "Mystery", "Retired Player"]),
    ]);

    let config = RunConfig {
        output: dir.join("report.xlsx"),
        export_json: Some(dir.join("report.json")),
        table_timeout: Duration::from_secs(1),
        ..RunConfig::default()
    };

    let mut session = StaticPage::from_file(&html_path).unwrap();
    let run = run_report(&mut session, &rosters, &config).unwrap();

    // Deep Bench: 1300, 1200, ..., 100; only the first eleven count.
    let deep_bench = &run.results[0];
    assert_eq!(deep_bench.players.len(), 13);
    assert_eq!(deep_bench.total_points, (3..=13).map(|k| k * 100).sum::<i64>());

    // Overlap: "rahul" resolves to the first row containing it; the unknown
    // player is omitted and unreadable points count as zero.
    let overlap = &run.results[1];
    let names: Vec<&str> = overlap.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["KL Rahul", "Mystery Man"]);
    assert_eq!(overlap.total_points, 1150);

    // Banner + header + players + total + blank for each team.
    assert_eq!(run.layout.rows.len(), (13 + 4) + (2 + 4));
    assert!(matches!(run.layout.rows[12], ReportRow::Player { rank: 11, in_top: true, .. }));
    assert!(matches!(run.layout.rows[13], ReportRow::Player { rank: 12, in_top: false, .. }));

    let xlsx = fs::read(&config.output).unwrap();
    assert_eq!(&xlsx[..2], b"PK");

    let json = fs::read_to_string(dir.join("report.json")).unwrap();
    let exported: ResultsFile = serde_json::from_str(&json).unwrap();
    assert_eq!(exported.teams, run.results);
}

#[test]
fn snapshot_without_table_is_a_session_error() {
    let dir = workdir();
    let html_path = dir.join("login-page.html");
    fs::write(&html_path, "<html><body><input id=\"email_input\"></body></html>").unwrap();

    let config = RunConfig {
        output: dir.join("unused.xlsx"),
        ..RunConfig::default()
    };
    let rosters = Rosters::new(vec![TeamRoster::new("Any", ["Someone"])]);

    let mut session = StaticPage::from_file(&html_path).unwrap();
    let err = run_report(&mut session, &rosters, &config).unwrap_err();
    assert_eq!(err.exit_code(), ipl_tally::error::EXIT_SESSION);
    assert!(!config.output.exists());
}
