//! Player-table extraction from rendered stats-page HTML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use crate::domain::RenderedRow;
use crate::error::AppError;
use crate::session::PlayerSession;

/// Present once the logged-in stats page has rendered its table shell.
pub const TABLE_READY_SELECTOR: &str = "li > div.m11c-tbl";
/// Present once the table body (the player rows) has rendered.
pub const TABLE_BODY_SELECTOR: &str = "li > div.m11c-tbl > div.m11c-tbl__body";

const ROW_SELECTOR: &str = "li > div.m11c-tbl > div.m11c-tbl__body > div.m11c-tbl__row";
const NAME_SELECTOR: &str = ".m11c-tbl__cell--name .m11c-plyrSel__name span";
const TEAM_SELECTOR: &str = ".m11c-tbl__cell--thumb .m11c-plyrSel__team span";
const POINTS_SELECTOR: &str = ".m11c-tbl__cell--amt span";

struct RowSelectors {
    row: Selector,
    name: Selector,
    team: Selector,
    points: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self, AppError> {
        Ok(Self {
            row: parse_selector(ROW_SELECTOR)?,
            name: parse_selector(NAME_SELECTOR)?,
            team: parse_selector(TEAM_SELECTOR)?,
            points: parse_selector(POINTS_SELECTOR)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::session(format!("Invalid selector '{css}': {e}")))
}

/// Extract every player row from a stats-page document, in page order.
///
/// Rows without a name cell are dropped; missing team/points cells are kept
/// as `None` so lookups can decide what to do with them.
pub fn extract_player_rows(html: &str) -> Result<Vec<RenderedRow>, AppError> {
    let selectors = RowSelectors::new()?;
    let document = Html::parse_document(html);

    let mut rows = Vec::new();
    for row in document.select(&selectors.row) {
        let Some(name) = first_text(row, &selectors.name) else {
            continue;
        };
        rows.push(RenderedRow {
            name,
            team: first_text(row, &selectors.team),
            points: first_text(row, &selectors.points),
        });
    }
    Ok(rows)
}

/// Whether `html` contains at least one element matching `css`.
pub fn has_element(html: &str, css: &str) -> Result<bool, AppError> {
    let selector = parse_selector(css)?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).next().is_some())
}

fn first_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// A stats page captured as HTML (e.g. "Save page as…" from a logged-in browser).
///
/// Reloading is a no-op: the snapshot never changes.
#[derive(Debug, Clone)]
pub struct StaticPage {
    html: String,
}

impl StaticPage {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let html = fs::read_to_string(path).map_err(|e| {
            AppError::session(format!("Failed to read page snapshot '{}': {e}", path.display()))
        })?;
        Ok(Self::from_html(html))
    }
}

impl PlayerSession for StaticPage {
    fn reload(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    fn wait_for_table(&mut self, _timeout: Duration) -> Result<(), AppError> {
        if has_element(&self.html, TABLE_BODY_SELECTOR)? {
            Ok(())
        } else {
            Err(AppError::session(
                "Player table not found in page snapshot. Save the page after the stats table has loaded.",
            ))
        }
    }

    fn current_player_rows(&mut self) -> Result<Vec<RenderedRow>, AppError> {
        extract_player_rows(&self.html)
    }
}

/// Stats-page markup for tests: one `m11c-tbl__row` per `(name, team, points)`.
#[cfg(test)]
pub(crate) fn fixture_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::new();
    for (name, team, points) in rows {
        body.push_str(&format!(
            r#"<div class="m11c-tbl__row">
                 <div class="m11c-tbl__cell m11c-tbl__cell--thumb"><div class="m11c-plyrSel__team"><span>{team}</span></div></div>
                 <div class="m11c-tbl__cell m11c-tbl__cell--name"><div class="m11c-plyrSel__name"><span> {name} </span></div></div>
                 <div class="m11c-tbl__cell m11c-tbl__cell--amt"><span>{points}</span></div>
               </div>"#
        ));
    }
    format!(
        r#"<html><body><ul><li><div class="m11c-tbl"><div class="m11c-tbl__body">{body}</div></div></li></ul></body></html>"#
    )
}
