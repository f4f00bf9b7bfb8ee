//! Access to the rendered stats page.
//!
//! Scoring code only sees the [`PlayerSession`] capability, so the same
//! pipeline runs against a live browser (`chrome`) or a saved HTML snapshot
//! (`page`).
//!
//! - `page`: CSS-selector extraction of player rows + the `StaticPage` session
//! - `chrome`: headless Chrome login flow and live session
//! - `credentials`: email / one-time-code providers for the login flow

use std::time::Duration;

use crate::domain::RenderedRow;
use crate::error::AppError;

pub mod chrome;
pub mod credentials;
pub mod page;

pub use chrome::{ChromeOptions, ChromeSession};
pub use credentials::{ConsolePrompt, CredentialField, CredentialProvider, EnvEmail};
pub use page::{StaticPage, extract_player_rows};

/// An authenticated handle positioned on the stats page.
pub trait PlayerSession {
    /// Reload the stats page.
    fn reload(&mut self) -> Result<(), AppError>;

    /// Block until the player table is present, or fail once `timeout` passes.
    fn wait_for_table(&mut self, timeout: Duration) -> Result<(), AppError>;

    /// Rows of the player table as currently rendered, in page order.
    fn current_player_rows(&mut self) -> Result<Vec<RenderedRow>, AppError>;
}
