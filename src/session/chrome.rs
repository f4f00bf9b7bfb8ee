//! Live session: headless Chrome logged into the fantasy site.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::domain::RenderedRow;
use crate::error::AppError;
use crate::session::credentials::{CredentialField, CredentialProvider};
use crate::session::page::{TABLE_BODY_SELECTOR, TABLE_READY_SELECTOR, extract_player_rows};
use crate::session::PlayerSession;

const LOGIN_URL: &str = "https://fantasy.iplt20.com/my11c/static/login.html";
const STATS_URL: &str = "https://fantasy.iplt20.com/classic/stats";

const EMAIL_INPUT: &str = "#email_input";
const SEND_CODE_BUTTON: &str = "#registerCTA";
const CODE_INPUT: &str = "#otpInputField";
const VERIFY_BUTTON: &str = "#verifyOtp";

const URL_POLL_INTERVAL: Duration = Duration::from_millis(250);
const BROWSER_IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Browser launch and login-wait settings.
#[derive(Debug, Clone)]
pub struct ChromeOptions {
    pub headless: bool,
    /// Bound on each wait during login (form fields, redirect, stats table).
    pub login_timeout: Duration,
}

pub struct ChromeSession {
    // Dropping the browser closes the tab, so it lives as long as the session.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    /// Launch Chrome, log in with `credentials`, and land on the stats page.
    pub fn authenticate(
        options: &ChromeOptions,
        credentials: &mut dyn CredentialProvider,
    ) -> Result<Self, AppError> {
        log::info!("Initializing browser...");
        let launch = LaunchOptions::default_builder()
            .headless(options.headless)
            .idle_browser_timeout(BROWSER_IDLE_TIMEOUT)
            .build()
            .map_err(|e| AppError::session(format!("Invalid browser options: {e}")))?;
        let browser = Browser::new(launch)
            .map_err(|e| AppError::session(format!("Failed to initialize browser: {e}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| AppError::session(format!("Failed to open browser tab: {e}")))?;

        let session = Self { _browser: browser, tab };
        session.login(options, credentials)?;
        Ok(session)
    }

    fn login(&self, options: &ChromeOptions, credentials: &mut dyn CredentialProvider) -> Result<(), AppError> {
        self.tab
            .navigate_to(LOGIN_URL)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| AppError::session(format!("Login failed: could not open {LOGIN_URL}: {e}")))?;

        let email = credentials.request(CredentialField::Email)?;
        self.fill_and_submit(EMAIL_INPUT, &email, SEND_CODE_BUTTON, options.login_timeout)?;
        log::info!("OTP sent to your email");

        let code = credentials.request(CredentialField::OneTimeCode)?;
        self.fill_and_submit(CODE_INPUT, &code, VERIFY_BUTTON, options.login_timeout)?;

        self.wait_for_url("classic", options.login_timeout)?;
        log::info!("Login successful!");

        if !self.tab.get_url().contains("classic/stats") {
            log::info!("Redirecting to stats page...");
            self.tab
                .navigate_to(STATS_URL)
                .and_then(|tab| tab.wait_until_navigated())
                .map_err(|e| AppError::session(format!("Failed to open {STATS_URL}: {e}")))?;
        }

        self.tab
            .wait_for_element_with_custom_timeout(TABLE_READY_SELECTOR, options.login_timeout)
            .map_err(|e| AppError::session(format!("Stats table did not appear after login: {e}")))?;
        Ok(())
    }

    fn fill_and_submit(&self, input: &str, value: &str, button: &str, timeout: Duration) -> Result<(), AppError> {
        self.tab
            .wait_for_element_with_custom_timeout(input, timeout)
            .and_then(|field| field.type_into(value).map(|_| ()))
            .map_err(|e| AppError::session(format!("Login failed: could not fill '{input}': {e}")))?;
        self.tab
            .wait_for_element_with_custom_timeout(button, timeout)
            .and_then(|el| el.click().map(|_| ()))
            .map_err(|e| AppError::session(format!("Login failed: could not click '{button}': {e}")))?;
        Ok(())
    }

    fn wait_for_url(&self, fragment: &str, timeout: Duration) -> Result<(), AppError> {
        let started = Instant::now();
        loop {
            if self.tab.get_url().contains(fragment) {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(AppError::session(format!(
                    "Login failed: no redirect to a '{fragment}' page within {}s (currently at {}).",
                    timeout.as_secs(),
                    self.tab.get_url()
                )));
            }
            thread::sleep(URL_POLL_INTERVAL);
        }
    }
}

impl PlayerSession for ChromeSession {
    fn reload(&mut self) -> Result<(), AppError> {
        self.tab
            .reload(false, None)
            .and_then(|tab| tab.wait_until_navigated())
            .map(|_| ())
            .map_err(|e| AppError::session(format!("Failed to reload stats page: {e}")))
    }

    fn wait_for_table(&mut self, timeout: Duration) -> Result<(), AppError> {
        self.tab
            .wait_for_element_with_custom_timeout(TABLE_BODY_SELECTOR, timeout)
            .map(|_| ())
            .map_err(|e| {
                AppError::session(format!(
                    "Player table not present within {}s: {e}",
                    timeout.as_secs()
                ))
            })
    }

    fn current_player_rows(&mut self) -> Result<Vec<RenderedRow>, AppError> {
        let html = self
            .tab
            .get_content()
            .map_err(|e| AppError::session(format!("Failed to read stats page: {e}")))?;
        extract_player_rows(&html)
    }
}
