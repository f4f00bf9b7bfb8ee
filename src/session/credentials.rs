//! Credential providers for the login flow.
//!
//! The site logs in with an email address plus a one-time code mailed to it,
//! so both values have to come from a person (or a test script) at run time.

use std::io::{self, BufRead, Write};

use crate::error::AppError;

/// Environment variable that supplies the login email without prompting.
pub const EMAIL_ENV_VAR: &str = "IPL_FANTASY_EMAIL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Email,
    OneTimeCode,
}

impl CredentialField {
    pub fn prompt(self) -> &'static str {
        match self {
            CredentialField::Email => "Enter your email: ",
            CredentialField::OneTimeCode => "Enter the 6-digit OTP: ",
        }
    }
}

/// Source of login credentials. Called synchronously, once per field.
pub trait CredentialProvider {
    fn request(&mut self, field: CredentialField) -> Result<String, AppError>;
}

/// Reads each credential from a line of input after printing a prompt.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> CredentialProvider for ConsolePrompt<R, W> {
    fn request(&mut self, field: CredentialField) -> Result<String, AppError> {
        write!(self.output, "{}", field.prompt())
            .and_then(|_| self.output.flush())
            .map_err(|e| AppError::config(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::config(format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::config("No input received for login prompt."));
        }

        let value = line.trim();
        if value.is_empty() {
            return Err(AppError::config(format!(
                "Empty value for '{}'.",
                field.prompt().trim_end_matches([' ', ':'])
            )));
        }
        Ok(value.to_string())
    }
}

/// Takes the email from [`EMAIL_ENV_VAR`] (after loading `.env`) and
/// delegates everything else, including a missing email, to `fallback`.
pub struct EnvEmail<P> {
    email: Option<String>,
    fallback: P,
}

impl<P: CredentialProvider> EnvEmail<P> {
    pub fn from_env(fallback: P) -> Self {
        dotenvy::dotenv().ok();
        let email = std::env::var(EMAIL_ENV_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self::new(email, fallback)
    }

    pub fn new(email: Option<String>, fallback: P) -> Self {
        Self { email, fallback }
    }
}

impl<P: CredentialProvider> CredentialProvider for EnvEmail<P> {
    fn request(&mut self, field: CredentialField) -> Result<String, AppError> {
        match (field, &self.email) {
            (CredentialField::Email, Some(email)) => {
                log::info!("Using login email from {EMAIL_ENV_VAR}");
                Ok(email.clone())
            }
            _ => self.fallback.request(field),
        }
    }
}
