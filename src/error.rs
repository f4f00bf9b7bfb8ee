/// Exit code for bad flags, unreadable roster files and prompt failures.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for browser launch, login and page-load failures.
pub const EXIT_SESSION: u8 = 3;
/// Exit code for failures while writing the spreadsheet or JSON exports.
pub const EXIT_REPORT: u8 = 5;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    /// Authentication or page-load failure. Always fatal for the run.
    pub fn session(message: impl Into<String>) -> Self {
        Self::new(EXIT_SESSION, message)
    }

    pub fn report_write(message: impl Into<String>) -> Self {
        Self::new(EXIT_REPORT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
