//! `tiercheck-cli` — files, console rendering, and exit codes around the
//! reconciliation engine.

pub mod check;
pub mod exit_codes;

/// CLI-level error: message plus the process exit code it maps to.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: exit_codes::EXIT_ERROR,
            message: message.into(),
            hint: None,
        }
    }

    pub fn input_missing(message: impl Into<String>) -> Self {
        Self {
            code: exit_codes::EXIT_INPUT_MISSING,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
