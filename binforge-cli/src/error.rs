//! Error handling for the binforge CLI.
//!
//! Preserves error context while mapping failures onto process exit
//! codes.

use std::error::Error;
use std::fmt;

use crate::exit_codes::EXIT_ERROR;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            result.push_str(&format!("\n  Caused by: {err}"));
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<binforge::GeneratorError> for CliError {
    fn from(error: binforge::GeneratorError) -> Self {
        Self {
            message: error.to_string(),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }
}

/// Convert a CliResult into an exit code, reporting the full error chain
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e.full_chain());
            e.exit_code
        }
    }
}
