use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures that happened while fetching or processing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Application error (network error, schema error, unknown formula, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the analytics pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Request failed: {url}\nDetails: {details}\n\n💡 Hint: Check your internet connection and the configured api_base_url")]
    Transport { url: String, details: String },

    #[error("Unexpected document shape from {source_name}\nDetails: {details}\n\n💡 Hint: The analytics API may have changed its format")]
    Schema { source_name: String, details: String },

    #[error("Failed to parse field '{field}' with value {value:?}")]
    Parse { field: String, value: String },

    #[error("Package not found in dependency relation: {name}\n\n💡 Hint: Check the formula name, or regenerate the edges file")]
    NotFound { name: String },

    #[error("Dependency cycle detected: {}\n\n💡 Hint: The dependency data is expected to be acyclic", path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("Metadata cache error: {path}\nDetails: {details}")]
    Cache { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}
