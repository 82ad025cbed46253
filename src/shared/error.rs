use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs can tell a failed run apart from a comparison that found differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis finished (and, for `compare`, no differences)
    Success = 0,
    /// `compare --fail-on-diff` found differences between the two graphs
    DifferencesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, I/O, missing external tool, ...)
    ApplicationError = 3,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DifferencesFound => write!(f, "Differences Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Metadata lookups never produce one of these: a package whose metadata
/// cannot be fetched is recorded as having no dependencies instead.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Configuration file not found: {path}\n\n💡 Hint: Pass --config with an existing file, or create pkgdep.config.yml in the current directory")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Required parameter '{name}' is missing or empty\n\n💡 Hint: Set it in the configuration file or pass it on the command line")]
    MissingParameter { name: String },

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("External tool '{tool}' could not be run: {details}\n\n💡 Hint: {hint}")]
    ToolUnavailable {
        tool: String,
        details: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
