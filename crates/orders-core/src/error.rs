use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the orders analyzer.
///
/// Every variant is fatal: the run aborts without emitting a partial
/// report. The Display strings are the user-facing diagnostics; the CLI
/// prints them with an `Error: ` prefix and exits with status 1.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The input path does not exist.
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be opened or read.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `-from=` value does not match the `YYYY-MM-DD` pattern.
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// A non-blank input line is not a valid order record.
    ///
    /// `line` is the 1-based physical line number, blank lines included.
    #[error("Invalid JSON at line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
