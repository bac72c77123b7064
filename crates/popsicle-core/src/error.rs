//! Roster error types.
//!
//! Every fallible operation in `popsicle-core` returns a [`RosterError`] so
//! the CLI can report lookup failures, empty-roster pulls and file problems
//! without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while working with a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The named student is not on the roster.
    #[error("student not found: {0}")]
    StudentNotFound(String),

    /// A rename would overwrite another student's record.
    #[error("student already exists: {0}")]
    StudentExists(String),

    /// A student name was empty after trimming.
    #[error("student name cannot be blank")]
    BlankName,

    /// A student's call count cannot be incremented any further.
    #[error("call count for {0} is at its maximum")]
    CountOverflow(String),

    /// A pull was attempted on a roster with no students.
    #[error("roster is empty, add students before pulling")]
    EmptyRoster,

    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted document is not valid JSON of the expected shape.
    #[error("invalid roster document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The roster import file could not be parsed.
    #[error("CSV error in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// The configuration file could not be parsed.
    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A roster discovery pattern is not a valid regular expression.
    #[error("invalid roster pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RosterError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
