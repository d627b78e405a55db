//! Error handling for the cleaning pipeline.
//!
//! Every stage returns [`Result`], an alias over [`CleanerError`]. The enum
//! keeps one variant per failure category so callers can match on what went
//! wrong instead of parsing messages:
//!
//! ```
//! use tablewash::error::CleanerError;
//!
//! fn describe(err: &CleanerError) -> &'static str {
//!     match err {
//!         CleanerError::NotFound(_) => "missing input",
//!         CleanerError::UnsupportedFormat(_) => "not a csv file",
//!         CleanerError::Write { .. } => "could not persist",
//!         _ => "other failure",
//!     }
//! }
//! ```
//!
//! `From` conversions for I/O, Polars, JSON and `anyhow` errors let the `?`
//! operator lift library errors into the right category, and [`ResultExt`]
//! prefixes a message with where it happened.

use std::fmt;
use std::path::PathBuf;

/// Main error type for cleaning operations.
#[derive(Debug)]
pub enum CleanerError {
    /// Input path does not exist
    NotFound(PathBuf),

    /// Input extension is not a recognized delimited-text format
    UnsupportedFormat(String),

    /// Input exists but could not be parsed as a table
    Read(String),

    /// Output could not be written (permissions, disk full, ...)
    Write { path: PathBuf, message: String },

    /// Polars failure while transforming the table
    DataProcessing(String),

    /// Configuration could not be read, parsed, or failed strict validation
    Config(String),

    /// Other I/O errors
    Io(std::io::Error),

    /// Anything else, usually with context attached
    Other(String),
}

impl CleanerError {
    pub(crate) fn write(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Prefix the message with `ctx`, keeping the category where the
    /// variant carries free text.
    fn with_prefix(self, ctx: &str) -> Self {
        match self {
            Self::Read(msg) => Self::Read(format!("{ctx}: {msg}")),
            Self::DataProcessing(msg) => Self::DataProcessing(format!("{ctx}: {msg}")),
            Self::Config(msg) => Self::Config(format!("{ctx}: {msg}")),
            Self::Other(msg) => Self::Other(format!("{ctx}: {msg}")),
            other => Self::Other(format!("{ctx}: {other}")),
        }
    }
}

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Input file not found: {}", path.display()),
            Self::UnsupportedFormat(ext) => write!(f, "Unsupported file type: {ext}"),
            Self::Read(msg) => write!(f, "Failed to read table: {msg}"),
            Self::Write { path, message } => {
                write!(f, "Failed to write {}: {message}", path.display())
            }
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CleanerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for CleanerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(format!("{err:#}"))
    }
}

impl From<polars::error::PolarsError> for CleanerError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for CleanerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanerError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CleanerError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_prefix(&msg.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_prefix(&f()))
    }
}
