//! Centralized error types for mailcorpus.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mailcorpus library.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A labeled corpus directory does not exist.
    ///
    /// This is the one fatal condition: it aborts the run before any
    /// record is produced.
    #[error("Corpus directory not found: {0}")]
    DirNotFound(PathBuf),

    /// The bytes could not be interpreted as an email message.
    ///
    /// Recovered per file with one lenient re-parse; if that also fails
    /// the file is skipped silently, so this never aborts a run.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Writing the output dataset failed.
    #[error("Export error: {0}")]
    Export(String),
}

/// Convenience alias for `Result<T, CorpusError>`.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl CorpusError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Allow `?` on `std::io::Error` inside functions returning `CorpusError`
/// when no path context is available (rare — prefer `CorpusError::io`).
impl From<std::io::Error> for CorpusError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source,
        }
    }
}
