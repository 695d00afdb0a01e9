//! Error types for agenda operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid date '{0}'. Expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Could not access snapshot {path}: {source}")]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {path}: {source}")]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
