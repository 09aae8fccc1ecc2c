//! Error types for accessgridlib

use thiserror::Error;

/// Errors that can occur while loading or rendering access results
#[derive(Error, Debug)]
pub enum AccessGridError {
    /// Writing the rendered table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Access result document could not be decoded
    #[error("failed to decode access result: {0}")]
    Json(#[from] serde_json::Error),

    /// Output format name not recognized by the strict parser
    #[error("unknown output format '{0}' (expected 'default' or 'ascii-table')")]
    UnknownOutputFormat(String),
}
