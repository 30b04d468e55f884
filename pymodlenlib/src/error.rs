//! Error types for pymodlenlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while checking module lengths
#[derive(Error, Debug)]
pub enum PymodlenError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Failed to serialize a report
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
