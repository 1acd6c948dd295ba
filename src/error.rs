//! Error types for loading and writing OpenAPI documents.
//!
//! The normalization engine itself never fails; only the file boundary does.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading input or writing normalized output.
#[derive(Debug, Error)]
pub enum NormalizeError {
    // IO errors (exit code 3)
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON in input file: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize normalized document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl NormalizeError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NormalizeError::FileNotFound { .. }
            | NormalizeError::ReadError { .. }
            | NormalizeError::WriteError { .. } => 3,
            NormalizeError::InvalidJson { .. } | NormalizeError::Serialize { .. } => 2,
        }
    }
}
