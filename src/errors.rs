//! Error types for recurl

use thiserror::Error;

/// Main error type for recurl
#[derive(Error, Debug)]
pub enum RecurlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RecurlError>;
