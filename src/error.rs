//! Error types for the Free Fire ID Checker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FfError>;

#[derive(Error, Debug)]
pub enum FfError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("player ID must not be empty")]
    EmptyPlayerId,
}
