//! Error types for Innbox.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Unsupported format: {0}")]
    Unsupported(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
