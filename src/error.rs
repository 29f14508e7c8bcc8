//! Error types for schema conversion

use crate::avro::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read schema file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("HTTP fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid Avro schema: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to encode mapping: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
