//! Error types for chain retrieval

use passport_core::MalformedRecord;
use thiserror::Error;

/// Failure to produce a snapshot, or a requested object within it
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Unexpected object shape: {0}")]
    UnexpectedShape(String),

    #[error("Malformed record {object_id}: {source}")]
    Malformed {
        object_id: String,
        source: MalformedRecord,
    },
}

/// Result type alias for chain operations
pub type ChainResult<T> = Result<T, ChainError>;
