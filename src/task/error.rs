// Task store error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("unrecognized priority '{0}' (expected high, medium, or low)")]
    InvalidPriority(String),

    #[error("unrecognized status '{0}' (expected pending or complete)")]
    InvalidStatus(String),

    #[error("task {0} not found")]
    NotFound(u64),

    #[error("task file {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode tasks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
