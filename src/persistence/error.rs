//! Error types for storage operations

use thiserror::Error;

/// Errors that can occur while reading or writing the persisted board
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored blob parsed but has the wrong shape
    #[error("Invalid stored data: {0}")]
    InvalidFormat(String),

    /// Backend refused the write because it would exceed its quota
    #[error("Storage quota exceeded: {needed} bytes (quota {quota})")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Key cannot be mapped onto the backend
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<tempfile::PersistError> for StorageError {
    fn from(e: tempfile::PersistError) -> Self {
        StorageError::Io(e.error)
    }
}

/// Which side of persistence failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaultKind {
    Read,
    Parse,
    Write,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FaultKind::Read => "read",
            FaultKind::Parse => "parse",
            FaultKind::Write => "write",
        })
    }
}

/// A non-fatal persistence failure, kept around so the UI can show it.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind} failed: {message}")]
pub struct StorageFault {
    pub kind: FaultKind,
    pub message: String,
}

impl StorageFault {
    pub fn new(kind: FaultKind, error: &StorageError) -> Self {
        Self {
            kind,
            message: error.to_string(),
        }
    }
}
