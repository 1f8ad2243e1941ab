//! Board persistence.
//!
//! - `storage` - the `Storage` trait plus memory and file backends
//! - `schema` - the persisted blob format and tolerant decoding
//! - `autosave` - the debounced, fire-and-forget writer
//! - `error` - `StorageError` and the non-fatal `StorageFault` flag
//!
//! Loading never fails outright: a missing blob is an empty board, an
//! unreadable one is an empty board plus a fault, and malformed cards are
//! dropped while the rest load.

mod autosave;
mod error;
mod schema;
mod storage;

pub use autosave::Autosaver;
pub use error::*;
pub use schema::{BoardSnapshot, Decoded, decode};
pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::board::BoardLimits;
use tracing::{error, info};

/// Outcome of loading the board at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    pub snapshot: BoardSnapshot,
    pub dropped: usize,
    pub migrated: bool,
    /// Set when the blob could not be read or parsed at all
    pub fault: Option<StorageFault>,
}

/// Read and decode the board stored under `key`.
pub fn load(storage: &dyn Storage, key: &str, limits: BoardLimits) -> LoadReport {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(key, "No stored board; starting empty");
            return LoadReport::default();
        }
        Err(e) => {
            error!(key, "Error reading stored board: {}", e);
            return LoadReport {
                fault: Some(StorageFault::new(FaultKind::Read, &e)),
                ..Default::default()
            };
        }
    };

    match decode(&raw, limits.max_items, limits.max_text_len) {
        Ok(decoded) => {
            info!(
                key,
                items = decoded.snapshot.items.len(),
                dropped = decoded.dropped,
                "Loaded stored board"
            );
            LoadReport {
                snapshot: decoded.snapshot,
                dropped: decoded.dropped,
                migrated: decoded.migrated,
                fault: None,
            }
        }
        Err(e) => {
            error!(key, "Error parsing stored board: {}", e);
            LoadReport {
                fault: Some(StorageFault::new(FaultKind::Parse, &e)),
                ..Default::default()
            }
        }
    }
}
