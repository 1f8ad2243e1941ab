//! Debounced autosave.
//!
//! `Autosaver` owns the save timer. Every `schedule` replaces the pending
//! snapshot and pushes the deadline out by the debounce delay, so a burst of
//! edits costs one write. Time is passed in by the caller (`poll(now)` from
//! the host's frame/tick callback), which keeps the component single-threaded
//! and deterministic. Dropping or cancelling it discards the pending write.

use super::error::{FaultKind, StorageError, StorageFault};
use super::schema::BoardSnapshot;
use super::storage::Storage;
use crate::profile_scope;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

struct PendingWrite {
    snapshot: BoardSnapshot,
    deadline: Instant,
}

pub struct Autosaver {
    storage: Box<dyn Storage>,
    key: String,
    delay: Duration,
    pending: Option<PendingWrite>,
    last_error: Option<StorageFault>,
    writes: u64,
}

impl Autosaver {
    pub fn new(storage: Box<dyn Storage>, key: impl Into<String>, delay: Duration) -> Self {
        Self {
            storage,
            key: key.into(),
            delay,
            pending: None,
            last_error: None,
            writes: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Queue `snapshot` for writing `delay` after `now`, replacing anything
    /// already queued.
    pub fn schedule(&mut self, snapshot: BoardSnapshot, now: Instant) {
        let deadline = now + self.delay;
        if self.pending.is_some() {
            debug!(key = %self.key, "Autosave rescheduled");
        }
        self.pending = Some(PendingWrite { snapshot, deadline });
    }

    /// Write the pending snapshot if its deadline has passed.
    /// Returns true if a write was attempted.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(ref pending) if now >= pending.deadline => {}
            _ => return false,
        }
        self.write_pending();
        true
    }

    /// Write the pending snapshot immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Result<(), StorageFault> {
        if self.pending.is_none() {
            return Ok(());
        }
        self.write_pending();
        match self.last_error {
            Some(ref fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }

    /// Discard the pending write, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!(key = %self.key, "Pending autosave discarded");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The most recent write failure; cleared by the next successful write.
    pub fn last_error(&self) -> Option<&StorageFault> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    fn write_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        profile_scope!("autosave_write");

        let result = pending
            .snapshot
            .encode()
            .and_then(|blob| self.storage.write(&self.key, &blob).map(|()| blob.len()));

        match result {
            Ok(bytes) => {
                self.writes += 1;
                self.last_error = None;
                info!(key = %self.key, bytes, items = pending.snapshot.items.len(), "Board saved");
            }
            Err(e) => self.record_failure(e),
        }
    }

    fn record_failure(&mut self, e: StorageError) {
        error!(key = %self.key, "Error saving board: {}", e);
        self.last_error = Some(StorageFault::new(FaultKind::Write, &e));
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        self.cancel();
    }
}
