//! Animation-frame coalescing for drag previews.
//!
//! Pointer moves can arrive far faster than the display refreshes. Moves only
//! record the latest pointer; the host calls back once per frame and the
//! preview is computed at most once for that frame.

use crate::types::Point;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: Option<Point>,
    frame_requested: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pointer` as the latest position. Returns true when the host
    /// needs to request a new animation frame.
    pub fn queue(&mut self, pointer: Point) -> bool {
        self.pending = Some(pointer);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Take the position to apply this frame.
    pub fn take(&mut self) -> Option<Point> {
        self.frame_requested = false;
        self.pending.take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
