//! Position reconciler - transient drag previews kept apart from committed state.
//!
//! A drag session snapshots each dragged card's committed position and the
//! pointer's start point. Previews are always `origin + (pointer - start)`
//! computed from that snapshot, so repeated previews overwrite rather than
//! accumulate, and committed positions are untouched until `end()`.

use super::GestureError;
use crate::types::{ItemId, Point, Position};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone)]
struct DragSession {
    /// Dragged ids in the order the gesture supplied them
    ids: Vec<ItemId>,
    origins: BTreeMap<ItemId, Point>,
    pointer_start: Point,
    preview: BTreeMap<ItemId, Point>,
}

#[derive(Debug, Clone, Default)]
pub struct PositionReconciler {
    session: Option<DragSession>,
}

impl PositionReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `ids` at their committed `origins` with the pointer at
    /// `pointer_start`. Ids without an origin are skipped. Replaces any
    /// session already in progress.
    pub fn begin(
        &mut self,
        ids: &[ItemId],
        origins: &HashMap<ItemId, Position>,
        pointer_start: Point,
    ) -> Result<(), GestureError> {
        self.session = None;
        if ids.is_empty() {
            return Err(GestureError::EmptySelection);
        }
        if !pointer_start.is_finite() {
            return Err(GestureError::NonFinitePointer);
        }

        let mut kept = Vec::with_capacity(ids.len());
        let mut snapshot = BTreeMap::new();
        for id in ids {
            if let Some(position) = origins.get(id) {
                if snapshot.insert(id.clone(), position.to_point()).is_none() {
                    kept.push(id.clone());
                }
            }
        }
        if kept.is_empty() {
            return Err(GestureError::UnknownItems);
        }

        debug!(count = kept.len(), "Drag session started");
        self.session = Some(DragSession {
            ids: kept,
            preview: snapshot.clone(),
            origins: snapshot,
            pointer_start,
        });
        Ok(())
    }

    /// Recompute previews for the pointer at `pointer`. No-op without a
    /// session. A non-finite pointer leaves the previous preview in place.
    pub fn preview(&mut self, pointer: Point) -> Result<(), GestureError> {
        let Some(ref mut session) = self.session else {
            return Ok(());
        };
        if !pointer.is_finite() {
            return Err(GestureError::NonFinitePointer);
        }
        let delta = pointer - session.pointer_start;
        for (id, origin) in &session.origins {
            session.preview.insert(id.clone(), *origin + delta);
        }
        Ok(())
    }

    /// Finish the session and hand back the last preview set. Empty if no
    /// session was active.
    pub fn end(&mut self) -> BTreeMap<ItemId, Point> {
        match self.session.take() {
            Some(session) => {
                debug!(count = session.ids.len(), "Drag session ended");
                session.preview
            }
            None => BTreeMap::new(),
        }
    }

    /// Drop the session without producing positions.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("Drag session cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn dragged_ids(&self) -> &[ItemId] {
        self.session.as_ref().map(|s| s.ids.as_slice()).unwrap_or(&[])
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.origins.contains_key(id))
    }

    pub fn preview_position(&self, id: &str) -> Option<Point> {
        self.session.as_ref()?.preview.get(id).copied()
    }

    /// Where a card should be drawn: its preview while dragged, otherwise
    /// its committed position.
    pub fn visual_position(&self, id: &str, committed: Position) -> Point {
        self.preview_position(id)
            .unwrap_or_else(|| committed.to_point())
    }
}

/// Round every preview to its committed position.
pub fn round_positions(previews: &BTreeMap<ItemId, Point>) -> BTreeMap<ItemId, Position> {
    previews
        .iter()
        .map(|(id, point)| (id.clone(), point.round()))
        .collect()
}
