//! Pointer up - finalize the gesture.
//!
//! The release position is applied before anything is committed, so the
//! result never depends on whether the last animation frame fired.

use super::coords::screen_to_canvas;
use super::reconciler::round_positions;
use super::{GestureError, InputState, PointerEvent, PointerOutcome};
use crate::app::Stickyboard;
use crate::profile_scope;
use crate::types::{ItemId, Tool};
use std::time::Instant;
use tracing::{debug, info};

impl Stickyboard {
    pub fn pointer_up(&mut self, event: &PointerEvent) -> PointerOutcome {
        profile_scope!("pointer_up");

        if !self.system.mounted {
            return PointerOutcome::Ignored;
        }
        if self.canvas.input_state.is_idle() {
            return PointerOutcome::Ignored;
        }

        if !event.position.is_finite() {
            return self.abort_gesture(GestureError::NonFinitePointer);
        }
        let threshold = self.system.settings.drag_threshold_px;
        self.canvas
            .input_state
            .track_movement(event.position, threshold);
        let state = std::mem::take(&mut self.canvas.input_state);
        self.canvas.frame.clear();

        let outcome = match state {
            InputState::Idle => PointerOutcome::Ignored,

            InputState::Panning {
                last_pos, moved, ..
            } => {
                if moved {
                    self.canvas.board.pan_by(event.position - last_pos);
                    PointerOutcome::Panned {
                        offset: self.canvas.board.pan_offset(),
                    }
                } else {
                    self.with_board(event.at, |board| board.blur());
                    PointerOutcome::FocusCleared
                }
            }

            InputState::DraggingItems {
                primary_item,
                moved,
                ..
            } => {
                if !moved {
                    self.canvas.reconciler.cancel();
                    self.click_item(primary_item, event.at)
                } else {
                    self.commit_drag(event)
                }
            }

            InputState::PendingCreate { at, moved, .. } => {
                if moved {
                    PointerOutcome::Ended
                } else {
                    match self.with_board(event.at, |board| board.create_item(at)) {
                        Ok(item) => PointerOutcome::Created { item },
                        Err(e) => return self.abort_gesture(e.into()),
                    }
                }
            }

            InputState::PressingItem { item, moved, .. } => {
                if moved {
                    PointerOutcome::Ended
                } else {
                    self.click_item(item, event.at)
                }
            }

            InputState::TogglingSelection { .. } => PointerOutcome::Ended,

            InputState::Deselecting { moved, .. } => {
                if moved {
                    PointerOutcome::Ended
                } else {
                    self.with_board(event.at, |board| board.clear_selection());
                    PointerOutcome::Deselected
                }
            }
        };
        debug!(outcome = ?outcome, "Gesture finished");
        outcome
    }

    /// Feed the release position to the reconciler, then commit every
    /// dragged card in one batch.
    fn commit_drag(&mut self, event: &PointerEvent) -> PointerOutcome {
        let pointer = screen_to_canvas(event.position, self.canvas.board.pan_offset());
        if let Err(e) = self.canvas.reconciler.preview(pointer) {
            return self.abort_gesture(e);
        }
        let previews = self.canvas.reconciler.end();
        let positions = round_positions(&previews);
        let moved = self.with_board(event.at, |board| board.commit_positions(&positions));
        info!(moved, "Drag committed");
        PointerOutcome::Committed { moved }
    }

    /// A press that stayed inside the threshold. In the Move tool it toggles
    /// the card in or out of the selection, keeping the rest; otherwise it
    /// opens the card for editing.
    fn click_item(&mut self, item: ItemId, now: Instant) -> PointerOutcome {
        if self.tools.selected == Tool::Move {
            if !self.with_board(now, |board| board.toggle_selection(&item, true)) {
                return self.abort_gesture(GestureError::UnknownItems);
            }
            let selected = self.canvas.board.selection().is_selected(&item);
            return PointerOutcome::SelectionToggled { item, selected };
        }
        if let Err(e) = self.with_board(now, |board| board.focus(&item)) {
            return self.abort_gesture(e.into());
        }
        PointerOutcome::Clicked { item }
    }
}
