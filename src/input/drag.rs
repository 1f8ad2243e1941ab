//! Pointer move - pan updates and frame-gated drag previews.
//!
//! ## Performance Notes
//!
//! Pointer move fires far more often than the display refreshes. During an
//! item drag a move only records the pointer; the preview is computed once
//! per frame in `animation_frame`. Panning is a single offset update and
//! applies immediately once the pointer leaves the click threshold; until
//! then the view stays put.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::coords::screen_to_canvas;
use super::{GestureError, InputState, PointerEvent, PointerOutcome};
use crate::app::Stickyboard;
use crate::profile_scope;

impl Stickyboard {
    pub fn pointer_move(&mut self, event: &PointerEvent) -> PointerOutcome {
        profile_scope!("pointer_move");

        if !self.system.mounted || self.canvas.input_state.is_idle() {
            return PointerOutcome::Ignored;
        }
        if !event.position.is_finite() {
            return self.abort_gesture(GestureError::NonFinitePointer);
        }

        let threshold = self.system.settings.drag_threshold_px;
        let moved = self
            .canvas
            .input_state
            .track_movement(event.position, threshold);

        match self.canvas.input_state {
            InputState::Panning { ref mut last_pos, .. } if moved => {
                let delta = event.position - *last_pos;
                *last_pos = event.position;
                self.canvas.board.pan_by(delta);
                PointerOutcome::Panned {
                    offset: self.canvas.board.pan_offset(),
                }
            }
            InputState::DraggingItems { .. } if moved => {
                let pointer = screen_to_canvas(event.position, self.canvas.board.pan_offset());
                let frame_requested = self.canvas.frame.queue(pointer);
                PointerOutcome::PreviewQueued { frame_requested }
            }
            _ => PointerOutcome::Holding,
        }
    }

    /// Apply the latest queued drag preview. Call once per animation frame
    /// while `needs_frame()` is true. Returns whether a preview was applied.
    pub fn animation_frame(&mut self) -> bool {
        profile_scope!("drag_preview_frame");

        let Some(pointer) = self.canvas.frame.take() else {
            return false;
        };
        if !self.canvas.input_state.is_dragging_items() {
            return false;
        }
        match self.canvas.reconciler.preview(pointer) {
            Ok(()) => true,
            Err(e) => {
                self.abort_gesture(e);
                false
            }
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.canvas.frame.is_frame_requested()
    }
}
