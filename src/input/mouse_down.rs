//! Pointer down - gesture classification and gesture start.
//!
//! Classification is redone from scratch on every pointer-down. A gesture
//! still in flight at that point lost its pointer-up (focus change, pointer
//! left the window) and is discarded without committing.

use super::coords::screen_to_canvas;
use super::{Gesture, GestureError, InputState, PointerEvent, PointerOutcome, classify};
use crate::app::Stickyboard;
use crate::profile_scope;
use crate::types::{ItemId, PointerTarget};
use tracing::{debug, warn};

impl Stickyboard {
    pub fn pointer_down(&mut self, event: &PointerEvent, target: &PointerTarget) -> PointerOutcome {
        profile_scope!("pointer_down");

        if !self.system.mounted {
            return PointerOutcome::Ignored;
        }
        if !self.canvas.input_state.is_idle() {
            warn!(
                state = self.canvas.input_state.name(),
                "Pointer down during an active gesture; discarding it"
            );
            self.reset_gesture();
        }
        if !event.position.is_finite() {
            return self.abort_gesture(GestureError::NonFinitePointer);
        }

        let Some(gesture) = classify(self.tools.selected, event.button, event.modifiers, target)
        else {
            return PointerOutcome::Ignored;
        };
        debug!(gesture = gesture.name(), tool = ?self.tools.selected, "Gesture started");

        let origin = event.position;
        match gesture {
            Gesture::Pan => {
                self.canvas.input_state = InputState::Panning {
                    origin,
                    last_pos: origin,
                    moved: false,
                };
            }
            Gesture::ItemDrag { ref item, group } => {
                if let Err(e) = self.begin_item_drag(item, group, event) {
                    return self.abort_gesture(e);
                }
            }
            Gesture::ClickCreate => {
                let at = screen_to_canvas(origin, self.canvas.board.pan_offset());
                self.canvas.input_state = InputState::PendingCreate {
                    origin,
                    at,
                    moved: false,
                };
            }
            Gesture::ItemClick { ref item } => {
                if !self.canvas.board.contains(item) {
                    return self.abort_gesture(GestureError::UnknownItems);
                }
                self.canvas.input_state = InputState::PressingItem {
                    item: item.clone(),
                    origin,
                    moved: false,
                };
            }
            Gesture::SelectionToggle { ref item } => {
                let toggled = self.with_board(event.at, |board| board.toggle_selection(item, true));
                if !toggled {
                    return self.abort_gesture(GestureError::UnknownItems);
                }
                let selected = self.canvas.board.selection().is_selected(item);
                self.canvas.input_state = InputState::TogglingSelection { item: item.clone() };
                return PointerOutcome::SelectionToggled {
                    item: item.clone(),
                    selected,
                };
            }
            Gesture::Deselect => {
                self.canvas.input_state = InputState::Deselecting {
                    origin,
                    moved: false,
                };
            }
        }
        PointerOutcome::Started(gesture)
    }

    /// Ids that travel with `item`: the whole selection when the card is part
    /// of a multi-selection and the tool allows group moves, else the card.
    pub fn drag_set(&self, item: &str, group: bool) -> Vec<ItemId> {
        let selection = self.canvas.board.selection();
        if group && selection.is_selected(item) && selection.len() > 1 {
            selection.selected_ids()
        } else {
            vec![item.to_string()]
        }
    }

    fn begin_item_drag(
        &mut self,
        item: &str,
        group: bool,
        event: &PointerEvent,
    ) -> Result<(), GestureError> {
        let ids = self.drag_set(item, group);
        let origins = self.canvas.board.positions_of(&ids);
        let pointer = screen_to_canvas(event.position, self.canvas.board.pan_offset());
        self.canvas.reconciler.begin(&ids, &origins, pointer)?;
        self.canvas.input_state = InputState::DraggingItems {
            primary_item: item.to_string(),
            origin: event.position,
            moved: false,
        };
        Ok(())
    }

    /// Drop the gesture in flight and any drag session, committing nothing.
    pub(crate) fn reset_gesture(&mut self) {
        self.canvas.input_state.reset();
        self.canvas.reconciler.cancel();
        self.canvas.frame.clear();
    }

    pub(crate) fn abort_gesture(&mut self, error: GestureError) -> PointerOutcome {
        warn!(
            state = self.canvas.input_state.name(),
            "Gesture aborted: {}", error
        );
        self.reset_gesture();
        PointerOutcome::Aborted(error)
    }
}
