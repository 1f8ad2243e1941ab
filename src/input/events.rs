//! Pointer events in, outcomes out.

use super::Gesture;
use crate::board::BoardError;
use crate::types::{ItemId, Modifiers, Point, PointerButton};
use std::time::Instant;
use thiserror::Error;

/// A pointer event as delivered by the host, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// When the event happened; drives the autosave debounce
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(position: Point, at: Instant) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            at,
        }
    }

    pub fn at_xy(x: f64, y: f64, at: Instant) -> Self {
        Self::new(Point::new(x, y), at)
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Why a gesture was abandoned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    #[error("no items to drag")]
    EmptySelection,

    #[error("pointer coordinates are not finite")]
    NonFinitePointer,

    #[error("none of the dragged items exist")]
    UnknownItems,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// What handling a pointer event did. Handlers never fail; a rejected
/// gesture is reported as `Aborted`.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// Not handled: unmounted, no active gesture, or a button we ignore
    Ignored,
    Started(Gesture),
    /// Pan offset changed
    Panned { offset: Point },
    /// A drag preview is waiting for the next animation frame
    PreviewQueued { frame_requested: bool },
    /// Pointer moved but is still within the click threshold
    Holding,
    /// Drag released; `moved` cards received new committed positions
    Committed { moved: usize },
    /// A press on a card that never left the threshold; the card was focused
    Clicked { item: ItemId },
    Created { item: ItemId },
    SelectionToggled { item: ItemId, selected: bool },
    Deselected,
    /// Click on empty canvas in the Cursor tool
    FocusCleared,
    /// Gesture finished without further effect
    Ended,
    Aborted(GestureError),
}
