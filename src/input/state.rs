//! Input state machine - one enum for the whole pointer gesture lifecycle.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning              (middle button anywhere, Cursor tool on canvas)
//! Idle -> DraggingItems        (primary button on a card, Cursor tool or Move without modifier)
//! Idle -> PressingItem         (Create tool on a card)
//! Idle -> PendingCreate        (Create tool on canvas)
//! Idle -> TogglingSelection    (Move tool + multi-select modifier on a card)
//! Idle -> Deselecting          (Move tool on canvas)
//!
//! Any -> Idle                  (pointer up, abort, unmount)
//! ```
//!
//! Positions stored here are screen coordinates; the reconciler works in
//! canvas coordinates.

use crate::types::{ItemId, Modifiers, PointerButton, PointerTarget, Point, Tool};

/// What a pointer-down turned into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
    Pan,
    /// `group` is set when the whole selection may travel with the card
    ItemDrag { item: ItemId, group: bool },
    ClickCreate,
    /// Press on a card that can only be clicked, never dragged
    ItemClick { item: ItemId },
    SelectionToggle { item: ItemId },
    Deselect,
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::ItemDrag { .. } => "item-drag",
            Self::ClickCreate => "click-create",
            Self::ItemClick { .. } => "item-click",
            Self::SelectionToggle { .. } => "selection-toggle",
            Self::Deselect => "deselect",
        }
    }
}

/// Decide the gesture for a pointer-down. `None` means the event is not ours
/// (secondary button).
pub fn classify(
    tool: Tool,
    button: PointerButton,
    modifiers: Modifiers,
    target: &PointerTarget,
) -> Option<Gesture> {
    match button {
        PointerButton::Middle => return Some(Gesture::Pan),
        PointerButton::Secondary => return None,
        PointerButton::Primary => {}
    }

    let gesture = match (tool, target) {
        (Tool::Cursor, PointerTarget::Canvas) => Gesture::Pan,
        (Tool::Create, PointerTarget::Canvas) => Gesture::ClickCreate,
        (Tool::Move, PointerTarget::Canvas) => Gesture::Deselect,
        (Tool::Move, PointerTarget::Item(id)) if modifiers.multi_select() => {
            Gesture::SelectionToggle { item: id.clone() }
        }
        (Tool::Move, PointerTarget::Item(id)) => Gesture::ItemDrag {
            item: id.clone(),
            group: true,
        },
        (Tool::Cursor, PointerTarget::Item(id)) => Gesture::ItemDrag {
            item: id.clone(),
            group: false,
        },
        (Tool::Create, PointerTarget::Item(id)) => Gesture::ItemClick { item: id.clone() },
    };
    Some(gesture)
}

/// Unified input state for a single pointer gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// Pointer position at pointer-down
        origin: Point,
        /// Last pointer position for delta calculation
        last_pos: Point,
        /// Pointer has left the click threshold
        moved: bool,
    },

    /// Dragging one or more cards; the reconciler holds the session
    DraggingItems {
        /// The card under the pointer
        primary_item: ItemId,
        origin: Point,
        moved: bool,
    },

    /// Create tool pressed on empty canvas; fires on release
    PendingCreate {
        origin: Point,
        /// Canvas position the card will be created at
        at: Point,
        moved: bool,
    },

    /// Create tool pressed on a card; a release inside the threshold
    /// focuses it
    PressingItem {
        item: ItemId,
        origin: Point,
        moved: bool,
    },

    /// Selection was toggled on pointer-down; waiting for release
    TogglingSelection { item: ItemId },

    /// Move tool pressed on empty canvas
    Deselecting { origin: Point, moved: bool },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::DraggingItems { .. })
    }

    /// The card a drag started on, if dragging.
    pub fn primary_item(&self) -> Option<&str> {
        match self {
            Self::DraggingItems { primary_item, .. } => Some(primary_item),
            _ => None,
        }
    }

    /// Whether the pointer has left the click threshold during this gesture.
    pub fn has_moved(&self) -> bool {
        match self {
            Self::Panning { moved, .. }
            | Self::DraggingItems { moved, .. }
            | Self::PendingCreate { moved, .. }
            | Self::PressingItem { moved, .. }
            | Self::Deselecting { moved, .. } => *moved,
            Self::Idle | Self::TogglingSelection { .. } => false,
        }
    }

    /// Record the pointer at `pos`; latches `moved` once it leaves the
    /// threshold around the gesture's origin. Returns the latched value.
    pub fn track_movement(&mut self, pos: Point, threshold: f64) -> bool {
        match self {
            Self::Panning { origin, moved, .. }
            | Self::DraggingItems { origin, moved, .. }
            | Self::PendingCreate { origin, moved, .. }
            | Self::PressingItem { origin, moved, .. }
            | Self::Deselecting { origin, moved } => {
                if !*moved && pos.exceeds(*origin, threshold) {
                    *moved = true;
                }
                *moved
            }
            Self::Idle | Self::TogglingSelection { .. } => false,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::DraggingItems { .. } => "dragging-items",
            Self::PendingCreate { .. } => "pending-create",
            Self::PressingItem { .. } => "pressing-item",
            Self::TogglingSelection { .. } => "toggling-selection",
            Self::Deselecting { .. } => "deselecting",
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
