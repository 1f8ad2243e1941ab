//! Which global pointer listeners the host should keep bound.

/// Move and up listeners are only needed while a gesture is in flight, so
/// the host can bind them on pointer-down and drop them on release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerSet {
    pub pointer_down: bool,
    pub pointer_move: bool,
    pub pointer_up: bool,
}

impl ListenerSet {
    pub const NONE: ListenerSet = ListenerSet {
        pointer_down: false,
        pointer_move: false,
        pointer_up: false,
    };

    pub fn for_state(mounted: bool, gesture_active: bool) -> Self {
        Self {
            pointer_down: mounted,
            pointer_move: mounted && gesture_active,
            pointer_up: mounted && gesture_active,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}
