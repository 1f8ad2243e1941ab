//! Pointer input handling for the canvas.
//!
//! This module implements all pointer interaction logic: classifying a
//! pointer-down into a gesture, panning, dragging one or many cards, and
//! click-vs-drag resolution on release.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Drag previews live in the `PositionReconciler`,
//! apart from committed card positions, until the gesture commits.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and gesture classification
//! - `reconciler` - Transient drag previews and the batched commit
//! - `frame` - One preview per animation frame
//! - `listeners` - Which global listeners the host must keep bound
//! - `mouse_down` - Pointer down handling (classification, gesture start)
//! - `drag` - Pointer move handling (pan, preview queueing)
//! - `mouse_up` - Pointer up handling (commit, click, create)
//! - `coords` - Screen/canvas conversion

pub mod coords;
mod drag;
mod events;
mod frame;
mod listeners;
mod mouse_down;
mod mouse_up;
pub mod reconciler;
mod state;

pub use events::{GestureError, PointerEvent, PointerOutcome};
pub use frame::FrameGate;
pub use listeners::ListenerSet;
pub use reconciler::PositionReconciler;
pub use state::{Gesture, InputState, classify};
