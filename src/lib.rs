//! Headless core of an infinite sticky-note canvas.
//!
//! A host feeds pointer events and frame ticks into [`Stickyboard`] and
//! renders what it exposes. Cards are dragged through a preview layer and
//! committed in one batch on release; the board is saved through a
//! debounced [`persistence::Autosaver`] into any [`persistence::Storage`].

pub mod app;
pub mod board;
pub mod constants;
pub mod input;
pub mod logging;
pub mod perf;
pub mod persistence;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod subtasks;
pub mod types;
pub mod validation;

pub use app::Stickyboard;
pub use board::{Board, BoardError, BoardLimits};
pub use input::{Gesture, GestureError, PointerEvent, PointerOutcome};
pub use settings::Settings;
pub use types::{Item, ItemId, Modifiers, Point, PointerButton, PointerTarget, Position, SubItem, Tool};
