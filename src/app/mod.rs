//! Application module - the Stickyboard a host drives.
//!
//! This module is organized into several submodules:
//! - `state` - The Stickyboard struct definition and sub-structs
//! - `lifecycle` - Construction, ticking, tool changes, unmount, hit testing
//! - `board_management` - Card and subtask editing
//!
//! Pointer handling lives in `crate::input` as further `impl Stickyboard`
//! blocks.

mod board_management;
mod lifecycle;
mod state;

pub use state::Stickyboard;

// Re-export sub-structs for use in other modules
pub use state::{CanvasState, SystemState, ToolState};
