//! Application state - the Stickyboard struct definition and sub-structs.

use crate::board::Board;
use crate::input::{FrameGate, InputState, PositionReconciler};
use crate::persistence::{Autosaver, StorageFault};
use crate::settings::Settings;
use crate::spatial_index::SpatialIndex;
use crate::types::Tool;

/// Canvas interaction state - committed board, gesture, drag previews.
pub struct CanvasState {
    /// Committed cards, selection and pan offset
    pub board: Board,
    /// Input state machine for the gesture in flight
    pub input_state: InputState,
    /// Drag previews, separate from committed positions
    pub reconciler: PositionReconciler,
    /// Coalesces pointer moves into one preview per frame
    pub frame: FrameGate,
    /// Hit-test index over committed card bounds
    pub hit_index: SpatialIndex,
    /// Board revision the hit index was built from
    pub(crate) indexed_revision: Option<u64>,
}

/// Tool selection state
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolState {
    pub selected: Tool,
}

/// Settings, persistence and mount status
pub struct SystemState {
    pub settings: Settings,
    pub autosave: Autosaver,
    /// False after `unmount()`; every event is ignored from then on
    pub mounted: bool,
    /// Set when the stored board could not be read or parsed at startup
    pub load_fault: Option<StorageFault>,
    /// Stored cards discarded as malformed during load
    pub dropped_on_load: usize,
}

/// The headless sticky-board application a host drives.
pub struct Stickyboard {
    pub canvas: CanvasState,
    pub tools: ToolState,
    pub system: SystemState,
}
