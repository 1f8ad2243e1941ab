//! Application-wide constants.
//!
//! Centralizes magic numbers and limits so the store, the input layer and
//! the persistence layer agree on them.

// ============================================================================
// Persistence
// ============================================================================

/// Version tag written into every persisted blob
pub const SCHEMA_VERSION: u32 = 2;

/// Key the board is stored under when no setting overrides it
pub const DEFAULT_STORAGE_KEY: &str = "stickyboard";

/// Save debounce delay in milliseconds
pub const SAVE_DEBOUNCE_MS: u64 = 500;

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of cards on one board
pub const MAX_ITEMS: usize = 1000;

/// Maximum card/subtask text length in characters (after trimming)
pub const MAX_TEXT_LEN: usize = 500;

/// Deepest subtask nesting level (levels run 0..=MAX_SUBTASK_LEVEL)
pub const MAX_SUBTASK_LEVEL: u8 = 3;

/// Longest identifier accepted from persisted data
pub const MAX_ID_LEN: usize = 64;

/// Persisted coordinates beyond this magnitude are treated as corrupt
pub const MAX_COORDINATE: f64 = 1.0e9;

// ============================================================================
// Interaction
// ============================================================================

/// Pointer travel (px, per axis) before a press becomes a drag instead of a click
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

/// Card footprint in canvas units, used for hit testing
pub const CARD_SIZE: (f64, f64) = (256.0, 72.0);

/// Handlers slower than this are logged as slow operations
pub const SLOW_HANDLER_MS: f64 = 4.0;
