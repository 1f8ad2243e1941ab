//! Core types for the sticky-note canvas.
//!
//! Committed geometry is integral (`Position`); anything in flight during a
//! gesture is fractional (`Point`) and only becomes a `Position` through
//! [`Point::round`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Opaque card identifier. Generated cards use a UUID v4.
pub type ItemId = String;

/// Opaque subtask identifier.
pub type SubItemId = String;

/// Generate a fresh identifier for a card or subtask.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Geometry
// ============================================================================

/// A fractional 2-D coordinate (pointer positions, previews, pan offset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Round each coordinate to the nearest integer (halves away from zero).
    pub fn round(self) -> Position {
        Position {
            x: self.x.round() as i64,
            y: self.y.round() as i64,
        }
    }

    /// True if either axis moved more than `threshold` relative to `other`.
    pub fn exceeds(&self, other: Point, threshold: f64) -> bool {
        (self.x - other.x).abs() > threshold || (self.y - other.y).abs() > threshold
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A committed card position. Always integral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

// ============================================================================
// Cards
// ============================================================================

/// A nested checklist entry inside a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: SubItemId,
    pub text: String,
    pub completed: bool,
    /// Indentation depth, 0..=MAX_SUBTASK_LEVEL
    pub level: u8,
}

impl SubItem {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            completed: false,
            level,
        }
    }
}

/// A sticky-note card on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub position: Position,
    pub subtasks: Vec<SubItem>,
}

impl Item {
    /// An empty card at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            id: new_id(),
            text: String::new(),
            completed: false,
            position,
            subtasks: Vec::new(),
        }
    }

    pub fn subtask(&self, id: &str) -> Option<&SubItem> {
        self.subtasks.iter().find(|s| s.id == id)
    }
}

// ============================================================================
// Tools & pointer input
// ============================================================================

/// Active canvas tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Click on empty canvas creates a card; click on a card edits it
    #[default]
    Create,
    /// Edit and navigate: drag a card on its own, drag the canvas to pan
    Cursor,
    /// Select and move: click toggles selection, drag moves the selection
    Move,
}

/// Which pointer button started a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        platform: false,
    };

    pub const MULTI: Modifiers = Modifiers {
        shift: false,
        control: true,
        platform: false,
    };

    /// Any modifier that extends the selection instead of replacing it.
    pub fn multi_select(&self) -> bool {
        self.shift || self.control || self.platform
    }
}

/// What the pointer went down on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Item(ItemId),
}
