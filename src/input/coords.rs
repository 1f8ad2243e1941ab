//! Coordinate conversion between the host's screen space and the canvas.
//!
//! There is no zoom: canvas = screen - pan offset.

use crate::types::Point;

#[inline]
pub fn screen_to_canvas(screen: Point, pan_offset: Point) -> Point {
    screen - pan_offset
}

#[inline]
pub fn canvas_to_screen(canvas: Point, pan_offset: Point) -> Point {
    canvas + pan_offset
}
