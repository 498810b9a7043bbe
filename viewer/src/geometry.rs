//! Percent-to-pixel conversion for overlay placement.
//!
//! Overlays are positioned in the page image's *natural* pixel space, inside
//! the same transformed container as the image. Zoom is a CSS scale on that
//! container, so nothing here depends on the zoom level.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use placements::Position;
use serde::{Deserialize, Serialize};

/// A point in container (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scroll position of the viewport container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

/// Intrinsic pixel dimensions of a decoded page image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaturalSize {
    pub width: f64,
    pub height: f64,
}

impl NaturalSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    ///
    /// A failed or not-yet-decoded image reports `0 x 0`, which must never be
    /// used to place overlays.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in natural image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// CSS declarations for an absolutely positioned box.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Convert a percentage placement into a pixel rectangle for `size`.
///
/// Missing `width`/`height` fall back to `default_marker_percent` of the
/// corresponding dimension, which gives point markers a small hit target.
#[must_use]
pub fn pixel_rect(position: &Position, size: NaturalSize, default_marker_percent: f64) -> PixelRect {
    let width_pct = position.width.unwrap_or(default_marker_percent);
    let height_pct = position.height.unwrap_or(default_marker_percent);
    PixelRect {
        left: percent_of(position.x, size.width),
        top: percent_of(position.y, size.height),
        width: percent_of(width_pct, size.width),
        height: percent_of(height_pct, size.height),
    }
}

/// `pct` percent of `extent`.
#[must_use]
pub fn percent_of(pct: f64, extent: f64) -> f64 {
    (pct / 100.0) * extent
}
