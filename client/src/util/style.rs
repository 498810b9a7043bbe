//! Inline style strings for the viewer's stage, sizer and overlays.
//!
//! Overlays are positioned in natural image pixels inside a stage that is
//! exactly the image's natural size. Zoom scales the stage with a CSS
//! transform; the sizer around it takes the scaled footprint so the viewport
//! can scroll over it.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use viewer::geometry::NaturalSize;
use viewer::input::Cursor;
use viewer::overlay::RenderedOverlay;

#[must_use]
pub fn zoom_factor(zoom_percent: u16) -> f64 {
    f64::from(zoom_percent) / 100.0
}

/// Footprint of the zoomed stage; empty until the image is measured.
#[must_use]
pub fn sizer_style(size: Option<NaturalSize>, zoom_percent: u16) -> String {
    let Some(size) = size.filter(NaturalSize::is_measurable) else {
        return String::new();
    };
    let scale = zoom_factor(zoom_percent);
    format!("width: {:.2}px; height: {:.2}px;", size.width * scale, size.height * scale)
}

#[must_use]
pub fn stage_style(size: Option<NaturalSize>, zoom_percent: u16) -> String {
    let transform = format!("transform: scale({}); transform-origin: 0 0;", zoom_factor(zoom_percent));
    match size.filter(NaturalSize::is_measurable) {
        Some(size) => format!("width: {:.2}px; height: {:.2}px; {transform}", size.width, size.height),
        None => transform,
    }
}

#[must_use]
pub fn viewport_style(cursor: Cursor) -> String {
    format!("cursor: {};", cursor.css())
}

/// Element identity for an overlay: its key and position. Hover and selection
/// are not part of it.
#[must_use]
pub fn overlay_identity(overlay: &RenderedOverlay) -> (String, String) {
    (overlay.key.to_string(), overlay.rect.css())
}

#[must_use]
pub fn overlay_style(overlay: &RenderedOverlay) -> String {
    format!("{} z-index: {};", overlay.rect.css(), overlay.z_index())
}

#[must_use]
pub fn overlay_class(overlay: &RenderedOverlay) -> String {
    let mut class = String::from("map-overlay");
    class.push_str(if overlay.is_point_marker { " map-overlay--pin" } else { " map-overlay--area" });
    if overlay.is_map_only() {
        class.push_str(" map-overlay--map-only");
    }
    if overlay.hovered {
        class.push_str(" map-overlay--hovered");
    }
    if overlay.selected {
        class.push_str(" map-overlay--selected");
    }
    class
}
