//! Shared numeric constants for the viewer crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom level, in percent.
pub const ZOOM_MIN_PERCENT: u16 = 50;

/// Largest zoom level, in percent.
pub const ZOOM_MAX_PERCENT: u16 = 300;

/// Change applied by one zoom button press or key press.
pub const ZOOM_STEP_PERCENT: u16 = 25;

/// Zoom level of a freshly mounted viewer.
pub const ZOOM_DEFAULT_PERCENT: u16 = 100;

/// Drag-panning is enabled only above this zoom level.
pub const PAN_THRESHOLD_PERCENT: u16 = 100;

// ── Geometry ────────────────────────────────────────────────────

/// Width/height, in percent of the page, used when a placement omits them.
pub const DEFAULT_MARKER_PERCENT: f64 = 2.0;

// ── Interaction ─────────────────────────────────────────────────

/// Scroll distance applied per pixel of pointer travel while drag-panning.
pub const DRAG_SCROLL_MULTIPLIER: f64 = 2.0;

/// Quiet period before a window resize triggers a re-measure.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Stacking order of a resting overlay.
pub const OVERLAY_Z_INDEX: i32 = 10;

/// Stacking order of the hovered (or selected) overlay, above its neighbours.
pub const OVERLAY_RAISED_Z_INDEX: i32 = 20;
