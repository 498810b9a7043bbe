//! Viewer configuration.
//!
//! Every field has a default matching the stock campus viewer, so an empty
//! JSON object (or no config at all) is valid. Hosts that embed the viewer in
//! a different layout can tune the zoom range, marker size and drag feel.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MARKER_PERCENT, DRAG_SCROLL_MULTIPLIER, RESIZE_DEBOUNCE_MS, ZOOM_DEFAULT_PERCENT, ZOOM_MAX_PERCENT,
    ZOOM_MIN_PERCENT, ZOOM_STEP_PERCENT,
};
use crate::geometry::NaturalSize;

/// Error returned by [`ViewerConfig::from_json`] and [`ViewerConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("zoom limits must satisfy min <= default <= max (got min {min}, default {default}, max {max})")]
    InvalidZoomRange { min: u16, default: u16, max: u16 },
    #[error("zoom step must be greater than zero")]
    ZeroZoomStep,
    #[error("default marker size must be a percentage in (0, 100], got {0}")]
    InvalidMarkerPercent(f64),
    #[error("drag multiplier must be finite and positive, got {0}")]
    InvalidDragMultiplier(f64),
}

/// Zoom range and step, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: u16,
    pub max: u16,
    pub step: u16,
    pub default: u16,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: ZOOM_MIN_PERCENT,
            max: ZOOM_MAX_PERCENT,
            step: ZOOM_STEP_PERCENT,
            default: ZOOM_DEFAULT_PERCENT,
        }
    }
}

impl ZoomLimits {
    /// Clamp into `min..=max`; `max` wins if the limits are inverted.
    #[must_use]
    pub fn clamp(&self, percent: u16) -> u16 {
        percent.max(self.min).min(self.max)
    }

    /// One step up from `current`, capped at `max`.
    #[must_use]
    pub fn step_in(&self, current: u16) -> u16 {
        self.clamp(current.saturating_add(self.step))
    }

    /// One step down from `current`, floored at `min`.
    #[must_use]
    pub fn step_out(&self, current: u16) -> u16 {
        self.clamp(current.saturating_sub(self.step))
    }

    /// Round and clamp a continuous slider value; `None` for NaN or infinity.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp_slider(&self, value: f64) -> Option<u16> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.round().max(f64::from(self.min)).min(f64::from(self.max));
        Some(clamped as u16)
    }
}

/// Tunables for one viewer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub zoom: ZoomLimits,
    /// Width/height used for placements that omit them, in percent.
    pub default_marker_percent: f64,
    /// Scroll distance per pixel of pointer travel while drag-panning.
    pub drag_multiplier: f64,
    /// Quiet period after the last window resize before re-measuring.
    pub resize_debounce_ms: u32,
    /// Expected natural size of each page image, by page index.
    ///
    /// Only used to log a warning when a loaded image differs; overlay
    /// geometry always uses the measured size.
    pub expected_page_sizes: Vec<Option<NaturalSize>>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            default_marker_percent: DEFAULT_MARKER_PERCENT,
            drag_multiplier: DRAG_SCROLL_MULTIPLIER,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            expected_page_sizes: Vec::new(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or the first
    /// validation failure.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomLimits { min, max, step, default } = self.zoom;
        if !(min <= default && default <= max) {
            return Err(ConfigError::InvalidZoomRange { min, default, max });
        }
        if step == 0 {
            return Err(ConfigError::ZeroZoomStep);
        }
        let marker = self.default_marker_percent;
        if !marker.is_finite() || marker <= 0.0 || marker > 100.0 {
            return Err(ConfigError::InvalidMarkerPercent(marker));
        }
        let drag = self.drag_multiplier;
        if !drag.is_finite() || drag <= 0.0 {
            return Err(ConfigError::InvalidDragMultiplier(drag));
        }
        Ok(())
    }

    /// Expected natural size for `page_index`, if one is configured.
    #[must_use]
    pub fn expected_size(&self, page_index: usize) -> Option<NaturalSize> {
        self.expected_page_sizes.get(page_index).copied().flatten()
    }
}
