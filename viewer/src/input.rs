//! Input model: keys, mouse buttons, cursors, and the drag-pan state machine.
//!
//! `DragState` is the active gesture tracked between mouse-down and mouse-up.
//! It captures the pointer position and the container's scroll offset at the
//! start of the drag so every move can be turned into an absolute scroll
//! position without accumulating error.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Point, ScrollOffset};

/// A keyboard key as reported by the browser (e.g. `"ArrowLeft"`, `"+"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Viewer command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    PreviousPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    DismissInfo,
}

impl KeyCommand {
    /// Left/Right arrows page, `+`/`=` zoom in, `-` zooms out, Escape closes
    /// the map-only info.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.as_str() {
            "ArrowLeft" => Some(Self::PreviousPage),
            "ArrowRight" => Some(Self::NextPage),
            "+" | "=" => Some(Self::ZoomIn),
            "-" => Some(Self::ZoomOut),
            "Escape" => Some(Self::DismissInfo),
            _ => None,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// What the pointer landed on at mouse-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The page image or empty container space.
    Background,
    /// An overlay hit-target; never starts a drag.
    Overlay,
}

/// Cursor the host should show over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Zoomed in and ready to pan.
    Grab,
    /// Pan in progress.
    Grabbing,
}

impl Cursor {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Drag-pan gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The user is panning the zoomed page by dragging the background.
    Panning {
        /// Pointer position at mouse-down.
        start: Point,
        /// Container scroll offset at mouse-down.
        scroll_origin: ScrollOffset,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Scroll position for the pointer at `pt`, or `None` when idle.
    ///
    /// Pointer travel is scaled by `multiplier` and subtracted from the origin
    /// so the content follows the pointer.
    #[must_use]
    pub fn scroll_for(&self, pt: Point, multiplier: f64) -> Option<ScrollOffset> {
        match *self {
            Self::Idle => None,
            Self::Panning { start, scroll_origin } => Some(ScrollOffset {
                left: scroll_origin.left - (pt.x - start.x) * multiplier,
                top: scroll_origin.top - (pt.y - start.y) * multiplier,
            }),
        }
    }
}
