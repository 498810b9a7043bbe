//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MapViewer` is the public surface; the rest are pieces of its chrome plus
//! the info panel the host page shows for map-only locations.

pub mod info_panel;
pub mod map_viewer;
pub mod overlay_marker;
pub mod page_nav;
pub mod zoom_controls;
