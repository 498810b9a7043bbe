//! Render-facing snapshot of one viewer instance.
//!
//! ARCHITECTURE
//! ============
//! `ViewerCore` is the authority for viewer state and lives in a non-reactive
//! store. After every batch of actions the host captures this snapshot into a
//! signal, so chrome (page dots, zoom controls, overlays) re-renders only when
//! something visible actually changed.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use viewer::engine::{ImageGeneration, ViewerCore};
use viewer::geometry::NaturalSize;
use viewer::input::Cursor;
use viewer::overlay::{MapOnlyInfo, OverlayKey};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapViewState {
    pub page_index: usize,
    pub page_count: usize,
    pub zoom_percent: u16,
    pub is_fullscreen: bool,
    pub cursor: Cursor,
    pub natural_size: Option<NaturalSize>,
    pub hovered: Option<OverlayKey>,
    pub selected_map_only: Option<MapOnlyInfo>,
    /// Tags load events of the page image currently shown.
    pub generation: ImageGeneration,
}

impl MapViewState {
    #[must_use]
    pub fn capture(core: &ViewerCore) -> Self {
        Self {
            page_index: core.state.current_page_index,
            page_count: core.page_count(),
            zoom_percent: core.state.zoom_percent,
            is_fullscreen: core.state.is_fullscreen,
            cursor: core.cursor(),
            natural_size: core.state.natural_size,
            hovered: core.state.hovered.clone(),
            selected_map_only: core.state.selected_map_only.clone(),
            generation: core.image_generation(),
        }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// "Page 2 of 5", or an empty string when there are no pages.
    #[must_use]
    pub fn page_label(&self) -> String {
        if self.page_count == 0 {
            return String::new();
        }
        format!("Page {} of {}", self.page_index + 1, self.page_count)
    }

    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent)
    }

    #[must_use]
    pub fn is_hovered(&self, key: &OverlayKey) -> bool {
        self.hovered.as_ref() == Some(key)
    }

    /// Whether `name` is the map-only location whose info panel is open.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_map_only
            .as_ref()
            .is_some_and(|info| info.name == name)
    }
}
