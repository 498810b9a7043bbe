//! The map viewer controller.
//!
//! [`ViewerCore`] owns all per-instance viewer state: page index, zoom,
//! fullscreen flag, hover and selection, drag gesture, the measured image size
//! and the resize debounce. Every input handler mutates that state and returns
//! a list of [`Action`]s for the host to carry out (swap the image, scroll the
//! container, call the caller's callbacks, arm a timer). It has no browser
//! dependencies so it can be driven directly from tests.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use placements::Registry;

use crate::config::ViewerConfig;
use crate::consts::PAN_THRESHOLD_PERCENT;
use crate::debounce::{Debounce, DebounceToken};
use crate::geometry::{NaturalSize, Point, ScrollOffset};
use crate::input::{Button, Cursor, DragState, Key, KeyCommand, PointerTarget};
use crate::overlay::{KnownLocation, MapOnlyInfo, OverlayKey, OverlayKind, OverlayQuery, RenderedOverlay, build_overlays};

/// Identifies one page-image load. Bumped on every page change so a load
/// event for an image that is no longer shown can be recognised and dropped.
pub type ImageGeneration = u64;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show page `index`; tag its load/error events with `generation`.
    PageChanged { index: usize, generation: ImageGeneration },
    ZoomChanged(u16),
    SetCursor(Cursor),
    /// Set the viewport container's scroll position.
    ScrollTo(ScrollOffset),
    /// The caller should open the 360° view of this location.
    NavigateTo { location_id: String },
    /// The caller should show the info panel for this map-only location.
    ShowMapOnlyInfo(MapOnlyInfo),
    InfoDismissed,
    RequestFullscreen,
    ExitFullscreen,
    /// Arm the resize timer, replacing any timer already armed.
    ScheduleResize { token: DebounceToken, delay_ms: u32 },
    /// Drop the armed resize timer.
    CancelResize,
    /// Read the current image's natural size again and report it.
    RemeasureImage { generation: ImageGeneration },
    RenderNeeded,
}

/// Ephemeral per-instance viewer state. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub current_page_index: usize,
    pub zoom_percent: u16,
    pub is_fullscreen: bool,
    pub hovered: Option<OverlayKey>,
    /// `None` until the current page's image has been measured.
    pub natural_size: Option<NaturalSize>,
    pub selected_map_only: Option<MapOnlyInfo>,
}

/// Core viewer state and logic, independent of the DOM.
#[derive(Debug)]
pub struct ViewerCore {
    pub registry: Registry,
    pub config: ViewerConfig,
    pub state: ViewerState,
    pub drag: DragState,
    resize: Debounce,
    page_count: usize,
    image_generation: ImageGeneration,
}

impl ViewerCore {
    /// An invalid `config` is replaced by the defaults, with a warning.
    #[must_use]
    pub fn new(registry: Registry, config: ViewerConfig, page_count: usize) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("invalid viewer config ({err}); using defaults");
                ViewerConfig::default()
            }
        };
        let zoom_percent = config.zoom.clamp(config.zoom.default);
        Self {
            registry,
            config,
            state: ViewerState {
                current_page_index: 0,
                zoom_percent,
                is_fullscreen: false,
                hovered: None,
                natural_size: None,
                selected_map_only: None,
            },
            drag: DragState::Idle,
            resize: Debounce::new(),
            page_count,
            image_generation: 0,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn last_page_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    #[must_use]
    pub fn image_generation(&self) -> ImageGeneration {
        self.image_generation
    }

    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.state.zoom_percent > PAN_THRESHOLD_PERCENT
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.drag.is_dragging() {
            Cursor::Grabbing
        } else if self.is_pannable() {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// Overlays for the current page, or none while the image is unmeasured.
    #[must_use]
    pub fn overlays(&self, locations: &[KnownLocation]) -> Vec<RenderedOverlay> {
        build_overlays(&OverlayQuery {
            registry: &self.registry,
            locations,
            page_index: self.state.current_page_index,
            natural_size: self.state.natural_size,
            hovered: self.state.hovered.as_ref(),
            selected_map_only: self
                .state
                .selected_map_only
                .as_ref()
                .map(|info| info.name.as_str()),
            default_marker_percent: self.config.default_marker_percent,
        })
    }

    // --- Pages ---

    /// The caller's page list changed length; keeps the index in range.
    pub fn set_page_count(&mut self, page_count: usize) -> Vec<Action> {
        self.page_count = page_count;
        if self.state.current_page_index > self.last_page_index() {
            return self.change_page(self.last_page_index());
        }
        Vec::new()
    }

    /// Jump to `index`, clamped to the last page.
    pub fn go_to_page(&mut self, index: usize) -> Vec<Action> {
        let target = index.min(self.last_page_index());
        if target == self.state.current_page_index {
            return Vec::new();
        }
        self.change_page(target)
    }

    pub fn next_page(&mut self) -> Vec<Action> {
        self.go_to_page(self.state.current_page_index.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Vec<Action> {
        self.go_to_page(self.state.current_page_index.saturating_sub(1))
    }

    fn change_page(&mut self, index: usize) -> Vec<Action> {
        let mut actions = Vec::new();
        self.state.current_page_index = index;
        self.state.natural_size = None;
        self.state.hovered = None;
        if self.end_drag() {
            actions.push(Action::SetCursor(self.cursor()));
        }
        if self.resize.cancel() {
            actions.push(Action::CancelResize);
        }
        self.image_generation = self.image_generation.wrapping_add(1);
        actions.push(Action::PageChanged { index, generation: self.image_generation });
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.set_zoom_percent(self.config.zoom.step_in(self.state.zoom_percent))
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.set_zoom_percent(self.config.zoom.step_out(self.state.zoom_percent))
    }

    /// Continuous slider input; rounded and clamped, NaN ignored.
    pub fn set_zoom(&mut self, value: f64) -> Vec<Action> {
        match self.config.zoom.clamp_slider(value) {
            Some(percent) => self.set_zoom_percent(percent),
            None => Vec::new(),
        }
    }

    fn set_zoom_percent(&mut self, percent: u16) -> Vec<Action> {
        let next = self.config.zoom.clamp(percent);
        if next == self.state.zoom_percent {
            return Vec::new();
        }
        self.state.zoom_percent = next;
        if !self.is_pannable() {
            self.end_drag();
        }
        vec![Action::ZoomChanged(next), Action::SetCursor(self.cursor()), Action::RenderNeeded]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match KeyCommand::from_key(key) {
            Some(KeyCommand::PreviousPage) => self.previous_page(),
            Some(KeyCommand::NextPage) => self.next_page(),
            Some(KeyCommand::ZoomIn) => self.zoom_in(),
            Some(KeyCommand::ZoomOut) => self.zoom_out(),
            Some(KeyCommand::DismissInfo) => self.dismiss_info(),
            None => Vec::new(),
        }
    }

    // --- Image measurement ---

    /// The page image for `generation` finished decoding with `size`.
    pub fn on_image_loaded(&mut self, generation: ImageGeneration, size: NaturalSize) -> Vec<Action> {
        if generation != self.image_generation {
            log::debug!(
                "ignoring image load for generation {generation} (current {})",
                self.image_generation
            );
            return Vec::new();
        }
        if !size.is_measurable() {
            log::warn!(
                "page {} image reported unusable size {}x{}; overlays suppressed",
                self.state.current_page_index + 1,
                size.width,
                size.height
            );
            return self.clear_natural_size();
        }
        self.warn_on_unexpected_size(size);
        if self.state.natural_size == Some(size) {
            return Vec::new();
        }
        self.state.natural_size = Some(size);
        vec![Action::RenderNeeded]
    }

    /// The page image for `generation` failed to load.
    pub fn on_image_error(&mut self, generation: ImageGeneration) -> Vec<Action> {
        if generation != self.image_generation {
            return Vec::new();
        }
        log::warn!(
            "page {} image failed to load; overlays suppressed",
            self.state.current_page_index + 1
        );
        self.clear_natural_size()
    }

    fn clear_natural_size(&mut self) -> Vec<Action> {
        if self.state.natural_size.take().is_some() {
            return vec![Action::RenderNeeded];
        }
        Vec::new()
    }

    fn warn_on_unexpected_size(&self, size: NaturalSize) {
        let page_index = self.state.current_page_index;
        if let Some(expected) = self.config.expected_size(page_index)
            && ((expected.width - size.width).abs() > 0.5 || (expected.height - size.height).abs() > 0.5)
        {
            log::warn!(
                "page {} image is {}x{}, expected {}x{}",
                page_index + 1,
                size.width,
                size.height,
                expected.width,
                expected.height
            );
        }
    }

    // --- Resize ---

    /// Window resized: (re)arm the debounce timer.
    pub fn on_window_resize(&mut self) -> Vec<Action> {
        let token = self.resize.schedule();
        vec![Action::ScheduleResize { token, delay_ms: self.config.resize_debounce_ms }]
    }

    /// The resize timer for `token` elapsed.
    pub fn on_resize_elapsed(&mut self, token: DebounceToken) -> Vec<Action> {
        if self.resize.fire(token) {
            return vec![Action::RemeasureImage { generation: self.image_generation }];
        }
        Vec::new()
    }

    // --- Hover and click ---

    pub fn on_overlay_enter(&mut self, key: OverlayKey) -> Vec<Action> {
        if self.state.hovered.as_ref() == Some(&key) {
            return Vec::new();
        }
        self.state.hovered = Some(key);
        vec![Action::RenderNeeded]
    }

    /// Clears the hover only if `key` is the one currently hovered.
    pub fn on_overlay_leave(&mut self, key: &OverlayKey) -> Vec<Action> {
        if self.state.hovered.as_ref() != Some(key) {
            return Vec::new();
        }
        self.state.hovered = None;
        vec![Action::RenderNeeded]
    }

    pub fn on_overlay_click(&mut self, overlay: &RenderedOverlay) -> Vec<Action> {
        match &overlay.kind {
            OverlayKind::Navigable { location_id } => {
                vec![Action::NavigateTo { location_id: location_id.clone() }]
            }
            OverlayKind::MapOnly(info) => {
                self.state.selected_map_only = Some(info.clone());
                vec![Action::ShowMapOnlyInfo(info.clone()), Action::RenderNeeded]
            }
        }
    }

    /// Sync the persisted highlight with the caller's selection.
    pub fn set_selected_map_only(&mut self, selected: Option<MapOnlyInfo>) -> Vec<Action> {
        if self.state.selected_map_only == selected {
            return Vec::new();
        }
        self.state.selected_map_only = selected;
        vec![Action::RenderNeeded]
    }

    /// Close the map-only info panel and drop its highlight.
    pub fn dismiss_info(&mut self) -> Vec<Action> {
        if self.state.selected_map_only.take().is_none() {
            return Vec::new();
        }
        vec![Action::InfoDismissed, Action::RenderNeeded]
    }

    // --- Drag-pan ---

    pub fn on_mouse_down(
        &mut self,
        pt: Point,
        button: Button,
        target: PointerTarget,
        scroll: ScrollOffset,
    ) -> Vec<Action> {
        if button != Button::Primary || target == PointerTarget::Overlay || !self.is_pannable() {
            return Vec::new();
        }
        self.drag = DragState::Panning { start: pt, scroll_origin: scroll };
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    pub fn on_mouse_move(&mut self, pt: Point) -> Vec<Action> {
        self.drag
            .scroll_for(pt, self.config.drag_multiplier)
            .map(Action::ScrollTo)
            .into_iter()
            .collect()
    }

    pub fn on_mouse_up(&mut self) -> Vec<Action> {
        if self.end_drag() {
            return vec![Action::SetCursor(self.cursor())];
        }
        Vec::new()
    }

    /// Pointer left the viewport: clear hover and end any drag.
    pub fn on_container_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.end_drag() {
            actions.push(Action::SetCursor(self.cursor()));
        }
        if self.state.hovered.take().is_some() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn end_drag(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        self.drag = DragState::Idle;
        was_dragging
    }

    // --- Fullscreen ---

    /// Ask the host to enter or leave fullscreen. The flag itself only changes
    /// when the platform reports the change via [`ViewerCore::on_fullscreen_change`].
    #[must_use]
    pub fn toggle_fullscreen(&self) -> Vec<Action> {
        if self.state.is_fullscreen {
            vec![Action::ExitFullscreen]
        } else {
            vec![Action::RequestFullscreen]
        }
    }

    /// Platform fullscreen state changed (our request, Esc, or anything else).
    pub fn on_fullscreen_change(&mut self, active: bool) -> Vec<Action> {
        if self.state.is_fullscreen == active {
            return Vec::new();
        }
        self.state.is_fullscreen = active;
        vec![Action::RenderNeeded]
    }

    /// The platform rejected a fullscreen request; the flag stays as it was.
    pub fn on_fullscreen_error(&self, reason: &str) -> Vec<Action> {
        log::warn!(
            "fullscreen {} rejected: {reason}",
            if self.state.is_fullscreen { "exit" } else { "request" }
        );
        Vec::new()
    }

    // --- Lifecycle ---

    /// Release everything tied to the mounted instance.
    pub fn teardown(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.resize.cancel() {
            actions.push(Action::CancelResize);
        }
        self.end_drag();
        self.state.hovered = None;
        actions
    }
}
