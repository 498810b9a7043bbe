//! Glue between `ViewerCore` and the browser.
//!
//! ARCHITECTURE
//! ============
//! `ViewerHost` is a `Copy` handle over the component's reactive resources:
//! the core (non-reactive store), the render snapshot signal, element refs,
//! the resize timer and the caller's callbacks. Event handlers call
//! [`ViewerHost::run`] with a core method; the resulting actions are applied
//! here and the snapshot is refreshed once per batch.

use leptos::html::{Div, Img};
use leptos::prelude::*;
use viewer::config::ZoomLimits;
use viewer::engine::{Action, ImageGeneration, ViewerCore};
use viewer::overlay::{KnownLocation, MapOnlyInfo, RenderedOverlay};

use crate::state::map_view::MapViewState;
use crate::util::resize_timer::ResizeTimer;
use crate::util::{dom, fullscreen};

#[derive(Clone, Copy)]
pub struct ViewerHost {
    core: StoredValue<ViewerCore>,
    pub view: RwSignal<MapViewState>,
    pub root: NodeRef<Div>,
    pub viewport: NodeRef<Div>,
    pub image: NodeRef<Img>,
    resize_timer: ResizeTimer,
    on_location_click: Callback<String>,
    on_map_only_location_click: Callback<MapOnlyInfo>,
    on_info_dismissed: Option<Callback<()>>,
}

impl ViewerHost {
    pub fn new(
        core: ViewerCore,
        on_location_click: Callback<String>,
        on_map_only_location_click: Callback<MapOnlyInfo>,
        on_info_dismissed: Option<Callback<()>>,
    ) -> Self {
        let view = RwSignal::new(MapViewState::capture(&core));
        Self {
            core: StoredValue::new(core),
            view,
            root: NodeRef::new(),
            viewport: NodeRef::new(),
            image: NodeRef::new(),
            resize_timer: ResizeTimer::new(),
            on_location_click,
            on_map_only_location_click,
            on_info_dismissed,
        }
    }

    /// Run one core handler and apply what it returns.
    pub fn run(self, handler: impl FnOnce(&mut ViewerCore) -> Vec<Action>) {
        let Some(actions) = self.core.try_update_value(handler) else {
            return;
        };
        self.apply(actions);
        self.sync();
    }

    #[must_use]
    pub fn overlays(self, locations: &[KnownLocation]) -> Vec<RenderedOverlay> {
        self.core
            .try_with_value(|core| core.overlays(locations))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn zoom_limits(self) -> ZoomLimits {
        self.core
            .try_with_value(|core| core.config.zoom)
            .unwrap_or_default()
    }

    /// Measure the page image shown for `generation`.
    pub fn measure_image(self, generation: ImageGeneration) {
        let Some(image) = self.image.get_untracked() else {
            return;
        };
        self.run(|core| viewer::dom::measure(core, &image, generation));
    }

    fn sync(self) {
        let Some(next) = self.core.try_with_value(MapViewState::capture) else {
            return;
        };
        if self.view.try_with_untracked(|current| *current != next) == Some(true) {
            self.view.set(next);
        }
    }

    fn apply(self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ScrollTo(offset) => dom::scroll_to(self.viewport, offset),
                Action::NavigateTo { location_id } => self.on_location_click.run(location_id),
                Action::ShowMapOnlyInfo(info) => self.on_map_only_location_click.run(info),
                Action::InfoDismissed => {
                    if let Some(callback) = self.on_info_dismissed {
                        callback.run(());
                    }
                }
                Action::RequestFullscreen => {
                    if let Err(reason) = fullscreen::request(self.root) {
                        self.run(|core| core.on_fullscreen_error(&reason));
                    }
                }
                Action::ExitFullscreen => fullscreen::exit(),
                Action::ScheduleResize { token, delay_ms } => {
                    self.resize_timer
                        .schedule(delay_ms, move || self.run(|core| core.on_resize_elapsed(token)));
                }
                Action::CancelResize => self.resize_timer.cancel(),
                Action::RemeasureImage { generation } => self.measure_image(generation),
                // Snapshot-driven: the image src, zoom, cursor and overlays all
                // re-render from `view` after the batch.
                Action::PageChanged { .. }
                | Action::ZoomChanged(_)
                | Action::SetCursor(_)
                | Action::RenderNeeded => {}
            }
        }
    }
}
