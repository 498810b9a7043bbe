//! Campus map viewer: one page image at a time with clickable overlays.
//!
//! ARCHITECTURE
//! ============
//! The component owns a `ViewerCore` through a [`ViewerHost`] and renders
//! from the host's snapshot signal. The page image sits on a stage sized to
//! its natural pixels; overlays are positioned in those same pixels and the
//! stage is scaled as a whole for zoom. Global listeners and the resize timer
//! are tied to the component's owner and released when it unmounts.

use leptos::prelude::*;
use placements::Registry;
use viewer::config::ViewerConfig;
use viewer::engine::ViewerCore;
use viewer::input::{Button, Cursor};
use viewer::overlay::{KnownLocation, MapOnlyInfo};

use crate::components::overlay_marker::OverlayMarker;
use crate::components::page_nav::PageNav;
use crate::components::zoom_controls::ZoomControls;
use crate::state::map_view::MapViewState;
use crate::util::style::{overlay_identity, sizer_style, stage_style, viewport_style};
use crate::util::viewer_host::ViewerHost;
use crate::util::{dom, listeners};

/// Paged campus map with overlays for known and map-only locations.
///
/// `on_location_click` receives the id of a navigable location; the caller is
/// expected to switch to its 360° view. `on_map_only_location_click` receives
/// the details of a location that exists only on the map. Both are
/// fire-and-forget. Escape clears the map-only highlight and reports it through
/// `on_info_dismissed`.
#[component]
pub fn MapViewer(
    /// Page image URLs, in page order.
    #[prop(into)]
    pages: Signal<Vec<String>>,
    /// Locations that have a 360° view.
    #[prop(into)]
    locations: Signal<Vec<KnownLocation>>,
    /// Passed through to the markup; not interpreted.
    #[prop(into)]
    place_id: String,
    on_location_click: Callback<String>,
    on_map_only_location_click: Callback<MapOnlyInfo>,
    /// The caller's currently selected map-only location, highlighted on the map.
    #[prop(optional, into)]
    selected_map_only: Option<Signal<Option<MapOnlyInfo>>>,
    #[prop(optional, into)] on_info_dismissed: Option<Callback<()>>,
    #[prop(optional)] config: Option<ViewerConfig>,
    /// Placement table; the builtin campus table when omitted.
    #[prop(optional)]
    registry: Option<Registry>,
) -> impl IntoView {
    let page_count = pages.with_untracked(Vec::len);
    let core = ViewerCore::new(registry.unwrap_or_default(), config.unwrap_or_default(), page_count);
    let host = ViewerHost::new(core, on_location_click, on_map_only_location_click, on_info_dismissed);
    let snapshot = host.view;

    listeners::install(host);

    Effect::new(move || {
        let count = pages.with(Vec::len);
        host.run(|core| core.set_page_count(count));
    });

    if let Some(selected) = selected_map_only {
        Effect::new(move || {
            let info = selected.get();
            host.run(|core| core.set_selected_map_only(info));
        });
    }

    // An image that finished loading before hydration never fires `load`.
    Effect::new(move || {
        if host.image.get().is_some() {
            host.measure_image(snapshot.with_untracked(|v| v.generation));
        }
    });

    // Only a page change (new generation or URL) re-creates the `<img>`.
    let page_image = Memo::new(move |_| {
        let (index, generation) = snapshot.with(|v| (v.page_index, v.generation));
        pages.with(|urls| urls.get(index).cloned().map(|src| (src, generation)))
    });

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        let pt = dom::client_point(&ev);
        let button = Button::from_dom(ev.button());
        let target = dom::pointer_target(&ev);
        let scroll = dom::scroll_offset(host.viewport);
        host.run(|core| core.on_mouse_down(pt, button, target, scroll));
        if snapshot.with_untracked(|v| v.cursor) == Cursor::Grabbing {
            ev.prevent_default();
        }
    };

    let overlays = move || {
        snapshot.track();
        locations.with(|known| host.overlays(known))
    };

    view! {
        <div class="map-viewer" node_ref=host.root data-place-id=place_id>
            <div
                class="map-viewer__viewport"
                node_ref=host.viewport
                style=move || snapshot.with(|v| viewport_style(v.cursor))
                on:mousedown=on_mouse_down
                on:mouseleave=move |_| host.run(ViewerCore::on_container_leave)
            >
                <div
                    class="map-viewer__sizer"
                    style=move || snapshot.with(|v| sizer_style(v.natural_size, v.zoom_percent))
                >
                    <div
                        class="map-viewer__stage"
                        style=move || snapshot.with(|v| stage_style(v.natural_size, v.zoom_percent))
                    >
                        {move || {
                            page_image
                                .get()
                                .map(|(src, generation)| {
                                    view! {
                                        <img
                                            class="map-viewer__image"
                                            node_ref=host.image
                                            src=src
                                            alt=move || snapshot.with(MapViewState::page_label)
                                            draggable="false"
                                            on:load=move |_| host.measure_image(generation)
                                            on:error=move |_| host.run(|core| core.on_image_error(generation))
                                        />
                                    }
                                })
                        }}
                        <For
                            each=overlays
                            key=overlay_identity
                            children=move |overlay| view! { <OverlayMarker overlay=overlay host=host /> }
                        />
                    </div>
                </div>
            </div>
            <div class="map-viewer__controls">
                <PageNav host=host />
                <ZoomControls host=host />
            </div>
        </div>
    }
}
