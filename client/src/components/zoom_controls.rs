//! Zoom buttons, continuous zoom slider and the fullscreen toggle.

use leptos::prelude::*;

use viewer::engine::ViewerCore;

use crate::state::map_view::MapViewState;
use crate::util::viewer_host::ViewerHost;

#[component]
pub fn ZoomControls(host: ViewerHost) -> impl IntoView {
    let snapshot = host.view;
    let limits = host.zoom_limits();
    let zoom = move || snapshot.with(|v| v.zoom_percent);
    let zoom_label = move || snapshot.with(MapViewState::zoom_label);
    let fullscreen_label = move || {
        if snapshot.with(|v| v.is_fullscreen) {
            "Exit fullscreen"
        } else {
            "Fullscreen"
        }
    };

    let on_slider = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            host.run(|core| core.set_zoom(value));
        }
    };

    view! {
        <div class="map-viewer__zoom">
            <button
                type="button"
                class="map-viewer__zoom-button"
                aria-label="Zoom out"
                disabled=move || zoom() <= limits.min
                on:click=move |_| host.run(ViewerCore::zoom_out)
            >
                "−"
            </button>
            <input
                type="range"
                class="map-viewer__zoom-slider"
                aria-label="Zoom"
                min=limits.min.to_string()
                max=limits.max.to_string()
                step="1"
                prop:value=move || zoom().to_string()
                on:input=on_slider
            />
            <button
                type="button"
                class="map-viewer__zoom-button"
                aria-label="Zoom in"
                disabled=move || zoom() >= limits.max
                on:click=move |_| host.run(ViewerCore::zoom_in)
            >
                "+"
            </button>
            <span class="map-viewer__zoom-label">{zoom_label}</span>
            <button
                type="button"
                class="map-viewer__fullscreen"
                on:click=move |_| host.run(|core| core.toggle_fullscreen())
            >
                {fullscreen_label}
            </button>
        </div>
    }
}
