//! One clickable overlay on the page stage.

use leptos::prelude::*;
use viewer::overlay::RenderedOverlay;

use crate::util::style::{overlay_class, overlay_style};
use crate::util::viewer_host::ViewerHost;

/// Pin or area highlight positioned in natural image pixels.
///
/// Hit-testing is identical for both shapes; only the styling differs. The
/// element is keyed by identity and position, so hover and selection only
/// toggle classes on the existing button.
#[component]
pub fn OverlayMarker(overlay: RenderedOverlay, host: ViewerHost) -> impl IntoView {
    let label = overlay.hover_label();
    let is_pin = overlay.is_point_marker;
    let title = overlay.label.clone();
    let key = overlay.key.clone();
    let key_enter = overlay.key.clone();
    let key_leave = overlay.key.clone();
    let map_only_name = overlay.is_map_only().then(|| overlay.label.clone());

    let highlight = Memo::new(move |_| {
        host.view.with(|snapshot| {
            let hovered = snapshot.is_hovered(&key);
            let selected = map_only_name.as_deref().is_some_and(|name| snapshot.is_selected(name));
            (hovered, selected)
        })
    });
    let base = StoredValue::new(overlay);
    let highlighted = move || {
        let (hovered, selected) = highlight.get();
        base.with_value(|overlay| RenderedOverlay { hovered, selected, ..overlay.clone() })
    };

    let on_enter = move |_| {
        let key = key_enter.clone();
        host.run(move |core| core.on_overlay_enter(key));
    };
    let on_leave = move |_| host.run(|core| core.on_overlay_leave(&key_leave));
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        base.with_value(|overlay| host.run(|core| core.on_overlay_click(overlay)));
    };

    view! {
        <button
            type="button"
            class=move || overlay_class(&highlighted())
            style=move || overlay_style(&highlighted())
            aria-label=title
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=on_click
        >
            {is_pin.then(|| view! { <span class="map-overlay__pin" aria-hidden="true"></span> })}
            {move || {
                highlight
                    .get()
                    .0
                    .then(|| view! { <span class="map-overlay__label">{label.clone()}</span> })
            }}
        </button>
    }
}
