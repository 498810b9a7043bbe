//! Window-level listeners owned by one mounted viewer.
//!
//! Keyboard shortcuts, drag tracking, resize and fullscreen changes are
//! observed on `window` so they keep working when the pointer leaves the
//! viewport mid-drag or the user presses Esc in fullscreen. Every handle is
//! removed in `on_cleanup`, so no listener outlives the component.

use crate::util::viewer_host::ViewerHost;

/// Attach the viewer's global listeners for the lifetime of the current owner.
pub fn install(host: ViewerHost) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use leptos::prelude::*;
        use viewer::engine::ViewerCore;
        use viewer::input::Key;

        use crate::util::{dom, fullscreen};

        let handles = vec![
            window_event_listener(ev::resize, move |_| host.run(ViewerCore::on_window_resize)),
            window_event_listener(ev::keydown, move |ev| {
                if typing_in_field(&ev) {
                    return;
                }
                let key = Key::new(ev.key());
                host.run(|core| core.on_key_down(&key));
            }),
            window_event_listener(ev::mousemove, move |ev| {
                let pt = dom::client_point(&ev);
                host.run(|core| core.on_mouse_move(pt));
            }),
            window_event_listener(ev::mouseup, move |_| host.run(ViewerCore::on_mouse_up)),
            // `fullscreenchange` bubbles from the document to the window.
            window_event_listener_untyped("fullscreenchange", move |_| {
                let active = fullscreen::is_active(host.root);
                host.run(|core| core.on_fullscreen_change(active));
            }),
            window_event_listener_untyped("fullscreenerror", move |_| {
                host.run(|core| core.on_fullscreen_error("platform rejected the request"));
            }),
        ];

        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
            host.run(ViewerCore::teardown);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = host;
    }
}

/// Keys typed into form fields (the zoom slider included) are not shortcuts.
#[cfg(feature = "hydrate")]
fn typing_in_field(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}
