//! Reading pointer targets and scroll offsets from the viewport.

use leptos::html::Div;
use leptos::prelude::*;
use viewer::geometry::{Point, ScrollOffset};
use viewer::input::PointerTarget;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Class carried by every overlay hit-target.
pub const OVERLAY_CLASS: &str = "map-overlay";

#[must_use]
pub fn client_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Whether a mouse-down landed on an overlay or on the page background.
#[must_use]
pub fn pointer_target(ev: &leptos::ev::MouseEvent) -> PointerTarget {
    #[cfg(feature = "hydrate")]
    {
        let on_overlay = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(&format!(".{OVERLAY_CLASS}")).ok().flatten())
            .is_some();
        if on_overlay {
            return PointerTarget::Overlay;
        }
        PointerTarget::Background
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        PointerTarget::Background
    }
}

#[must_use]
pub fn scroll_offset(viewport: NodeRef<Div>) -> ScrollOffset {
    #[cfg(feature = "hydrate")]
    {
        viewport
            .get_untracked()
            .map(|el| ScrollOffset { left: f64::from(el.scroll_left()), top: f64::from(el.scroll_top()) })
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = viewport;
        ScrollOffset::default()
    }
}

pub fn scroll_to(viewport: NodeRef<Div>, offset: ScrollOffset) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = viewport.get_untracked() {
            el.scroll_to_with_x_and_y(offset.left, offset.top);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (viewport, offset);
    }
}
