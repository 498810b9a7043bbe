//! Fullscreen API wrappers for the viewer's root container.
//!
//! Requests may be rejected by the platform (no user gesture, iframe without
//! permission); the error is returned as text for the caller to log. The
//! viewer's own flag is only ever updated from `fullscreenchange`.

#[cfg(feature = "hydrate")]
use web_sys::Node;

use leptos::html::Div;
use leptos::prelude::*;

/// Ask the platform to show `root` fullscreen.
///
/// # Errors
///
/// Returns a description of the rejection when the request fails synchronously.
pub fn request(root: NodeRef<Div>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = root.get_untracked() else {
            return Err("viewer is not mounted".to_owned());
        };
        element
            .request_fullscreen()
            .map_err(|err| err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = root;
        Ok(())
    }
}

pub fn exit() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            }
        }
    }
}

/// Whether `root` is the element the platform currently shows fullscreen.
pub fn is_active(root: NodeRef<Div>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let (Some(current), Some(element)) = (document.fullscreen_element(), root.get_untracked()) else {
            return false;
        };
        let node: &Node = element.as_ref();
        current.is_same_node(Some(node))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = root;
        false
    }
}
