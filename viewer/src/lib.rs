//! Map viewer engine for the campus map.
//!
//! Everything the viewer decides lives here: which page is shown, the zoom
//! level, where each overlay sits in natural image pixels, what a click on an
//! overlay means, how a drag pans the zoomed page and when a window resize
//! should trigger a re-measure. Input handlers on [`engine::ViewerCore`] return
//! [`engine::Action`]s; the Leptos component in the `client` crate applies them
//! to the DOM and forwards navigation to the caller.
//!
//! Overlay geometry is computed once, in natural pixels. Zoom is applied to the
//! page wrapper as a whole, so overlays scale with the image without being
//! recomputed.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::ViewerCore`] state machine and the [`engine::Action`] vocabulary |
//! | [`overlay`] | Resolving registry placements into positioned, clickable overlays |
//! | [`geometry`] | Natural sizes, pixel rectangles and percent-to-pixel conversion |
//! | [`input`] | Keys, mouse buttons, cursors and the drag-pan gesture |
//! | [`debounce`] | Token bookkeeping for the resize debounce |
//! | [`config`] | Per-instance tunables loaded from JSON |
//! | [`dom`] | Reading natural sizes off `<img>` elements |
//! | [`consts`] | Zoom limits, marker size, z-indices and timings |

pub mod config;
pub mod consts;
pub mod debounce;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod overlay;
