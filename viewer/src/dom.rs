//! Browser-side helpers for feeding image measurements into [`ViewerCore`].

use web_sys::HtmlImageElement;

use crate::engine::{Action, ImageGeneration, ViewerCore};
use crate::geometry::NaturalSize;

/// The decoded pixel size of `image`; zero while it has not loaded.
#[must_use]
pub fn natural_size_of(image: &HtmlImageElement) -> NaturalSize {
    NaturalSize::new(f64::from(image.natural_width()), f64::from(image.natural_height()))
}

/// Report `image`'s current natural size for `generation`.
///
/// Used both from the image's `load` event and after a debounced window
/// resize. An image that has not finished decoding is skipped rather than
/// reported as zero-sized.
pub fn measure(core: &mut ViewerCore, image: &HtmlImageElement, generation: ImageGeneration) -> Vec<Action> {
    if !image.complete() {
        return Vec::new();
    }
    core.on_image_loaded(generation, natural_size_of(image))
}
