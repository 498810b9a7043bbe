#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::DEFAULT_MARKER_PERCENT;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

// --- NaturalSize ---

#[test]
fn natural_size_measurable_requires_positive_dimensions() {
    assert!(NaturalSize::new(1113.0, 2955.0).is_measurable());
    assert!(!NaturalSize::new(0.0, 2955.0).is_measurable());
    assert!(!NaturalSize::new(1113.0, 0.0).is_measurable());
    assert!(!NaturalSize::new(-1.0, 10.0).is_measurable());
    assert!(!NaturalSize::new(f64::NAN, 10.0).is_measurable());
    assert!(!NaturalSize::new(f64::INFINITY, 10.0).is_measurable());
}

// --- pixel_rect ---

#[test]
fn cr101_example_matches_expected_rectangle() {
    let position = Position::area(1, 56.9632, 17.1235, 21.4735, 5.7191);
    let rect = pixel_rect(&position, NaturalSize::new(1113.0, 2955.0), DEFAULT_MARKER_PERCENT);
    assert!(within(rect.left, 633.79, 0.5), "left = {}", rect.left);
    assert!(within(rect.top, 506.2, 0.5), "top = {}", rect.top);
    assert!(within(rect.width, 238.8, 0.5), "width = {}", rect.width);
    assert!(within(rect.height, 168.9, 0.5), "height = {}", rect.height);
}

#[test]
fn area_uses_exact_formula() {
    let position = Position::area(1, 10.0, 20.0, 30.0, 40.0);
    let rect = pixel_rect(&position, NaturalSize::new(200.0, 500.0), DEFAULT_MARKER_PERCENT);
    assert!(approx_eq(rect.left, 20.0));
    assert!(approx_eq(rect.top, 100.0));
    assert!(approx_eq(rect.width, 60.0));
    assert!(approx_eq(rect.height, 200.0));
}

#[test]
fn point_marker_defaults_to_two_percent() {
    let position = Position::point(1, 50.0, 50.0);
    let rect = pixel_rect(&position, NaturalSize::new(1000.0, 400.0), DEFAULT_MARKER_PERCENT);
    assert!(approx_eq(rect.left, 500.0));
    assert!(approx_eq(rect.top, 200.0));
    assert!(approx_eq(rect.width, 20.0));
    assert!(approx_eq(rect.height, 8.0));
}

#[test]
fn missing_single_extent_falls_back_independently() {
    let position = Position { page: 1, x: 0.0, y: 0.0, width: Some(10.0), height: None };
    let rect = pixel_rect(&position, NaturalSize::new(1000.0, 1000.0), DEFAULT_MARKER_PERCENT);
    assert!(approx_eq(rect.width, 100.0));
    assert!(approx_eq(rect.height, 20.0));
}

#[test]
fn pixel_rect_is_deterministic() {
    let position = Position::area(3, 8.4457, 14.7208, 24.2588, 12.1827);
    let size = NaturalSize::new(2480.0, 3508.0);
    let first = pixel_rect(&position, size, DEFAULT_MARKER_PERCENT);
    for _ in 0..10 {
        assert_eq!(pixel_rect(&position, size, DEFAULT_MARKER_PERCENT), first);
    }
}

#[test]
fn full_page_area_covers_the_image() {
    let position = Position::area(1, 0.0, 0.0, 100.0, 100.0);
    let rect = pixel_rect(&position, NaturalSize::new(640.0, 480.0), DEFAULT_MARKER_PERCENT);
    assert!(approx_eq(rect.left + rect.width, 640.0));
    assert!(approx_eq(rect.top + rect.height, 480.0));
}

// --- PixelRect ---

#[test]
fn rect_css_formats_pixels() {
    let rect = PixelRect { left: 1.0, top: 2.5, width: 3.25, height: 4.0 };
    assert_eq!(rect.css(), "left: 1.00px; top: 2.50px; width: 3.25px; height: 4.00px;");
}

// --- ScrollOffset ---

#[test]
fn scroll_offset_default_is_origin() {
    let offset = ScrollOffset::default();
    assert_eq!(offset.left, 0.0);
    assert_eq!(offset.top, 0.0);
}
