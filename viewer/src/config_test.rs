use super::*;

#[test]
fn defaults_match_stock_viewer() {
    let config = ViewerConfig::default();
    assert_eq!(config.zoom, ZoomLimits { min: 50, max: 300, step: 25, default: 100 });
    assert!((config.default_marker_percent - 2.0).abs() < f64::EPSILON);
    assert!((config.drag_multiplier - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.resize_debounce_ms, 100);
    assert!(config.expected_page_sizes.is_empty());
    config.validate().expect("defaults are valid");
}

#[test]
fn empty_object_parses_to_defaults() {
    let config = ViewerConfig::from_json("{}").expect("parse");
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = ViewerConfig::from_json(
        r#"{
            "zoom": {"max": 400},
            "resize_debounce_ms": 250,
            "expected_page_sizes": [{"width": 1113.0, "height": 2955.0}, null]
        }"#,
    )
    .expect("parse");
    assert_eq!(config.zoom.max, 400);
    assert_eq!(config.zoom.min, 50);
    assert_eq!(config.zoom.step, 25);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.expected_size(0), Some(NaturalSize::new(1113.0, 2955.0)));
    assert_eq!(config.expected_size(1), None);
    assert_eq!(config.expected_size(9), None);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ViewerConfig::from_json("[1, 2").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn inverted_zoom_range_is_rejected() {
    let err = ViewerConfig::from_json(r#"{"zoom": {"min": 200, "max": 100}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidZoomRange { .. }));
}

#[test]
fn zero_step_is_rejected() {
    let err = ViewerConfig::from_json(r#"{"zoom": {"step": 0}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::ZeroZoomStep));
}

#[test]
fn bad_marker_and_drag_values_are_rejected() {
    let err = ViewerConfig::from_json(r#"{"default_marker_percent": 0.0}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidMarkerPercent(_)));
    let err = ViewerConfig::from_json(r#"{"drag_multiplier": -1.0}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidDragMultiplier(_)));
}

// --- ZoomLimits ---

#[test]
fn step_in_caps_at_max() {
    let zoom = ZoomLimits::default();
    assert_eq!(zoom.step_in(100), 125);
    assert_eq!(zoom.step_in(290), 300);
    assert_eq!(zoom.step_in(300), 300);
}

#[test]
fn step_out_floors_at_min() {
    let zoom = ZoomLimits::default();
    assert_eq!(zoom.step_out(100), 75);
    assert_eq!(zoom.step_out(60), 50);
    assert_eq!(zoom.step_out(50), 50);
}

#[test]
fn slider_values_round_and_clamp() {
    let zoom = ZoomLimits::default();
    assert_eq!(zoom.clamp_slider(137.4), Some(137));
    assert_eq!(zoom.clamp_slider(137.6), Some(138));
    assert_eq!(zoom.clamp_slider(10.0), Some(50));
    assert_eq!(zoom.clamp_slider(9000.0), Some(300));
    assert_eq!(zoom.clamp_slider(f64::NAN), None);
    assert_eq!(zoom.clamp_slider(f64::INFINITY), None);
}

#[test]
fn inverted_limits_clamp_to_max_without_panicking() {
    let zoom = ZoomLimits { min: 300, max: 50, step: 25, default: 100 };
    assert_eq!(zoom.clamp(100), 50);
    assert_eq!(zoom.step_in(100), 50);
    assert_eq!(zoom.clamp_slider(120.0), Some(50));
}
