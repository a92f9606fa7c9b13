//! Content domain: tests for tuning loading and validation.

use std::path::Path;

use super::loader::{ContentLoadError, load_motion_params, parse_motion_params};
use super::validation::validate_params;
use crate::movement::{GameLayer, HorizontalPolicy, MotionParams};

// -----------------------------------------------------------------------------
// Loader tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_partial_file_keeps_defaults() {
    let params = parse_motion_params(
        "inline.ron",
        "(horizontal: AccelDrag, max_speed: 200.0, slide_enabled: false)",
    )
    .unwrap();

    assert_eq!(params.horizontal, HorizontalPolicy::AccelDrag);
    assert_eq!(params.max_speed, 200.0);
    assert!(!params.slide_enabled);
    assert_eq!(params.jump_cut_multiplier, MotionParams::default().jump_cut_multiplier);
    assert_eq!(params.ground_layers, vec![GameLayer::Ground]);
}

#[test]
fn test_parse_ground_check_geometry() {
    let params = parse_motion_params(
        "inline.ron",
        "(ground_check_radius: 3.5, ground_check_offset: (2.0, -30.0), ground_layers: [Ground, Default])",
    )
    .unwrap();

    assert_eq!(params.ground_check_radius, 3.5);
    assert_eq!(params.ground_check_offset.x, 2.0);
    assert_eq!(params.ground_check_offset.y, -30.0);
    assert_eq!(params.ground_layers, vec![GameLayer::Ground, GameLayer::Default]);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_motion_params("broken.ron", "(max_speed: fast)").unwrap_err();

    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(!err.is_missing_file());
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_reported_as_missing() {
    let err = load_motion_params(Path::new("does/not/exist/motion.ron")).unwrap_err();

    assert!(matches!(err, ContentLoadError::Io { .. }));
    assert!(err.is_missing_file());
}

#[test]
fn test_shipped_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/motion.ron");
    let params = load_motion_params(&path).unwrap();

    assert_eq!(params, MotionParams::default());
}

#[test]
fn test_shipped_accel_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/motion_accel.ron");
    let params = load_motion_params(&path).unwrap();

    assert_eq!(params, MotionParams::accel_drag());
    assert!(validate_params(&params).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_params_are_valid() {
    assert!(validate_params(&MotionParams::default()).is_empty());
    assert!(validate_params(&MotionParams::accel_drag()).is_empty());
}

#[test]
fn test_validation_flags_bad_cut_multiplier() {
    let params = MotionParams {
        jump_cut_multiplier: 1.5,
        ..Default::default()
    };

    let warnings = validate_params(&params);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "jump_cut_multiplier");
}

#[test]
fn test_validation_ignores_accel_when_policy_is_direct() {
    let params = MotionParams {
        horizontal: HorizontalPolicy::DirectSpeed,
        accel: -5.0,
        ..Default::default()
    };
    assert!(validate_params(&params).is_empty());

    let params = MotionParams {
        horizontal: HorizontalPolicy::AccelDrag,
        accel: -5.0,
        ..Default::default()
    };
    let warnings = validate_params(&params);
    assert!(warnings.iter().any(|w| w.field == "accel"));
}

#[test]
fn test_validation_flags_empty_ground_layers() {
    let params = MotionParams {
        ground_layers: Vec::new(),
        ..Default::default()
    };

    let warnings = validate_params(&params);
    assert!(warnings.iter().any(|w| w.field == "ground_layers"));
}
