//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants and the
//! validated `MeshConfig` snapshot.

use crate::constants::*;
use crate::{ConfigError, MeshConfig};

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_unit_sphere_tolerance_is_tight() {
    assert!(UNIT_SPHERE_TOLERANCE > 0.0);
    assert!(UNIT_SPHERE_TOLERANCE < 1e-6);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_slices_at_least_three() {
    // A ring needs at least 3 points to enclose an area
    assert!(MIN_SLICES >= 3);
}

#[test]
fn test_default_slices_matches_viewer() {
    assert_eq!(DEFAULT_SLICES, 8);
    assert!(DEFAULT_SLICES >= MIN_SLICES);
}

#[test]
fn test_subdivision_cap_fits_face_limit() {
    // Largest base shape is the icosahedron with 20 faces
    let faces = 20usize * 4usize.pow(MAX_SUBDIVISION_LEVELS);
    assert!(faces <= MAX_FACES);
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_unit_shapes_have_unit_extent() {
    assert_eq!(2.0 * UNIT_CUBE_HALF_EXTENT, 1.0);
    assert_eq!(2.0 * DISK_RADIUS, 1.0);
    assert_eq!(2.0 * CYLINDER_HALF_HEIGHT, 1.0);
    assert_eq!(CONE_APEX_HEIGHT, 1.0);
}

#[test]
fn test_default_box_limits_ordered() {
    for axis in 0..3 {
        assert!(DEFAULT_BOX_LIMITS[2 * axis] <= DEFAULT_BOX_LIMITS[2 * axis + 1]);
    }
}

#[test]
fn test_default_tray_size() {
    assert_eq!(DEFAULT_TRAY_SIZE, (100.0, 36.0));
}

// =============================================================================
// MESH CONFIG TESTS
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let cfg = MeshConfig::default();
    assert!(cfg.default_slices >= MIN_SLICES);
    assert_eq!(cfg.max_subdivision_levels, MAX_SUBDIVISION_LEVELS);
}

#[test]
fn test_config_rejects_bad_slices() {
    assert_eq!(
        MeshConfig::new(2, 2).unwrap_err(),
        ConfigError::InvalidSlices(2)
    );
}

#[test]
fn test_config_rejects_excessive_subdivision() {
    assert_eq!(
        MeshConfig::new(8, MAX_SUBDIVISION_LEVELS + 1).unwrap_err(),
        ConfigError::SubdivisionLimitTooHigh(MAX_SUBDIVISION_LEVELS + 1)
    );
}

#[test]
fn test_config_accepts_lower_subdivision_cap() {
    let cfg = MeshConfig::new(MIN_SLICES, 0).unwrap();
    assert_eq!(cfg.max_subdivision_levels, 0);
}

#[test]
fn test_config_error_display() {
    let message = ConfigError::InvalidSlices(1).to_string();
    assert!(message.contains("default_slices"));
}
