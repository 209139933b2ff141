use glam::Vec3;
use super::*;

// ============================================================================
// Plane::normalize
// ============================================================================

#[test]
fn test_normalize_scales_normal_and_distance() {
    let mut plane = Plane::new(Vec3::new(0.0, 0.0, 3.0), 6.0);
    plane.normalize();

    assert!((plane.normal - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    assert!((plane.distance - 2.0).abs() < 1e-6);
}

#[test]
fn test_normalize_preserves_unit_planes() {
    let mut plane = Plane::new(Vec3::new(1.0, 0.0, 0.0), -5.0);
    plane.normalize();

    assert!((plane.normal.length() - 1.0).abs() < 1e-6);
    assert!((plane.distance + 5.0).abs() < 1e-6);
}

#[test]
fn test_normalize_arbitrary_direction() {
    let mut plane = Plane::new(Vec3::new(2.0, -2.0, 1.0), 9.0);
    plane.normalize();

    // |(2, -2, 1)| = 3
    assert!((plane.normal.length() - 1.0).abs() < 1e-6);
    assert!((plane.distance - 3.0).abs() < 1e-6);
}

// ============================================================================
// Plane::distance_to
// ============================================================================

#[test]
fn test_distance_to_sign_convention() {
    // The xy-plane with inside = +z
    let plane = Plane::new(Vec3::new(0.0, 0.0, 1.0), 0.0);

    assert!((plane.distance_to(Vec3::new(0.0, 0.0, 5.0)) - 5.0).abs() < 1e-6);
    assert!((plane.distance_to(Vec3::new(0.0, 0.0, -5.0)) + 5.0).abs() < 1e-6);
    assert_eq!(plane.distance_to(Vec3::new(3.0, -7.0, 0.0)), 0.0);
}

#[test]
fn test_distance_to_offset_plane() {
    // Half-space y >= 2
    let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), -2.0);

    assert!((plane.distance_to(Vec3::new(0.0, 3.0, 0.0)) - 1.0).abs() < 1e-6);
    assert!((plane.distance_to(Vec3::new(0.0, 2.0, 0.0))).abs() < 1e-6);
    assert!(plane.distance_to(Vec3::ZERO) < 0.0);
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn test_plane_is_copy() {
    let plane1 = Plane::new(Vec3::new(0.0, 1.0, 0.0), 4.0);
    let plane2 = plane1; // Copy, not move
    assert_eq!(plane1, plane2);
    assert_eq!(plane1.distance, 4.0);
}

#[test]
fn test_plane_default_is_zeroed() {
    let plane = Plane::default();
    assert_eq!(plane.normal, Vec3::ZERO);
    assert_eq!(plane.distance, 0.0);
}
