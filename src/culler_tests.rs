use glam::{Mat4, Vec3};
use crate::bounds::{Cone, Sphere, AABB};
use crate::frustum::Frustum;
use super::*;

/// 90° FOV, square aspect, near 1, far 100, camera at the origin
/// looking down -Z.
fn view_projection() -> Mat4 {
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0)
}

// ============================================================================
// Frame lifecycle and stats
// ============================================================================

#[test]
fn test_begin_frame_resets_stats() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());
    culler.test_point(Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(culler.stats().tested, 1);

    culler.begin_frame(&view_projection());
    assert_eq!(culler.stats(), CullStats::default());
}

#[test]
fn test_stats_count_visible_and_rejected() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());

    assert!(culler.test_point(Vec3::new(0.0, 0.0, -10.0)));
    assert!(!culler.test_point(Vec3::new(0.0, 0.0, 10.0)));
    assert!(culler.test_sphere(&Sphere { center: Vec3::new(0.0, 0.0, -50.0), radius: 1.0 }));
    assert!(!culler.test_sphere(&Sphere { center: Vec3::new(0.0, 0.0, -150.0), radius: 1.0 }));

    let stats = culler.end_frame();
    assert_eq!(stats.tested, 4);
    assert_eq!(stats.visible, 2);
    assert_eq!(stats.rejected, 2);
    assert_eq!(stats.visible + stats.rejected, stats.tested);
}

#[test]
fn test_end_frame_returns_current_stats() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());
    culler.test_point(Vec3::new(0.0, 0.0, -10.0));

    let stats = culler.end_frame();
    assert_eq!(stats, culler.stats());
}

// ============================================================================
// Typed candidate tests
// ============================================================================

#[test]
fn test_cone_candidates() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());

    // Spot light shining across the visible volume
    let visible = Cone {
        apex: Vec3::new(0.0, 0.0, -20.0),
        direction: Vec3::new(0.0, -1.0, 0.0),
        height: 10.0,
        radius: 5.0,
    };
    assert!(culler.test_cone(&visible));

    // Spot light beyond the far plane pointing away
    let culled = Cone {
        apex: Vec3::new(0.0, 0.0, -150.0),
        direction: Vec3::new(0.0, 0.0, -1.0),
        height: 10.0,
        radius: 5.0,
    };
    assert!(!culler.test_cone(&culled));
}

#[test]
fn test_mesh_aabb_applies_world_matrix() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());

    let local = AABB {
        min: Vec3::new(-1.0, -1.0, -1.0),
        max: Vec3::new(1.0, 1.0, 1.0),
    };

    // In front of the camera → visible
    let in_view = Mat4::from_translation(Vec3::new(0.0, 0.0, -20.0));
    assert!(culler.test_mesh_aabb(&local, &in_view));

    // Same mesh moved behind the camera → culled
    let behind = Mat4::from_translation(Vec3::new(0.0, 0.0, 20.0));
    assert!(!culler.test_mesh_aabb(&local, &behind));
}

// ============================================================================
// BoundingVolume dispatch
// ============================================================================

#[test]
fn test_volume_dispatch_matches_typed_tests() {
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&view_projection());

    let volumes = [
        BoundingVolume::Point(Vec3::new(0.0, 0.0, -10.0)),
        BoundingVolume::Sphere(Sphere { center: Vec3::new(0.0, 0.0, -50.0), radius: 2.0 }),
        BoundingVolume::Cone(Cone {
            apex: Vec3::new(0.0, 0.0, -20.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
            height: 5.0,
            radius: 2.0,
        }),
        BoundingVolume::Aabb(AABB {
            min: Vec3::new(-1.0, -1.0, -30.0),
            max: Vec3::new(1.0, 1.0, -28.0),
        }),
    ];
    for volume in &volumes {
        assert!(culler.test_volume(volume), "{:?} should be visible", volume);
    }

    // Point light entirely past the far plane
    let culled = BoundingVolume::Sphere(Sphere {
        center: Vec3::new(0.0, 0.0, -200.0),
        radius: 10.0,
    });
    assert!(!culler.test_volume(&culled));

    let stats = culler.end_frame();
    assert_eq!(stats.tested, 5);
    assert_eq!(stats.visible, 4);
    assert_eq!(stats.rejected, 1);
}

// ============================================================================
// Frustum access
// ============================================================================

#[test]
fn test_frustum_matches_standalone_extraction() {
    let vp = view_projection();
    let mut culler = FrustumCuller::new();
    culler.begin_frame(&vp);

    assert_eq!(culler.frustum().planes, Frustum::from_view_projection(&vp).planes);
}
