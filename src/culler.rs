/// Per-frame culling front-end.
///
/// A FrustumCuller wraps a Frustum with the frame lifecycle the render
/// graph drives: `begin_frame` rewrites the planes from the viewpoint's
/// view-projection matrix, the `test_*` methods gate each candidate, and
/// `end_frame` reports the frame's counters.
///
/// The scene/renderable list and the light list stay outside this crate;
/// they submit bare bounding volumes and consume booleans.

use glam::{Mat4, Vec3};
use crate::bounds::{Cone, Sphere, AABB};
use crate::cull_debug;
use crate::frustum::Frustum;

/// Bounding volume of a visibility candidate.
///
/// One seam for heterogeneous candidate lists: point lights submit
/// `Sphere`, spot lights `Cone`, renderables `Aabb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingVolume {
    Point(Vec3),
    Sphere(Sphere),
    Cone(Cone),
    Aabb(AABB),
}

/// Counters for one frame of culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CullStats {
    /// Candidates tested this frame
    pub tested: u32,
    /// Candidates reported visible
    pub visible: u32,
    /// Candidates culled
    pub rejected: u32,
}

/// Frustum culler — tests candidate bounding volumes against one
/// viewpoint's frustum.
///
/// One instance per viewpoint (camera, shadow-casting light). No internal
/// synchronization: an instance must not be updated and queried from two
/// threads at once, but independent instances are free to run in parallel.
#[derive(Debug, Clone, Default)]
pub struct FrustumCuller {
    frustum: Frustum,
    stats: CullStats,
}

impl FrustumCuller {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current frustum planes.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Counters accumulated since `begin_frame`.
    pub fn stats(&self) -> CullStats {
        self.stats
    }

    /// Start a frame: rewrite the frustum from the view-projection
    /// matrix and reset the counters.
    pub fn begin_frame(&mut self, view_projection: &Mat4) {
        self.frustum.update(view_projection);
        self.stats = CullStats::default();
    }

    /// Finish a frame: log and return the counters.
    pub fn end_frame(&mut self) -> CullStats {
        let stats = self.stats;
        cull_debug!(
            "galaxy3d::FrustumCuller",
            "frame culled {}/{} candidates ({} visible)",
            stats.rejected,
            stats.tested,
            stats.visible
        );
        stats
    }

    /// Test a point candidate.
    pub fn test_point(&mut self, point: Vec3) -> bool {
        self.record(self.frustum.contains_point(point))
    }

    /// Test a sphere candidate (point lights, coarse bounds).
    pub fn test_sphere(&mut self, sphere: &Sphere) -> bool {
        self.record(self.frustum.intersects_sphere(sphere))
    }

    /// Test a spot-light cone candidate.
    pub fn test_cone(&mut self, cone: &Cone) -> bool {
        self.record(self.frustum.intersects_cone(cone))
    }

    /// Test a world-space AABB candidate.
    pub fn test_aabb(&mut self, aabb: &AABB) -> bool {
        self.record(self.frustum.intersects_aabb(aabb))
    }

    /// Test a renderable by its local-space AABB and world matrix.
    pub fn test_mesh_aabb(&mut self, local_aabb: &AABB, world_matrix: &Mat4) -> bool {
        self.test_aabb(&local_aabb.transformed(world_matrix))
    }

    /// Test any candidate volume.
    pub fn test_volume(&mut self, volume: &BoundingVolume) -> bool {
        match volume {
            BoundingVolume::Point(point) => self.test_point(*point),
            BoundingVolume::Sphere(sphere) => self.test_sphere(sphere),
            BoundingVolume::Cone(cone) => self.test_cone(cone),
            BoundingVolume::Aabb(aabb) => self.test_aabb(aabb),
        }
    }

    fn record(&mut self, visible: bool) -> bool {
        self.stats.tested += 1;
        if visible {
            self.stats.visible += 1;
        } else {
            self.stats.rejected += 1;
        }
        visible
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
