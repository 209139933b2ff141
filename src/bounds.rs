/// Bounding volumes submitted to the frustum tests.
///
/// These are caller-owned values: the scene supplies renderable AABBs,
/// the light list supplies point lights as spheres and spot lights as
/// cones. The frustum never stores or mutates them.

use glam::{Mat4, Vec3};

/// Bounding sphere (point lights, coarse mesh bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Sphere center (world space)
    pub center: Vec3,
    /// Radius, non-negative
    pub radius: f32,
}

/// Bounding cone approximating a spot light's illumination volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Cone apex (the light position)
    pub apex: Vec3,
    /// Unit axis direction from apex toward the base
    pub direction: Vec3,
    /// Distance from apex to the base disk
    pub height: f32,
    /// Radius of the base disk
    pub radius: f32,
}

/// Axis-Aligned Bounding Box.
///
/// Mesh bounds are stored in local space and taken to world space with
/// `transformed()` at culling time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Box center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent (max - min) along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
