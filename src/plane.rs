/// Plane — a half-space used as one face of a culling frustum.
///
/// Stored as (normal, distance) where a point P is inside the half-space
/// if dot(normal, P) + distance >= 0. After `normalize()`, `normal` is
/// unit length and `distance_to()` returns true euclidean distances.

use glam::Vec3;

/// A half-space: `{ x : dot(normal, x) + distance >= 0 }`.
///
/// Freely copyable value type with no identity beyond its numbers.
/// The frustum extraction produces planes whose positive side points
/// into the visible volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    /// Plane normal (unit length after `normalize`)
    pub normal: Vec3,
    /// Signed offset along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and a signed offset.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Scale the plane so that `normal` is unit length.
    ///
    /// Divides both components by `normal.length()`. The caller must
    /// supply a non-zero, finite normal; a degenerate normal propagates
    /// NaN into the plane rather than raising an error.
    pub fn normalize(&mut self) {
        let magnitude = self.normal.length();
        self.normal /= magnitude;
        self.distance /= magnitude;
    }

    /// Signed distance from the plane to a point.
    ///
    /// Positive → inside the half-space, negative → outside, zero → on
    /// the plane. Only a true distance when the plane is normalized.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
