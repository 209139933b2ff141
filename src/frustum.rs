/// Frustum — six clipping planes for visibility culling.
///
/// The six planes are extracted from a combined view-projection matrix
/// (Gribb & Hartmann) with every normal pointing inward: a point is
/// visible if its signed distance to all six planes is non-negative.
///
/// The caller is responsible for supplying the view-projection matrix.
/// The camera or shadow-light subsystem computes it once per frame per
/// viewpoint; `update()` rewrites all six planes from it.

use glam::{Mat4, Vec3};
use crate::bounds::{Cone, Sphere, AABB};
use crate::plane::Plane;

/// Frustum plane indices.
///
/// Fixed, closed ordering: the side-plane-only scans (cone test) cover
/// exactly indices 0–3, so `Near` and `Far` must stay at 4 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum FrustumPlane {
    Left = 0,
    Right = 1,
    Bottom = 2,
    Top = 3,
    Near = 4,
    Far = 5,
}

/// Internal 3-way classification for sphere and AABB tests.
///
/// Collapsed to a bool at the public boundary: both `Inside` and
/// `Intersect` report visible. Callers are audited against the boolean
/// contract, so this stays private.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intersection {
    /// Entirely outside some plane
    Outside,
    /// Straddles at least one plane
    Intersect,
    /// Entirely inside all six planes
    Inside,
}

/// Six frustum planes for culling.
///
/// Normals point inward (toward the visible volume). Works with both
/// perspective and orthographic projections. Holds no resources and no
/// state across frames: each `update()` fully overwrites all planes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let mut frustum = Self::default();
        frustum.update(vp);
        frustum
    }

    /// Rewrite all six planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann: each plane is a row combination of the VP
    /// matrix. The fixed sign convention makes every normal point
    /// inward. All planes are normalized so the tests below compare
    /// true distances against radii.
    pub fn update(&mut self, vp: &Mat4) {
        let m = vp.to_cols_array_2d();

        // Left:   row3 + row0
        self.planes[FrustumPlane::Left as usize] = Plane {
            normal: Vec3::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0]),
            distance: m[3][3] + m[3][0],
        };
        // Right:  row3 - row0
        self.planes[FrustumPlane::Right as usize] = Plane {
            normal: Vec3::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0]),
            distance: m[3][3] - m[3][0],
        };
        // Bottom: row3 + row1
        self.planes[FrustumPlane::Bottom as usize] = Plane {
            normal: Vec3::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1]),
            distance: m[3][3] + m[3][1],
        };
        // Top:    row3 - row1
        self.planes[FrustumPlane::Top as usize] = Plane {
            normal: Vec3::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1]),
            distance: m[3][3] - m[3][1],
        };
        // Near:   row3 + row2
        self.planes[FrustumPlane::Near as usize] = Plane {
            normal: Vec3::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2]),
            distance: m[3][3] + m[3][2],
        };
        // Far:    row3 - row2
        self.planes[FrustumPlane::Far as usize] = Plane {
            normal: Vec3::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2]),
            distance: m[3][3] - m[3][2],
        };

        for plane in &mut self.planes {
            plane.normalize();
        }
    }

    /// Plane lookup by index.
    pub fn plane(&self, side: FrustumPlane) -> &Plane {
        &self.planes[side as usize]
    }

    /// Test if a point is inside the frustum.
    ///
    /// Short-circuits on the first rejecting plane. Points on a plane
    /// (zero distance) count as inside; there is no intersecting state
    /// for a point.
    pub fn contains_point(&self, point: Vec3) -> bool {
        for plane in &self.planes {
            if plane.distance_to(point) < 0.0 {
                return false; // Outside
            }
        }
        true // Inside
    }

    /// Test if a sphere is (potentially) visible.
    ///
    /// Returns `true` for spheres fully inside or straddling any plane;
    /// `false` only when the sphere lies entirely outside some plane.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.classify_sphere(sphere) != Intersection::Outside
    }

    /// Classify a sphere against all six planes (3-way test).
    ///
    /// An outright rejection by any plane wins over a straddle recorded
    /// earlier, so the scan never stops on `Intersect`.
    fn classify_sphere(&self, sphere: &Sphere) -> Intersection {
        let mut result = Intersection::Inside;
        for plane in &self.planes {
            let distance = plane.distance_to(sphere.center);
            if distance < -sphere.radius {
                return Intersection::Outside;
            }
            if distance.abs() < sphere.radius {
                result = Intersection::Intersect;
            }
        }
        result
    }

    /// Test if a spot-light cone is (potentially) visible.
    ///
    /// Near and Far are tested first, then the four side planes. The
    /// per-plane test is a conservative bounding heuristic (apex plus
    /// the worst-case base rim point), not an exact cone–frustum
    /// separating-axis test; it can misjudge near-degenerate cones.
    pub fn intersects_cone(&self, cone: &Cone) -> bool {
        if cone_behind_plane(cone, self.plane(FrustumPlane::Near))
            || cone_behind_plane(cone, self.plane(FrustumPlane::Far))
        {
            return false;
        }
        // Side planes only: Left, Right, Bottom, Top
        self.planes[..4]
            .iter()
            .all(|plane| !cone_behind_plane(cone, plane))
    }

    /// Test if an AABB is (potentially) visible.
    ///
    /// Uses the positive/negative vertex test: for each plane, the box
    /// corner most aligned with the normal decides outright rejection
    /// in O(1). Conservative — may report visible for a box outside a
    /// frustum corner, never the reverse.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.classify_aabb(aabb) != Intersection::Outside
    }

    /// Classify an AABB against all six planes (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside some plane → the box straddles it
    /// - otherwise → `Inside`
    fn classify_aabb(&self, aabb: &AABB) -> Intersection {
        let mut result = Intersection::Inside;
        for plane in &self.planes {
            // Positive vertex: corner most in the direction of the normal
            let p_vertex = Vec3::new(
                if plane.normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            // Negative vertex: the opposite corner
            let n_vertex = Vec3::new(
                if plane.normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if plane.normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if plane.normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );

            if plane.distance_to(p_vertex) < 0.0 {
                return Intersection::Outside;
            }
            if plane.distance_to(n_vertex) < 0.0 {
                result = Intersection::Intersect;
            }
        }
        result
    }
}

/// Cone-behind-plane heuristic.
///
/// `m` is orthogonal to the cone axis, coplanar with the axis and the
/// plane normal, with magnitude sin(angle between them); `q` is the
/// base rim point hardest to reject. The cone counts as behind only if
/// both the apex and `q` are strictly below the plane.
fn cone_behind_plane(cone: &Cone, plane: &Plane) -> bool {
    let m = plane.normal.cross(cone.direction).cross(cone.direction);
    let q = cone.apex + cone.direction * cone.height - m * cone.radius;
    plane.distance_to(cone.apex) < 0.0 && plane.distance_to(q) < 0.0
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
