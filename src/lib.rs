/*!
# Galaxy3D Culling

View-frustum culling for the Galaxy3D rendering stack.

This crate is the per-frame visibility gate: it derives six half-space
planes from a combined view-projection matrix and tests points, spheres,
spot-light cones, and axis-aligned boxes against them, so draw and
shading work is skipped for objects the viewpoint cannot see.

## Architecture

- **Plane**: a half-space (unit normal + signed offset)
- **Frustum**: six inward-facing planes extracted via Gribb & Hartmann,
  with the point/sphere/cone/AABB visibility tests
- **Bounding volumes**: caller-owned `Sphere`, `Cone`, `AABB` values
- **FrustumCuller**: per-frame wrapper with counters and logging

The camera, scene list, light list, and render graph are external
collaborators: they supply transforms and bounding volumes and consume
the boolean results. Every test is pure, allocation-free, and O(1) in
the fixed count of six planes.
*/

// Internal modules
pub mod bounds;
pub mod culler;
pub mod frustum;
pub mod log;
pub mod plane;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Core geometry
    pub use crate::plane::Plane;
    pub use crate::frustum::{Frustum, FrustumPlane};

    // Bounding volumes
    pub use crate::bounds::{Sphere, Cone, AABB};

    // Per-frame culler
    pub use crate::culler::{BoundingVolume, CullStats, FrustumCuller};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: cull_* macros are exported at the crate root by #[macro_export]
    }
}

// Re-export math library at crate root
pub use glam;
