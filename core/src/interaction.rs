//! Surface Interactions

use crate::geometry::*;
use crate::math::*;

/// Records the local surface geometry at a ray-surface hit; reflectance
/// models shade against it.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceInteraction {
    /// Point of intersection.
    pub p: Point3f,

    /// Outward unit surface normal at the point of intersection.
    pub n: Vector3f,

    /// Outgoing direction (towards the viewer), unit length.
    pub wo: Vector3f,

    /// Parametric distance along the intersecting ray.
    pub t: Float,
}

impl SurfaceInteraction {
    /// Creates a new surface interaction.
    ///
    /// * `p`  - Point of intersection.
    /// * `n`  - Outward unit surface normal.
    /// * `wo` - Outgoing direction, unit length.
    /// * `t`  - Parametric distance along the intersecting ray.
    pub fn new(p: Point3f, n: Vector3f, wo: Vector3f, t: Float) -> Self {
        Self { p, n, wo, t }
    }
}
