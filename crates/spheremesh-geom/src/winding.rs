//! Winding order validation for generated triangles.

use glam::DVec3;

/// Check that a triangle faces outward from the sphere center.
///
/// Returns `true` if the triangle's computed normal (via cross product of
/// its edge vectors) has a positive dot product with the centroid direction
/// from the origin. This is the regression check for the per-face pattern
/// reversal table: a wrong entry flips a whole face inward without any
/// other observable failure.
#[must_use]
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let face_normal = edge1.cross(edge2);

    // The centroid gives the approximate outward direction from the center.
    let centroid = (v0 + v1 + v2) / 3.0;

    face_normal.dot(centroid) > 0.0
}
