//! Full cube-sphere assembly: pattern → six faces → unit sphere.

use glam::{DVec2, DVec3};

use crate::cube_face::CubeFace;
use crate::grid::{FaceGrid, triangulate};

/// A generated cube-sphere mesh as an unindexed triangle list.
///
/// Vertices are positionally repeated across shared edges, not deduplicated.
/// Each face contributes `6·N²` consecutive vertices in
/// [`CubeFace::ALL`] order, `36·N²` vertices total.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    level: u32,
    vertices: Vec<DVec3>,
}

impl SphereMesh {
    /// The level of detail the mesh was generated at.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// All vertices in emission order.
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Number of vertices (`36·N²`).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over consecutive vertex triples as triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Flatten the mesh into the output scalar sequence
    /// `(x0, y0, z0, x1, y1, z1, …)`, length `108·N²`.
    #[must_use]
    pub fn to_scalars(&self) -> Vec<f64> {
        let mut scalars = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            scalars.extend_from_slice(&v.to_array());
        }
        scalars
    }
}

/// Generate the cube-sphere mesh for the given level of detail.
///
/// Pure and deterministic: equal levels always produce identical meshes.
/// Level 0 yields an empty mesh.
#[must_use]
pub fn generate(level: u32) -> SphereMesh {
    let grid = FaceGrid::new(level);
    let pattern = triangulate(&grid);
    let cube = assemble_cube(&pattern);

    // Every cube-surface point has a ±1 component, so the magnitude is
    // strictly positive and normalization is always well-defined.
    let vertices = cube.into_iter().map(|p| p.normalize()).collect();

    SphereMesh { level, vertices }
}

/// Concatenate six embedded copies of the shared pattern into the cube mesh.
///
/// The pattern is consumed forward or reversed per face according to
/// [`CubeFace::reverses_pattern`], which keeps every face winding outward.
fn assemble_cube(pattern: &[DVec2]) -> Vec<DVec3> {
    let mut cube = Vec::with_capacity(pattern.len() * CubeFace::ALL.len());
    for face in CubeFace::ALL {
        if face.reverses_pattern() {
            cube.extend(pattern.iter().rev().map(|&p| face.embed(p)));
        } else {
            cube.extend(pattern.iter().map(|&p| face.embed(p)));
        }
    }
    cube
}
