//! Cube-sphere mesh generation: face grid construction, triangulation,
//! six-face cube assembly, and spherical projection via normalization.

mod cube_face;
mod grid;
mod mesh;
mod winding;

pub use cube_face::CubeFace;
pub use grid::{FaceGrid, triangulate};
pub use mesh::{SphereMesh, generate};
pub use winding::triangle_winds_outward;
