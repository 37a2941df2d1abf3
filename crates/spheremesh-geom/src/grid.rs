//! Planar face grid and its triangulation into a shared vertex pattern.

use glam::DVec2;

/// A complete `(N+1) × (N+1)` grid of planar points covering `[-1, 1]²`,
/// where `N` is the level of detail.
///
/// Grid point `(i, j)` sits at `u = 2i/N − 1`, `v = 2j/N − 1`. The point at
/// `(0, 0)` is the corner `(-1, -1)`; `(N, N)` is `(1, 1)`.
#[derive(Clone, Debug)]
pub struct FaceGrid {
    level: u32,
    points: Vec<DVec2>,
}

impl FaceGrid {
    /// Build the grid for the given level of detail.
    ///
    /// Level 0 yields a single point at `(-1, -1)`; it produces no cells
    /// and therefore no triangles downstream.
    #[must_use]
    pub fn new(level: u32) -> Self {
        let side = level as usize + 1;
        let mut points = Vec::with_capacity(side * side);
        for j in 0..side {
            for i in 0..side {
                points.push(lerp_point(level, i as u32, j as u32));
            }
        }
        Self { level, points }
    }

    /// The level of detail this grid was built for.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The grid point at `(i, j)`, `0 ≤ i, j ≤ N`.
    #[inline]
    #[must_use]
    pub fn point(&self, i: u32, j: u32) -> DVec2 {
        debug_assert!(i <= self.level && j <= self.level, "grid index out of range");
        let side = self.level as usize + 1;
        self.points[j as usize * side + i as usize]
    }
}

/// Linear interpolation of index `i ∈ [0, N]` across `[-1, 1]` on both axes.
#[inline]
fn lerp_point(level: u32, i: u32, j: u32) -> DVec2 {
    if level == 0 {
        // Degenerate grid: a single corner point, no cells.
        return DVec2::new(-1.0, -1.0);
    }
    let n = f64::from(level);
    DVec2::new(
        f64::from(i) * 2.0 / n - 1.0,
        f64::from(j) * 2.0 / n - 1.0,
    )
}

/// Triangulate the grid into the flat pattern shared by all six cube faces.
///
/// Each of the `N²` cells contributes two triangles as six grid-point
/// references:
///
/// ```text
/// (row, col), (row+1, col), (row+1, col+1),
/// (row+1, col+1), (row, col+1), (row, col)
/// ```
///
/// Cells iterate with `col` (the v index) outermost. The per-face reversal
/// table in [`CubeFace::reverses_pattern`](crate::CubeFace::reverses_pattern)
/// assumes exactly this order; the two must change together or some faces
/// wind inward.
///
/// Returns `6 · N²` points. The pattern is computed once and reused for all
/// six faces.
#[must_use]
pub fn triangulate(grid: &FaceGrid) -> Vec<DVec2> {
    let n = grid.level();
    let mut pattern = Vec::with_capacity(6 * (n as usize) * (n as usize));
    for col in 0..n {
        for row in 0..n {
            pattern.push(grid.point(row, col));
            pattern.push(grid.point(row + 1, col));
            pattern.push(grid.point(row + 1, col + 1));
            pattern.push(grid.point(row + 1, col + 1));
            pattern.push(grid.point(row, col + 1));
            pattern.push(grid.point(row, col));
        }
    }
    pattern
}
