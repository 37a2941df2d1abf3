//! The six faces of the cube that the sphere is projected from.

use glam::{DVec2, DVec3};

/// One face of the `[-1, 1]` cube.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// −X face
    NegX = 0,
    /// +X face
    PosX = 1,
    /// −Y face
    NegY = 2,
    /// +Y face
    PosY = 3,
    /// −Z face
    NegZ = 4,
    /// +Z face
    PosZ = 5,
}

impl CubeFace {
    /// All six faces, in the order their vertex sequences are concatenated
    /// into the final mesh. Consumers matching face data by offset rely on
    /// this order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::NegX,
        CubeFace::PosX,
        CubeFace::NegY,
        CubeFace::PosY,
        CubeFace::NegZ,
        CubeFace::PosZ,
    ];

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegZ => CubeFace::PosZ,
            CubeFace::PosZ => CubeFace::NegZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosX => DVec3::X,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegZ => DVec3::NEG_Z,
            CubeFace::PosZ => DVec3::Z,
        }
    }

    /// Embed a planar `(u, v)` pattern point into 3D on this face.
    ///
    /// The face's own axis is fixed at `±1`; the remaining two axes take
    /// `u` and `v` in axis order.
    #[inline]
    #[must_use]
    pub fn embed(self, p: DVec2) -> DVec3 {
        match self {
            CubeFace::NegX => DVec3::new(-1.0, p.x, p.y),
            CubeFace::PosX => DVec3::new(1.0, p.x, p.y),
            CubeFace::NegY => DVec3::new(p.x, -1.0, p.y),
            CubeFace::PosY => DVec3::new(p.x, 1.0, p.y),
            CubeFace::NegZ => DVec3::new(p.x, p.y, -1.0),
            CubeFace::PosZ => DVec3::new(p.x, p.y, 1.0),
        }
    }

    /// Whether this face consumes the shared triangulated pattern in
    /// reverse order.
    ///
    /// The reversal set is load-bearing: with the pattern's fixed cell
    /// iteration order, exactly these three faces must flip so that every
    /// triangle winds outward once projected onto the sphere. Changing an
    /// entry silently turns that face inside-out rather than crashing.
    #[must_use]
    pub fn reverses_pattern(self) -> bool {
        match self {
            CubeFace::NegX | CubeFace::PosY | CubeFace::NegZ => true,
            CubeFace::PosX | CubeFace::NegY | CubeFace::PosZ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_face_variants_exist() {
        assert_eq!(CubeFace::ALL.len(), 6);
        let faces: Vec<CubeFace> = CubeFace::ALL.to_vec();
        assert!(faces.contains(&CubeFace::NegX));
        assert!(faces.contains(&CubeFace::PosX));
        assert!(faces.contains(&CubeFace::NegY));
        assert!(faces.contains(&CubeFace::PosY));
        assert!(faces.contains(&CubeFace::NegZ));
        assert!(faces.contains(&CubeFace::PosZ));
    }

    #[test]
    fn test_face_order_matches_mesh_concatenation_order() {
        assert_eq!(
            CubeFace::ALL,
            [
                CubeFace::NegX,
                CubeFace::PosX,
                CubeFace::NegY,
                CubeFace::PosY,
                CubeFace::NegZ,
                CubeFace::PosZ,
            ]
        );
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in CubeFace::ALL {
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_opposite_face_normals_are_antiparallel() {
        for face in CubeFace::ALL {
            let n = face.normal();
            let opp_n = face.opposite().normal();
            assert!(
                (n + opp_n).length() < 1e-12,
                "Normals for {face:?} and {:?} are not antiparallel",
                face.opposite()
            );
        }
    }

    #[test]
    fn test_embed_fixes_face_axis_at_unit_value() {
        let p = DVec2::new(0.25, -0.75);
        for face in CubeFace::ALL {
            let embedded = face.embed(p);
            let n = face.normal();
            // The component along the face normal must be exactly ±1.
            assert_eq!(
                embedded.dot(n),
                1.0,
                "Fixed axis for {face:?} is not at the face plane"
            );
        }
    }

    #[test]
    fn test_embed_preserves_pattern_components() {
        let p = DVec2::new(0.5, -0.5);
        assert_eq!(CubeFace::NegX.embed(p), DVec3::new(-1.0, 0.5, -0.5));
        assert_eq!(CubeFace::PosX.embed(p), DVec3::new(1.0, 0.5, -0.5));
        assert_eq!(CubeFace::NegY.embed(p), DVec3::new(0.5, -1.0, -0.5));
        assert_eq!(CubeFace::PosY.embed(p), DVec3::new(0.5, 1.0, -0.5));
        assert_eq!(CubeFace::NegZ.embed(p), DVec3::new(0.5, -0.5, -1.0));
        assert_eq!(CubeFace::PosZ.embed(p), DVec3::new(0.5, -0.5, 1.0));
    }

    #[test]
    fn test_exactly_three_faces_reverse() {
        let reversed = CubeFace::ALL
            .iter()
            .filter(|f| f.reverses_pattern())
            .count();
        assert_eq!(reversed, 3);
    }

    #[test]
    fn test_reversal_table_entries() {
        assert!(CubeFace::NegX.reverses_pattern());
        assert!(!CubeFace::PosX.reverses_pattern());
        assert!(!CubeFace::NegY.reverses_pattern());
        assert!(CubeFace::PosY.reverses_pattern());
        assert!(CubeFace::NegZ.reverses_pattern());
        assert!(!CubeFace::PosZ.reverses_pattern());
    }
}
