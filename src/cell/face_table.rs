//! Per-cell-type face tables.
//!
//! Each 3D cell type maps to a fixed list of faces. A face lists local
//! point indices into the owning cell's connectivity: corners first, in
//! outward winding, then one mid-edge node per curved edge (the node of
//! edge `i` joins corners `i` and `i + 1`), then the center node if any.
//! Two cells sharing a face therefore always list its corners in opposite
//! directions.

use super::{CellType, FaceType};
use FaceType::{
    BiquadraticQuad as Bqq, BiquadraticTriangle as Bqt, Polygon as Poly, Quad,
    QuadraticLinearQuad as Qlq, QuadraticQuad as Qq, QuadraticTriangle as Qt, Triangle as Tri,
};

/// One face of a 3D cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSpec {
    /// Topology tag of the face.
    pub face_type: FaceType,
    /// Local point indices into the cell's point list.
    pub points: &'static [usize],
}

impl FaceSpec {
    const fn new(face_type: FaceType, points: &'static [usize]) -> Self {
        Self { face_type, points }
    }

    /// Number of corner points of this face.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.face_type.corner_count(self.points.len())
    }

    /// Total number of points of this face.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

static TETRA: [FaceSpec; 4] = [
    FaceSpec::new(Tri, &[0, 1, 3]),
    FaceSpec::new(Tri, &[1, 2, 3]),
    FaceSpec::new(Tri, &[2, 0, 3]),
    FaceSpec::new(Tri, &[0, 2, 1]),
];

// Voxel points are ordered x-fastest; faces are rewritten as cyclic quads.
static VOXEL: [FaceSpec; 6] = [
    FaceSpec::new(Quad, &[0, 4, 6, 2]),
    FaceSpec::new(Quad, &[1, 3, 7, 5]),
    FaceSpec::new(Quad, &[0, 1, 5, 4]),
    FaceSpec::new(Quad, &[2, 6, 7, 3]),
    FaceSpec::new(Quad, &[0, 2, 3, 1]),
    FaceSpec::new(Quad, &[4, 5, 7, 6]),
];

static HEXAHEDRON: [FaceSpec; 6] = [
    FaceSpec::new(Quad, &[0, 4, 7, 3]),
    FaceSpec::new(Quad, &[1, 2, 6, 5]),
    FaceSpec::new(Quad, &[0, 1, 5, 4]),
    FaceSpec::new(Quad, &[3, 7, 6, 2]),
    FaceSpec::new(Quad, &[0, 3, 2, 1]),
    FaceSpec::new(Quad, &[4, 5, 6, 7]),
];

static WEDGE: [FaceSpec; 5] = [
    FaceSpec::new(Tri, &[0, 1, 2]),
    FaceSpec::new(Tri, &[3, 5, 4]),
    FaceSpec::new(Quad, &[0, 3, 4, 1]),
    FaceSpec::new(Quad, &[1, 4, 5, 2]),
    FaceSpec::new(Quad, &[2, 5, 3, 0]),
];

static PYRAMID: [FaceSpec; 5] = [
    FaceSpec::new(Quad, &[0, 3, 2, 1]),
    FaceSpec::new(Tri, &[0, 1, 4]),
    FaceSpec::new(Tri, &[1, 2, 4]),
    FaceSpec::new(Tri, &[2, 3, 4]),
    FaceSpec::new(Tri, &[3, 0, 4]),
];

static PENTAGONAL_PRISM: [FaceSpec; 7] = [
    FaceSpec::new(Poly, &[0, 4, 3, 2, 1]),
    FaceSpec::new(Poly, &[5, 6, 7, 8, 9]),
    FaceSpec::new(Quad, &[0, 1, 6, 5]),
    FaceSpec::new(Quad, &[1, 2, 7, 6]),
    FaceSpec::new(Quad, &[2, 3, 8, 7]),
    FaceSpec::new(Quad, &[3, 4, 9, 8]),
    FaceSpec::new(Quad, &[4, 0, 5, 9]),
];

static HEXAGONAL_PRISM: [FaceSpec; 8] = [
    FaceSpec::new(Poly, &[0, 5, 4, 3, 2, 1]),
    FaceSpec::new(Poly, &[6, 7, 8, 9, 10, 11]),
    FaceSpec::new(Quad, &[0, 1, 7, 6]),
    FaceSpec::new(Quad, &[1, 2, 8, 7]),
    FaceSpec::new(Quad, &[2, 3, 9, 8]),
    FaceSpec::new(Quad, &[3, 4, 10, 9]),
    FaceSpec::new(Quad, &[4, 5, 11, 10]),
    FaceSpec::new(Quad, &[5, 0, 6, 11]),
];

static QUADRATIC_TETRA: [FaceSpec; 4] = [
    FaceSpec::new(Qt, &[0, 1, 3, 4, 8, 7]),
    FaceSpec::new(Qt, &[1, 2, 3, 5, 9, 8]),
    FaceSpec::new(Qt, &[2, 0, 3, 6, 7, 9]),
    FaceSpec::new(Qt, &[0, 2, 1, 6, 5, 4]),
];

static QUADRATIC_HEXAHEDRON: [FaceSpec; 6] = [
    FaceSpec::new(Qq, &[0, 4, 7, 3, 16, 15, 19, 11]),
    FaceSpec::new(Qq, &[1, 2, 6, 5, 9, 18, 13, 17]),
    FaceSpec::new(Qq, &[0, 1, 5, 4, 8, 17, 12, 16]),
    FaceSpec::new(Qq, &[3, 7, 6, 2, 19, 14, 18, 10]),
    FaceSpec::new(Qq, &[0, 3, 2, 1, 11, 10, 9, 8]),
    FaceSpec::new(Qq, &[4, 5, 6, 7, 12, 13, 14, 15]),
];

static QUADRATIC_WEDGE: [FaceSpec; 5] = [
    FaceSpec::new(Qt, &[0, 1, 2, 6, 7, 8]),
    FaceSpec::new(Qt, &[3, 5, 4, 11, 10, 9]),
    FaceSpec::new(Qq, &[0, 3, 4, 1, 12, 9, 13, 6]),
    FaceSpec::new(Qq, &[1, 4, 5, 2, 13, 10, 14, 7]),
    FaceSpec::new(Qq, &[2, 5, 3, 0, 14, 11, 12, 8]),
];

static QUADRATIC_PYRAMID: [FaceSpec; 5] = [
    FaceSpec::new(Qq, &[0, 3, 2, 1, 8, 7, 6, 5]),
    FaceSpec::new(Qt, &[0, 1, 4, 5, 10, 9]),
    FaceSpec::new(Qt, &[1, 2, 4, 6, 11, 10]),
    FaceSpec::new(Qt, &[2, 3, 4, 7, 12, 11]),
    FaceSpec::new(Qt, &[3, 0, 4, 8, 9, 12]),
];

// Face centers 20..=25 follow the hexahedron face order.
static TRIQUADRATIC_HEXAHEDRON: [FaceSpec; 6] = [
    FaceSpec::new(Bqq, &[0, 4, 7, 3, 16, 15, 19, 11, 20]),
    FaceSpec::new(Bqq, &[1, 2, 6, 5, 9, 18, 13, 17, 21]),
    FaceSpec::new(Bqq, &[0, 1, 5, 4, 8, 17, 12, 16, 22]),
    FaceSpec::new(Bqq, &[3, 7, 6, 2, 19, 14, 18, 10, 23]),
    FaceSpec::new(Bqq, &[0, 3, 2, 1, 11, 10, 9, 8, 24]),
    FaceSpec::new(Bqq, &[4, 5, 6, 7, 12, 13, 14, 15, 25]),
];

// The lateral edges are straight, so the quad faces start on a curved edge.
static QUADRATIC_LINEAR_WEDGE: [FaceSpec; 5] = [
    FaceSpec::new(Qt, &[0, 1, 2, 6, 7, 8]),
    FaceSpec::new(Qt, &[3, 5, 4, 11, 10, 9]),
    FaceSpec::new(Qlq, &[3, 4, 1, 0, 9, 6]),
    FaceSpec::new(Qlq, &[4, 5, 2, 1, 10, 7]),
    FaceSpec::new(Qlq, &[5, 3, 0, 2, 11, 8]),
];

static BIQUADRATIC_QUADRATIC_WEDGE: [FaceSpec; 5] = [
    FaceSpec::new(Qt, &[0, 1, 2, 6, 7, 8]),
    FaceSpec::new(Qt, &[3, 5, 4, 11, 10, 9]),
    FaceSpec::new(Bqq, &[0, 3, 4, 1, 12, 9, 13, 6, 15]),
    FaceSpec::new(Bqq, &[1, 4, 5, 2, 13, 10, 14, 7, 16]),
    FaceSpec::new(Bqq, &[2, 5, 3, 0, 14, 11, 12, 8, 17]),
];

// Only the four lateral faces carry a center node (20..=23).
static BIQUADRATIC_QUADRATIC_HEXAHEDRON: [FaceSpec; 6] = [
    FaceSpec::new(Bqq, &[0, 4, 7, 3, 16, 15, 19, 11, 20]),
    FaceSpec::new(Bqq, &[1, 2, 6, 5, 9, 18, 13, 17, 21]),
    FaceSpec::new(Bqq, &[0, 1, 5, 4, 8, 17, 12, 16, 22]),
    FaceSpec::new(Bqq, &[3, 7, 6, 2, 19, 14, 18, 10, 23]),
    FaceSpec::new(Qq, &[0, 3, 2, 1, 11, 10, 9, 8]),
    FaceSpec::new(Qq, &[4, 5, 6, 7, 12, 13, 14, 15]),
];

static TRIQUADRATIC_PYRAMID: [FaceSpec; 5] = [
    FaceSpec::new(Bqq, &[0, 3, 2, 1, 8, 7, 6, 5, 13]),
    FaceSpec::new(Bqt, &[0, 1, 4, 5, 10, 9, 14]),
    FaceSpec::new(Bqt, &[1, 2, 4, 6, 11, 10, 15]),
    FaceSpec::new(Bqt, &[2, 3, 4, 7, 12, 11, 16]),
    FaceSpec::new(Bqt, &[3, 0, 4, 8, 9, 12, 17]),
];

pub(super) fn faces_of(cell_type: CellType) -> Option<&'static [FaceSpec]> {
    let faces: &'static [FaceSpec] = match cell_type {
        CellType::Tetra => &TETRA,
        CellType::Voxel => &VOXEL,
        CellType::Hexahedron => &HEXAHEDRON,
        CellType::Wedge => &WEDGE,
        CellType::Pyramid => &PYRAMID,
        CellType::PentagonalPrism => &PENTAGONAL_PRISM,
        CellType::HexagonalPrism => &HEXAGONAL_PRISM,
        CellType::QuadraticTetra => &QUADRATIC_TETRA,
        CellType::QuadraticHexahedron => &QUADRATIC_HEXAHEDRON,
        CellType::QuadraticWedge => &QUADRATIC_WEDGE,
        CellType::QuadraticPyramid => &QUADRATIC_PYRAMID,
        CellType::TriquadraticHexahedron => &TRIQUADRATIC_HEXAHEDRON,
        CellType::QuadraticLinearWedge => &QUADRATIC_LINEAR_WEDGE,
        CellType::BiquadraticQuadraticWedge => &BIQUADRATIC_QUADRATIC_WEDGE,
        CellType::BiquadraticQuadraticHexahedron => &BIQUADRATIC_QUADRATIC_HEXAHEDRON,
        CellType::TriquadraticPyramid => &TRIQUADRATIC_PYRAMID,
        _ => return None,
    };
    Some(faces)
}
