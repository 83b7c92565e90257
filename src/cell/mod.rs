mod face_table;

pub use face_table::FaceSpec;

use crate::error::MeshError;

/// Topology tag of an input cell.
///
/// Discriminants are stable numeric codes shared with the common
/// unstructured-grid file formats, so meshes can be read straight from
/// their type arrays with [`CellType::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellType {
    Empty = 0,
    Vertex = 1,
    PolyVertex = 2,
    Line = 3,
    PolyLine = 4,
    Triangle = 5,
    TriangleStrip = 6,
    Polygon = 7,
    Pixel = 8,
    Quad = 9,
    Tetra = 10,
    Voxel = 11,
    Hexahedron = 12,
    Wedge = 13,
    Pyramid = 14,
    PentagonalPrism = 15,
    HexagonalPrism = 16,
    QuadraticEdge = 21,
    QuadraticTriangle = 22,
    QuadraticQuad = 23,
    QuadraticTetra = 24,
    QuadraticHexahedron = 25,
    QuadraticWedge = 26,
    QuadraticPyramid = 27,
    BiquadraticQuad = 28,
    TriquadraticHexahedron = 29,
    QuadraticLinearQuad = 30,
    QuadraticLinearWedge = 31,
    BiquadraticQuadraticWedge = 32,
    BiquadraticQuadraticHexahedron = 33,
    BiquadraticTriangle = 34,
    CubicLine = 35,
    TriquadraticPyramid = 37,
    ConvexPointSet = 41,
    Polyhedron = 42,
}

impl CellType {
    /// Every supported tag, in code order.
    pub const ALL: [CellType; 35] = [
        Self::Empty,
        Self::Vertex,
        Self::PolyVertex,
        Self::Line,
        Self::PolyLine,
        Self::Triangle,
        Self::TriangleStrip,
        Self::Polygon,
        Self::Pixel,
        Self::Quad,
        Self::Tetra,
        Self::Voxel,
        Self::Hexahedron,
        Self::Wedge,
        Self::Pyramid,
        Self::PentagonalPrism,
        Self::HexagonalPrism,
        Self::QuadraticEdge,
        Self::QuadraticTriangle,
        Self::QuadraticQuad,
        Self::QuadraticTetra,
        Self::QuadraticHexahedron,
        Self::QuadraticWedge,
        Self::QuadraticPyramid,
        Self::BiquadraticQuad,
        Self::TriquadraticHexahedron,
        Self::QuadraticLinearQuad,
        Self::QuadraticLinearWedge,
        Self::BiquadraticQuadraticWedge,
        Self::BiquadraticQuadraticHexahedron,
        Self::BiquadraticTriangle,
        Self::CubicLine,
        Self::TriquadraticPyramid,
        Self::ConvexPointSet,
        Self::Polyhedron,
    ];

    /// Numeric code of this tag.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Topological dimension of the cell.
    #[must_use]
    pub fn dimension(self) -> u8 {
        match self {
            Self::Empty | Self::Vertex | Self::PolyVertex => 0,
            Self::Line | Self::PolyLine | Self::QuadraticEdge | Self::CubicLine => 1,
            Self::Triangle
            | Self::TriangleStrip
            | Self::Polygon
            | Self::Pixel
            | Self::Quad
            | Self::QuadraticTriangle
            | Self::QuadraticQuad
            | Self::BiquadraticQuad
            | Self::QuadraticLinearQuad
            | Self::BiquadraticTriangle => 2,
            _ => 3,
        }
    }

    /// Fixed number of points, or `None` for variable-length cells.
    #[must_use]
    pub fn point_count(self) -> Option<usize> {
        let n = match self {
            Self::Empty => 0,
            Self::Vertex => 1,
            Self::Line => 2,
            Self::Triangle | Self::QuadraticEdge => 3,
            Self::Pixel | Self::Quad | Self::Tetra | Self::CubicLine => 4,
            Self::Pyramid => 5,
            Self::Wedge | Self::QuadraticTriangle | Self::QuadraticLinearQuad => 6,
            Self::BiquadraticTriangle => 7,
            Self::Voxel | Self::Hexahedron | Self::QuadraticQuad => 8,
            Self::BiquadraticQuad => 9,
            Self::PentagonalPrism | Self::QuadraticTetra => 10,
            Self::HexagonalPrism | Self::QuadraticLinearWedge => 12,
            Self::QuadraticPyramid => 13,
            Self::QuadraticWedge => 15,
            Self::BiquadraticQuadraticWedge => 18,
            Self::TriquadraticPyramid => 19,
            Self::QuadraticHexahedron => 20,
            Self::BiquadraticQuadraticHexahedron => 24,
            Self::TriquadraticHexahedron => 27,
            Self::PolyVertex
            | Self::PolyLine
            | Self::TriangleStrip
            | Self::Polygon
            | Self::ConvexPointSet
            | Self::Polyhedron => return None,
        };
        Some(n)
    }

    /// Smallest legal number of points.
    #[must_use]
    pub fn min_point_count(self) -> usize {
        match self {
            Self::PolyVertex => 1,
            Self::PolyLine => 2,
            Self::TriangleStrip | Self::Polygon => 3,
            Self::ConvexPointSet | Self::Polyhedron => 4,
            other => other.point_count().unwrap_or(0),
        }
    }

    /// Checks a point list length against this tag.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::WrongPointCount`] if `len` is not a legal length.
    pub fn check_point_count(self, len: usize) -> Result<(), MeshError> {
        let ok = match self.point_count() {
            Some(n) => len == n,
            None => len >= self.min_point_count(),
        };
        if ok {
            Ok(())
        } else {
            Err(MeshError::WrongPointCount {
                cell_type: self,
                expected: self.point_count().unwrap_or_else(|| self.min_point_count()),
                actual: len,
            })
        }
    }

    /// Face table of a 3D cell, or `None` if this tag has no fixed faces.
    #[must_use]
    pub fn faces(self) -> Option<&'static [FaceSpec]> {
        face_table::faces_of(self)
    }
}

impl TryFrom<u8> for CellType {
    type Error = MeshError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or(MeshError::UnknownCellType(code))
    }
}

/// Topology tag of a face of a 3D cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceType {
    Triangle,
    Quad,
    Polygon,
    QuadraticTriangle,
    QuadraticQuad,
    BiquadraticTriangle,
    BiquadraticQuad,
    QuadraticLinearQuad,
}

impl FaceType {
    /// The 2D cell type emitted for a face of this type.
    #[must_use]
    pub fn cell_type(self) -> CellType {
        match self {
            Self::Triangle => CellType::Triangle,
            Self::Quad => CellType::Quad,
            Self::Polygon => CellType::Polygon,
            Self::QuadraticTriangle => CellType::QuadraticTriangle,
            Self::QuadraticQuad => CellType::QuadraticQuad,
            Self::BiquadraticTriangle => CellType::BiquadraticTriangle,
            Self::BiquadraticQuad => CellType::BiquadraticQuad,
            Self::QuadraticLinearQuad => CellType::QuadraticLinearQuad,
        }
    }

    /// Numeric code used when hashing faces.
    #[must_use]
    pub fn code(self) -> u8 {
        self.cell_type().code()
    }

    /// Fixed number of points, or `None` for polygons.
    #[must_use]
    pub fn point_count(self) -> Option<usize> {
        self.cell_type().point_count()
    }

    /// Number of corner points for a face with `num_points` points.
    ///
    /// Polygons have no mid-edge nodes, so every point is a corner.
    #[must_use]
    pub fn corner_count(self, num_points: usize) -> usize {
        match self {
            Self::Triangle | Self::QuadraticTriangle | Self::BiquadraticTriangle => 3,
            Self::Quad | Self::QuadraticQuad | Self::BiquadraticQuad | Self::QuadraticLinearQuad => {
                4
            }
            Self::Polygon => num_points,
        }
    }
}
