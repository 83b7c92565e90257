mod attributes;

pub use attributes::{AttributeArray, Attributes};

use crate::cell::CellType;
use crate::error::MeshError;
use crate::math::{Aabb, Point3};

/// A borrowed view of one cell of an [`UnstructuredMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Index of the cell in its mesh.
    pub id: usize,
    /// Topology tag.
    pub cell_type: CellType,
    /// Ordered point ids, as fixed by the topology tag.
    pub point_ids: &'a [usize],
}

/// A mesh of heterogeneous cells over a shared point list.
///
/// Connectivity is stored flat: cell `i` owns
/// `connectivity[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnstructuredMesh {
    points: Vec<Point3>,
    cell_types: Vec<CellType>,
    offsets: Vec<usize>,
    connectivity: Vec<usize>,
    ghost_levels: Option<Vec<u8>>,
    /// Per-point attribute arrays.
    pub point_data: Attributes,
    /// Per-cell attribute arrays.
    pub cell_data: Attributes,
}

impl Default for UnstructuredMesh {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            cell_types: Vec::new(),
            offsets: vec![0],
            connectivity: Vec::new(),
            ghost_levels: None,
            point_data: Attributes::new(),
            cell_data: Attributes::new(),
        }
    }
}

impl UnstructuredMesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with the given points and no cells.
    #[must_use]
    pub fn with_points(points: Vec<Point3>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Appends a point and returns its id.
    pub fn add_point(&mut self, p: Point3) -> usize {
        self.points.push(p);
        self.points.len() - 1
    }

    /// Appends a cell and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::WrongPointCount`] if `point_ids` has an illegal
    /// length for `cell_type`, or [`MeshError::PointOutOfRange`] if a point
    /// id is not in the mesh.
    pub fn add_cell(&mut self, cell_type: CellType, point_ids: &[usize]) -> Result<usize, MeshError> {
        cell_type.check_point_count(point_ids.len())?;
        let cell = self.cell_types.len();
        if let Some(&point) = point_ids.iter().find(|&&p| p >= self.points.len()) {
            return Err(MeshError::PointOutOfRange {
                cell,
                point,
                num_points: self.points.len(),
            });
        }
        self.cell_types.push(cell_type);
        self.connectivity.extend_from_slice(point_ids);
        self.offsets.push(self.connectivity.len());
        if let Some(levels) = &mut self.ghost_levels {
            levels.push(0);
        }
        Ok(cell)
    }

    /// Attaches one ghost level per cell.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ArrayLength`] if `levels` does not hold one entry
    /// per cell.
    pub fn set_ghost_levels(&mut self, levels: Vec<u8>) -> Result<(), MeshError> {
        if levels.len() != self.num_cells() {
            return Err(MeshError::ArrayLength {
                name: "ghost levels",
                expected: self.num_cells(),
                actual: levels.len(),
            });
        }
        self.ghost_levels = Some(levels);
        Ok(())
    }

    /// Ghost level of `cell`; 0 when the mesh carries none.
    #[must_use]
    pub fn ghost_level(&self, cell: usize) -> u8 {
        self.ghost_levels
            .as_ref()
            .and_then(|levels| levels.get(cell).copied())
            .unwrap_or(0)
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cell_types.len()
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, id: usize) -> Option<&Point3> {
        self.points.get(id)
    }

    /// Returns cell `id`, if it exists.
    #[must_use]
    pub fn cell(&self, id: usize) -> Option<Cell<'_>> {
        let cell_type = *self.cell_types.get(id)?;
        let range = self.offsets[id]..self.offsets[id + 1];
        Some(Cell {
            id,
            cell_type,
            point_ids: &self.connectivity[range],
        })
    }

    /// Iterates over every cell in id order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> {
        self.cell_types
            .iter()
            .zip(self.offsets.windows(2))
            .enumerate()
            .map(|(id, (&cell_type, w))| Cell {
                id,
                cell_type,
                point_ids: &self.connectivity[w[0]..w[1]],
            })
    }

    /// Bounding box of every point, or `None` for a mesh without points.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tetra_mesh() -> UnstructuredMesh {
        let mut mesh = UnstructuredMesh::with_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        mesh.add_cell(CellType::Tetra, &[0, 1, 2, 3]).unwrap();
        mesh.add_cell(CellType::Triangle, &[0, 1, 2]).unwrap();
        mesh
    }

    #[test]
    fn cells_are_sliced_from_connectivity() {
        let mesh = tetra_mesh();
        assert_eq!(mesh.num_cells(), 2);
        let tri = mesh.cell(1).unwrap();
        assert_eq!(tri.cell_type, CellType::Triangle);
        assert_eq!(tri.point_ids, &[0, 1, 2]);
        let all: Vec<_> = mesh.cells().collect();
        assert_eq!(all[0].point_ids, &[0, 1, 2, 3]);
        assert_eq!(all[1], tri);
        assert!(mesh.cell(2).is_none());
    }

    #[test]
    fn add_cell_rejects_bad_point_ids() {
        let mut mesh = tetra_mesh();
        let err = mesh.add_cell(CellType::Triangle, &[0, 1, 9]).unwrap_err();
        assert!(matches!(err, MeshError::PointOutOfRange { cell: 2, point: 9, .. }));
        assert_eq!(mesh.num_cells(), 2);
    }

    #[test]
    fn add_cell_rejects_wrong_arity() {
        let mut mesh = tetra_mesh();
        let err = mesh.add_cell(CellType::Hexahedron, &[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, MeshError::WrongPointCount { expected: 8, actual: 4, .. }));
    }

    #[test]
    fn ghost_levels_follow_cells() {
        let mut mesh = tetra_mesh();
        assert!(mesh.set_ghost_levels(vec![1]).is_err());
        mesh.set_ghost_levels(vec![0, 2]).unwrap();
        mesh.add_cell(CellType::Vertex, &[3]).unwrap();
        assert_eq!(mesh.ghost_level(1), 2);
        assert_eq!(mesh.ghost_level(2), 0);
    }

    #[test]
    fn bounds_of_points() {
        let mesh = tetra_mesh();
        let b = mesh.bounds().unwrap();
        assert_eq!(b.max, Point3::new(1.0, 1.0, 1.0));
        assert!(UnstructuredMesh::new().bounds().is_none());
    }
}
