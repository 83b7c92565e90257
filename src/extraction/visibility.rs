use crate::mesh::{Cell, UnstructuredMesh};

use super::ExtractionParams;

/// Decides which input cells take part in an extraction.
///
/// A cell is visible when its ghost level is within range and, for each
/// enabled clip, its id, every point id and every point position pass.
#[derive(Debug, Clone, Copy)]
pub struct Visibility<'a> {
    mesh: &'a UnstructuredMesh,
    params: &'a ExtractionParams,
}

impl<'a> Visibility<'a> {
    #[must_use]
    pub fn new(mesh: &'a UnstructuredMesh, params: &'a ExtractionParams) -> Self {
        Self { mesh, params }
    }

    #[must_use]
    pub fn is_visible(&self, cell: &Cell<'_>) -> bool {
        let p = self.params;
        if self.mesh.ghost_level(cell.id) > p.max_ghost_level {
            return false;
        }
        if p.cell_clipping && !(p.cell_minimum..=p.cell_maximum).contains(&cell.id) {
            return false;
        }
        if p.point_clipping
            && !cell
                .point_ids
                .iter()
                .all(|id| (p.point_minimum..=p.point_maximum).contains(id))
        {
            return false;
        }
        if p.extent_clipping {
            let points = self.mesh.points();
            return cell
                .point_ids
                .iter()
                .all(|&id| p.extent.contains(&points[id]));
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cell::CellType;
    use crate::math::{Aabb, Point3};

    /// Two triangles side by side along x.
    fn strip() -> UnstructuredMesh {
        let mut mesh = UnstructuredMesh::with_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ]);
        mesh.add_cell(CellType::Triangle, &[0, 1, 2]).unwrap();
        mesh.add_cell(CellType::Triangle, &[1, 3, 2]).unwrap();
        mesh
    }

    fn visible(mesh: &UnstructuredMesh, params: &ExtractionParams) -> Vec<usize> {
        let vis = Visibility::new(mesh, params);
        mesh.cells().filter(|c| vis.is_visible(c)).map(|c| c.id).collect()
    }

    #[test]
    fn everything_visible_by_default() {
        assert_eq!(visible(&strip(), &ExtractionParams::default()), vec![0, 1]);
    }

    #[test]
    fn cell_range() {
        let params = ExtractionParams {
            cell_clipping: true,
            cell_minimum: 1,
            cell_maximum: 1,
            ..ExtractionParams::default()
        };
        assert_eq!(visible(&strip(), &params), vec![1]);
    }

    #[test]
    fn point_range_requires_every_point() {
        let params = ExtractionParams {
            point_clipping: true,
            point_maximum: 2,
            ..ExtractionParams::default()
        };
        assert_eq!(visible(&strip(), &params), vec![0]);
    }

    #[test]
    fn extent_requires_every_point() {
        let params = ExtractionParams {
            extent_clipping: true,
            extent: Aabb::new(Point3::new(0.5, -1.0, -1.0), Point3::new(3.0, 2.0, 1.0)),
            ..ExtractionParams::default()
        };
        assert!(visible(&strip(), &params).is_empty());

        let params = ExtractionParams {
            extent: Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.5, 2.0, 1.0)),
            ..params
        };
        assert_eq!(visible(&strip(), &params), vec![0]);
    }

    #[test]
    fn ghost_cells_hidden_above_level() {
        let mut mesh = strip();
        mesh.set_ghost_levels(vec![0, 1]).unwrap();
        assert_eq!(visible(&mesh, &ExtractionParams::default()), vec![0]);
        let params = ExtractionParams {
            max_ghost_level: 1,
            ..ExtractionParams::default()
        };
        assert_eq!(visible(&mesh, &params), vec![0, 1]);
    }
}
