mod merge;
mod params;
mod report;
mod visibility;

pub use merge::{Merged, PointLocator, PointMap, PointMerger};
pub use params::{AbortFlag, ExtractionParams};
pub use report::{ExtractionReport, ExtractionWarning};
pub use visibility::Visibility;

use tracing::{debug, trace, warn};

use crate::cell::CellType;
use crate::error::Result;
use crate::mesh::{AttributeArray, UnstructuredMesh};
use crate::surfel::{Insertion, SurfelHashTable, MAX_FACE_POINTS};

/// Name of the output point array holding source point ids.
pub const ORIGINAL_POINT_IDS: &str = "OriginalPointIds";

/// Name of the output cell array holding source cell ids.
pub const ORIGINAL_CELL_IDS: &str = "OriginalCellIds";

/// Output of [`ExtractBoundary::execute`].
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Boundary faces plus every passed-through lower-dimensional cell.
    pub mesh: UnstructuredMesh,
    pub report: ExtractionReport,
}

/// Extracts the outer skin of an unstructured mesh.
///
/// The classify pass walks the input cells once. Cells of dimension 2 or
/// less are copied to the output; every face of a 3D cell is fed to a
/// [`SurfelHashTable`], where a face met twice is marked internal. The
/// harvest pass then emits each face seen only once, copying the cell
/// attributes of the cell that owns it.
#[derive(Debug, Clone, Default)]
pub struct ExtractBoundary {
    params: ExtractionParams,
    abort: Option<AbortFlag>,
}

impl ExtractBoundary {
    /// Creates a new `ExtractBoundary` operation.
    #[must_use]
    pub fn new(params: ExtractionParams) -> Self {
        Self {
            params,
            abort: None,
        }
    }

    /// Polls `flag` during the classify pass and stops early once it is set.
    #[must_use]
    pub fn with_abort(mut self, flag: AbortFlag) -> Self {
        self.abort = Some(flag);
        self
    }

    #[must_use]
    pub fn params(&self) -> &ExtractionParams {
        &self.params
    }

    /// Executes the extraction.
    ///
    /// An empty input and unsupported 3D cells are reported in
    /// [`ExtractionReport::warnings`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if an input attribute array does not hold one tuple
    /// per point or cell.
    pub fn execute(&self, mesh: &UnstructuredMesh) -> Result<Extraction> {
        let mut report = ExtractionReport::default();
        if mesh.num_cells() == 0 {
            warn!("input mesh has no cells; nothing to extract");
            report.warnings.push(ExtractionWarning::EmptyInput);
            return Ok(Extraction {
                mesh: UnstructuredMesh::new(),
                report,
            });
        }

        mesh.point_data.check_tuples(mesh.num_points())?;
        mesh.cell_data.check_tuples(mesh.num_cells())?;

        if self.params.merging {
            let locator = PointLocator::new(self.params.merge_tolerance, mesh.bounds());
            self.run(mesh, locator, report)
        } else {
            self.run(mesh, PointMap::new(mesh.num_points()), report)
        }
    }

    fn run<M: PointMerger>(
        &self,
        mesh: &UnstructuredMesh,
        merger: M,
        mut report: ExtractionReport,
    ) -> Result<Extraction> {
        let mut out = OutputBuilder::new(mesh, merger);
        let mut table = SurfelHashTable::new(mesh.num_points(), self.params.chunk_size);

        self.classify(mesh, &mut table, &mut out, &mut report)?;
        harvest(&table, &mut out, &mut report)?;

        Ok(Extraction {
            mesh: out.finish(&self.params)?,
            report,
        })
    }

    /// Passes lower-dimensional cells through and hashes the faces of 3D
    /// cells.
    fn classify<M: PointMerger>(
        &self,
        mesh: &UnstructuredMesh,
        table: &mut SurfelHashTable,
        out: &mut OutputBuilder<'_, M>,
        report: &mut ExtractionReport,
    ) -> Result<()> {
        let visibility = Visibility::new(mesh, &self.params);
        let num_cells = mesh.num_cells();
        let check_interval = num_cells / 20 + 1;
        let mut face_points = [0; MAX_FACE_POINTS];
        debug!(num_cells, buckets = table.bucket_count(), "classifying cells");

        for cell in mesh.cells() {
            if cell.id % check_interval == 0 {
                debug!(cell = cell.id, num_cells, "classify progress");
                if self.abort.as_ref().is_some_and(AbortFlag::is_requested) {
                    warn!(cells_processed = cell.id, "extraction aborted");
                    report.warnings.push(ExtractionWarning::Aborted {
                        cells_processed: cell.id,
                    });
                    break;
                }
            }
            report.cells_visited += 1;

            if cell.cell_type == CellType::Empty {
                continue;
            }
            if !visibility.is_visible(&cell) {
                report.cells_hidden += 1;
                continue;
            }
            if cell.cell_type.dimension() < 3 {
                out.emit(cell.cell_type, cell.point_ids, cell.id)?;
                report.cells_passed_through += 1;
                continue;
            }

            let Some(faces) = cell.cell_type.faces() else {
                warn!(cell = cell.id, cell_type = ?cell.cell_type, "unsupported 3D cell type; skipping cell");
                report.warnings.push(ExtractionWarning::UnsupportedCellType {
                    cell: cell.id,
                    cell_type: cell.cell_type,
                });
                continue;
            };

            for face in faces {
                let n = face.point_count();
                for (slot, &local) in face_points.iter_mut().zip(face.points) {
                    *slot = cell.point_ids[local];
                }
                match table.insert_face(cell.id, face.face_type, &face_points[..n])? {
                    Insertion::Inserted(_) => {}
                    Insertion::Matched(surfel) => {
                        report.internal_faces += 1;
                        trace!(cell = cell.id, surfel = surfel.get(), "face matched");
                    }
                    Insertion::Repeated(surfel) => {
                        report.non_manifold_faces += 1;
                        debug!(
                            cell = cell.id,
                            surfel = surfel.get(),
                            "face shared by more than two cells"
                        );
                    }
                }
                report.faces_inserted += 1;
            }
        }

        report.surfels_allocated = table.len();
        debug!(
            surfels = table.len(),
            chunks = table.pool().chunk_count(),
            "classify pass done"
        );
        Ok(())
    }
}

/// Emits every surfel still owned by a single cell.
fn harvest<M: PointMerger>(
    table: &SurfelHashTable,
    out: &mut OutputBuilder<'_, M>,
    report: &mut ExtractionReport,
) -> Result<()> {
    for surfel in table.cursor() {
        if let Some(owner) = surfel.boundary_owner() {
            out.emit(surfel.face_type().cell_type(), surfel.points(), owner)?;
            report.boundary_faces += 1;
        }
    }
    debug!(
        boundary = report.boundary_faces,
        internal = report.internal_faces,
        "harvest pass done"
    );
    Ok(())
}

/// Accumulates output points, cells and their attributes.
struct OutputBuilder<'a, M> {
    input: &'a UnstructuredMesh,
    merger: M,
    mesh: UnstructuredMesh,
    original_points: Vec<usize>,
    original_cells: Vec<usize>,
    scratch: Vec<usize>,
}

impl<'a, M: PointMerger> OutputBuilder<'a, M> {
    fn new(input: &'a UnstructuredMesh, merger: M) -> Self {
        let mut mesh = UnstructuredMesh::new();
        mesh.point_data = input.point_data.empty_like();
        mesh.cell_data = input.cell_data.empty_like();
        Self {
            input,
            merger,
            mesh,
            original_points: Vec::new(),
            original_cells: Vec::new(),
            scratch: Vec::with_capacity(MAX_FACE_POINTS),
        }
    }

    /// Appends a cell of `cell_type` over input points `point_ids`, taking
    /// its cell attributes from input cell `source_cell`.
    fn emit(&mut self, cell_type: CellType, point_ids: &[usize], source_cell: usize) -> Result<usize> {
        let input = self.input;
        self.scratch.clear();
        for &pid in point_ids {
            let coord = &input.points()[pid];
            let merged = self.merger.merge(pid, coord);
            if merged.is_new {
                self.mesh.add_point(*coord);
                self.mesh.point_data.copy_tuple(&input.point_data, pid)?;
                self.original_points.push(pid);
            }
            self.scratch.push(merged.id);
        }
        let id = self.mesh.add_cell(cell_type, &self.scratch)?;
        self.mesh.cell_data.copy_tuple(&input.cell_data, source_cell)?;
        self.original_cells.push(source_cell);
        Ok(id)
    }

    fn finish(mut self, params: &ExtractionParams) -> Result<UnstructuredMesh> {
        if params.pass_through_point_ids {
            self.mesh
                .point_data
                .insert(id_array(ORIGINAL_POINT_IDS, &self.original_points)?);
        }
        if params.pass_through_cell_ids {
            self.mesh
                .cell_data
                .insert(id_array(ORIGINAL_CELL_IDS, &self.original_cells)?);
        }
        Ok(self.mesh)
    }
}

#[allow(clippy::cast_precision_loss)]
fn id_array(name: &str, ids: &[usize]) -> Result<AttributeArray> {
    let values = ids.iter().map(|&id| id as f64).collect();
    Ok(AttributeArray::from_values(name, 1, values)?)
}
