use thiserror::Error;

use crate::cell::CellType;

/// A non-fatal condition met during an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionWarning {
    #[error("input mesh has no cells")]
    EmptyInput,

    #[error("cell {cell} has unsupported 3D type {cell_type:?}; skipped")]
    UnsupportedCellType { cell: usize, cell_type: CellType },

    #[error("extraction aborted after {cells_processed} cells")]
    Aborted { cells_processed: usize },
}

/// Counters and warnings collected by one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Cells examined in the classify pass.
    pub cells_visited: usize,
    /// Cells rejected by ghost level or clipping.
    pub cells_hidden: usize,
    /// 0D, 1D and 2D cells copied straight to the output.
    pub cells_passed_through: usize,
    /// Faces of 3D cells fed to the surfel table.
    pub faces_inserted: usize,
    /// Distinct faces stored in the surfel table.
    pub surfels_allocated: usize,
    /// Faces found shared by two cells.
    pub internal_faces: usize,
    /// Faces seen again after being marked internal.
    pub non_manifold_faces: usize,
    /// Boundary faces written to the output.
    pub boundary_faces: usize,
    pub warnings: Vec<ExtractionWarning>,
}

impl ExtractionReport {
    /// `true` when every input cell was handled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.warnings.iter().any(|w| {
            matches!(
                w,
                ExtractionWarning::UnsupportedCellType { .. } | ExtractionWarning::Aborted { .. }
            )
        })
    }

    #[must_use]
    pub fn was_aborted(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ExtractionWarning::Aborted { .. }))
    }
}
