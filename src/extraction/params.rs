use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::math::{Aabb, TOLERANCE};
use crate::surfel::SurfelPool;

/// Parameters controlling which cells are extracted and how output points
/// are built.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionParams {
    /// Skip cells using a point id outside `point_minimum..=point_maximum`.
    pub point_clipping: bool,
    pub point_minimum: usize,
    pub point_maximum: usize,
    /// Skip cells whose id is outside `cell_minimum..=cell_maximum`.
    pub cell_clipping: bool,
    pub cell_minimum: usize,
    pub cell_maximum: usize,
    /// Skip cells with a point outside `extent`.
    pub extent_clipping: bool,
    pub extent: Aabb,
    /// Cells with a higher ghost level are skipped.
    pub max_ghost_level: u8,
    /// Merge coincident output points within `merge_tolerance`.
    pub merging: bool,
    pub merge_tolerance: f64,
    /// Attach the source point id of every output point.
    pub pass_through_point_ids: bool,
    /// Attach the source cell id of every output cell.
    pub pass_through_cell_ids: bool,
    /// Number of surfels per pool chunk.
    pub chunk_size: usize,
}

impl Default for ExtractionParams {
    fn default() -> Self {
        Self {
            point_clipping: false,
            point_minimum: 0,
            point_maximum: usize::MAX,
            cell_clipping: false,
            cell_minimum: 0,
            cell_maximum: usize::MAX,
            extent_clipping: false,
            extent: Aabb::unbounded(),
            max_ghost_level: 0,
            merging: false,
            merge_tolerance: TOLERANCE,
            pass_through_point_ids: false,
            pass_through_cell_ids: false,
            chunk_size: SurfelPool::DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Shared flag used to stop a running extraction early.
///
/// Clones share the same flag, so one clone can be handed to the
/// extraction while another is kept to request the stop.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the extraction to stop at its next check.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clears a pending request.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
