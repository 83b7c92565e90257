//! Boundary surface extraction for unstructured volumetric meshes.

pub mod cell;
pub mod error;
pub mod extraction;
pub mod math;
pub mod mesh;
pub mod surfel;

pub use error::{CellskinError, Result};
pub use extraction::{ExtractBoundary, Extraction, ExtractionParams, ExtractionReport};
