use thiserror::Error;

use crate::cell::{CellType, FaceType};

/// Top-level error type for boundary extraction.
#[derive(Debug, Error)]
pub enum CellskinError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Errors raised while building or reading an unstructured mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("cell {cell} references point {point}, but the mesh has {num_points} points")]
    PointOutOfRange {
        cell: usize,
        point: usize,
        num_points: usize,
    },

    #[error("{cell_type:?} cell needs {expected} points, got {actual}")]
    WrongPointCount {
        cell_type: CellType,
        expected: usize,
        actual: usize,
    },

    #[error("{face_type:?} face cannot have {num_points} points")]
    MalformedFace {
        face_type: FaceType,
        num_points: usize,
    },

    #[error("unknown cell type code {0}")]
    UnknownCellType(u8),

    #[error("{name} has {actual} entries, expected {expected}")]
    ArrayLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised by the attribute-copy layer.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("attribute array '{name}' holds {actual} tuples, expected {expected}")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("tuple {index} is out of range for attribute array '{name}' of {len} tuples")]
    TupleOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("attribute array '{0}' not found")]
    MissingArray(String),
}

/// Convenience type alias for results using [`CellskinError`].
pub type Result<T> = std::result::Result<T, CellskinError>;
