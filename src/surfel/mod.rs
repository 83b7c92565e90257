//! Face records and the structures that deduplicate them.
//!
//! A [`Surfel`] is the materialized form of one face of a 3D cell. Surfels
//! live in a [`SurfelPool`] arena and are chained into the buckets of a
//! [`SurfelHashTable`]. The first cell to emit a face owns it; when a
//! second cell emits the same face (in the opposite winding, as
//! [`faces_match`] checks) the surfel is marked [`Owner::Internal`].

mod canonical;
mod pool;
mod table;

pub use canonical::faces_match;
pub use pool::SurfelPool;
pub use table::{Insertion, SurfelCursor, SurfelHashTable};

use crate::cell::FaceType;
use crate::error::MeshError;

/// Largest number of points a face can carry (a biquadratic quad).
pub const MAX_FACE_POINTS: usize = 9;

/// Stable slot of a surfel inside its [`SurfelPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfelIndex(pub(crate) usize);

impl SurfelIndex {
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

/// Who a surfel currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// Seen once so far: a boundary candidate owned by this cell.
    Cell(usize),
    /// Claimed by two cells: an internal face.
    Internal,
}

/// A materialized face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surfel {
    face_type: FaceType,
    points: [usize; MAX_FACE_POINTS],
    num_points: usize,
    smallest_idx: usize,
    /// Current ownership state.
    pub owner: Owner,
    pub(crate) next: Option<SurfelIndex>,
}

impl Surfel {
    /// Builds an unlinked surfel owned by `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedFace`] if `points` has an illegal length
    /// for `face_type`.
    pub fn new(cell: usize, face_type: FaceType, points: &[usize]) -> Result<Self, MeshError> {
        let legal = match face_type.point_count() {
            Some(n) => points.len() == n,
            None => (3..=MAX_FACE_POINTS).contains(&points.len()),
        };
        if !legal {
            return Err(MeshError::MalformedFace {
                face_type,
                num_points: points.len(),
            });
        }

        let mut buf = [0; MAX_FACE_POINTS];
        buf[..points.len()].copy_from_slice(points);
        let corners = face_type.corner_count(points.len());
        Ok(Self {
            face_type,
            points: buf,
            num_points: points.len(),
            smallest_idx: smallest_corner(&points[..corners]),
            owner: Owner::Cell(cell),
            next: None,
        })
    }

    #[must_use]
    pub fn face_type(&self) -> FaceType {
        self.face_type
    }

    /// Point ids, in the winding of the cell that created the surfel.
    #[must_use]
    pub fn points(&self) -> &[usize] {
        &self.points[..self.num_points]
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of leading corner points.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.face_type.corner_count(self.num_points)
    }

    /// Position of the smallest point id among the corners.
    #[must_use]
    pub fn smallest_idx(&self) -> usize {
        self.smallest_idx
    }

    /// The smallest corner point id.
    #[must_use]
    pub fn smallest_id(&self) -> usize {
        self.points[self.smallest_idx]
    }

    /// Owning cell, or `None` once the face is known to be internal.
    #[must_use]
    pub fn boundary_owner(&self) -> Option<usize> {
        match self.owner {
            Owner::Cell(cell) => Some(cell),
            Owner::Internal => None,
        }
    }
}

/// Index of the smallest id in `corners` (first one on ties).
fn smallest_corner(corners: &[usize]) -> usize {
    corners
        .iter()
        .enumerate()
        .min_by_key(|&(_, id)| id)
        .map_or(0, |(i, _)| i)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn smallest_idx_ignores_mid_edge_nodes() {
        let s = Surfel::new(4, FaceType::QuadraticTriangle, &[10, 7, 9, 1, 2, 3]).unwrap();
        assert_eq!(s.smallest_idx(), 1);
        assert_eq!(s.smallest_id(), 7);
        assert_eq!(s.boundary_owner(), Some(4));
    }

    #[test]
    fn polygon_corners_cover_all_points() {
        let s = Surfel::new(0, FaceType::Polygon, &[9, 8, 3, 5, 6]).unwrap();
        assert_eq!(s.corner_count(), 5);
        assert_eq!(s.smallest_idx(), 2);
        assert_eq!(s.points(), &[9, 8, 3, 5, 6]);
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert!(Surfel::new(0, FaceType::Quad, &[0, 1, 2]).is_err());
        assert!(Surfel::new(0, FaceType::Polygon, &[0, 1]).is_err());
        assert!(Surfel::new(0, FaceType::Polygon, &[0; 10]).is_err());
    }

    #[test]
    fn internal_surfel_has_no_boundary_owner() {
        let mut s = Surfel::new(0, FaceType::Triangle, &[0, 1, 2]).unwrap();
        s.owner = Owner::Internal;
        assert_eq!(s.boundary_owner(), None);
    }
}
