use crate::cell::FaceType;
use crate::error::MeshError;

use super::{faces_match, Owner, Surfel, SurfelIndex, SurfelPool};

/// Outcome of [`SurfelHashTable::insert_face`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// First occurrence; a new boundary candidate was stored.
    Inserted(SurfelIndex),
    /// Second occurrence; the stored surfel is now internal.
    Matched(SurfelIndex),
    /// The face was already internal (non-manifold input). Nothing changed.
    Repeated(SurfelIndex),
}

/// Chained hash table of surfels keyed by face type and smallest corner id.
///
/// Bucket chains are singly linked through [`SurfelIndex`] slots of the
/// owned [`SurfelPool`].
#[derive(Debug, Clone)]
pub struct SurfelHashTable {
    buckets: Vec<Option<SurfelIndex>>,
    pool: SurfelPool,
}

impl SurfelHashTable {
    /// Multiplier mixing the face type into the hash.
    pub const PRIME: usize = 31;

    /// Creates a table with `bucket_count` buckets (at least one).
    ///
    /// One bucket per mesh point keeps chains short in practice.
    #[must_use]
    pub fn new(bucket_count: usize, chunk_size: usize) -> Self {
        Self {
            buckets: vec![None; bucket_count.max(1)],
            pool: SurfelPool::new(chunk_size),
        }
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct faces stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    #[must_use]
    pub fn pool(&self) -> &SurfelPool {
        &self.pool
    }

    #[must_use]
    pub fn get(&self, index: SurfelIndex) -> Option<&Surfel> {
        self.pool.get(index)
    }

    fn bucket_of(&self, face_type: FaceType, smallest_id: usize) -> usize {
        (usize::from(face_type.code()) * Self::PRIME).wrapping_add(smallest_id) % self.buckets.len()
    }

    /// Records that cell `cell` has a face of type `face_type` with the
    /// given point ids, in that cell's winding.
    ///
    /// A face matching a stored surfel marks it internal; otherwise a new
    /// surfel is appended to the tail of its bucket chain.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedFace`] if `points` has an illegal length
    /// for `face_type`.
    pub fn insert_face(
        &mut self,
        cell: usize,
        face_type: FaceType,
        points: &[usize],
    ) -> Result<Insertion, MeshError> {
        let candidate = Surfel::new(cell, face_type, points)?;
        let key = self.bucket_of(face_type, candidate.smallest_id());

        let mut tail = None;
        let mut link = self.buckets[key];
        while let Some(index) = link {
            let existing = &mut self.pool[index];
            if existing.face_type == face_type && faces_match(&candidate, existing) {
                return Ok(match existing.owner {
                    Owner::Cell(_) => {
                        existing.owner = Owner::Internal;
                        Insertion::Matched(index)
                    }
                    Owner::Internal => Insertion::Repeated(index),
                });
            }
            tail = Some(index);
            link = existing.next;
        }

        let index = self.pool.allocate(candidate);
        match tail {
            Some(last) => self.pool[last].next = Some(index),
            None => self.buckets[key] = Some(index),
        }
        Ok(Insertion::Inserted(index))
    }

    /// A cursor positioned on the first stored surfel.
    #[must_use]
    pub fn cursor(&self) -> SurfelCursor<'_> {
        let mut cursor = SurfelCursor {
            table: self,
            bucket: 0,
            current: None,
        };
        cursor.start();
        cursor
    }

    /// Surfels still owned by a single cell, in cursor order.
    pub fn boundary(&self) -> impl Iterator<Item = &Surfel> {
        self.cursor().filter(|s| s.boundary_owner().is_some())
    }
}

/// Forward walk over every bucket and chain entry of a [`SurfelHashTable`].
///
/// Each stored surfel is visited exactly once per pass; [`SurfelCursor::start`]
/// rewinds to the beginning.
#[derive(Debug, Clone)]
pub struct SurfelCursor<'a> {
    table: &'a SurfelHashTable,
    bucket: usize,
    current: Option<SurfelIndex>,
}

impl<'a> SurfelCursor<'a> {
    /// Positions the cursor on the head of the first non-empty bucket.
    pub fn start(&mut self) {
        self.seek_from(0);
    }

    /// Steps to the next surfel in the chain, then across buckets.
    pub fn advance(&mut self) {
        if let Some(index) = self.current {
            match self.table.pool[index].next {
                Some(next) => self.current = Some(next),
                None => self.seek_from(self.bucket + 1),
            }
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// The surfel under the cursor, or `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a Surfel> {
        self.current.map(|index| &self.table.pool[index])
    }

    fn seek_from(&mut self, bucket: usize) {
        let buckets = &self.table.buckets;
        let found = (bucket..buckets.len()).find_map(|b| buckets[b].map(|head| (b, head)));
        if let Some((b, head)) = found {
            self.bucket = b;
            self.current = Some(head);
        } else {
            self.bucket = buckets.len();
            self.current = None;
        }
    }
}

impl<'a> Iterator for SurfelCursor<'a> {
    type Item = &'a Surfel;

    fn next(&mut self) -> Option<Self::Item> {
        let surfel = self.current()?;
        self.advance();
        Some(surfel)
    }
}
