use std::ops::{Index, IndexMut};

use super::{Surfel, SurfelIndex};

/// Append-only arena of surfels.
///
/// Storage is a directory of fixed-capacity chunks. A chunk is never
/// reallocated once created, so both the [`SurfelIndex`] and the address of
/// a surfel stay valid for the life of the pool. There is no way to free a
/// single surfel; the whole pool is dropped at the end of an extraction.
#[derive(Debug, Clone)]
pub struct SurfelPool {
    chunks: Vec<Vec<Surfel>>,
    chunk_size: usize,
    len: usize,
}

impl SurfelPool {
    /// Default number of surfels per chunk.
    pub const DEFAULT_CHUNK_SIZE: usize = 50;

    /// Initial capacity of the chunk directory.
    const INITIAL_CHUNKS: usize = 10;

    /// Creates an empty pool handing out chunks of `chunk_size` surfels.
    #[must_use]
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(Self::INITIAL_CHUNKS),
            chunk_size: chunk_size.max(1),
            len: 0,
        }
    }

    /// Stores `surfel` and returns its slot.
    pub fn allocate(&mut self, surfel: Surfel) -> SurfelIndex {
        let full = self
            .chunks
            .last()
            .is_none_or(|chunk| chunk.len() == self.chunk_size);
        if full {
            if self.chunks.len() == self.chunks.capacity() {
                // Double the directory; chunk contents never move.
                self.chunks.reserve_exact(self.chunks.capacity().max(1));
            }
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }
        if let Some(chunk) = self.chunks.last_mut() {
            chunk.push(surfel);
        }
        self.len += 1;
        SurfelIndex(self.len - 1)
    }

    /// Returns the surfel at `index`, if it has been allocated.
    #[must_use]
    pub fn get(&self, index: SurfelIndex) -> Option<&Surfel> {
        self.chunks
            .get(index.0 / self.chunk_size)?
            .get(index.0 % self.chunk_size)
    }

    /// Mutable counterpart of [`SurfelPool::get`].
    pub fn get_mut(&mut self, index: SurfelIndex) -> Option<&mut Surfel> {
        self.chunks
            .get_mut(index.0 / self.chunk_size)?
            .get_mut(index.0 % self.chunk_size)
    }

    /// Number of surfels handed out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks currently allocated.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Iterates over every surfel in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &Surfel> {
        self.chunks.iter().flatten()
    }
}

impl Default for SurfelPool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_SIZE)
    }
}

impl Index<SurfelIndex> for SurfelPool {
    type Output = Surfel;

    fn index(&self, index: SurfelIndex) -> &Surfel {
        &self.chunks[index.0 / self.chunk_size][index.0 % self.chunk_size]
    }
}

impl IndexMut<SurfelIndex> for SurfelPool {
    fn index_mut(&mut self, index: SurfelIndex) -> &mut Surfel {
        &mut self.chunks[index.0 / self.chunk_size][index.0 % self.chunk_size]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cell::FaceType;

    fn triangle(cell: usize) -> Surfel {
        Surfel::new(cell, FaceType::Triangle, &[cell, cell + 1, cell + 2]).unwrap()
    }

    #[test]
    fn indices_are_sequential() {
        let mut pool = SurfelPool::new(3);
        let ids: Vec<_> = (0..7).map(|c| pool.allocate(triangle(c))).collect();
        assert_eq!(ids.iter().map(|i| i.get()).collect::<Vec<_>>(), (0..7).collect::<Vec<_>>());
        assert_eq!(pool.len(), 7);
        assert_eq!(pool.chunk_count(), 3);
        assert_eq!(pool[ids[5]].boundary_owner(), Some(5));
    }

    #[test]
    fn addresses_survive_growth() {
        let mut pool = SurfelPool::new(2);
        let first = pool.allocate(triangle(0));
        let before: *const Surfel = &pool[first];
        // Push well past the initial directory capacity.
        for c in 1..200 {
            pool.allocate(triangle(c));
        }
        assert!(pool.chunk_count() > SurfelPool::INITIAL_CHUNKS);
        assert!(std::ptr::eq(before, &pool[first]));
        assert_eq!(pool[first], triangle(0));
    }

    #[test]
    fn get_out_of_range() {
        let mut pool = SurfelPool::default();
        assert!(pool.is_empty());
        let id = pool.allocate(triangle(0));
        assert!(pool.get(id).is_some());
        assert!(pool.get(SurfelIndex(1)).is_none());
        assert!(pool.get(SurfelIndex(500)).is_none());
    }

    #[test]
    fn mutation_through_index() {
        let mut pool = SurfelPool::default();
        let id = pool.allocate(triangle(3));
        pool[id].owner = crate::surfel::Owner::Internal;
        assert_eq!(pool.get_mut(id).unwrap().boundary_owner(), None);
        assert_eq!(pool.iter().count(), 1);
    }

    #[test]
    fn zero_chunk_size_is_clamped() {
        let mut pool = SurfelPool::new(0);
        pool.allocate(triangle(0));
        pool.allocate(triangle(1));
        assert_eq!(pool.chunk_size(), 1);
        assert_eq!(pool.chunk_count(), 2);
    }
}
