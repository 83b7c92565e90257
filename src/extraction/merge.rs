//! Mapping of input points to output points.

use hashbrown::HashMap;

use crate::math::{Aabb, Point3};

/// Result of merging one input point into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merged {
    /// Output point id.
    pub id: usize,
    /// `true` if this call created the output point.
    pub is_new: bool,
}

/// Assigns output point ids to the input points used by emitted cells.
///
/// Output ids are dense and handed out in first-use order.
pub trait PointMerger {
    /// Returns the output point for input point `input_id` at `coord`.
    fn merge(&mut self, input_id: usize, coord: &Point3) -> Merged;
}

/// One output point per distinct input point id.
#[derive(Debug, Clone)]
pub struct PointMap {
    map: Vec<Option<usize>>,
    next: usize,
}

impl PointMap {
    /// Creates a map over `num_points` input points.
    #[must_use]
    pub fn new(num_points: usize) -> Self {
        Self {
            map: vec![None; num_points],
            next: 0,
        }
    }
}

impl PointMerger for PointMap {
    fn merge(&mut self, input_id: usize, _coord: &Point3) -> Merged {
        if let Some(Some(id)) = self.map.get(input_id) {
            return Merged {
                id: *id,
                is_new: false,
            };
        }
        let id = self.next;
        self.next += 1;
        if let Some(slot) = self.map.get_mut(input_id) {
            *slot = Some(id);
        }
        Merged { id, is_new: true }
    }
}

type GridKey = (i64, i64, i64);

/// Merges points whose coordinates lie within a tolerance of each other.
///
/// Points are bucketed in a uniform grid whose spacing is at least twice
/// the tolerance, so a lookup only has to scan the 3x3x3 block of grid
/// cells around the query.
#[derive(Debug, Clone)]
pub struct PointLocator {
    grid: HashMap<GridKey, Vec<usize>>,
    points: Vec<Point3>,
    origin: Point3,
    spacing: f64,
    tolerance: f64,
}

impl PointLocator {
    /// Grid resolution along the longest side of `bounds`.
    const DIVISIONS: f64 = 1000.0;

    /// Creates a locator for points inside `bounds`.
    #[must_use]
    pub fn new(tolerance: f64, bounds: Option<Aabb>) -> Self {
        let tolerance = tolerance.max(0.0);
        let (origin, extent) = bounds.map_or((Point3::origin(), 0.0), |b| {
            (b.min, (b.max - b.min).amax())
        });
        let mut spacing = (2.0 * tolerance).max(extent / Self::DIVISIONS);
        if !spacing.is_normal() {
            spacing = 1.0;
        }
        Self {
            grid: HashMap::new(),
            points: Vec::new(),
            origin,
            spacing,
            tolerance,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn key(&self, p: &Point3) -> GridKey {
        let d = (*p - self.origin) / self.spacing;
        (d.x.floor() as i64, d.y.floor() as i64, d.z.floor() as i64)
    }

    /// Returns the id of a stored point within tolerance of `p`.
    #[must_use]
    pub fn find(&self, p: &Point3) -> Option<usize> {
        let (kx, ky, kz) = self.key(p);
        for dx in -1..=1_i64 {
            for dy in -1..=1_i64 {
                for dz in -1..=1_i64 {
                    let key = (
                        kx.saturating_add(dx),
                        ky.saturating_add(dy),
                        kz.saturating_add(dz),
                    );
                    let Some(ids) = self.grid.get(&key) else {
                        continue;
                    };
                    if let Some(&id) = ids
                        .iter()
                        .find(|&&id| (self.points[id] - *p).norm() <= self.tolerance)
                    {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Number of distinct points stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointMerger for PointLocator {
    fn merge(&mut self, _input_id: usize, coord: &Point3) -> Merged {
        if let Some(id) = self.find(coord) {
            return Merged { id, is_new: false };
        }
        let id = self.points.len();
        self.points.push(*coord);
        self.grid.entry(self.key(coord)).or_default().push(id);
        Merged { id, is_new: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_map_reuses_ids() {
        let mut map = PointMap::new(5);
        let p = Point3::origin();
        assert_eq!(map.merge(3, &p), Merged { id: 0, is_new: true });
        assert_eq!(map.merge(1, &p), Merged { id: 1, is_new: true });
        assert_eq!(map.merge(3, &p), Merged { id: 0, is_new: false });
    }

    #[test]
    fn point_map_ignores_coordinates() {
        let mut map = PointMap::new(2);
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(map.merge(0, &p).is_new);
        assert!(map.merge(1, &p).is_new);
    }

    #[test]
    fn locator_merges_within_tolerance() {
        let bounds = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let mut locator = PointLocator::new(1e-6, Some(bounds));
        let a = locator.merge(0, &Point3::new(0.5, 0.5, 0.5));
        let b = locator.merge(1, &Point3::new(0.5 + 1e-7, 0.5, 0.5));
        let c = locator.merge(2, &Point3::new(0.6, 0.5, 0.5));
        assert!(a.is_new);
        assert_eq!(b, Merged { id: a.id, is_new: false });
        assert!(c.is_new);
        assert_eq!(locator.len(), 2);
    }

    #[test]
    fn locator_finds_across_grid_boundaries() {
        let bounds = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let mut locator = PointLocator::new(0.01, Some(bounds));
        locator.merge(0, &Point3::new(0.1999, 0.0, 0.0));
        assert_eq!(locator.find(&Point3::new(0.2001, 0.0, 0.0)), Some(0));
    }

    #[test]
    fn locator_keeps_close_but_distinct_points_apart() {
        // Spacing is 1e-3 here, so these all land in one or two grid cells.
        let bounds = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let mut locator = PointLocator::new(1e-6, Some(bounds));
        let ids: Vec<usize> = (0..10_u32)
            .map(|i| {
                let p = Point3::new(0.5 + f64::from(i) * 1e-4, 0.5, 0.5);
                locator.merge(i as usize, &p).id
            })
            .collect();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        for i in 0..10_u32 {
            let p = Point3::new(0.5 + f64::from(i) * 1e-4 + 1e-7, 0.5, 0.5);
            assert_eq!(locator.find(&p), Some(i as usize));
        }
        assert_eq!(locator.len(), 10);
    }

    #[test]
    fn locator_exact_duplicates_with_zero_tolerance() {
        let mut locator = PointLocator::new(0.0, None);
        let p = Point3::new(3.0, -4.0, 5.0);
        assert!(locator.merge(0, &p).is_new);
        assert!(!locator.merge(7, &p).is_new);
        assert!(locator.merge(8, &Point3::new(3.0, -4.0, 5.000_001)).is_new);
    }
}
