/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// A box that contains every finite point.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            min: Point3::new(f64::MIN, f64::MIN, f64::MIN),
            max: Point3::new(f64::MAX, f64::MAX, f64::MAX),
        }
    }

    /// Smallest box enclosing `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for p in rest {
            aabb.min = aabb.min.inf(p);
            aabb.max = aabb.max.sup(p);
        }
        Some(aabb)
    }

    /// Returns `true` if `p` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_encloses_all() {
        let pts = vec![
            Point3::new(1.0, -2.0, 0.5),
            Point3::new(-1.0, 3.0, 0.0),
            Point3::new(0.0, 0.0, 4.0),
        ];
        let aabb = Aabb::from_points(&pts).unwrap_or_default();
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 3.0, 4.0));
        assert!(pts.iter().all(|p| aabb.contains(p)));
    }

    #[test]
    fn from_points_empty() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn contains_rejects_outside() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains(&Point3::new(1.0, 0.0, 0.5)));
        assert!(!aabb.contains(&Point3::new(1.0 + 1e-9, 0.0, 0.5)));
    }

    #[test]
    fn unbounded_contains_far_points() {
        assert!(Aabb::unbounded().contains(&Point3::new(1e300, -1e300, 0.0)));
    }
}
