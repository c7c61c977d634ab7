//! Axis-aligned bounding boxes.

use nalgebra::Point3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// An empty box (min > max on every axis).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// Build a box enclosing a set of points.
    ///
    /// Returns [`Aabb::empty`] for an empty iterator.
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand(p);
        }
        aabb
    }

    /// Grow the box to include a point.
    pub fn expand(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Whether the box contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// The box center. Meaningless for an empty box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            0.5 * (self.min.x + self.max.x),
            0.5 * (self.min.y + self.max.y),
            0.5 * (self.min.z + self.max.z),
        )
    }

    /// Extent along each axis. Meaningless for an empty box.
    #[must_use]
    pub fn extent(&self) -> (f64, f64, f64) {
        (
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }

    /// Whether a point lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, p: &Point3<f64>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_box() {
        assert!(Aabb::empty().is_empty());
    }

    #[test]
    fn from_points_and_contains() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 6.0),
            Point3::new(-1.0, 1.0, 3.0),
        ];
        let aabb = Aabb::from_points(points.iter());

        assert!(!aabb.is_empty());
        assert_relative_eq!(aabb.min.x, -1.0);
        assert_relative_eq!(aabb.max.y, 4.0);
        assert!(aabb.contains(&Point3::new(0.5, 2.0, 4.0)));
        assert!(!aabb.contains(&Point3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn center_and_extent() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0)];
        let aabb = Aabb::from_points(points.iter());

        let c = aabb.center();
        assert_relative_eq!(c.x, 1.0);

        let (ex, ey, ez) = aabb.extent();
        assert_relative_eq!(ex, 2.0);
        assert_relative_eq!(ey, 2.0);
        assert_relative_eq!(ez, 2.0);
    }
}
