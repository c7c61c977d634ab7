//! Concrete triangles.

use nalgebra::{Point3, Vector3};

/// A triangle with concrete vertex positions.
///
/// Produced on demand from an [`IndexedMesh`](crate::IndexedMesh); the mesh
/// itself stores faces as index triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three vertices.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// The triangle's area.
    #[must_use]
    pub fn area(&self) -> f64 {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2).norm() / 2.0
    }

    /// The (unnormalized) face normal by the right-hand rule.
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// The unit face normal, or `None` for a degenerate triangle.
    #[must_use]
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal();
        let len = n.norm();
        if len < 1e-12 {
            None
        } else {
            Some(n / len)
        }
    }

    /// The triangle's centroid.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }

    /// Whether the triangle has (near-)zero area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.area() < 1e-12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn area_of_right_triangle() {
        assert_relative_eq!(right_triangle().area(), 0.5);
    }

    #[test]
    fn normal_points_up() {
        let n = right_triangle().unit_normal().unwrap();
        assert_relative_eq!(n.z, 1.0);
    }

    #[test]
    fn centroid() {
        let c = right_triangle().centroid();
        assert_relative_eq!(c.x, 1.0 / 3.0);
        assert_relative_eq!(c.y, 1.0 / 3.0);
    }

    #[test]
    fn degenerate_triangle() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(t.is_degenerate());
        assert!(t.unit_normal().is_none());
    }
}
