//! Quadric error metric.
//!
//! The quadric accumulates squared point-to-plane distances for the planes
//! of a vertex's adjacent faces. It determines both the cost of collapsing
//! an edge and the optimal position for the merged vertex.

use mesh_types::{Point3, Vector3};
use nalgebra::Matrix3;

/// Sum of squared distances to a set of planes.
///
/// Stored in the split form `error(p) = p^T A p + 2 b . p + c`, which keeps
/// the symmetric 4x4 quadric as a 3x3 matrix, a vector and a scalar.
#[derive(Debug, Clone, Copy)]
pub struct Quadric {
    a: Matrix3<f64>,
    b: Vector3<f64>,
    c: f64,
}

impl Default for Quadric {
    fn default() -> Self {
        Self {
            a: Matrix3::zeros(),
            b: Vector3::zeros(),
            c: 0.0,
        }
    }
}

impl Quadric {
    /// Quadric of a single plane `n . x + d = 0` with unit normal `n`.
    #[must_use]
    pub fn from_plane(normal: Vector3<f64>, d: f64) -> Self {
        Self {
            a: normal * normal.transpose(),
            b: normal * d,
            c: d * d,
        }
    }

    /// Accumulate another quadric into this one.
    pub fn add(&mut self, other: &Self) {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
    }

    /// Squared-distance error of a point against the accumulated planes.
    #[must_use]
    pub fn evaluate(&self, p: &Point3<f64>) -> f64 {
        let v = p.coords;
        v.dot(&(self.a * v)) + 2.0 * self.b.dot(&v) + self.c
    }

    /// Point minimizing the error, or `None` when the planes do not pin
    /// down a unique minimum (coplanar or near-coplanar neighborhoods).
    #[must_use]
    pub fn minimizer(&self) -> Option<Point3<f64>> {
        if self.a.determinant().abs() < 1e-10 {
            return None;
        }
        let inv = self.a.try_inverse()?;
        Some(Point3::from(-(inv * self.b)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_quadric_has_zero_error_everywhere() {
        let q = Quadric::default();
        assert!(q.evaluate(&Point3::new(1.0, 2.0, 3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn plane_quadric_measures_squared_distance() {
        // Plane z = 0.
        let q = Quadric::from_plane(Vector3::new(0.0, 0.0, 1.0), 0.0);

        assert!(q.evaluate(&Point3::new(1.0, 2.0, 0.0)).abs() < 1e-12);
        assert_relative_eq!(q.evaluate(&Point3::new(0.0, 0.0, 2.0)), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn three_planes_pin_the_minimizer() {
        let mut q = Quadric::from_plane(Vector3::new(1.0, 0.0, 0.0), -1.0);
        q.add(&Quadric::from_plane(Vector3::new(0.0, 1.0, 0.0), -2.0));
        q.add(&Quadric::from_plane(Vector3::new(0.0, 0.0, 1.0), -3.0));

        let p = q.minimizer().unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn coplanar_quadric_has_no_minimizer() {
        let q = Quadric::from_plane(Vector3::new(0.0, 0.0, 1.0), 0.0);
        assert!(q.minimizer().is_none());
    }
}
