//! Parameters for mesh decimation.

/// Parameters for mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimateParams {
    /// Fraction of triangles to remove, in `[0.0, 1.0)`. Default: 0.0
    /// (no decimation).
    pub reduction: f64,

    /// Lower bound on the target triangle count. When the requested
    /// reduction would push the target below this, decimation is skipped
    /// and the mesh is returned unchanged. Default: 4.
    pub min_faces: usize,

    /// Whether to preserve boundary edges (edges with only one adjacent
    /// face). Closed surfaces have none; this matters for open meshes.
    /// Default: true
    pub preserve_boundary: bool,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            reduction: 0.0,
            min_faces: 4,
            preserve_boundary: true,
        }
    }
}

impl DecimateParams {
    /// Create params removing the given fraction of triangles.
    #[must_use]
    pub fn with_reduction(reduction: f64) -> Self {
        Self {
            reduction: reduction.clamp(0.0, 1.0 - f64::EPSILON),
            ..Default::default()
        }
    }

    /// Set the minimum target triangle count.
    #[must_use]
    pub const fn with_min_faces(mut self, min_faces: usize) -> Self {
        self.min_faces = min_faces;
        self
    }

    /// Set the preserve-boundary option.
    #[must_use]
    pub const fn with_preserve_boundary(mut self, preserve: bool) -> Self {
        self.preserve_boundary = preserve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = DecimateParams::default();
        assert!(params.reduction.abs() < f64::EPSILON);
        assert_eq!(params.min_faces, 4);
        assert!(params.preserve_boundary);
    }

    #[test]
    fn test_reduction_clamping() {
        let params = DecimateParams::with_reduction(1.5);
        assert!(params.reduction < 1.0);

        let params = DecimateParams::with_reduction(-0.5);
        assert!(params.reduction.abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder() {
        let params = DecimateParams::with_reduction(0.5)
            .with_min_faces(16)
            .with_preserve_boundary(false);

        assert!((params.reduction - 0.5).abs() < 0.001);
        assert_eq!(params.min_faces, 16);
        assert!(!params.preserve_boundary);
    }
}
