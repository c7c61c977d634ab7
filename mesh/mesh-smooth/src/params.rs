//! Parameters for mesh smoothing.

/// Parameters for Laplacian smoothing.
#[derive(Debug, Clone)]
pub struct SmoothParams {
    /// Number of smoothing iterations. Default: 1
    pub iterations: usize,

    /// Smoothing factor per iteration, in `[0.0, 1.0]`. Each vertex moves
    /// this fraction of the way toward its neighbor centroid. Default: 0.5
    pub lambda: f64,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            iterations: 1,
            lambda: 0.5,
        }
    }
}

impl SmoothParams {
    /// Set the number of iterations.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the smoothing factor.
    #[must_use]
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda.clamp(0.0, 1.0);
        self
    }
}
