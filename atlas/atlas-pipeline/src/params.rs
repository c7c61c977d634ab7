//! Parameters for a mesh generation run.

/// Parameters for a mesh generation run.
///
/// The defaults reproduce the plainest pipeline: no closing, no
/// decimation, no smoothing, and a 512-byte validity threshold. Every
/// knob is a per-atlas tuning decision and can be overridden.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Rounds of binary morphological closing applied to each region mask
    /// before extraction. Default: 0
    pub closing_iterations: usize,

    /// Fraction of triangles to remove from each extracted mesh, in
    /// `[0.0, 1.0)`. 0.0 disables decimation. Default: 0.0
    pub decimate_fraction: f64,

    /// Whether to apply one round of Laplacian smoothing after extraction
    /// (and decimation, if any). Default: false
    pub smooth: bool,

    /// A mesh file must be strictly larger than this to count as valid;
    /// smaller files are recorded as degenerate and excluded from the
    /// catalog. Default: 512
    pub min_mesh_bytes: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            closing_iterations: 0,
            decimate_fraction: 0.0,
            smooth: false,
            min_mesh_bytes: 512,
        }
    }
}

impl GenerationParams {
    /// Set the number of closing rounds.
    #[must_use]
    pub const fn with_closing_iterations(mut self, iterations: usize) -> Self {
        self.closing_iterations = iterations;
        self
    }

    /// Set the fraction of triangles to remove per mesh.
    #[must_use]
    pub fn with_decimate_fraction(mut self, fraction: f64) -> Self {
        self.decimate_fraction = fraction.clamp(0.0, 1.0 - f64::EPSILON);
        self
    }

    /// Enable or disable smoothing.
    #[must_use]
    pub const fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Set the minimum valid mesh file size in bytes.
    #[must_use]
    pub const fn with_min_mesh_bytes(mut self, bytes: u64) -> Self {
        self.min_mesh_bytes = bytes;
        self
    }
}
