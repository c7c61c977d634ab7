//! Parameters for surface extraction.

/// Parameters for surface extraction.
///
/// Closing is an atlas-specific tuning knob: annotation volumes with thin
/// internal gaps benefit from one or two rounds, clean volumes need none.
#[derive(Debug, Clone, Default)]
pub struct ExtractParams {
    /// Rounds of binary morphological closing applied before extraction.
    /// Each round is one 6-connected dilation followed by one erosion.
    /// Default: 0 (disabled).
    pub closing_iterations: usize,
}

impl ExtractParams {
    /// Set the number of closing rounds.
    #[must_use]
    pub const fn with_closing_iterations(mut self, iterations: usize) -> Self {
        self.closing_iterations = iterations;
        self
    }
}
