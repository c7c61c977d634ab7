//! Outcome of a mesh generation run.

use crate::catalog::MeshCatalog;

/// Outcome of a mesh generation run.
///
/// Every region visited lands in exactly one disposition list. The catalog
/// holds the subset of written and reused meshes that passed file-size
/// validation.
#[derive(Debug, Default)]
pub struct GenerationOutcome {
    /// Validated meshes by region id.
    pub catalog: MeshCatalog,

    /// Regions whose mesh was generated and validated in this run.
    pub written: Vec<u32>,

    /// Regions whose existing mesh file was kept.
    pub skipped_existing: Vec<u32>,

    /// Regions with no voxels in the annotation volume.
    pub empty: Vec<u32>,

    /// Regions whose mesh file exists but is too small to be valid.
    pub degenerate: Vec<u32>,

    /// Regions that failed with an error, and the error message.
    pub failed: Vec<(u32, String)>,
}

impl GenerationOutcome {
    /// Total number of regions visited.
    #[must_use]
    pub fn total_regions(&self) -> usize {
        self.written.len()
            + self.skipped_existing.len()
            + self.empty.len()
            + self.degenerate.len()
            + self.failed.len()
    }
}

impl std::fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mesh generation: {} regions ({} written, {} reused, {} empty, {} degenerate, {} failed); {} valid meshes",
            self.total_regions(),
            self.written.len(),
            self.skipped_existing.len(),
            self.empty.len(),
            self.degenerate.len(),
            self.failed.len(),
            self.catalog.len()
        )
    }
}
