//! Result types for decimation operations.

// Triangle counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Result of mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimationResult {
    /// The decimated mesh.
    pub mesh: IndexedMesh,

    /// Number of triangles in the original mesh.
    pub original_faces: usize,

    /// Number of triangles in the decimated mesh.
    pub final_faces: usize,

    /// Number of edge collapses performed.
    pub collapses_performed: usize,

    /// Number of edge collapses rejected (e.g., would create non-manifold
    /// connectivity).
    pub collapses_rejected: usize,

    /// Whether decimation was skipped because the target would have fallen
    /// below the configured minimum face count.
    pub skipped: bool,
}

impl DecimationResult {
    /// Result that passes the input through unchanged.
    pub(crate) fn unchanged(mesh: &IndexedMesh, skipped: bool) -> Self {
        let faces = mesh.face_count();
        Self {
            mesh: mesh.clone(),
            original_faces: faces,
            final_faces: faces,
            collapses_performed: 0,
            collapses_rejected: 0,
            skipped,
        }
    }

    /// Fraction of original triangles remaining (final / original).
    #[must_use]
    pub fn remaining_ratio(&self) -> f64 {
        if self.original_faces == 0 {
            1.0
        } else {
            self.final_faces as f64 / self.original_faces as f64
        }
    }

    /// Whether any collapse actually happened.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses_performed > 0
    }
}

impl std::fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.skipped {
            write!(
                f,
                "Decimation skipped: {} triangles (below minimum target)",
                self.original_faces
            )
        } else {
            write!(
                f,
                "Decimation: {} -> {} triangles ({:.1}% removed, {} collapses)",
                self.original_faces,
                self.final_faces,
                (1.0 - self.remaining_ratio()) * 100.0,
                self.collapses_performed
            )
        }
    }
}
