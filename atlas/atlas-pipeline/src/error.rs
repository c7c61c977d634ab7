//! Error types for the mesh generation pipeline.

use atlas_ontology::OntologyError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal pipeline errors.
///
/// Per-region failures (empty regions, undersized meshes, write errors on
/// a single file) are recorded in the run outcome instead; only conditions
/// that invalidate the whole run surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The structure list does not form a valid region tree.
    #[error("malformed region hierarchy: {0}")]
    MalformedHierarchy(#[from] OntologyError),

    /// The output directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_error_display() {
        let err = PipelineError::MalformedHierarchy(OntologyError::DuplicateId { id: 42 });
        let msg = format!("{err}");
        assert!(msg.contains("malformed region hierarchy"));
        assert!(msg.contains("42"));
    }
}
