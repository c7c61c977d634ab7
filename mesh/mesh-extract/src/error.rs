//! Error types for surface extraction.

use thiserror::Error;

/// Errors that can occur during surface extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The mask contains no set voxels, so there is no surface to extract.
    ///
    /// This is an expected per-region outcome, not a pipeline failure:
    /// grouping regions whose labels never occur in a given volume simply
    /// produce no mesh.
    #[error("region mask contains no voxels")]
    EmptyRegion,
}

/// Result type for surface extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
