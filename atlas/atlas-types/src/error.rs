//! Error types for atlas data construction.

use thiserror::Error;

/// Errors that can occur while constructing atlas data types.
#[derive(Debug, Error)]
pub enum AtlasDataError {
    /// Voxel data length does not match the stated dimensions.
    #[error("voxel data length {len} does not match dimensions {nx}x{ny}x{nz}")]
    DimensionMismatch {
        /// Length of the supplied voxel buffer.
        len: usize,
        /// Stated extent along x.
        nx: usize,
        /// Stated extent along y.
        ny: usize,
        /// Stated extent along z.
        nz: usize,
    },

    /// A hex color string could not be parsed into an RGB triplet.
    #[error("invalid hex color triplet: {0:?}")]
    InvalidHexColor(String),
}

/// Result type for atlas data construction.
pub type AtlasDataResult<T> = std::result::Result<T, AtlasDataError>;
