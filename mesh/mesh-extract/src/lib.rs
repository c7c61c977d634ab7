//! Surface extraction from boolean voxel masks.
//!
//! Converts a [`RegionMask`](atlas_types::RegionMask) into a triangulated
//! surface in two steps:
//!
//! 1. Optional binary morphological closing (dilation then erosion) to seal
//!    thin gaps that would otherwise fragment the surface
//! 2. Boolean surface-nets extraction on the in/out boundary of the mask
//!
//! # Why surface nets
//!
//! With boolean-only sampling there is no scalar field to interpolate, and
//! tri-table marching cubes is prone to ambiguous configurations that show
//! up as cracks. Surface nets places one vertex per boundary cell and
//! stitches quads between neighboring cells, which is crack-free and fully
//! deterministic: the same mask and closing count always produce the same
//! vertex and face ordering.
//!
//! # Example
//!
//! ```
//! use atlas_types::RegionMask;
//! use mesh_extract::{extract_mask_surface, ExtractParams};
//!
//! let mut mask = RegionMask::new((4, 4, 4));
//! mask.set(1, 1, 1, true);
//! mask.set(2, 1, 1, true);
//!
//! let mesh = extract_mask_surface(&mask, &ExtractParams::default()).unwrap();
//! assert!(!mesh.is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod closing;
mod error;
mod params;
mod surface_nets;

pub use closing::binary_close;
pub use error::{ExtractError, ExtractResult};
pub use params::ExtractParams;
pub use surface_nets::surface_nets;

use atlas_types::RegionMask;
use mesh_types::IndexedMesh;
use tracing::debug;

/// Extract the surface of a boolean voxel mask.
///
/// Applies `params.closing_iterations` rounds of binary closing (0 disables
/// the pre-pass), then runs surface-nets extraction on the in/out boundary.
/// Output vertices are in volume-index coordinates.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyRegion`] if the mask contains no set voxels.
/// Callers treat this as "no mesh for this region", not as a hard failure.
pub fn extract_mask_surface(mask: &RegionMask, params: &ExtractParams) -> ExtractResult<IndexedMesh> {
    if mask.is_empty_mask() {
        return Err(ExtractError::EmptyRegion);
    }

    let closed;
    let surfaced = if params.closing_iterations > 0 {
        closed = binary_close(mask, params.closing_iterations);
        &closed
    } else {
        mask
    };

    let mesh = surface_nets(surfaced);
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        closing = params.closing_iterations,
        "extracted mask surface"
    );

    Ok(mesh)
}
