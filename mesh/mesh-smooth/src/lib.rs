//! Laplacian smoothing for extracted region surfaces.
//!
//! Surfaces extracted from voxel masks carry a faceted, staircase look.
//! A round or two of Laplacian relaxation softens it: each vertex moves a
//! fraction `lambda` of the way toward the centroid of its neighbors.
//! Boundary vertices are pinned and the face list is untouched, so mesh
//! topology is preserved.
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_smooth::{smooth_mesh, SmoothParams};
//!
//! let cube = unit_cube();
//! let smoothed = smooth_mesh(&cube, &SmoothParams::default());
//! assert_eq!(smoothed.faces, cube.faces);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod params;
mod smooth;

pub use params::SmoothParams;
pub use smooth::smooth_mesh;
