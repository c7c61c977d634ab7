//! Mesh simplification using quadric error metrics.
//!
//! Region surfaces come out of extraction with one vertex per boundary
//! voxel cell, which is far denser than viewers need. This crate thins
//! them by iteratively collapsing edges while minimizing geometric error
//! (the QEM algorithm).
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_decimate::{decimate_mesh, DecimateParams};
//!
//! let cube = unit_cube();
//! let result = decimate_mesh(&cube, &DecimateParams::with_reduction(0.5).with_min_faces(1));
//! println!("{result}");
//! ```
//!
//! # Algorithm
//!
//! 1. For each vertex, accumulate a quadric from the planes of its
//!    adjacent faces
//! 2. For each edge, compute the optimal collapse position and its error
//! 3. Repeatedly collapse the cheapest edge until the target face count
//!    is reached, rejecting collapses that would pinch the surface into
//!    non-manifold connectivity
//!
//! Decimation is skipped outright (and flagged in the result) when the
//! target would fall below [`DecimateParams::min_faces`]; meshes of a few
//! voxels are left alone rather than collapsed into slivers.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod params;
mod quadric;
mod result;

pub use decimate::decimate_mesh;
pub use params::DecimateParams;
pub use result::DecimationResult;
