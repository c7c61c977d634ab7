//! Per-region mesh generation for annotated atlas volumes.
//!
//! Given a flattened structure hierarchy and a labeled annotation volume,
//! this crate produces one surface mesh file per region: a region's mask
//! is the union of the voxels of every label in its descendant subtree
//! (the root covers all labeled voxels), and its surface is extracted,
//! optionally decimated and smoothed, and written as `<id>.obj`.
//!
//! # Run shape
//!
//! Regions are processed in parallel with shared read-only access to the
//! volume. A region whose mesh file already exists is skipped, so an
//! interrupted run can simply be restarted. Writes are atomic
//! (temp file + rename), and per-region failures are recorded in the
//! [`GenerationOutcome`] without aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use atlas_pipeline::{generate_region_meshes, GenerationParams};
//! use atlas_types::{AnnotationVolume, StructureRecord};
//! use std::path::Path;
//!
//! # fn load_structures() -> Vec<StructureRecord> { Vec::new() }
//! # fn load_annotation() -> AnnotationVolume { AnnotationVolume::from_raw(vec![0], (1, 1, 1)).unwrap() }
//! let records = load_structures();
//! let volume = load_annotation();
//!
//! let outcome = generate_region_meshes(
//!     &records,
//!     &volume,
//!     997, // root id
//!     Path::new("meshes"),
//!     &GenerationParams::default().with_decimate_fraction(0.2),
//! ).unwrap();
//!
//! println!("{outcome}");
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod error;
mod params;
mod pipeline;
mod result;
mod writer;

pub use catalog::MeshCatalog;
pub use error::{PipelineError, PipelineResult};
pub use params::GenerationParams;
pub use pipeline::{filter_structures, generate_region_meshes, mesh_path};
pub use result::GenerationOutcome;
pub use writer::write_mesh_atomic;
