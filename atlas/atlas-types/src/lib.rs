//! Core data types for atlas mesh generation.
//!
//! This crate provides the foundational types shared by the atlas crates:
//!
//! - [`StructureRecord`] - One flattened entry of a region ontology
//! - [`AnnotationVolume`] - A dense 3D volume of integer region labels
//! - [`RegionMask`] - A boolean volume marking voxels of one region
//!
//! # Layer 0 Crate
//!
//! This crate has no dependencies on the mesh layer and can be used on its
//! own wherever annotation volumes need to be inspected.
//!
//! # Coordinate Convention
//!
//! Volumes are indexed as `(x, y, z)` with `x` varying fastest in memory
//! (row-major). Label `0` denotes "no region" by convention.
//!
//! # Example
//!
//! ```
//! use atlas_types::{AnnotationVolume, RegionMask};
//!
//! let volume = AnnotationVolume::from_raw(vec![0, 1, 1, 2], (4, 1, 1)).unwrap();
//! assert_eq!(volume.get(1, 0, 0), Some(1));
//!
//! let mut mask = RegionMask::new(volume.dims());
//! mask.set(1, 0, 0, true);
//! assert_eq!(mask.count_ones(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod mask;
mod structure;
mod volume;

pub use error::{AtlasDataError, AtlasDataResult};
pub use mask::RegionMask;
pub use structure::{rgb_from_hex, StructureRecord};
pub use volume::AnnotationVolume;
