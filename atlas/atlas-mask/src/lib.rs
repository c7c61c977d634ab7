//! Label occupancy queries over annotation volumes.
//!
//! Two pieces live here:
//!
//! - [`LabelSet`] - the distinct non-zero labels actually present in a
//!   volume, computed in one scan and shared read-only afterwards
//! - [`aggregate_mask`] - the boolean voxel mask of one region, i.e. the
//!   union of its own label and every descendant's label
//!
//! A region whose entire descendant closure is absent from the [`LabelSet`]
//! gets an empty mask without the volume being scanned at all; the
//! designated root region gets the whole non-zero volume without the tree
//! being descended.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aggregate;
mod labels;

pub use aggregate::aggregate_mask;
pub use labels::LabelSet;
