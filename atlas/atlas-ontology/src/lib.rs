//! Region ontology tree for atlas mesh generation.
//!
//! Builds an in-memory hierarchy from a flattened list of
//! [`StructureRecord`]s and answers the two queries mesh generation needs:
//! the descendant closure of a node (which labels make up its voxel mask)
//! and the ancestor chain from the root.
//!
//! # Representation
//!
//! The tree is an arena: nodes live in a `Vec`, children are stored as index
//! lists, and an id map resolves label ids to arena slots. There are no
//! owning pointers between nodes, so construction can validate the hierarchy
//! (unknown parents, duplicate ids, cycles) with plain index reachability.
//!
//! # Example
//!
//! ```
//! use atlas_types::StructureRecord;
//! use atlas_ontology::RegionTree;
//!
//! let records = vec![
//!     StructureRecord {
//!         id: 1,
//!         name: "root".into(),
//!         acronym: "root".into(),
//!         structure_id_path: vec![1],
//!         rgb_triplet: [255, 255, 255],
//!     },
//!     StructureRecord {
//!         id: 2,
//!         name: "cortex".into(),
//!         acronym: "CTX".into(),
//!         structure_id_path: vec![1, 2],
//!         rgb_triplet: [0, 128, 0],
//!     },
//! ];
//!
//! let tree = RegionTree::build(&records).unwrap();
//! assert_eq!(tree.size(), 2);
//! assert_eq!(tree.descendants(1).unwrap(), vec![1, 2]);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod tree;

pub use error::{OntologyError, OntologyResult};
pub use tree::{RegionNode, RegionTree};
