//! Error types for ontology construction.

use thiserror::Error;

/// Errors that make a flattened structure list unusable as a tree.
///
/// All of these are structural: the ontology is required for every region,
/// so any of them aborts mesh generation as a whole.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// Two records share the same id.
    #[error("duplicate structure id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },

    /// A record has an empty `structure_id_path`.
    #[error("structure {id} has an empty structure_id_path")]
    EmptyPath {
        /// Id of the offending record.
        id: u32,
    },

    /// A record's path does not end in its own id.
    #[error("structure {id} has a structure_id_path that does not end in its own id")]
    PathMismatch {
        /// Id of the offending record.
        id: u32,
    },

    /// A record references a parent id absent from the list.
    #[error("structure {id} references unknown parent {parent}")]
    UnknownParent {
        /// Id of the offending record.
        id: u32,
        /// The missing parent id.
        parent: u32,
    },

    /// No record qualifies as the root (single-element path).
    #[error("structure list contains no root record")]
    NoRoot,

    /// More than one record qualifies as the root.
    #[error("structure list contains multiple roots: {first} and {second}")]
    MultipleRoots {
        /// Id of the first root found.
        first: u32,
        /// Id of the second root found.
        second: u32,
    },

    /// A node is not reachable from the root, indicating a cycle or an
    /// orphaned subtree.
    #[error("structure {id} is not reachable from the root (cycle or orphaned subtree)")]
    UnreachableNode {
        /// Id of the unreachable record.
        id: u32,
    },
}

/// Result type for ontology operations.
pub type OntologyResult<T> = std::result::Result<T, OntologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OntologyError::UnknownParent { id: 5, parent: 9 };
        let text = format!("{err}");
        assert!(text.contains('5'));
        assert!(text.contains('9'));
    }
}
