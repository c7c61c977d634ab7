//! Arena-based region tree.

use std::collections::HashMap;

use atlas_types::StructureRecord;
use tracing::debug;

use crate::error::{OntologyError, OntologyResult};

/// One region in the ontology tree.
///
/// Whether a node carries its own label in the annotation volume is a plain
/// attribute (`is_label`), not a type distinction: label-less grouping nodes
/// still receive meshes if their descendants occupy voxels.
#[derive(Debug, Clone)]
pub struct RegionNode {
    /// Integer label id, unique across the tree.
    pub id: u32,

    /// Full anatomical name.
    pub name: String,

    /// Short identifier.
    pub acronym: String,

    /// Ordered ancestor ids from the root down to `id` (inclusive).
    pub structure_id_path: Vec<u32>,

    /// Display color as 8-bit RGB.
    pub rgb_triplet: [u8; 3],

    /// Whether this exact id occurs in the annotation volume.
    pub is_label: bool,

    /// Arena slots of the node's children, in record order.
    children: Vec<usize>,

    /// Arena slot of the parent; `None` for the root.
    parent: Option<usize>,
}

/// Region ontology tree built from a flattened structure list.
///
/// Nodes live in an arena indexed by insertion order; all hierarchy edges
/// are arena indices. Bulk traversal ([`RegionTree::iter`]) follows record
/// order, which is deterministic within a run.
#[derive(Debug, Clone)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
    slot_of: HashMap<u32, usize>,
    root: usize,
}

impl RegionTree {
    /// Build a tree from a flattened structure list.
    ///
    /// # Errors
    ///
    /// Returns an [`OntologyError`] if the list is structurally malformed:
    /// duplicate or inconsistent records, a parent id absent from the list,
    /// zero or multiple roots, or nodes unreachable from the root (which is
    /// how a cycle among parent references manifests in an arena).
    pub fn build(records: &[StructureRecord]) -> OntologyResult<Self> {
        let mut nodes = Vec::with_capacity(records.len());
        let mut slot_of = HashMap::with_capacity(records.len());

        for (slot, record) in records.iter().enumerate() {
            if record.structure_id_path.is_empty() {
                return Err(OntologyError::EmptyPath { id: record.id });
            }
            if !record.has_consistent_path() {
                return Err(OntologyError::PathMismatch { id: record.id });
            }
            if slot_of.insert(record.id, slot).is_some() {
                return Err(OntologyError::DuplicateId { id: record.id });
            }

            nodes.push(RegionNode {
                id: record.id,
                name: record.name.clone(),
                acronym: record.acronym.clone(),
                structure_id_path: record.structure_id_path.clone(),
                rgb_triplet: record.rgb_triplet,
                is_label: false,
                children: Vec::new(),
                parent: None,
            });
        }

        // Link parents and find the root.
        let mut root: Option<usize> = None;
        for (slot, record) in records.iter().enumerate() {
            match record.parent_id() {
                Some(parent_id) => {
                    let &parent_slot =
                        slot_of
                            .get(&parent_id)
                            .ok_or(OntologyError::UnknownParent {
                                id: record.id,
                                parent: parent_id,
                            })?;
                    nodes[slot].parent = Some(parent_slot);
                    nodes[parent_slot].children.push(slot);
                }
                None => match root {
                    None => root = Some(slot),
                    Some(first) => {
                        return Err(OntologyError::MultipleRoots {
                            first: nodes[first].id,
                            second: record.id,
                        });
                    }
                },
            }
        }

        let root = root.ok_or(OntologyError::NoRoot)?;

        let tree = Self {
            nodes,
            slot_of,
            root,
        };
        tree.check_reachability()?;

        debug!(nodes = tree.size(), root = tree.nodes[root].id, "built region tree");
        Ok(tree)
    }

    /// Verify every node is reachable from the root.
    fn check_reachability(&self) -> OntologyResult<()> {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];

        while let Some(slot) = stack.pop() {
            if visited[slot] {
                continue;
            }
            visited[slot] = true;
            stack.extend_from_slice(&self.nodes[slot].children);
        }

        match visited.iter().position(|&v| !v) {
            Some(slot) => Err(OntologyError::UnreachableNode {
                id: self.nodes[slot].id,
            }),
            None => Ok(()),
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &RegionNode {
        &self.nodes[self.root]
    }

    /// Look up a node by label id.
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&RegionNode> {
        self.slot_of.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// Iterate over all nodes in record order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionNode> {
        self.nodes.iter()
    }

    /// Ids of a node and all of its descendants, preorder.
    ///
    /// Returns `None` if `id` is not in the tree. The order is deterministic:
    /// children are visited in record order.
    #[must_use]
    pub fn descendants(&self, id: u32) -> Option<Vec<u32>> {
        let &start = self.slot_of.get(&id)?;

        let mut ids = Vec::new();
        let mut stack = vec![start];
        while let Some(slot) = stack.pop() {
            let node = &self.nodes[slot];
            ids.push(node.id);
            // Push in reverse so children come off the stack in record order.
            stack.extend(node.children.iter().rev());
        }

        Some(ids)
    }

    /// Ids from the root down to (and including) a node.
    ///
    /// Returns `None` if `id` is not in the tree.
    #[must_use]
    pub fn ancestors(&self, id: u32) -> Option<Vec<u32>> {
        let &start = self.slot_of.get(&id)?;

        let mut chain = Vec::new();
        let mut slot = Some(start);
        while let Some(s) = slot {
            chain.push(self.nodes[s].id);
            slot = self.nodes[s].parent;
        }
        chain.reverse();

        Some(chain)
    }

    /// Set each node's `is_label` flag from a label-presence predicate.
    pub fn mark_labels(&mut self, is_label: impl Fn(u32) -> bool) {
        for node in &mut self.nodes {
            node.is_label = is_label(node.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, path: &[u32]) -> StructureRecord {
        StructureRecord {
            id,
            name: format!("region {id}"),
            acronym: format!("r{id}"),
            structure_id_path: path.to_vec(),
            rgb_triplet: [10, 20, 30],
        }
    }

    /// root(1) -> { cortex(2) -> { layer(4) }, nucleus(3) }
    fn sample_records() -> Vec<StructureRecord> {
        vec![
            record(1, &[1]),
            record(2, &[1, 2]),
            record(3, &[1, 3]),
            record(4, &[1, 2, 4]),
        ]
    }

    #[test]
    fn build_and_size() {
        let tree = RegionTree::build(&sample_records()).unwrap();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.root().id, 1);
    }

    #[test]
    fn descendants_preorder() {
        let tree = RegionTree::build(&sample_records()).unwrap();
        assert_eq!(tree.descendants(1).unwrap(), vec![1, 2, 4, 3]);
        assert_eq!(tree.descendants(2).unwrap(), vec![2, 4]);
        assert_eq!(tree.descendants(4).unwrap(), vec![4]);
        assert!(tree.descendants(99).is_none());
    }

    #[test]
    fn ancestors_from_root() {
        let tree = RegionTree::build(&sample_records()).unwrap();
        assert_eq!(tree.ancestors(4).unwrap(), vec![1, 2, 4]);
        assert_eq!(tree.ancestors(1).unwrap(), vec![1]);
    }

    #[test]
    fn unknown_parent_rejected() {
        let records = vec![record(1, &[1]), record(2, &[7, 2])];
        let err = RegionTree::build(&records).unwrap_err();
        assert!(matches!(
            err,
            OntologyError::UnknownParent { id: 2, parent: 7 }
        ));
    }

    #[test]
    fn duplicate_id_rejected() {
        let records = vec![record(1, &[1]), record(1, &[1])];
        assert!(matches!(
            RegionTree::build(&records).unwrap_err(),
            OntologyError::DuplicateId { id: 1 }
        ));
    }

    #[test]
    fn cycle_rejected() {
        // 2 and 3 claim each other as parents; neither hangs off the root.
        let records = vec![record(1, &[1]), record(2, &[3, 2]), record(3, &[2, 3])];
        assert!(matches!(
            RegionTree::build(&records).unwrap_err(),
            OntologyError::UnreachableNode { .. }
        ));
    }

    #[test]
    fn no_root_rejected() {
        let records = vec![record(2, &[1, 2])];
        assert!(matches!(
            RegionTree::build(&records).unwrap_err(),
            OntologyError::UnknownParent { .. }
        ));

        let err = RegionTree::build(&[]).unwrap_err();
        assert!(matches!(err, OntologyError::NoRoot));
    }

    #[test]
    fn multiple_roots_rejected() {
        let records = vec![record(1, &[1]), record(2, &[2])];
        assert!(matches!(
            RegionTree::build(&records).unwrap_err(),
            OntologyError::MultipleRoots { first: 1, second: 2 }
        ));
    }

    #[test]
    fn mark_labels_sets_flags() {
        let mut tree = RegionTree::build(&sample_records()).unwrap();
        tree.mark_labels(|id| id == 2 || id == 4);

        assert!(!tree.node(1).unwrap().is_label);
        assert!(tree.node(2).unwrap().is_label);
        assert!(!tree.node(3).unwrap().is_label);
        assert!(tree.node(4).unwrap().is_label);
    }

    #[test]
    fn iter_follows_record_order() {
        let tree = RegionTree::build(&sample_records()).unwrap();
        let ids: Vec<u32> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
