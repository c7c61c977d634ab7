//! Catalog of validated region meshes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maps region ids to their validated mesh files.
///
/// Only regions that produced a mesh file larger than the configured
/// minimum size appear here. Iteration is in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct MeshCatalog {
    entries: BTreeMap<u32, PathBuf>,
}

impl MeshCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validated mesh file for a region.
    pub fn insert(&mut self, id: u32, path: PathBuf) {
        self.entries.insert(id, path);
    }

    /// Path of the mesh for a region, if it has one.
    #[must_use]
    pub fn path(&self, id: u32) -> Option<&Path> {
        self.entries.get(&id).map(PathBuf::as_path)
    }

    /// Whether a region has a validated mesh.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cataloged meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Path)> {
        self.entries.iter().map(|(&id, path)| (id, path.as_path()))
    }

    /// Iterate region ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}
