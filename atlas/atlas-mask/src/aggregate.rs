//! Per-region mask aggregation.

use std::collections::HashSet;

use atlas_ontology::RegionTree;
use atlas_types::{AnnotationVolume, RegionMask};
use tracing::trace;

use crate::labels::LabelSet;

/// Compute the boolean voxel mask of one region.
///
/// The mask is set wherever the volume carries the region's own label or any
/// descendant's label. Two shortcuts apply:
///
/// - if no id in the descendant closure is present in `labels`, an all-false
///   mask is returned without touching the volume
/// - for the designated root region (`id == root_id`), the mask is the
///   entire non-zero volume, so the subtree is not descended at all
///
/// Returns `None` if `id` is not a node of `tree`.
///
/// # Example
///
/// ```
/// use atlas_types::{AnnotationVolume, StructureRecord};
/// use atlas_ontology::RegionTree;
/// use atlas_mask::{aggregate_mask, LabelSet};
///
/// let records = vec![
///     StructureRecord {
///         id: 1,
///         name: "root".into(),
///         acronym: "root".into(),
///         structure_id_path: vec![1],
///         rgb_triplet: [255, 255, 255],
///     },
///     StructureRecord {
///         id: 2,
///         name: "cortex".into(),
///         acronym: "CTX".into(),
///         structure_id_path: vec![1, 2],
///         rgb_triplet: [0, 128, 0],
///     },
/// ];
/// let tree = RegionTree::build(&records).unwrap();
/// let volume = AnnotationVolume::from_raw(vec![0, 2, 2, 0], (4, 1, 1)).unwrap();
/// let labels = LabelSet::scan(&volume);
///
/// // Label 2 is a descendant of 1, so region 1 covers its voxels.
/// let mask = aggregate_mask(&tree, 1, &volume, &labels, 1).unwrap();
/// assert_eq!(mask.count_ones(), 2);
/// ```
#[must_use]
pub fn aggregate_mask(
    tree: &RegionTree,
    id: u32,
    volume: &AnnotationVolume,
    labels: &LabelSet,
    root_id: u32,
) -> Option<RegionMask> {
    let closure = tree.descendants(id)?;

    let mut mask = RegionMask::new(volume.dims());

    // The root covers every labeled voxel by definition.
    if id == root_id {
        fill_mask(&mut mask, volume, |label| label != 0);
        trace!(id, voxels = mask.count_ones(), "aggregated root mask");
        return Some(mask);
    }

    // Nothing in this subtree occurs in the volume: skip the scan entirely.
    if !closure.iter().any(|&cid| labels.contains(cid)) {
        trace!(id, "descendant closure absent from volume, empty mask");
        return Some(mask);
    }

    let wanted: HashSet<u32> = closure.into_iter().collect();
    fill_mask(&mut mask, volume, |label| wanted.contains(&label));
    trace!(id, voxels = mask.count_ones(), "aggregated region mask");

    Some(mask)
}

/// Set every mask voxel whose volume label satisfies the predicate.
fn fill_mask(mask: &mut RegionMask, volume: &AnnotationVolume, keep: impl Fn(u32) -> bool) {
    let (nx, ny, nz) = volume.dims();
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                if let Some(label) = volume.get(x, y, z) {
                    if keep(label) {
                        mask.set(x, y, z, true);
                    }
                }
            }
        }
    }
}
