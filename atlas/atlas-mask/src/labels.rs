//! Distinct-label index.

use std::collections::HashSet;

use atlas_types::AnnotationVolume;
use tracing::debug;

/// The set of distinct non-zero labels present in an annotation volume.
///
/// Built with a single full scan; immutable afterwards and shared read-only
/// across all per-region computations.
///
/// # Example
///
/// ```
/// use atlas_types::AnnotationVolume;
/// use atlas_mask::LabelSet;
///
/// let volume = AnnotationVolume::from_raw(vec![0, 3, 3, 7], (4, 1, 1)).unwrap();
/// let labels = LabelSet::scan(&volume);
///
/// assert!(labels.contains(3));
/// assert!(labels.contains(7));
/// assert!(!labels.contains(0));
/// assert_eq!(labels.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LabelSet {
    present: HashSet<u32>,
}

impl LabelSet {
    /// Scan a volume and collect every distinct non-zero label.
    ///
    /// O(voxel count), performed once per run.
    #[must_use]
    pub fn scan(volume: &AnnotationVolume) -> Self {
        let present: HashSet<u32> = volume.iter().filter(|&label| label != 0).collect();
        debug!(distinct = present.len(), voxels = volume.len(), "scanned annotation labels");
        Self { present }
    }

    /// Whether a label occurs anywhere in the volume.
    #[must_use]
    pub fn contains(&self, label: u32) -> bool {
        self.present.contains(&label)
    }

    /// All distinct labels, unordered.
    #[must_use]
    pub fn all(&self) -> &HashSet<u32> {
        &self.present
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Whether the volume carried no labels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}
