//! Dense 3D annotation volumes.

use crate::error::{AtlasDataError, AtlasDataResult};

/// A dense 3D volume of integer region labels.
///
/// Voxels are stored in row-major order with `x` varying fastest. The volume
/// is immutable after construction; mesh generation only ever reads it.
///
/// Label `0` denotes "no region".
#[derive(Debug, Clone)]
pub struct AnnotationVolume {
    /// Voxel labels, row-major (x fastest).
    labels: Vec<u32>,
    /// Volume dimensions `(nx, ny, nz)`.
    dims: (usize, usize, usize),
}

impl AnnotationVolume {
    /// Create a volume from a raw voxel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AtlasDataError::DimensionMismatch`] if `labels.len()` does
    /// not equal `nx * ny * nz`.
    ///
    /// # Example
    ///
    /// ```
    /// use atlas_types::AnnotationVolume;
    ///
    /// let volume = AnnotationVolume::from_raw(vec![0; 8], (2, 2, 2)).unwrap();
    /// assert_eq!(volume.len(), 8);
    /// ```
    pub fn from_raw(labels: Vec<u32>, dims: (usize, usize, usize)) -> AtlasDataResult<Self> {
        let (nx, ny, nz) = dims;
        if labels.len() != nx * ny * nz {
            return Err(AtlasDataError::DimensionMismatch {
                len: labels.len(),
                nx,
                ny,
                nz,
            });
        }

        Ok(Self { labels, dims })
    }

    /// Create a volume filled from a function of voxel coordinates.
    ///
    /// Convenient for tests and synthetic volumes.
    #[must_use]
    pub fn from_fn(dims: (usize, usize, usize), f: impl Fn(usize, usize, usize) -> u32) -> Self {
        let (nx, ny, nz) = dims;
        let mut labels = Vec::with_capacity(nx * ny * nz);
        for z in 0..nz {
            for y in 0..ny {
                for x in 0..nx {
                    labels.push(f(x, y, z));
                }
            }
        }

        Self { labels, dims }
    }

    /// Volume dimensions `(nx, ny, nz)`.
    #[must_use]
    pub const fn dims(&self) -> (usize, usize, usize) {
        self.dims
    }

    /// Total number of voxels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the volume has no voxels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label at voxel coordinates, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u32> {
        if x < self.dims.0 && y < self.dims.1 && z < self.dims.2 {
            Some(self.labels[self.index(x, y, z)])
        } else {
            None
        }
    }

    /// Iterate over all voxel labels in storage order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.labels.iter().copied()
    }

    /// Raw voxel buffer in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Convert 3D coordinates to linear index.
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.dims.0 + z * self.dims.0 * self.dims.1
    }
}
