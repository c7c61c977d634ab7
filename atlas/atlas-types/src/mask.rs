//! Boolean voxel masks.

/// A boolean volume marking the voxels belonging to one region.
///
/// A mask always shares the dimensions of the [`AnnotationVolume`] it was
/// derived from. Masks are ephemeral: one is created per region, surfaced,
/// and dropped.
///
/// [`AnnotationVolume`]: crate::AnnotationVolume
#[derive(Debug, Clone)]
pub struct RegionMask {
    /// Voxel flags, row-major (x fastest).
    bits: Vec<bool>,
    /// Mask dimensions `(nx, ny, nz)`.
    dims: (usize, usize, usize),
}

impl RegionMask {
    /// Create an all-false mask with the given dimensions.
    #[must_use]
    pub fn new(dims: (usize, usize, usize)) -> Self {
        let (nx, ny, nz) = dims;
        Self {
            bits: vec![false; nx * ny * nz],
            dims,
        }
    }

    /// Mask dimensions `(nx, ny, nz)`.
    #[must_use]
    pub const fn dims(&self) -> (usize, usize, usize) {
        self.dims
    }

    /// The flag at voxel coordinates. Out-of-bounds voxels read as `false`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        if x < self.dims.0 && y < self.dims.1 && z < self.dims.2 {
            self.bits[self.index(x, y, z)]
        } else {
            false
        }
    }

    /// Like [`get`](Self::get) but for signed coordinates; anything outside
    /// the volume reads as `false`.
    #[must_use]
    pub fn get_signed(&self, x: i64, y: i64, z: i64) -> bool {
        if x < 0 || y < 0 || z < 0 {
            return false;
        }
        #[allow(clippy::cast_sign_loss)] // negative handled above
        self.get(x as usize, y as usize, z as usize)
    }

    /// Set the flag at voxel coordinates. Does nothing if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
        if x < self.dims.0 && y < self.dims.1 && z < self.dims.2 {
            let idx = self.index(x, y, z);
            self.bits[idx] = value;
        }
    }

    /// Number of set voxels.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Whether no voxel is set.
    #[must_use]
    pub fn is_empty_mask(&self) -> bool {
        !self.bits.contains(&true)
    }

    /// Whether `other` is set everywhere this mask is set.
    ///
    /// Panics are avoided by treating mismatched dimensions as "not a subset".
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.dims != other.dims {
            return false;
        }
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(&a, &b)| !a || b)
    }

    /// Convert 3D coordinates to linear index.
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.dims.0 + z * self.dims.0 * self.dims.1
    }
}
