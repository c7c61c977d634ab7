//! Binary morphological closing.

use atlas_types::RegionMask;

/// 6-connected neighbor offsets.
const NEIGHBORS: [(i64, i64, i64); 6] = [
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Apply binary morphological closing to a mask.
///
/// Performs `iterations` 6-connected dilations followed by the same number
/// of erosions. Voxels outside the volume read as unset, so erosion shaves
/// voxels on the volume boundary; this matches the usual convention for
/// zero-padded binary morphology.
///
/// Closing seals holes and gaps narrower than roughly `2 * iterations`
/// voxels between bulky parts of the mask. Away from the volume faces it
/// never unsets a voxel that was already set; set voxels within
/// `iterations` of a volume face can be lost to the padding.
///
/// # Example
///
/// ```
/// use atlas_types::RegionMask;
/// use mesh_extract::binary_close;
///
/// // A 3x3x3 block with its center voxel missing.
/// let mut mask = RegionMask::new((5, 5, 5));
/// for z in 1..4 {
///     for y in 1..4 {
///         for x in 1..4 {
///             mask.set(x, y, z, true);
///         }
///     }
/// }
/// mask.set(2, 2, 2, false);
///
/// let closed = binary_close(&mask, 1);
/// assert!(closed.get(2, 2, 2));
/// ```
#[must_use]
pub fn binary_close(mask: &RegionMask, iterations: usize) -> RegionMask {
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = dilate(&current);
    }
    for _ in 0..iterations {
        current = erode(&current);
    }
    current
}

/// One 6-connected binary dilation.
fn dilate(mask: &RegionMask) -> RegionMask {
    let (nx, ny, nz) = mask.dims();
    let mut out = RegionMask::new(mask.dims());

    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                let set = mask.get(x, y, z)
                    || NEIGHBORS.iter().any(|&(dx, dy, dz)| {
                        mask.get_signed(x as i64 + dx, y as i64 + dy, z as i64 + dz)
                    });
                if set {
                    out.set(x, y, z, true);
                }
            }
        }
    }

    out
}

/// One 6-connected binary erosion. Out-of-bounds neighbors count as unset.
fn erode(mask: &RegionMask) -> RegionMask {
    let (nx, ny, nz) = mask.dims();
    let mut out = RegionMask::new(mask.dims());

    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                let keep = mask.get(x, y, z)
                    && NEIGHBORS.iter().all(|&(dx, dy, dz)| {
                        mask.get_signed(x as i64 + dx, y as i64 + dy, z as i64 + dz)
                    });
                if keep {
                    out.set(x, y, z, true);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_is_identity() {
        let mut mask = RegionMask::new((4, 4, 4));
        mask.set(1, 2, 3, true);

        let closed = binary_close(&mask, 0);
        assert_eq!(closed.count_ones(), 1);
        assert!(closed.get(1, 2, 3));
    }

    #[test]
    fn closing_preserves_isolated_voxel() {
        // Dilation grows the voxel into a cross; erosion shrinks it back.
        let mut mask = RegionMask::new((5, 5, 5));
        mask.set(2, 2, 2, true);

        let closed = binary_close(&mask, 1);
        assert_eq!(closed.count_ones(), 1);
        assert!(closed.get(2, 2, 2));
    }

    #[test]
    fn closing_bridges_gap_between_slabs() {
        // Two 3x3 slabs one voxel apart; the center of the gap plane has
        // dilated voxels on all six sides and survives erosion.
        let mut mask = RegionMask::new((7, 5, 5));
        for z in 1..4 {
            for y in 1..4 {
                mask.set(2, y, z, true);
                mask.set(4, y, z, true);
            }
        }
        assert!(!mask.get(3, 2, 2));

        let closed = binary_close(&mask, 1);
        assert!(closed.get(3, 2, 2));
        // No slab voxel touches a volume face, so closing only adds.
        assert!(mask.is_subset_of(&closed));
    }

    #[test]
    fn closing_fills_internal_hole() {
        // A 3x3x3 solid block with its center removed.
        let mut mask = RegionMask::new((5, 5, 5));
        for z in 1..4 {
            for y in 1..4 {
                for x in 1..4 {
                    mask.set(x, y, z, true);
                }
            }
        }
        mask.set(2, 2, 2, false);
        assert_eq!(mask.count_ones(), 26);

        let closed = binary_close(&mask, 1);
        assert!(closed.get(2, 2, 2));
    }

    #[test]
    fn dilate_then_erode_composition() {
        let mut mask = RegionMask::new((5, 5, 5));
        mask.set(2, 2, 2, true);

        let dilated = dilate(&mask);
        assert_eq!(dilated.count_ones(), 7); // voxel + 6 neighbors

        let eroded = erode(&dilated);
        assert_eq!(eroded.count_ones(), 1);
    }
}
