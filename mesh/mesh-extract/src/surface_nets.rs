//! Boolean surface-nets extraction.

// Lattice coordinates are small signed integers; casts cannot overflow.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

use std::collections::HashMap;

use atlas_types::RegionMask;
use mesh_types::{IndexedMesh, Point3};

/// Cube corner offsets in a consistent order.
const CORNER_OFFSETS: [(i64, i64, i64); 8] = [
    (0, 0, 0),
    (1, 0, 0),
    (1, 1, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (1, 1, 1),
    (0, 1, 1),
];

/// Cube edges as pairs of corner indices.
const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Extract the boundary surface of a boolean mask.
///
/// Voxels are samples at integer coordinates; the surface sits on the 0.5
/// in/out threshold between set and unset samples. Each cell of the dual
/// lattice that mixes set and unset corners receives one vertex (the average
/// of its crossing-edge midpoints); quads are stitched across every lattice
/// edge whose endpoints disagree and split into two CCW-outward triangles.
///
/// The lattice is padded by one sample on every side (out-of-bounds reads
/// as unset), so masks touching the volume boundary still produce closed
/// surfaces. Cells and edges are visited in ascending `z, y, x` order, which
/// fixes the vertex and face ordering for a given mask.
///
/// An empty mask yields an empty mesh; callers that need to distinguish
/// that case use [`extract_mask_surface`](crate::extract_mask_surface).
#[must_use]
pub fn surface_nets(mask: &RegionMask) -> IndexedMesh {
    let (nx, ny, nz) = mask.dims();
    let (nx, ny, nz) = (nx as i64, ny as i64, nz as i64);

    let mut mesh = IndexedMesh::new();
    // One vertex per active cell; cells are identified by their minimum corner.
    let mut cell_vertex: HashMap<(i64, i64, i64), u32> = HashMap::new();

    // Pass 1: place a vertex in every cell that mixes set and unset corners.
    for cz in -1..nz {
        for cy in -1..ny {
            for cx in -1..nx {
                let mut corners = [false; 8];
                let mut any_set = false;
                let mut all_set = true;
                for (i, (dx, dy, dz)) in CORNER_OFFSETS.iter().enumerate() {
                    let b = mask.get_signed(cx + dx, cy + dy, cz + dz);
                    corners[i] = b;
                    any_set |= b;
                    all_set &= b;
                }
                if !any_set || all_set {
                    continue;
                }

                // Vertex = average of the midpoints of sign-changing edges.
                let mut acc = Point3::new(0.0, 0.0, 0.0);
                let mut crossings = 0u32;
                for (a, b) in CUBE_EDGES {
                    if corners[a] == corners[b] {
                        continue;
                    }
                    let (adx, ady, adz) = CORNER_OFFSETS[a];
                    let (bdx, bdy, bdz) = CORNER_OFFSETS[b];
                    acc.x += 0.5 * ((cx + adx) as f64 + (cx + bdx) as f64);
                    acc.y += 0.5 * ((cy + ady) as f64 + (cy + bdy) as f64);
                    acc.z += 0.5 * ((cz + adz) as f64 + (cz + bdz) as f64);
                    crossings += 1;
                }

                // Mixed corners imply at least one crossing edge.
                if crossings == 0 {
                    continue;
                }

                let inv = 1.0 / f64::from(crossings);
                let index = u32::try_from(mesh.vertices.len()).unwrap_or(u32::MAX);
                mesh.vertices.push(Point3::new(acc.x * inv, acc.y * inv, acc.z * inv));
                cell_vertex.insert((cx, cy, cz), index);
            }
        }
    }

    // Pass 2: stitch a quad across every lattice edge whose endpoints differ.
    // The four cells sharing the edge each contribute their vertex; winding
    // follows the transition direction so normals face outward.
    let vi = |cell_vertex: &HashMap<(i64, i64, i64), u32>, x: i64, y: i64, z: i64| {
        cell_vertex.get(&(x, y, z)).copied()
    };

    // X-aligned edges: (x, y, z) -> (x + 1, y, z).
    for z in 0..nz {
        for y in 0..ny {
            for x in -1..nx {
                let a = mask.get_signed(x, y, z);
                let b = mask.get_signed(x + 1, y, z);
                if a == b {
                    continue;
                }

                let quad = (
                    vi(&cell_vertex, x, y - 1, z - 1),
                    vi(&cell_vertex, x, y, z - 1),
                    vi(&cell_vertex, x, y, z),
                    vi(&cell_vertex, x, y - 1, z),
                );
                let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad else {
                    continue;
                };

                if a {
                    emit_quad(&mut mesh, i00, i10, i11, i01);
                } else {
                    emit_quad(&mut mesh, i00, i01, i11, i10);
                }
            }
        }
    }

    // Y-aligned edges: (x, y, z) -> (x, y + 1, z).
    for z in 0..nz {
        for y in -1..ny {
            for x in 0..nx {
                let a = mask.get_signed(x, y, z);
                let b = mask.get_signed(x, y + 1, z);
                if a == b {
                    continue;
                }

                let quad = (
                    vi(&cell_vertex, x - 1, y, z - 1),
                    vi(&cell_vertex, x, y, z - 1),
                    vi(&cell_vertex, x, y, z),
                    vi(&cell_vertex, x - 1, y, z),
                );
                let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad else {
                    continue;
                };

                if a {
                    emit_quad(&mut mesh, i00, i01, i11, i10);
                } else {
                    emit_quad(&mut mesh, i00, i10, i11, i01);
                }
            }
        }
    }

    // Z-aligned edges: (x, y, z) -> (x, y, z + 1).
    for z in -1..nz {
        for y in 0..ny {
            for x in 0..nx {
                let a = mask.get_signed(x, y, z);
                let b = mask.get_signed(x, y, z + 1);
                if a == b {
                    continue;
                }

                let quad = (
                    vi(&cell_vertex, x - 1, y - 1, z),
                    vi(&cell_vertex, x, y - 1, z),
                    vi(&cell_vertex, x, y, z),
                    vi(&cell_vertex, x - 1, y, z),
                );
                let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad else {
                    continue;
                };

                if a {
                    emit_quad(&mut mesh, i00, i10, i11, i01);
                } else {
                    emit_quad(&mut mesh, i00, i01, i11, i10);
                }
            }
        }
    }

    mesh
}

/// Split a quad into two triangles sharing the `a`-`c` diagonal.
fn emit_quad(mesh: &mut IndexedMesh, a: u32, b: u32, c: u32, d: u32) {
    mesh.faces.push([a, b, c]);
    mesh.faces.push([a, c, d]);
}
