//! Laplacian smoothing.
//!
//! Each iteration moves every interior vertex toward the centroid of its
//! edge-connected neighbors:
//!
//! ```text
//! v_new = v + lambda * (centroid(N(v)) - v)
//! ```
//!
//! Boundary vertices (those on an edge with only one adjacent face) are
//! pinned so open rims do not creep inward. The face list is never touched.

// Vertex counts fit in u32; mesh indices don't overflow in practice
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;

use mesh_types::IndexedMesh;
use nalgebra::Vector3;
use tracing::debug;

use crate::params::SmoothParams;

/// Smooth a mesh by Laplacian relaxation.
///
/// Applies `params.iterations` rounds with factor `params.lambda`. Vertex
/// connectivity is taken from the face list; the output has the same faces
/// and the same vertex count as the input, only positions change. Neighbor
/// lists are sorted, so the result is reproducible for a given input.
#[must_use]
pub fn smooth_mesh(mesh: &IndexedMesh, params: &SmoothParams) -> IndexedMesh {
    if mesh.vertices.is_empty() || mesh.faces.is_empty() || params.iterations == 0 {
        return mesh.clone();
    }

    let neighbors = build_vertex_neighbors(mesh);
    let boundary = find_boundary_vertices(mesh);

    let mut result = mesh.clone();
    let mut max_displacement = 0.0_f64;

    for _ in 0..params.iterations {
        let displacements: Vec<Vector3<f64>> = result
            .vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| {
                if boundary[i] || neighbors[i].is_empty() {
                    return Vector3::zeros();
                }

                let sum: Vector3<f64> = neighbors[i]
                    .iter()
                    .map(|&n| result.vertices[n as usize].coords)
                    .sum();
                let centroid = sum / neighbors[i].len() as f64;

                (centroid - vertex.coords) * params.lambda
            })
            .collect();

        for (vertex, displacement) in result.vertices.iter_mut().zip(&displacements) {
            max_displacement = max_displacement.max(displacement.norm());
            vertex.coords += displacement;
        }
    }

    debug!(
        iterations = params.iterations,
        lambda = params.lambda,
        max_displacement,
        "smoothed mesh"
    );

    result
}

/// Edge-connected neighbors per vertex, sorted and deduplicated.
fn build_vertex_neighbors(mesh: &IndexedMesh) -> Vec<Vec<u32>> {
    let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertices.len()];

    for face in &mesh.faces {
        for i in 0..3 {
            let v = face[i] as usize;
            neighbors[v].push(face[(i + 1) % 3]);
            neighbors[v].push(face[(i + 2) % 3]);
        }
    }

    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }

    neighbors
}

/// Flags vertices lying on a boundary edge (an edge with one adjacent face).
fn find_boundary_vertices(mesh: &IndexedMesh) -> Vec<bool> {
    let mut edge_counts: HashMap<(u32, u32), usize> = HashMap::new();

    for face in &mesh.faces {
        for i in 0..3 {
            let v0 = face[i];
            let v1 = face[(i + 1) % 3];
            let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            *edge_counts.entry(edge).or_insert(0) += 1;
        }
    }

    let mut boundary = vec![false; mesh.vertices.len()];
    for ((v0, v1), count) in edge_counts {
        if count == 1 {
            boundary[v0 as usize] = true;
            boundary[v1 as usize] = true;
        }
    }

    boundary
}
