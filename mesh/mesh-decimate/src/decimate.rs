//! Core mesh decimation algorithm.
//!
//! Edge collapse driven by quadric error metrics (QEM).

// Mesh indices and counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use mesh_types::{IndexedMesh, Point3};
use tracing::debug;

use crate::params::DecimateParams;
use crate::quadric::Quadric;
use crate::result::DecimationResult;

/// An edge collapse candidate in the priority queue.
#[derive(Debug, Clone)]
struct EdgeCollapse {
    /// The two vertex indices forming the edge.
    v1: u32,
    v2: u32,
    /// The error cost of this collapse.
    cost: f64,
    /// Position for the merged vertex.
    target: Point3<f64>,
}

impl PartialEq for EdgeCollapse {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for EdgeCollapse {}

impl PartialOrd for EdgeCollapse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EdgeCollapse {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (smaller cost = higher priority)
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// Decimate a mesh by collapsing edges in order of quadric error.
///
/// Collapses toward `ceil((1 - reduction) * original)` triangles. The face
/// count never increases. When the target would fall below
/// `params.min_faces` the mesh is returned unchanged with
/// [`DecimationResult::skipped`] set; tiny region meshes are not worth
/// thinning further. Collapses that would create non-manifold connectivity
/// are rejected.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_decimate::{decimate_mesh, DecimateParams};
///
/// let cube = unit_cube();
/// let result = decimate_mesh(&cube, &DecimateParams::with_reduction(0.5).with_min_faces(1));
/// assert!(result.final_faces <= cube.face_count());
/// ```
#[must_use]
pub fn decimate_mesh(mesh: &IndexedMesh, params: &DecimateParams) -> DecimationResult {
    let original_faces = mesh.face_count();

    if original_faces == 0 {
        return DecimationResult::unchanged(mesh, false);
    }

    let reduction = params.reduction.clamp(0.0, 1.0);
    let target = ((original_faces as f64) * (1.0 - reduction)).ceil() as usize;

    if target < params.min_faces {
        debug!(
            faces = original_faces,
            target,
            min_faces = params.min_faces,
            "decimation skipped, target below minimum"
        );
        return DecimationResult::unchanged(mesh, true);
    }

    if original_faces <= target {
        return DecimationResult::unchanged(mesh, false);
    }

    debug!(original = original_faces, target, "starting decimation");

    // Working copy; collapsed vertices and degenerate faces become None.
    let mut vertices: Vec<Option<Point3<f64>>> = mesh.vertices.iter().copied().map(Some).collect();
    let mut faces: Vec<Option<[u32; 3]>> = mesh.faces.iter().copied().map(Some).collect();
    let mut active_faces = original_faces;

    let edge_to_faces = build_edge_to_faces(&mesh.faces);
    let boundary_edges = find_boundary_edges(&edge_to_faces);
    let mut quadrics = compute_vertex_quadrics(mesh);

    let mut heap = build_collapse_queue(mesh, &quadrics, &boundary_edges, params);

    // Maps collapsed vertex index -> surviving vertex index.
    let mut vertex_remap: HashMap<u32, u32> = HashMap::new();

    let mut collapses_performed = 0;
    let mut collapses_rejected = 0;

    while active_faces > target {
        let Some(collapse) = heap.pop() else {
            break;
        };

        let v1 = resolve_vertex(collapse.v1, &vertex_remap);
        let v2 = resolve_vertex(collapse.v2, &vertex_remap);

        // Stale queue entry: endpoints already merged or gone.
        if v1 == v2 || vertices[v1 as usize].is_none() || vertices[v2 as usize].is_none() {
            continue;
        }

        if params.preserve_boundary && boundary_edges.contains(&normalize_edge(v1, v2)) {
            collapses_rejected += 1;
            continue;
        }

        if !is_collapse_valid(&vertices, &faces, v1, v2) {
            collapses_rejected += 1;
            continue;
        }

        // Merge v2 into v1 at the precomputed target position.
        vertices[v1 as usize] = Some(collapse.target);
        let q2 = quadrics[v2 as usize];
        quadrics[v1 as usize].add(&q2);
        vertices[v2 as usize] = None;
        vertex_remap.insert(v2, v1);

        // Rewrite faces through the remap; drop those that became degenerate.
        for face_opt in &mut faces {
            if let Some(face) = face_opt {
                for idx in face.iter_mut() {
                    *idx = resolve_vertex(*idx, &vertex_remap);
                }
                if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                    *face_opt = None;
                    active_faces -= 1;
                }
            }
        }

        collapses_performed += 1;

        requeue_vertex_edges(
            v1,
            &vertices,
            &faces,
            &quadrics,
            &boundary_edges,
            params,
            &mut heap,
        );
    }

    let final_mesh = compact_mesh(&vertices, &faces);

    debug!(
        final_faces = active_faces,
        collapses = collapses_performed,
        rejected = collapses_rejected,
        "decimation complete"
    );

    DecimationResult {
        mesh: final_mesh,
        original_faces,
        final_faces: active_faces,
        collapses_performed,
        collapses_rejected,
        skipped: false,
    }
}

const fn normalize_edge(v1: u32, v2: u32) -> (u32, u32) {
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

fn resolve_vertex(mut v: u32, remap: &HashMap<u32, u32>) -> u32 {
    while let Some(&new_v) = remap.get(&v) {
        v = new_v;
    }
    v
}

fn build_edge_to_faces(faces: &[[u32; 3]]) -> HashMap<(u32, u32), Vec<usize>> {
    let mut edge_to_faces: HashMap<(u32, u32), Vec<usize>> = HashMap::new();

    for (face_idx, face) in faces.iter().enumerate() {
        for i in 0..3 {
            let edge = normalize_edge(face[i], face[(i + 1) % 3]);
            edge_to_faces.entry(edge).or_default().push(face_idx);
        }
    }

    edge_to_faces
}

fn find_boundary_edges(edge_to_faces: &HashMap<(u32, u32), Vec<usize>>) -> HashSet<(u32, u32)> {
    edge_to_faces
        .iter()
        .filter(|(_, faces)| faces.len() == 1)
        .map(|(edge, _)| *edge)
        .collect()
}

fn compute_vertex_quadrics(mesh: &IndexedMesh) -> Vec<Quadric> {
    let mut quadrics = vec![Quadric::default(); mesh.vertices.len()];

    for (face, triangle) in mesh.faces.iter().zip(mesh.triangles()) {
        let Some(normal) = triangle.unit_normal() else {
            continue; // degenerate face contributes no plane
        };
        let d = -normal.dot(&triangle.v0.coords);
        let q = Quadric::from_plane(normal, d);

        for &vi in face {
            quadrics[vi as usize].add(&q);
        }
    }

    quadrics
}

fn build_collapse_queue(
    mesh: &IndexedMesh,
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
) -> BinaryHeap<EdgeCollapse> {
    let mut heap = BinaryHeap::new();
    let mut seen_edges = HashSet::new();

    for face in &mesh.faces {
        for i in 0..3 {
            let v1 = face[i];
            let v2 = face[(i + 1) % 3];
            let edge = normalize_edge(v1, v2);

            if !seen_edges.insert(edge) {
                continue;
            }

            if params.preserve_boundary && boundary_edges.contains(&edge) {
                continue;
            }

            let collapse = score_edge(
                v1,
                v2,
                &mesh.vertices[v1 as usize],
                &mesh.vertices[v2 as usize],
                quadrics,
            );
            heap.push(collapse);
        }
    }

    heap
}

/// Combined quadric cost of an edge and the merged-vertex position.
fn score_edge(
    v1: u32,
    v2: u32,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    quadrics: &[Quadric],
) -> EdgeCollapse {
    let mut combined = quadrics[v1 as usize];
    combined.add(&quadrics[v2 as usize]);

    // Fall back to the edge midpoint when the quadric is rank-deficient.
    let midpoint = Point3::new(
        0.5 * (p1.x + p2.x),
        0.5 * (p1.y + p2.y),
        0.5 * (p1.z + p2.z),
    );
    let target = combined.minimizer().unwrap_or(midpoint);
    let cost = combined.evaluate(&target);

    EdgeCollapse {
        v1,
        v2,
        cost,
        target,
    }
}

/// Reject collapses whose edge link is not two vertices.
///
/// If v1 and v2 share more than two neighbors the collapse would pinch the
/// surface into non-manifold connectivity.
fn is_collapse_valid(
    vertices: &[Option<Point3<f64>>],
    faces: &[Option<[u32; 3]>],
    v1: u32,
    v2: u32,
) -> bool {
    let mut v1_neighbors: HashSet<u32> = HashSet::new();
    let mut v2_neighbors: HashSet<u32> = HashSet::new();

    for face in faces.iter().flatten() {
        let has_v1 = face.contains(&v1);
        let has_v2 = face.contains(&v2);

        for &vi in face {
            if vi == v1 || vi == v2 || vertices[vi as usize].is_none() {
                continue;
            }
            if has_v1 {
                v1_neighbors.insert(vi);
            }
            if has_v2 {
                v2_neighbors.insert(vi);
            }
        }
    }

    v1_neighbors.intersection(&v2_neighbors).count() <= 2
}

fn requeue_vertex_edges(
    v1: u32,
    vertices: &[Option<Point3<f64>>],
    faces: &[Option<[u32; 3]>],
    quadrics: &[Quadric],
    boundary_edges: &HashSet<(u32, u32)>,
    params: &DecimateParams,
    heap: &mut BinaryHeap<EdgeCollapse>,
) {
    let Some(p1) = vertices[v1 as usize] else {
        return;
    };

    let mut neighbors: HashSet<u32> = HashSet::new();
    for face in faces.iter().flatten() {
        if face.contains(&v1) {
            for &vi in face {
                if vi != v1 && vertices[vi as usize].is_some() {
                    neighbors.insert(vi);
                }
            }
        }
    }

    for &v2 in &neighbors {
        let Some(p2) = vertices[v2 as usize] else {
            continue;
        };

        if params.preserve_boundary && boundary_edges.contains(&normalize_edge(v1, v2)) {
            continue;
        }

        heap.push(score_edge(v1, v2, &p1, &p2, quadrics));
    }
}

/// Drop collapsed vertices and deleted faces, reindexing what remains.
fn compact_mesh(vertices: &[Option<Point3<f64>>], faces: &[Option<[u32; 3]>]) -> IndexedMesh {
    let mut index_remap: HashMap<u32, u32> = HashMap::new();
    let mut new_vertices = Vec::new();

    for (old_idx, vertex_opt) in vertices.iter().enumerate() {
        if let Some(vertex) = vertex_opt {
            index_remap.insert(old_idx as u32, new_vertices.len() as u32);
            new_vertices.push(*vertex);
        }
    }

    let mut new_faces = Vec::new();
    for face in faces.iter().flatten() {
        if let (Some(&i0), Some(&i1), Some(&i2)) = (
            index_remap.get(&face[0]),
            index_remap.get(&face[1]),
            index_remap.get(&face[2]),
        ) {
            new_faces.push([i0, i1, i2]);
        }
    }

    IndexedMesh {
        vertices: new_vertices,
        faces: new_faces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::unit_cube;
    use std::f64::consts::PI;

    /// A closed unit sphere with `2 * slices * (stacks - 1)` triangles,
    /// CCW-outward winding.
    fn uv_sphere(stacks: usize, slices: usize) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();

        mesh.vertices.push(Point3::new(0.0, 0.0, 1.0));
        for i in 1..stacks {
            let phi = PI * i as f64 / stacks as f64;
            for j in 0..slices {
                let theta = 2.0 * PI * j as f64 / slices as f64;
                mesh.vertices.push(Point3::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                ));
            }
        }
        mesh.vertices.push(Point3::new(0.0, 0.0, -1.0));

        let ring = |i: usize, j: usize| (1 + (i - 1) * slices + j % slices) as u32;
        let south = (1 + (stacks - 1) * slices) as u32;

        for j in 0..slices {
            mesh.faces.push([0, ring(1, j), ring(1, j + 1)]);
        }
        for i in 1..(stacks - 1) {
            for j in 0..slices {
                mesh.faces
                    .push([ring(i, j), ring(i + 1, j), ring(i + 1, j + 1)]);
                mesh.faces
                    .push([ring(i, j), ring(i + 1, j + 1), ring(i, j + 1)]);
            }
        }
        for j in 0..slices {
            mesh.faces
                .push([south, ring(stacks - 1, j + 1), ring(stacks - 1, j)]);
        }

        mesh
    }

    #[test]
    fn test_decimate_empty_mesh() {
        let mesh = IndexedMesh::new();
        let result = decimate_mesh(&mesh, &DecimateParams::default());

        assert_eq!(result.original_faces, 0);
        assert_eq!(result.final_faces, 0);
        assert!(!result.skipped);
    }

    #[test]
    fn test_zero_reduction_is_identity() {
        let cube = unit_cube();
        let result = decimate_mesh(&cube, &DecimateParams::default());

        assert_eq!(result.final_faces, cube.face_count());
        assert_eq!(result.collapses_performed, 0);
        assert_eq!(result.mesh, cube);
    }

    #[test]
    fn test_face_count_never_increases() {
        let cube = unit_cube();

        for reduction in [0.1, 0.3, 0.5, 0.9] {
            let result = decimate_mesh(
                &cube,
                &DecimateParams::with_reduction(reduction).with_min_faces(1),
            );
            assert!(result.final_faces <= cube.face_count());
        }
    }

    #[test]
    fn test_skips_below_min_faces() {
        // A cube has 12 faces; removing 90% targets 2, below the default
        // minimum of 4.
        let cube = unit_cube();
        let result = decimate_mesh(&cube, &DecimateParams::with_reduction(0.9));

        assert!(result.skipped);
        assert_eq!(result.final_faces, cube.face_count());
        assert_eq!(result.mesh, cube);
    }

    #[test]
    fn test_faces_reference_valid_vertices() {
        let cube = unit_cube();
        let result = decimate_mesh(
            &cube,
            &DecimateParams::with_reduction(0.5).with_min_faces(1),
        );

        let n = result.mesh.vertex_count() as u32;
        for face in &result.mesh.faces {
            assert!(face.iter().all(|&i| i < n));
            assert!(face[0] != face[1] && face[1] != face[2] && face[0] != face[2]);
        }
    }

    #[test]
    fn test_result_counts_match_mesh() {
        let cube = unit_cube();
        let result = decimate_mesh(
            &cube,
            &DecimateParams::with_reduction(0.5).with_min_faces(1),
        );

        assert_eq!(result.final_faces, result.mesh.face_count());
        assert_eq!(result.original_faces, cube.face_count());
    }

    #[test]
    fn test_reduction_hits_target_on_closed_sphere() {
        let sphere = uv_sphere(17, 32);
        assert_eq!(sphere.face_count(), 1024);

        let result = decimate_mesh(&sphere, &DecimateParams::with_reduction(0.2));
        let target = (sphere.face_count() as f64 * 0.8).ceil() as usize;

        assert!(!result.skipped);
        assert!(result.final_faces <= target);
        assert!(
            result.final_faces >= target - 20,
            "stalled at {} faces",
            result.final_faces
        );

        // Collapses must not pinch the surface: no edge may gain a third
        // incident face.
        let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();
        for &[i0, i1, i2] in &result.mesh.faces {
            for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
                *edge_uses.entry(normalize_edge(a, b)).or_default() += 1;
            }
        }
        assert!(edge_uses.values().all(|&n| n <= 2));
    }

    #[test]
    fn test_normalize_edge() {
        assert_eq!(normalize_edge(5, 3), (3, 5));
        assert_eq!(normalize_edge(3, 5), (3, 5));
        assert_eq!(normalize_edge(1, 1), (1, 1));
    }
}
