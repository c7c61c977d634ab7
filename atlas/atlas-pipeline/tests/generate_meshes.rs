//! End-to-end mesh generation runs against a small synthetic atlas.
//!
//! The fixture is a 10x10x10 annotation volume with two labels:
//!
//! - label 1 (the root's own label) fills `x < 5, y >= 5`
//! - label 2 (a child region) fills `x < 5, y < 5`
//! - label 3 exists in the hierarchy but never in the volume
//!
//! So the root region covers all 500 labeled voxels, region 2 covers its
//! own 250, and region 3 is empty.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use atlas_mask::LabelSet;
use atlas_pipeline::{
    filter_structures, generate_region_meshes, mesh_path, GenerationParams, PipelineError,
};
use atlas_types::{AnnotationVolume, StructureRecord};
use mesh_io::load_obj;
use tempfile::tempdir;

const ROOT_ID: u32 = 1;

fn record(id: u32, path: &[u32]) -> StructureRecord {
    StructureRecord {
        id,
        name: format!("region {id}"),
        acronym: format!("R{id}"),
        structure_id_path: path.to_vec(),
        rgb_triplet: [200, 100, 50],
    }
}

fn structures() -> Vec<StructureRecord> {
    vec![
        record(1, &[1]),
        record(2, &[1, 2]),
        record(3, &[1, 3]),
    ]
}

fn annotation() -> AnnotationVolume {
    AnnotationVolume::from_fn((10, 10, 10), |x, y, _z| {
        if x < 5 {
            if y < 5 {
                2
            } else {
                1
            }
        } else {
            0
        }
    })
}

fn run(dir: &Path, params: &GenerationParams) -> atlas_pipeline::GenerationOutcome {
    generate_region_meshes(&structures(), &annotation(), ROOT_ID, dir, params).unwrap()
}

#[test]
fn generates_one_mesh_per_populated_region() {
    let dir = tempdir().unwrap();
    let outcome = run(dir.path(), &GenerationParams::default());

    assert_eq!(outcome.written, vec![1, 2]);
    assert_eq!(outcome.empty, vec![3]);
    assert!(outcome.failed.is_empty());
    assert!(outcome.degenerate.is_empty());
    assert_eq!(outcome.total_regions(), 3);

    assert!(outcome.catalog.contains(1));
    assert!(outcome.catalog.contains(2));
    assert!(!outcome.catalog.contains(3));

    assert!(mesh_path(dir.path(), 1).exists());
    assert!(mesh_path(dir.path(), 2).exists());
    assert!(!mesh_path(dir.path(), 3).exists());
}

#[test]
fn region_mesh_encloses_roughly_its_voxel_volume() {
    let dir = tempdir().unwrap();
    run(dir.path(), &GenerationParams::default());

    // Region 2 is a 5x5x10 block of 250 voxels. The dual surface chamfers
    // edges and corners, so the enclosed volume is a bit below that.
    let mesh = load_obj(mesh_path(dir.path(), 2)).unwrap();
    let volume = mesh.signed_volume();
    assert!(volume > 180.0 && volume < 260.0, "got {volume}");

    // The root covers both labeled blocks.
    let root = load_obj(mesh_path(dir.path(), 1)).unwrap();
    assert!(root.signed_volume() > volume);
}

#[test]
fn rerun_reuses_existing_meshes() {
    let dir = tempdir().unwrap();
    let first = run(dir.path(), &GenerationParams::default());
    let bytes_before = fs::read(mesh_path(dir.path(), 2)).unwrap();

    let second = run(dir.path(), &GenerationParams::default());

    assert_eq!(first.written, vec![1, 2]);
    assert!(second.written.is_empty());
    assert_eq!(second.skipped_existing, vec![1, 2]);
    assert_eq!(second.empty, vec![3]);
    assert_eq!(second.catalog.len(), first.catalog.len());

    let bytes_after = fs::read(mesh_path(dir.path(), 2)).unwrap();
    assert_eq!(bytes_before, bytes_after);
}

#[test]
fn undersized_meshes_are_degenerate_and_uncataloged() {
    let dir = tempdir().unwrap();
    let params = GenerationParams::default().with_min_mesh_bytes(10_000_000);
    let outcome = run(dir.path(), &params);

    assert!(outcome.written.is_empty());
    assert_eq!(outcome.degenerate, vec![1, 2]);
    assert!(outcome.catalog.is_empty());

    // The files themselves are still on disk for inspection.
    assert!(mesh_path(dir.path(), 1).exists());
}

#[test]
fn malformed_hierarchy_aborts_the_run() {
    let dir = tempdir().unwrap();
    let bad_records = vec![record(1, &[1]), record(2, &[1, 9, 2])];

    let result = generate_region_meshes(
        &bad_records,
        &annotation(),
        ROOT_ID,
        dir.path(),
        &GenerationParams::default(),
    );

    assert!(matches!(result, Err(PipelineError::MalformedHierarchy(_))));
}

#[test]
fn decimation_reduces_face_count() {
    let plain_dir = tempdir().unwrap();
    let decimated_dir = tempdir().unwrap();

    run(plain_dir.path(), &GenerationParams::default());
    run(
        decimated_dir.path(),
        &GenerationParams::default().with_decimate_fraction(0.5),
    );

    let plain = load_obj(mesh_path(plain_dir.path(), 2)).unwrap();
    let decimated = load_obj(mesh_path(decimated_dir.path(), 2)).unwrap();

    assert!(decimated.face_count() < plain.face_count());
    assert!(decimated.signed_volume() > 0.0);
}

#[test]
fn smoothing_preserves_topology_and_shrinks_volume() {
    let plain_dir = tempdir().unwrap();
    let smoothed_dir = tempdir().unwrap();

    run(plain_dir.path(), &GenerationParams::default());
    run(
        smoothed_dir.path(),
        &GenerationParams::default().with_smooth(true),
    );

    let plain = load_obj(mesh_path(plain_dir.path(), 2)).unwrap();
    let smoothed = load_obj(mesh_path(smoothed_dir.path(), 2)).unwrap();

    assert_eq!(smoothed.face_count(), plain.face_count());
    assert_eq!(smoothed.vertex_count(), plain.vertex_count());
    assert!(smoothed.signed_volume() < plain.signed_volume());
    assert!(smoothed.signed_volume() > 0.0);
}

#[test]
fn runs_are_deterministic() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();

    run(dir_a.path(), &GenerationParams::default());
    run(dir_b.path(), &GenerationParams::default());

    for id in [1, 2] {
        let a = fs::read(mesh_path(dir_a.path(), id)).unwrap();
        let b = fs::read(mesh_path(dir_b.path(), id)).unwrap();
        assert_eq!(a, b, "mesh {id} differs between runs");
    }
}

#[test]
fn filter_structures_drops_labels_absent_from_volume() {
    let labels = LabelSet::scan(&annotation());
    let kept = filter_structures(&structures(), &labels);

    let kept_ids: Vec<u32> = kept.iter().map(|record| record.id).collect();
    assert_eq!(kept_ids, vec![1, 2]);
}
