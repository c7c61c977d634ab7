//! The per-region mesh generation run.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use atlas_mask::{aggregate_mask, LabelSet};
use atlas_ontology::RegionTree;
use atlas_types::{AnnotationVolume, StructureRecord};
use mesh_decimate::{decimate_mesh, DecimateParams};
use mesh_extract::{extract_mask_surface, ExtractError, ExtractParams};
use mesh_smooth::{smooth_mesh, SmoothParams};

use crate::error::PipelineResult;
use crate::params::GenerationParams;
use crate::result::GenerationOutcome;
use crate::writer::write_mesh_atomic;

/// What happened to one region during the parallel pass.
#[derive(Debug)]
enum NodeStatus {
    /// A mesh file was produced in this run.
    Written,
    /// A mesh file already existed and was kept.
    SkippedExisting,
    /// The region has no voxels; no file was produced.
    Empty,
    /// Processing or writing failed.
    Failed(String),
}

/// Generate one mesh file per region of the structure hierarchy.
///
/// Builds the region tree from `records`, scans `volume` for present
/// labels, then visits every region in parallel: regions whose mesh file
/// (`<id>.obj` under `output_dir`) already exists are skipped, the rest
/// get their mask aggregated from the annotation, extracted, optionally
/// decimated and smoothed per `params`, and written atomically.
///
/// A final sequential pass validates file sizes and assembles the
/// [`MeshCatalog`](crate::MeshCatalog): a region is cataloged only if its
/// file is larger than `params.min_mesh_bytes`.
///
/// Per-region problems never abort the run; they are logged and recorded
/// in the outcome.
///
/// # Errors
///
/// - [`PipelineError::MalformedHierarchy`](crate::PipelineError::MalformedHierarchy)
///   if `records` do not form a valid tree
/// - [`PipelineError::Io`](crate::PipelineError::Io) if `output_dir`
///   cannot be created
pub fn generate_region_meshes(
    records: &[StructureRecord],
    volume: &AnnotationVolume,
    root_id: u32,
    output_dir: &Path,
    params: &GenerationParams,
) -> PipelineResult<GenerationOutcome> {
    let mut tree = RegionTree::build(records)?;
    let labels = LabelSet::scan(volume);
    tree.mark_labels(|id| labels.contains(id));

    fs::create_dir_all(output_dir)?;

    let ids: Vec<u32> = tree.iter().map(|node| node.id).collect();
    info!(regions = ids.len(), output = %output_dir.display(), "generating region meshes");

    let statuses: Vec<(u32, NodeStatus)> = ids
        .par_iter()
        .map(|&id| {
            let status = process_node(&tree, id, volume, &labels, root_id, output_dir, params);
            (id, status)
        })
        .collect();

    let mut outcome = GenerationOutcome::default();

    // Validation pass: only files above the size threshold enter the catalog.
    for (id, status) in statuses {
        match status {
            NodeStatus::Written | NodeStatus::SkippedExisting => {
                let path = mesh_path(output_dir, id);
                if file_is_valid(&path, params.min_mesh_bytes) {
                    outcome.catalog.insert(id, path);
                    match status {
                        NodeStatus::Written => outcome.written.push(id),
                        _ => outcome.skipped_existing.push(id),
                    }
                } else {
                    warn!(id, path = %path.display(), "mesh file too small, marking degenerate");
                    outcome.degenerate.push(id);
                }
            }
            NodeStatus::Empty => outcome.empty.push(id),
            NodeStatus::Failed(message) => outcome.failed.push((id, message)),
        }
    }

    info!(%outcome, "mesh generation finished");
    Ok(outcome)
}

/// Keep only structures whose own label occurs in the annotation volume.
///
/// This is the list-level companion to mesh generation: structure metadata
/// for labels that never appear in a given volume is usually dropped from
/// the packaged atlas.
#[must_use]
pub fn filter_structures(records: &[StructureRecord], labels: &LabelSet) -> Vec<StructureRecord> {
    records
        .iter()
        .filter(|record| labels.contains(record.id))
        .cloned()
        .collect()
}

/// `<output_dir>/<id>.obj`
#[must_use]
pub fn mesh_path(output_dir: &Path, id: u32) -> PathBuf {
    output_dir.join(format!("{id}.obj"))
}

/// Process a single region end to end.
fn process_node(
    tree: &RegionTree,
    id: u32,
    volume: &AnnotationVolume,
    labels: &LabelSet,
    root_id: u32,
    output_dir: &Path,
    params: &GenerationParams,
) -> NodeStatus {
    let path = mesh_path(output_dir, id);

    if path.exists() {
        debug!(id, "mesh file exists, skipping");
        return NodeStatus::SkippedExisting;
    }

    let Some(mask) = aggregate_mask(tree, id, volume, labels, root_id) else {
        // ids come from the tree itself, so this indicates a logic error
        // upstream rather than bad data.
        return NodeStatus::Failed(format!("region {id} missing from tree"));
    };

    let extract_params =
        ExtractParams::default().with_closing_iterations(params.closing_iterations);
    let mut mesh = match extract_mask_surface(&mask, &extract_params) {
        Ok(mesh) => mesh,
        Err(ExtractError::EmptyRegion) => {
            debug!(id, "region absent from volume, no mesh");
            return NodeStatus::Empty;
        }
    };

    if params.decimate_fraction > 0.0 {
        let result = decimate_mesh(&mesh, &DecimateParams::with_reduction(params.decimate_fraction));
        if result.skipped {
            debug!(id, faces = result.original_faces, "mesh too small to decimate");
        }
        mesh = result.mesh;
    }

    if params.smooth {
        mesh = smooth_mesh(&mesh, &SmoothParams::default());
    }

    match write_mesh_atomic(&mesh, &path) {
        Ok(()) => {
            debug!(
                id,
                vertices = mesh.vertex_count(),
                faces = mesh.face_count(),
                "wrote region mesh"
            );
            NodeStatus::Written
        }
        Err(err) => {
            warn!(id, error = %err, "failed to write region mesh");
            NodeStatus::Failed(err.to_string())
        }
    }
}

fn file_is_valid(path: &Path, min_bytes: u64) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.len() > min_bytes)
}
