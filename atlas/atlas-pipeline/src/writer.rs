//! Atomic mesh file writes.

use std::fs;
use std::path::{Path, PathBuf};

use mesh_io::{save_obj, IoResult};
use mesh_types::IndexedMesh;

/// Write a mesh to `path` atomically.
///
/// The mesh is first written to `<path>.tmp` and then renamed into place,
/// so an interrupted run never leaves a partial file at the final path.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or the rename
/// fails. The temporary file is cleaned up on failure.
pub fn write_mesh_atomic(mesh: &IndexedMesh, path: &Path) -> IoResult<()> {
    let tmp = tmp_path(path);

    if let Err(err) = save_obj(mesh, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }

    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }

    Ok(())
}

/// `<path>.tmp` alongside the final path, on the same filesystem.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}
