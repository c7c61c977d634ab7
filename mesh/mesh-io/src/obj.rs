//! Wavefront OBJ file format support.
//!
//! ASCII OBJ, geometry only:
//!
//! ```text
//! v x y z          – vertex position
//! f a b c          – face, 1-based vertex indices
//! ```
//!
//! The writer emits coordinates with Rust's shortest round-trip float
//! formatting, so a saved mesh loads back bit-for-bit identical. The loader
//! additionally tolerates `a/b/c` index tuples, polygonal faces (fan
//! triangulated) and ignores normals, texture coordinates and other
//! statements it does not need.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Point3};

use crate::error::{IoError, IoResult};

/// Save a mesh to an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_types::unit_cube;
/// use mesh_io::save_obj;
///
/// save_obj(&unit_cube(), "cube.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "# {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    )?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    // OBJ indices are 1-based.
    for &[i0, i1, i2] in &mesh.faces {
        writeln!(writer, "f {} {} {}", i0 + 1, i1 + 1, i2 + 1)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - A `v` or `f` statement is malformed
/// - A face references a vertex that was not declared
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_obj;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("Loaded {} faces", mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let mut mesh = IndexedMesh::new();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let x = parse_coord(tokens.next())?;
                let y = parse_coord(tokens.next())?;
                let z = parse_coord(tokens.next())?;
                mesh.vertices.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let indices: Vec<u32> = tokens
                    .map(|token| parse_face_index(token, mesh.vertices.len()))
                    .collect::<IoResult<_>>()?;

                if indices.len() < 3 {
                    return Err(IoError::invalid_content(format!(
                        "face with {} indices (need at least 3)",
                        indices.len()
                    )));
                }

                // Fan triangulation for polygonal faces.
                for i in 1..indices.len() - 1 {
                    mesh.faces.push([indices[0], indices[i], indices[i + 1]]);
                }
            }
            // Comments, normals, texture coords, groups, materials: ignored.
            _ => {}
        }
    }

    Ok(mesh)
}

fn parse_coord(token: Option<&str>) -> IoResult<f64> {
    let token = token.ok_or_else(|| IoError::invalid_content("vertex with fewer than 3 coordinates"))?;
    Ok(token.parse()?)
}

/// Parse one face index token (`7`, `7/1`, `7//3`, ...) to a 0-based index.
fn parse_face_index(token: &str, vertex_count: usize) -> IoResult<u32> {
    let index_str = token
        .split('/')
        .next()
        .ok_or_else(|| IoError::invalid_content("empty face index"))?;
    let index: usize = index_str.parse()?;

    if index == 0 || index > vertex_count {
        return Err(IoError::invalid_content(format!(
            "face index {index} out of range (1..={vertex_count})"
        )));
    }

    #[allow(clippy::cast_possible_truncation)]
    Ok((index - 1) as u32)
}
