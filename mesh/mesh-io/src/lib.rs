//! Wavefront OBJ reading and writing for region meshes.
//!
//! Region surfaces are exchanged as plain ASCII OBJ files, one mesh per
//! file. Only geometry is stored (`v` and `f` statements); coordinates are
//! written with shortest round-trip float formatting so that saving and
//! reloading a mesh reproduces it exactly.
//!
//! # Example
//!
//! ```no_run
//! use mesh_types::unit_cube;
//! use mesh_io::{load_obj, save_obj};
//!
//! let cube = unit_cube();
//! save_obj(&cube, "cube.obj").unwrap();
//! assert_eq!(load_obj("cube.obj").unwrap(), cube);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, save_obj};
