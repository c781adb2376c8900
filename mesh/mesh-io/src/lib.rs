//! Mesh file I/O.
//!
//! Reads and writes [`IndexedMesh`](mesh_types::IndexedMesh) as **Wavefront
//! OBJ** text: `v x y z` lines followed by `f a b c` lines with 1-based
//! indices.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_obj};
//!
//! let mesh = load_obj("model.obj").unwrap();
//! save_obj(&mesh, "copy.obj").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, read_obj, save_obj, write_obj};
