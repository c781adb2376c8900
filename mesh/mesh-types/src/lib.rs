//! Core mesh type for the Recamán tube generator.
//!
//! - [`IndexedMesh`] - a triangle mesh with indexed vertices
//!
//! # Indexing
//!
//! Face indices are **1-based**, matching the Wavefront OBJ convention the
//! mesh is ultimately written in. Index `1` refers to `vertices[0]`.
//!
//! Meshes are built in passes (the main tube, then the optional number-axis
//! tube). Each pass is generated with the index offset given by
//! [`IndexedMesh::next_index_offset`], and [`IndexedMesh::append`] concatenates the
//! result without rewriting any index.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, Point3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push([1, 2, 3]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;

pub use mesh::IndexedMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
