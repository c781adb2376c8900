//! Indexed triangle mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f64>>` - Vertex positions
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as **1-based** vertex indices
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Point3};
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mesh = IndexedMesh::from_parts(vertices, vec![[1, 2, 3]]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.max_face_index(), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as 1-based indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::IndexedMesh;
    ///
    /// let mesh = IndexedMesh::with_capacity(1000, 2000);
    /// assert!(mesh.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and 1-based faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangular faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Largest index referenced by any face, or `None` for a faceless mesh.
    #[must_use]
    pub fn max_face_index(&self) -> Option<u32> {
        self.faces.iter().flatten().copied().max()
    }

    /// Index offset for the next extrusion pass appended to this mesh.
    ///
    /// Faces of that pass must skip every vertex already present.
    #[inline]
    #[must_use]
    pub fn next_index_offset(&self) -> usize {
        self.vertices.len()
    }

    /// Append another mesh pass to this one.
    ///
    /// `other`'s faces are taken as-is: the pass must have been generated with
    /// an index offset of [`next_index_offset`](Self::next_index_offset).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Point3};
    ///
    /// let mut mesh = IndexedMesh::from_parts(
    ///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
    ///     vec![[1, 2, 3]],
    /// );
    /// let pass = IndexedMesh::from_parts(
    ///     vec![Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 1.0), Point3::new(0.0, 1.0, 1.0)],
    ///     vec![[4, 5, 6]],
    /// );
    /// mesh.append(pass);
    /// assert_eq!(mesh.vertex_count(), 6);
    /// assert_eq!(mesh.faces[1], [4, 5, 6]);
    /// ```
    pub fn append(&mut self, other: Self) {
        self.vertices.extend(other.vertices);
        self.faces.extend(other.faces);
    }
}
