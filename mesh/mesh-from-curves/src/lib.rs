//! Generate triangle meshes from curves.
//!
//! Sweeps a circular cross-section along a polyline, producing an open
//! generalized cylinder:
//!
//! - [`align`] - rotation taking a direction onto another, with an explicit
//!   half-turn for opposite directions
//! - [`circle_xy`] - the cross-section template
//! - [`tube_from_polyline`] - one ring per curve point, two triangles per quad
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_curves::{tube_from_polyline, TubeConfig};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(3.0, 0.0, 8.0),
//! ];
//!
//! let config = TubeConfig::default()
//!     .with_radius(0.5)
//!     .with_segments(16);
//!
//! let mesh = tube_from_polyline(&points, &config).unwrap();
//! assert_eq!(mesh.vertex_count(), 3 * 16);
//! assert_eq!(mesh.face_count(), 2 * 2 * 16);
//! ```
//!
//! # Appending Tubes
//!
//! Faces are 1-based. A second tube destined for the same mesh is built with
//! [`TubeConfig::with_index_offset`] set to the vertex count so far:
//!
//! ```
//! use mesh_from_curves::{tube_from_polyline, TubeConfig};
//! use nalgebra::Point3;
//!
//! let a = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)];
//! let b = [Point3::new(5.0, 0.0, 0.0), Point3::new(5.0, 0.0, 1.0)];
//!
//! let mut mesh = tube_from_polyline(&a, &TubeConfig::default()).unwrap();
//! let config = TubeConfig::default().with_index_offset(mesh.vertex_count());
//! mesh.append(tube_from_polyline(&b, &config).unwrap());
//!
//! assert_eq!(mesh.max_face_index(), Some(32));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod rotation;
mod tube;

pub use error::{TubeError, TubeResult};
pub use rotation::{align, ANTIPARALLEL_TOLERANCE};
pub use tube::{circle_xy, tube_from_polyline, TubeConfig};
