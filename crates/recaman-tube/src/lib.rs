//! Generate a tube model of Recamán's sequence.
//!
//! The pipeline runs in one pass, entirely in memory:
//!
//! 1. [`RecamanSequence`](recaman_curve::RecamanSequence) produces the terms
//! 2. [`recaman_curve`](recaman_curve::recaman_curve) turns every step into a
//!    twisted half-circle and concatenates them
//! 3. [`tube_from_polyline`](mesh_from_curves::tube_from_polyline) sweeps a
//!    ring along the curve, and optionally along the number axis
//! 4. [`save_obj`](mesh_io::save_obj) writes the result
//!
//! # Example
//!
//! ```no_run
//! use recaman_tube::{generate, RecamanConfig};
//!
//! let config = RecamanConfig::default().with_length(30);
//! let summary = generate(&config, "recaman.obj").unwrap();
//! println!("{} vertices, {} faces", summary.vertices, summary.faces);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod error;
mod pipeline;

pub use config::RecamanConfig;
pub use error::{PipelineError, PipelineResult, TubeStage};
pub use pipeline::{build_mesh, generate, MeshSummary};
