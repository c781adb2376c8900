//! Recamán's sequence and the 3D curve that visualises it.
//!
//! The sequence values are placed on the Z axis (the "number axis"). Every
//! step `a(i-1) → a(i)` becomes a half-circle whose diameter spans the two
//! values, twisted around the axis so the arcs braid:
//!
//! - [`RecamanSequence`] - the integer sequence itself
//! - [`interpolate_arc`] - one sampled, twisted half-circle
//! - [`recaman_curve`] - all arcs concatenated into one polyline
//! - [`number_axis`] - the straight reference axis spanning the sequence
//!
//! # Example
//!
//! ```
//! use recaman_curve::{recaman_curve, ArcConfig, RecamanSequence};
//!
//! let seq = RecamanSequence::generate(10).unwrap();
//! let curve = recaman_curve(&seq, &ArcConfig::default()).unwrap();
//! assert!(curve.len() > 2);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`ArcConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod arc;
mod curve;
mod error;
mod sequence;

pub use arc::{interpolate_arc, start_twist, ArcConfig};
pub use curve::{number_axis, recaman_curve};
pub use error::{CurveError, CurveResult};
pub use sequence::RecamanSequence;

pub use nalgebra::Point3;
