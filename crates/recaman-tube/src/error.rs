//! Pipeline errors, each naming the stage that failed.

use std::fmt;
use std::path::PathBuf;

use mesh_from_curves::TubeError;
use mesh_io::IoError;
use recaman_curve::CurveError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Which extrusion pass failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TubeStage {
    /// The tube following the sequence curve.
    Curve,
    /// The straight reference tube along the number axis.
    NumberAxis,
}

impl fmt::Display for TubeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve => f.write_str("curve tube"),
            Self::NumberAxis => f.write_str("number axis tube"),
        }
    }
}

/// Errors that abort mesh generation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A configuration value is out of range.
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Sequence generation failed.
    #[error("sequence generation failed: {0}")]
    Sequence(CurveError),

    /// Arc interpolation failed.
    #[error("arc interpolation failed: {0}")]
    Curve(CurveError),

    /// Tube extrusion failed.
    #[error("{stage} extrusion failed: {error}")]
    Tube {
        /// The pass that failed.
        stage: TubeStage,
        /// Underlying extrusion error.
        error: TubeError,
    },

    /// Writing the mesh file failed.
    #[error("writing {} failed: {error}", .path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        error: IoError,
    },
}

impl PipelineError {
    /// Create an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
