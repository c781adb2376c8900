//! Error types for mesh-from-curves operations.

use thiserror::Error;

/// Result type for mesh-from-curves operations.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors that can occur during curve-to-mesh operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TubeError {
    /// Curve has too few points.
    #[error("curve needs at least {min} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Radius is invalid (zero, negative or not finite).
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// Segments count is too low.
    #[error("segments must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// Degenerate curve segment (coincident or non-finite endpoints).
    #[error("degenerate curve segment at index {index}: endpoints coincide")]
    DegenerateSegment {
        /// Index of the first point of the degenerate segment.
        index: usize,
    },

    /// A rotation was requested for a vector with no usable direction.
    #[error("cannot align a zero-length or non-finite vector")]
    DegenerateVector,

    /// The mesh would reference vertices beyond the `u32` index range.
    #[error("tube with {vertices} vertices at offset {offset} exceeds the u32 index range")]
    IndexOverflow {
        /// Vertices the tube would add.
        vertices: usize,
        /// Index offset requested for the tube.
        offset: usize,
    },
}
