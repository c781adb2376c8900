//! Error types for sequence and curve construction.

use thiserror::Error;

/// Result type for recaman-curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building the Recamán curve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// The requested sequence length is zero.
    #[error("sequence length must be at least 1, got 0")]
    EmptySequence,

    /// A term exceeded the representable range.
    #[error("sequence term overflowed at step {step}")]
    TermOverflow {
        /// Step index at which the addition overflowed.
        step: u64,
    },

    /// Twist factor is zero or not finite.
    ///
    /// The odd-segment start twist is `π / twist_factor`, so zero is rejected
    /// up front.
    #[error("invalid twist factor: {0} (must be finite and non-zero)")]
    InvalidTwistFactor(f64),

    /// Arc resolution is zero.
    #[error("arc resolution must be at least 1, got {0}")]
    InvalidResolution(u32),
}
