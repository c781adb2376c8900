//! Twisted half-circle arcs between consecutive sequence terms.
//!
//! Sequence values live on the Z axis. Each step of the sequence becomes a
//! half-circle whose diameter spans the two values; the off-axis offset of the
//! half-circle is spun around Z as a function of position, which gives the
//! braided look of the final model.

use nalgebra::Point3;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Sampling and twist parameters shared by every arc of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcConfig {
    /// Angular speed of the twist around the number axis, in radians per unit
    /// of number-axis position.
    pub twist_factor: f64,
    /// Samples per unit of number-axis distance covered by an arc.
    pub resolution: u32,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            twist_factor: 0.2,
            resolution: 10,
        }
    }
}

impl ArcConfig {
    /// Set the twist factor.
    #[must_use]
    pub fn with_twist_factor(mut self, twist_factor: f64) -> Self {
        self.twist_factor = twist_factor;
        self
    }

    /// Set the arc sampling resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Check that the parameters describe a well-defined curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTwistFactor`] for a zero or non-finite
    /// twist factor and [`CurveError::InvalidResolution`] for a zero
    /// resolution.
    pub fn validate(&self) -> CurveResult<()> {
        if self.twist_factor == 0.0 || !self.twist_factor.is_finite() {
            return Err(CurveError::InvalidTwistFactor(self.twist_factor));
        }
        if self.resolution == 0 {
            return Err(CurveError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

/// Twist phase at which segment `segment` starts.
///
/// Segment `i` joins `a(i-1)` to `a(i)`. Even segments start at phase 0, odd
/// ones at `π / twist_factor`, so consecutive arcs leave the axis on opposite
/// sides.
#[inline]
#[must_use]
pub fn start_twist(segment: usize, twist_factor: f64) -> f64 {
    if segment % 2 == 0 {
        0.0
    } else {
        PI / twist_factor
    }
}

/// Sample the twisted half-circle from `a0` to `a1`.
///
/// Returns `floor(resolution * |a1 - a0|)` points ordered from `a0` towards
/// `a1`. The endpoint at `a1` itself is excluded; it is the first sample of the
/// next arc. Equal endpoints give an empty arc.
///
/// # Example
///
/// ```
/// use recaman_curve::{interpolate_arc, ArcConfig};
///
/// let config = ArcConfig::default().with_resolution(4);
/// let points = interpolate_arc(1.0, 3.0, 0.0, &config);
/// assert_eq!(points.len(), 8);
/// assert!((points[0].z - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn interpolate_arc(a0: f64, a1: f64, start_twist: f64, config: &ArcConfig) -> Vec<Point3<f64>> {
    let center = 0.5 * (a0 + a1);
    let radius = 0.5 * (a1 - a0).abs();
    let k = (2.0 * radius * f64::from(config.resolution)).floor() as usize;
    if k == 0 {
        return Vec::new();
    }

    let descending = a0 > a1;
    let kf = k as f64;
    let step = (a1 - a0) / kf;

    (0..k)
        .map(|i| {
            let t = if descending { k - i } else { i };
            let angle = PI * (1.0 - t as f64 / kf);

            let z = radius * angle.cos() + center;
            let h = (radius * angle.sin()).abs();

            let twist = (step * i as f64 + a0 + start_twist) * config.twist_factor;
            Point3::new(h * twist.cos(), h * twist.sin(), z)
        })
        .collect()
}
