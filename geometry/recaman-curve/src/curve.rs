//! Assembly of the full Recamán curve.

use nalgebra::Point3;
use tracing::debug;

use crate::arc::{interpolate_arc, start_twist, ArcConfig};
use crate::error::CurveResult;
use crate::sequence::RecamanSequence;

/// Build the polyline traced by `sequence`: one arc per step, concatenated.
///
/// # Errors
///
/// Returns an error if `config` fails [`ArcConfig::validate`].
///
/// # Example
///
/// ```
/// use recaman_curve::{recaman_curve, ArcConfig, RecamanSequence};
///
/// let seq = RecamanSequence::generate(4).unwrap(); // 0, 1, 3, 6
/// let curve = recaman_curve(&seq, &ArcConfig::default()).unwrap();
/// assert_eq!(curve.len(), 10 * (1 + 2 + 3));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn recaman_curve(
    sequence: &RecamanSequence,
    config: &ArcConfig,
) -> CurveResult<Vec<Point3<f64>>> {
    config.validate()?;

    let mut points = Vec::new();
    for (idx, (a0, a1)) in sequence.steps().enumerate() {
        let segment = idx + 1;
        let twist = start_twist(segment, config.twist_factor);
        points.extend(interpolate_arc(a0 as f64, a1 as f64, twist, config));
    }

    debug!(
        terms = sequence.len(),
        points = points.len(),
        "Interpolated sequence arcs"
    );

    Ok(points)
}

/// Endpoints of the straight reference axis spanning the sequence's values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn number_axis(sequence: &RecamanSequence) -> [Point3<f64>; 2] {
    [
        Point3::new(0.0, 0.0, sequence.min() as f64),
        Point3::new(0.0, 0.0, sequence.max() as f64),
    ]
}
