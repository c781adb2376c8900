//! Tube mesh generation from curves.
//!
//! Sweeps a circular cross-section along a polyline, one ring per curve point.

use mesh_types::IndexedMesh;
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{TubeError, TubeResult};
use crate::rotation::align;

/// Configuration for tube generation.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeConfig {
    /// Radius of the tube.
    pub radius: f64,
    /// Number of points around each ring.
    pub segments: usize,
    /// Number of vertices that precede this tube in the final mesh.
    ///
    /// Face indices are shifted by this amount so the tube can be appended to
    /// an existing mesh.
    pub index_offset: usize,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 8,
            index_offset: 0,
        }
    }
}

impl TubeConfig {
    /// Create a tube config with the given radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Create a tube config with the given number of ring points.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Create a tube config whose face indices start after `offset` vertices.
    #[must_use]
    pub fn with_index_offset(mut self, offset: usize) -> Self {
        self.index_offset = offset;
        self
    }
}

/// Points of a circle of `radius` in the XY plane, centred on the origin.
///
/// Point `j` sits at angle `2πj / segments`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circle_xy(radius: f64, segments: usize) -> Vec<Vector3<f64>> {
    (0..segments)
        .map(|j| {
            let angle = j as f64 / segments as f64 * 2.0 * std::f64::consts::PI;
            Vector3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

/// Generate a tube mesh around a polyline curve.
///
/// Each ring is the XY circle carried onto the plane perpendicular to the
/// tangent of the segment that starts at its curve point; the last point
/// reuses the last segment's orientation. The tube is open at both ends.
///
/// # Returns
///
/// A mesh with `points.len() * segments` vertices and
/// `2 * (points.len() - 1) * segments` faces, indexed from
/// `1 + config.index_offset`.
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than 2 points are provided
/// - Radius is not positive
/// - Fewer than 3 segments are requested
/// - Two consecutive points coincide
/// - The indices would not fit in `u32`
///
/// # Example
///
/// ```
/// use mesh_from_curves::{tube_from_polyline, TubeConfig};
/// use nalgebra::Point3;
///
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 10.0),
/// ];
///
/// let config = TubeConfig::default().with_radius(0.5);
/// let mesh = tube_from_polyline(&points, &config).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 2 * 8);
/// assert_eq!(mesh.face_count(), 2 * 8);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn tube_from_polyline(points: &[Point3<f64>], config: &TubeConfig) -> TubeResult<IndexedMesh> {
    // Validate inputs
    if points.len() < 2 {
        return Err(TubeError::TooFewPoints {
            min: 2,
            actual: points.len(),
        });
    }

    if config.radius <= 0.0 || !config.radius.is_finite() {
        return Err(TubeError::InvalidRadius(config.radius));
    }

    if config.segments < 3 {
        return Err(TubeError::TooFewSegments {
            min: 3,
            actual: config.segments,
        });
    }

    let n_rings = points.len();
    let n_segs = config.segments;
    let n_vertices = n_rings * n_segs;
    let index_base = index_base(n_vertices, config.index_offset)?;

    let circle = circle_xy(config.radius, n_segs);
    let mut mesh = IndexedMesh::with_capacity(n_vertices, 2 * (n_rings - 1) * n_segs);

    // Rings at every point but the last, oriented by the outgoing segment
    let mut rotation = None;
    for (index, pair) in points.windows(2).enumerate() {
        let tangent = segment_tangent(&pair[0], &pair[1], index)?;
        let r = align(&tangent, &Vector3::z())?.transpose();
        push_ring(&mut mesh, &pair[0], &circle, &r);
        rotation = Some(r);
    }

    // Final ring shares the last segment's orientation
    if let (Some(r), Some(last)) = (rotation, points.last()) {
        push_ring(&mut mesh, last, &circle, &r);
    }

    // Every index fits in u32 once index_base has succeeded
    let n = n_segs as u32;
    for i in 0..(n_rings - 1) as u32 {
        for j in 0..n {
            let unravel = |di: u32, dj: u32| (i + di) * n + (j + dj) % n + index_base;
            let a = unravel(0, 0);
            let b = unravel(1, 0);
            let c = unravel(1, 1);
            let d = unravel(0, 1);
            mesh.faces.push([a, c, b]);
            mesh.faces.push([a, d, c]);
        }
    }

    debug!(
        rings = n_rings,
        segments = n_segs,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        offset = config.index_offset,
        "Built tube mesh"
    );

    Ok(mesh)
}

/// First 1-based index of a tube with `n_vertices` vertices placed after
/// `offset` others.
fn index_base(n_vertices: usize, offset: usize) -> TubeResult<u32> {
    let overflow = TubeError::IndexOverflow {
        vertices: n_vertices,
        offset,
    };
    let last = offset
        .checked_add(n_vertices)
        .ok_or_else(|| overflow.clone())?;
    if u32::try_from(last).is_err() {
        return Err(overflow);
    }
    u32::try_from(offset + 1).map_err(|_| overflow)
}

/// Unit direction from `start` to `end`.
fn segment_tangent(
    start: &Point3<f64>,
    end: &Point3<f64>,
    index: usize,
) -> TubeResult<Vector3<f64>> {
    let delta = *end - *start;
    let length = delta.norm();
    if !length.is_finite() || length <= f64::EPSILON {
        return Err(TubeError::DegenerateSegment { index });
    }
    Ok(delta / length)
}

fn push_ring(
    mesh: &mut IndexedMesh,
    center: &Point3<f64>,
    circle: &[Vector3<f64>],
    orientation: &nalgebra::Matrix3<f64>,
) {
    mesh.vertices
        .extend(circle.iter().map(|c| *center + *orientation * c));
}
