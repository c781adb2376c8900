//! Sequence → curve → tubes → OBJ.

use std::path::Path;

use mesh_from_curves::{tube_from_polyline, TubeConfig};
use mesh_types::IndexedMesh;
use recaman_curve::{number_axis, recaman_curve, RecamanSequence};
use tracing::{debug, info};

use crate::config::RecamanConfig;
use crate::error::{PipelineError, PipelineResult, TubeStage};

/// Counts describing a generated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSummary {
    /// Vertices written.
    pub vertices: usize,
    /// Triangular faces written.
    pub faces: usize,
}

/// Build the full model in memory.
///
/// The curve tube comes first; when enabled, the number axis tube follows
/// with its indices offset past the curve tube's vertices.
///
/// # Errors
///
/// Returns the first failure, tagged with the stage it came from. Nothing is
/// partially built.
///
/// # Example
///
/// ```
/// use recaman_tube::{build_mesh, RecamanConfig};
///
/// let config = RecamanConfig::default().with_length(3).with_number_axis(false);
/// let mesh = build_mesh(&config).unwrap();
///
/// // Steps of size 1 and 2 at 10 samples per unit, 8 points per ring
/// assert_eq!(mesh.vertex_count(), 30 * 8);
/// ```
pub fn build_mesh(config: &RecamanConfig) -> PipelineResult<IndexedMesh> {
    config.validate()?;

    let sequence = RecamanSequence::generate(config.length).map_err(PipelineError::Sequence)?;
    debug!(
        terms = sequence.len(),
        max = sequence.max(),
        "Generated sequence"
    );

    let curve = recaman_curve(&sequence, &config.arc).map_err(PipelineError::Curve)?;

    let tube = TubeConfig::default()
        .with_radius(config.tube_radius)
        .with_segments(config.tube_resolution);
    let mut mesh = tube_from_polyline(&curve, &tube).map_err(|error| PipelineError::Tube {
        stage: TubeStage::Curve,
        error,
    })?;

    if config.number_axis {
        let axis = number_axis(&sequence);
        let axis_tube = tube
            .with_radius(config.number_axis_radius)
            .with_index_offset(mesh.next_index_offset());
        let axis_mesh = tube_from_polyline(&axis, &axis_tube).map_err(|error| {
            PipelineError::Tube {
                stage: TubeStage::NumberAxis,
                error,
            }
        })?;
        mesh.append(axis_mesh);
    }

    info!(
        terms = sequence.len(),
        curve_points = curve.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Built Recamán tube mesh"
    );

    Ok(mesh)
}

/// Build the model and write it to `path` as OBJ.
///
/// The file is only touched once the whole mesh exists, and is replaced
/// atomically.
///
/// # Errors
///
/// Returns any [`build_mesh`] error, or [`PipelineError::Write`] if the file
/// cannot be written.
pub fn generate(config: &RecamanConfig, path: impl AsRef<Path>) -> PipelineResult<MeshSummary> {
    let path = path.as_ref();
    let mesh = build_mesh(config)?;

    mesh_io::save_obj(&mesh, path).map_err(|error| PipelineError::Write {
        path: path.to_path_buf(),
        error,
    })?;

    info!(path = %path.display(), "Wrote mesh");

    Ok(MeshSummary {
        vertices: mesh.vertex_count(),
        faces: mesh.face_count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_from_curves::TubeError;

    #[test]
    fn axis_is_appended_after_curve() {
        let config = RecamanConfig::default().with_length(4);
        let mesh = build_mesh(&config).expect("mesh");

        // 0 → 1 → 3 → 6: 60 curve points, plus a 2-point axis
        assert_eq!(mesh.vertex_count(), (60 + 2) * 8);
        assert_eq!(mesh.face_count(), 2 * 59 * 8 + 2 * 8);

        let axis_faces = &mesh.faces[2 * 59 * 8..];
        let axis_min = axis_faces.iter().flatten().min().copied();
        assert_eq!(axis_min, Some(60 * 8 + 1));
        assert_eq!(mesh.max_face_index(), Some(62 * 8));
    }

    #[test]
    fn axis_vertices_span_sequence() {
        let config = RecamanConfig::default()
            .with_length(8)
            .with_number_axis_radius(0.25);
        let mesh = build_mesh(&config).expect("mesh");

        let axis = &mesh.vertices[mesh.vertex_count() - 16..];
        for v in &axis[..8] {
            assert!(v.z.abs() < 1e-12);
            assert!(((v.x * v.x + v.y * v.y).sqrt() - 0.25).abs() < 1e-12);
        }
        for v in &axis[8..] {
            assert!((v.z - 20.0).abs() < 1e-12);
        }
    }

    #[test]
    fn single_term_has_no_curve() {
        let config = RecamanConfig::default().with_length(1);
        let err = build_mesh(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Tube {
                stage: TubeStage::Curve,
                error: TubeError::TooFewPoints { min: 2, actual: 0 },
            }
        ));
    }

    #[test]
    fn invalid_config_fails_before_any_stage() {
        let config = RecamanConfig::default().with_twist_factor(0.0);
        assert!(matches!(
            build_mesh(&config),
            Err(PipelineError::InvalidArgument {
                name: "twist_factor",
                ..
            })
        ));
    }
}
