//! Generator configuration.

use recaman_curve::ArcConfig;

use crate::error::{PipelineError, PipelineResult};

/// Everything that shapes the generated model.
///
/// Passed explicitly to every stage of the pipeline.
///
/// # Example
///
/// ```
/// use recaman_tube::RecamanConfig;
///
/// let config = RecamanConfig::default()
///     .with_length(20)
///     .with_tube_resolution(12)
///     .with_number_axis(false);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecamanConfig {
    /// Number of sequence terms.
    pub length: usize,
    /// Arc sampling and twist.
    pub arc: ArcConfig,
    /// Radius of the tube following the curve.
    pub tube_radius: f64,
    /// Points per cross-section ring, shared by both tubes.
    pub tube_resolution: usize,
    /// Whether to add the straight reference tube along the number axis.
    pub number_axis: bool,
    /// Radius of the number axis tube.
    pub number_axis_radius: f64,
}

impl Default for RecamanConfig {
    fn default() -> Self {
        Self {
            length: 50,
            arc: ArcConfig::default(),
            tube_radius: 1.0,
            tube_resolution: 8,
            number_axis: true,
            number_axis_radius: 1.0,
        }
    }
}

impl RecamanConfig {
    /// Set the number of sequence terms.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the twist factor.
    #[must_use]
    pub fn with_twist_factor(mut self, twist_factor: f64) -> Self {
        self.arc.twist_factor = twist_factor;
        self
    }

    /// Set the arc sampling resolution.
    #[must_use]
    pub fn with_arc_resolution(mut self, resolution: u32) -> Self {
        self.arc.resolution = resolution;
        self
    }

    /// Set the curve tube radius.
    #[must_use]
    pub fn with_tube_radius(mut self, radius: f64) -> Self {
        self.tube_radius = radius;
        self
    }

    /// Set the number of points per ring.
    #[must_use]
    pub fn with_tube_resolution(mut self, resolution: usize) -> Self {
        self.tube_resolution = resolution;
        self
    }

    /// Enable or disable the number axis tube.
    #[must_use]
    pub fn with_number_axis(mut self, enabled: bool) -> Self {
        self.number_axis = enabled;
        self
    }

    /// Set the number axis tube radius.
    #[must_use]
    pub fn with_number_axis_radius(mut self, radius: f64) -> Self {
        self.number_axis_radius = radius;
        self
    }

    /// Reject values that would make a stage fail or divide by zero.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidArgument`] naming the first bad value.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.length < 1 {
            return Err(PipelineError::invalid_argument(
                "n",
                format!("must be at least 1, got {}", self.length),
            ));
        }
        if self.arc.twist_factor == 0.0 || !self.arc.twist_factor.is_finite() {
            return Err(PipelineError::invalid_argument(
                "twist_factor",
                format!("must be finite and non-zero, got {}", self.arc.twist_factor),
            ));
        }
        if self.arc.resolution < 1 {
            return Err(PipelineError::invalid_argument(
                "arc_resolution",
                format!("must be at least 1, got {}", self.arc.resolution),
            ));
        }
        if self.tube_resolution < 3 {
            return Err(PipelineError::invalid_argument(
                "tube_resolution",
                format!("must be at least 3, got {}", self.tube_resolution),
            ));
        }
        check_radius("tube_radius", self.tube_radius)?;
        if self.number_axis {
            check_radius("number_axis_radius", self.number_axis_radius)?;
        }
        Ok(())
    }
}

fn check_radius(name: &'static str, radius: f64) -> PipelineResult<()> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(PipelineError::invalid_argument(
            name,
            format!("must be positive and finite, got {radius}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_name(config: &RecamanConfig) -> Option<&'static str> {
        match config.validate() {
            Err(PipelineError::InvalidArgument { name, .. }) => Some(name),
            _ => None,
        }
    }

    #[test]
    fn defaults_match_cli() {
        let config = RecamanConfig::default();
        assert_eq!(config.length, 50);
        assert!((config.arc.twist_factor - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.arc.resolution, 10);
        assert!((config.tube_radius - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.tube_resolution, 8);
        assert!(config.number_axis);
        assert!((config.number_axis_radius - 1.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_each_bad_value() {
        let base = RecamanConfig::default();
        assert_eq!(rejected_name(&base.clone().with_length(0)), Some("n"));
        assert_eq!(
            rejected_name(&base.clone().with_twist_factor(0.0)),
            Some("twist_factor")
        );
        assert_eq!(
            rejected_name(&base.clone().with_arc_resolution(0)),
            Some("arc_resolution")
        );
        assert_eq!(
            rejected_name(&base.clone().with_tube_resolution(2)),
            Some("tube_resolution")
        );
        assert_eq!(
            rejected_name(&base.clone().with_tube_radius(-1.0)),
            Some("tube_radius")
        );
        assert_eq!(
            rejected_name(&base.clone().with_number_axis_radius(0.0)),
            Some("number_axis_radius")
        );
    }

    #[test]
    fn axis_radius_ignored_without_axis() {
        let config = RecamanConfig::default()
            .with_number_axis(false)
            .with_number_axis_radius(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_twist_is_allowed() {
        let config = RecamanConfig::default().with_twist_factor(-0.5);
        assert!(config.validate().is_ok());
    }
}
