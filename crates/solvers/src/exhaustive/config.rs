use thiserror::Error;

use sweep_core::{DEFAULT_POINTS_PER_AXIS, ErrorKind};

/// Configuration for the exhaustive solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    points_per_axis: usize,
}

/// Errors that can occur when validating an exhaustive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("points_per_axis must be at least 2, got {0}")]
    PointsPerAxis(usize),
}

impl ConfigError {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            points_per_axis: DEFAULT_POINTS_PER_AXIS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated grid resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if `points_per_axis < 2`, since a single point cannot
    /// span both bounds of an axis.
    pub fn new(points_per_axis: usize) -> Result<Self, ConfigError> {
        if points_per_axis < 2 {
            return Err(ConfigError::PointsPerAxis(points_per_axis));
        }
        Ok(Self { points_per_axis })
    }

    /// Returns the number of grid points on each non-degenerate axis.
    #[must_use]
    pub fn points_per_axis(&self) -> usize {
        self.points_per_axis
    }
}
