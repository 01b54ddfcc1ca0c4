use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when building a [`Compact`] or reading from it.
///
/// [`Compact`]: crate::Compact
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CompactError {
    #[error("start has dimension {start} but end has dimension {end}")]
    BoundsDimension { start: usize, end: usize },

    #[error("a domain needs at least one axis")]
    EmptyDimension,

    #[error("at least 2 points per axis are required, got {points}")]
    Resolution { points: usize },

    #[error("bound on axis {axis} is not finite")]
    NonFiniteBound { axis: usize },

    #[error("start {start} exceeds end {end} on axis {axis}")]
    InvertedBounds { axis: usize, start: f64, end: f64 },

    #[error("cannot allocate grid state for {dim} axes")]
    Allocation { dim: usize },

    #[error("cursor belongs to a different domain")]
    ForeignCursor,

    #[error("cursor is past the last grid point")]
    ExhaustedCursor,

    #[error("output vector has dimension {found}, expected {expected}")]
    OutputDimension { expected: usize, found: usize },
}

impl CompactError {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Allocation { .. } => ErrorKind::AllocationFailure,
            Self::BoundsDimension { .. }
            | Self::EmptyDimension
            | Self::Resolution { .. }
            | Self::NonFiniteBound { .. }
            | Self::InvertedBounds { .. }
            | Self::ForeignCursor
            | Self::ExhaustedCursor
            | Self::OutputDimension { .. } => ErrorKind::InvalidArgument,
        }
    }
}
