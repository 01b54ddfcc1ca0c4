use std::error::Error as StdError;

use sweep_core::{CompactError, ErrorKind, VectorError};

use super::ParseBoundsError;

/// Errors that can occur during an exhaustive search or session call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no problem is bound to the solver")]
    NoProblem,

    #[error("objective parameters are not set")]
    MissingParams,

    #[error("{what} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("no solution is available until a search succeeds")]
    NotReady,

    #[error("every grid point was rejected by the observer")]
    NoAcceptedPoint,

    #[error(transparent)]
    Domain(#[from] CompactError),

    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Bounds(#[from] ParseBoundsError),

    /// The goal function failed; the original error is the source.
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoProblem | Self::MissingParams => ErrorKind::InvalidArgument,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::NotReady | Self::NoAcceptedPoint => ErrorKind::NotReady,
            Self::Domain(err) => err.kind(),
            Self::Vector(err) => err.kind(),
            Self::Bounds(err) => err.kind(),
            Self::Problem(_) => ErrorKind::Problem,
        }
    }
}
