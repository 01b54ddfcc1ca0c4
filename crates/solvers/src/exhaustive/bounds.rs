use thiserror::Error;

use sweep_core::{ErrorKind, Vector};

/// Number of `;`-terminated segments in a bounds string: `start` then `end`.
pub const SOLVER_PARAMS_COUNT: usize = 2;

/// Errors that can occur when parsing a bounds string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBoundsError {
    #[error("expected {expected} `;`-terminated segments, found {found}")]
    SegmentCount { expected: usize, found: usize },

    #[error("segment {segment} has {found} coordinates, expected {expected}")]
    CoordinateCount {
        segment: usize,
        expected: usize,
        found: usize,
    },

    #[error("segment {segment}: cannot parse `{text}` as a number")]
    Coordinate { segment: usize, text: String },
}

impl ParseBoundsError {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CoordinateCount { .. } => ErrorKind::DimensionMismatch,
            Self::SegmentCount { .. } | Self::Coordinate { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Parses `"x1,...,xn;y1,...,yn;"` into the `(start, end)` corners of a box.
///
/// Segments are separated by `;` and each must be terminated by one,
/// coordinates by `,`. Whitespace around a coordinate is ignored, and so is
/// anything after the last `;`. Bound ordering is not checked here; that
/// happens when the domain is built.
///
/// # Errors
///
/// Returns an error if there are not exactly [`SOLVER_PARAMS_COUNT`]
/// terminated segments, if a segment does not have `dim` coordinates, or if
/// a coordinate is not a number.
pub fn parse_bounds(text: &str, dim: usize) -> Result<(Vector, Vector), ParseBoundsError> {
    let segments: Vec<&str> = text.split(';').collect();
    let terminated = segments.len() - 1;
    if terminated != SOLVER_PARAMS_COUNT {
        return Err(ParseBoundsError::SegmentCount {
            expected: SOLVER_PARAMS_COUNT,
            found: terminated,
        });
    }

    let start = parse_segment(0, segments[0], dim)?;
    let end = parse_segment(1, segments[1], dim)?;
    Ok((start, end))
}

fn parse_segment(segment: usize, text: &str, dim: usize) -> Result<Vector, ParseBoundsError> {
    let items: Vec<&str> = text.split(',').collect();
    if items.len() != dim {
        return Err(ParseBoundsError::CoordinateCount {
            segment,
            expected: dim,
            found: items.len(),
        });
    }

    items
        .iter()
        .map(|item| {
            item.trim()
                .parse::<f64>()
                .map_err(|_| ParseBoundsError::Coordinate {
                    segment,
                    text: (*item).to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()
        .map(Vector::from)
}
