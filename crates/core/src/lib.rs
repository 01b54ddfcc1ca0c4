//! Core traits and types for the sweep framework.
//!
//! This crate defines the shared abstractions that the exhaustive solver and
//! observers build on:
//!
//! - [`Vector`] — a fixed-dimension coordinate tuple
//! - [`Compact`] — a closed axis-aligned box with a discretized grid
//! - [`Cursor`] — a single-pass cursor over the grid of a [`Compact`]
//! - [`Problem`] — an objective evaluated at a point with fixed parameters
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ErrorKind`] — the error categories shared by every crate in the workspace

mod compact;
mod error;
mod observer;
mod problem;
mod vector;

pub use compact::{
    Compact, CompactError, Cursor, CursorState, DEFAULT_POINTS_PER_AXIS, NoMoreElements, Points,
};
pub use error::ErrorKind;
pub use observer::Observer;
pub use problem::Problem;
pub use vector::{Vector, VectorError};
