//! Closed axis-aligned boxes and the grids used to enumerate them.
//!
//! A [`Compact`] is the box `[start, end]` in `R^n`. Each axis is split into a
//! fixed number of equally spaced grid points that include both bounds, and a
//! [`Cursor`] walks those points in row-major order without materializing the
//! grid.
//!
//! # Discretization
//!
//! Every non-degenerate axis gets `points_per_axis` grid points; an axis with
//! `start[i] == end[i]` gets exactly one. A box with no degenerate axis
//! therefore holds `points_per_axis^n` points, and a zero-volume box holds one.

mod cursor;
mod error;

pub use cursor::{Cursor, CursorState, NoMoreElements};
pub use error::CompactError;

use std::iter::FusedIterator;

use crate::Vector;

/// Grid points per axis used when no resolution is configured.
///
/// 101 points split each axis into 100 equal intervals.
pub const DEFAULT_POINTS_PER_AXIS: usize = 101;

/// A closed axis-aligned box with a discretized grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Compact {
    start: Vector,
    end: Vector,
    steps: Box<[usize]>,
}

impl Compact {
    /// Creates the box `[start, end]` with `points_per_axis` grid points on
    /// each non-degenerate axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds differ in dimension, have no axes, are
    /// non-finite or inverted on some axis, if `points_per_axis < 2`, or if
    /// the step table cannot be allocated.
    pub fn new(start: Vector, end: Vector, points_per_axis: usize) -> Result<Self, CompactError> {
        if start.dim() != end.dim() {
            return Err(CompactError::BoundsDimension {
                start: start.dim(),
                end: end.dim(),
            });
        }
        if start.dim() == 0 {
            return Err(CompactError::EmptyDimension);
        }
        if points_per_axis < 2 {
            return Err(CompactError::Resolution {
                points: points_per_axis,
            });
        }

        let dim = start.dim();
        let mut steps = Vec::new();
        steps
            .try_reserve_exact(dim)
            .map_err(|_| CompactError::Allocation { dim })?;

        for (axis, (&lo, &hi)) in start.iter().zip(end.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(CompactError::NonFiniteBound { axis });
            }
            if lo > hi {
                return Err(CompactError::InvertedBounds {
                    axis,
                    start: lo,
                    end: hi,
                });
            }
            #[allow(clippy::float_cmp)]
            let degenerate = lo == hi;
            steps.push(if degenerate { 1 } else { points_per_axis });
        }

        Ok(Self {
            start,
            end,
            steps: steps.into_boxed_slice(),
        })
    }

    /// Returns the lower corner of the box.
    #[must_use]
    pub fn start(&self) -> &Vector {
        &self.start
    }

    /// Returns the upper corner of the box.
    #[must_use]
    pub fn end(&self) -> &Vector {
        &self.end
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.start.dim()
    }

    /// Returns the number of grid points on each axis.
    #[must_use]
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }

    /// Returns the total number of grid points, or `None` if it overflows `usize`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.steps
            .iter()
            .try_fold(1_usize, |acc, &n| acc.checked_mul(n))
    }

    /// Returns true if `point` has this box's dimension and lies inside it.
    #[must_use]
    pub fn contains(&self, point: &Vector) -> bool {
        point.dim() == self.dim()
            && point
                .iter()
                .zip(self.start.iter().zip(self.end.iter()))
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    /// Returns a cursor on the first grid point, which is `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CompactError::Allocation`] if the multi-index cannot be allocated.
    pub fn begin(&self) -> Result<Cursor<'_>, CompactError> {
        let index = self.zero_index()?;
        Ok(Cursor::new(self, index, CursorState::Active))
    }

    /// Returns an exhausted cursor on the notional one-past-last grid point.
    ///
    /// The cursor is never compared against during iteration; exhaustion is
    /// reported by [`Cursor::do_step`] itself.
    ///
    /// # Errors
    ///
    /// Returns [`CompactError::Allocation`] if the multi-index cannot be allocated.
    pub fn end_cursor(&self) -> Result<Cursor<'_>, CompactError> {
        let mut index = self.zero_index()?;
        index[0] = self.steps[0];
        Ok(Cursor::new(self, index, CursorState::Exhausted))
    }

    /// Writes the grid point denoted by `cursor` into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `cursor` was created by a different domain, is
    /// exhausted, or if `out` does not have this domain's dimension.
    pub fn point_at(&self, cursor: &Cursor<'_>, out: &mut Vector) -> Result<(), CompactError> {
        if !std::ptr::eq(cursor.compact(), self) {
            return Err(CompactError::ForeignCursor);
        }
        if cursor.is_exhausted() {
            return Err(CompactError::ExhaustedCursor);
        }
        if out.dim() != self.dim() {
            return Err(CompactError::OutputDimension {
                expected: self.dim(),
                found: out.dim(),
            });
        }

        let axes = self
            .start
            .iter()
            .zip(self.end.iter())
            .zip(self.steps.iter())
            .zip(cursor.index());

        for (x, (((&lo, &hi), &steps), &k)) in out.as_mut_slice().iter_mut().zip(axes) {
            *x = grid_coordinate(lo, hi, k, steps);
        }
        Ok(())
    }

    /// Returns an iterator that yields every grid point as an owned vector.
    ///
    /// # Errors
    ///
    /// Returns [`CompactError::Allocation`] if the cursor cannot be allocated.
    pub fn points(&self) -> Result<Points<'_>, CompactError> {
        Ok(Points {
            cursor: self.begin()?,
            first: true,
        })
    }

    fn zero_index(&self) -> Result<Box<[usize]>, CompactError> {
        let dim = self.dim();
        let mut index = Vec::new();
        index
            .try_reserve_exact(dim)
            .map_err(|_| CompactError::Allocation { dim })?;
        index.resize(dim, 0);
        Ok(index.into_boxed_slice())
    }
}

/// Maps grid index `k` of `steps` points onto `[lo, hi]`.
///
/// The last index lands exactly on `hi`, and every result stays inside the
/// bounds even when `hi - lo` overflows.
#[allow(clippy::cast_precision_loss)]
fn grid_coordinate(lo: f64, hi: f64, k: usize, steps: usize) -> f64 {
    if k == 0 {
        return lo;
    }
    if k + 1 >= steps {
        return hi;
    }

    let t = (k as f64) / ((steps - 1) as f64);
    let span = hi - lo;
    let x = if span.is_finite() {
        lo + span * t
    } else {
        lo * (1.0 - t) + hi * t
    };
    x.clamp(lo, hi)
}

/// Iterator over the grid points of a [`Compact`], created by [`Compact::points`].
#[derive(Debug)]
pub struct Points<'a> {
    cursor: Cursor<'a>,
    first: bool,
}

impl Iterator for Points<'_> {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.first {
            self.first = false;
        } else {
            self.cursor.do_step().ok()?;
        }
        let compact = self.cursor.compact();
        let mut point = Vector::zeros(compact.dim()).ok()?;
        compact.point_at(&self.cursor, &mut point).ok()?;
        Some(point)
    }
}

impl FusedIterator for Points<'_> {}
