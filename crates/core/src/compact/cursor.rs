use thiserror::Error;

use super::Compact;

/// Signals that a [`Cursor`] has stepped past the last grid point.
///
/// This is the normal end of an enumeration, not a failure of the domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no more grid points")]
pub struct NoMoreElements;

/// Whether a cursor still denotes a grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// The multi-index denotes a grid point.
    Active,

    /// The grid has been exhausted. Terminal.
    Exhausted,
}

/// A single-pass cursor over the grid of a [`Compact`].
///
/// The cursor holds one multi-index entry per axis and borrows its domain,
/// which owns the per-axis step counts. Stepping increments the last axis
/// first and carries toward axis 0, so the grid is visited in row-major
/// order. Dropping the cursor releases it.
#[derive(Debug)]
pub struct Cursor<'a> {
    compact: &'a Compact,
    index: Box<[usize]>,
    state: CursorState,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(compact: &'a Compact, index: Box<[usize]>, state: CursorState) -> Self {
        Self {
            compact,
            index,
            state,
        }
    }

    /// Advances to the next grid point.
    ///
    /// # Errors
    ///
    /// Returns [`NoMoreElements`] once the carry propagates past axis 0, and
    /// on every call after that.
    pub fn do_step(&mut self) -> Result<(), NoMoreElements> {
        if self.state == CursorState::Exhausted {
            return Err(NoMoreElements);
        }

        let steps = self.compact.steps();
        for axis in (0..self.index.len()).rev() {
            self.index[axis] += 1;
            if self.index[axis] < steps[axis] {
                return Ok(());
            }
            self.index[axis] = 0;
        }

        // Park on the one-past-last multi-index, same as `Compact::end_cursor`.
        self.index[0] = steps[0];
        self.state = CursorState::Exhausted;
        Err(NoMoreElements)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Returns true once the grid has been exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Returns the current multi-index.
    #[must_use]
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub(super) fn compact(&self) -> &'a Compact {
        self.compact
    }
}
