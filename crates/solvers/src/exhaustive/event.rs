use sweep_core::Vector;

/// Event emitted after each successful evaluation of a grid point.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of the point in the enumeration, starting at 0.
    pub ordinal: usize,

    /// The evaluated grid point.
    pub point: &'a Vector,

    /// The objective value at `point`.
    pub objective: f64,

    /// Objective of the best point accepted so far, before this one.
    ///
    /// `None` until a point has been accepted.
    pub best: Option<f64>,
}
