use sweep_core::Vector;

/// The result of an exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The best grid point found.
    pub point: Vector,

    /// Objective value at `point`.
    pub objective: f64,

    /// Position of `point` in the enumeration, starting at 0.
    pub ordinal: usize,

    /// Number of grid points evaluated.
    pub evaluations: usize,
}
