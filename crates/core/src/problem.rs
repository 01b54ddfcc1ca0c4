use crate::Vector;

/// Defines a minimization problem over `args_dim` solver variables.
///
/// A problem declares how many arguments and fixed parameters its goal
/// function takes, then scores a point. Solvers search for the point with the
/// lowest score; lower is better.
///
/// The trait is object safe, so a session can bind `dyn Problem<Error = E>`.
pub trait Problem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of coordinates in a point.
    fn args_dim(&self) -> usize;

    /// Returns the number of coordinates in the parameter vector.
    fn params_dim(&self) -> usize;

    /// Scores `point` under the fixed `params`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the goal cannot be computed at `point`.
    fn goal(&self, point: &Vector, params: &Vector) -> Result<f64, Self::Error>;
}

