//! Exhaustive grid search for multivariate minimization.
//!
//! # Algorithm
//!
//! The domain is a [`Compact`] box split into a regular grid. The search
//! evaluates the objective at every grid point in row-major order and keeps
//! the point with the lowest score:
//!
//! 1. The first grid point (the box's `start`) becomes the running best.
//! 2. Each later point replaces the best only if its score is strictly lower.
//!    Ties keep the earlier point, and a NaN score never wins.
//! 3. The walk ends when the cursor reports that the grid is exhausted.
//!
//! Any failure of the objective aborts the search; the failure is returned
//! as the source of [`Error::Problem`].
//!
//! # Cost
//!
//! A box with `n` non-degenerate axes and `k` points per axis takes `k^n`
//! evaluations. The call blocks until all of them are done.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per successful evaluation, including the
//! first. Observers can return [`Action::AssumeWorse`] to keep a point out of
//! the running best. There is no early stop.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use sweep_core::{Compact, Problem, Vector};
//! use sweep_solvers::exhaustive;
//!
//! struct Bowl;
//!
//! impl Problem for Bowl {
//!     type Error = Infallible;
//!
//!     fn args_dim(&self) -> usize {
//!         2
//!     }
//!
//!     fn params_dim(&self) -> usize {
//!         0
//!     }
//!
//!     fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, Infallible> {
//!         let x = x.as_slice();
//!         Ok((x[0] - 1.0).powi(2) + (x[1] - 1.0).powi(2))
//!     }
//! }
//!
//! let compact = Compact::new(Vector::from([0.0, 0.0]), Vector::from([2.0, 2.0]), 3)?;
//! let no_params = Vector::from(Vec::<f64>::new());
//! let solution = exhaustive::minimize_unobserved(&Bowl, &no_params, &compact)?;
//!
//! assert_eq!(solution.point, Vector::from([1.0, 1.0]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod best;
mod bounds;
mod config;
mod error;
mod event;
mod search;
mod session;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bounds::{ParseBoundsError, SOLVER_PARAMS_COUNT, parse_bounds};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use session::Solver;
pub use solution::Solution;

use sweep_core::{Compact, Observer, Problem, Vector};

use search::search;

/// Finds the grid point of `compact` that minimizes the objective.
///
/// The observer receives an [`Event`] for every evaluation.
/// See the [module docs](self) for details on ordering and tie-breaking.
///
/// # Errors
///
/// Returns an error if the problem's dimensions disagree with `compact` or
/// `params`, if the goal function fails, or if the observer rejects every
/// grid point.
pub fn minimize<P, Obs>(
    problem: &P,
    params: &Vector,
    compact: &Compact,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(problem, params, compact, observer, |v| v)
}

/// Finds the minimizing grid point without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem's dimensions disagree with `compact` or
/// `params`, or if the goal function fails.
pub fn minimize_unobserved<P>(
    problem: &P,
    params: &Vector,
    compact: &Compact,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
{
    minimize(problem, params, compact, ())
}

/// Finds the grid point of `compact` that maximizes the objective.
///
/// Ties keep the earlier point, as in [`minimize`].
///
/// # Errors
///
/// Returns an error if the problem's dimensions disagree with `compact` or
/// `params`, if the goal function fails, or if the observer rejects every
/// grid point.
pub fn maximize<P, Obs>(
    problem: &P,
    params: &Vector,
    compact: &Compact,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(problem, params, compact, observer, |v| -v)
}

/// Finds the maximizing grid point without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem's dimensions disagree with `compact` or
/// `params`, or if the goal function fails.
pub fn maximize_unobserved<P>(
    problem: &P,
    params: &Vector,
    compact: &Compact,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
{
    maximize(problem, params, compact, ())
}
