//! Capability queries for hosts that load solvers by role.
//!
//! A host asks a [`Broker`] whether it can act in a given [`Role`] and, if so,
//! casts it to the matching [`Interface`]. The broker from [`create_broker`]
//! offers only [`Role::Solver`]; dropping the box releases it.
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use sweep_core::{Problem, Vector};
//! use sweep_solvers::broker::{Interface, Role, create_broker};
//!
//! struct Sum;
//!
//! impl Problem for Sum {
//!     type Error = Infallible;
//!
//!     fn args_dim(&self) -> usize {
//!         1
//!     }
//!
//!     fn params_dim(&self) -> usize {
//!         0
//!     }
//!
//!     fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, Infallible> {
//!         Ok(x.iter().sum())
//!     }
//! }
//!
//! let problem = Sum;
//! let mut broker = create_broker();
//! assert!(!broker.can_cast_to(Role::Problem));
//!
//! let Interface::Solver(solver) = broker.cast(Role::Solver)? else {
//!     unreachable!("only solvers are offered");
//! };
//! solver.set_problem(&problem)?;
//! solver.set_params_from_str("-1;1;")?;
//! solver.solve()?;
//! assert_eq!(solver.solution()?, Vector::from([-1.0]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::debug;
use thiserror::Error;

use sweep_core::{ErrorKind, Problem, Vector};

use crate::exhaustive::{Error, Solver};

/// Version of the capability interface implemented by this crate.
pub const INTERFACE_VERSION: u32 = 0;

/// Roles a broker can be asked to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Solver,
    Problem,
}

/// The broker cannot act in the requested role.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("role {role:?} is not supported")]
pub struct Unsupported {
    pub role: Role,
}

impl Unsupported {
    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Object-safe view of a solver session.
pub trait SolverRole<'p, P: Problem + ?Sized> {
    /// Binds a problem and resets the search box.
    ///
    /// # Errors
    ///
    /// See [`Solver::set_problem`].
    fn set_problem(&mut self, problem: &'p P) -> Result<(), Error>;

    /// Stores the objective parameters.
    ///
    /// # Errors
    ///
    /// See [`Solver::set_params`].
    fn set_params(&mut self, params: Vector) -> Result<(), Error>;

    /// Sets the search box from text.
    ///
    /// # Errors
    ///
    /// See [`Solver::set_params_from_str`].
    fn set_params_from_str(&mut self, text: &str) -> Result<(), Error>;

    /// Runs the search.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve`].
    fn solve(&mut self) -> Result<(), Error>;

    /// Returns the best point of the last successful search.
    ///
    /// # Errors
    ///
    /// See [`Solver::solution`].
    fn solution(&self) -> Result<Vector, Error>;
}

impl<'p, P: Problem + ?Sized> SolverRole<'p, P> for Solver<'p, P> {
    fn set_problem(&mut self, problem: &'p P) -> Result<(), Error> {
        Solver::set_problem(self, problem)
    }

    fn set_params(&mut self, params: Vector) -> Result<(), Error> {
        Solver::set_params(self, params)
    }

    fn set_params_from_str(&mut self, text: &str) -> Result<(), Error> {
        Solver::set_params_from_str(self, text)
    }

    fn solve(&mut self) -> Result<(), Error> {
        Solver::solve(self).map(|_| ())
    }

    fn solution(&self) -> Result<Vector, Error> {
        Solver::solution(self)
    }
}

/// An interface handed out by [`Broker::cast`].
#[non_exhaustive]
pub enum Interface<'b, 'p, P: Problem + ?Sized> {
    Solver(&'b mut dyn SolverRole<'p, P>),
}

/// Answers capability queries from a host.
pub trait Broker<'p, P: Problem + ?Sized> {
    /// Returns true if [`cast`](Broker::cast) would succeed for `role`.
    fn can_cast_to(&self, role: Role) -> bool;

    /// Returns the interface for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`Unsupported`] if the broker does not fill `role`.
    fn cast(&mut self, role: Role) -> Result<Interface<'_, 'p, P>, Unsupported>;

    fn interface_version(&self) -> u32 {
        INTERFACE_VERSION
    }
}

struct SolverBroker<'p, P: Problem + ?Sized> {
    solver: Solver<'p, P>,
}

impl<'p, P: Problem + ?Sized> Broker<'p, P> for SolverBroker<'p, P> {
    fn can_cast_to(&self, role: Role) -> bool {
        role == Role::Solver
    }

    fn cast(&mut self, role: Role) -> Result<Interface<'_, 'p, P>, Unsupported> {
        match role {
            Role::Solver => Ok(Interface::Solver(&mut self.solver)),
            Role::Problem => {
                debug!("broker: refused cast to {role:?}");
                Err(Unsupported { role })
            }
        }
    }
}

/// Creates a broker that offers a default-configured exhaustive [`Solver`].
#[must_use]
pub fn create_broker<'p, P: Problem + ?Sized + 'p>() -> Box<dyn Broker<'p, P> + 'p> {
    Box::new(SolverBroker {
        solver: Solver::new(),
    })
}
