//! Solvers for the sweep framework.
//!
//! - [`exhaustive`] — brute-force minimization over the grid of a box domain,
//!   as free functions and as a stateful [`Solver`](exhaustive::Solver) session
//! - [`broker`] — the capability-query boundary a host uses to reach a solver

pub mod broker;
pub mod exhaustive;
