//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasOrdinal`] — events numbered by their position in the search
//! - [`HasPoint`] — events that carry the evaluated point
//!
//! # Action traits
//!
//! - [`CanAssumeWorse`] — actions that can keep a point out of the best
//!
//! # Example
//!
//! ```rust
//! use sweep_core::Observer;
//! use sweep_observers::traits::{CanAssumeWorse, HasPoint};
//!
//! /// Rejects points outside the unit disk.
//! struct UnitDisk;
//!
//! impl<E: HasPoint, A: CanAssumeWorse> Observer<E, A> for UnitDisk {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let r2: f64 = event.point().iter().map(|x| x * x).sum();
//!         (r2 > 1.0).then(A::assume_worse)
//!     }
//! }
//! ```

use sweep_core::Vector;
use sweep_solvers::exhaustive;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event numbered by its position in the search, starting at 0.
pub trait HasOrdinal {
    fn ordinal(&self) -> usize;
}

/// An event that carries the point it was evaluated at.
pub trait HasPoint {
    fn point(&self) -> &Vector;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

impl HasObjective for exhaustive::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasOrdinal for exhaustive::Event<'_> {
    fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl HasPoint for exhaustive::Event<'_> {
    fn point(&self) -> &Vector {
        self.point
    }
}

impl CanAssumeWorse for exhaustive::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
