//! Reusable observers for sweep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events expose the needed data.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for solver-agnostic observers
//!   ([`HasObjective`], [`HasOrdinal`], [`HasPoint`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs evaluations and improvements through `log`
//! - [`Recorder`] — keeps every evaluation for inspection after the solve
//!
//! [`Observer`]: sweep_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasOrdinal`]: traits::HasOrdinal
//! [`HasPoint`]: traits::HasPoint
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod logging;
mod record;

pub use logging::LogObserver;
pub use record::{Recorder, Sample};
