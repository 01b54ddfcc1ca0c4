//! Logging observer backed by the `log` facade.

use log::{Level, debug, log, log_enabled};
use sweep_core::Observer;

use crate::traits::{HasObjective, HasOrdinal, HasPoint};

/// An observer that logs every evaluation and each new best point.
///
/// Evaluations go out at the configured level (`trace` by default);
/// improvements are always logged at `debug`. Like the solver, the first
/// evaluation counts as an improvement and NaN never does. The observer never
/// steers the search.
#[derive(Debug, Clone)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
    best: Option<f64>,
}

impl LogObserver {
    /// Creates an observer that logs evaluations at `trace`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_level(Level::Trace)
    }

    /// Creates an observer that logs evaluations at `level`.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            target: module_path!(),
            best: None,
        }
    }

    /// Sets the log target used for every record.
    #[must_use]
    pub fn target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Returns the level used for evaluation records.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the lowest objective seen so far.
    #[must_use]
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    fn improves(&self, objective: f64) -> bool {
        self.best.is_none_or(|best| objective < best)
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasOrdinal + HasObjective + HasPoint,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        if log_enabled!(target: self.target, self.level) {
            log!(
                target: self.target,
                self.level,
                "#{} f{} = {objective}",
                event.ordinal(),
                event.point()
            );
        }
        if self.improves(objective) {
            self.best = Some(objective);
            debug!(
                target: self.target,
                "#{} new best {objective} at {}",
                event.ordinal(),
                event.point()
            );
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut LogObserver
where
    E: HasOrdinal + HasObjective + HasPoint,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
