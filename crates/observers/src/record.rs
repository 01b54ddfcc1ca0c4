//! Recording observer for inspecting a search after it finishes.

use sweep_core::Observer;

use crate::traits::{HasObjective, HasOrdinal};

/// One recorded evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub ordinal: usize,
    pub objective: f64,
}

/// An observer that records every evaluation and the running improvements.
///
/// Pass `&mut Recorder` as the solver observer so the data is still available
/// after the solve completes. The recorder never steers the search.
///
/// Improvements are tracked on the raw objective, lowest first, so they match
/// the solver's choices for an unfiltered minimization.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
///
/// use sweep_core::{Compact, Problem, Vector};
/// use sweep_observers::Recorder;
/// use sweep_solvers::exhaustive;
///
/// struct Descending;
///
/// impl Problem for Descending {
///     type Error = Infallible;
///
///     fn args_dim(&self) -> usize {
///         1
///     }
///
///     fn params_dim(&self) -> usize {
///         0
///     }
///
///     fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, Infallible> {
///         Ok(-x.as_slice()[0])
///     }
/// }
///
/// let compact = Compact::new(Vector::from([0.0]), Vector::from([1.0]), 5)?;
/// let mut recorder = Recorder::new();
/// exhaustive::minimize(&Descending, &Vector::from(Vec::<f64>::new()), &compact, &mut recorder)?;
///
/// assert_eq!(recorder.samples().len(), 5);
/// assert_eq!(recorder.improvements().len(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    samples: Vec<Sample>,
    improvements: Vec<Sample>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single evaluation.
    pub fn record(&mut self, ordinal: usize, objective: f64) {
        let sample = Sample { ordinal, objective };
        let improved = match self.improvements.last() {
            None => true,
            Some(best) => objective < best.objective,
        };
        if improved {
            self.improvements.push(sample);
        }
        self.samples.push(sample);
    }

    /// Returns every recorded evaluation in order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the evaluations that lowered the best objective, in order.
    ///
    /// The first sample always counts as an improvement.
    #[must_use]
    pub fn improvements(&self) -> &[Sample] {
        &self.improvements
    }

    /// Returns the last improvement, if any.
    #[must_use]
    pub fn best(&self) -> Option<Sample> {
        self.improvements.last().copied()
    }

    /// Clears all recorded data.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.improvements.clear();
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasOrdinal + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.ordinal(), event.objective());
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the data can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasOrdinal + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_strict_improvements() {
        let mut recorder = Recorder::new();
        for (ordinal, objective) in [3.0, 1.0, 1.0, 2.0, 0.5].into_iter().enumerate() {
            recorder.record(ordinal, objective);
        }

        assert_eq!(recorder.samples().len(), 5);
        let improved: Vec<usize> = recorder.improvements().iter().map(|s| s.ordinal).collect();
        assert_eq!(improved, [0, 1, 4]);
        assert_eq!(
            recorder.best(),
            Some(Sample {
                ordinal: 4,
                objective: 0.5
            })
        );
    }

    #[test]
    fn nan_is_recorded_but_never_improves() {
        let mut recorder = Recorder::new();
        recorder.record(0, 2.0);
        recorder.record(1, f64::NAN);

        assert_eq!(recorder.samples().len(), 2);
        assert_eq!(recorder.improvements().len(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut recorder = Recorder::new();
        recorder.record(0, 1.0);
        recorder.clear();

        assert!(recorder.samples().is_empty());
        assert_eq!(recorder.best(), None);
    }
}
