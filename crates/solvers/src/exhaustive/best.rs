use sweep_core::{Vector, VectorError};

use super::{Error, Solution};

/// Tracks the best point accepted so far.
///
/// The first accepted point is taken unconditionally; after that a point
/// replaces the best only if its score is strictly lower, so ties keep the
/// earlier point and NaN scores never win. The stored point is an owned copy,
/// never an alias of the caller's scratch buffer.
pub(super) struct Best {
    entry: Option<Entry>,
}

struct Entry {
    point: Vector,
    objective: f64,
    score: f64,
    ordinal: usize,
}

impl Best {
    /// Creates an empty best tracker.
    pub(super) fn empty() -> Self {
        Self { entry: None }
    }

    /// Returns the objective of the best point, if any.
    pub(super) fn objective(&self) -> Option<f64> {
        self.entry.as_ref().map(|entry| entry.objective)
    }

    /// Offers a candidate and returns true if it became the best.
    ///
    /// `score` is the transformed objective used for comparison.
    pub(super) fn offer(
        &mut self,
        point: &Vector,
        objective: f64,
        score: f64,
        ordinal: usize,
    ) -> Result<bool, VectorError> {
        match &mut self.entry {
            None => {
                self.entry = Some(Entry {
                    point: point.clone(),
                    objective,
                    score,
                    ordinal,
                });
                Ok(true)
            }
            Some(best) if score < best.score => {
                best.point.copy_from(point)?;
                best.objective = objective;
                best.score = score;
                best.ordinal = ordinal;
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    /// Finalizes the search using the best accepted point.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoAcceptedPoint` if no point was ever accepted.
    pub(super) fn finish(self, evaluations: usize) -> Result<Solution, Error> {
        let entry = self.entry.ok_or(Error::NoAcceptedPoint)?;
        Ok(Solution {
            point: entry.point,
            objective: entry.objective,
            ordinal: entry.ordinal,
            evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn offer(best: &mut Best, x: f64, objective: f64, ordinal: usize) -> bool {
        best.offer(&Vector::from([x]), objective, objective, ordinal)
            .expect("same dimension")
    }

    #[test]
    fn first_offer_is_always_accepted() {
        let mut best = Best::empty();
        assert!(best.objective().is_none());
        assert!(offer(&mut best, 1.0, 10.0, 0));
        assert_eq!(best.objective(), Some(10.0));
    }

    #[test]
    fn keeps_strictly_lower_score() {
        let mut best = Best::empty();
        offer(&mut best, 0.0, 3.0, 0);
        assert!(offer(&mut best, 1.0, 1.0, 1));
        assert!(!offer(&mut best, 2.0, 2.0, 2));

        let solution = best.finish(3).expect("has a point");
        assert_eq!(solution.point, Vector::from([1.0]));
        assert_relative_eq!(solution.objective, 1.0);
        assert_eq!(solution.ordinal, 1);
        assert_eq!(solution.evaluations, 3);
    }

    #[test]
    fn ties_keep_the_earlier_point() {
        let mut best = Best::empty();
        offer(&mut best, 0.0, 1.0, 0);
        assert!(!offer(&mut best, 1.0, 1.0, 1));

        let solution = best.finish(2).unwrap();
        assert_eq!(solution.ordinal, 0);
    }

    #[test]
    fn nan_never_replaces_the_best() {
        let mut best = Best::empty();
        offer(&mut best, 0.0, 1.0, 0);
        assert!(!offer(&mut best, 1.0, f64::NAN, 1));
        assert_eq!(best.objective(), Some(1.0));
    }

    #[test]
    fn stored_point_is_a_copy() {
        let mut best = Best::empty();
        let mut scratch = Vector::from([1.0]);
        best.offer(&scratch, 1.0, 1.0, 0).unwrap();

        scratch.set_coord(0, 5.0).unwrap();
        let solution = best.finish(1).unwrap();
        assert_eq!(solution.point, Vector::from([1.0]));
    }

    #[test]
    fn empty_tracker_has_no_solution() {
        assert!(matches!(
            Best::empty().finish(4),
            Err(Error::NoAcceptedPoint)
        ));
    }
}
