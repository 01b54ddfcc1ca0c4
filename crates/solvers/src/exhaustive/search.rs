use log::{debug, trace, warn};
use sweep_core::{Compact, Observer, Problem, Vector};

use super::{Action, Error, Event, Solution, best::Best};

/// Core exhaustive search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<P, Obs, F>(
    problem: &P,
    params: &Vector,
    compact: &Compact,
    mut observer: Obs,
    transform: F,
) -> Result<Solution, Error>
where
    P: Problem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
    F: Fn(f64) -> f64,
{
    let dim = problem.args_dim();
    if compact.dim() != dim {
        warn!(
            "search: domain has {} axes but the problem takes {dim} arguments",
            compact.dim()
        );
        return Err(Error::DimensionMismatch {
            what: "domain",
            expected: dim,
            found: compact.dim(),
        });
    }
    if params.dim() != problem.params_dim() {
        warn!(
            "search: params have dimension {} but the problem takes {}",
            params.dim(),
            problem.params_dim()
        );
        return Err(Error::DimensionMismatch {
            what: "params",
            expected: problem.params_dim(),
            found: params.dim(),
        });
    }

    // Both cursors live until the function returns, on every path.
    let mut cursor = compact.begin()?;
    let _end = compact.end_cursor()?;
    let mut scratch = Vector::zeros(dim)?;
    let mut best = Best::empty();

    match compact.len() {
        Some(points) => debug!("search: {points} grid points over {dim} axes"),
        None => debug!("search: more than {} grid points over {dim} axes", usize::MAX),
    }

    let mut ordinal = 0;
    loop {
        compact.point_at(&cursor, &mut scratch)?;

        let objective = problem.goal(&scratch, params).map_err(|err| {
            warn!("search: goal failed at grid point {ordinal} {scratch}: {err}");
            Error::problem(err)
        })?;
        trace!("search: f{scratch} = {objective}");

        let event = Event {
            ordinal,
            point: &scratch,
            objective,
            best: best.objective(),
        };
        match observer.observe(&event) {
            Some(Action::AssumeWorse) => trace!("search: point {ordinal} assumed worse"),
            None => {
                if best.offer(&scratch, objective, transform(objective), ordinal)? {
                    trace!("search: new best {objective} at point {ordinal}");
                }
            }
        }

        ordinal += 1;
        if cursor.do_step().is_err() {
            break;
        }
    }

    best.finish(ordinal)
}
