use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error as ThisError;

use sweep_core::{Compact, ErrorKind, Problem, Vector};

use super::{
    Action, Config, Error, Event, ParseBoundsError, Solver, maximize_unobserved, minimize,
    minimize_unobserved,
};

fn square(lo: f64, hi: f64, points: usize) -> Compact {
    Compact::new(Vector::from([lo, lo]), Vector::from([hi, hi]), points).expect("valid box")
}

fn no_params() -> Vector {
    Vector::from(Vec::<f64>::new())
}

/// f(x, y) = x + y.
struct Linear;

impl Problem for Linear {
    type Error = Infallible;

    fn args_dim(&self) -> usize {
        2
    }

    fn params_dim(&self) -> usize {
        0
    }

    fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, Infallible> {
        Ok(x.iter().sum())
    }
}

/// f(x, y) = (x - a)² + (y - b)² with the center `(a, b)` passed as params.
struct Bowl;

impl Problem for Bowl {
    type Error = Infallible;

    fn args_dim(&self) -> usize {
        2
    }

    fn params_dim(&self) -> usize {
        2
    }

    fn goal(&self, x: &Vector, center: &Vector) -> Result<f64, Infallible> {
        Ok(x.iter()
            .zip(center.iter())
            .map(|(xi, ci)| (xi - ci).powi(2))
            .sum())
    }
}

/// Any two-argument function of the point, no params.
struct Surface<F: Fn(f64, f64) -> f64>(F);

impl<F: Fn(f64, f64) -> f64> Problem for Surface<F> {
    type Error = Infallible;

    fn args_dim(&self) -> usize {
        2
    }

    fn params_dim(&self) -> usize {
        0
    }

    fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, Infallible> {
        let x = x.as_slice();
        Ok((self.0)(x[0], x[1]))
    }
}

#[derive(Debug, ThisError, PartialEq)]
#[error("sum {sum} exceeds the threshold")]
struct ThresholdError {
    sum: f64,
}

/// Returns x + y, failing once the sum passes `threshold`.
struct FailsAbove {
    threshold: f64,
}

impl Problem for FailsAbove {
    type Error = ThresholdError;

    fn args_dim(&self) -> usize {
        2
    }

    fn params_dim(&self) -> usize {
        0
    }

    fn goal(&self, x: &Vector, _params: &Vector) -> Result<f64, ThresholdError> {
        let sum: f64 = x.iter().sum();
        if sum > self.threshold {
            Err(ThresholdError { sum })
        } else {
            Ok(sum)
        }
    }
}

#[test]
fn linear_minimum_is_at_start() {
    let solution =
        minimize_unobserved(&Linear, &no_params(), &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([0.0, 0.0]));
    assert_relative_eq!(solution.objective, 0.0);
    assert_eq!(solution.ordinal, 0);
    assert_eq!(solution.evaluations, 9);
}

#[test]
fn bowl_minimum_is_at_center() {
    let center = Vector::from([1.0, 1.0]);
    let solution = minimize_unobserved(&Bowl, &center, &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([1.0, 1.0]));
    assert_relative_eq!(solution.objective, 0.0);
    assert_eq!(solution.ordinal, 4);
}

#[test]
fn finer_grid_finds_off_center_minimum() {
    let center = Vector::from([0.25, -0.5]);
    let solution = minimize_unobserved(&Bowl, &center, &square(-1.0, 1.0, 9)).expect("should solve");

    assert!(solution.point.approx_eq(&center, 1e-12));
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-24);
    assert_eq!(solution.evaluations, 81);
}

#[test]
fn constant_objective_keeps_start() {
    let problem = Surface(|_, _| 7.0);
    let solution =
        minimize_unobserved(&problem, &no_params(), &square(-3.0, 3.0, 5)).expect("should solve");

    assert_eq!(solution.point, Vector::from([-3.0, -3.0]));
    assert_relative_eq!(solution.objective, 7.0);
    assert_eq!(solution.ordinal, 0);
}

#[test]
fn ties_keep_the_first_point() {
    // Every point with x = 1 scores 0; (1, 0) comes first in row-major order.
    let problem = Surface(|x, _| (x - 1.0).powi(2));
    let solution =
        minimize_unobserved(&problem, &no_params(), &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([1.0, 0.0]));
    assert_eq!(solution.ordinal, 3);
}

#[test]
fn increasing_objective_is_minimized_at_lower_bound() {
    let problem = Surface(|_, y| y.exp());
    let solution =
        minimize_unobserved(&problem, &no_params(), &square(-1.0, 1.0, 4)).expect("should solve");

    assert_relative_eq!(solution.point.coord(1).unwrap(), -1.0);
    assert_relative_eq!(solution.objective, (-1.0_f64).exp());
}

#[test]
fn nan_never_replaces_the_best() {
    let problem = Surface(|x, y| if x > 0.5 { f64::NAN } else { x + y });
    let solution =
        minimize_unobserved(&problem, &no_params(), &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([0.0, 0.0]));
    assert_eq!(solution.evaluations, 9);
}

#[test]
fn nan_at_first_point_stays_best() {
    let problem = Surface(|x, y| if x == 0.0 && y == 0.0 { f64::NAN } else { x + y });
    let solution =
        minimize_unobserved(&problem, &no_params(), &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([0.0, 0.0]));
    assert!(solution.objective.is_nan());
}

#[test]
fn goal_failure_aborts_the_search() {
    let problem = FailsAbove { threshold: 3.0 };
    let error = minimize_unobserved(&problem, &no_params(), &square(0.0, 2.0, 3)).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Problem);
    let Error::Problem(source) = error else {
        panic!("expected a problem error, got {error:?}");
    };
    let source = source
        .downcast_ref::<ThresholdError>()
        .expect("source should be the goal's error");
    assert_eq!(source, &ThresholdError { sum: 4.0 });
}

#[test]
fn maximize_finds_the_far_corner() {
    let solution =
        maximize_unobserved(&Linear, &no_params(), &square(0.0, 2.0, 3)).expect("should solve");

    assert_eq!(solution.point, Vector::from([2.0, 2.0]));
    assert_relative_eq!(solution.objective, 4.0);
}

#[test]
fn assume_worse_excludes_points() {
    // Reject the half-plane x < 1, leaving (1, 0) as the lowest sum.
    let observer = |event: &Event<'_>| {
        if event.point.coord(0).unwrap() < 1.0 {
            Some(Action::AssumeWorse)
        } else {
            None
        }
    };

    let solution =
        minimize(&Linear, &no_params(), &square(0.0, 2.0, 3), observer).expect("should solve");

    assert_eq!(solution.point, Vector::from([1.0, 0.0]));
    assert_relative_eq!(solution.objective, 1.0);
    assert_eq!(solution.evaluations, 9);
}

#[test]
fn observer_sees_every_point_in_order() {
    let mut events = Vec::new();
    let observer = |event: &Event<'_>| {
        events.push((event.ordinal, event.point.clone(), event.best));
        None::<Action>
    };

    minimize(&Linear, &no_params(), &square(0.0, 2.0, 3), observer).expect("should solve");

    assert_eq!(events.len(), 9);
    assert!(events.iter().enumerate().all(|(i, (ordinal, ..))| i == *ordinal));
    assert_eq!(events[0].2, None);
    assert_eq!(events[1].1, Vector::from([0.0, 1.0]));
    assert_eq!(events[3].1, Vector::from([1.0, 0.0]));
    assert_eq!(events[8].1, Vector::from([2.0, 2.0]));
    assert!(events[1..].iter().all(|(.., best)| *best == Some(0.0)));
}

#[test]
fn rejecting_every_point_is_not_ready() {
    let observer = |_: &Event<'_>| Some(Action::AssumeWorse);
    let error = minimize(&Linear, &no_params(), &square(0.0, 2.0, 3), observer).unwrap_err();

    assert!(matches!(error, Error::NoAcceptedPoint));
    assert_eq!(error.kind(), ErrorKind::NotReady);
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let line = Compact::new(Vector::from([0.0]), Vector::from([1.0]), 3).unwrap();
    let error = minimize_unobserved(&Linear, &no_params(), &line).unwrap_err();
    assert!(matches!(
        error,
        Error::DimensionMismatch {
            what: "domain",
            expected: 2,
            found: 1
        }
    ));
    assert_eq!(error.kind(), ErrorKind::DimensionMismatch);

    let error = minimize_unobserved(&Bowl, &Vector::from([1.0]), &square(0.0, 1.0, 3)).unwrap_err();
    assert!(matches!(
        error,
        Error::DimensionMismatch { what: "params", .. }
    ));
}

#[test]
fn degenerate_axis_is_searched_once() {
    let compact = Compact::new(Vector::from([0.0, 5.0]), Vector::from([2.0, 5.0]), 5).unwrap();
    let problem = Surface(|x, y| (x - 1.0).powi(2) + y);
    let solution = minimize_unobserved(&problem, &no_params(), &compact).expect("should solve");

    assert_eq!(solution.point, Vector::from([1.0, 5.0]));
    assert_eq!(solution.evaluations, 5);
}

#[test]
fn session_is_not_ready_before_solve() {
    let mut solver = Solver::new();
    assert!(matches!(solver.solution(), Err(Error::NotReady)));

    solver.set_problem(&Linear).unwrap();
    assert!(!solver.is_solved());
    assert_eq!(solver.solution().unwrap_err().kind(), ErrorKind::NotReady);
    assert_eq!(solver.start(), &Vector::from([0.0, 0.0]));
    assert_eq!(solver.end(), &Vector::from([0.0, 0.0]));
}

#[test]
fn session_solves_bounds_from_text() {
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&Linear).unwrap();
    solver.set_params_from_str("0,0;2,2;").unwrap();

    assert_eq!(solver.start(), &Vector::from([0.0, 0.0]));
    assert_eq!(solver.end(), &Vector::from([2.0, 2.0]));

    let objective = solver.solve().expect("should solve").objective;
    assert_relative_eq!(objective, 0.0);
    assert!(solver.is_solved());
    assert_eq!(solver.solution().unwrap(), Vector::from([0.0, 0.0]));
    assert_eq!(solver.best().unwrap().evaluations, 9);
}

#[test]
fn session_with_params() {
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&Bowl).unwrap();
    solver
        .set_bounds(Vector::from([0.0, 0.0]), Vector::from([2.0, 2.0]))
        .unwrap();

    assert!(matches!(solver.solve(), Err(Error::MissingParams)));
    assert!(matches!(
        solver.set_params(Vector::from([1.0])),
        Err(Error::DimensionMismatch { what: "params", .. })
    ));

    solver.set_params(Vector::from([1.0, 1.0])).unwrap();
    let point = solver.solve().expect("should solve").point.clone();
    assert_eq!(point, Vector::from([1.0, 1.0]));
    assert_eq!(solver.params(), Some(&Vector::from([1.0, 1.0])));
}

#[test]
fn short_bounds_text_leaves_box_untouched() {
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&Linear).unwrap();
    solver.set_params_from_str("1,1;3,3;").unwrap();

    let error = solver.set_params_from_str("0,0;2;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(solver.start(), &Vector::from([1.0, 1.0]));
    assert_eq!(solver.end(), &Vector::from([3.0, 3.0]));

    let error = solver.set_params_from_str("0,0;2,2").unwrap_err();
    assert!(matches!(
        error,
        Error::Bounds(ParseBoundsError::SegmentCount { .. })
    ));
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    let error = solver.set_params_from_str("0,a;2,2;").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(solver.start(), &Vector::from([1.0, 1.0]));
}

#[test]
fn text_after_last_bound_is_ignored() {
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&Linear).unwrap();
    solver.set_params_from_str("0,0;2,2;junk").unwrap();

    assert_eq!(solver.start(), &Vector::from([0.0, 0.0]));
    assert_eq!(solver.end(), &Vector::from([2.0, 2.0]));
}

#[test]
fn unbound_session_rejects_calls() {
    let mut solver: Solver<'_, Linear> = Solver::default();

    assert!(matches!(solver.solve(), Err(Error::NoProblem)));
    assert!(matches!(
        solver.set_params_from_str("0,0;1,1;"),
        Err(Error::NoProblem)
    ));
    assert!(matches!(
        solver.set_bounds(Vector::from([0.0, 0.0]), Vector::from([1.0, 1.0])),
        Err(Error::NoProblem)
    ));
    assert_eq!(
        solver.solve().unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn rebinding_resets_solved_state() {
    let first = Linear;
    let second = Linear;

    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&first).unwrap();
    solver.set_params_from_str("0,0;2,2;").unwrap();
    solver.solve().unwrap();
    assert!(solver.is_solved());

    solver.set_problem(&second).unwrap();
    assert!(!solver.is_solved());
    assert!(matches!(solver.solution(), Err(Error::NotReady)));
    assert_eq!(solver.end(), &Vector::from([0.0, 0.0]));
}

#[test]
fn failed_solve_keeps_previous_solution() {
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&Linear).unwrap();
    solver.set_params_from_str("0,0;2,2;").unwrap();
    solver.solve().unwrap();

    solver
        .set_bounds(Vector::from([1.0, 0.0]), Vector::from([0.0, 2.0]))
        .unwrap();
    let error = solver.solve().unwrap_err();
    assert!(matches!(error, Error::Domain(_)));
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);

    assert_eq!(solver.solution().unwrap(), Vector::from([0.0, 0.0]));
}

#[test]
fn goal_failure_leaves_session_unsolved() {
    let problem = FailsAbove { threshold: 1.0 };
    let mut solver = Solver::with_config(Config::new(3).unwrap());
    solver.set_problem(&problem).unwrap();
    solver.set_params_from_str("0,0;2,2;").unwrap();

    let error = solver.solve().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Problem);
    assert!(!solver.is_solved());
}

#[test]
fn session_accepts_trait_objects() {
    let problems: [&dyn Problem<Error = Infallible>; 2] = [&Linear, &Bowl];
    let center = Vector::from([2.0, 0.0]);

    let mut solver = Solver::with_config(Config::new(3).unwrap());
    let mut found = Vec::new();
    for problem in problems {
        solver.set_problem(problem).unwrap();
        solver.set_params_from_str("0,0;2,2;").unwrap();
        if problem.params_dim() > 0 {
            solver.set_params(center.clone()).unwrap();
        }
        found.push(solver.solve().unwrap().point.clone());
    }

    assert_eq!(found, [Vector::from([0.0, 0.0]), Vector::from([2.0, 0.0])]);
}

#[test]
fn session_observer_sees_evaluations() {
    let mut count = 0;
    let mut solver = Solver::with_config(Config::new(4).unwrap());
    solver.set_problem(&Linear).unwrap();
    solver.set_params_from_str("0,0;3,3;").unwrap();
    solver
        .solve_observed(|_: &Event<'_>| {
            count += 1;
            None::<Action>
        })
        .unwrap();

    assert_eq!(count, 16);
}
