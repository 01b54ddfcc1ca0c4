use log::{debug, info, warn};
use sweep_core::{Compact, Observer, Problem, Vector};

use super::{Action, Config, Error, Event, Solution, minimize, parse_bounds};

/// A reusable search session bound to one problem at a time.
///
/// The session borrows its problem, owns the search box and objective
/// parameters, and keeps the result of the last successful [`solve`].
/// A failed solve leaves the previous result in place.
///
/// [`solve`]: Solver::solve
pub struct Solver<'p, P: Problem + ?Sized> {
    problem: Option<&'p P>,
    config: Config,
    params: Option<Vector>,
    start: Vector,
    end: Vector,
    solution: Option<Solution>,
}

impl<'p, P: Problem + ?Sized> Solver<'p, P> {
    /// Creates an unbound session with the default grid resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an unbound session with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let empty = Vector::from(Vec::<f64>::new());
        Self {
            problem: None,
            config,
            params: None,
            start: empty.clone(),
            end: empty,
            solution: None,
        }
    }

    /// Binds `problem` and resets the search box to the origin.
    ///
    /// Any stored solution is discarded, even if allocation fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds cannot be allocated.
    pub fn set_problem(&mut self, problem: &'p P) -> Result<(), Error> {
        self.solution = None;

        let dim = problem.args_dim();
        let start = Vector::zeros(dim)?;
        let end = Vector::zeros(dim)?;

        self.problem = Some(problem);
        self.start = start;
        self.end = end;
        debug!(
            "set_problem: {dim} arguments, {} parameters",
            problem.params_dim()
        );
        Ok(())
    }

    /// Stores the objective parameters passed to every goal evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if a bound problem expects a
    /// different number of parameters.
    pub fn set_params(&mut self, params: Vector) -> Result<(), Error> {
        if let Some(problem) = self.problem
            && params.dim() != problem.params_dim()
        {
            warn!(
                "set_params: got {} parameters, problem expects {}",
                params.dim(),
                problem.params_dim()
            );
            return Err(Error::DimensionMismatch {
                what: "params",
                expected: problem.params_dim(),
                found: params.dim(),
            });
        }
        self.params = Some(params);
        Ok(())
    }

    /// Sets the search box from text such as `"0,0;2,2;"`.
    ///
    /// The box is only updated if the whole string parses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProblem`] if no problem is bound, or
    /// [`Error::Bounds`] if the text is malformed.
    pub fn set_params_from_str(&mut self, text: &str) -> Result<(), Error> {
        let problem = self.problem.ok_or(Error::NoProblem)?;
        let (start, end) = parse_bounds(text, problem.args_dim()).inspect_err(|err| {
            warn!("set_params_from_str: {text:?}: {err}");
        })?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Sets the search box directly.
    ///
    /// Bound ordering is validated when the grid is built in [`solve`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProblem`] if no problem is bound, or
    /// [`Error::DimensionMismatch`] if either corner has the wrong dimension.
    ///
    /// [`solve`]: Solver::solve
    pub fn set_bounds(&mut self, start: Vector, end: Vector) -> Result<(), Error> {
        let problem = self.problem.ok_or(Error::NoProblem)?;
        let dim = problem.args_dim();
        for (what, corner) in [("start", &start), ("end", &end)] {
            if corner.dim() != dim {
                return Err(Error::DimensionMismatch {
                    what,
                    expected: dim,
                    found: corner.dim(),
                });
            }
        }
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Runs the exhaustive search over the current box.
    ///
    /// # Errors
    ///
    /// Returns an error if no problem is bound, if required parameters are
    /// missing, if the box is invalid, or if the goal function fails.
    pub fn solve(&mut self) -> Result<&Solution, Error> {
        self.solve_observed(())
    }

    /// Runs the search, reporting each evaluation to `observer`.
    ///
    /// # Errors
    ///
    /// See [`solve`](Solver::solve).
    pub fn solve_observed<Obs>(&mut self, observer: Obs) -> Result<&Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let solution = self
            .run(observer)
            .inspect_err(|err| warn!("solve: {err}"))?;
        info!(
            "solve: minimum {} at {} after {} evaluations",
            solution.objective, solution.point, solution.evaluations
        );
        Ok(self.solution.insert(solution))
    }

    fn run<Obs>(&self, observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let problem = self.problem.ok_or(Error::NoProblem)?;

        let no_params;
        let params = match &self.params {
            Some(params) => params,
            None if problem.params_dim() == 0 => {
                no_params = Vector::zeros(0)?;
                &no_params
            }
            None => return Err(Error::MissingParams),
        };

        let compact = Compact::new(
            self.start.clone(),
            self.end.clone(),
            self.config.points_per_axis(),
        )?;
        minimize(problem, params, &compact, observer)
    }

    /// Returns a copy of the best point found by the last successful solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotReady`] if no solve has succeeded since the
    /// problem was bound.
    pub fn solution(&self) -> Result<Vector, Error> {
        self.best().map(|solution| solution.point.clone())
    }

    /// Returns the full result of the last successful solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotReady`] if no solve has succeeded since the
    /// problem was bound.
    pub fn best(&self) -> Result<&Solution, Error> {
        self.solution.as_ref().ok_or(Error::NotReady)
    }

    /// Returns true if a solution is available.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns the grid configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the lower corner of the search box.
    #[must_use]
    pub fn start(&self) -> &Vector {
        &self.start
    }

    /// Returns the upper corner of the search box.
    #[must_use]
    pub fn end(&self) -> &Vector {
        &self.end
    }

    /// Returns the objective parameters, if set.
    #[must_use]
    pub fn params(&self) -> Option<&Vector> {
        self.params.as_ref()
    }
}

impl<P: Problem + ?Sized> Default for Solver<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}
