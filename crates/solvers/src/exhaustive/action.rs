/// Actions an observer can take during an exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Treat this point as worse than every other point.
    ///
    /// The evaluation is not considered for the best solution. Use this to
    /// exclude regions of the domain that the objective itself cannot rule out.
    AssumeWorse,
}
