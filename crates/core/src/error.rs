/// Broad categories of failure reported across the workspace.
///
/// Every error type exposes a `kind()` so callers can branch on the category
/// without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required input is missing or malformed.
    InvalidArgument,

    /// Two dimensions that must agree do not.
    DimensionMismatch,

    /// A coordinate index is past the end of a vector.
    IndexOutOfRange,

    /// A buffer could not be allocated.
    AllocationFailure,

    /// A result was requested before it was produced.
    NotReady,

    /// The objective function reported a failure.
    Problem,
}
