//! Errors reported by catalog lookup and evaluation

/// Failures surfaced by the catalog
///
/// Every variant is a usage error: retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Returned when the identifier matches no registered function.
    #[error("unknown problem name: {0:?}")]
    UnknownProblem(String),

    /// Returned when the function is registered but its solution was never validated.
    #[error("problem {0:?} is registered but its solution is not ready")]
    UnimplementedProblem(String),

    /// Returned when a point's length differs from the problem dimensionality.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// The problem dimensionality.
        expected: usize,
        /// The length of the supplied point.
        actual: usize,
    },

    /// Returned when a dimensionality is requested for a fixed-dimension function.
    #[error("problem {name:?} is defined in {intrinsic} dimensions, {requested} requested")]
    FixedDimension {
        /// The function name.
        name: String,
        /// The dimensionality fixed by the formula.
        intrinsic: usize,
        /// The dimensionality asked for.
        requested: usize,
    },

    /// Returned when a dimension-parametric function is requested with zero dimensions.
    #[error("problem {0:?} needs at least one dimension")]
    ZeroDimension(String),
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
