/// Errors returned when a tree or a query is given malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("dimensionality must be greater than zero")]
    ZeroDimensions,

    #[error("pivot sample size must be greater than zero")]
    ZeroSampleSize,

    #[error("point {index} has {found} coordinates, expected {expected}")]
    PointDimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("point {index} has a NaN or infinite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("query has {found} coordinates, expected {expected}")]
    QueryDimension { expected: usize, found: usize },

    #[error("query has a NaN or infinite coordinate")]
    NonFiniteQuery,
}

/// Result type for tree construction and queries.
pub type Result<T> = std::result::Result<T, Error>;
