//! Error kinds surfaced at the routing boundary.

use thiserror::Error;

/// Failures the caller can act on.
///
/// The local heuristic has no variant here: it always produces a result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Vehicles or jobs missing or malformed at the boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external solver could not produce a usable response.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),
}

impl From<serde_json::Error> for RoutingError {
    fn from(err: serde_json::Error) -> Self {
        RoutingError::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::SolverUnavailable(err.to_string())
    }
}
