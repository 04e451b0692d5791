//! Seams between the assignment core and its collaborators.
//!
//! Kept small so tests can swap in planar metrics or canned solvers.

use serde_json::Value;

use crate::error::RoutingError;
use crate::models::Coordinate;

/// Distance between two coordinates, in kilometers.
pub trait DistanceMetric {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// An external optimizer that takes the raw `{vehicles, jobs}` payload.
///
/// The response schema belongs to the solver and is passed through as-is.
pub trait SolverBackend {
    fn solve(&self, payload: &Value) -> Result<Value, RoutingError>;
}
