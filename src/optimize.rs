//! Strategy selection between the local heuristic and the external solver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RoutingError;
use crate::haversine::Haversine;
use crate::models::{AssignmentResult, Payload};
use crate::solver::{assign_with, AssignOptions};
use crate::traits::SolverBackend;

/// Which optimizer answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Greedy nearest-neighbor only.
    Local,
    /// External solver only; failures are returned to the caller.
    Solver,
    /// External solver, falling back to the local heuristic when it is unavailable.
    SolverWithFallback,
}

impl FromStr for Strategy {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Strategy::Local),
            "solver" => Ok(Strategy::Solver),
            "auto" => Ok(Strategy::SolverWithFallback),
            other => Err(RoutingError::InvalidInput(format!(
                "unknown strategy '{}' (expected local, solver or auto)",
                other
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Local => "local",
            Strategy::Solver => "solver",
            Strategy::SolverWithFallback => "auto",
        };
        f.write_str(name)
    }
}

/// Result of one optimization request.
///
/// Serializes to either the local result shape or the solver's own response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Optimization {
    Local(AssignmentResult),
    Solver(Value),
}

impl Optimization {
    pub fn is_local(&self) -> bool {
        matches!(self, Optimization::Local(_))
    }
}

/// Optimize a raw `{vehicles, jobs}` document.
///
/// The payload is always validated first, so malformed input never reaches
/// the solver. The solver receives `raw` unchanged.
pub fn optimize(
    raw: &Value,
    strategy: Strategy,
    backend: Option<&dyn SolverBackend>,
    options: &AssignOptions,
) -> Result<Optimization, RoutingError> {
    let payload = Payload::deserialize(raw)?;
    payload.validate()?;

    let local = |payload: &Payload| {
        Optimization::Local(assign_with(&payload.vehicles, &payload.jobs, &Haversine, options))
    };

    match strategy {
        Strategy::Local => Ok(local(&payload)),
        Strategy::Solver => {
            let backend = backend.ok_or_else(no_backend)?;
            backend.solve(raw).map(Optimization::Solver)
        }
        Strategy::SolverWithFallback => {
            let outcome = match backend {
                Some(backend) => backend.solve(raw),
                None => Err(no_backend()),
            };
            match outcome {
                Ok(response) => Ok(Optimization::Solver(response)),
                Err(RoutingError::SolverUnavailable(reason)) => {
                    tracing::warn!(%reason, "solver unavailable, using local heuristic");
                    Ok(local(&payload))
                }
                Err(err) => Err(err),
            }
        }
    }
}

/// Optimize a JSON text payload.
pub fn optimize_str(
    text: &str,
    strategy: Strategy,
    backend: Option<&dyn SolverBackend>,
    options: &AssignOptions,
) -> Result<Optimization, RoutingError> {
    let raw: Value = serde_json::from_str(text)?;
    optimize(&raw, strategy, backend, options)
}

fn no_backend() -> RoutingError {
    RoutingError::SolverUnavailable("no solver configured".to_string())
}
