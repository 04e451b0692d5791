//! fleet-router core
//!
//! Assigns point jobs to vehicles with a greedy nearest-neighbor heuristic,
//! or forwards the same payload to an external VRP solver.

pub mod config;
pub mod error;
pub mod gateway;
pub mod haversine;
pub mod models;
pub mod optimize;
pub mod solver;
pub mod traits;

pub use error::RoutingError;
pub use models::{AssignmentResult, Coordinate, Job, Payload, Route, Stop, Vehicle};
pub use optimize::{optimize, optimize_str, Optimization, Strategy};
pub use solver::{assign, assign_with, AssignOptions};
