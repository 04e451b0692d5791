//! Typed records for the assignment payload and its result.
//!
//! Field names on the wire follow the solver payload (`start`, `end`,
//! `location` as `[lon, lat]`) and the map client (`steps`, `distance`,
//! `duration`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// A WGS84 point in decimal degrees. Serialized longitude first.
///
/// No range checks: callers are trusted to pass sane angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub description: String,
    pub start: Coordinate,
    pub end: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub description: String,
    pub location: Coordinate,
}

/// One visited job plus the leg that led to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub job_id: i64,
    pub job_description: String,
    pub location: Coordinate,
    /// Leg distance from the previous position, km.
    #[serde(rename = "distance")]
    pub leg_distance_km: f64,
    /// Leg travel time, minutes.
    #[serde(rename = "duration")]
    pub leg_time_min: f64,
}

/// Snapshot of one vehicle's ordered visits.
///
/// Totals exclude the leg back to `end` and are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub vehicle_id: i64,
    pub vehicle_description: String,
    #[serde(rename = "steps")]
    pub stops: Vec<Stop>,
    #[serde(rename = "distance")]
    pub total_distance_km: f64,
    #[serde(rename = "duration")]
    pub total_time_min: f64,
}

impl Route {
    pub fn job_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.stops.iter().map(|stop| stop.job_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    /// One route per input vehicle, in input order.
    pub routes: Vec<Route>,
    pub unassigned_jobs: Vec<Job>,
    #[serde(rename = "optimizationTime")]
    pub elapsed_time_ms: u64,
}

impl AssignmentResult {
    pub fn assigned_count(&self) -> usize {
        self.routes.iter().map(|route| route.stops.len()).sum()
    }
}

/// Input to the assignment entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub vehicles: Vec<Vehicle>,
    pub jobs: Vec<Job>,
}

impl Payload {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, RoutingError> {
        let payload: Payload = serde_json::from_str(text)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Reject duplicate identities before they reach the assigner.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let mut seen = HashSet::new();
        for vehicle in &self.vehicles {
            if !seen.insert(vehicle.id) {
                return Err(RoutingError::InvalidInput(format!(
                    "duplicate vehicle id {}",
                    vehicle.id
                )));
            }
        }

        seen.clear();
        for job in &self.jobs {
            if !seen.insert(job.id) {
                return Err(RoutingError::InvalidInput(format!("duplicate job id {}", job.id)));
            }
        }

        Ok(())
    }
}

/// Round to 2 decimal places for the reported totals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
