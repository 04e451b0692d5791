//! Test fixtures for fleet-router.
//!
//! Provides real Stockholm-region locations and payload builders.

#![allow(dead_code)]

pub mod stockholm_locations;

pub use stockholm_locations::*;

use fleet_router::{Job, Vehicle};

/// Vehicle that starts and ends at the same place.
pub fn vehicle_at(id: i64, location: &Location) -> Vehicle {
    Vehicle {
        id,
        description: format!("Vehicle from {}", location.name),
        start: location.coord(),
        end: location.coord(),
    }
}

/// Jobs numbered from `first_id` in the given order.
pub fn jobs_at(first_id: i64, locations: &[Location]) -> Vec<Job> {
    locations
        .iter()
        .enumerate()
        .map(|(i, location)| Job {
            id: first_id + i as i64,
            description: location.name.to_string(),
            location: location.coord(),
        })
        .collect()
}
