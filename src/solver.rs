//! Greedy nearest-neighbor assignment (baseline heuristic).
//!
//! Vehicles are served strictly in input order. Each one repeatedly claims
//! the closest unclaimed job within reach of its current position, so
//! earlier vehicles get first pick of the shared pool.

use std::time::Instant;

use crate::haversine::Haversine;
use crate::models::{round2, AssignmentResult, Coordinate, Job, Route, Stop, Vehicle};
use crate::traits::DistanceMetric;

/// Maximum reach from the current position, km.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Fixed travel-time rate, minutes per km.
pub const DEFAULT_MINUTES_PER_KM: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct AssignOptions {
    /// Jobs at or beyond this distance from the current position are skipped.
    pub radius_km: f64,
    /// Linear travel-time proxy.
    pub minutes_per_km: f64,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            minutes_per_km: DEFAULT_MINUTES_PER_KM,
        }
    }
}

/// Jobs shared across the vehicles of one assignment pass.
///
/// Claimed jobs are flagged rather than removed, so the unclaimed ones keep
/// their input order.
#[derive(Debug, Clone)]
pub struct JobPool {
    jobs: Vec<Job>,
    claimed: Vec<bool>,
    remaining: usize,
}

impl JobPool {
    pub fn new(jobs: Vec<Job>) -> Self {
        let remaining = jobs.len();
        Self {
            claimed: vec![false; remaining],
            jobs,
            remaining,
        }
    }

    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Unclaimed jobs with their pool index, in input order.
    pub fn remaining(&self) -> impl Iterator<Item = (usize, &Job)> + '_ {
        self.jobs
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.claimed[*idx])
    }

    /// Mark a job as taken. Returns `None` if it was already claimed.
    pub fn claim(&mut self, idx: usize) -> Option<&Job> {
        if self.claimed.get(idx).copied().unwrap_or(true) {
            return None;
        }
        self.claimed[idx] = true;
        self.remaining -= 1;
        Some(&self.jobs[idx])
    }

    /// Unclaimed jobs, in input order.
    pub fn into_unassigned(self) -> Vec<Job> {
        self.jobs
            .into_iter()
            .zip(self.claimed)
            .filter_map(|(job, claimed)| (!claimed).then_some(job))
            .collect()
    }
}

/// Build one vehicle's route, claiming jobs from the shared pool.
///
/// The closing leg to `vehicle.end` is not counted in the totals.
pub fn build_route<M>(vehicle: &Vehicle, pool: &mut JobPool, metric: &M, options: &AssignOptions) -> Route
where
    M: DistanceMetric,
{
    let mut current = vehicle.start;
    let mut stops = Vec::new();
    let mut total_distance = 0.0;
    let mut total_time = 0.0;

    while let Some((idx, leg_distance)) = nearest_in_range(current, pool, metric, options.radius_km) {
        let Some(job) = pool.claim(idx) else {
            break;
        };

        let leg_time = leg_distance * options.minutes_per_km;
        total_distance += leg_distance;
        total_time += leg_time;
        current = job.location;

        stops.push(Stop {
            job_id: job.id,
            job_description: job.description.clone(),
            location: job.location,
            leg_distance_km: leg_distance,
            leg_time_min: leg_time,
        });
    }

    tracing::debug!(
        vehicle_id = vehicle.id,
        stops = stops.len(),
        distance_km = total_distance,
        "route built"
    );

    Route {
        vehicle_id: vehicle.id,
        vehicle_description: vehicle.description.clone(),
        stops,
        total_distance_km: round2(total_distance),
        total_time_min: round2(total_time),
    }
}

/// Closest unclaimed job strictly inside `radius_km` of `from`.
///
/// Ties go to the earliest job in pool order. NaN distances never compare
/// below the radius, so such jobs are never picked.
fn nearest_in_range<M>(from: Coordinate, pool: &JobPool, metric: &M, radius_km: f64) -> Option<(usize, f64)>
where
    M: DistanceMetric,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, job) in pool.remaining() {
        let d = metric.distance_km(from, job.location);
        let in_range = d < radius_km;
        if !in_range {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best
}

/// Assign jobs to vehicles with haversine distances and default options.
pub fn assign(vehicles: &[Vehicle], jobs: &[Job]) -> AssignmentResult {
    assign_with(vehicles, jobs, &Haversine, &AssignOptions::default())
}

/// Assign jobs to vehicles, one route per vehicle in input order.
pub fn assign_with<M>(vehicles: &[Vehicle], jobs: &[Job], metric: &M, options: &AssignOptions) -> AssignmentResult
where
    M: DistanceMetric,
{
    let started = Instant::now();
    let mut pool = JobPool::new(jobs.to_vec());

    let routes: Vec<Route> = vehicles
        .iter()
        .map(|vehicle| build_route(vehicle, &mut pool, metric, options))
        .collect();

    let unassigned_jobs = pool.into_unassigned();
    let elapsed_time_ms = started.elapsed().as_millis() as u64;

    tracing::info!(
        vehicles = vehicles.len(),
        jobs = jobs.len(),
        unassigned = unassigned_jobs.len(),
        elapsed_ms = elapsed_time_ms,
        "local assignment finished"
    );

    AssignmentResult {
        routes,
        unassigned_jobs,
        elapsed_time_ms,
    }
}
