//! Runtime configuration from the environment.

use std::env;

use crate::error::RoutingError;
use crate::gateway::SolverConfig;
use crate::optimize::Strategy;
use crate::solver::{AssignOptions, DEFAULT_RADIUS_KM};

const DEFAULT_SOLVER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// External solver endpoint. Without it only the local heuristic runs.
    pub solver_url: Option<String>,
    pub solver_timeout_secs: u64,
    pub strategy: Strategy,
    pub radius_km: f64,
}

impl Config {
    /// Load configuration, reading `.env` first if present.
    pub fn from_env() -> Result<Self, RoutingError> {
        Self::from_env_with(|_| None)
    }

    /// Like `from_env`, but `overrides` is consulted before the environment.
    pub fn from_env_with<F>(overrides: F) -> Result<Self, RoutingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();
        Self::from_layers(overrides, |key| env::var(key).ok())
    }

    /// `overrides` first, then `fallback`, for every key.
    pub fn from_layers<O, F>(overrides: O, fallback: F) -> Result<Self, RoutingError>
    where
        O: Fn(&str) -> Option<String>,
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| overrides(key).or_else(|| fallback(key)))
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RoutingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let solver_url = lookup("ROUTER_SOLVER_URL").filter(|url| !url.trim().is_empty());

        let solver_timeout_secs = match lookup("ROUTER_SOLVER_TIMEOUT_SECS") {
            Some(raw) => parse_number("ROUTER_SOLVER_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_SOLVER_TIMEOUT_SECS,
        };

        let strategy = match lookup("ROUTER_STRATEGY") {
            Some(raw) => raw.parse()?,
            None if solver_url.is_some() => Strategy::SolverWithFallback,
            None => Strategy::Local,
        };

        let radius_km = match lookup("ROUTER_RADIUS_KM") {
            Some(raw) => parse_radius(&raw)?,
            None => DEFAULT_RADIUS_KM,
        };

        Ok(Self {
            solver_url,
            solver_timeout_secs,
            strategy,
            radius_km,
        })
    }

    pub fn solver(&self) -> Option<SolverConfig> {
        self.solver_url.as_ref().map(|url| SolverConfig {
            url: url.clone(),
            timeout_secs: self.solver_timeout_secs,
        })
    }

    pub fn assign_options(&self) -> AssignOptions {
        AssignOptions {
            radius_km: self.radius_km,
            ..AssignOptions::default()
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, RoutingError> {
    raw.trim()
        .parse()
        .map_err(|_| RoutingError::InvalidInput(format!("{} must be a number, got '{}'", key, raw)))
}

/// Radius must be a finite, positive distance; NaN would leave every job unreachable.
fn parse_radius(raw: &str) -> Result<f64, RoutingError> {
    let radius: f64 = parse_number("ROUTER_RADIUS_KM", raw)?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(RoutingError::InvalidInput(format!(
            "ROUTER_RADIUS_KM must be a positive number of km, got '{}'",
            raw
        )));
    }
    Ok(radius)
}
