//! HTTP adapter for the external VRP solver.
//!
//! The payload goes out untouched and the solver's JSON comes back untouched;
//! this module only decides whether the exchange succeeded.

use serde_json::Value;

use crate::error::RoutingError;
use crate::traits::SolverBackend;

#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Endpoint accepting `POST {vehicles, jobs}`.
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolverClient {
    config: SolverConfig,
    client: reqwest::blocking::Client,
}

impl SolverClient {
    pub fn new(config: SolverConfig) -> Result<Self, RoutingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl SolverBackend for SolverClient {
    fn solve(&self, payload: &Value) -> Result<Value, RoutingError> {
        tracing::debug!(url = %self.config.url, "forwarding payload to solver");

        let response = self.client.post(&self.config.url).json(payload).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%status, body = %body, "solver rejected request");
            return Err(RoutingError::SolverUnavailable(format!("status {}: {}", status, body)));
        }

        response
            .json::<Value>()
            .map_err(|err| RoutingError::SolverUnavailable(format!("malformed response: {}", err)))
    }
}
