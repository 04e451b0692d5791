//! Solver gateway against a real HTTP endpoint.
//!
//! Runs an echo server in a container standing in for the solver, so the
//! exact bytes the gateway forwards can be inspected. Needs docker.

mod fixtures;

use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, TestcontainersError};

use fleet_router::gateway::{SolverClient, SolverConfig};
use fleet_router::traits::SolverBackend;
use fleet_router::{optimize, AssignOptions, Optimization, RoutingError, Strategy};

const ECHO_PORT: u16 = 8080;

fn echo_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let image = GenericImage::new("mendhak/http-https-echo", "31")
        .with_exposed_port(ECHO_PORT.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Listening on ports"))
        .with_startup_timeout(std::time::Duration::from_secs(60));

    let container = image.start()?;
    let port = container.get_host_port_ipv4(ECHO_PORT.tcp())?;
    let url = format!("http://127.0.0.1:{}/", port);

    Ok((container, url))
}

fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "vehicles": [fixtures::vehicle_at(1, &fixtures::CENTRAL_STATION)],
        "jobs": fixtures::jobs_at(1, fixtures::CITY_JOBS),
    })
}

#[test]
#[ignore = "requires docker"]
fn gateway_forwards_payload_verbatim() {
    let (_container, url) = echo_container().expect("start echo container");
    let client = SolverClient::new(SolverConfig { url, timeout_secs: 10 }).expect("build solver client");

    let payload = sample_payload();
    let response = client.solve(&payload).expect("solver call");

    assert_eq!(response["method"], "POST");
    assert_eq!(response["json"], payload);
}

#[test]
#[ignore = "requires docker"]
fn auto_strategy_returns_solver_response() {
    let (_container, url) = echo_container().expect("start echo container");
    let client = SolverClient::new(SolverConfig { url, timeout_secs: 10 }).expect("build solver client");

    let result = optimize(
        &sample_payload(),
        Strategy::SolverWithFallback,
        Some(&client),
        &AssignOptions::default(),
    )
    .expect("optimize");

    assert!(matches!(result, Optimization::Solver(_)));
}

#[test]
fn auto_strategy_falls_back_when_solver_is_down() {
    let client = SolverClient::new(SolverConfig {
        url: "http://127.0.0.1:9/".to_string(),
        timeout_secs: 2,
    })
    .expect("build solver client");

    let direct = optimize(&sample_payload(), Strategy::Solver, Some(&client), &AssignOptions::default());
    assert!(matches!(direct, Err(RoutingError::SolverUnavailable(_))));

    let result = optimize(
        &sample_payload(),
        Strategy::SolverWithFallback,
        Some(&client),
        &AssignOptions::default(),
    )
    .expect("fallback never fails");

    match result {
        Optimization::Local(local) => assert_eq!(local.assigned_count(), fixtures::CITY_JOBS.len()),
        other => panic!("expected local fallback, got {:?}", other),
    }
}
