//! Command-line entry point: reads `{vehicles, jobs}` documents and prints
//! one optimization result per line.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use fleet_router::config::Config;
use fleet_router::gateway::SolverClient;
use fleet_router::solver::AssignOptions;
use fleet_router::traits::SolverBackend;
use fleet_router::{optimize_str, Strategy};

#[derive(Parser, Debug)]
#[command(name = "fleet-router", about = "Assign jobs to vehicles")]
struct Cli {
    /// Payload files; `-` or none reads stdin.
    inputs: Vec<PathBuf>,

    /// local, solver or auto (solver with local fallback).
    #[arg(long)]
    strategy: Option<Strategy>,

    /// External solver endpoint.
    #[arg(long)]
    solver_url: Option<String>,

    /// Solver request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env_with(|key| match key {
        "ROUTER_SOLVER_URL" => cli.solver_url.clone(),
        "ROUTER_SOLVER_TIMEOUT_SECS" => cli.timeout_secs.map(|secs| secs.to_string()),
        "ROUTER_STRATEGY" => cli.strategy.map(|strategy| strategy.to_string()),
        _ => None,
    })
    .context("failed to load configuration")?;

    let client = config
        .solver()
        .map(SolverClient::new)
        .transpose()
        .context("failed to build solver client")?;
    let backend = client.as_ref().map(|client| client as &(dyn SolverBackend + Sync));
    let options = config.assign_options();

    tracing::info!(strategy = %config.strategy, solver = ?config.solver_url, "starting");

    let documents = read_inputs(&cli.inputs)?;

    let outputs = process_documents(&documents, config.strategy, backend, &options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;
    for (name, output) in outputs {
        match output {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(err) => {
                failed += 1;
                tracing::error!(document = %name, error = %format!("{:#}", err), "document skipped");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} documents failed", failed, documents.len());
    }

    Ok(())
}

/// Optimize every document in parallel; results keep the input order.
fn process_documents(
    documents: &[(String, String)],
    strategy: Strategy,
    backend: Option<&(dyn SolverBackend + Sync)>,
    options: &AssignOptions,
) -> Vec<(String, Result<String>)> {
    documents
        .par_iter()
        .map(|(name, text)| {
            let output = optimize_str(text, strategy, backend.map(|b| b as &dyn SolverBackend), options)
                .with_context(|| format!("optimization failed for {}", name))
                .and_then(|result| Ok(serde_json::to_string(&result)?));
            (name.clone(), output)
        })
        .collect()
}

fn read_inputs(inputs: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if inputs.is_empty() {
        return Ok(vec![("stdin".to_string(), read_stdin()?)]);
    }

    inputs
        .iter()
        .map(|path| -> Result<(String, String)> {
            if path.as_os_str() == "-" {
                return Ok(("stdin".to_string(), read_stdin()?));
            }
            let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        })
        .collect()
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
    Ok(text)
}
