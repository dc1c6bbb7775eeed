//! Salary Estimator console
//!
//! Terminal form client for the scoring service: collects the five employee
//! fields, submits them to POST /predict, and renders the estimate with its
//! monthly/weekly/hourly breakdown, or a per-branch error message.

mod client;
mod form;
mod render;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use client::{ScoringClient, ServiceStatus};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging to stderr; stdout belongs to the form.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = ScoringClient::from_env()?;

    println!("Texas State Employee Salary Estimator");
    println!("=====================================");
    match client.health().await {
        ServiceStatus::Healthy => println!("Scoring service: connected"),
        ServiceStatus::Degraded => println!("Scoring service: reachable, model not loaded"),
        ServiceStatus::Offline => {
            println!("Scoring service: offline ({})", client.base_url())
        }
    }

    loop {
        println!();
        let answers = form::prompt()?;

        match answers.into_request() {
            Err(e) => println!("\nValidation error: {e}"),
            Ok(request) => match client.predict(&request).await {
                Ok(annual) => println!("{}", render::render_success(&request, annual)),
                Err(error) => println!("\n{}", render::render_error(&error, client.base_url())),
            },
        }

        if !form::confirm("New prediction?")? {
            break;
        }
    }

    Ok(())
}
