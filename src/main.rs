// Main entry point - Dependency wiring and report run
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use crate::application::ports::ReportInput;
use crate::application::report_service::ReportService;
use crate::infrastructure::config::load_fleet_config;
use crate::infrastructure::credential::ApiCredential;
use crate::infrastructure::samsara_repository::SamsaraRepository;
use crate::infrastructure::svg_chart_sink::SvgChartSink;
use crate::presentation::outcome::report_outcome;
use crate::presentation::prompt::TerminalInput;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so the report on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_fleet_config().context("Failed to load configuration")?;
    let credential = ApiCredential::from_settings(&config.samsara)?;

    // Create repository and chart sink (infrastructure layer)
    let repository = Arc::new(SamsaraRepository::from_settings(&config.samsara, credential)?);
    let sink = Arc::new(SvgChartSink::new(
        config.charts.output_dir.clone(),
        config.charts.width,
        config.charts.height,
    ));

    // Create service (application layer)
    let service = ReportService::new(repository, sink);

    let request = TerminalInput::stdio().read_request()?;

    let outcome = report_outcome(service.run(&request, Utc::now()).await)?;
    Ok(outcome.exit_code())
}
