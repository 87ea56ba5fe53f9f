// Final report outcome and process exit status
use crate::application::error::ReportError;
use crate::application::report_service::ReportSummary;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    VehicleNotFound,
    /// The failure was already logged where it happened
    FailureLogged,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Completed | Outcome::VehicleNotFound => ExitCode::SUCCESS,
            Outcome::FailureLogged => ExitCode::FAILURE,
        }
    }
}

/// Errors not yet reported anywhere are handed back so `main` surfaces them
pub fn report_outcome(result: Result<ReportSummary, ReportError>) -> anyhow::Result<Outcome> {
    match result {
        Ok(summary) => {
            tracing::info!(
                "Rendered {} charts for {} trips of vehicle {}",
                summary.chart_paths.len(),
                summary.trip_count,
                summary.vehicle.id
            );
            Ok(Outcome::Completed)
        }
        Err(ReportError::VehicleNotFound(_)) => {
            println!("Vehicle not found.");
            Ok(Outcome::VehicleNotFound)
        }
        Err(ReportError::Fleet(e)) if e.status_code().is_some() => Ok(Outcome::FailureLogged),
        Err(e) => Err(e.into()),
    }
}
