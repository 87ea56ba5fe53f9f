// Error taxonomy for fleet access and report generation
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("{endpoint} request failed with status code {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("{endpoint} request could not be completed")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("{endpoint} response could not be decoded")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: BoxError,
    },
}

impl FleetError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FleetError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("lookback must be a positive number of days, got {0}")]
    InvalidLookback(i64),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("failed to render chart for trip {trip_number}")]
    Chart {
        trip_number: usize,
        #[source]
        source: BoxError,
    },
}
