// Collaborators at the edges of the report pipeline
use crate::domain::telemetry::TripChart;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub vehicle_name: String,
    pub lookback_days: u32,
}

/// Source of the vehicle name and lookback window
pub trait ReportInput {
    fn read_request(&mut self) -> anyhow::Result<ReportRequest>;
}

/// Destination for finished trip charts
pub trait ChartSink: Send + Sync {
    /// Returns where the chart ended up, if it was written anywhere
    fn render(&self, vehicle_name: &str, chart: &TripChart) -> anyhow::Result<Option<PathBuf>>;
}
