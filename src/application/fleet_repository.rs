// Repository trait for fleet telemetry access
use crate::application::error::FleetError;
use crate::domain::telemetry::SamplePoint;
use crate::domain::trip::{Trip, TripWindow};
use crate::domain::vehicle::VehicleInfo;
use async_trait::async_trait;

#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// First vehicle whose name matches exactly, `None` when nothing matches
    async fn find_vehicle(&self, name: &str) -> Result<Option<VehicleInfo>, FleetError>;

    /// Trips for a vehicle inside the window, in the order the service returns them
    async fn list_trips(&self, vehicle_id: &str, window: TripWindow)
        -> Result<Vec<Trip>, FleetError>;

    /// Ambient temperature history for one sensor, missing samples kept as `None`
    async fn sensor_history(
        &self,
        sensor_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<SamplePoint>, FleetError>;
}
