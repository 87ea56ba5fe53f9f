// Report service - Vehicle lookup, trip listing and per-trip chart assembly
use crate::application::error::ReportError;
use crate::application::fleet_repository::FleetRepository;
use crate::application::ports::{ChartSink, ReportRequest};
use crate::domain::telemetry::{SensorSeries, TripChart};
use crate::domain::trip::{Trip, TripWindow};
use crate::domain::vehicle::VehicleInfo;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub vehicle: VehicleInfo,
    pub trip_count: usize,
    pub chart_paths: Vec<PathBuf>,
}

#[derive(Clone)]
pub struct ReportService {
    repository: Arc<dyn FleetRepository>,
    sink: Arc<dyn ChartSink>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn FleetRepository>, sink: Arc<dyn ChartSink>) -> Self {
        Self { repository, sink }
    }

    pub async fn run(
        &self,
        request: &ReportRequest,
        now: DateTime<Utc>,
    ) -> Result<ReportSummary, ReportError> {
        let vehicle = self.resolve_vehicle(&request.vehicle_name).await?;
        println!("{vehicle}");

        let trips = self.list_trips(&vehicle, request.lookback_days, now).await?;
        tracing::info!(
            "Found {} trips for {} in the last {} days",
            trips.len(),
            request.vehicle_name,
            request.lookback_days
        );

        let mut chart_paths = Vec::new();
        for (index, trip) in trips.iter().enumerate() {
            let trip_number = index + 1;
            println!("Trip {trip_number}:\n{trip}");

            let chart = self.build_chart(&vehicle, trip_number, trip).await;
            let written = self
                .sink
                .render(&request.vehicle_name, &chart)
                .map_err(|e| ReportError::Chart {
                    trip_number,
                    source: e.into(),
                })?;
            if let Some(path) = written {
                println!("Chart saved to {}", path.display());
                chart_paths.push(path);
            }
        }

        Ok(ReportSummary {
            vehicle,
            trip_count: trips.len(),
            chart_paths,
        })
    }

    pub async fn resolve_vehicle(&self, name: &str) -> Result<VehicleInfo, ReportError> {
        self.repository
            .find_vehicle(name)
            .await?
            .ok_or_else(|| ReportError::VehicleNotFound(name.to_string()))
    }

    pub async fn list_trips(
        &self,
        vehicle: &VehicleInfo,
        lookback_days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Trip>, ReportError> {
        if lookback_days == 0 {
            return Err(ReportError::InvalidLookback(0));
        }

        let window = TripWindow::lookback(now, lookback_days);
        Ok(self.repository.list_trips(&vehicle.id, window).await?)
    }

    /// One line per vehicle sensor; a sensor whose history cannot be fetched gets an empty line
    pub async fn build_chart(&self, vehicle: &VehicleInfo, trip_number: usize, trip: &Trip) -> TripChart {
        let mut series = Vec::with_capacity(vehicle.temperature_sensors.len());

        for sensor in &vehicle.temperature_sensors {
            let points = match self
                .repository
                .sensor_history(&sensor.sensor_id, trip.start_ms, trip.end_ms)
                .await
            {
                Ok(points) => points,
                // Status failures were already logged with their code by the repository
                Err(e) if e.status_code().is_some() => {
                    tracing::warn!(
                        "Skipping {} sensor ({}) on trip {}",
                        sensor.position,
                        sensor.sensor_id,
                        trip_number
                    );
                    Vec::new()
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping {} sensor ({}) on trip {}: {}",
                        sensor.position,
                        sensor.sensor_id,
                        trip_number,
                        e
                    );
                    Vec::new()
                }
            };

            tracing::debug!(
                "Trip {} sensor {}: {} samples",
                trip_number,
                sensor.sensor_id,
                points.len()
            );
            series.push(SensorSeries::new(sensor.label(), points));
        }

        TripChart::for_trip(trip_number, series)
    }
}
