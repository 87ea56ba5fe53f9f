// Samsara REST API repository implementation
use crate::application::error::FleetError;
use crate::application::fleet_repository::FleetRepository;
use crate::domain::telemetry::SamplePoint;
use crate::domain::trip::{Trip, TripWindow};
use crate::domain::vehicle::{AssignedDriver, TemperatureSensor, VehicleInfo};
use crate::infrastructure::config::SamsaraSettings;
use crate::infrastructure::credential::ApiCredential;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

const VEHICLES_ENDPOINT: &str = "vehicles";
const TRIPS_ENDPOINT: &str = "trips";
const HISTORY_ENDPOINT: &str = "sensor history";

#[derive(Debug, Clone)]
pub struct SamsaraRepository {
    client: Client,
    base_url: String,
    credential: ApiCredential,
    vehicle_page_limit: u32,
    history_step_ms: i64,
}

// Samsara sends some identifiers as strings and others as bare numbers
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

// Lists may arrive as explicit `null` instead of being left out
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct VehicleListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    data: Vec<VehicleRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default)]
    vin: Option<String>,
    #[serde(default)]
    static_assigned_driver: Option<DriverRecord>,
    #[serde(default)]
    sensor_configuration: Option<SensorConfigurationRecord>,
}

#[derive(Debug, Deserialize)]
struct DriverRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SensorConfigurationRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    areas: Vec<AreaRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AreaRecord {
    #[serde(default)]
    position: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    temperature_sensors: Vec<SensorRecord>,
}

#[derive(Debug, Deserialize)]
struct SensorRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TripListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    trips: Vec<TripRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripRecord {
    start_ms: i64,
    end_ms: i64,
    #[serde(default)]
    start_location: Option<String>,
    #[serde(default)]
    end_location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRequest<'a> {
    fill_missing: &'static str,
    series: Vec<HistorySeries<'a>>,
    step_ms: i64,
    start_ms: i64,
    end_ms: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistorySeries<'a> {
    field: &'static str,
    widget_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    results: Vec<HistoryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryResult {
    time_ms: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    series: Vec<Option<f64>>,
}

impl VehicleRecord {
    fn into_vehicle_info(self) -> VehicleInfo {
        let temperature_sensors = self
            .sensor_configuration
            .map(|config| config.areas)
            .unwrap_or_default()
            .into_iter()
            .flat_map(|area| {
                let position = area.position.unwrap_or_default();
                area.temperature_sensors.into_iter().map(move |sensor| {
                    TemperatureSensor::new(position.clone(), sensor.id.unwrap_or_default())
                })
            })
            .collect();

        VehicleInfo::new(
            self.id.unwrap_or_default(),
            self.vin.unwrap_or_default(),
            self.static_assigned_driver.map(|driver| AssignedDriver {
                id: driver.id,
                name: driver.name,
            }),
            temperature_sensors,
        )
    }
}

impl SamsaraRepository {
    pub fn new(
        client: Client,
        base_url: String,
        credential: ApiCredential,
        vehicle_page_limit: u32,
        history_step_ms: i64,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            vehicle_page_limit,
            history_step_ms,
        }
    }

    pub fn from_settings(settings: &SamsaraSettings, credential: ApiCredential) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self::new(
            client,
            settings.base_url.clone(),
            credential,
            settings.vehicle_page_limit,
            settings.history_step_ms,
        ))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, FleetError> {
        let response = request
            .header(AUTHORIZATION, self.credential.bearer())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FleetError::Transport {
                endpoint,
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "{} request failed with status code {}",
                endpoint,
                status.as_u16()
            );
            return Err(FleetError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FleetError::Decode {
            endpoint,
            source: Box::new(e),
        })
    }
}

#[async_trait]
impl FleetRepository for SamsaraRepository {
    async fn find_vehicle(&self, name: &str) -> Result<Option<VehicleInfo>, FleetError> {
        let request = self
            .client
            .get(self.url("/fleet/vehicles"))
            .query(&[("limit", self.vehicle_page_limit)]);
        let listing: VehicleListResponse = self.execute(VEHICLES_ENDPOINT, request).await?;

        tracing::debug!("Scanning {} vehicles for {}", listing.data.len(), name);
        Ok(listing
            .data
            .into_iter()
            .find(|vehicle| vehicle.name.as_deref() == Some(name))
            .map(VehicleRecord::into_vehicle_info))
    }

    async fn list_trips(
        &self,
        vehicle_id: &str,
        window: TripWindow,
    ) -> Result<Vec<Trip>, FleetError> {
        let request = self.client.get(self.url("/v1/fleet/trips")).query(&[
            ("vehicleId", vehicle_id.to_string()),
            ("startMs", window.start_ms.to_string()),
            ("endMs", window.end_ms.to_string()),
        ]);
        let listing: TripListResponse = self.execute(TRIPS_ENDPOINT, request).await?;

        Ok(listing
            .trips
            .into_iter()
            .map(|trip| {
                Trip::new(
                    trip.start_ms,
                    trip.end_ms,
                    trip.start_location.unwrap_or_default(),
                    trip.end_location.unwrap_or_default(),
                )
            })
            .collect())
    }

    async fn sensor_history(
        &self,
        sensor_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<SamplePoint>, FleetError> {
        let body = HistoryRequest {
            fill_missing: "withNull",
            series: vec![HistorySeries {
                field: "ambientTemperature",
                widget_id: sensor_id,
            }],
            step_ms: self.history_step_ms,
            start_ms,
            end_ms,
        };
        let request = self.client.post(self.url("/v1/sensors/history")).json(&body);
        let history: HistoryResponse = self.execute(HISTORY_ENDPOINT, request).await?;

        Ok(history
            .results
            .into_iter()
            .map(|result| {
                let raw = result.series.first().copied().flatten();
                SamplePoint::from_milli_celsius(result.time_ms, raw)
            })
            .collect())
    }
}
