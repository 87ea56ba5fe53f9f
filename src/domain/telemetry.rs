// Telemetry data domain models

pub const TIME_AXIS_LABEL: &str = "Time";
pub const TEMPERATURE_AXIS_LABEL: &str = "Temperature (°C)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub time_ms: i64,
    pub celsius: Option<f64>,
}

impl SamplePoint {
    pub fn new(time_ms: i64, celsius: Option<f64>) -> Self {
        Self { time_ms, celsius }
    }

    /// Builds a point from a raw milli-degree reading; a missing reading stays missing
    pub fn from_milli_celsius(time_ms: i64, raw: Option<f64>) -> Self {
        Self::new(time_ms, raw.map(|milli| milli / 1000.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorSeries {
    pub label: String,
    pub points: Vec<SamplePoint>,
}

impl SensorSeries {
    pub fn new(label: String, points: Vec<SamplePoint>) -> Self {
        Self { label, points }
    }

    /// Runs of consecutive present readings, split wherever a sample is missing
    pub fn segments(&self) -> Vec<Vec<(i64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for point in &self.points {
            match point.celsius {
                Some(value) => current.push((point.time_ms, value)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripChart {
    pub trip_number: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SensorSeries>,
}

impl TripChart {
    /// `trip_number` is 1-based
    pub fn for_trip(trip_number: usize, series: Vec<SensorSeries>) -> Self {
        Self {
            trip_number,
            title: format!("Temperature Sensor History for Trip {trip_number}"),
            x_label: TIME_AXIS_LABEL.to_string(),
            y_label: TEMPERATURE_AXIS_LABEL.to_string(),
            series,
        }
    }

    pub fn time_range(&self) -> Option<(i64, i64)> {
        let mut times = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.time_ms));
        let first = times.next()?;
        Some(times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().filter_map(|p| p.celsius));
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
