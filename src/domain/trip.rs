// Trip domain model
use chrono::{DateTime, Utc};
use std::fmt;

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Absolute request window in milliseconds since the epoch, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TripWindow {
    /// Window ending at `now` and reaching back `days` whole days
    pub fn lookback(now: DateTime<Utc>, days: u32) -> Self {
        let end_ms = now.timestamp_millis();
        Self {
            start_ms: end_ms - i64::from(days) * MS_PER_DAY,
            end_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_ms: i64,
    pub end_ms: i64,
    pub start_location: String,
    pub end_location: String,
}

impl Trip {
    pub fn new(start_ms: i64, end_ms: i64, start_location: String, end_location: String) -> Self {
        Self {
            start_ms,
            end_ms,
            start_location,
            end_location,
        }
    }
}

/// Formats epoch milliseconds as a UTC timestamp, falling back to the raw value
pub fn format_utc_ms(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{ms} ms"),
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Start: {} at {}",
            format_utc_ms(self.start_ms),
            self.start_location
        )?;
        write!(f, "End: {} at {}", format_utc_ms(self.end_ms), self.end_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_lookback_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let window = TripWindow::lookback(now, 3);

        assert_eq!(window.end_ms, now.timestamp_millis());
        assert_eq!(window.start_ms, now.timestamp_millis() - 3 * 86_400_000);
    }

    #[test]
    fn test_trip_display() {
        let trip = Trip::new(
            1_700_000_000_000,
            1_700_000_600_000,
            "Depot".to_string(),
            "Store 9".to_string(),
        );
        assert_eq!(
            trip.to_string(),
            "Start: 2023-11-14 22:13:20 at Depot\nEnd: 2023-11-14 22:23:20 at Store 9"
        );
    }
}
