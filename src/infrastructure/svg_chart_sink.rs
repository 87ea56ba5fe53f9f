// SVG chart export for trip temperature histories
use crate::application::ports::ChartSink;
use crate::domain::telemetry::TripChart;
use crate::domain::trip::format_utc_ms;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const EMPTY_TIME_PAD_MS: f64 = 60_000.0;

#[derive(Debug, Clone)]
pub struct SvgChartSink {
    output_dir: PathBuf,
    width: u32,
    height: u32,
}

impl SvgChartSink {
    pub fn new(output_dir: PathBuf, width: u32, height: u32) -> Self {
        Self {
            output_dir,
            width,
            height,
        }
    }

    pub fn chart_path(&self, vehicle_name: &str, trip_number: usize) -> PathBuf {
        let stem: String = vehicle_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.output_dir
            .join(format!("{stem}-trip-{trip_number}.svg"))
    }

    fn draw(&self, path: &Path, chart: &TripChart) -> Result<()> {
        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_min, x_max) = time_axis(chart);
        let (y_min, y_max) = value_axis(chart);

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(6)
            .x_label_formatter(&|ms| clock_label(*ms))
            .y_label_formatter(&|v| format!("{v:.1}"))
            .draw()?;

        for (idx, series) in chart.series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let segments = series.segments();

            // Keep a legend entry for sensors that reported nothing
            if segments.is_empty() {
                ctx.draw_series(LineSeries::new(
                    std::iter::empty::<(f64, f64)>(),
                    color.stroke_width(2),
                ))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
                continue;
            }

            for (n, segment) in segments.iter().enumerate() {
                let anno = ctx.draw_series(LineSeries::new(
                    segment.iter().map(|&(t, v)| (t as f64, v)),
                    color.stroke_width(2),
                ))?;
                if n == 0 {
                    anno.label(series.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
                }
            }
        }

        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

fn time_axis(chart: &TripChart) -> (f64, f64) {
    match chart.time_range() {
        Some((lo, hi)) if lo < hi => (lo as f64, hi as f64),
        Some((t, _)) => (t as f64 - EMPTY_TIME_PAD_MS, t as f64 + EMPTY_TIME_PAD_MS),
        None => (0.0, EMPTY_TIME_PAD_MS),
    }
}

fn value_axis(chart: &TripChart) -> (f64, f64) {
    match chart.value_range() {
        Some((lo, hi)) => {
            let pad = ((hi - lo) * 0.05).max(0.5);
            (lo - pad, hi + pad)
        }
        None => (0.0, 1.0),
    }
}

fn clock_label(ms: f64) -> String {
    let full = format_utc_ms(ms as i64);
    // HH:MM of the "YYYY-MM-DD HH:MM:SS" form
    full.get(11..16).map(str::to_string).unwrap_or(full)
}

impl ChartSink for SvgChartSink {
    fn render(&self, vehicle_name: &str, chart: &TripChart) -> Result<Option<PathBuf>> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create chart directory {}",
                self.output_dir.display()
            )
        })?;

        let path = self.chart_path(vehicle_name, chart.trip_number);
        self.draw(&path, chart)
            .with_context(|| format!("Failed to draw {}", path.display()))?;

        tracing::debug!("Wrote {}", path.display());
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{SamplePoint, SensorSeries};

    fn sample_chart() -> TripChart {
        TripChart::for_trip(
            3,
            vec![
                SensorSeries::new(
                    "front sensor".to_string(),
                    vec![
                        SamplePoint::new(1_709_100_000_000, Some(4.0)),
                        SamplePoint::new(1_709_100_060_000, None),
                        SamplePoint::new(1_709_100_120_000, Some(4.5)),
                    ],
                ),
                SensorSeries::new("rear sensor".to_string(), Vec::new()),
            ],
        )
    }

    #[test]
    fn test_chart_path_is_sanitized() {
        let sink = SvgChartSink::new(PathBuf::from("charts"), 800, 600);
        assert_eq!(
            sink.chart_path("Truck 12/A", 2),
            PathBuf::from("charts/Truck_12_A-trip-2.svg")
        );
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(dir.path().join("nested"), 800, 600);

        let path = sink.render("Truck-12", &sample_chart()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("nested").join("Truck-12-trip-3.svg"));

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Temperature Sensor History for Trip 3"));
        assert!(svg.contains("front sensor"));
        assert!(svg.contains("rear sensor"));
    }

    #[test]
    fn test_render_chart_without_data() {
        let dir = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(dir.path().to_path_buf(), 640, 480);
        let chart = TripChart::for_trip(1, vec![SensorSeries::new("front sensor".to_string(), Vec::new())]);

        let path = sink.render("Truck-12", &chart).unwrap().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_axes_are_padded() {
        let chart = sample_chart();
        assert_eq!(time_axis(&chart), (1_709_100_000_000.0, 1_709_100_120_000.0));
        assert_eq!(value_axis(&chart), (3.5, 5.0));
        assert_eq!(clock_label(1_709_100_000_000.0), "06:00");
    }
}
