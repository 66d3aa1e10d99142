//! Recorded flight vs. predicted flight time through a wind grid.

use crate::grid_store::load_grid;
use anyhow::Context;
use chrono::Duration;
use jetstream_core::{
    extract_flight_window, integrate_trail, FlightWindow, SpeedUnit, Wgs84Geodesic,
    WindImpactConfig, WindImpactReport,
};
use jetstream_kml::{format_hms, parse_flight, write_flight_analysis, AnalysisOptions};
use std::path::Path;

/// Pressure levels with published wind grids, hPa.
pub const FLIGHT_LEVELS_HPA: &[u32] = &[300, 250, 200, 150, 50];

#[derive(Debug, Clone)]
pub struct FlightAnalysis {
    /// Takeoff date, `YYYY-MM-DD`.
    pub date: String,
    pub window: FlightWindow,
    pub report: WindImpactReport,
    /// Annotated KML document.
    pub kml: String,
}

impl FlightAnalysis {
    pub fn actual_duration(&self) -> Duration {
        self.window.duration()
    }
}

/// Parse a recorded flight, load the grid for its takeoff date and annotate every trail segment.
pub fn analyse_flight(
    xml: &str,
    data_dir: &Path,
    level_hpa: u32,
    config: &WindImpactConfig,
    units: SpeedUnit,
) -> anyhow::Result<FlightAnalysis> {
    let track = parse_flight(xml).context("cannot read flight KML")?;
    let window = extract_flight_window(&track.route).context("cannot find takeoff and landing")?;
    let date = window.takeoff.format("%Y-%m-%d").to_string();
    let actual = format_hms(window.duration().num_milliseconds() as f64 / 1000.0);
    tracing::info!(%date, actual = %actual, "flight window");

    let grid = load_grid(data_dir, &date, level_hpa)?;
    let report = integrate_trail(&track.trail, &grid, &Wgs84Geodesic::new(), config)
        .context("cannot integrate trail through wind grid")?;
    tracing::info!(
        predicted = %format_hms(report.total_duration_s),
        segments = report.annotations.len(),
        skipped = report.skipped.len(),
        "predicted flight time"
    );

    let title = format!(
        "{} - {date} - Actual Flight Time: {actual}",
        track.name.as_deref().unwrap_or("Unnamed flight")
    );
    let kml = write_flight_analysis(&report, &AnalysisOptions::new(title, units));

    Ok(FlightAnalysis {
        date,
        window,
        report,
        kml,
    })
}
