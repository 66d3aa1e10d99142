//! Fastest-wind reports over one grid or the whole data directory.

use crate::grid_store::{list_grids, load_grid};
use jetstream_core::azimuth::chart_longitude;
use jetstream_core::{fastest_wind, LatitudeBand, SpeedUnit, WindGrid};
use std::path::Path;

pub const CSV_HEADER: &str = "date,level,speed,units,azimuth,latitude,longitude";

/// Jet stream latitude bands searched at each level when scanning every grid.
pub fn level_bands(level_hpa: u32) -> Vec<LatitudeBand> {
    let mid = LatitudeBand::new(Some(35.0), Some(60.0));
    let subtropical = LatitudeBand::new(Some(25.0), Some(35.0));
    match level_hpa {
        250 => vec![mid],
        200 => vec![mid, subtropical],
        150 => vec![subtropical],
        _ => Vec::new(),
    }
}

/// One CSV row for the strongest sample in `band`, or `None` when the band holds no wind.
pub fn fastest_row(
    grid: &WindGrid,
    date: &str,
    level_hpa: u32,
    band: LatitudeBand,
    units: SpeedUnit,
) -> Option<String> {
    let best = fastest_wind(grid, band)?;
    Some(format!(
        "{date},{level_hpa},{:.2},{},{:.1},{},{}",
        units.from_mps(best.wind.magnitude_mps),
        units.code(),
        best.wind.azimuth_deg,
        best.lat,
        chart_longitude(f64::from(best.lon)),
    ))
}

/// Rows for every grid in `data_dir` using the per-level bands.
pub fn scan_data_dir(data_dir: &Path, units: SpeedUnit) -> anyhow::Result<Vec<String>> {
    let mut rows = Vec::new();
    for file in list_grids(data_dir)? {
        let bands = level_bands(file.level_hpa);
        if bands.is_empty() {
            tracing::debug!(date = %file.date, level = file.level_hpa, "no bands for level");
            continue;
        }
        let grid = load_grid(data_dir, &file.date, file.level_hpa)?;
        for band in bands {
            match fastest_row(&grid, &file.date, file.level_hpa, band, units) {
                Some(row) => rows.push(row),
                None => tracing::warn!(date = %file.date, level = file.level_hpa, ?band, "no wind in band"),
            }
        }
    }
    Ok(rows)
}
