//! Search a wind grid for its strongest sample.

use crate::wind::{WindGrid, WindSample};
use serde::{Deserialize, Serialize};

/// Absolute-latitude band, inclusive at both ends. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatitudeBand {
    pub min_abs_lat: Option<f64>,
    pub max_abs_lat: Option<f64>,
}

impl LatitudeBand {
    pub fn new(min_abs_lat: Option<f64>, max_abs_lat: Option<f64>) -> Self {
        Self {
            min_abs_lat,
            max_abs_lat,
        }
    }

    pub fn contains(&self, lat: f64) -> bool {
        let lat = lat.abs();
        self.min_abs_lat.map_or(true, |min| lat >= min)
            && self.max_abs_lat.map_or(true, |max| lat <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastestWind {
    pub lat: i32,
    /// Grid convention, [0, 360).
    pub lon: i32,
    pub wind: WindSample,
}

/// Strongest non-calm sample inside `band`. The first sample wins ties.
pub fn fastest_wind(grid: &WindGrid, band: LatitudeBand) -> Option<FastestWind> {
    let mut best: Option<FastestWind> = None;

    for sample in grid.samples() {
        if !band.contains(f64::from(sample.lat)) {
            continue;
        }
        let wind = sample.wind();
        let current = best.map_or(0.0, |b| b.wind.magnitude_mps);
        if wind.magnitude_mps > current {
            best = Some(FastestWind {
                lat: sample.lat,
                lon: sample.lon,
                wind,
            });
        }
    }

    best
}
