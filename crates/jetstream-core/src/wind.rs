//! Wind vector samples and nearest-neighbour grid lookup.

use crate::azimuth::normalize_azimuth;
use crate::error::{CoreError, Result};
use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source of gridded wind components.
///
/// Cells are keyed by integer latitude and integer longitude in [0, 360).
pub trait WindSampler {
    /// Returns `(u, v)` in m/s: u positive toward east, v positive toward north.
    fn lookup(&self, lat: i32, lon: i32) -> Result<(f64, f64)>;
}

/// Compass bearing of the wind vector `(u, v)`, degrees in [0, 360).
///
/// This is the direction the air is moving toward, not the meteorological "from" direction.
pub fn wind_azimuth(u: f64, v: f64) -> f64 {
    normalize_azimuth(90.0 - v.atan2(u).to_degrees())
}

/// Wind speed and direction at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub magnitude_mps: f64,
    pub azimuth_deg: f64,
}

impl WindSample {
    pub fn from_components(u: f64, v: f64) -> Self {
        Self {
            magnitude_mps: u.hypot(v),
            azimuth_deg: wind_azimuth(u, v),
        }
    }

    pub fn calm() -> Self {
        Self {
            magnitude_mps: 0.0,
            azimuth_deg: 0.0,
        }
    }
}

/// Grid cell nearest to `point`: each coordinate rounded independently, longitude re-based to
/// the grid's [0, 360) convention.
pub fn grid_cell(point: GeoPoint) -> (i32, i32) {
    let lat = point.lat.round() as i32;
    let lon = (point.lon.round() as i32).rem_euclid(360);
    (lat, lon)
}

/// Nearest-neighbour wind sample at `point`. No interpolation between cells.
pub fn sample_at<S: WindSampler + ?Sized>(sampler: &S, point: GeoPoint) -> Result<WindSample> {
    let (lat, lon) = grid_cell(point);
    let (u, v) = sampler.lookup(lat, lon)?;
    Ok(WindSample::from_components(u, v))
}

/// One cell of a wind grid file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSample {
    pub lat: i32,
    pub lon: i32,
    pub u: f64,
    pub v: f64,
}

impl GridSample {
    pub fn wind(&self) -> WindSample {
        WindSample::from_components(self.u, self.v)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindGridFile {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    level_hpa: Option<u32>,
    samples: Vec<GridSample>,
}

/// In-memory wind field at one pressure level, indexed by integer degree.
#[derive(Debug, Clone, Default)]
pub struct WindGrid {
    date: Option<String>,
    level_hpa: Option<u32>,
    samples: Vec<GridSample>,
    index: HashMap<(i32, i32), usize>,
}

impl WindGrid {
    /// Later samples for the same cell replace earlier ones. Longitudes are re-based to [0, 360).
    pub fn new(samples: Vec<GridSample>) -> Self {
        let mut grid = Self::default();
        for sample in samples {
            grid.insert(sample);
        }
        grid
    }

    pub fn with_metadata(mut self, date: Option<String>, level_hpa: Option<u32>) -> Self {
        self.date = date;
        self.level_hpa = level_hpa;
        self
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: WindGridFile = serde_json::from_str(json)?;
        Ok(Self::new(file.samples).with_metadata(file.date, file.level_hpa))
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&WindGridFile {
            date: self.date.clone(),
            level_hpa: self.level_hpa,
            samples: self.samples.clone(),
        })
    }

    pub fn insert(&mut self, mut sample: GridSample) {
        sample.lon = sample.lon.rem_euclid(360);
        let key = (sample.lat, sample.lon);
        match self.index.get(&key) {
            Some(&i) => self.samples[i] = sample,
            None => {
                self.index.insert(key, self.samples.len());
                self.samples.push(sample);
            }
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn level_hpa(&self) -> Option<u32> {
        self.level_hpa
    }

    pub fn samples(&self) -> &[GridSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl WindSampler for WindGrid {
    fn lookup(&self, lat: i32, lon: i32) -> Result<(f64, f64)> {
        let lon = lon.rem_euclid(360);
        self.index
            .get(&(lat, lon))
            .map(|&i| (self.samples[i].u, self.samples[i].v))
            .ok_or(CoreError::SampleNotFound { lat, lon })
    }
}
