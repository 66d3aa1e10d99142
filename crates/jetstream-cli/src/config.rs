//! Ambient settings from environment.

use jetstream_core::{CrossProjectionConfig, RemainderPolicy, WindImpactConfig};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `<date>_<level>.json` wind grids.
    pub data_dir: PathBuf,
    pub airspeed_mps: f64,
    pub globe_hop_m: f64,
    pub ae_hop_nmi: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("JETSTREAM_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            airspeed_mps: parse_var("JETSTREAM_AIRSPEED_MPS").unwrap_or(250.0),
            globe_hop_m: parse_var("JETSTREAM_GLOBE_HOP_M").unwrap_or(5_000.0),
            ae_hop_nmi: parse_var("JETSTREAM_AE_HOP_NMI").unwrap_or(3.0),
        }
    }

    pub fn cross_projection(&self, remainder: RemainderPolicy) -> CrossProjectionConfig {
        CrossProjectionConfig {
            globe_hop_m: self.globe_hop_m,
            ae_hop_nmi: self.ae_hop_nmi,
            remainder,
        }
    }

    pub fn wind_impact(&self) -> WindImpactConfig {
        WindImpactConfig {
            airspeed_mps: self.airspeed_mps,
            ..WindImpactConfig::default()
        }
    }
}

fn parse_var(name: &str) -> Option<f64> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
