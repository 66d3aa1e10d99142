//! Unit conversions used at component boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const METERS_PER_NMI: f64 = 1852.0;

pub fn meters_to_nmi(meters: f64) -> f64 {
    meters / METERS_PER_NMI
}

pub fn nmi_to_meters(nmi: f64) -> f64 {
    nmi * METERS_PER_NMI
}

/// Display unit for speeds. All computation happens in metres per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Mps,
    Mph,
    Kmh,
    Kts,
}

impl SpeedUnit {
    pub fn factor(self) -> f64 {
        match self {
            SpeedUnit::Mps => 1.0,
            SpeedUnit::Mph => 2.23694,
            SpeedUnit::Kmh => 3.6,
            SpeedUnit::Kts => 1.94384,
        }
    }

    pub fn from_mps(self, mps: f64) -> f64 {
        mps * self.factor()
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Mps => "m/s",
            SpeedUnit::Mph => "mph",
            SpeedUnit::Kmh => "kmh",
            SpeedUnit::Kts => "kts",
        }
    }

    /// Short identifier as accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            SpeedUnit::Mps => "mps",
            SpeedUnit::Mph => "mph",
            SpeedUnit::Kmh => "kmh",
            SpeedUnit::Kts => "kts",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SpeedUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mps" => Ok(SpeedUnit::Mps),
            "mph" => Ok(SpeedUnit::Mph),
            "kmh" => Ok(SpeedUnit::Kmh),
            "kts" => Ok(SpeedUnit::Kts),
            other => Err(format!("unknown speed unit '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_mps() {
        assert_eq!(SpeedUnit::Mps.from_mps(10.0), 10.0);
        assert!((SpeedUnit::Kmh.from_mps(10.0) - 36.0).abs() < 1e-9);
        assert!((SpeedUnit::Kts.from_mps(100.0) - 194.384).abs() < 1e-9);
    }

    #[test]
    fn parses_cli_codes() {
        assert_eq!("MPH".parse::<SpeedUnit>(), Ok(SpeedUnit::Mph));
        assert!("furlongs".parse::<SpeedUnit>().is_err());
    }

    #[test]
    fn nautical_mile_round_trip() {
        assert_eq!(meters_to_nmi(1852.0), 1.0);
        assert_eq!(nmi_to_meters(5400.0), 10_000_800.0);
    }
}
