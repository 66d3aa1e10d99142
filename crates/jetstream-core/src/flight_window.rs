//! Takeoff and landing times from a timestamped route.

use crate::error::{CoreError, Result};
use crate::models::RoutePoint;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightWindow {
    pub takeoff: DateTime<Utc>,
    pub landing: DateTime<Utc>,
}

impl FlightWindow {
    pub fn duration(&self) -> Duration {
        self.landing - self.takeoff
    }
}

/// Scanner state. There is no transition from `Airborne` back to `Ground`, so a touch-and-go
/// or a multi-leg record collapses into one window spanning every airborne point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Ground,
    Airborne {
        takeoff: DateTime<Utc>,
        landing: DateTime<Utc>,
    },
}

impl FlightPhase {
    pub fn observe(self, point: &RoutePoint) -> Self {
        if !point.point.is_airborne() {
            return self;
        }
        match self {
            FlightPhase::Ground => FlightPhase::Airborne {
                takeoff: point.timestamp,
                landing: point.timestamp,
            },
            FlightPhase::Airborne { takeoff, .. } => FlightPhase::Airborne {
                takeoff,
                landing: point.timestamp,
            },
        }
    }

    pub fn window(self) -> Option<FlightWindow> {
        match self {
            FlightPhase::Ground => None,
            FlightPhase::Airborne { takeoff, landing } => Some(FlightWindow { takeoff, landing }),
        }
    }
}

/// First and last airborne timestamps of `points`, in record order.
pub fn extract_flight_window(points: &[RoutePoint]) -> Result<FlightWindow> {
    points
        .iter()
        .fold(FlightPhase::Ground, FlightPhase::observe)
        .window()
        .ok_or(CoreError::NoAirborneSegment)
}
