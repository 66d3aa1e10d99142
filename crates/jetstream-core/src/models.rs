//! Shared data models for route and trail computations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Altitudes at or below this magnitude are treated as on the ground.
pub const GROUND_ALTITUDE_TOLERANCE_M: f64 = 1e-6;

/// A latitude/longitude pair in decimal degrees.
///
/// Longitude convention is left to the caller; operations convert at their boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A recorded aircraft position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lon: f64,
    pub lat: f64,
    pub altitude_m: f64,
}

impl TrackPoint {
    pub fn new(lon: f64, lat: f64, altitude_m: f64) -> Self {
        Self {
            lon,
            lat,
            altitude_m,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    pub fn is_airborne(&self) -> bool {
        self.altitude_m.abs() > GROUND_ALTITUDE_TOLERANCE_M
    }
}

/// A timestamped position from the full route record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoint {
    pub timestamp: DateTime<Utc>,
    pub point: TrackPoint,
}

/// One forward-flight leg of the trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub start: TrackPoint,
    pub end: TrackPoint,
}

impl TrailSegment {
    pub fn new(start: TrackPoint, end: TrackPoint) -> Self {
        Self { start, end }
    }

    /// True when neither endpoint is airborne (taxi or parked).
    pub fn is_ground(&self) -> bool {
        !self.start.is_airborne() && !self.end.is_airborne()
    }
}

/// Route length between one origin/destination pair under both map models.
///
/// All distances are in nautical miles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    /// Ellipsoidal geodesic measured on the globe.
    pub globe_route: f64,
    /// Straight line on the AE chart measured on the AE chart.
    pub ae_route: f64,
    /// Ellipsoidal geodesic measured with the AE chart ruler.
    pub globe_route_on_ae: f64,
    /// AE chart straight line measured on the globe.
    pub ae_route_on_globe: f64,
}
