//! Error taxonomy for the computation engine.

use crate::models::GeoPoint;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Degenerate or out-of-domain triangle on the AE chart.
    #[error("invalid geometry at {at}: {detail}")]
    InvalidGeometry { at: GeoPoint, detail: String },

    /// Wind cancels or exceeds the airspeed on a segment.
    #[error("ground speed {ground_speed_mps:.2} m/s is not positive on segment {segment} starting at {start}")]
    NonPositiveGroundSpeed {
        segment: usize,
        start: GeoPoint,
        ground_speed_mps: f64,
    },

    #[error("no wind sample for grid cell lat {lat}, lon {lon}")]
    SampleNotFound { lat: i32, lon: i32 },

    #[error("route has no airborne point")]
    NoAirborneSegment,

    #[error("route from {origin} to {destination} did not converge within {max_hops} hops")]
    StepLimitExceeded {
        origin: GeoPoint,
        destination: GeoPoint,
        max_hops: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    pub(crate) fn geometry(at: GeoPoint, detail: impl Into<String>) -> Self {
        CoreError::InvalidGeometry {
            at,
            detail: detail.into(),
        }
    }
}
