//! Measure a route drawn on one chart with the ruler of another.

use crate::chart::{AeChart, Chart, GlobeChart};
use crate::error::{CoreError, Result};
use crate::geodesy::EllipsoidalSolver;
use crate::models::{GeoPoint, RouteComparison};
use crate::units::meters_to_nmi;
use serde::{Deserialize, Serialize};

/// What to do with the final partial hop once the walk is within one hop of the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Stop without measuring the last partial hop.
    #[default]
    Drop,
    /// Measure the last partial hop with the measuring chart and add it.
    Accumulate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossProjectionConfig {
    /// Hop length when walking the ellipsoidal route, metres.
    pub globe_hop_m: f64,
    /// Hop length when walking the AE chart route, nautical miles.
    pub ae_hop_nmi: f64,
    pub remainder: RemainderPolicy,
}

impl Default for CrossProjectionConfig {
    fn default() -> Self {
        Self {
            globe_hop_m: 5_000.0,
            ae_hop_nmi: 3.0,
            remainder: RemainderPolicy::Drop,
        }
    }
}

/// Outcome of one walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traverse {
    /// Length accumulated with the measuring chart, nautical miles.
    pub measured_nmi: f64,
    pub hops: usize,
    /// Native distance still to go when the walk stopped.
    pub remainder_nmi: f64,
}

/// Walk from `origin` toward `destination` in `hop_nmi` steps on `native`, summing each hop's
/// length as seen by `measuring`.
///
/// The bearing is recomputed from the current position on every hop. The walk stops once the
/// native distance remaining is no more than one hop.
pub fn measure_route<N, M>(
    native: &N,
    measuring: &M,
    origin: GeoPoint,
    destination: GeoPoint,
    hop_nmi: f64,
    remainder: RemainderPolicy,
) -> Result<Traverse>
where
    N: Chart + ?Sized,
    M: Chart + ?Sized,
{
    if !hop_nmi.is_finite() || hop_nmi <= 0.0 {
        return Err(CoreError::InvalidConfig(format!(
            "hop size must be positive, got {hop_nmi} nmi"
        )));
    }

    let mut current = origin;
    let mut remaining = native.distance_nmi(current, destination)?;
    let max_hops = ((remaining / hop_nmi).ceil() as usize)
        .saturating_mul(2)
        .saturating_add(16);

    let mut measured_nmi = 0.0;
    let mut hops = 0usize;

    while remaining > hop_nmi {
        if hops >= max_hops {
            return Err(CoreError::StepLimitExceeded {
                origin,
                destination,
                max_hops,
            });
        }

        let azimuth = native.azimuth_deg(current, destination)?;
        let next = native.forward(current, azimuth, hop_nmi)?;
        measured_nmi += measuring.distance_nmi(current, next)?;

        hops += 1;
        current = next;
        remaining = native.distance_nmi(current, destination)?;
    }

    if remainder == RemainderPolicy::Accumulate {
        measured_nmi += measuring.distance_nmi(current, destination)?;
    }

    tracing::debug!(
        native = native.name(),
        measuring = measuring.name(),
        hops,
        measured_nmi,
        remainder_nmi = remaining,
        "cross-projection walk complete"
    );

    Ok(Traverse {
        measured_nmi,
        hops,
        remainder_nmi: remaining,
    })
}

/// Compare the globe and AE chart routes between two points in both directions.
pub fn compare_routes<S: EllipsoidalSolver>(
    solver: &S,
    origin: GeoPoint,
    destination: GeoPoint,
    config: &CrossProjectionConfig,
) -> Result<RouteComparison> {
    let globe = GlobeChart::new(solver);
    let ae = AeChart;

    let globe_route = globe.distance_nmi(origin, destination)?;
    let ae_route = ae.distance_nmi(origin, destination)?;

    let globe_on_ae = measure_route(
        &globe,
        &ae,
        origin,
        destination,
        meters_to_nmi(config.globe_hop_m),
        config.remainder,
    )?;
    let ae_on_globe = measure_route(
        &ae,
        &globe,
        origin,
        destination,
        config.ae_hop_nmi,
        config.remainder,
    )?;

    Ok(RouteComparison {
        globe_route,
        ae_route,
        globe_route_on_ae: globe_on_ae.measured_nmi,
        ae_route_on_globe: ae_on_globe.measured_nmi,
    })
}
