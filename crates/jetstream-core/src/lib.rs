//! Core logic for wind impact estimation and globe vs. azimuthal-equidistant route comparison.
//!
//! Everything in this crate is pure computation over in-memory inputs. KML, wind grid files and
//! archives are handled by the `jetstream-kml` and `jetstream-cli` crates.

pub mod ae;
pub mod azimuth;
pub mod chart;
pub mod cross_projection;
pub mod error;
pub mod fastest;
pub mod flight_window;
pub mod geodesy;
pub mod models;
pub mod units;
pub mod wind;
pub mod wind_impact;

pub use chart::{AeChart, Chart, GlobeChart};
pub use cross_projection::{
    compare_routes, measure_route, CrossProjectionConfig, RemainderPolicy, Traverse,
};
pub use error::{CoreError, Result};
pub use fastest::{fastest_wind, FastestWind, LatitudeBand};
pub use flight_window::{extract_flight_window, FlightPhase, FlightWindow};
pub use geodesy::{Direct, EllipsoidalSolver, Inverse, Wgs84Geodesic};
pub use models::{GeoPoint, RouteComparison, RoutePoint, TrackPoint, TrailSegment};
pub use units::{SpeedUnit, METERS_PER_NMI};
pub use wind::{wind_azimuth, GridSample, WindGrid, WindSample, WindSampler};
pub use wind_impact::{
    headwind_component, integrate_trail, SegmentAnnotation, SegmentFailurePolicy,
    SkippedSegment, WindImpactConfig, WindImpactReport,
};
