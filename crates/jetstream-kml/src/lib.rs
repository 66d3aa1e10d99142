//! KML input and output for jetstream.
//!
//! - [`parse_flight`] reads a FlightRadar24-style track export (Route and Trail folders).
//! - [`write_flight_analysis`] renders wind annotations for a trail.
//! - [`build_wind_layer`] and [`write_kmz`] package a whole wind grid as a regioned KMZ.

pub mod colormap;
pub mod error;
pub mod parse;
pub mod wind_layer;
pub mod write;

pub use colormap::ColorMap;
pub use error::{KmlError, Result};
pub use parse::{parse_flight, FlightTrack};
pub use wind_layer::{build_wind_layer, regions, write_kmz, Region, WindLayer};
pub use write::{format_hms, write_flight_analysis, AnalysisOptions};
