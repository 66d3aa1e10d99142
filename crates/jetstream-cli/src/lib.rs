//! Jetstream CLI - command line tools over the wind and route engines.
//!
//! Binaries:
//! - route_distance: globe vs. AE chart route lengths
//! - analyse_flight: predicted flight time for a recorded KML track
//! - fastest_wind: strongest sample in a wind grid
//! - wind_placemarks: KMZ wind arrow layer for a whole grid

pub mod airports;
pub mod analysis;
pub mod config;
pub mod grid_store;
pub mod scan;
pub mod telemetry;

pub use airports::{airport, parse_location};
pub use analysis::{analyse_flight, FlightAnalysis, FLIGHT_LEVELS_HPA};
pub use config::Config;
pub use grid_store::{grid_path, list_grids, load_grid, GridFile};
pub use scan::{fastest_row, level_bands, scan_data_dir, CSV_HEADER};
pub use telemetry::init_tracing;
