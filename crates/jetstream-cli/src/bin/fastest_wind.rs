//! Find the fastest wind in a grid, or in every grid in the data directory.
//!
//! Prints CSV rows: date,level,speed,units,azimuth,latitude,longitude

use clap::Parser;
use jetstream_cli::{fastest_row, init_tracing, load_grid, scan_data_dir, Config, CSV_HEADER};
use jetstream_core::{LatitudeBand, SpeedUnit};
use tracing::Level;

/// Finds the fastest wind anywhere on earth
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Grid date, YYYY-MM-DD. Without it every grid in the data directory is scanned.
    #[arg(long, requires = "level")]
    date: Option<String>,

    /// Pressure level in hPa, together with --date
    #[arg(long, requires = "date")]
    level: Option<u32>,

    /// Output speed units
    #[arg(long, default_value_t = SpeedUnit::Mps)]
    units: SpeedUnit,

    /// Ignore samples nearer the equator than this absolute latitude
    #[arg(long)]
    minlat: Option<f64>,

    /// Ignore samples nearer the poles than this absolute latitude
    #[arg(long)]
    maxlat: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(env!("CARGO_CRATE_NAME"), Level::WARN)?;
    let config = Config::from_env();

    println!("{CSV_HEADER}");

    let (Some(date), Some(level)) = (args.date.as_deref(), args.level) else {
        for row in scan_data_dir(&config.data_dir, args.units)? {
            println!("{row}");
        }
        return Ok(());
    };

    let grid = load_grid(&config.data_dir, date, level)?;
    let band = LatitudeBand::new(args.minlat, args.maxlat);
    match fastest_row(&grid, date, level, band, args.units) {
        Some(row) => println!("{row}"),
        None => tracing::warn!(%date, level, ?band, "no wind in band"),
    }
    Ok(())
}
