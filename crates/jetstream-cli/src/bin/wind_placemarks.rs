//! Render a whole wind grid as a KMZ of region-loaded arrow placemarks.

use anyhow::Context;
use clap::Parser;
use jetstream_cli::{init_tracing, load_grid, Config};
use jetstream_core::SpeedUnit;
use jetstream_kml::{build_wind_layer, write_kmz};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::Level;

/// Wind arrows for every grid sample, packaged for Google Earth
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Grid date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Pressure level in hPa
    #[arg(long, default_value_t = 250)]
    level: u32,

    /// KMZ output file
    #[arg(long)]
    out: PathBuf,

    /// Units for speeds shown on the placemarks
    #[arg(long, default_value_t = SpeedUnit::Mps)]
    units: SpeedUnit,

    /// Arrow icon PNG to embed in the archive
    #[arg(long)]
    icon: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(env!("CARGO_CRATE_NAME"), Level::INFO)?;
    let config = Config::from_env();

    let grid = load_grid(&config.data_dir, &args.date, args.level)?;
    let icon = args
        .icon
        .as_ref()
        .map(|path| fs::read(path).with_context(|| format!("cannot read icon {}", path.display())))
        .transpose()?;

    let layer = build_wind_layer(&grid, &format!("Wind: {}", args.date), args.units);
    let file = File::create(&args.out)
        .with_context(|| format!("cannot create {}", args.out.display()))?;
    let mut out = write_kmz(&layer, icon.as_deref(), BufWriter::new(file))
        .with_context(|| format!("cannot write {}", args.out.display()))?;
    out.flush()?;

    tracing::info!(out = %args.out.display(), samples = grid.len(), "wind layer written");
    Ok(())
}
