//! Predict a recorded flight's duration through the wind grid for its takeoff date.
//!
//! Writes a KML document with one placemark per trail segment, coloured by headwind.

use anyhow::{bail, Context};
use clap::Parser;
use jetstream_cli::{analyse_flight, init_tracing, Config, FLIGHT_LEVELS_HPA};
use jetstream_core::{SegmentFailurePolicy, SpeedUnit};
use jetstream_kml::format_hms;
use std::fs;
use std::path::PathBuf;
use tracing::Level;

/// Annotate a flight KML with wind components and a predicted flight time
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Flight KML with Route and Trail folders
    kmlfile: PathBuf,

    /// Write the KML here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// True airspeed in m/s (overrides JETSTREAM_AIRSPEED_MPS)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Pressure level in hPa
    #[arg(long, default_value_t = 250, value_parser = parse_level)]
    level: u32,

    /// Units for speeds shown in the KML
    #[arg(long, default_value_t = SpeedUnit::Mps)]
    units: SpeedUnit,

    /// Leave out segments that cannot be flown instead of failing
    #[arg(long)]
    skip_failed: bool,
}

fn parse_level(text: &str) -> Result<u32, String> {
    let level: u32 = text.parse().map_err(|e| format!("{e}"))?;
    if FLIGHT_LEVELS_HPA.contains(&level) {
        Ok(level)
    } else {
        Err(format!("level must be one of {FLIGHT_LEVELS_HPA:?}"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(env!("CARGO_CRATE_NAME"), Level::INFO)?;

    let config = Config::from_env();
    let mut impact = config.wind_impact();
    if let Some(speed) = args.speed {
        impact.airspeed_mps = speed;
    }
    if args.skip_failed {
        impact.on_failure = SegmentFailurePolicy::Skip;
    }

    let xml = fs::read_to_string(&args.kmlfile)
        .with_context(|| format!("cannot read {}", args.kmlfile.display()))?;
    let analysis = analyse_flight(&xml, &config.data_dir, args.level, &impact, args.units)?;
    if analysis.report.annotations.is_empty() {
        bail!("no airborne trail segments in {}", args.kmlfile.display());
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &analysis.kml)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "{}: actual {}, predicted {}",
                analysis.date,
                format_hms(analysis.actual_duration().num_milliseconds() as f64 / 1000.0),
                format_hms(analysis.report.total_duration_s)
            );
        }
        None => print!("{}", analysis.kml),
    }

    tracing::info!("done");
    Ok(())
}
