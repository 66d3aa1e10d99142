//! Compare a route's length on the globe and on the azimuthal-equidistant chart.
//!
//! Prints the four distances as JSON on stdout.

use anyhow::Context;
use clap::Parser;
use jetstream_cli::{init_tracing, parse_location, Config};
use jetstream_core::{compare_routes, RemainderPolicy, RouteComparison, Wgs84Geodesic};
use serde::Serialize;
use tracing::Level;

/// Globe vs. AE chart distances between two points
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Origin: airport name or lat,lon (southern latitudes without a space, e.g. -o-30,100)
    #[arg(short, long = "orig", allow_hyphen_values = true)]
    origin: String,

    /// Destination: airport name or lat,lon
    #[arg(short, long = "dest", allow_hyphen_values = true)]
    destination: String,

    /// Hop length along the globe route in metres (overrides JETSTREAM_GLOBE_HOP_M)
    #[arg(long)]
    globe_hop: Option<f64>,

    /// Hop length along the AE chart route in nautical miles (overrides JETSTREAM_AE_HOP_NMI)
    #[arg(long)]
    ae_hop: Option<f64>,

    /// Measure the final partial hop instead of dropping it
    #[arg(long)]
    accumulate_remainder: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    units: &'static str,
    #[serde(flatten)]
    comparison: RouteComparison,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(env!("CARGO_CRATE_NAME"), level)?;

    let mut config = Config::from_env();
    if let Some(hop) = args.globe_hop {
        config.globe_hop_m = hop;
    }
    if let Some(hop) = args.ae_hop {
        config.ae_hop_nmi = hop;
    }
    let remainder = if args.accumulate_remainder {
        RemainderPolicy::Accumulate
    } else {
        RemainderPolicy::Drop
    };

    let origin = parse_location(&args.origin).context("bad origin")?;
    let destination = parse_location(&args.destination).context("bad destination")?;
    tracing::info!(%origin, %destination, ?config, "comparing routes");

    let comparison = compare_routes(
        &Wgs84Geodesic::new(),
        origin,
        destination,
        &config.cross_projection(remainder),
    )
    .with_context(|| format!("cannot compare {origin} -> {destination}"))?;

    let output = Output {
        units: "nautical miles",
        comparison,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
