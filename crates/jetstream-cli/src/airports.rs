//! Named locations accepted wherever a coordinate is expected.

use anyhow::{bail, Context};
use jetstream_core::GeoPoint;

const AIRPORTS: &[(&str, f64, f64)] = &[
    ("auckland", -37.0082, 174.7850),
    ("buenos_aires", -34.8222, -58.5358),
    ("doha", 25.2731, 51.6081),
    ("johannesburg", -26.1392, 28.2460),
    ("london", 51.4700, -0.4543),
    ("los_angeles", 33.9416, -118.4085),
    ("new_york", 40.6413, -73.7781),
    ("perth", -31.9385, 115.9672),
    ("santiago", -33.3930, -70.7858),
    ("sao_paulo", -23.4356, -46.4731),
    ("singapore", 1.3644, 103.9915),
    ("sydney", -33.9399, 151.1753),
    ("tokyo", 35.5494, 139.7798),
];

/// Look up a built-in airport by name.
pub fn airport(name: &str) -> Option<GeoPoint> {
    AIRPORTS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, lat, lon)| GeoPoint::new(lat, lon))
}

/// Accept an airport name or `lat,lon` in degrees.
pub fn parse_location(text: &str) -> anyhow::Result<GeoPoint> {
    if let Some(point) = airport(text) {
        return Ok(point);
    }

    let Some((lat, lon)) = text.split_once(',') else {
        bail!("'{text}' is neither a known airport nor a lat,lon pair");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in '{text}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in '{text}'"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=360.0).contains(&lon) {
        bail!("'{text}' is outside the valid latitude/longitude range");
    }
    Ok(GeoPoint::new(lat, lon))
}
