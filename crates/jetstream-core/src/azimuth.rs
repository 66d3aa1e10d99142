//! Bearing and longitude normalisation shared by every computation.

/// Normalise a bearing into [0, 360).
pub fn normalize_azimuth(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped + 0.0
    }
}

/// Longitude difference `lon_to - lon_from` in (-180, 180]. Positive means eastbound.
pub fn delta_longitude(lon_from: f64, lon_to: f64) -> f64 {
    let diff = (lon_to - lon_from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Longitude in the wind grid convention, [0, 360).
pub fn grid_longitude(lon: f64) -> f64 {
    normalize_azimuth(lon)
}

/// Longitude in the chart convention, (-180, 180].
pub fn chart_longitude(lon: f64) -> f64 {
    let lon = grid_longitude(lon);
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}
