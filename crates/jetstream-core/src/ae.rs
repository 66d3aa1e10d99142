//! Closed-form geometry on the north-polar azimuthal-equidistant chart.
//!
//! Every operation solves the plane triangle formed by the pole and the input points. Distance
//! from the pole is linear in colatitude (60 nmi per degree) and the angle at the pole equals
//! the longitude difference.

use crate::azimuth::{chart_longitude, delta_longitude, normalize_azimuth};
use crate::error::{CoreError, Result};
use crate::models::GeoPoint;

/// Chart distance per degree of colatitude.
pub const NMI_PER_DEGREE: f64 = 60.0;

/// Distance from the pole to the south-polar rim of the chart.
pub const CHART_RADIUS_NMI: f64 = 180.0 * NMI_PER_DEGREE;

/// Sides shorter than this are treated as zero-length.
const DEGENERATE_SIDE_NMI: f64 = 1e-9;

/// Floating-point slack tolerated on acos arguments before the triangle is rejected.
const COSINE_SLACK: f64 = 1e-9;

pub fn colatitude_nmi(lat: f64) -> f64 {
    (90.0 - lat) * NMI_PER_DEGREE
}

/// Straight-line chart distance in nautical miles.
pub fn distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let a = colatitude_nmi(p1.lat);
    let b = colatitude_nmi(p2.lat);
    let pole_angle = delta_longitude(p1.lon, p2.lon).abs().to_radians();

    (a * a + b * b - 2.0 * a * b * pole_angle.cos())
        .max(0.0)
        .sqrt()
}

/// Initial chart bearing from `p1` toward `p2`, degrees in [0, 360).
pub fn azimuth_to(p1: GeoPoint, p2: GeoPoint) -> Result<f64> {
    let a = colatitude_nmi(p1.lat);
    let b = colatitude_nmi(p2.lat);
    let c = distance(p1, p2);

    if a < DEGENERATE_SIDE_NMI {
        return Err(CoreError::geometry(p1, "bearing is undefined at the pole"));
    }
    if c < DEGENERATE_SIDE_NMI {
        return Err(CoreError::geometry(
            p1,
            format!("bearing to coincident point {p2} is undefined"),
        ));
    }

    let cosine = checked_cosine((a * a + c * c - b * b) / (2.0 * a * c), p1)?;
    let angle = cosine.acos().to_degrees();

    if delta_longitude(p1.lon, p2.lon) > 0.0 {
        Ok(normalize_azimuth(angle))
    } else {
        Ok(normalize_azimuth(-angle))
    }
}

/// Point reached by travelling `distance_nmi` from `p` on chart bearing `azimuth_deg`.
///
/// The returned longitude is in chart convention.
pub fn forward_point(p: GeoPoint, azimuth_deg: f64, distance_nmi: f64) -> Result<GeoPoint> {
    if distance_nmi == 0.0 {
        return Ok(p);
    }
    if !distance_nmi.is_finite() || distance_nmi < 0.0 {
        return Err(CoreError::geometry(
            p,
            format!("cannot travel {distance_nmi} nmi"),
        ));
    }

    let a = colatitude_nmi(p.lat);
    if a < DEGENERATE_SIDE_NMI {
        return Err(CoreError::geometry(p, "bearing is undefined at the pole"));
    }

    let az = azimuth_deg.to_radians();
    let d = distance_nmi;
    let c = (a * a + d * d - 2.0 * a * d * az.cos()).max(0.0).sqrt();

    if c < DEGENERATE_SIDE_NMI {
        return Err(CoreError::geometry(
            p,
            "destination coincides with the pole",
        ));
    }
    if c > CHART_RADIUS_NMI + DEGENERATE_SIDE_NMI {
        return Err(CoreError::geometry(
            p,
            format!("destination lies {c:.3} nmi from the pole, beyond the chart rim"),
        ));
    }

    // Law of sines fixes the magnitude, law of cosines the quadrant.
    let sin_pole = d * az.sin() / c;
    let cos_pole = (a * a + c * c - d * d) / (2.0 * a * c);
    let delta_lon = sin_pole.atan2(cos_pole).to_degrees();

    let lat = (90.0 - c / NMI_PER_DEGREE).max(-90.0);
    Ok(GeoPoint::new(lat, chart_longitude(p.lon + delta_lon)))
}

fn checked_cosine(value: f64, at: GeoPoint) -> Result<f64> {
    if !value.is_finite() || value.abs() > 1.0 + COSINE_SLACK {
        return Err(CoreError::geometry(
            at,
            format!("cosine {value} is outside [-1, 1]"),
        ));
    }
    Ok(value.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn pole_to_equator_is_5400_nmi() {
        assert_eq!(distance(p(90.0, 0.0), p(0.0, 0.0)), 5400.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            p(51.47, -0.46),
            p(-33.95, 151.18),
            p(40.64, -73.78),
            p(-53.0, 170.0),
            p(10.0, -179.5),
        ];
        for a in points {
            for b in points {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn distance_degenerate_cases() {
        assert!(distance(p(-30.0, 140.0), p(-30.0, 140.0)) < EPS);

        // Across the pole the chart distance is the sum of colatitudes.
        let d = distance(p(30.0, 0.0), p(-10.0, 180.0));
        assert!((d - (3600.0 + 6000.0)).abs() < EPS);
    }

    #[test]
    fn distance_along_a_parallel_is_chord_not_arc() {
        // Same latitude, 60 degrees apart: equilateral triangle with the pole.
        let d = distance(p(0.0, 0.0), p(0.0, 60.0));
        assert!((d - 5400.0).abs() < EPS);
    }

    #[test]
    fn azimuth_cardinal_directions() {
        let here = p(0.0, 0.0);
        assert!(azimuth_to(here, p(45.0, 0.0)).unwrap().abs() < EPS);
        assert!((azimuth_to(here, p(-45.0, 0.0)).unwrap() - 180.0).abs() < EPS);

        let east = azimuth_to(here, p(0.0, 10.0)).unwrap();
        let west = azimuth_to(here, p(0.0, -10.0)).unwrap();
        assert!(east > 0.0 && east < 180.0, "east bearing {east}");
        assert!(west > 180.0 && west < 360.0, "west bearing {west}");
        assert!((east + west - 360.0).abs() < EPS);
    }

    #[test]
    fn azimuth_over_the_pole_points_north() {
        let az = azimuth_to(p(30.0, 0.0), p(30.0, 180.0)).unwrap();
        assert!(az.abs() < EPS || (az - 360.0).abs() < EPS);
    }

    #[test]
    fn azimuth_rejects_degenerate_triangles() {
        assert!(matches!(
            azimuth_to(p(90.0, 0.0), p(0.0, 0.0)),
            Err(CoreError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            azimuth_to(p(12.0, 34.0), p(12.0, 34.0)),
            Err(CoreError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn forward_point_round_trips_distance() {
        let starts = [p(51.47, -0.46), p(-33.95, 151.18), p(0.0, 0.0), p(75.0, -120.0)];
        let distances = [1.0, 3.0, 250.0, 2000.0, 7000.0];
        for start in starts {
            for az in (0..360).step_by(15) {
                for d in distances {
                    let dest = match forward_point(start, az as f64, d) {
                        Ok(dest) => dest,
                        Err(CoreError::InvalidGeometry { .. }) => continue,
                        Err(e) => panic!("unexpected error {e}"),
                    };
                    let back = distance(start, dest);
                    assert!(
                        (back - d).abs() < 1e-6 * d.max(1.0),
                        "{start} az {az} d {d}: got {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn forward_point_agrees_with_azimuth_to() {
        let start = p(-33.95, 151.18);
        let target = p(-31.94, 115.97);
        let az = azimuth_to(start, target).unwrap();
        let d = distance(start, target);
        let reached = forward_point(start, az, d).unwrap();
        assert!(distance(reached, target) < 1e-6);
    }

    #[test]
    fn forward_point_crosses_the_pole() {
        // Due north for 50 degrees of colatitude from 60N: over the pole to 70N on the far side.
        let dest = forward_point(p(60.0, 10.0), 0.0, 50.0 * NMI_PER_DEGREE).unwrap();
        assert!((dest.lat - 70.0).abs() < 1e-9);
        assert!((dest.lon - -170.0).abs() < 1e-9);
    }

    #[test]
    fn forward_point_rejects_the_rim() {
        let err = forward_point(p(-80.0, 0.0), 180.0, 1200.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry { .. }));
    }

    #[test]
    fn forward_point_zero_distance_is_identity() {
        let start = p(12.0, 34.0);
        assert_eq!(forward_point(start, 90.0, 0.0).unwrap(), start);
    }
}
