//! Per-segment wind decomposition and flight time accumulation.

use crate::azimuth::normalize_azimuth;
use crate::error::{CoreError, Result};
use crate::geodesy::EllipsoidalSolver;
use crate::models::{TrackPoint, TrailSegment};
use crate::wind::{sample_at, WindSample, WindSampler};
use serde::{Deserialize, Serialize};

/// How a failing segment affects the whole trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFailurePolicy {
    /// Return the first segment error.
    #[default]
    Abort,
    /// Record the failure, leave the segment out of the total and carry on.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindImpactConfig {
    /// Constant true airspeed, m/s.
    pub airspeed_mps: f64,
    pub on_failure: SegmentFailurePolicy,
}

impl Default for WindImpactConfig {
    fn default() -> Self {
        Self {
            airspeed_mps: 250.0,
            on_failure: SegmentFailurePolicy::Abort,
        }
    }
}

/// Wind effect on one airborne segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnnotation {
    /// Position of the segment in the trail.
    pub index: usize,
    pub start: TrackPoint,
    /// Signed along-track wind: positive is a tailwind.
    pub headwind_mps: f64,
    pub ground_azimuth_deg: f64,
    pub wind: WindSample,
    pub ground_speed_mps: f64,
    pub distance_m: f64,
    pub duration_s: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSegment {
    pub index: usize,
    pub error: CoreError,
}

#[derive(Debug, Clone, Default)]
pub struct WindImpactReport {
    pub annotations: Vec<SegmentAnnotation>,
    pub skipped: Vec<SkippedSegment>,
    /// Start point of every segment, ground legs included, in trail order.
    pub path: Vec<TrackPoint>,
    pub total_duration_s: f64,
}

/// Along-track component of `wind` for travel on `ground_azimuth_deg`.
pub fn headwind_component(wind: &WindSample, ground_azimuth_deg: f64) -> f64 {
    wind.magnitude_mps * (wind.azimuth_deg - ground_azimuth_deg).to_radians().cos()
}

/// Evaluate one segment. Ground segments yield `None`.
pub fn analyse_segment<W, S>(
    index: usize,
    segment: &TrailSegment,
    sampler: &W,
    solver: &S,
    airspeed_mps: f64,
) -> Result<Option<SegmentAnnotation>>
where
    W: WindSampler + ?Sized,
    S: EllipsoidalSolver + ?Sized,
{
    if segment.is_ground() {
        return Ok(None);
    }

    let TrailSegment { start, end } = *segment;
    let inv = solver.inverse(start.lon, start.lat, end.lon, end.lat);
    let ground_azimuth_deg = normalize_azimuth(inv.forward_azimuth);

    let wind = sample_at(sampler, start.position())?;
    let headwind_mps = headwind_component(&wind, ground_azimuth_deg);
    let ground_speed_mps = airspeed_mps + headwind_mps;

    if ground_speed_mps <= 0.0 {
        return Err(CoreError::NonPositiveGroundSpeed {
            segment: index,
            start: start.position(),
            ground_speed_mps,
        });
    }

    Ok(Some(SegmentAnnotation {
        index,
        start,
        headwind_mps,
        ground_azimuth_deg,
        wind,
        ground_speed_mps,
        distance_m: inv.distance_m,
        duration_s: inv.distance_m / ground_speed_mps,
    }))
}

/// Annotate every airborne segment of `segments` and total the predicted flight time.
pub fn integrate_trail<W, S>(
    segments: &[TrailSegment],
    sampler: &W,
    solver: &S,
    config: &WindImpactConfig,
) -> Result<WindImpactReport>
where
    W: WindSampler + ?Sized,
    S: EllipsoidalSolver + ?Sized,
{
    if !config.airspeed_mps.is_finite() || config.airspeed_mps <= 0.0 {
        return Err(CoreError::InvalidConfig(format!(
            "airspeed must be positive, got {} m/s",
            config.airspeed_mps
        )));
    }

    let mut report = WindImpactReport::default();

    for (index, segment) in segments.iter().enumerate() {
        report.path.push(segment.start);

        match analyse_segment(index, segment, sampler, solver, config.airspeed_mps) {
            Ok(Some(annotation)) => {
                report.total_duration_s += annotation.duration_s;
                report.annotations.push(annotation);
            }
            Ok(None) => {}
            Err(error) => match config.on_failure {
                SegmentFailurePolicy::Abort => return Err(error),
                SegmentFailurePolicy::Skip => {
                    tracing::warn!(segment = index, %error, "skipping segment");
                    report.skipped.push(SkippedSegment { index, error });
                }
            },
        }
    }

    tracing::debug!(
        segments = segments.len(),
        airborne = report.annotations.len(),
        skipped = report.skipped.len(),
        total_duration_s = report.total_duration_s,
        "trail integrated"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::{Direct, Inverse, Wgs84Geodesic};
    use crate::wind::{GridSample, WindGrid};

    /// Every leg is `distance_m` long on `azimuth`.
    struct FixedLeg {
        azimuth: f64,
        distance_m: f64,
    }

    impl EllipsoidalSolver for FixedLeg {
        fn inverse(&self, _: f64, _: f64, _: f64, _: f64) -> Inverse {
            Inverse {
                forward_azimuth: self.azimuth,
                back_azimuth: normalize_azimuth(self.azimuth + 180.0),
                distance_m: self.distance_m,
            }
        }

        fn forward(&self, lon: f64, lat: f64, _: f64, _: f64) -> Direct {
            Direct {
                lon,
                lat,
                back_azimuth: 0.0,
            }
        }
    }

    struct Uniform(f64, f64);

    impl WindSampler for Uniform {
        fn lookup(&self, _: i32, _: i32) -> Result<(f64, f64)> {
            Ok((self.0, self.1))
        }
    }

    fn airborne_leg() -> TrailSegment {
        TrailSegment::new(
            TrackPoint::new(10.0, 45.0, 10_000.0),
            TrackPoint::new(14.0, 45.0, 10_000.0),
        )
    }

    fn east_300km() -> FixedLeg {
        FixedLeg {
            azimuth: 90.0,
            distance_m: 300_000.0,
        }
    }

    #[test]
    fn pure_tail_and_head_wind() {
        let wind = WindSample {
            magnitude_mps: 40.0,
            azimuth_deg: 270.0,
        };
        assert!((headwind_component(&wind, 270.0) - 40.0).abs() < 1e-9);
        assert!((headwind_component(&wind, 90.0) + 40.0).abs() < 1e-9);
        assert!(headwind_component(&wind, 0.0).abs() < 1e-9);
    }

    #[test]
    fn zero_wind_flies_at_airspeed() {
        let report = integrate_trail(
            &[airborne_leg()],
            &Uniform(0.0, 0.0),
            &east_300km(),
            &WindImpactConfig::default(),
        )
        .unwrap();
        let a = &report.annotations[0];
        assert_eq!(a.ground_speed_mps, 250.0);
        assert_eq!(a.duration_s, 300_000.0 / 250.0);
        assert_eq!(report.total_duration_s, 1200.0);
    }

    #[test]
    fn tailwind_and_headwind_scenario() {
        let config = WindImpactConfig::default();

        // u = 50 is a 50 m/s wind toward the east, aligned with the eastbound leg.
        let tail = integrate_trail(&[airborne_leg()], &Uniform(50.0, 0.0), &east_300km(), &config)
            .unwrap();
        assert!((tail.annotations[0].ground_speed_mps - 300.0).abs() < 1e-9);
        assert!((tail.total_duration_s - 1000.0).abs() < 1e-6);

        let head = integrate_trail(&[airborne_leg()], &Uniform(-50.0, 0.0), &east_300km(), &config)
            .unwrap();
        assert!((head.annotations[0].ground_speed_mps - 200.0).abs() < 1e-9);
        assert!((head.total_duration_s - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn ground_segments_are_skipped_but_kept_in_path() {
        let taxi = TrailSegment::new(
            TrackPoint::new(10.0, 45.0, 0.0),
            TrackPoint::new(10.001, 45.0, 0.0),
        );
        let climb = TrailSegment::new(
            TrackPoint::new(10.001, 45.0, 0.0),
            TrackPoint::new(10.1, 45.0, 300.0),
        );
        let report = integrate_trail(
            &[taxi, climb],
            &Uniform(0.0, 0.0),
            &east_300km(),
            &WindImpactConfig::default(),
        )
        .unwrap();
        assert_eq!(report.path.len(), 2);
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(report.annotations[0].index, 1);
    }

    #[test]
    fn overwhelming_headwind_is_an_error() {
        let err = integrate_trail(
            &[airborne_leg()],
            &Uniform(-250.0, 0.0),
            &east_300km(),
            &WindImpactConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NonPositiveGroundSpeed { segment: 0, .. }
        ));
    }

    #[test]
    fn skip_policy_records_failures() {
        let grid = WindGrid::new(vec![GridSample {
            lat: 45,
            lon: 10,
            u: 20.0,
            v: 0.0,
        }]);
        let far = TrailSegment::new(
            TrackPoint::new(-60.0, 10.0, 11_000.0),
            TrackPoint::new(-59.0, 10.0, 11_000.0),
        );
        let config = WindImpactConfig {
            on_failure: SegmentFailurePolicy::Skip,
            ..WindImpactConfig::default()
        };
        let report = integrate_trail(&[airborne_leg(), far], &grid, &east_300km(), &config).unwrap();
        assert_eq!(report.annotations.len(), 1);
        assert_eq!(
            report.skipped,
            vec![SkippedSegment {
                index: 1,
                error: CoreError::SampleNotFound { lat: 10, lon: 300 },
            }]
        );
        assert!((report.total_duration_s - 300_000.0 / 270.0).abs() < 1e-6);

        let aborted = integrate_trail(
            &[airborne_leg(), far],
            &grid,
            &east_300km(),
            &WindImpactConfig::default(),
        );
        assert!(matches!(aborted, Err(CoreError::SampleNotFound { .. })));
    }

    #[test]
    fn westbound_ground_azimuth_is_normalised() {
        let solver = Wgs84Geodesic::new();
        let leg = TrailSegment::new(
            TrackPoint::new(10.0, 0.0, 9_000.0),
            TrackPoint::new(9.0, 0.0, 9_000.0),
        );
        let a = analyse_segment(0, &leg, &Uniform(0.0, 0.0), &solver, 250.0)
            .unwrap()
            .unwrap();
        assert!((a.ground_azimuth_deg - 270.0).abs() < 1e-9);
        assert!((a.distance_m - 111_319.5).abs() < 1.0);
    }

    #[test]
    fn rejects_non_positive_airspeed() {
        let config = WindImpactConfig {
            airspeed_mps: 0.0,
            ..WindImpactConfig::default()
        };
        let err = integrate_trail(&[], &Uniform(0.0, 0.0), &east_300km(), &config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }
}
