//! Map models as interchangeable strategies.
//!
//! A [`Chart`] answers distance, bearing and forward-point questions in nautical miles. The
//! AE chart is stateless; the globe borrows an ellipsoidal solver and converts metres at this
//! boundary.

use crate::ae;
use crate::error::Result;
use crate::geodesy::EllipsoidalSolver;
use crate::models::GeoPoint;
use crate::units::{meters_to_nmi, nmi_to_meters};

pub trait Chart {
    fn name(&self) -> &'static str;

    fn distance_nmi(&self, from: GeoPoint, to: GeoPoint) -> Result<f64>;

    /// Initial bearing from `from` toward `to`, degrees in [0, 360).
    fn azimuth_deg(&self, from: GeoPoint, to: GeoPoint) -> Result<f64>;

    fn forward(&self, from: GeoPoint, azimuth_deg: f64, distance_nmi: f64) -> Result<GeoPoint>;
}

/// The polar azimuthal-equidistant chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct AeChart;

impl Chart for AeChart {
    fn name(&self) -> &'static str {
        "ae"
    }

    fn distance_nmi(&self, from: GeoPoint, to: GeoPoint) -> Result<f64> {
        Ok(ae::distance(from, to))
    }

    fn azimuth_deg(&self, from: GeoPoint, to: GeoPoint) -> Result<f64> {
        ae::azimuth_to(from, to)
    }

    fn forward(&self, from: GeoPoint, azimuth_deg: f64, distance_nmi: f64) -> Result<GeoPoint> {
        ae::forward_point(from, azimuth_deg, distance_nmi)
    }
}

/// The ellipsoidal globe, measured through an [`EllipsoidalSolver`].
#[derive(Debug, Clone, Copy)]
pub struct GlobeChart<S> {
    solver: S,
}

impl<S: EllipsoidalSolver> GlobeChart<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }
}

impl<S: EllipsoidalSolver> Chart for GlobeChart<S> {
    fn name(&self) -> &'static str {
        "globe"
    }

    fn distance_nmi(&self, from: GeoPoint, to: GeoPoint) -> Result<f64> {
        let inv = self.solver.inverse(from.lon, from.lat, to.lon, to.lat);
        Ok(meters_to_nmi(inv.distance_m))
    }

    fn azimuth_deg(&self, from: GeoPoint, to: GeoPoint) -> Result<f64> {
        let inv = self.solver.inverse(from.lon, from.lat, to.lon, to.lat);
        Ok(inv.forward_azimuth)
    }

    fn forward(&self, from: GeoPoint, azimuth_deg: f64, distance_nmi: f64) -> Result<GeoPoint> {
        let direct = self
            .solver
            .forward(from.lon, from.lat, azimuth_deg, nmi_to_meters(distance_nmi));
        Ok(GeoPoint::new(direct.lat, direct.lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::Wgs84Geodesic;

    #[test]
    fn globe_chart_reports_nautical_miles() {
        let solver = Wgs84Geodesic::new();
        let globe = GlobeChart::new(&solver);
        let d = globe
            .distance_nmi(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0))
            .unwrap();
        // One degree of equatorial longitude is about 60.1 nmi on WGS84.
        assert!((d - 60.108).abs() < 0.01, "{d}");
    }

    #[test]
    fn both_charts_agree_on_meridians_in_shape() {
        let solver = Wgs84Geodesic::new();
        let globe = GlobeChart::new(&solver);
        let from = GeoPoint::new(10.0, 20.0);
        let to = GeoPoint::new(40.0, 20.0);
        assert!(globe.azimuth_deg(from, to).unwrap() < 1e-9);
        assert!(AeChart.azimuth_deg(from, to).unwrap() < 1e-9);
        assert!((AeChart.distance_nmi(from, to).unwrap() - 1800.0).abs() < 1e-9);
    }
}
