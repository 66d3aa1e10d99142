//! Ellipsoidal direct/inverse solver boundary.
//!
//! The engine never solves ellipsoidal geodesics itself; it goes through [`EllipsoidalSolver`].
//! [`Wgs84Geodesic`] is the default implementation, backed by GeographicLib.

use crate::azimuth::{chart_longitude, normalize_azimuth};
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

/// Result of an inverse problem. Azimuths are normalised to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverse {
    pub forward_azimuth: f64,
    pub back_azimuth: f64,
    pub distance_m: f64,
}

/// Result of a direct problem. Longitude is in chart convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direct {
    pub lon: f64,
    pub lat: f64,
    pub back_azimuth: f64,
}

/// Argument order follows the geodesy convention of longitude first.
pub trait EllipsoidalSolver {
    fn inverse(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Inverse;
    fn forward(&self, lon: f64, lat: f64, azimuth_deg: f64, distance_m: f64) -> Direct;
}

impl<S: EllipsoidalSolver + ?Sized> EllipsoidalSolver for &S {
    fn inverse(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Inverse {
        (**self).inverse(lon1, lat1, lon2, lat2)
    }

    fn forward(&self, lon: f64, lat: f64, azimuth_deg: f64, distance_m: f64) -> Direct {
        (**self).forward(lon, lat, azimuth_deg, distance_m)
    }
}

/// WGS84 ellipsoid solver.
#[derive(Debug, Clone)]
pub struct Wgs84Geodesic {
    geod: Geodesic,
}

impl Default for Wgs84Geodesic {
    fn default() -> Self {
        Self {
            geod: Geodesic::wgs84(),
        }
    }
}

impl Wgs84Geodesic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EllipsoidalSolver for Wgs84Geodesic {
    fn inverse(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Inverse {
        let (s12, azi1, azi2, _a12): (f64, f64, f64, f64) =
            self.geod.inverse(lat1, lon1, lat2, lon2);
        Inverse {
            forward_azimuth: normalize_azimuth(azi1),
            // azi2 is the heading on arrival; looking back is the reverse of it
            back_azimuth: normalize_azimuth(azi2 + 180.0),
            distance_m: s12,
        }
    }

    fn forward(&self, lon: f64, lat: f64, azimuth_deg: f64, distance_m: f64) -> Direct {
        let (lat2, lon2, azi2): (f64, f64, f64) =
            self.geod.direct(lat, lon, azimuth_deg, distance_m);
        Direct {
            lon: chart_longitude(lon2),
            lat: lat2,
            back_azimuth: normalize_azimuth(azi2 + 180.0),
        }
    }
}
