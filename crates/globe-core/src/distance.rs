// crates/globe-core/src/distance.rs

//! Great-circle distance on a spherical earth.

use crate::config::EARTH_RADIUS_KM;
use serde::Serialize;

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    #[inline]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lon, self.lat, other.lon, other.lat)
    }
}

/// Haversine distance in kilometers between `(lon1, lat1)` and `(lon2, lat2)`.
///
/// Inputs are not validated; out-of-range coordinates still produce a number.
pub fn haversine_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();
    c * EARTH_RADIUS_KM
}
