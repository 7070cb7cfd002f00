//! Geographic points and the local equirectangular projection.
//!
//! All spread geometry works in a local meter frame anchored at the point
//! being processed: one degree of latitude is 111320 m everywhere, one
//! degree of longitude is 111320 * cos(lat) m. Valid over the tens of
//! kilometers a single fire covers.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Meters per degree of latitude.
pub const M_PER_DEG_LAT: f64 = 111_320.0;

/// Meters per degree of longitude at the given latitude.
#[must_use]
pub fn m_per_deg_lng(lat: f64) -> f64 {
    M_PER_DEG_LAT * lat.to_radians().cos()
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Displace this point by a local-meter vector (x = east, y = north).
    ///
    /// The longitude scale is anchored at this point's latitude.
    #[must_use]
    pub fn displaced(self, delta_m: Vector2<f64>) -> Self {
        Self {
            lat: self.lat + delta_m.y / M_PER_DEG_LAT,
            lng: self.lng + delta_m.x / m_per_deg_lng(self.lat),
        }
    }

    /// Straight-line distance to another point in meters, using the local
    /// projection anchored at this point.
    #[must_use]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let dn = (other.lat - self.lat) * M_PER_DEG_LAT;
        let de = (other.lng - self.lng) * m_per_deg_lng(self.lat);
        Vector2::new(de, dn).norm()
    }
}
