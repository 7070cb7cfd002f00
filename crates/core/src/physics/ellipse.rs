//! Fire ellipse geometry.
//!
//! Wind-driven fires grow as ellipses: the head runs downwind, the back
//! creeps upwind, the flanks sit between. These shape parameters feed the
//! Huygens wavelet expansion and the quick single-ellipse estimates.
//!
//! # References
//! - Alexander, M.E. (1985). "Estimating the length-to-breadth ratio of
//!   elliptical forest fire patterns."
//! - Tymstra, C. et al. (2010). Prometheus fire growth model,
//!   Information Report NOR-X-417.

use nalgebra::Vector2;

use crate::core_types::geo::{m_per_deg_lng, GeoPoint, M_PER_DEG_LAT};

/// Length-to-breadth ratio of the fire ellipse from wind speed (km/h).
///
/// `LBR = 1 + 8.729 * (1 - exp(-0.030 * ws))^2.155`. Calm wind gives a
/// circle (1.0); strong wind approaches ~9.7.
#[must_use]
pub fn length_to_breadth_ratio(wind_speed: f64) -> f64 {
    if wind_speed <= 0.0 {
        return 1.0;
    }
    1.0 + 8.729 * (1.0 - (-0.030 * wind_speed).exp()).powf(2.155)
}

/// Ellipse eccentricity from the length-to-breadth ratio.
#[must_use]
pub fn eccentricity(lbr: f64) -> f64 {
    if lbr <= 1.0 {
        return 0.0;
    }
    (1.0 - 1.0 / (lbr * lbr)).sqrt()
}

/// Backing rate of spread: `head / LBR^2` (m/min).
#[must_use]
pub fn back_ros(head_ros: f64, lbr: f64) -> f64 {
    if lbr <= 1.0 {
        return head_ros;
    }
    head_ros / (lbr * lbr)
}

/// Flanking rate of spread: `head / LBR` (m/min).
#[must_use]
pub fn flank_ros(head_ros: f64, lbr: f64) -> f64 {
    if lbr <= 1.0 {
        return head_ros;
    }
    head_ros / lbr
}

/// Rate of spread along a ray at `theta_deg` from the head direction.
///
/// Radius of the spread ellipse with semi-major `a = (head + back) / 2`
/// along the head axis and semi-minor `b = flank`:
/// `r(theta) = a * b / sqrt((b cos)^2 + (a sin)^2)`.
#[must_use]
pub fn elliptical_ros(head_ros: f64, back: f64, flank: f64, theta_deg: f64) -> f64 {
    let a = (head_ros + back) / 2.0;
    let b = flank;
    let theta = theta_deg.to_radians();
    let denom = ((b * theta.cos()).powi(2) + (a * theta.sin()).powi(2)).sqrt();
    if denom < 1e-10 {
        a
    } else {
        a * b / denom
    }
}

/// Closed-form fire ellipse area after `time_hours` of spread, in hectares.
#[must_use]
pub fn ellipse_area_ha(head_ros: f64, lbr: f64, time_hours: f64) -> f64 {
    let time_min = time_hours * 60.0;
    let head_dist = head_ros * time_min;
    let back_dist = back_ros(head_ros, lbr) * time_min;

    let a = (head_dist + back_dist) / 2.0;
    let b = if lbr > 0.0 { a / lbr } else { a };

    std::f64::consts::PI * a * b / 10_000.0
}

/// Closed perimeter polygon of a single fire ellipse.
///
/// The ellipse is centered downwind of the ignition (the head outruns the
/// back) and oriented along the spread direction, opposite the
/// meteorological wind-FROM direction. Useful for quick estimates without
/// running the full wavelet spread.
#[must_use]
pub fn generate_ellipse_points(
    center: GeoPoint,
    head_ros: f64,
    lbr: f64,
    wind_direction: f64,
    time_hours: f64,
    num_points: usize,
) -> Vec<GeoPoint> {
    let time_min = time_hours * 60.0;
    let head_dist = head_ros * time_min;
    let back_dist = back_ros(head_ros, lbr) * time_min;

    let semi_major = (head_dist + back_dist) / 2.0;
    let semi_minor = if lbr > 0.0 { semi_major / lbr } else { semi_major };
    let offset = (head_dist - back_dist) / 2.0;

    let spread_dir = ((wind_direction + 180.0) % 360.0).to_radians();
    let (dir_sin, dir_cos) = spread_dir.sin_cos();

    let lat_per_m = 1.0 / M_PER_DEG_LAT;
    let lng_per_m = 1.0 / m_per_deg_lng(center.lat);

    let ellipse_center = GeoPoint::new(
        center.lat + offset * dir_cos * lat_per_m,
        center.lng + offset * dir_sin * lng_per_m,
    );

    let mut points = Vec::with_capacity(num_points + 1);
    for i in 0..num_points {
        let theta = 2.0 * std::f64::consts::PI * (i as f64) / (num_points as f64);

        // Point on the axis-aligned ellipse, then rotated into the spread
        // direction; x runs along the major axis
        let local = Vector2::new(semi_major * theta.cos(), semi_minor * theta.sin());
        let north = local.x * dir_cos - local.y * dir_sin;
        let east = local.x * dir_sin + local.y * dir_cos;

        points.push(GeoPoint::new(
            ellipse_center.lat + north * lat_per_m,
            ellipse_center.lng + east * lng_per_m,
        ));
    }

    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}
