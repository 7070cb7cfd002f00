//! Slope effects on fire spread rate.
//!
//! Upslope fire spreads faster: flames tilt into the slope and preheat the
//! fuel bed above. The non-directional factor follows ST-X-3 and is capped
//! per Butler (2007); the directional variant projects the slope onto the
//! spread direction and reduces downslope spread per Anderson (1983).

/// Maximum upslope enhancement (Butler 2007 cap).
const SF_MAX_CAP: f64 = 2.0;

/// Downslope spread multiplier at full alignment (Anderson 1983).
const DOWNSLOPE_FACTOR: f64 = 0.7;

/// Non-directional slope factor.
///
/// ST-X-3: `SF = exp(3.533 * (slope/100)^1.2)`, capped at 2.0.
/// Flat or negative slope gives 1.0.
#[must_use]
pub fn slope_factor(slope_percent: f64) -> f64 {
    if slope_percent <= 0.0 {
        return 1.0;
    }
    (3.533 * (slope_percent / 100.0).powf(1.2)).exp().min(SF_MAX_CAP)
}

/// Slope factor for a specific spread direction.
///
/// `aspect_degrees` is the direction of maximum upslope (0 = north).
/// Spread aligned with the aspect gets the full upslope factor, cross-slope
/// spread is unaffected, and spread opposing the aspect is reduced toward
/// the 0.7 downslope floor. Slopes under 1% are treated as flat.
#[must_use]
pub fn directional_slope_factor(
    slope_percent: f64,
    aspect_degrees: f64,
    spread_direction_degrees: f64,
) -> f64 {
    if slope_percent < 1.0 {
        return 1.0;
    }

    let mut angle_diff = (spread_direction_degrees - aspect_degrees).abs();
    if angle_diff > 180.0 {
        angle_diff = 360.0 - angle_diff;
    }
    let cos_angle = angle_diff.to_radians().cos();

    let sf_max = slope_factor(slope_percent);

    if cos_angle > 0.0 {
        // Upslope component
        1.0 + (sf_max - 1.0) * cos_angle
    } else {
        // Downslope component
        1.0 + (DOWNSLOPE_FACTOR - 1.0) * cos_angle.abs()
    }
}
