//! Van Wagner crown fire initiation model.
//!
//! Determines when a surface fire transitions into the canopy and how much
//! of the crown burns, from the balance between surface fire intensity and
//! the critical intensity the canopy geometry demands.
//!
//! # References
//! - Van Wagner, C.E. (1977). "Conditions for the start and spread of crown
//!   fire." Canadian Journal of Forest Research, 7(1), 23-34.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::core_types::fuel::FuelSpec;

/// CBD below which the canopy is too sparse to accelerate spread (kg/m3).
const CBD_CRITICAL: f64 = 0.05;

/// Classification of fire behavior by crown involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FireType {
    /// Surface fire only, no crown involvement
    Surface,
    /// Occasional torching of individual trees (CFB up to 0.1)
    SurfaceWithTorching,
    /// Intermittent crown fire dependent on the surface fire (CFB up to 0.9)
    PassiveCrown,
    /// Continuous crown fire (CFB 0.9 and above)
    ActiveCrown,
}

/// Critical surface fire intensity for crown fire initiation (kW/m).
///
/// Van Wagner (1977): `I_0 = (0.010 * CBH * (460 + 25.9 * FMC))^1.5`.
/// Zero when there is no canopy (`cbh <= 0`).
#[must_use]
pub fn critical_surface_intensity(cbh: f64, fmc: f64) -> f64 {
    if cbh <= 0.0 {
        return 0.0;
    }
    (0.010 * cbh * (460.0 + 25.9 * fmc)).powf(1.5)
}

/// Crown fraction burned, 0 to 1.
///
/// Zero when the surface fire stays below the critical intensity or the
/// fuel type has no canopy.
#[must_use]
pub fn crown_fraction_burned(sfi: f64, csi: f64) -> f64 {
    if csi <= 0.0 || sfi < csi {
        return 0.0;
    }
    (1.0 - (csi / sfi).sqrt()).clamp(0.0, 1.0)
}

/// Classify fire type from crown fraction burned.
#[must_use]
pub fn classify_fire_type(cfb: f64) -> FireType {
    if cfb >= 0.9 {
        FireType::ActiveCrown
    } else if cfb > 0.1 {
        FireType::PassiveCrown
    } else if cfb > 0.0 {
        FireType::SurfaceWithTorching
    } else {
        FireType::Surface
    }
}

/// Crown fire rate of spread (m/min).
///
/// Denser canopies sustain faster crown runs; the enhancement over the
/// surface ROS grows with crown bulk density and is capped at 3x.
#[must_use]
pub fn crown_ros(surface_ros: f64, spec: &FuelSpec) -> f64 {
    if spec.cbd < CBD_CRITICAL {
        return surface_ros;
    }
    let factor = (1.0 + (spec.cbd - CBD_CRITICAL) / 0.1).min(3.0);
    surface_ros * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::fuel::FuelType;
    use approx::assert_relative_eq;

    #[test]
    fn csi_zero_without_canopy() {
        assert_eq!(critical_surface_intensity(0.0, 100.0), 0.0);
        assert_eq!(critical_surface_intensity(-1.0, 100.0), 0.0);
    }

    #[test]
    fn csi_known_value_for_c2() {
        // CBH 3 m, FMC 100%: (0.010 * 3 * 3050)^1.5 = 91.5^1.5
        let csi = critical_surface_intensity(3.0, 100.0);
        assert_relative_eq!(csi, 91.5_f64.powf(1.5), epsilon = 1e-9);
    }

    #[test]
    fn csi_grows_with_crown_base_height() {
        let low = critical_surface_intensity(2.0, 100.0);
        let high = critical_surface_intensity(10.0, 100.0);
        assert!(high > low, "higher canopy needs more surface intensity");
    }

    #[test]
    fn cfb_zero_below_critical() {
        assert_eq!(crown_fraction_burned(500.0, 900.0), 0.0);
        assert_eq!(crown_fraction_burned(500.0, 0.0), 0.0);
    }

    #[test]
    fn cfb_grows_with_intensity() {
        let csi = 900.0;
        let moderate = crown_fraction_burned(2.0 * csi, csi);
        let extreme = crown_fraction_burned(20.0 * csi, csi);
        assert!(moderate > 0.0);
        assert!(extreme > moderate);
        assert!(extreme <= 1.0);
    }

    #[test]
    fn fire_type_thresholds() {
        assert_eq!(classify_fire_type(0.0), FireType::Surface);
        assert_eq!(classify_fire_type(0.05), FireType::SurfaceWithTorching);
        assert_eq!(classify_fire_type(0.1), FireType::SurfaceWithTorching);
        assert_eq!(classify_fire_type(0.5), FireType::PassiveCrown);
        assert_eq!(classify_fire_type(0.9), FireType::ActiveCrown);
        assert_eq!(classify_fire_type(1.0), FireType::ActiveCrown);
    }

    #[test]
    fn crown_ros_no_enhancement_for_sparse_canopy() {
        // D1 has cbd = 0
        assert_eq!(crown_ros(10.0, FuelType::D1.spec()), 10.0);
    }

    #[test]
    fn crown_ros_enhancement_capped() {
        // C2 cbd = 0.18: factor = 1 + 0.13/0.1 = 2.3
        assert_relative_eq!(crown_ros(10.0, FuelType::C2.spec()), 23.0, epsilon = 1e-9);
        // C6 cbd = 0.17: factor 2.2, still below the 3.0 cap
        assert!(crown_ros(10.0, FuelType::C6.spec()) <= 30.0);
    }

    #[test]
    fn fire_type_display_snake_case() {
        assert_eq!(FireType::SurfaceWithTorching.to_string(), "surface_with_torching");
        assert_eq!(FireType::ActiveCrown.to_string(), "active_crown");
    }
}
