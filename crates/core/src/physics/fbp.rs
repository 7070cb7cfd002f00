//! Canadian Fire Behavior Prediction (FBP) System.
//!
//! Stateless point model: fuel type plus weather and moisture codes in,
//! rate of spread, fuel consumption, intensity and fire type out.
//!
//! # References
//! - Forestry Canada Fire Danger Group (1992). "Development and Structure of
//!   the Canadian Forest Fire Behavior Prediction System."
//!   Information Report ST-X-3.
//! - Byram, G.M. (1959). Combustion of forest fuels (flame length).

use serde::{Deserialize, Serialize};

use crate::core_types::fuel::{FuelGroup, FuelSpec, FuelType};
use crate::physics::crown_fire::{
    classify_fire_type, critical_surface_intensity, crown_fraction_burned, crown_ros, FireType,
};
use crate::physics::fwi::{calculate_bui, calculate_isi};
use crate::physics::slope::slope_factor;

/// Low heat of combustion (kJ/kg), constant across FBP fuel types.
const HEAT_OF_COMBUSTION: f64 = 18_000.0;

/// Greenup reduction applied to the deciduous component of M2.
const M2_GREENUP_FACTOR: f64 = 0.2;

/// Complete output of one FBP evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FbpResult {
    pub fuel_type: FuelType,
    pub isi: f64,
    pub bui: f64,
    /// Surface rate of spread (m/min)
    pub ros_surface: f64,
    /// Final rate of spread including crown blending (m/min)
    pub ros_final: f64,
    /// Surface fuel consumption (kg/m2)
    pub sfc: f64,
    /// Crown fuel consumption (kg/m2)
    pub cfc: f64,
    /// Total fuel consumption (kg/m2)
    pub tfc: f64,
    /// Surface fire intensity (kW/m)
    pub sfi: f64,
    /// Head fire intensity (kW/m)
    pub hfi: f64,
    /// Crown fraction burned, 0-1
    pub cfb: f64,
    pub fire_type: FireType,
    /// Byram flame length (m)
    pub flame_length: f64,
}

/// Optional FBP inputs with their conventional defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FbpOptions {
    /// Terrain slope (%); 0 = flat
    pub slope_percent: f64,
    /// Percent conifer for the M1/M2 blend
    pub percent_conifer: f64,
    /// Percent curing for O1a/O1b grass
    pub grass_cure: f64,
    /// Foliar moisture content (%) for crown fire initiation
    pub foliar_moisture: f64,
}

impl Default for FbpOptions {
    fn default() -> Self {
        Self {
            slope_percent: 0.0,
            percent_conifer: 50.0,
            grass_cure: 60.0,
            foliar_moisture: 100.0,
        }
    }
}

/// BUI effect on rate of spread.
///
/// ST-X-3: `BE = exp(50 * ln(q) * (1/BUI - 1/BUI_0))`. Disabled (1.0) when
/// `bui <= 0` or `q >= 1` (grass types).
#[must_use]
pub fn bui_effect(bui: f64, q: f64, bui0: f64) -> f64 {
    if bui <= 0.0 || q >= 1.0 {
        return 1.0;
    }
    (50.0 * q.ln() * (1.0 / bui - 1.0 / bui0)).exp()
}

/// Grass curing factor for the O1a/O1b fuel types.
///
/// Below 58.8% curing only the linear segment remains, which goes to zero;
/// fully green grass does not carry fire.
#[must_use]
pub fn grass_curing_factor(grass_cure: f64) -> f64 {
    let delta = grass_cure - 58.8;
    let cf = if grass_cure < 58.8 {
        0.176 + 0.020 * delta
    } else {
        0.176 + 0.020 * delta * (1.0 - 0.008 * delta)
    };
    cf.clamp(0.0, 1.0)
}

/// Basic ROS curve `a * (1 - exp(-b * ISI))^c`.
fn ros_curve(spec: &FuelSpec, isi: f64) -> f64 {
    spec.a * (1.0 - (-spec.b * isi).exp()).powf(spec.c)
}

/// Surface rate of spread for a fuel type (m/min).
///
/// M1/M2 blend the C2 and D1 curves by percent conifer, with the BUI effect
/// applied to the conifer component only; everything else follows the basic
/// curve with its group's corrections.
fn surface_ros(spec: &FuelSpec, isi: f64, bui: f64, pc: f64, grass_cure: f64) -> f64 {
    if spec.code.is_mixedwood_blend() {
        let c2 = FuelType::C2.spec();
        let d1 = FuelType::D1.spec();

        let ros_c = ros_curve(c2, isi) * bui_effect(bui, c2.q, c2.bui0);
        let mut ros_d = ros_curve(d1, isi);
        if spec.code == FuelType::M2 {
            ros_d *= M2_GREENUP_FACTOR;
        }

        return (pc / 100.0) * ros_c + (1.0 - pc / 100.0) * ros_d;
    }

    let mut ros = ros_curve(spec, isi);

    if matches!(
        spec.group,
        FuelGroup::Conifer | FuelGroup::Slash | FuelGroup::Mixedwood
    ) {
        ros *= bui_effect(bui, spec.q, spec.bui0);
    }

    if spec.group == FuelGroup::Grass {
        ros *= grass_curing_factor(grass_cure);
    }

    ros
}

/// Byram (1959) flame length: `L = 0.0775 * I^0.46`.
#[must_use]
pub fn flame_length(hfi: f64) -> f64 {
    if hfi <= 0.0 {
        return 0.0;
    }
    0.0775 * hfi.powf(0.46)
}

/// Complete fire behavior prediction for one point.
///
/// Computes ISI and BUI from the moisture codes, the surface ROS for the
/// fuel type, the crown-fire transition, and the resulting intensities.
/// Pass [`FbpOptions::default`] for flat terrain and conventional
/// mixedwood/grass settings.
#[must_use]
pub fn calculate_fbp(
    fuel: FuelType,
    wind_speed: f64,
    ffmc: f64,
    dmc: f64,
    dc: f64,
    options: FbpOptions,
) -> FbpResult {
    let spec = fuel.spec();

    let isi = calculate_isi(ffmc, wind_speed);
    let bui = calculate_bui(dmc, dc);

    let mut ros_surface = surface_ros(
        spec,
        isi,
        bui,
        options.percent_conifer,
        options.grass_cure,
    );

    // Non-directional slope correction; the spread engine applies the
    // directional factor per ray instead and passes slope 0 here.
    if options.slope_percent > 0.0 {
        ros_surface *= slope_factor(options.slope_percent);
    }

    let sfc = spec.sfc;
    let sfi = HEAT_OF_COMBUSTION * sfc * ros_surface / 60.0;

    let csi = critical_surface_intensity(spec.cbh, options.foliar_moisture);
    let cfb = crown_fraction_burned(sfi, csi);
    let fire_type = classify_fire_type(cfb);
    let ros_crown = if cfb > 0.0 {
        crown_ros(ros_surface, spec)
    } else {
        ros_surface
    };

    let ros_final = ros_surface * (1.0 - cfb) + ros_crown * cfb;

    let cfc = cfb * spec.cfl;
    let tfc = sfc + cfc;
    let hfi = HEAT_OF_COMBUSTION * tfc * ros_final / 60.0;

    FbpResult {
        fuel_type: fuel,
        isi,
        bui,
        ros_surface,
        ros_final,
        sfc,
        cfc,
        tfc,
        sfi,
        hfi,
        cfb,
        fire_type,
        flame_length: flame_length(hfi),
    }
}
