//! Canadian FBP fuel type catalog.
//!
//! All 18 standard FBP fuel types with their rate-of-spread, buildup-effect
//! and crown-fire parameters. Every other module that needs fuel parameters
//! looks them up here; the constants exist in exactly one place.
//!
//! # References
//! - Forestry Canada Fire Danger Group (1992). "Development and Structure of
//!   the Canadian Forest Fire Behavior Prediction System."
//!   Information Report ST-X-3, Tables 4-6.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::FireSimError;

/// Broad vegetation group a fuel type belongs to.
///
/// The group decides which ROS corrections apply: conifer, slash and
/// mixedwood types take the BUI effect, grass types take the curing factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelGroup {
    Conifer,
    Deciduous,
    Mixedwood,
    Grass,
    Slash,
}

/// Canadian FBP fuel type codes.
///
/// Parses from and displays as the standard code strings ("C2", "O1a", ...).
/// Any other string fails; see [`FuelType::from_code`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum FuelType {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    D1,
    D2,
    M1,
    M2,
    M3,
    M4,
    O1a,
    O1b,
    S1,
    S2,
    S3,
}

/// Complete parameter record for a single FBP fuel type.
///
/// Units: `a` is m/min, `b` and `c` are dimensionless ROS equation shape
/// parameters, `cbh` is meters, `cfl` and `sfc` are kg/m2, `cbd` is kg/m3.
///
/// M1 and M2 carry `a = b = c = 0`: their ROS is a percent-conifer blend of
/// C2 and D1 rather than a direct curve (the blend branches on the fuel
/// code, never on these zeros).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSpec {
    pub code: FuelType,
    pub name: &'static str,
    pub group: FuelGroup,
    /// ROS equation parameter a (m/min)
    pub a: f64,
    /// ROS equation parameter b
    pub b: f64,
    /// ROS equation parameter c
    pub c: f64,
    /// BUI effect parameter q
    pub q: f64,
    /// BUI effect threshold BUI_0
    pub bui0: f64,
    /// Crown base height (m), 0 for non-crown fuel types
    pub cbh: f64,
    /// Crown fuel load (kg/m2), 0 for non-crown fuel types
    pub cfl: f64,
    /// Surface fuel consumption (kg/m2)
    pub sfc: f64,
    /// Crown bulk density (kg/m3)
    pub cbd: f64,
}

/// The single source of truth for all fuel parameters (ST-X-3 Tables 4-6).
///
/// Indexed by `FuelType` discriminant; see [`FuelType::spec`].
const FUEL_CATALOG: [FuelSpec; 18] = [
    FuelSpec {
        code: FuelType::C1,
        name: "Spruce-Lichen Woodland",
        group: FuelGroup::Conifer,
        a: 90.0,
        b: 0.0649,
        c: 4.5,
        q: 0.90,
        bui0: 72.0,
        cbh: 2.0,
        cfl: 0.75,
        sfc: 0.75,
        cbd: 0.11,
    },
    FuelSpec {
        code: FuelType::C2,
        name: "Boreal Spruce",
        group: FuelGroup::Conifer,
        a: 110.0,
        b: 0.0282,
        c: 1.5,
        q: 0.70,
        bui0: 64.0,
        cbh: 3.0,
        cfl: 0.80,
        sfc: 0.80,
        cbd: 0.18,
    },
    FuelSpec {
        code: FuelType::C3,
        name: "Mature Jack or Lodgepole Pine",
        group: FuelGroup::Conifer,
        a: 110.0,
        b: 0.0444,
        c: 3.0,
        q: 0.75,
        bui0: 62.0,
        cbh: 8.0,
        cfl: 1.15,
        sfc: 1.15,
        cbd: 0.09,
    },
    FuelSpec {
        code: FuelType::C4,
        name: "Immature Jack or Lodgepole Pine",
        group: FuelGroup::Conifer,
        a: 110.0,
        b: 0.0293,
        c: 1.5,
        q: 0.75,
        bui0: 66.0,
        cbh: 4.0,
        cfl: 1.20,
        sfc: 1.20,
        cbd: 0.13,
    },
    FuelSpec {
        code: FuelType::C5,
        name: "Red and White Pine",
        group: FuelGroup::Conifer,
        a: 30.0,
        b: 0.0697,
        c: 4.0,
        q: 0.80,
        bui0: 56.0,
        cbh: 18.0,
        cfl: 1.20,
        sfc: 1.20,
        cbd: 0.14,
    },
    FuelSpec {
        code: FuelType::C6,
        name: "Conifer Plantation",
        group: FuelGroup::Conifer,
        a: 30.0,
        b: 0.0800,
        c: 3.0,
        q: 0.80,
        bui0: 62.0,
        cbh: 7.0,
        cfl: 1.80,
        sfc: 1.80,
        cbd: 0.17,
    },
    FuelSpec {
        code: FuelType::C7,
        name: "Ponderosa Pine/Douglas-fir",
        group: FuelGroup::Conifer,
        a: 45.0,
        b: 0.0305,
        c: 2.0,
        q: 0.85,
        bui0: 106.0,
        cbh: 10.0,
        cfl: 0.50,
        sfc: 0.50,
        cbd: 0.07,
    },
    FuelSpec {
        code: FuelType::D1,
        name: "Leafless Aspen",
        group: FuelGroup::Deciduous,
        a: 30.0,
        b: 0.0232,
        c: 1.6,
        q: 0.90,
        bui0: 32.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 0.35,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::D2,
        name: "Green Aspen",
        group: FuelGroup::Deciduous,
        a: 6.0,
        b: 0.0232,
        c: 1.6,
        q: 0.90,
        bui0: 32.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 0.35,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::M1,
        name: "Boreal Mixedwood - Leafless",
        group: FuelGroup::Mixedwood,
        a: 0.0,
        b: 0.0,
        c: 0.0,
        q: 0.80,
        bui0: 50.0,
        cbh: 6.0,
        cfl: 0.80,
        sfc: 0.60,
        cbd: 0.10,
    },
    FuelSpec {
        code: FuelType::M2,
        name: "Boreal Mixedwood - Green",
        group: FuelGroup::Mixedwood,
        a: 0.0,
        b: 0.0,
        c: 0.0,
        q: 0.80,
        bui0: 50.0,
        cbh: 6.0,
        cfl: 0.80,
        sfc: 0.60,
        cbd: 0.10,
    },
    FuelSpec {
        code: FuelType::M3,
        name: "Dead Balsam Fir Mixedwood - Leafless",
        group: FuelGroup::Mixedwood,
        a: 120.0,
        b: 0.0572,
        c: 1.4,
        q: 0.80,
        bui0: 50.0,
        cbh: 6.0,
        cfl: 0.80,
        sfc: 0.80,
        cbd: 0.10,
    },
    FuelSpec {
        code: FuelType::M4,
        name: "Dead Balsam Fir Mixedwood - Green",
        group: FuelGroup::Mixedwood,
        a: 100.0,
        b: 0.0404,
        c: 3.0,
        q: 0.80,
        bui0: 50.0,
        cbh: 6.0,
        cfl: 0.80,
        sfc: 0.80,
        cbd: 0.10,
    },
    FuelSpec {
        code: FuelType::O1a,
        name: "Matted Grass",
        group: FuelGroup::Grass,
        a: 190.0,
        b: 0.0310,
        c: 1.4,
        q: 1.0,
        bui0: 1.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 0.35,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::O1b,
        name: "Standing Grass",
        group: FuelGroup::Grass,
        a: 250.0,
        b: 0.0350,
        c: 1.7,
        q: 1.0,
        bui0: 1.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 0.35,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::S1,
        name: "Jack or Lodgepole Pine Slash",
        group: FuelGroup::Slash,
        a: 75.0,
        b: 0.0297,
        c: 1.3,
        q: 0.75,
        bui0: 38.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 4.5,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::S2,
        name: "White Spruce/Balsam Slash",
        group: FuelGroup::Slash,
        a: 40.0,
        b: 0.0438,
        c: 1.7,
        q: 0.75,
        bui0: 63.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 4.5,
        cbd: 0.0,
    },
    FuelSpec {
        code: FuelType::S3,
        name: "Coastal Cedar/Hemlock/Douglas-fir Slash",
        group: FuelGroup::Slash,
        a: 55.0,
        b: 0.0829,
        c: 3.2,
        q: 0.75,
        bui0: 31.0,
        cbh: 0.0,
        cfl: 0.0,
        sfc: 4.5,
        cbd: 0.0,
    },
];

impl FuelType {
    /// Look up the full parameter record for this fuel type.
    #[must_use]
    pub fn spec(self) -> &'static FuelSpec {
        &FUEL_CATALOG[self as usize]
    }

    /// Vegetation group of this fuel type.
    #[must_use]
    pub fn group(self) -> FuelGroup {
        self.spec().group
    }

    /// Parse a fuel code string, failing on anything outside the 18 codes.
    ///
    /// # Errors
    /// Returns [`FireSimError::UnknownFuelType`] for unrecognized strings.
    pub fn from_code(code: &str) -> Result<Self, FireSimError> {
        Self::from_str(code).map_err(|_| FireSimError::UnknownFuelType(code.to_string()))
    }

    /// True for the M1/M2 mixedwood types whose ROS is a C2/D1 blend.
    #[must_use]
    pub fn is_mixedwood_blend(self) -> bool {
        matches!(self, FuelType::M1 | FuelType::M2)
    }
}
