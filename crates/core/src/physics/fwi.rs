//! Canadian Fire Weather Index (FWI) System.
//!
//! Computes the six FWI components from standard noon weather observations:
//! the three moisture codes (FFMC, DMC, DC) carried day to day, and the
//! three derived indices (ISI, BUI, FWI).
//!
//! # References
//! - Van Wagner, C.E., Pickett, T.L. (1985). "Equations and FORTRAN program
//!   for the Canadian Forest Fire Weather Index System." Technical Report 33.
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3.

use serde::{Deserialize, Serialize};

use crate::error::FireSimError;

/// Spring startup FFMC.
pub const FFMC_STARTUP: f64 = 85.0;
/// Spring startup DMC.
pub const DMC_STARTUP: f64 = 6.0;
/// Spring startup DC.
pub const DC_STARTUP: f64 = 15.0;

// Day length factors by month for ~46N latitude, the standard FWI tables.
// Index 0 = January.
const DMC_DAY_LENGTH: [f64; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];
const DC_DAY_LENGTH: [f64; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];

fn dmc_day_length(month: u32) -> Result<f64, FireSimError> {
    if (1..=12).contains(&month) {
        Ok(DMC_DAY_LENGTH[(month - 1) as usize])
    } else {
        Err(FireSimError::MonthOutOfRange(month))
    }
}

fn dc_day_length(month: u32) -> Result<f64, FireSimError> {
    if (1..=12).contains(&month) {
        Ok(DC_DAY_LENGTH[(month - 1) as usize])
    } else {
        Err(FireSimError::MonthOutOfRange(month))
    }
}

/// All six FWI components for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FwiResult {
    /// Fine Fuel Moisture Code (0-101)
    pub ffmc: f64,
    /// Duff Moisture Code
    pub dmc: f64,
    /// Drought Code
    pub dc: f64,
    /// Initial Spread Index
    pub isi: f64,
    /// Buildup Index
    pub bui: f64,
    /// Fire Weather Index
    pub fwi: f64,
}

/// Fine Fuel Moisture Code from yesterday's FFMC and today's weather.
///
/// Tracks moisture of the top 1-2 cm of surface litter (time lag ~2/3 day).
/// Rain above 0.5 mm wets the fuel first; the result then relaxes toward
/// the drying or wetting equilibrium. Output is clamped to [0, 101].
#[must_use]
pub fn calculate_ffmc(temp: f64, rh: f64, wind: f64, rain: f64, ffmc_prev: f64) -> f64 {
    let mut mo = 147.2 * (101.0 - ffmc_prev) / (59.5 + ffmc_prev);

    if rain > 0.5 {
        let rf = rain - 0.5;
        let mut mr =
            mo + 42.5 * rf * (-100.0 / (251.0 - mo)).exp() * (1.0 - (-6.93 / rf).exp());
        if mo > 150.0 {
            // Extra uptake for over-saturated litter
            mr += 0.0015 * (mo - 150.0).powi(2) * rf.sqrt();
        }
        mo = mr.min(250.0);
    }

    // Equilibrium moisture content for drying
    let ed = 0.942 * rh.powf(0.679)
        + 11.0 * ((rh - 100.0) / 10.0).exp()
        + 0.18 * (21.1 - temp) * (1.0 - (-0.115 * rh).exp());

    let m = if mo > ed {
        let ko = 0.424 * (1.0 - (rh / 100.0).powf(1.7))
            + 0.0694 * wind.sqrt() * (1.0 - (rh / 100.0).powi(8));
        let kd = ko * 0.581 * (0.0365 * temp).exp();
        ed + (mo - ed) * 10.0_f64.powf(-kd)
    } else {
        // Equilibrium moisture content for wetting
        let ew = 0.618 * rh.powf(0.753)
            + 10.0 * ((rh - 100.0) / 10.0).exp()
            + 0.18 * (21.1 - temp) * (1.0 - (-0.115 * rh).exp());
        if mo < ew {
            let kl = 0.424 * (1.0 - ((100.0 - rh) / 100.0).powf(1.7))
                + 0.0694 * wind.sqrt() * (1.0 - ((100.0 - rh) / 100.0).powi(8));
            let kw = kl * 0.581 * (0.0365 * temp).exp();
            ew - (ew - mo) * 10.0_f64.powf(-kw)
        } else {
            mo
        }
    };

    (59.5 * (250.0 - m) / (147.2 + m)).clamp(0.0, 101.0)
}

/// Duff Moisture Code from yesterday's DMC and today's weather.
///
/// Tracks moisture of loosely compacted organic layers 7-10 cm deep
/// (time lag ~15 days). Rain above 1.5 mm is effective; drying only occurs
/// above -1.1 C.
///
/// # Errors
/// Returns [`FireSimError::MonthOutOfRange`] when `month` is outside 1-12.
pub fn calculate_dmc(
    temp: f64,
    rh: f64,
    rain: f64,
    month: u32,
    dmc_prev: f64,
) -> Result<f64, FireSimError> {
    let dl = dmc_day_length(month)?;

    let mut dmc_prev = dmc_prev;
    if rain > 1.5 {
        let re = 0.92 * rain - 1.27;
        let mo = 20.0 + (5.6348 - dmc_prev / 43.43).exp();

        let b = if dmc_prev <= 33.0 {
            100.0 / (0.5 + 0.3 * dmc_prev)
        } else if dmc_prev <= 65.0 {
            14.0 - 1.3 * dmc_prev.ln()
        } else {
            6.2 * dmc_prev.ln() - 17.2
        };

        let mr = mo + 1000.0 * re / (48.77 + b * re);
        let pr = 244.72 - 43.43 * (mr - 20.0).ln();
        dmc_prev = pr.max(0.0);
    }

    let dmc = if temp > -1.1 {
        let k = 1.894 * (temp + 1.1) * (100.0 - rh) * dl * 1e-4;
        dmc_prev + 100.0 * k
    } else {
        dmc_prev
    };

    Ok(dmc.max(0.0))
}

/// Drought Code from yesterday's DC and today's weather.
///
/// Tracks moisture of deep compact organic layers 10-20 cm deep
/// (time lag ~52 days). Rain above 2.8 mm is effective; evaporation only
/// occurs above -2.8 C.
///
/// # Errors
/// Returns [`FireSimError::MonthOutOfRange`] when `month` is outside 1-12.
pub fn calculate_dc(
    temp: f64,
    rain: f64,
    month: u32,
    dc_prev: f64,
) -> Result<f64, FireSimError> {
    let lf = dc_day_length(month)?;

    let mut dc_prev = dc_prev;
    if rain > 2.8 {
        let rd = 0.83 * rain - 1.27;
        let qo = 800.0 * (-dc_prev / 400.0).exp();
        let qr = qo + 3.937 * rd;
        let dr = 400.0 * (800.0 / qr).ln();
        dc_prev = dr.max(0.0);
    }

    let dc = if temp > -2.8 {
        let v = (0.36 * (temp + 2.8) + lf).max(0.0);
        dc_prev + 0.5 * v
    } else {
        dc_prev
    };

    Ok(dc.max(0.0))
}

/// Initial Spread Index from FFMC and wind speed.
#[must_use]
pub fn calculate_isi(ffmc: f64, wind: f64) -> f64 {
    let m = 147.2 * (101.0 - ffmc) / (59.5 + ffmc);
    let ff = 91.9 * (-0.1386 * m).exp() * (1.0 + m.powf(5.31) / 4.93e7);
    let fw = (0.05039 * wind).exp();
    0.208 * fw * ff
}

/// Buildup Index from DMC and DC.
#[must_use]
pub fn calculate_bui(dmc: f64, dc: f64) -> f64 {
    if dmc == 0.0 && dc == 0.0 {
        return 0.0;
    }
    let bui = if dmc <= 0.4 * dc {
        0.8 * dmc * dc / (dmc + 0.4 * dc)
    } else {
        dmc - (1.0 - 0.8 * dc / (dmc + 0.4 * dc)) * (0.92 + (0.0114 * dmc).powf(1.7))
    };
    bui.max(0.0)
}

/// Fire Weather Index from ISI and BUI.
#[must_use]
pub fn calculate_fwi(isi: f64, bui: f64) -> f64 {
    let fd = if bui <= 80.0 {
        0.626 * bui.powf(0.809) + 2.0
    } else {
        1000.0 / (25.0 + 108.64 * (-0.023 * bui).exp())
    };

    let b = 0.1 * isi * fd;
    if b <= 1.0 {
        b
    } else {
        (2.72 * (0.434 * b.ln()).powf(0.647)).exp()
    }
}

/// Stateful daily FWI accumulator.
///
/// Holds the previous day's three moisture codes and advances them once per
/// [`calculate_daily`](FwiCalculator::calculate_daily) call. One calculator
/// tracks one weather sequence; do not share across interleaved sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct FwiCalculator {
    pub ffmc_prev: f64,
    pub dmc_prev: f64,
    pub dc_prev: f64,
}

impl Default for FwiCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FwiCalculator {
    /// Calculator seeded with spring startup values (85 / 6 / 15).
    #[must_use]
    pub fn new() -> Self {
        Self::with_startup(FFMC_STARTUP, DMC_STARTUP, DC_STARTUP)
    }

    /// Calculator seeded with custom previous-day codes.
    #[must_use]
    pub fn with_startup(ffmc: f64, dmc: f64, dc: f64) -> Self {
        Self {
            ffmc_prev: ffmc,
            dmc_prev: dmc,
            dc_prev: dc,
        }
    }

    /// Restore spring startup values.
    pub fn reset(&mut self) {
        self.reset_to(FFMC_STARTUP, DMC_STARTUP, DC_STARTUP);
    }

    /// Restore supplied values.
    pub fn reset_to(&mut self, ffmc: f64, dmc: f64, dc: f64) {
        self.ffmc_prev = ffmc;
        self.dmc_prev = dmc;
        self.dc_prev = dc;
    }

    /// Compute all six FWI components for one day and advance state.
    ///
    /// Call once per day in sequence; the calculator carries the moisture
    /// codes forward internally.
    ///
    /// # Errors
    /// Returns [`FireSimError::MonthOutOfRange`] when `month` is outside
    /// 1-12; state is left untouched in that case.
    pub fn calculate_daily(
        &mut self,
        temp: f64,
        rh: f64,
        wind: f64,
        rain: f64,
        month: u32,
    ) -> Result<FwiResult, FireSimError> {
        let ffmc = calculate_ffmc(temp, rh, wind, rain, self.ffmc_prev);
        let dmc = calculate_dmc(temp, rh, rain, month, self.dmc_prev)?;
        let dc = calculate_dc(temp, rain, month, self.dc_prev)?;
        let isi = calculate_isi(ffmc, wind);
        let bui = calculate_bui(dmc, dc);
        let fwi = calculate_fwi(isi, bui);

        self.ffmc_prev = ffmc;
        self.dmc_prev = dmc;
        self.dc_prev = dc;

        Ok(FwiResult {
            ffmc,
            dmc,
            dc,
            isi,
            bui,
            fwi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffmc_dry_hot_conditions_increase() {
        let ffmc = calculate_ffmc(30.0, 20.0, 20.0, 0.0, 85.0);
        assert!(ffmc > 85.0, "hot dry windy day should raise FFMC, got {ffmc}");
    }

    #[test]
    fn ffmc_rain_decreases() {
        let dry = calculate_ffmc(25.0, 40.0, 10.0, 0.0, 90.0);
        let wet = calculate_ffmc(25.0, 40.0, 10.0, 10.0, 90.0);
        assert!(wet < dry, "rain should lower FFMC ({wet} vs {dry})");
    }

    #[test]
    fn ffmc_stays_in_range() {
        let high = calculate_ffmc(40.0, 5.0, 50.0, 0.0, 100.0);
        assert!((0.0..=101.0).contains(&high));

        let low = calculate_ffmc(5.0, 95.0, 0.0, 50.0, 10.0);
        assert!(low >= 0.0, "heavy rain must not push FFMC negative, got {low}");
    }

    #[test]
    fn dmc_warm_dry_increases() {
        let dmc = calculate_dmc(25.0, 30.0, 0.0, 7, 20.0).unwrap();
        assert!(dmc > 20.0);
    }

    #[test]
    fn dmc_rain_decreases() {
        let dry = calculate_dmc(20.0, 50.0, 0.0, 7, 60.0).unwrap();
        let wet = calculate_dmc(20.0, 50.0, 20.0, 7, 60.0).unwrap();
        assert!(wet < dry);
    }

    #[test]
    fn dmc_no_drying_below_minus_1_1() {
        let dmc = calculate_dmc(-5.0, 50.0, 0.0, 1, 30.0).unwrap();
        assert_eq!(dmc, 30.0);
    }

    #[test]
    fn dmc_never_negative() {
        let dmc = calculate_dmc(10.0, 80.0, 50.0, 7, 5.0).unwrap();
        assert!(dmc >= 0.0);
    }

    #[test]
    fn dmc_rain_branch_covers_all_b_segments() {
        // b is piecewise in dmc_prev at 33 and 65; rain must pull every
        // segment below its no-rain counterpart
        for dmc_prev in [10.0, 50.0, 90.0] {
            let dry = calculate_dmc(20.0, 50.0, 0.0, 7, dmc_prev).unwrap();
            let wet = calculate_dmc(20.0, 50.0, 20.0, 7, dmc_prev).unwrap();
            assert!(wet >= 0.0);
            assert!(wet < dry, "rain should lower DMC from prev {dmc_prev}");
        }
    }

    #[test]
    fn dc_warm_dry_increases() {
        let dc = calculate_dc(25.0, 0.0, 7, 200.0).unwrap();
        assert!(dc > 200.0);
    }

    #[test]
    fn dc_heavy_rain_decreases() {
        let dc = calculate_dc(20.0, 30.0, 7, 300.0).unwrap();
        assert!(dc < 300.0);
    }

    #[test]
    fn dc_never_negative() {
        let dc = calculate_dc(10.0, 100.0, 7, 10.0).unwrap();
        assert!(dc >= 0.0);
    }

    #[test]
    fn dc_winter_day_length_negative_but_bounded() {
        // January l_f is -1.6; the temperature term is clamped at zero
        let dc = calculate_dc(-1.0, 0.0, 1, 50.0).unwrap();
        assert_eq!(dc, 50.0);
    }

    #[test]
    fn month_out_of_range_rejected() {
        assert_eq!(
            calculate_dmc(20.0, 50.0, 0.0, 0, 20.0).unwrap_err(),
            FireSimError::MonthOutOfRange(0)
        );
        assert_eq!(
            calculate_dc(20.0, 0.0, 13, 200.0).unwrap_err(),
            FireSimError::MonthOutOfRange(13)
        );
    }

    #[test]
    fn isi_increases_with_wind_and_ffmc() {
        assert!(calculate_isi(90.0, 30.0) > calculate_isi(90.0, 5.0));
        assert!(calculate_isi(95.0, 20.0) > calculate_isi(70.0, 20.0));
        assert!(calculate_isi(0.0, 0.0) >= 0.0);
    }

    #[test]
    fn isi_known_range() {
        let isi = calculate_isi(90.0, 20.0);
        assert!(
            isi > 8.0 && isi < 15.0,
            "ISI(90, 20) expected in (8, 15), got {isi}"
        );
    }

    #[test]
    fn bui_zero_when_both_zero() {
        assert_eq!(calculate_bui(0.0, 0.0), 0.0);
    }

    #[test]
    fn bui_low_dmc_branch() {
        let bui = calculate_bui(20.0, 200.0);
        assert!(bui > 0.0 && bui < 40.0, "BUI(20, 200) expected in (0, 40), got {bui}");
    }

    #[test]
    fn bui_increases_with_dmc() {
        assert!(calculate_bui(60.0, 200.0) > calculate_bui(20.0, 200.0));
        assert!(calculate_bui(1.0, 1.0) >= 0.0);
    }

    #[test]
    fn fwi_increases_with_components() {
        assert!(calculate_fwi(20.0, 50.0) > calculate_fwi(5.0, 50.0));
        assert!(calculate_fwi(10.0, 80.0) > calculate_fwi(10.0, 20.0));
        assert!(calculate_fwi(0.0, 0.0) >= 0.0);
    }

    #[test]
    fn daily_sequence_carries_state() {
        let mut calc = FwiCalculator::new();

        let day1 = calc.calculate_daily(20.0, 50.0, 15.0, 0.0, 7).unwrap();
        assert!(day1.ffmc > 0.0);
        assert!(day1.dmc > 0.0);
        assert!(day1.dc > 0.0);

        let day2 = calc.calculate_daily(30.0, 20.0, 25.0, 0.0, 7).unwrap();
        assert!(day2.ffmc > day1.ffmc, "hot dry day 2 should dry further");
        assert!(day2.fwi > 0.0);

        let day3 = calc.calculate_daily(15.0, 80.0, 5.0, 15.0, 7).unwrap();
        assert!(day3.ffmc < day2.ffmc, "rain on day 3 should lower FFMC");
    }

    #[test]
    fn reset_restores_startup() {
        let mut calc = FwiCalculator::new();
        calc.calculate_daily(30.0, 20.0, 20.0, 0.0, 7).unwrap();
        calc.reset();
        assert_eq!(calc.ffmc_prev, FFMC_STARTUP);
        assert_eq!(calc.dmc_prev, DMC_STARTUP);
        assert_eq!(calc.dc_prev, DC_STARTUP);
    }

    #[test]
    fn reset_to_custom_values() {
        let mut calc = FwiCalculator::with_startup(90.0, 40.0, 250.0);
        calc.calculate_daily(25.0, 40.0, 10.0, 0.0, 6).unwrap();
        calc.reset_to(90.0, 40.0, 250.0);
        assert_eq!(calc.ffmc_prev, 90.0);
        assert_eq!(calc.dmc_prev, 40.0);
        assert_eq!(calc.dc_prev, 250.0);
    }

    #[test]
    fn daily_returns_all_components() {
        let mut calc = FwiCalculator::new();
        let r = calc.calculate_daily(25.0, 40.0, 15.0, 0.0, 7).unwrap();
        assert!(r.ffmc >= 0.0);
        assert!(r.dmc >= 0.0);
        assert!(r.dc >= 0.0);
        assert!(r.isi >= 0.0);
        assert!(r.bui >= 0.0);
        assert!(r.fwi >= 0.0);
    }

    #[test]
    fn invalid_month_leaves_state_untouched() {
        let mut calc = FwiCalculator::new();
        assert!(calc.calculate_daily(25.0, 40.0, 15.0, 0.0, 13).is_err());
        assert_eq!(calc.ffmc_prev, FFMC_STARTUP);
        assert_eq!(calc.dmc_prev, DMC_STARTUP);
        assert_eq!(calc.dc_prev, DC_STARTUP);
    }
}
