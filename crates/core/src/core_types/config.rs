//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::core_types::weather::WeatherInput;
use crate::error::FireSimError;

/// FFMC assumed when no override is supplied.
pub const DEFAULT_FFMC: f64 = 85.0;
/// DMC assumed when no override is supplied.
pub const DEFAULT_DMC: f64 = 40.0;
/// DC assumed when no override is supplied.
pub const DEFAULT_DC: f64 = 200.0;

/// Immutable configuration for one fire spread simulation.
///
/// Constructed through [`SimulationConfig::new`], which enforces the
/// documented bounds; a config that exists is a valid one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub ignition_lat: f64,
    pub ignition_lng: f64,
    pub weather: WeatherInput,
    /// Simulated duration, (0, 24] hours
    pub duration_hours: f64,
    /// Snapshot cadence, (0, 120] minutes
    pub snapshot_interval_minutes: f64,
    /// FFMC override; [`DEFAULT_FFMC`] when absent
    pub ffmc: Option<f64>,
    /// DMC override; [`DEFAULT_DMC`] when absent
    pub dmc: Option<f64>,
    /// DC override; [`DEFAULT_DC`] when absent
    pub dc: Option<f64>,
}

impl SimulationConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    /// Returns [`FireSimError::InvalidConfig`] when `duration_hours` is
    /// outside (0, 24], `snapshot_interval_minutes` is outside (0, 120],
    /// or the ignition point is outside geographic range.
    pub fn new(
        ignition_lat: f64,
        ignition_lng: f64,
        weather: WeatherInput,
        duration_hours: f64,
        snapshot_interval_minutes: f64,
    ) -> Result<Self, FireSimError> {
        if !(duration_hours > 0.0 && duration_hours <= 24.0) {
            return Err(FireSimError::InvalidConfig(format!(
                "duration_hours must be in (0, 24], got {duration_hours}"
            )));
        }
        if !(snapshot_interval_minutes > 0.0 && snapshot_interval_minutes <= 120.0) {
            return Err(FireSimError::InvalidConfig(format!(
                "snapshot_interval_minutes must be in (0, 120], got {snapshot_interval_minutes}"
            )));
        }
        if !(-90.0..=90.0).contains(&ignition_lat) {
            return Err(FireSimError::InvalidConfig(format!(
                "ignition_lat must be in [-90, 90], got {ignition_lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&ignition_lng) {
            return Err(FireSimError::InvalidConfig(format!(
                "ignition_lng must be in [-180, 180], got {ignition_lng}"
            )));
        }

        Ok(Self {
            ignition_lat,
            ignition_lng,
            weather,
            duration_hours,
            snapshot_interval_minutes,
            ffmc: None,
            dmc: None,
            dc: None,
        })
    }

    /// Override the FWI moisture codes instead of the defaults.
    #[must_use]
    pub fn with_fwi(mut self, ffmc: f64, dmc: f64, dc: f64) -> Self {
        self.ffmc = Some(ffmc);
        self.dmc = Some(dmc);
        self.dc = Some(dc);
        self
    }

    /// FFMC to use, applying the default when no override was set.
    #[must_use]
    pub fn ffmc_or_default(&self) -> f64 {
        self.ffmc.unwrap_or(DEFAULT_FFMC)
    }

    /// DMC to use, applying the default when no override was set.
    #[must_use]
    pub fn dmc_or_default(&self) -> f64 {
        self.dmc.unwrap_or(DEFAULT_DMC)
    }

    /// DC to use, applying the default when no override was set.
    #[must_use]
    pub fn dc_or_default(&self) -> f64 {
        self.dc.unwrap_or(DEFAULT_DC)
    }
}
