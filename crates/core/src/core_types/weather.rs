//! Weather observations driving a simulation run.

use serde::{Deserialize, Serialize};

/// A single set of noon weather observations.
///
/// Wind direction uses the meteorological FROM convention: 270 means wind
/// blowing from the west, pushing fire toward the east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    /// Noon temperature (Celsius)
    pub temperature: f64,
    /// Noon relative humidity (%)
    pub relative_humidity: f64,
    /// Wind speed at 10 m (km/h)
    pub wind_speed: f64,
    /// Wind direction, degrees FROM, [0, 360)
    pub wind_direction: f64,
    /// Rainfall over the last 24 hours (mm)
    pub precipitation_24h: f64,
}

impl WeatherInput {
    #[must_use]
    pub const fn new(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        wind_direction: f64,
        precipitation_24h: f64,
    ) -> Self {
        Self {
            temperature,
            relative_humidity,
            wind_speed,
            wind_direction,
            precipitation_24h,
        }
    }
}
