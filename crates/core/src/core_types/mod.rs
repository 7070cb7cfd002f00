//! Shared data types: fuel catalog, geographic points, weather, config.

pub mod config;
pub mod fuel;
pub mod geo;
pub mod weather;

pub use config::{SimulationConfig, DEFAULT_DC, DEFAULT_DMC, DEFAULT_FFMC};
pub use fuel::{FuelGroup, FuelSpec, FuelType};
pub use geo::{m_per_deg_lng, GeoPoint, M_PER_DEG_LAT};
pub use weather::WeatherInput;
