//! Wildland fire spread simulation core.
//!
//! Simulates the growth of a wildland fire from a single ignition point
//! under given weather and fuel conditions, producing a time series of
//! perimeter polygons annotated with fire-behavior metrics.
//!
//! Point fire behavior follows the Canadian Fire Weather Index (FWI) and
//! Fire Behavior Prediction (FBP) Systems for all 18 standard fuel types;
//! spatial growth uses Huygens wavelet expansion of the fire front over
//! optional fuel and terrain grids.
//!
//! # Example
//!
//! ```
//! use firesim_core::{SimulationConfig, Simulator, WeatherInput};
//!
//! let weather = WeatherInput::new(25.0, 30.0, 20.0, 270.0, 0.0);
//! let config = SimulationConfig::new(51.0, -114.0, weather, 2.0, 30.0)
//!     .unwrap()
//!     .with_fwi(90.0, 45.0, 300.0);
//!
//! for frame in Simulator::new(config).run() {
//!     println!("t={:.1}h area={:.1} ha", frame.time_hours, frame.area_ha);
//! }
//! ```

pub mod core_types;
pub mod error;
pub mod grid;
pub mod physics;
pub mod spread;

// Re-export the main types
pub use core_types::{FuelGroup, FuelSpec, FuelType, GeoPoint, SimulationConfig, WeatherInput};
pub use error::FireSimError;
pub use grid::{FuelGrid, GridExtent, TerrainGrid};
pub use physics::{calculate_fbp, FbpOptions, FbpResult, FireType, FwiCalculator, FwiResult};
pub use spread::{Frames, SimulationFrame, Simulator, SpreadConditions};
