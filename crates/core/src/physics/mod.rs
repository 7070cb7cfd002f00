//! Point fire behavior models: FWI, FBP, crown fire, ellipse shape, slope.

pub mod crown_fire;
pub mod ellipse;
pub mod fbp;
pub mod fwi;
pub mod slope;

pub use crown_fire::FireType;
pub use fbp::{calculate_fbp, FbpOptions, FbpResult};
pub use fwi::{FwiCalculator, FwiResult};
