//! Spatial fire spread: Huygens wavelets, perimeter analytics, simulator.

pub mod huygens;
pub mod perimeter;
pub mod simulator;

pub use huygens::{expand_fire_front, expand_vertex, simplify_front, SpreadConditions};
pub use simulator::{Frames, SimulationFrame, Simulator};
