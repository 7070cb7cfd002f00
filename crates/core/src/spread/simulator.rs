//! Fire spread simulation orchestrator.
//!
//! Seeds an ignition ring, walks internal timesteps through the Huygens
//! spread engine, and emits annotated perimeter frames at the configured
//! snapshot cadence as a lazy iterator: the next stretch of simulation only
//! runs when the caller asks for the next frame.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::core_types::config::SimulationConfig;
use crate::core_types::fuel::FuelType;
use crate::core_types::geo::{m_per_deg_lng, GeoPoint, M_PER_DEG_LAT};
use crate::grid::{FuelGrid, TerrainGrid};
use crate::physics::crown_fire::FireType;
use crate::physics::fbp::{calculate_fbp, FbpOptions};
use crate::spread::huygens::{expand_fire_front, simplify_front, SpreadConditions};
use crate::spread::perimeter::{polygon_area_ha, vertices_to_polygon};

/// Internal timestep when none is configured (minutes).
pub const DEFAULT_DT_MINUTES: f64 = 5.0;
/// Rays per Huygens wavelet when none is configured.
pub const DEFAULT_NUM_RAYS: usize = 36;

/// Radius of the seeded ignition ring (m). Starting from a single point
/// degenerates the first hull.
const IGNITION_RADIUS_M: f64 = 30.0;
/// Vertex count of the seeded ignition ring.
const IGNITION_VERTICES: usize = 12;

/// One snapshot of the fire at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationFrame {
    pub time_hours: f64,
    /// Closed perimeter ring as `(lat, lng)` pairs
    pub perimeter: Vec<(f64, f64)>,
    pub area_ha: f64,
    pub head_ros_m_min: f64,
    pub max_hfi_kw_m: f64,
    pub fire_type: FireType,
    pub flame_length_m: f64,
    /// Fraction of front vertices standing in each fuel type
    pub fuel_breakdown: FxHashMap<FuelType, f64>,
}

/// Huygens wavelet fire spread simulation.
///
/// Holds the run configuration plus optional fuel and terrain grids.
/// [`run`](Simulator::run) produces the lazy frame iterator; the simulator
/// itself is never mutated, so several runs can be taken from one instance.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    fuel_grid: Option<FuelGrid>,
    terrain_grid: Option<TerrainGrid>,
    default_fuel: FuelType,
    dt_minutes: f64,
    num_rays: usize,
}

impl Simulator {
    /// Simulator over uniform C2 fuel and flat terrain.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            fuel_grid: None,
            terrain_grid: None,
            default_fuel: FuelType::C2,
            dt_minutes: DEFAULT_DT_MINUTES,
            num_rays: DEFAULT_NUM_RAYS,
        }
    }

    /// Attach a spatial fuel grid.
    #[must_use]
    pub fn with_fuel_grid(mut self, grid: FuelGrid) -> Self {
        self.fuel_grid = Some(grid);
        self
    }

    /// Attach a terrain (slope/aspect) grid.
    #[must_use]
    pub fn with_terrain_grid(mut self, grid: TerrainGrid) -> Self {
        self.terrain_grid = Some(grid);
        self
    }

    /// Fuel type assumed where no grid is available.
    #[must_use]
    pub fn with_default_fuel(mut self, fuel: FuelType) -> Self {
        self.default_fuel = fuel;
        self
    }

    /// Internal timestep in minutes. Smaller is more accurate and slower.
    #[must_use]
    pub fn with_dt_minutes(mut self, dt_minutes: f64) -> Self {
        self.dt_minutes = dt_minutes;
        self
    }

    /// Rays per wavelet. More rays give smoother perimeters.
    #[must_use]
    pub fn with_num_rays(mut self, num_rays: usize) -> Self {
        self.num_rays = num_rays;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn default_fuel(&self) -> FuelType {
        self.default_fuel
    }

    /// Start the simulation, returning the lazy frame iterator.
    ///
    /// The first frame is the t=0 ignition ring; each later frame is
    /// produced on demand at the next snapshot boundary. Dropping the
    /// iterator abandons the run.
    #[must_use]
    pub fn run(&self) -> Frames<'_> {
        let config = &self.config;

        info!(
            "Starting simulation: ignition=({:.4}, {:.4}), duration={:.1}h, fuel={}",
            config.ignition_lat, config.ignition_lng, config.duration_hours, self.default_fuel
        );

        let conditions = SpreadConditions::new(
            config.weather.wind_speed,
            config.weather.wind_direction,
            config.ffmc_or_default(),
            config.dmc_or_default(),
            config.dc_or_default(),
        );

        Frames {
            simulator: self,
            conditions,
            front: ignition_front(config.ignition_lat, config.ignition_lng),
            total_minutes: config.duration_hours * 60.0,
            elapsed_minutes: 0.0,
            next_snapshot: config.snapshot_interval_minutes,
            started: false,
        }
    }

    /// Assemble a frame from the current front.
    ///
    /// Head ROS, HFI, fire type and flame length come from a fresh FBP
    /// evaluation of the default fuel under the run's weather; the
    /// breakdown is a histogram of per-vertex fuel lookups.
    fn build_frame(&self, front: &[GeoPoint], time_hours: f64) -> SimulationFrame {
        let config = &self.config;

        let area_ha = polygon_area_ha(front);

        let fbp = calculate_fbp(
            self.default_fuel,
            config.weather.wind_speed,
            config.ffmc_or_default(),
            config.dmc_or_default(),
            config.dc_or_default(),
            FbpOptions::default(),
        );

        let mut fuel_breakdown = FxHashMap::default();
        if let Some(grid) = &self.fuel_grid {
            let mut counts: FxHashMap<FuelType, usize> = FxHashMap::default();
            let mut total = 0_usize;
            for vertex in front {
                if let Some(fuel) = grid.fuel_at(vertex.lat, vertex.lng) {
                    *counts.entry(fuel).or_insert(0) += 1;
                    total += 1;
                }
            }
            if total > 0 {
                fuel_breakdown = counts
                    .into_iter()
                    .map(|(fuel, count)| (fuel, count as f64 / total as f64))
                    .collect();
            }
        } else {
            fuel_breakdown.insert(self.default_fuel, 1.0);
        }

        SimulationFrame {
            time_hours,
            perimeter: vertices_to_polygon(front),
            area_ha,
            head_ros_m_min: fbp.ros_final,
            max_hfi_kw_m: fbp.hfi,
            fire_type: fbp.fire_type,
            flame_length_m: fbp.flame_length,
            fuel_breakdown,
        }
    }
}

/// Seed front: a small circle of vertices around the ignition point.
fn ignition_front(lat: f64, lng: f64) -> Vec<GeoPoint> {
    let m_lng = m_per_deg_lng(lat);
    (0..IGNITION_VERTICES)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (IGNITION_VERTICES as f64);
            GeoPoint::new(
                lat + IGNITION_RADIUS_M * angle.cos() / M_PER_DEG_LAT,
                lng + IGNITION_RADIUS_M * angle.sin() / m_lng,
            )
        })
        .collect()
}

/// Lazy stream of simulation frames.
///
/// Created by [`Simulator::run`]. Each `next()` call advances the internal
/// timestep loop until the following snapshot boundary and returns that
/// frame; after the final frame the iterator is exhausted.
#[derive(Debug)]
pub struct Frames<'a> {
    simulator: &'a Simulator,
    conditions: SpreadConditions,
    front: Vec<GeoPoint>,
    total_minutes: f64,
    elapsed_minutes: f64,
    next_snapshot: f64,
    started: bool,
}

impl Iterator for Frames<'_> {
    type Item = SimulationFrame;

    fn next(&mut self) -> Option<SimulationFrame> {
        let sim = self.simulator;

        if !self.started {
            self.started = true;
            return Some(sim.build_frame(&self.front, 0.0));
        }

        if self.elapsed_minutes >= self.total_minutes {
            return None;
        }

        loop {
            let dt = sim
                .dt_minutes
                .min(self.total_minutes - self.elapsed_minutes);

            let expanded = expand_fire_front(
                &self.front,
                &self.conditions,
                sim.fuel_grid.as_ref(),
                sim.terrain_grid.as_ref(),
                dt,
                sim.default_fuel,
                sim.num_rays,
            );
            self.front = simplify_front(&expanded);
            self.elapsed_minutes += dt;

            let at_end = self.elapsed_minutes >= self.total_minutes;
            if self.elapsed_minutes >= self.next_snapshot || at_end {
                self.next_snapshot += sim.config.snapshot_interval_minutes;
                let time_hours = self.elapsed_minutes / 60.0;
                let frame = sim.build_frame(&self.front, time_hours);
                debug!(
                    "Snapshot at {:.2}h: {} vertices, {:.1} ha",
                    time_hours,
                    self.front.len(),
                    frame.area_ha
                );
                if at_end {
                    info!(
                        "Simulation complete: {:.1}h, final area={:.1} ha",
                        sim.config.duration_hours, frame.area_ha
                    );
                }
                return Some(frame);
            }
        }
    }
}
