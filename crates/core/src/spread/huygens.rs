//! Huygens wavelet fire front propagation.
//!
//! The fire front is an ordered ring of vertices. Each timestep every
//! vertex is expanded as an elliptical wavelet shaped by the local FBP
//! output (ROS, wind, slope); the outer envelope of all wavelets becomes
//! the new front. This is the approach of the Prometheus fire growth model
//! and avoids the grid artifacts of cellular automata.
//!
//! # References
//! - Tymstra, C. et al. (2010). "Development and structure of Prometheus:
//!   the Canadian Wildland Fire Growth Simulation Model."
//!   Information Report NOR-X-417.

use nalgebra::Vector2;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::core_types::fuel::FuelType;
use crate::core_types::geo::GeoPoint;
use crate::grid::{FuelGrid, TerrainGrid};
use crate::physics::ellipse::{back_ros, elliptical_ros, flank_ros, length_to_breadth_ratio};
use crate::physics::fbp::{calculate_fbp, FbpOptions};
use crate::physics::slope::directional_slope_factor;

/// Head ROS below which a vertex is considered not spreading (m/min).
const NO_SPREAD_ROS: f64 = 0.001;

/// Minimum vertex count the simplified front is resampled to.
const MIN_RESAMPLE_VERTICES: usize = 36;

/// Weather and moisture conditions driving one spread step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadConditions {
    /// Wind speed at 10 m (km/h)
    pub wind_speed: f64,
    /// Wind direction, degrees FROM
    pub wind_direction: f64,
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
    /// Percent conifer for M1/M2 fuels
    pub pc: f64,
    /// Percent curing for O1a/O1b fuels
    pub grass_cure: f64,
}

impl SpreadConditions {
    /// Conditions with the conventional mixedwood (50%) and grass curing
    /// (60%) settings.
    #[must_use]
    pub const fn new(wind_speed: f64, wind_direction: f64, ffmc: f64, dmc: f64, dc: f64) -> Self {
        Self {
            wind_speed,
            wind_direction,
            ffmc,
            dmc,
            dc,
            pc: 50.0,
            grass_cure: 60.0,
        }
    }
}

/// Expand one fire front vertex as a Huygens wavelet.
///
/// Evaluates FBP for the local fuel under the given conditions (slope is
/// applied per ray, not here), then emits `num_rays` points on the spread
/// ellipse: rays every `360/num_rays` degrees from north, each displaced by
/// the elliptical ROS in that direction times `dt_minutes`, around a center
/// shifted downwind of the vertex. Returns just the vertex when the local
/// head ROS is effectively zero.
#[must_use]
pub fn expand_vertex(
    vertex: GeoPoint,
    conditions: &SpreadConditions,
    fuel: FuelType,
    slope_percent: f64,
    aspect_degrees: f64,
    dt_minutes: f64,
    num_rays: usize,
) -> Vec<GeoPoint> {
    let fbp = calculate_fbp(
        fuel,
        conditions.wind_speed,
        conditions.ffmc,
        conditions.dmc,
        conditions.dc,
        FbpOptions {
            slope_percent: 0.0,
            percent_conifer: conditions.pc,
            grass_cure: conditions.grass_cure,
            ..FbpOptions::default()
        },
    );

    let head_ros = fbp.ros_final;
    if head_ros <= NO_SPREAD_ROS {
        return vec![vertex];
    }

    let lbr = length_to_breadth_ratio(conditions.wind_speed);
    let back = back_ros(head_ros, lbr);
    let flank = flank_ros(head_ros, lbr);

    // Fire spreads downwind, opposite the meteorological FROM direction
    let spread_dir = (conditions.wind_direction + 180.0) % 360.0;
    let spread_dir_rad = spread_dir.to_radians();

    // The wavelet ellipse is centered downwind of the vertex
    let center_offset_m = (head_ros - back) / 2.0 * dt_minutes;
    let center_offset =
        Vector2::new(spread_dir_rad.sin(), spread_dir_rad.cos()) * center_offset_m;

    (0..num_rays)
        .map(|i| {
            // Ray direction in degrees from north, clockwise
            let ray_deg = 360.0 * (i as f64) / (num_rays as f64);

            let mut ray_ros = elliptical_ros(head_ros, back, flank, ray_deg - spread_dir);
            ray_ros *= directional_slope_factor(slope_percent, aspect_degrees, ray_deg);

            let dist_m = ray_ros * dt_minutes;
            let ray_rad = ray_deg.to_radians();
            let ray_vec = Vector2::new(ray_rad.sin(), ray_rad.cos()) * dist_m;

            vertex.displaced(center_offset + ray_vec)
        })
        .collect()
}

/// Expand the whole fire front by one timestep.
///
/// Each vertex looks up its local fuel and terrain, then expands as an
/// independent wavelet; vertices standing on non-fuel do not spread.
/// Expansion runs in parallel across vertices with the output concatenated
/// in input order, so results are deterministic. Returns the original front
/// when nothing spread at all.
#[must_use]
pub fn expand_fire_front(
    front: &[GeoPoint],
    conditions: &SpreadConditions,
    fuel_grid: Option<&FuelGrid>,
    terrain_grid: Option<&TerrainGrid>,
    dt_minutes: f64,
    default_fuel: FuelType,
    num_rays: usize,
) -> Vec<GeoPoint> {
    let wavelets: Vec<Vec<GeoPoint>> = front
        .par_iter()
        .map(|&vertex| {
            let fuel = match fuel_grid {
                Some(grid) => match grid.fuel_at(vertex.lat, vertex.lng) {
                    Some(fuel) => fuel,
                    // Non-fuel: this vertex does not spread
                    None => return Vec::new(),
                },
                None => default_fuel,
            };

            let (slope_percent, aspect_degrees) = terrain_grid
                .map_or((0.0, 0.0), |grid| grid.slope_aspect_at(vertex.lat, vertex.lng));

            expand_vertex(
                vertex,
                conditions,
                fuel,
                slope_percent,
                aspect_degrees,
                dt_minutes,
                num_rays,
            )
        })
        .collect();

    let all_points: Vec<GeoPoint> = wavelets.into_iter().flatten().collect();
    if all_points.is_empty() {
        front.to_vec()
    } else {
        all_points
    }
}

/// Simplify a wavelet point cloud back to an ordered perimeter.
///
/// Takes the convex hull of the cloud (the outer envelope; per-vertex
/// wavelets are convex, so for small timesteps their union's boundary is
/// the hull of the generated points), then resamples it at regular angular
/// intervals around the centroid to keep the vertex count bounded across
/// ticks. Inputs of three or fewer points pass through unchanged.
#[must_use]
pub fn simplify_front(points: &[GeoPoint]) -> Vec<GeoPoint> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let n = points.len() as f64;
    let centroid_lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
    let centroid_lng = points.iter().map(|p| p.lng).sum::<f64>() / n;

    let hull = convex_hull(points);
    if hull.len() < 3 {
        return hull;
    }

    let num_output = hull.len().max(MIN_RESAMPLE_VERTICES);
    resample_angular(&hull, centroid_lat, centroid_lng, num_output)
}

/// 2D cross product of OA and OB in (lat, lng) coordinates.
fn cross(o: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    (a.lat - o.lat) * (b.lng - o.lng) - (a.lng - o.lng) * (b.lat - o.lat)
}

/// Convex hull via Andrew's monotone chain.
///
/// Collinear points are dropped (strict turns only).
fn convex_hull(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.lat.total_cmp(&b.lat).then(a.lng.total_cmp(&b.lng)));

    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<GeoPoint> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<GeoPoint> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Last point of each chain is the first of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Resample hull vertices at regular angular intervals around the centroid.
///
/// Nearest-neighbor selection (no interpolation), deduplicated to 8 decimal
/// places in input order.
fn resample_angular(
    hull: &[GeoPoint],
    centroid_lat: f64,
    centroid_lng: f64,
    num_points: usize,
) -> Vec<GeoPoint> {
    use std::f64::consts::PI;

    let angle = |p: GeoPoint| (p.lng - centroid_lng).atan2(p.lat - centroid_lat);

    let mut result = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let target = -PI + 2.0 * PI * (i as f64) / (num_points as f64);

        let mut best = hull[0];
        let mut best_diff = (angle(best) - target).abs();
        for &p in &hull[1..] {
            let diff = (angle(p) - target).abs();
            if diff < best_diff {
                best = p;
                best_diff = diff;
            }
        }
        result.push(best);
    }

    // Nearest-neighbor picks repeat; keep first occurrences only
    let mut seen = FxHashSet::default();
    let mut unique = Vec::with_capacity(result.len());
    for p in result {
        let key = (
            (p.lat * 1e8).round() as i64,
            (p.lng * 1e8).round() as i64,
        );
        if seen.insert(key) {
            unique.push(p);
        }
    }
    unique
}
