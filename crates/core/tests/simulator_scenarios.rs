//! End-to-end simulator scenarios: snapshot scheduling, area growth,
//! spread monotonicity, and grid interactions through the public API.

use firesim_core::{
    FuelGrid, FuelType, GridExtent, SimulationConfig, SimulationFrame, Simulator, WeatherInput,
};

/// Opt-in log output for debugging: `RUST_LOG=firesim_core=debug cargo test`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Basic run: central Alberta, wind 20 km/h from the west, 2 h duration,
/// 30-minute snapshots, FFMC/DMC/DC 90/45/300.
fn basic_config() -> SimulationConfig {
    SimulationConfig::new(
        51.0,
        -114.0,
        WeatherInput::new(25.0, 30.0, 20.0, 270.0, 0.0),
        2.0,
        30.0,
    )
    .unwrap()
    .with_fwi(90.0, 45.0, 300.0)
}

fn bounding_box(frame: &SimulationFrame) -> (f64, f64, f64, f64) {
    let mut lat_min = f64::MAX;
    let mut lat_max = f64::MIN;
    let mut lng_min = f64::MAX;
    let mut lng_max = f64::MIN;
    for &(lat, lng) in &frame.perimeter {
        lat_min = lat_min.min(lat);
        lat_max = lat_max.max(lat);
        lng_min = lng_min.min(lng);
        lng_max = lng_max.max(lng);
    }
    (lat_min, lat_max, lng_min, lng_max)
}

#[test]
fn snapshot_schedule_2h_at_30min() {
    init_tracing();
    let frames: Vec<_> = Simulator::new(basic_config()).run().collect();

    assert_eq!(frames.len(), 5, "expected t=0, 0.5, 1.0, 1.5, 2.0");
    let times: Vec<f64> = frames.iter().map(|f| f.time_hours).collect();
    for (actual, expected) in times.iter().zip([0.0, 0.5, 1.0, 1.5, 2.0]) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "snapshot times {times:?} do not match the 30-minute schedule"
        );
    }
}

#[test]
fn snapshot_schedule_non_divisible_interval() {
    // 60 minutes at 25-minute snapshots: t=0, 25, 50, plus the final
    // wrap-up frame at 60
    let config = SimulationConfig::new(
        51.0,
        -114.0,
        WeatherInput::new(25.0, 30.0, 20.0, 270.0, 0.0),
        1.0,
        25.0,
    )
    .unwrap()
    .with_fwi(90.0, 45.0, 300.0);

    let frames: Vec<_> = Simulator::new(config).run().collect();
    assert_eq!(frames.len(), 4);
    assert!((frames[3].time_hours - 1.0).abs() < 1e-9);
}

#[test]
fn areas_start_small_and_grow() {
    let frames: Vec<_> = Simulator::new(basic_config()).run().collect();

    assert!(
        frames[0].area_ha < 1.0,
        "ignition ring should be under a hectare, got {:.3}",
        frames[0].area_ha
    );

    let final_area = frames.last().unwrap().area_ha;
    assert!(
        final_area > 1.0 && final_area < 10_000.0,
        "2 h C2 fire should land between 1 and 10000 ha, got {final_area:.1}"
    );

    // Non-decreasing within a 5% resampling tolerance
    for pair in frames.windows(2) {
        assert!(
            pair[1].area_ha >= pair[0].area_ha * 0.95,
            "area shrank from {:.2} to {:.2} ha",
            pair[0].area_ha,
            pair[1].area_ha
        );
    }
}

#[test]
fn bounding_boxes_nest_over_time() {
    let frames: Vec<_> = Simulator::new(basic_config()).run().collect();

    for pair in frames.windows(2) {
        let (prev_lat_min, prev_lat_max, prev_lng_min, prev_lng_max) = bounding_box(&pair[0]);
        let (lat_min, lat_max, lng_min, lng_max) = bounding_box(&pair[1]);

        // Allow 1% of the box size for angular resampling artifacts
        let lat_tol = (prev_lat_max - prev_lat_min) * 0.01;
        let lng_tol = (prev_lng_max - prev_lng_min) * 0.01;

        assert!(lat_min <= prev_lat_min + lat_tol, "fire retreated south edge");
        assert!(lat_max >= prev_lat_max - lat_tol, "fire retreated north edge");
        assert!(lng_min <= prev_lng_min + lng_tol, "fire retreated west edge");
        assert!(lng_max >= prev_lng_max - lng_tol, "fire retreated east edge");
    }
}

#[test]
fn wind_pushes_fire_downwind() {
    // Wind from the west: the fire's centroid should drift east
    let frames: Vec<_> = Simulator::new(basic_config()).run().collect();

    let centroid_lng = |frame: &SimulationFrame| {
        frame.perimeter.iter().map(|&(_, lng)| lng).sum::<f64>() / frame.perimeter.len() as f64
    };

    let first = centroid_lng(&frames[0]);
    let last = centroid_lng(frames.last().unwrap());
    assert!(
        last > first,
        "centroid should move east with a westerly wind ({first:.5} -> {last:.5})"
    );
}

#[test]
fn frame_metrics_are_populated() {
    let frames: Vec<_> = Simulator::new(basic_config()).run().collect();

    for frame in &frames {
        assert!(frame.head_ros_m_min > 0.0);
        assert!(frame.max_hfi_kw_m > 0.0);
        assert!(frame.flame_length_m > 0.0);
        assert!(!frame.perimeter.is_empty());
        assert_eq!(frame.perimeter.first(), frame.perimeter.last());
    }
}

#[test]
fn non_fuel_grid_stops_all_spread() {
    let grid = FuelGrid::uniform(GridExtent::new(50.0, 52.0, -115.0, -113.0), 8, 8, None);
    let frames: Vec<_> = Simulator::new(basic_config()).with_fuel_grid(grid).run().collect();

    assert_eq!(frames.len(), 5);
    let initial_area = frames[0].area_ha;
    for frame in &frames {
        // Identical vertex set; only summation order can differ
        assert!(
            (frame.area_ha - initial_area).abs() < 1e-3,
            "fire on non-fuel should stay frozen, got {:.4} ha at t={:.1}",
            frame.area_ha,
            frame.time_hours
        );
    }
}

#[test]
fn fuel_breakdown_sums_to_one_with_grid() {
    // West half C2, east half O1b
    let extent = GridExtent::new(50.0, 52.0, -115.0, -113.0);
    let mut cells = Vec::with_capacity(64);
    for _row in 0..8 {
        for col in 0..8 {
            cells.push(Some(if col < 4 { FuelType::C2 } else { FuelType::O1b }));
        }
    }
    let grid = FuelGrid::new(extent, 8, 8, cells).unwrap();

    let frames: Vec<_> = Simulator::new(basic_config()).with_fuel_grid(grid).run().collect();
    for frame in &frames {
        let total: f64 = frame.fuel_breakdown.values().sum();
        assert!(
            (total - 1.0).abs() < 0.01,
            "breakdown fractions should sum to 1, got {total:.4}"
        );
    }
}

#[test]
fn breakdown_without_grid_is_default_fuel_only() {
    let frames: Vec<_> = Simulator::new(basic_config())
        .with_default_fuel(FuelType::C3)
        .run()
        .collect();
    for frame in &frames {
        assert_eq!(frame.fuel_breakdown.len(), 1);
        assert!((frame.fuel_breakdown[&FuelType::C3] - 1.0).abs() < 1e-12);
    }
}

#[test]
fn runs_are_deterministic() {
    let first: Vec<_> = Simulator::new(basic_config()).run().collect();
    let second: Vec<_> = Simulator::new(basic_config()).run().collect();
    assert_eq!(first, second, "identical configs must produce identical frames");
}

#[test]
fn calm_wind_spreads_roughly_circular() {
    let config = SimulationConfig::new(
        51.0,
        -114.0,
        WeatherInput::new(20.0, 40.0, 0.0, 0.0, 0.0),
        1.0,
        30.0,
    )
    .unwrap()
    .with_fwi(85.0, 30.0, 200.0);

    let frames: Vec<_> = Simulator::new(config).run().collect();
    let (lat_min, lat_max, lng_min, lng_max) = bounding_box(frames.last().unwrap());

    // Compare extents in meters; a calm-wind fire should be nearly round
    let height_m = (lat_max - lat_min) * 111_320.0;
    let width_m = (lng_max - lng_min) * 111_320.0 * 51.0_f64.to_radians().cos();
    let ratio = height_m.max(width_m) / height_m.min(width_m);
    assert!(
        ratio < 1.25,
        "calm-wind fire should be near-circular, aspect ratio {ratio:.2}"
    );
}
