//! Rasterized fuel and terrain lookups over a bounded lat/lng rectangle.
//!
//! Grids are row-major with row 0 at the northern edge (`lat_max`) and
//! columns increasing eastward. Queries outside the rectangle fall back to
//! "nothing there": non-fuel for fuel grids, flat terrain for terrain grids.

mod fuel_grid;
mod terrain;

pub use fuel_grid::FuelGrid;
pub use terrain::TerrainGrid;

use serde::{Deserialize, Serialize};

/// Rectangular lat/lng extent shared by the grid types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridExtent {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl GridExtent {
    #[must_use]
    pub const fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    /// Resolve a coordinate to a (row, col) cell index.
    ///
    /// Row 0 is the northern edge; indices are clamped to the grid, so any
    /// point inside the rectangle lands on a valid cell. Returns `None`
    /// outside the rectangle.
    #[must_use]
    pub fn locate(&self, lat: f64, lng: f64, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if lat < self.lat_min || lat > self.lat_max || lng < self.lng_min || lng > self.lng_max {
            return None;
        }

        let row_f = (self.lat_max - lat) / (self.lat_max - self.lat_min) * rows as f64;
        let col_f = (lng - self.lng_min) / (self.lng_max - self.lng_min) * cols as f64;

        let row = (row_f.floor() as usize).min(rows.saturating_sub(1));
        let col = (col_f.floor() as usize).min(cols.saturating_sub(1));
        Some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_corners_and_center() {
        let extent = GridExtent::new(50.0, 52.0, -115.0, -113.0);

        // Northern edge maps to row 0
        assert_eq!(extent.locate(52.0, -115.0, 4, 4), Some((0, 0)));
        // Southern edge clamps onto the last row
        assert_eq!(extent.locate(50.0, -113.0, 4, 4), Some((3, 3)));
        // Center
        assert_eq!(extent.locate(51.0, -114.0, 4, 4), Some((2, 2)));
    }

    #[test]
    fn locate_outside_is_none() {
        let extent = GridExtent::new(50.0, 52.0, -115.0, -113.0);
        assert_eq!(extent.locate(49.9, -114.0, 4, 4), None);
        assert_eq!(extent.locate(52.1, -114.0, 4, 4), None);
        assert_eq!(extent.locate(51.0, -115.1, 4, 4), None);
        assert_eq!(extent.locate(51.0, -112.9, 4, 4), None);
    }
}
