//! Fire perimeter construction and analysis.
//!
//! Turns front vertices into closed polygons, measures burned area via the
//! shoelace formula in a local meter projection, and emits GeoJSON for
//! downstream consumers.

use nalgebra::Vector2;
use serde_json::{json, Value};

use crate::core_types::geo::{m_per_deg_lng, GeoPoint, M_PER_DEG_LAT};

/// Close the front into a `(lat, lng)` polygon ring.
///
/// Appends the first vertex at the end when the ring is not already closed.
/// Empty input gives an empty ring.
#[must_use]
pub fn vertices_to_polygon(vertices: &[GeoPoint]) -> Vec<(f64, f64)> {
    let Some(&first) = vertices.first() else {
        return Vec::new();
    };

    let mut coords: Vec<(f64, f64)> = vertices.iter().map(|v| (v.lat, v.lng)).collect();
    if coords.first() != coords.last() {
        coords.push((first.lat, first.lng));
    }
    coords
}

/// Polygon area in hectares via the shoelace formula.
///
/// Vertices are projected to meters around the centroid latitude before
/// summing; the absolute value makes the result independent of winding
/// order. Fewer than three vertices enclose nothing.
#[must_use]
pub fn polygon_area_ha(vertices: &[GeoPoint]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let centroid_lat = vertices.iter().map(|v| v.lat).sum::<f64>() / vertices.len() as f64;
    let m_lat = M_PER_DEG_LAT;
    let m_lng = m_per_deg_lng(centroid_lat);

    let project = |v: &GeoPoint| Vector2::new(v.lng * m_lng, v.lat * m_lat);

    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = project(&vertices[i]);
        let b = project(&vertices[(i + 1) % vertices.len()]);
        sum += a.x * b.y - b.x * a.y;
    }

    sum.abs() / 2.0 / 10_000.0
}

/// Arithmetic mean of the vertices, `(0, 0)` when empty.
#[must_use]
pub fn centroid(vertices: &[GeoPoint]) -> GeoPoint {
    if vertices.is_empty() {
        return GeoPoint::new(0.0, 0.0);
    }
    let n = vertices.len() as f64;
    GeoPoint::new(
        vertices.iter().map(|v| v.lat).sum::<f64>() / n,
        vertices.iter().map(|v| v.lng).sum::<f64>() / n,
    )
}

/// GeoJSON Feature with the perimeter as a Polygon.
///
/// Coordinates are `[lng, lat]` per the GeoJSON spec and the ring is
/// closed. Empty input produces a Feature with empty coordinates.
#[must_use]
pub fn polygon_to_geojson(vertices: &[GeoPoint], properties: Option<Value>) -> Value {
    let properties = properties.unwrap_or_else(|| json!({}));

    if vertices.is_empty() {
        return json!({
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [] },
            "properties": properties,
        });
    }

    let mut coords: Vec<[f64; 2]> = vertices.iter().map(|v| [v.lng, v.lat]).collect();
    if coords.first() != coords.last() {
        coords.push(coords[0]);
    }

    json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": [coords] },
        "properties": properties,
    })
}
