//! Distance and containment primitives shared by graph construction,
//! snapping, arrival detection and the boundary geofence.

use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, Distance, Haversine, LineString, Polygon};

use crate::model::LatLon;

/// Great-circle distance between two positions in meters
pub fn distance_meters(a: LatLon, b: LatLon) -> f64 {
    Haversine.distance(a.to_point(), b.to_point())
}

/// Tests whether `point` lies within the polygon described by `vertices`.
///
/// The ring may be given open or closed (first vertex repeated as last).
/// Points on an edge or a vertex count as inside. Fewer than three distinct
/// vertices never contain anything.
pub fn point_in_polygon(point: LatLon, vertices: &[LatLon]) -> bool {
    let Some(polygon) = polygon_from_vertices(vertices) else {
        return false;
    };

    match polygon.coordinate_position(&Coord::from(point)) {
        CoordPos::Inside | CoordPos::OnBoundary => true,
        CoordPos::Outside => false,
    }
}

/// Builds a `geo` polygon from a vertex ring, `None` if the ring is degenerate
pub(crate) fn polygon_from_vertices(vertices: &[LatLon]) -> Option<Polygon<f64>> {
    let mut ring: Vec<Coord<f64>> = vertices.iter().map(|v| Coord::from(*v)).collect();
    // LineString closing is done by Polygon::new, drop an explicit closing vertex
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring.dedup();

    if ring.len() < 3 {
        return None;
    }

    Some(Polygon::new(LineString::from(ring), vec![]))
}
