use crate::geometry::point_in_polygon;
use crate::model::LatLon;

/// Tracks whether the user is inside the operational area
#[derive(Debug, Clone)]
pub struct BoundaryMonitor {
    polygon: Vec<LatLon>,
    last_position: Option<LatLon>,
    inside: bool,
}

impl BoundaryMonitor {
    pub fn new(polygon: Vec<LatLon>) -> Self {
        Self {
            polygon,
            last_position: None,
            inside: false,
        }
    }

    /// Re-evaluates the status for a new raw position and returns it
    pub fn update(&mut self, position: LatLon) -> bool {
        let inside = point_in_polygon(position, &self.polygon);
        if inside != self.inside || self.last_position.is_none() {
            log::debug!(
                "Position ({}, {}) is {} the navigation area",
                position.latitude,
                position.longitude,
                if inside { "inside" } else { "outside" }
            );
        }
        self.inside = inside;
        self.last_position = Some(position);
        inside
    }

    /// Inside status of the last position, false before the first one
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn last_position(&self) -> Option<LatLon> {
        self.last_position
    }

    pub fn polygon(&self) -> &[LatLon] {
        &self.polygon
    }
}
