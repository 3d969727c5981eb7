//! Map data components - positions, nodes, path segments and buildings

use chrono::{DateTime, Utc};
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::NodeId;
use crate::geometry::point_in_polygon;

/// WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `geo` point with x = longitude, y = latitude
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<LatLon> for Coord<f64> {
    fn from(value: LatLon) -> Self {
        Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<LatLon> for Point<f64> {
    fn from(value: LatLon) -> Self {
        value.to_point()
    }
}

/// Point of the surveyed map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    pub position: LatLon,
    pub description: Option<String>,
}

impl MapNode {
    pub fn new(id: NodeId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            position: LatLon::new(latitude, longitude),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Surveyed walking path, road or indicator arrow.
///
/// The flags only matter for rendering, every segment is walkable in both
/// directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub points: Vec<LatLon>,
    pub is_road: bool,
    pub is_underground: bool,
    pub is_arrow: bool,
}

impl PathSegment {
    pub fn new(points: Vec<LatLon>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }
}

/// Building footprint with its entrances on the walking graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    pub polygon: Vec<LatLon>,
    pub entrance_node_ids: Vec<NodeId>,
}

impl Building {
    /// Whether the footprint contains `point`, used for map selection
    pub fn contains(&self, point: LatLon) -> bool {
        point_in_polygon(point, &self.polygon)
    }

    /// Canonical routing destination of the building
    pub fn entrance(&self) -> Option<NodeId> {
        self.entrance_node_ids.first().copied()
    }
}

/// Apartment inside a building, routed to through the building entrance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: i64,
    pub building_id: i64,
    pub label: Option<String>,
}

/// Position reported by the device location service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(latitude: f64, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    pub fn position(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }
}
