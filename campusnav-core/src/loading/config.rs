use serde::{Deserialize, Serialize};

use crate::model::{LatLon, MapNode};
use crate::{ARRIVAL_RADIUS_METERS, Error, NodeId};

/// Operational area in which navigation may start and continue
pub const DEFAULT_BOUNDARY: [LatLon; 6] = [
    LatLon::new(60.18950, 24.82250),
    LatLon::new(60.19120, 24.82790),
    LatLon::new(60.18900, 24.83480),
    LatLon::new(60.18470, 24.83390),
    LatLon::new(60.18330, 24.82710),
    LatLon::new(60.18610, 24.82190),
];

/// Decides which map nodes may serve as route endpoints.
///
/// Surveyed map data marks walkable points by numbering them below a fixed id,
/// other ids carry descriptive points of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WalkablePolicy {
    /// Nodes with `id <= max_id` are walkable
    MaxNodeId { max_id: NodeId },
    /// Every node is walkable
    All,
}

impl Default for WalkablePolicy {
    fn default() -> Self {
        Self::MaxNodeId { max_id: 95 }
    }
}

impl WalkablePolicy {
    pub fn is_walkable(&self, node: &MapNode) -> bool {
        match self {
            Self::MaxNodeId { max_id } => node.id <= *max_id,
            Self::All => true,
        }
    }
}

/// Rate limits applied to raw location fixes before route recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Minimum time between processed fixes
    pub min_interval_secs: f64,
    /// Displacement that lets a fix through before the interval elapsed
    pub min_displacement_meters: f64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: 3.0,
            min_displacement_meters: 5.0,
        }
    }
}

impl ThrottleConfig {
    /// Every fix is processed
    pub fn disabled() -> Self {
        Self {
            min_interval_secs: 0.0,
            min_displacement_meters: 0.0,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.min_interval_secs <= 0.0 && self.min_displacement_meters <= 0.0
    }
}

/// Configuration of the navigation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub arrival_radius_meters: f64,
    pub walkable: WalkablePolicy,
    /// Maximum offset between a segment point and the node it is matched to
    pub coordinate_tolerance_meters: f64,
    pub throttle: ThrottleConfig,
    pub boundary: Vec<LatLon>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            arrival_radius_meters: ARRIVAL_RADIUS_METERS,
            walkable: WalkablePolicy::default(),
            coordinate_tolerance_meters: 0.5,
            throttle: ThrottleConfig::default(),
            boundary: DEFAULT_BOUNDARY.to_vec(),
        }
    }
}

impl NavigationConfig {
    /// # Errors
    ///
    /// Returns an error if a distance is negative or the boundary is not a polygon
    pub fn validate(&self) -> Result<(), Error> {
        if self.arrival_radius_meters.is_nan() || self.arrival_radius_meters <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Arrival radius must be positive, got {}",
                self.arrival_radius_meters
            )));
        }

        if self.coordinate_tolerance_meters.is_nan() || self.coordinate_tolerance_meters < 0.0 {
            return Err(Error::InvalidData(format!(
                "Coordinate tolerance must not be negative, got {}",
                self.coordinate_tolerance_meters
            )));
        }

        if self.throttle.min_interval_secs < 0.0 || self.throttle.min_displacement_meters < 0.0 {
            return Err(Error::InvalidData(
                "Throttle limits must not be negative".to_string(),
            ));
        }

        if crate::geometry::polygon_from_vertices(&self.boundary).is_none() {
            return Err(Error::InvalidData(format!(
                "Boundary needs at least 3 distinct vertices, got {}",
                self.boundary.len()
            )));
        }

        Ok(())
    }
}
