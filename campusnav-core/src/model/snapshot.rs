//! Owned copy of the map data delivered for one session

use serde::{Deserialize, Serialize};

use super::map::{Apartment, Building, LatLon, MapNode, PathSegment};
use super::target::NavigationTarget;
use crate::Error;

/// Everything the navigation engine needs from the map data service.
///
/// The walking graph is derived from a snapshot and rebuilt only when a
/// different snapshot is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDataSnapshot {
    pub nodes: Vec<MapNode>,
    pub buildings: Vec<Building>,
    pub apartments: Vec<Apartment>,
    pub segments: Vec<PathSegment>,
}

impl MapDataSnapshot {
    pub fn building(&self, id: i64) -> Option<&Building> {
        self.buildings.iter().find(|building| building.id == id)
    }

    pub fn apartment(&self, id: i64) -> Option<&Apartment> {
        self.apartments.iter().find(|apartment| apartment.id == id)
    }

    /// First building whose footprint contains `point`
    pub fn building_at(&self, point: LatLon) -> Option<&Building> {
        self.buildings
            .iter()
            .find(|building| building.contains(point))
    }

    pub fn target_for_building(&self, id: i64) -> Result<NavigationTarget, Error> {
        self.building(id)
            .map(NavigationTarget::building)
            .ok_or_else(|| Error::UnknownTarget(format!("building {id}")))
    }

    pub fn target_for_apartment(&self, id: i64) -> Result<NavigationTarget, Error> {
        let apartment = self
            .apartment(id)
            .ok_or_else(|| Error::UnknownTarget(format!("apartment {id}")))?;
        let building = self.building(apartment.building_id).ok_or_else(|| {
            Error::UnknownTarget(format!(
                "building {} of apartment {id}",
                apartment.building_id
            ))
        })?;

        Ok(NavigationTarget::apartment(apartment, building))
    }
}
