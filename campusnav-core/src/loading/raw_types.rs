use serde::Deserialize;

use super::de::{deserialize_outline, deserialize_points};
use crate::NodeId;
use crate::model::{Apartment, Building, LatLon, MapDataSnapshot, MapNode, PathSegment};

#[derive(Debug, Deserialize)]
pub struct RawNode {
    #[serde(rename = "nodeID")]
    pub node_id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawBuilding {
    #[serde(rename = "buildingID")]
    pub building_id: i64,
    #[serde(deserialize_with = "deserialize_outline")]
    pub coordinates: Vec<LatLon>,
    #[serde(default)]
    pub entrances: Vec<NodeId>,
}

#[derive(Debug, Deserialize)]
pub struct RawApartment {
    #[serde(rename = "apartmentID")]
    pub apartment_id: i64,
    #[serde(rename = "buildingID")]
    pub building_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    #[serde(deserialize_with = "deserialize_points")]
    pub points: Vec<LatLon>,
    #[serde(default)]
    pub is_road: bool,
    #[serde(default)]
    pub is_underground: bool,
    #[serde(default)]
    pub is_arrow: bool,
}

#[derive(Debug, Deserialize)]
pub struct RawSnapshot {
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub buildings: Vec<RawBuilding>,
    #[serde(default)]
    pub apartments: Vec<RawApartment>,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

impl From<RawNode> for MapNode {
    fn from(raw: RawNode) -> Self {
        Self {
            id: raw.node_id,
            position: LatLon::new(raw.latitude, raw.longitude),
            description: raw.description.filter(|d| !d.is_empty()),
        }
    }
}

impl From<RawBuilding> for Building {
    fn from(raw: RawBuilding) -> Self {
        Self {
            id: raw.building_id,
            polygon: raw.coordinates,
            entrance_node_ids: raw.entrances,
        }
    }
}

impl From<RawApartment> for Apartment {
    fn from(raw: RawApartment) -> Self {
        Self {
            id: raw.apartment_id,
            building_id: raw.building_id,
            label: raw.label,
        }
    }
}

impl From<RawSegment> for PathSegment {
    fn from(raw: RawSegment) -> Self {
        Self {
            points: raw.points,
            is_road: raw.is_road,
            is_underground: raw.is_underground,
            is_arrow: raw.is_arrow,
        }
    }
}

impl From<RawSnapshot> for MapDataSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self {
            nodes: raw.nodes.into_iter().map(MapNode::from).collect(),
            buildings: raw.buildings.into_iter().map(Building::from).collect(),
            apartments: raw.apartments.into_iter().map(Apartment::from).collect(),
            segments: raw.segments.into_iter().map(PathSegment::from).collect(),
        }
    }
}
