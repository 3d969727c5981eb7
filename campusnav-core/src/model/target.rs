//! Navigation targets users can pick on the map

use serde::{Deserialize, Serialize};

use super::map::{Apartment, Building};
use crate::{Error, NodeId};

/// Destination of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    Building {
        building_id: i64,
        entrance_node_ids: Vec<NodeId>,
    },
    Apartment {
        apartment_id: i64,
        building_id: i64,
        entrance_node_ids: Vec<NodeId>,
    },
}

impl NavigationTarget {
    pub fn building(building: &Building) -> Self {
        Self::Building {
            building_id: building.id,
            entrance_node_ids: building.entrance_node_ids.clone(),
        }
    }

    /// Apartments are reached through the entrance of the building they belong to
    pub fn apartment(apartment: &Apartment, building: &Building) -> Self {
        Self::Apartment {
            apartment_id: apartment.id,
            building_id: building.id,
            entrance_node_ids: building.entrance_node_ids.clone(),
        }
    }

    pub fn building_id(&self) -> i64 {
        match self {
            Self::Building { building_id, .. } | Self::Apartment { building_id, .. } => {
                *building_id
            }
        }
    }

    /// Node the route leads to: the first entrance of the target building
    pub fn entrance_node(&self) -> Result<NodeId, Error> {
        let entrances = match self {
            Self::Building {
                entrance_node_ids, ..
            }
            | Self::Apartment {
                entrance_node_ids, ..
            } => entrance_node_ids,
        };

        entrances
            .first()
            .copied()
            .ok_or(Error::NoEntrance(self.building_id()))
    }
}
