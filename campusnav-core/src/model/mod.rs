//! Data model for campus navigation
//!
//! Map data as delivered by the map data service, the routable graph built
//! from it and the navigation targets users can pick.

pub mod graph;
pub mod map;
pub mod snapshot;
pub mod target;

pub use graph::{CampusGraph, Edge};
pub use map::{Apartment, Building, LatLon, LocationFix, MapNode, PathSegment};
pub use snapshot::MapDataSnapshot;
pub use target::NavigationTarget;
