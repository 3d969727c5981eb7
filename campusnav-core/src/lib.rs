//! Campus navigation engine.
//!
//! Builds a walking graph from surveyed path segments, snaps live GPS fixes to
//! walkable nodes, finds shortest walking routes to buildings and apartments and
//! keeps an active route up to date while the user moves.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;
pub use loading::{NavigationConfig, WalkablePolicy, build_graph};
pub use model::{
    Apartment, Building, CampusGraph, Edge, LatLon, LocationFix, MapDataSnapshot, MapNode,
    NavigationTarget, PathSegment,
};
pub use session::{LocationOutcome, Navigator, RouteEvent, RouteSession, SessionStatus};

/// Identifier of a map node as supplied by the map data service
pub type NodeId = i64;

/// Distance to the destination below which a route counts as completed
pub const ARRIVAL_RADIUS_METERS: f64 = 15.0;
