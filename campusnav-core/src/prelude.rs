pub use crate::{ARRIVAL_RADIUS_METERS, NodeId};

// Map data and graph
pub use crate::loading::{
    NavigationConfig, ThrottleConfig, WalkablePolicy, build_graph, read_snapshot, read_trace,
};
pub use crate::model::{
    Apartment, Building, CampusGraph, Edge, LatLon, LocationFix, MapDataSnapshot, MapNode,
    NavigationTarget, PathSegment,
};

// Routing primitives
pub use crate::geometry::{distance_meters, point_in_polygon};
pub use crate::routing::{
    LinearScanLocator, NodeLocator, Route, dijkstra, find_closest_walkable_node, get_path,
    shortest_path,
};

// Session handling
pub use crate::session::{
    BoundaryMonitor, LocationOutcome, LocationThrottle, Navigator, RouteEvent, RouteSession,
    SessionStatus,
};

pub use crate::Error;
