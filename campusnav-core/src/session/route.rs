use log::{debug, info};
use serde::Serialize;

use super::boundary::BoundaryMonitor;
use crate::geometry::distance_meters;
use crate::model::{CampusGraph, LatLon, NavigationTarget};
use crate::routing::{NodeLocator, dijkstra};
use crate::{Error, NodeId};

/// Lifecycle of a route. `Arrived` and `Cancelled` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    Idle,
    Navigating,
    Arrived,
    Cancelled,
}

/// Notification for the renderer after a location update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RouteEvent {
    /// The route was recomputed from the new position
    Updated { path_coordinates: Vec<LatLon> },
    /// The user reached the destination, no further updates follow
    Arrived { destination: LatLon },
}

/// Route from the user's live position to one navigation target
#[derive(Debug, Clone)]
pub struct RouteSession {
    status: SessionStatus,
    target: NavigationTarget,
    target_node: NodeId,
    destination: LatLon,
    arrival_radius_meters: f64,
    start_node: Option<NodeId>,
    path_node_ids: Vec<NodeId>,
    path_coordinates: Vec<LatLon>,
    distance_meters: f64,
    last_recompute_location: Option<LatLon>,
}

struct PlannedRoute {
    start_node: NodeId,
    node_ids: Vec<NodeId>,
    coordinates: Vec<LatLon>,
    distance_meters: f64,
}

impl RouteSession {
    /// Creates an idle session heading for the target's entrance node
    ///
    /// # Errors
    ///
    /// Fails if the target has no entrance or the entrance is not on the map
    pub fn new(
        target: NavigationTarget,
        graph: &CampusGraph,
        arrival_radius_meters: f64,
    ) -> Result<Self, Error> {
        let target_node = target.entrance_node()?;
        let destination = graph.position(target_node).ok_or_else(|| {
            Error::UnknownTarget(format!("entrance node {target_node} is not on the map"))
        })?;

        Ok(Self {
            status: SessionStatus::Idle,
            target,
            target_node,
            destination,
            arrival_radius_meters,
            start_node: None,
            path_node_ids: Vec::new(),
            path_coordinates: Vec::new(),
            distance_meters: 0.0,
            last_recompute_location: None,
        })
    }

    /// Computes the first route and starts navigating.
    ///
    /// # Errors
    ///
    /// [`Error::OutsideBoundary`] if the monitor reports the user outside the
    /// navigation area, [`Error::NoStartNode`] without walkable nodes and
    /// [`Error::NoPathFound`] if the target cannot be reached. The session
    /// stays idle on failure.
    pub fn start(
        &mut self,
        position: LatLon,
        boundary: &BoundaryMonitor,
        graph: &CampusGraph,
        locator: &impl NodeLocator,
    ) -> Result<&[LatLon], Error> {
        if self.status != SessionStatus::Idle {
            return Err(Error::SessionNotIdle(format!("{:?}", self.status)));
        }
        if !boundary.is_inside() {
            return Err(Error::OutsideBoundary);
        }

        let planned = self.plan(position, graph, locator)?;
        info!(
            "Navigating from node {} to node {} ({:.0} m)",
            planned.start_node, self.target_node, planned.distance_meters
        );
        self.apply(planned, position);
        self.status = SessionStatus::Navigating;

        Ok(&self.path_coordinates)
    }

    /// Recomputes the route from a new position and checks for arrival.
    ///
    /// A failed recomputation keeps the previous route. Nothing happens unless
    /// the session is navigating.
    pub fn on_location_update(
        &mut self,
        position: LatLon,
        graph: &CampusGraph,
        locator: &impl NodeLocator,
    ) -> Option<RouteEvent> {
        if self.status != SessionStatus::Navigating {
            return None;
        }

        let updated = match self.plan(position, graph, locator) {
            Ok(planned) => {
                self.apply(planned, position);
                true
            }
            Err(e) => {
                debug!("Keeping previous route, recomputation failed: {e}");
                false
            }
        };

        let remaining = distance_meters(position, self.destination);
        if remaining < self.arrival_radius_meters {
            info!(
                "Arrived at node {} ({remaining:.1} m from destination)",
                self.target_node
            );
            self.status = SessionStatus::Arrived;
            return Some(RouteEvent::Arrived {
                destination: self.destination,
            });
        }

        updated.then(|| RouteEvent::Updated {
            path_coordinates: self.path_coordinates.clone(),
        })
    }

    /// Stops navigation and discards the route. Returns false if the session
    /// was not navigating.
    pub fn cancel(&mut self) -> bool {
        if self.status != SessionStatus::Navigating {
            return false;
        }
        self.status = SessionStatus::Cancelled;
        self.path_node_ids.clear();
        self.path_coordinates.clear();
        info!("Navigation to node {} cancelled", self.target_node);
        true
    }

    fn plan(
        &self,
        position: LatLon,
        graph: &CampusGraph,
        locator: &impl NodeLocator,
    ) -> Result<PlannedRoute, Error> {
        let (start, snap_distance) = locator.nearest(position).ok_or(Error::NoStartNode)?;
        let start_node = start.id;
        debug!("Snapped position to node {start_node} ({snap_distance:.1} m away)");

        let paths = dijkstra(graph, start_node);
        let node_ids = paths.path_to(self.target_node);
        if node_ids.is_empty() {
            return Err(Error::NoPathFound {
                from: start_node,
                to: self.target_node,
            });
        }

        // The drawn route starts at the raw position, not at the snapped node
        let mut coordinates = Vec::with_capacity(node_ids.len() + 1);
        coordinates.push(position);
        coordinates.extend(node_ids.iter().filter_map(|&id| graph.position(id)));

        Ok(PlannedRoute {
            start_node,
            distance_meters: paths.distance(self.target_node).unwrap_or(0.0),
            node_ids,
            coordinates,
        })
    }

    fn apply(&mut self, planned: PlannedRoute, position: LatLon) {
        self.start_node = Some(planned.start_node);
        self.path_node_ids = planned.node_ids;
        self.path_coordinates = planned.coordinates;
        self.distance_meters = planned.distance_meters;
        self.last_recompute_location = Some(position);
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn target(&self) -> &NavigationTarget {
        &self.target
    }

    pub fn target_node(&self) -> NodeId {
        self.target_node
    }

    pub fn destination(&self) -> LatLon {
        self.destination
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.start_node
    }

    pub fn path_node_ids(&self) -> &[NodeId] {
        &self.path_node_ids
    }

    /// Polyline to draw, beginning at the user's raw position
    pub fn path_coordinates(&self) -> &[LatLon] {
        &self.path_coordinates
    }

    /// Graph distance from the snapped start node to the destination
    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn last_recompute_location(&self) -> Option<LatLon> {
        self.last_recompute_location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{WalkablePolicy, build_graph};
    use crate::routing::LinearScanLocator;
    use crate::test_support::{boundary, near, snapshot};

    struct Fixture {
        graph: CampusGraph,
        locator: LinearScanLocator,
        boundary: BoundaryMonitor,
    }

    fn fixture() -> Fixture {
        let snapshot = snapshot();
        let graph = build_graph(&snapshot.nodes, &snapshot.segments, 0.5).unwrap();
        let locator = LinearScanLocator::new(&graph, &WalkablePolicy::default());
        Fixture {
            graph,
            locator,
            boundary: BoundaryMonitor::new(boundary()),
        }
    }

    fn session_to(building: i64, fixture: &Fixture) -> RouteSession {
        let target = snapshot().target_for_building(building).unwrap();
        RouteSession::new(target, &fixture.graph, 15.0).unwrap()
    }

    #[test]
    fn start_prepends_raw_position() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);
        assert_eq!(session.status(), SessionStatus::Idle);

        let position = near(1);
        fixture.boundary.update(position);
        let path = session
            .start(position, &fixture.boundary, &fixture.graph, &fixture.locator)
            .unwrap()
            .to_vec();

        assert_eq!(session.status(), SessionStatus::Navigating);
        assert_eq!(session.path_node_ids(), &[1, 2, 3, 5]);
        assert_eq!(session.start_node(), Some(1));
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], position);
        assert_eq!(path[1], fixture.graph.position(1).unwrap());
        assert_eq!(path[4], session.destination());
        assert!((session.distance_meters() - 333.0).abs() < 2.0);
    }

    #[test]
    fn start_outside_boundary_stays_idle() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);

        let outside = LatLon::new(60.2, 24.9);
        fixture.boundary.update(outside);
        let result = session.start(outside, &fixture.boundary, &fixture.graph, &fixture.locator);

        assert!(matches!(result, Err(Error::OutsideBoundary)));
        assert_eq!(session.status(), SessionStatus::Idle);
        assert!(session.path_coordinates().is_empty());
    }

    #[test]
    fn unreachable_target_fails_start() {
        let mut fixture = fixture();
        let mut session = session_to(12, &fixture);

        fixture.boundary.update(near(1));
        let result = session.start(near(1), &fixture.boundary, &fixture.graph, &fixture.locator);

        assert!(matches!(result, Err(Error::NoPathFound { from: 1, to: 6 })));
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn no_walkable_nodes_means_no_start() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);

        fixture.boundary.update(near(1));
        let empty = LinearScanLocator::default();
        let result = session.start(near(1), &fixture.boundary, &fixture.graph, &empty);
        assert!(matches!(result, Err(Error::NoStartNode)));
    }

    #[test]
    fn arrives_exactly_once() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);
        fixture.boundary.update(near(1));
        session
            .start(near(1), &fixture.boundary, &fixture.graph, &fixture.locator)
            .unwrap();

        let event = session.on_location_update(near(2), &fixture.graph, &fixture.locator);
        let Some(RouteEvent::Updated { path_coordinates }) = event else {
            panic!("expected a route update, got {event:?}");
        };
        assert_eq!(path_coordinates[0], near(2));
        assert_eq!(session.path_node_ids(), &[2, 3, 5]);

        session.on_location_update(near(3), &fixture.graph, &fixture.locator);
        assert_eq!(session.path_node_ids(), &[3, 5]);

        let mut arrivals = 0;
        for position in [near(5), near(5), near(3)] {
            if let Some(RouteEvent::Arrived { .. }) =
                session.on_location_update(position, &fixture.graph, &fixture.locator)
            {
                arrivals += 1;
            }
        }

        assert_eq!(arrivals, 1);
        assert_eq!(session.status(), SessionStatus::Arrived);
        // No recomputation after arrival
        assert_eq!(session.last_recompute_location(), Some(near(5)));
        assert_eq!(session.path_node_ids(), &[5]);
    }

    #[test]
    fn failed_recompute_keeps_previous_route() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);
        fixture.boundary.update(near(1));
        session
            .start(near(1), &fixture.boundary, &fixture.graph, &fixture.locator)
            .unwrap();
        let before = session.path_coordinates().to_vec();

        // Node 6 is walkable but not connected to the destination
        let event = session.on_location_update(near(6), &fixture.graph, &fixture.locator);

        assert_eq!(event, None);
        assert_eq!(session.status(), SessionStatus::Navigating);
        assert_eq!(session.path_coordinates(), before.as_slice());
    }

    #[test]
    fn cancel_discards_route_and_is_final() {
        let mut fixture = fixture();
        let mut session = session_to(10, &fixture);
        assert!(!session.cancel());

        fixture.boundary.update(near(1));
        session
            .start(near(1), &fixture.boundary, &fixture.graph, &fixture.locator)
            .unwrap();

        assert!(session.cancel());
        assert_eq!(session.status(), SessionStatus::Cancelled);
        assert!(session.path_coordinates().is_empty());
        assert_eq!(
            session.on_location_update(near(2), &fixture.graph, &fixture.locator),
            None
        );
        assert!(matches!(
            session.start(near(1), &fixture.boundary, &fixture.graph, &fixture.locator),
            Err(Error::SessionNotIdle(_))
        ));
    }
}
