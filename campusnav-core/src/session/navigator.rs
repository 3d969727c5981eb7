use log::{debug, info, warn};
use serde::Serialize;

use super::boundary::BoundaryMonitor;
use super::route::{RouteEvent, RouteSession, SessionStatus};
use super::throttle::LocationThrottle;
use crate::loading::{NavigationConfig, build_graph};
use crate::Error;
use crate::model::{Building, CampusGraph, LatLon, LocationFix, MapDataSnapshot, NavigationTarget};
use crate::routing::LinearScanLocator;

/// Result of feeding one location fix to the navigator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationOutcome {
    pub inside_boundary: bool,
    /// The fix only refreshed the boundary status
    pub throttled: bool,
    pub event: Option<RouteEvent>,
}

/// Entry point for the map screen.
///
/// Owns the current map snapshot and the graph built from it, the geofence
/// status, the location permission and at most one route session. Fixes are
/// processed one at a time to completion.
#[derive(Debug)]
pub struct Navigator {
    config: NavigationConfig,
    snapshot: Option<MapDataSnapshot>,
    graph: Option<CampusGraph>,
    locator: LinearScanLocator,
    boundary: BoundaryMonitor,
    throttle: LocationThrottle,
    permission_granted: bool,
    session: Option<RouteSession>,
}

impl Navigator {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: NavigationConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            boundary: BoundaryMonitor::new(config.boundary.clone()),
            throttle: LocationThrottle::new(config.throttle.clone()),
            config,
            snapshot: None,
            graph: None,
            locator: LinearScanLocator::default(),
            permission_granted: false,
            session: None,
        })
    }

    /// Installs new map data and rebuilds the graph if it changed.
    ///
    /// Returns whether a rebuild happened. On a construction error the
    /// navigator has no graph until a different snapshot loads successfully;
    /// boundary tracking keeps working.
    ///
    /// # Errors
    ///
    /// Propagates graph construction errors
    pub fn load_snapshot(&mut self, snapshot: MapDataSnapshot) -> Result<bool, Error> {
        if self.snapshot.as_ref() == Some(&snapshot) {
            debug!("Map snapshot unchanged, keeping current graph");
            return Ok(false);
        }

        if self.session.take().is_some() {
            info!("Map data changed, dropping active route session");
        }
        self.graph = None;
        self.locator = LinearScanLocator::default();

        let result = build_graph(
            &snapshot.nodes,
            &snapshot.segments,
            self.config.coordinate_tolerance_meters,
        );
        self.snapshot = Some(snapshot);

        let graph = result.inspect_err(|e| warn!("Navigation disabled: {e}"))?;
        self.locator = LinearScanLocator::new(&graph, &self.config.walkable);
        if self.locator.is_empty() {
            warn!("Map data contains no walkable nodes");
        }
        self.graph = Some(graph);
        Ok(true)
    }

    pub fn set_location_permission(&mut self, granted: bool) {
        if self.permission_granted != granted {
            info!(
                "Location permission {}",
                if granted { "granted" } else { "revoked" }
            );
        }
        self.permission_granted = granted;
    }

    /// Processes a raw location fix.
    ///
    /// The boundary status follows every fix; route recomputation only runs
    /// for fixes passing the throttle and inside the boundary.
    pub fn on_location_fix(&mut self, fix: &LocationFix) -> LocationOutcome {
        let position = fix.position();
        let inside_boundary = self.boundary.update(position);

        if !self.throttle.accept(fix) {
            return LocationOutcome {
                inside_boundary,
                throttled: true,
                event: None,
            };
        }

        // Outside the operational area the route is frozen until the user returns
        let event = match (&mut self.session, &self.graph) {
            (Some(session), Some(graph)) if inside_boundary => {
                session.on_location_update(position, graph, &self.locator)
            }
            _ => None,
        };

        LocationOutcome {
            inside_boundary,
            throttled: false,
            event,
        }
    }

    /// Starts navigating from the last known position, replacing any
    /// previous session once the new route is computed.
    ///
    /// # Errors
    ///
    /// Fails without touching the current session if permission is missing,
    /// there is no graph or position, the user is outside the boundary, or
    /// no route exists.
    pub fn start_navigation(&mut self, target: NavigationTarget) -> Result<&[LatLon], Error> {
        if !self.permission_granted {
            return Err(Error::PermissionDenied);
        }
        let graph = self.graph.as_ref().ok_or(Error::GraphUnavailable)?;
        let position = self
            .boundary
            .last_position()
            .ok_or(Error::LocationUnavailable)?;

        let mut session = RouteSession::new(target, graph, self.config.arrival_radius_meters)?;
        session.start(position, &self.boundary, graph, &self.locator)?;

        let session = self.session.insert(session);
        Ok(session.path_coordinates())
    }

    pub fn cancel_navigation(&mut self) -> bool {
        self.session.as_mut().is_some_and(RouteSession::cancel)
    }

    /// Forgets the session, e.g. when the map screen is left
    pub fn reset_session(&mut self) {
        self.session = None;
        self.throttle.reset();
    }

    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::Idle, RouteSession::status)
    }

    pub fn path_coordinates(&self) -> &[LatLon] {
        self.session
            .as_ref()
            .map(RouteSession::path_coordinates)
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<&RouteSession> {
        self.session.as_ref()
    }

    pub fn is_inside_boundary(&self) -> bool {
        self.boundary.is_inside()
    }

    pub fn graph(&self) -> Option<&CampusGraph> {
        self.graph.as_ref()
    }

    pub fn snapshot(&self) -> Option<&MapDataSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn building_at(&self, point: LatLon) -> Option<&Building> {
        self.snapshot.as_ref()?.building_at(point)
    }

    /// # Errors
    ///
    /// Fails for unknown buildings or before any snapshot is loaded
    pub fn target_for_building(&self, id: i64) -> Result<NavigationTarget, Error> {
        self.snapshot
            .as_ref()
            .ok_or(Error::GraphUnavailable)?
            .target_for_building(id)
    }

    /// # Errors
    ///
    /// Fails for unknown apartments or before any snapshot is loaded
    pub fn target_for_apartment(&self, id: i64) -> Result<NavigationTarget, Error> {
        self.snapshot
            .as_ref()
            .ok_or(Error::GraphUnavailable)?
            .target_for_apartment(id)
    }
}
