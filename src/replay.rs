//! Replays a recorded GPS trace through the navigator

use campusnav_core::routing::export::{route_feature, segments_feature_collection};
use campusnav_core::{
    Error, LatLon, LocationFix, NavigationTarget, Navigator, RouteEvent, SessionStatus,
};
use geojson::FeatureCollection;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Summary of one replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub fixes: usize,
    pub throttled: usize,
    /// Index of the fix navigation started at
    pub started_at: Option<usize>,
    pub route_updates: usize,
    /// Index of the fix that triggered arrival
    pub arrived_at: Option<usize>,
    pub status: SessionStatus,
    pub path: Vec<LatLon>,
}

/// Feeds `fixes` to the navigator in order.
///
/// Navigation starts at the first fix inside the boundary; until then start
/// attempts refused for being outside are retried on every fix.
pub fn replay(
    navigator: &mut Navigator,
    target: &NavigationTarget,
    fixes: &[LocationFix],
) -> Result<ReplayReport, Error> {
    navigator.set_location_permission(true);

    let mut report = ReplayReport {
        fixes: fixes.len(),
        throttled: 0,
        started_at: None,
        route_updates: 0,
        arrived_at: None,
        status: SessionStatus::Idle,
        path: Vec::new(),
    };

    for (idx, fix) in fixes.iter().enumerate() {
        let outcome = navigator.on_location_fix(fix);
        if outcome.throttled {
            report.throttled += 1;
        }

        if report.started_at.is_none() {
            match navigator.start_navigation(target.clone()) {
                Ok(path) => {
                    info!("Navigation started at fix {idx} with {} points", path.len());
                    report.started_at = Some(idx);
                }
                Err(Error::OutsideBoundary) => {
                    debug!("Fix {idx} is outside the navigation area");
                }
                Err(e) => return Err(e),
            }
            continue;
        }

        match outcome.event {
            Some(RouteEvent::Updated { path_coordinates }) => {
                report.route_updates += 1;
                debug!("Fix {idx}: route has {} points", path_coordinates.len());
            }
            Some(RouteEvent::Arrived { destination }) => {
                info!(
                    "Arrived at ({}, {}) on fix {idx}",
                    destination.latitude, destination.longitude
                );
                report.arrived_at = Some(idx);
            }
            None => {}
        }
    }

    if report.started_at.is_none() {
        warn!("Trace never entered the navigation area");
    }

    report.status = navigator.status();
    report.path = navigator.path_coordinates().to_vec();
    Ok(report)
}

/// Path segments and the final route as one collection
pub fn render_geojson(navigator: &Navigator) -> Result<FeatureCollection, Error> {
    let segments = navigator
        .snapshot()
        .map(|snapshot| snapshot.segments.as_slice())
        .unwrap_or_default();
    let mut collection = segments_feature_collection(segments)?;

    if !navigator.path_coordinates().is_empty() {
        let distance = navigator.session().map(|s| s.distance_meters());
        collection
            .features
            .push(route_feature(navigator.path_coordinates(), distance)?);
    }

    Ok(collection)
}
