use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Path segment {segment} references ({latitude}, {longitude}) which matches no map node")]
    GraphConstruction {
        segment: usize,
        latitude: f64,
        longitude: f64,
    },
    #[error("Duplicate map node id {0}")]
    DuplicateNode(NodeId),
    #[error("Navigation graph is not available")]
    GraphUnavailable,
    #[error("Current location is unavailable")]
    LocationUnavailable,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Current location is outside the navigation area")]
    OutsideBoundary,
    #[error("No walkable node to start navigation from")]
    NoStartNode,
    #[error("No route available from node {from} to node {to}")]
    NoPathFound { from: NodeId, to: NodeId },
    #[error("Route session is {0}, only idle sessions can start")]
    SessionNotIdle(String),
    #[error("Unknown navigation target: {0}")]
    UnknownTarget(String),
    #[error("Building {0} has no entrance node")]
    NoEntrance(i64),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
