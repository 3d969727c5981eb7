//! Snapping GPS positions to walkable graph nodes

use crate::geometry::distance_meters;
use crate::loading::WalkablePolicy;
use crate::model::{CampusGraph, LatLon, MapNode};

/// Closest node to `position` and its distance in meters.
///
/// Linear scan; on equal distances the node listed first wins. `None` for an
/// empty node list.
pub fn find_closest_walkable_node(
    position: LatLon,
    walkable_nodes: &[MapNode],
) -> Option<(&MapNode, f64)> {
    let mut best: Option<(&MapNode, f64)> = None;
    for node in walkable_nodes {
        let distance = distance_meters(position, node.position);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((node, distance));
        }
    }
    best
}

/// Lookup of the walkable node a position snaps to
pub trait NodeLocator {
    fn nearest(&self, position: LatLon) -> Option<(&MapNode, f64)>;
}

/// Scans every walkable node, enough for campus-sized maps
#[derive(Debug, Clone, Default)]
pub struct LinearScanLocator {
    nodes: Vec<MapNode>,
}

impl LinearScanLocator {
    pub fn new(graph: &CampusGraph, policy: &WalkablePolicy) -> Self {
        Self::from_nodes(graph.walkable_nodes(policy))
    }

    pub fn from_nodes(nodes: Vec<MapNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeLocator for LinearScanLocator {
    fn nearest(&self, position: LatLon) -> Option<(&MapNode, f64)> {
        find_closest_walkable_node(position, &self.nodes)
    }
}
