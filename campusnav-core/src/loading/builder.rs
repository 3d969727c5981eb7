use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, info};
use petgraph::graph::NodeIndex;

use crate::geometry::distance_meters;
use crate::model::{CampusGraph, LatLon, MapNode, PathSegment};
use crate::Error;

/// Builds the walking graph from map nodes and surveyed path segments.
///
/// Every segment point must match a node, either exactly or within
/// `tolerance_meters`. Consecutive points become undirected edges weighted by
/// their distance in meters; parallel edges collapse to the lightest one.
///
/// # Errors
///
/// Returns [`Error::GraphConstruction`] for a segment point without a node and
/// [`Error::DuplicateNode`] if a node id is supplied twice.
pub fn build_graph(
    nodes: &[MapNode],
    segments: &[PathSegment],
    tolerance_meters: f64,
) -> Result<CampusGraph, Error> {
    let mut graph = CampusGraph::default();
    let mut exact: HashMap<(u64, u64), NodeIndex> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        if graph.contains(node.id) {
            return Err(Error::DuplicateNode(node.id));
        }
        let key = coordinate_key(node.position);
        let idx = graph.add_node(node.clone());
        // Nodes sharing a position resolve to the first one supplied
        exact.entry(key).or_insert(idx);
    }

    let mut merged = 0usize;
    for (segment_idx, segment) in segments.iter().enumerate() {
        let resolved = segment
            .points
            .iter()
            .map(|&point| {
                resolve_point(&graph, &exact, point, tolerance_meters).ok_or(
                    Error::GraphConstruction {
                        segment: segment_idx,
                        latitude: point.latitude,
                        longitude: point.longitude,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (a, b) in resolved.into_iter().tuple_windows() {
            if a == b {
                continue;
            }
            let weight = distance_meters(graph.graph[a].position, graph.graph[b].position);
            if !graph.upsert_edge(a, b, weight) {
                merged += 1;
            }
        }
    }

    if merged > 0 {
        debug!("Merged {merged} duplicate path edges");
    }
    info!(
        "Built campus graph with {} nodes and {} edges from {} segments",
        graph.node_count(),
        graph.edge_count(),
        segments.len()
    );

    Ok(graph)
}

fn coordinate_key(position: LatLon) -> (u64, u64) {
    // +0.0 folds negative zero into the same key
    (
        (position.latitude + 0.0).to_bits(),
        (position.longitude + 0.0).to_bits(),
    )
}

fn resolve_point(
    graph: &CampusGraph,
    exact: &HashMap<(u64, u64), NodeIndex>,
    point: LatLon,
    tolerance_meters: f64,
) -> Option<NodeIndex> {
    if let Some(&idx) = exact.get(&coordinate_key(point)) {
        return Some(idx);
    }

    let mut best: Option<(NodeIndex, f64)> = None;
    for idx in graph.graph.node_indices() {
        let distance = distance_meters(point, graph.graph[idx].position);
        if distance <= tolerance_meters && best.is_none_or(|(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}
