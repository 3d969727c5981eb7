//! Single-source shortest paths over the walking graph

mod state;

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use serde::Serialize;

use crate::NodeId;
use crate::model::CampusGraph;
use state::State;

/// Result of a full single-source Dijkstra run
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    pub start: NodeId,
    /// Shortest known distance in meters for every reached node
    pub distances: HashMap<NodeId, f64>,
    /// Predecessor of every reached node except the start
    pub prev: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    pub fn distance(&self, target: NodeId) -> Option<f64> {
        self.distances.get(&target).copied()
    }

    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        get_path(&self.prev, self.start, target)
    }
}

/// Node sequence of a shortest route and its length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub node_ids: Vec<NodeId>,
    pub distance_meters: f64,
}

/// Dijkstra's algorithm from `start` over the whole graph.
///
/// The frontier is ordered by distance, then node id, and neighbours are
/// relaxed in ascending id order, so equal-length alternatives always resolve
/// the same way. Predecessors only change on a strictly shorter path.
pub fn dijkstra(graph: &CampusGraph, start: NodeId) -> ShortestPaths {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(estimated_nodes);
    let mut prev: HashMap<NodeId, NodeId> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);

    if !graph.contains(start) {
        log::debug!("Dijkstra start node {start} is not part of the graph");
        return ShortestPaths {
            start,
            distances,
            prev,
        };
    }

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.edges_from(node) {
            let next = edge.to;
            let next_cost = cost + edge.weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    prev.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        prev.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    ShortestPaths {
        start,
        distances,
        prev,
    }
}

/// Walks predecessors back from `target` to `start`.
///
/// Returns `[start]` when both are the same node and an empty sequence when
/// `target` was not reached.
pub fn get_path(prev: &HashMap<NodeId, NodeId>, start: NodeId, target: NodeId) -> Vec<NodeId> {
    if target == start {
        return vec![start];
    }
    if !prev.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match prev.get(&current) {
            // A predecessor chain longer than the map means it never reaches start
            Some(&previous) if path.len() <= prev.len() => {
                path.push(previous);
                current = previous;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse(); // Now path is from start to target
    path
}

/// Shortest route between two nodes, `None` if `target` is unreachable
pub fn shortest_path(graph: &CampusGraph, start: NodeId, target: NodeId) -> Option<Route> {
    let paths = dijkstra(graph, start);
    let node_ids = paths.path_to(target);
    if node_ids.is_empty() {
        return None;
    }

    Some(Route {
        distance_meters: paths.distance(target).unwrap_or(0.0),
        node_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MapNode;

    const A: NodeId = 1;
    const B: NodeId = 2;
    const C: NodeId = 3;
    const D: NodeId = 4;
    const E: NodeId = 5;

    fn graph_from_edges(node_count: NodeId, edges: &[(NodeId, NodeId, f64)]) -> CampusGraph {
        let mut graph = CampusGraph::default();
        for id in 1..=node_count {
            graph.add_node(MapNode::new(id, 0.0, f64::from(id as i32) * 0.001));
        }
        for &(a, b, weight) in edges {
            let (ia, ib) = (graph.index[&a], graph.index[&b]);
            graph.upsert_edge(ia, ib, weight);
        }
        graph
    }

    fn triangle_with_spur() -> CampusGraph {
        graph_from_edges(5, &[(A, B, 5.0), (B, C, 5.0), (A, C, 7.0), (C, D, 2.0)])
    }

    fn path_weight(graph: &CampusGraph, path: &[NodeId]) -> f64 {
        path.windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap())
            .sum()
    }

    #[test]
    fn triangle_spur_takes_direct_edge() {
        let graph = triangle_with_spur();
        let route = shortest_path(&graph, A, D).unwrap();

        assert_eq!(route.node_ids, vec![A, C, D]);
        assert_eq!(route.distance_meters, 9.0);
        assert_eq!(path_weight(&graph, &[A, B, C, D]), 12.0);
    }

    #[test]
    fn unreachable_target_gives_empty_path() {
        let graph = triangle_with_spur();
        let paths = dijkstra(&graph, A);

        assert!(paths.path_to(E).is_empty());
        assert!(get_path(&paths.prev, A, 42).is_empty());
        assert!(shortest_path(&graph, A, E).is_none());
        assert_eq!(paths.distance(E), None);
    }

    #[test]
    fn path_to_self_is_single_node() {
        let graph = triangle_with_spur();
        assert_eq!(dijkstra(&graph, B).path_to(B), vec![B]);
        assert_eq!(shortest_path(&graph, E, E).unwrap().distance_meters, 0.0);
    }

    #[test]
    fn computes_all_reachable_nodes() {
        let graph = triangle_with_spur();
        let paths = dijkstra(&graph, D);

        assert_eq!(paths.distance(A), Some(9.0));
        assert_eq!(paths.distance(B), Some(7.0));
        assert_eq!(paths.distances.len(), 4);
        assert_eq!(paths.path_to(A), vec![D, C, A]);
    }

    #[test]
    fn unknown_start_reaches_nothing() {
        let graph = triangle_with_spur();
        let paths = dijkstra(&graph, 99);
        assert!(paths.distances.is_empty());
        assert!(paths.path_to(A).is_empty());
    }

    #[test]
    fn equal_alternatives_resolve_deterministically() {
        // Two 2-hop routes of equal length from 1 to 4: via 2 and via 3
        let graph = graph_from_edges(4, &[(1, 3, 1.0), (3, 4, 1.0), (1, 2, 1.0), (2, 4, 1.0)]);
        let first = shortest_path(&graph, 1, 4).unwrap();
        for _ in 0..10 {
            assert_eq!(shortest_path(&graph, 1, 4).unwrap(), first);
        }
        assert_eq!(first.node_ids, vec![1, 2, 4]);
    }

    /// Minimum weight over all simple paths, by exhaustive search
    fn brute_force(graph: &CampusGraph, start: NodeId, target: NodeId) -> Option<f64> {
        fn walk(
            graph: &CampusGraph,
            node: NodeId,
            target: NodeId,
            visited: &mut Vec<NodeId>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if node == target {
                *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
                return;
            }
            for edge in graph.edges_from(node) {
                if !visited.contains(&edge.to) {
                    visited.push(edge.to);
                    walk(graph, edge.to, target, visited, cost + edge.weight, best);
                    visited.pop();
                }
            }
        }

        let mut best = None;
        walk(graph, start, target, &mut vec![start], 0.0, &mut best);
        best
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        // Linear congruential generator keeps the graphs reproducible
        let mut seed: u64 = 0x2545_f491;
        let mut next = move || {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            seed >> 33
        };

        for _ in 0..40 {
            let node_count = 3 + (next() % 8) as NodeId;
            let mut edges = Vec::new();
            for a in 1..=node_count {
                for b in (a + 1)..=node_count {
                    if next() % 100 < 40 {
                        edges.push((a, b, 1.0 + (next() % 50) as f64));
                    }
                }
            }
            let graph = graph_from_edges(node_count, &edges);

            for start in 1..=node_count {
                let paths = dijkstra(&graph, start);
                for target in 1..=node_count {
                    let expected = brute_force(&graph, start, target);
                    let path = paths.path_to(target);
                    match expected {
                        Some(weight) => {
                            assert_eq!(path.first(), Some(&start));
                            assert_eq!(path.last(), Some(&target));
                            assert!((path_weight(&graph, &path) - weight).abs() < 1e-9);
                            assert!((paths.distance(target).unwrap() - weight).abs() < 1e-9);
                        }
                        None => assert!(path.is_empty()),
                    }
                }
            }
        }
    }
}
