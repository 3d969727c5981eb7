//! Walking graph built from surveyed path segments

use std::collections::BTreeMap;

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use super::map::{LatLon, MapNode};
use crate::NodeId;
use crate::loading::WalkablePolicy;

/// Undirected walkable connection between two map nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Walking distance in meters
    pub weight: f64,
}

/// Routable campus graph
///
/// Every map node is present, including nodes no segment touches. Edges are
/// stored once and traversable in both directions.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    pub(crate) graph: UnGraph<MapNode, f64>,
    pub(crate) index: HashMap<NodeId, NodeIndex>,
}

impl CampusGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.index
            .get(&id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn position(&self, id: NodeId) -> Option<LatLon> {
        self.node(id).map(|node| node.position)
    }

    /// Nodes in the order they were supplied
    pub fn nodes(&self) -> impl Iterator<Item = &MapNode> {
        self.graph.node_weights()
    }

    /// Nodes eligible as route endpoints, in supply order
    pub fn walkable_nodes(&self, policy: &WalkablePolicy) -> Vec<MapNode> {
        self.nodes()
            .filter(|node| policy.is_walkable(node))
            .cloned()
            .collect()
    }

    /// Edges leaving `id`, sorted by neighbour id
    pub fn edges_from(&self, id: NodeId) -> Vec<Edge> {
        let Some(&idx) = self.index.get(&id) else {
            return Vec::new();
        };

        let mut edges: Vec<Edge> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                Edge {
                    from: id,
                    to: self.graph[other].id,
                    weight: *edge.weight(),
                }
            })
            .collect();
        edges.sort_by_key(|edge| edge.to);
        edges
    }

    /// Full adjacency list keyed by node id
    pub fn adjacency(&self) -> BTreeMap<NodeId, Vec<Edge>> {
        self.nodes()
            .map(|node| (node.id, self.edges_from(node.id)))
            .collect()
    }

    /// Weight of the edge between two nodes, if they are adjacent
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let (&ia, &ib) = (self.index.get(&a)?, self.index.get(&b)?);
        self.graph
            .find_edge(ia, ib)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    pub(crate) fn add_node(&mut self, node: MapNode) -> NodeIndex {
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    /// Adds an undirected edge, keeping the lighter one when the pair is
    /// already connected. Returns false when an existing edge was kept.
    pub(crate) fn upsert_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: f64) -> bool {
        match self.graph.find_edge(a, b) {
            Some(existing) => {
                let current = &mut self.graph[existing];
                if weight < *current {
                    *current = weight;
                    true
                } else {
                    false
                }
            }
            None => {
                self.graph.add_edge(a, b, weight);
                true
            }
        }
    }
}

impl PartialEq for CampusGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.adjacency() == other.adjacency()
    }
}
