//! Route finding over the campus graph

pub mod dijkstra;
pub mod export;
pub mod nearest;

pub use dijkstra::{Route, ShortestPaths, dijkstra, get_path, shortest_path};
pub use nearest::{LinearScanLocator, NodeLocator, find_closest_walkable_node};
