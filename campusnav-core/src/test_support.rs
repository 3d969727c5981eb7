//! Small campus used by unit tests
//!
//! ```text
//!   5            (60.1020)
//!   |
//!   2 ---- 3     (60.1010)
//!   |      |
//!   1      |     (60.1000)
//!    \     |
//!     ---- 4     (60.0995)
//!                6 isolated, 100 kiosk (not walkable)
//! ```

use crate::model::{Apartment, Building, LatLon, MapDataSnapshot, MapNode, PathSegment};

pub(crate) fn nodes() -> Vec<MapNode> {
    vec![
        MapNode::new(1, 60.1000, 24.8000),
        MapNode::new(2, 60.1010, 24.8000),
        MapNode::new(3, 60.1010, 24.8020),
        MapNode::new(4, 60.0995, 24.8020),
        MapNode::new(5, 60.1020, 24.8020),
        MapNode::new(6, 60.1100, 24.8100),
        MapNode::new(100, 60.1005, 24.8010).with_description("Kiosk"),
    ]
}

fn segment(ids: &[usize]) -> PathSegment {
    let nodes = nodes();
    PathSegment::new(
        ids.iter()
            .map(|&id| nodes.iter().find(|n| n.id == id as i64).unwrap().position)
            .collect(),
    )
}

pub(crate) fn segments() -> Vec<PathSegment> {
    vec![segment(&[1, 2, 3]), segment(&[1, 4, 3]), segment(&[3, 5])]
}

pub(crate) fn boundary() -> Vec<LatLon> {
    vec![
        LatLon::new(60.0900, 24.7900),
        LatLon::new(60.1200, 24.7900),
        LatLon::new(60.1200, 24.8200),
        LatLon::new(60.0900, 24.8200),
    ]
}

pub(crate) fn snapshot() -> MapDataSnapshot {
    MapDataSnapshot {
        nodes: nodes(),
        buildings: vec![
            Building {
                id: 10,
                polygon: vec![
                    LatLon::new(60.1021, 24.8015),
                    LatLon::new(60.1030, 24.8015),
                    LatLon::new(60.1030, 24.8025),
                    LatLon::new(60.1021, 24.8025),
                ],
                entrance_node_ids: vec![5],
            },
            Building {
                id: 12,
                polygon: vec![
                    LatLon::new(60.1101, 24.8095),
                    LatLon::new(60.1110, 24.8095),
                    LatLon::new(60.1110, 24.8105),
                ],
                entrance_node_ids: vec![6],
            },
        ],
        apartments: vec![Apartment {
            id: 101,
            building_id: 10,
            label: Some("A 101".to_string()),
        }],
        segments: segments(),
    }
}

/// Position a few meters off a node
pub(crate) fn near(node: i64) -> LatLon {
    let position = nodes().into_iter().find(|n| n.id == node).unwrap().position;
    LatLon::new(position.latitude + 0.00002, position.longitude + 0.00002)
}
