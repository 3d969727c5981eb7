//! This module is responsible for reading map data and location traces
//! and building the walking graph used for navigation.

mod builder;
mod config;
mod de;
mod parser;
mod raw_types;

pub use builder::build_graph;
pub use config::{DEFAULT_BOUNDARY, NavigationConfig, ThrottleConfig, WalkablePolicy};
pub use de::parse_lat_lon;
pub use parser::{parse_snapshot, read_snapshot, read_trace, trace_from_reader};
pub use raw_types::{RawApartment, RawBuilding, RawNode, RawSegment, RawSnapshot};
