//! Command-line front-end of the campus navigation engine.
//!
//! Loads map data and a recorded GPS trace from files and replays the trace
//! through [`campusnav_core::Navigator`].

pub mod config;
pub mod replay;

pub use config::AppConfig;
pub use replay::{ReplayReport, render_geojson, replay};
