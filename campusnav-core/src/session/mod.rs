//! Live navigation: geofence status, location throttling, the route state
//! machine and the navigator coordinating them.

mod boundary;
mod navigator;
mod route;
mod throttle;

pub use boundary::BoundaryMonitor;
pub use navigator::{LocationOutcome, Navigator};
pub use route::{RouteEvent, RouteSession, SessionStatus};
pub use throttle::LocationThrottle;
