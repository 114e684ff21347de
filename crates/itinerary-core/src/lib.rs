#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod route;

pub use config::ItineraryConfig;
pub use error::{ConfigError, ConfigLoadError};
pub use metrics::{measure, route_distance, route_time, segments, RouteMetrics, Segment};
pub use model::{DistanceMatrix, ItineraryModel, Location, LocationId, Roles};
pub use route::{Day, DayAssignment, Route};
