pub mod config;
pub mod error;
pub mod json;
pub mod route;
pub mod stats;
pub mod warnings;

pub use config::StatsConfig;
pub use error::{ConfigError, RouteStatsError};
pub use route::route_response::{ElevationProfile, RouteResponse};
pub use stats::route_stats::{RouteDetails, RouteStats, compute_stats};

#[cfg(test)]
pub(crate) mod test_utils;
