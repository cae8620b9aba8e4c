pub mod eta;
pub mod interval_merger;
pub mod route_stats;
pub mod segment_aggregator;
pub mod speed_profile;
