use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteStatsError {
    #[error("Route response contains no path")]
    MissingPath,

    #[error("Invalid encoded polyline: {0}")]
    InvalidPolyline(String),

    #[error("Invalid polyline multiplier: {0}")]
    InvalidMultiplier(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Speed profile '{vehicle}' has a non-positive {field} speed")]
    InvalidSpeedProfile {
        vehicle: String,
        field: &'static str,
    },
}
