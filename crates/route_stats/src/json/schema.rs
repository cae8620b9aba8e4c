use schemars::schema_for;

use crate::{config::StatsConfig, route::route_response::RouteResponse, stats::route_stats::RouteStats};

pub fn generate_input_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(RouteResponse))
}

pub fn generate_output_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(RouteStats))
}

pub fn generate_config_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(StatsConfig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schemas() {
        let output: serde_json::Value =
            serde_json::from_str(&generate_output_json_schema().unwrap()).unwrap();

        assert_eq!(output["title"], "RouteStats");
        assert!(output["properties"]["twoDiff"].is_object());
        assert!(generate_input_json_schema().unwrap().contains("RouteResponse"));
        assert!(generate_config_json_schema().unwrap().contains("speed_profiles"));
    }
}
