use std::{fs::File, io::BufReader, path::Path};

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    stats::speed_profile::{VehicleSpeedProfile, default_speed_profiles},
    warnings::warning_rule::Language,
};

pub const DEFAULT_LANGUAGE: &str = "de";

/// Road classes combined with the track type of the way, `path` becomes
/// `path_grade4` on a grade 4 track.
pub const DEFAULT_MERGEABLE_ROAD_CLASSES: [&str; 3] = ["track", "path", "footway"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields, rename = "StatsConfig")]
pub struct StatsConfig {
    /// Language of the warning messages, `de` or `en`
    pub language: String,

    /// Speed profiles by vehicle id
    pub speed_profiles: FxHashMap<String, VehicleSpeedProfile>,

    pub mergeable_road_classes: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            language: String::from(DEFAULT_LANGUAGE),
            speed_profiles: default_speed_profiles(),
            mergeable_road_classes: DEFAULT_MERGEABLE_ROAD_CLASSES
                .iter()
                .map(|road_class| road_class.to_string())
                .collect(),
        }
    }
}

impl StatsConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: StatsConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (vehicle, profile) in &self.speed_profiles {
            if let Some(field) = profile.invalid_field() {
                return Err(ConfigError::InvalidSpeedProfile {
                    vehicle: vehicle.clone(),
                    field,
                });
            }
        }

        Ok(())
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// `None` when no messages exist for the configured language.
    pub fn language(&self) -> Option<Language> {
        self.language.parse().ok()
    }

    pub fn speed_profile(&self, vehicle: &str) -> Option<&VehicleSpeedProfile> {
        self.speed_profiles.get(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StatsConfig::default();

        assert_eq!(config.language(), Some(Language::De));
        assert!(config.speed_profile("bvv-bike").is_some());
        assert!(config.speed_profile("bike").is_none());
        assert_eq!(config.mergeable_road_classes, vec!["track", "path", "footway"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StatsConfig = serde_json::from_str(r#"{ "language": "en" }"#).unwrap();

        assert_eq!(config.language(), Some(Language::En));
        assert_eq!(config.speed_profiles, default_speed_profiles());
    }

    #[test]
    fn test_unknown_language() {
        let config = StatsConfig::default().with_language("fr");
        assert_eq!(config.language(), None);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(serde_json::from_str::<StatsConfig>(r#"{ "lang": "en" }"#).is_err());
    }

    #[test]
    fn test_validate_speed_profiles() {
        let config: StatsConfig = serde_json::from_str(
            r#"{ "speed_profiles": { "bvv-hike": { "up": 300, "down": -1, "horizontal": 4000 } } }"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedProfile { field: "down", .. })
        ));
    }
}
