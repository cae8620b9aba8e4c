use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct MetersPerHour(f64);

impl MetersPerHour {
    pub fn new(value: f64) -> Self {
        MetersPerHour(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Effort constants of one vehicle category.
///
/// `up` and `down` are vertical speeds, `horizontal` is the speed on flat
/// ground.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct VehicleSpeedProfile {
    pub up: MetersPerHour,
    pub down: MetersPerHour,
    pub horizontal: MetersPerHour,
}

impl VehicleSpeedProfile {
    pub fn new(up: f64, down: f64, horizontal: f64) -> Self {
        Self {
            up: MetersPerHour::new(up),
            down: MetersPerHour::new(down),
            horizontal: MetersPerHour::new(horizontal),
        }
    }

    /// Name of the first field that would make the estimate meaningless.
    pub(crate) fn invalid_field(&self) -> Option<&'static str> {
        [
            ("up", self.up),
            ("down", self.down),
            ("horizontal", self.horizontal),
        ]
        .into_iter()
        .find(|(_, speed)| !(speed.value() > 0.0 && speed.value().is_finite()))
        .map(|(field, _)| field)
    }
}

pub fn default_speed_profiles() -> FxHashMap<String, VehicleSpeedProfile> {
    let mut profiles = FxHashMap::default();
    profiles.insert(
        String::from("bvv-hike"),
        VehicleSpeedProfile::new(300.0, 500.0, 4_000.0),
    );
    profiles.insert(
        String::from("bvv-bike"),
        VehicleSpeedProfile::new(300.0, 250_000.0, 15_000.0),
    );
    profiles.insert(
        String::from("bvv-mtb"),
        VehicleSpeedProfile::new(400.0, 1_500.0, 12_000.0),
    );
    profiles.insert(
        String::from("racingbike"),
        VehicleSpeedProfile::new(500.0, 250_000.0, 25_000.0),
    );
    profiles
}
