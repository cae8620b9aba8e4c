use std::fmt::Display;

/// Vehicle category a warning rule applies to, derived from the vehicle id
/// by stripping its namespace prefix (`bvv-bike` is a `Bike`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    Hike,
    Bike,
    Mtb,
    Racingbike,
    Other,
}

impl VehicleClass {
    pub fn from_vehicle(vehicle: &str) -> Self {
        let class = vehicle
            .rsplit_once('-')
            .map_or(vehicle, |(_, class)| class);
        match class.to_ascii_lowercase().as_str() {
            "hike" => VehicleClass::Hike,
            "bike" => VehicleClass::Bike,
            "mtb" => VehicleClass::Mtb,
            "racingbike" => VehicleClass::Racingbike,
            _ => VehicleClass::Other,
        }
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleClass::Hike => "hike",
                VehicleClass::Bike => "bike",
                VehicleClass::Mtb => "mtb",
                VehicleClass::Racingbike => "racingbike",
                VehicleClass::Other => "other",
            }
        )
    }
}
