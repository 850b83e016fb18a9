use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::utils::SimError;

/// Enumeration of the built-in aircraft types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftType {
    Cessna172,
    #[default]
    Boeing737,
    AirbusA320,
}

impl AircraftType {
    pub fn name(&self) -> &'static str {
        match self {
            AircraftType::Cessna172 => "Cessna 172",
            AircraftType::Boeing737 => "Boeing 737",
            AircraftType::AirbusA320 => "Airbus A320",
        }
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AircraftType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "cessna" | "cessna172" | "c172" => Ok(AircraftType::Cessna172),
            "boeing" | "boeing737" | "b737" | "737" => Ok(AircraftType::Boeing737),
            "airbus" | "airbus320" | "airbusa320" | "a320" => Ok(AircraftType::AirbusA320),
            _ => Err(SimError::UnknownAircraftType(s.to_string())),
        }
    }
}

/// Source for a performance profile.
/// Can either be a built-in type (`Programmed`) or loaded from a YAML file.
#[derive(Debug, Clone)]
pub enum ProfileSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Static operating limits of an aircraft, fixed for the whole flight.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    /// Display name, defaults to the type name.
    pub name: String,
    /// Maximum speed (kt).
    pub max_speed: f64,
    /// Service ceiling (ft).
    pub max_altitude: f64,
    /// Fuel capacity (gal).
    pub max_fuel: f64,
    /// Empty weight (lbs).
    pub empty_weight: f64,
    /// Maximum takeoff weight (lbs).
    pub max_weight: f64,
    /// Maximum static thrust (lbs).
    pub max_thrust: f64,
    /// Nominal fuel flow (gal/hr).
    pub fuel_flow: f64,
    /// Clean stall speed (kt).
    pub stall_speed: f64,
    /// Never-exceed speed (kt).
    pub vne: f64,
    /// Maximum structural cruising speed (kt).
    pub vno: f64,
    /// Maximum flap-extended speed (kt).
    pub vfe: f64,
}

impl Default for PerformanceProfile {
    /// The `Boeing737` profile is chosen as the default, matching the default aircraft type.
    fn default() -> Self {
        Self::boeing_737()
    }
}

impl PerformanceProfile {
    /// Creates a performance profile from a given source.
    ///
    /// # Arguments
    /// * `source` - A `ProfileSource` specifying if the profile is built in (`Programmed`)
    ///              or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the profile or an error if the file fails to load or validate.
    pub fn new(source: ProfileSource) -> Result<Self, SimError> {
        match source {
            ProfileSource::Programmed(aircraft_type) => Ok(Self::for_type(aircraft_type)),
            ProfileSource::File(path) => Self::from_file(path),
        }
    }

    pub fn for_type(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Cessna172 => Self::cessna_172(),
            AircraftType::Boeing737 => Self::boeing_737(),
            AircraftType::AirbusA320 => Self::airbus_a320(),
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            name: AircraftType::Cessna172.name().to_string(),
            max_speed: 160.0,
            max_altitude: 14000.0,
            max_fuel: 56.0,
            empty_weight: 1670.0,
            max_weight: 2550.0,
            max_thrust: 230.0,
            fuel_flow: 10.0,
            stall_speed: 47.0,
            vne: 163.0,
            vno: 126.0,
            vfe: 85.0,
        }
    }

    pub fn boeing_737() -> Self {
        Self {
            name: AircraftType::Boeing737.name().to_string(),
            max_speed: 350.0,
            max_altitude: 41000.0,
            max_fuel: 6875.0,
            empty_weight: 91000.0,
            max_weight: 174200.0,
            max_thrust: 27000.0,
            fuel_flow: 2500.0,
            stall_speed: 108.0,
            vne: 350.0,
            vno: 280.0,
            vfe: 230.0,
        }
    }

    pub fn airbus_a320() -> Self {
        Self {
            name: AircraftType::AirbusA320.name().to_string(),
            max_altitude: 39800.0,
            empty_weight: 93000.0,
            max_weight: 170000.0,
            ..Self::boeing_737()
        }
    }

    /// Loads a profile from a YAML file and validates it.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML profile.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file_contents = std::fs::read_to_string(path)?;
        let profile: PerformanceProfile = serde_yaml::from_str(&file_contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that the speed and altitude limits describe a usable envelope.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.stall_speed <= 0.0 || self.vne <= self.stall_speed {
            return Err(SimError::InvalidConfig(format!(
                "{}: stall speed {} kt must be positive and below vne {} kt",
                self.name, self.stall_speed, self.vne
            )));
        }
        if self.max_altitude <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "{}: max altitude must be positive",
                self.name
            )));
        }
        Ok(())
    }
}
