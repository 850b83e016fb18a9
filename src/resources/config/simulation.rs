use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{dynamics::DynamicsConfig, weather::WeatherConfig};
use crate::components::{AircraftType, ProfileSource};
use crate::utils::SimError;

/// Aircraft and route chosen before the session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightPlanConfig {
    pub aircraft: AircraftType,
    /// Departure airport code, e.g. "CMB".
    pub departure: String,
    /// Destination airport code, e.g. "DEL".
    pub destination: String,
    /// YAML performance profile replacing the built-in figures for `aircraft`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,
}

impl FlightPlanConfig {
    pub fn profile_source(&self) -> ProfileSource {
        match &self.profile {
            Some(path) => ProfileSource::File(path.clone()),
            None => ProfileSource::Programmed(self.aircraft),
        }
    }
}

impl Default for FlightPlanConfig {
    fn default() -> Self {
        Self {
            aircraft: AircraftType::Boeing737,
            departure: "CMB".to_string(),
            destination: "DEL".to_string(),
            profile: None,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Master seed for the weather random walk.
    pub seed: u64,
    /// Wall-clock seconds between ticks. Each tick is always one simulated second.
    pub tick_interval: f64,
    pub flight: FlightPlanConfig,
    pub dynamics: DynamicsConfig,
    pub weather: WeatherConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tick_interval: 1.0,
            flight: FlightPlanConfig::default(),
            dynamics: DynamicsConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, SimError> {
        let config: SimulationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.tick_interval > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "tick_interval must be positive, got {}",
                self.tick_interval
            )));
        }
        self.dynamics.validate()
    }
}
