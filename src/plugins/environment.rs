use bevy::prelude::*;

use crate::resources::{Environment, WeatherConfig, WeatherRng};

/// Owns the weather: its configuration, its state and its random stream.
pub struct EnvironmentPlugin {
    pub config: Option<WeatherConfig>,
    pub seed: u64,
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self {
            config: None,
            seed: 0,
        }
    }

    pub fn with_config(config: WeatherConfig, seed: u64) -> Self {
        Self {
            config: Some(config),
            seed,
        }
    }
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_default();
        app.insert_resource(Environment::from_config(&config))
            .insert_resource(WeatherRng::from_seed(self.seed))
            .insert_resource(config);
    }
}
