use bevy::prelude::*;
use nalgebra::Vector2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::resources::WeatherConfig;
use crate::utils::{
    wrap_degrees, RngManager, ISA_LAPSE_RATE, ISA_PRESSURE_EXPONENT, ISA_SEA_LEVEL_PRESSURE,
    ISA_SEA_LEVEL_TEMP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precipitation {
    #[default]
    None,
    Rain,
    Snow,
}

/// Ambient weather, evolved once per tick independently of the aircraft.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Wind speed (kt).
    pub wind_speed: f64,
    /// Direction the wind blows from (deg).
    pub wind_direction: f64,
    /// Temperature (C).
    pub temperature: f64,
    /// Pressure (hPa).
    pub pressure: f64,
    /// Visibility (nm).
    pub visibility: f64,
    pub precipitation: Precipitation,
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_config(&WeatherConfig::default())
    }
}

impl Environment {
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self {
            wind_speed: config.wind_speed,
            wind_direction: wrap_degrees(config.wind_direction),
            temperature: config.temperature,
            pressure: config.pressure,
            visibility: config.visibility,
            precipitation: config.precipitation,
        }
    }

    /// Advances the weather by one tick of bounded random walk.
    pub fn update<R: Rng + ?Sized>(&mut self, config: &WeatherConfig, rng: &mut R) {
        self.wind_speed = (self.wind_speed + jitter(rng) * config.wind_speed_step)
            .clamp(0.0, config.max_wind_speed);
        self.wind_direction =
            wrap_degrees(self.wind_direction + jitter(rng) * config.wind_direction_step);
        self.temperature =
            (self.temperature - config.temperature_lapse).max(config.min_temperature);
        self.pressure = standard_pressure(config.reference_height);
        self.visibility = (self.visibility + jitter(rng) * config.visibility_step)
            .clamp(0.0, config.max_visibility);

        if self.precipitation == Precipitation::Rain && self.temperature <= 0.0 {
            self.precipitation = Precipitation::Snow;
        }
    }

    /// Velocity of the air mass (kt) as (east, north). Points away from `wind_direction`.
    pub fn wind_vector(&self) -> Vector2<f64> {
        let toward = (self.wind_direction + 180.0).to_radians();
        Vector2::new(
            self.wind_speed * toward.sin(),
            self.wind_speed * toward.cos(),
        )
    }
}

/// Standard-atmosphere pressure (hPa) at `height` metres.
pub fn standard_pressure(height: f64) -> f64 {
    ISA_SEA_LEVEL_PRESSURE
        * ((ISA_SEA_LEVEL_TEMP - ISA_LAPSE_RATE * height) / ISA_SEA_LEVEL_TEMP)
            .powf(ISA_PRESSURE_EXPONENT)
}

/// One of -1, 0, +1 with equal probability.
fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen_range(0..3) - 1) as f64
}

/// RNG stream driving the weather walk.
#[derive(Resource, Debug, Clone)]
pub struct WeatherRng(pub ChaCha8Rng);

impl WeatherRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(RngManager::new(seed).get_rng("weather"))
    }
}
