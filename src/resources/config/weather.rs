use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::Precipitation;

/// Initial weather and the bounds of its per-tick random walk.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Initial wind speed (kt).
    pub wind_speed: f64,
    /// Initial direction the wind blows from (deg).
    pub wind_direction: f64,
    /// Initial temperature (C).
    pub temperature: f64,
    /// Initial pressure (hPa).
    pub pressure: f64,
    /// Initial visibility (nm).
    pub visibility: f64,
    pub precipitation: Precipitation,

    /// Wind speed jitter per tick (kt).
    pub wind_speed_step: f64,
    /// Wind direction jitter per tick (deg).
    pub wind_direction_step: f64,
    pub max_wind_speed: f64,
    /// Temperature drop per tick (C).
    pub temperature_lapse: f64,
    pub min_temperature: f64,
    /// Height at which the standard pressure is evaluated (m).
    pub reference_height: f64,
    pub visibility_step: f64,
    pub max_visibility: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            wind_speed: 10.0,
            wind_direction: 270.0,
            temperature: 15.0,
            pressure: 1013.25,
            visibility: 10.0,
            precipitation: Precipitation::None,

            wind_speed_step: 0.5,
            wind_direction_step: 5.0,
            max_wind_speed: 60.0,
            temperature_lapse: 0.65,
            min_temperature: -56.5,
            reference_height: 100.0,
            visibility_step: 0.5,
            max_visibility: 10.0,
        }
    }
}
