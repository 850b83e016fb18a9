use bevy::prelude::*;

use crate::resources::{Environment, WeatherConfig, WeatherRng};

/// Advances the weather random walk by one tick.
pub fn weather_system(
    mut environment: ResMut<Environment>,
    config: Res<WeatherConfig>,
    mut rng: ResMut<WeatherRng>,
) {
    environment.update(&config, &mut rng.0);
    debug!(
        "Wind {:03.0}/{:.1} kt, {:.1} C, {:.2} hPa",
        environment.wind_direction,
        environment.wind_speed,
        environment.temperature,
        environment.pressure
    );
}
