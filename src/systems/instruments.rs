use bevy::prelude::*;

use crate::components::{Aircraft, FlightState};
use crate::resources::Environment;
use crate::systems::density_altitude;

/// Vertical speed (ft/min) over a one-second tick.
pub fn derive(state: &FlightState, prev_altitude: f64) -> f64 {
    (state.altitude - prev_altitude) * 60.0
}

/// Updates the read-only gauges. Must run last in the tick, after the envelope guard.
pub fn update_instruments(state: &mut FlightState, environment: &Environment) {
    state.vertical_speed = derive(state, state.prev_altitude);
    state.density_altitude = density_altitude(state.altitude, environment.pressure);
    state.prev_altitude = state.altitude;
}

pub fn instruments_system(
    mut query: Query<&mut FlightState, With<Aircraft>>,
    environment: Res<Environment>,
) {
    for mut state in query.iter_mut() {
        update_instruments(&mut state, &environment);
    }
}
