use bevy::prelude::*;
use nalgebra::Vector2;

use crate::components::{Aircraft, FlightState};
use crate::resources::Environment;
use crate::utils::{
    DENSITY_ALTITUDE_PER_HPA, GRAVITY, ISA_SEA_LEVEL_PRESSURE, SEA_LEVEL_SPEED_OF_SOUND,
};

/// Speeds resolved against the air mass for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirData {
    /// Ground speed (kt).
    pub ground_speed: f64,
    /// True airspeed (kt).
    pub true_airspeed: f64,
    /// Indicated airspeed (kt).
    pub indicated_airspeed: f64,
    pub mach: f64,
}

/// Resolves the wind triangle and the pressure-corrected airspeeds.
///
/// Wheels on the runway are not carried by the wind, so ground speed equals airspeed
/// until liftoff.
pub fn apply_wind(state: &FlightState, environment: &Environment) -> AirData {
    let true_airspeed = state.speed;

    let ground_speed = if state.phase.is_airborne() {
        let heading = state.heading.to_radians();
        let air = Vector2::new(true_airspeed * heading.sin(), true_airspeed * heading.cos());
        (air + environment.wind_vector()).norm()
    } else {
        true_airspeed
    };

    let pressure_ratio = (environment.pressure / ISA_SEA_LEVEL_PRESSURE).max(0.0);

    AirData {
        ground_speed,
        true_airspeed,
        indicated_airspeed: true_airspeed * pressure_ratio.sqrt(),
        mach: true_airspeed / SEA_LEVEL_SPEED_OF_SOUND,
    }
}

/// Ticks a phase must have been flown before its vertical rate is compared across ticks.
const STEADY_PHASE_TICKS: u32 = 2;

/// Load factor (G) from the bank angle and the change in vertical velocity over the tick.
///
/// `state.vertical_speed` still holds the previous tick's value when this runs. Each phase
/// has its own vertical-rate law and entering one can step the altitude, so the vertical
/// term only counts once the last two ticks were both integrated in the current phase.
pub fn load_factor(state: &FlightState) -> f64 {
    let bank = if state.phase.is_airborne() {
        1.0 / state.bank_angle.to_radians().cos()
    } else {
        1.0
    };
    if state.phase_ticks < STEADY_PHASE_TICKS {
        return bank;
    }

    let climb_rate = state.altitude - state.prev_altitude;
    let previous_climb_rate = state.vertical_speed / 60.0;
    bank + (climb_rate - previous_climb_rate) / GRAVITY
}

/// Density altitude (ft) from the pressure deviation off standard.
pub fn density_altitude(altitude: f64, pressure: f64) -> f64 {
    altitude + (ISA_SEA_LEVEL_PRESSURE - pressure) * DENSITY_ALTITUDE_PER_HPA
}

pub fn air_data_system(
    mut query: Query<&mut FlightState, With<Aircraft>>,
    environment: Res<Environment>,
) {
    for mut state in query.iter_mut() {
        let air_data = apply_wind(&state, &environment);
        state.ground_speed = air_data.ground_speed;
        state.true_airspeed = air_data.true_airspeed;
        state.indicated_airspeed = air_data.indicated_airspeed;
        state.mach = air_data.mach;
        state.g_force = load_factor(&state);
    }
}
