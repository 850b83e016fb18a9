use bevy::prelude::*;

use crate::components::{Aircraft, FlightState};
use crate::resources::{Airport, AirportTable, DynamicsConfig, FlightPlan};
use crate::utils::{
    heading_difference, wrap_degrees, EARTH_RADIUS_NM, FEET_PER_NM, GRAVITY, KNOTS_TO_FPS,
    NM_PER_DEGREE_LAT, SECONDS_PER_HOUR,
};

/// Below this airspeed (ft/s) turn geometry is undefined.
const MIN_TURN_AIRSPEED: f64 = 1.0;

/// Position and route progress after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Distance remaining (nm).
    pub distance_remaining: f64,
}

/// Haversine distance (nm) between two (latitude, longitude) pairs in degrees.
pub fn great_circle_distance_nm(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_NM * c
}

/// Initial great-circle bearing (deg, [0, 360)) from one point toward another.
pub fn initial_bearing(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lat2) = (from.0.to_radians(), to.0.to_radians());
    let dlon = (to.1 - from.1).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    wrap_degrees(y.atan2(x).to_degrees())
}

/// Coordinated turn rate (deg/s) at `speed` kt and `bank_angle` deg.
pub fn coordinated_turn_rate(speed: f64, bank_angle: f64) -> f64 {
    let airspeed = speed * KNOTS_TO_FPS;
    if airspeed < MIN_TURN_AIRSPEED {
        return 0.0;
    }
    (GRAVITY * bank_angle.to_radians().tan() / airspeed).to_degrees()
}

/// Radius (nm) of a turn flown at `speed` kt and `rate` deg/s. Zero when not turning.
pub fn turn_radius_nm(speed: f64, rate: f64) -> f64 {
    let rate = rate.abs().to_radians();
    if rate == 0.0 {
        return 0.0;
    }
    speed * KNOTS_TO_FPS / rate / FEET_PER_NM
}

/// New heading and turn radius for one tick.
///
/// On the ground the heading is held. With the autopilot engaged the aircraft turns toward
/// the destination at a bounded rate and manual bank is ignored. Otherwise the bank angle
/// drives a coordinated turn.
pub fn steer(state: &FlightState, destination: &Airport, config: &DynamicsConfig) -> (f64, f64) {
    if !state.phase.is_airborne() {
        return (state.heading, 0.0);
    }

    let rate = if state.autopilot {
        let bearing = initial_bearing(
            (state.latitude, state.longitude),
            (destination.latitude, destination.longitude),
        );
        heading_difference(state.heading, bearing)
            .clamp(-config.autopilot_turn_rate, config.autopilot_turn_rate)
    } else {
        coordinated_turn_rate(state.speed, state.bank_angle)
    };

    (
        wrap_degrees(state.heading + rate),
        turn_radius_nm(state.speed, rate),
    )
}

/// Moves the aircraft one tick along `heading` at `ground_speed` kt.
///
/// Uses a flat-earth step with the longitude change scaled by the meridian convergence.
/// Distance remaining is flown down by the dynamics and only floored here.
pub fn navigate(state: &FlightState, ground_speed: f64, heading: f64) -> NavFix {
    let distance = ground_speed / SECONDS_PER_HOUR;
    let heading = heading.to_radians();

    let latitude = state.latitude + distance * heading.cos() / NM_PER_DEGREE_LAT;
    let convergence = state.latitude.to_radians().cos();
    let longitude = if convergence.abs() > f64::EPSILON {
        state.longitude + distance * heading.sin() / (NM_PER_DEGREE_LAT * convergence)
    } else {
        state.longitude
    };

    NavFix {
        latitude,
        longitude,
        distance_remaining: state.distance_remaining.max(0.0),
    }
}

pub fn steering_system(
    mut query: Query<&mut FlightState, With<Aircraft>>,
    plan: Res<FlightPlan>,
    airports: Res<AirportTable>,
    config: Res<DynamicsConfig>,
) {
    let Some(destination) = airports.get(plan.destination) else {
        error!("Destination index {} missing from airport table", plan.destination);
        return;
    };

    for mut state in query.iter_mut() {
        let (heading, turn_radius) = steer(&state, destination, &config);
        state.heading = heading;
        state.turn_radius = turn_radius;
    }
}

pub fn navigation_system(mut query: Query<&mut FlightState, With<Aircraft>>) {
    for mut state in query.iter_mut() {
        let fix = navigate(&state, state.ground_speed, state.heading);
        state.latitude = fix.latitude;
        state.longitude = fix.longitude;
        state.distance_remaining = fix.distance_remaining;
    }
}
