use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{SimError, MAX_FLAPS, MIN_FLAPS};

/// Rate constants and thresholds of the per-phase integrators.
///
/// All rates are per one-second tick. Changing the tick length means rescaling every
/// rate here pro rata.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    // Ground
    /// Rolling deceleration (kt/tick).
    pub ground_deceleration: f64,
    /// Fuel burn per unit throttle while on the ground (gal/tick).
    pub ground_fuel_burn: f64,

    // Takeoff
    /// Acceleration per unit throttle (kt/tick).
    pub takeoff_acceleration: f64,
    pub takeoff_fuel_burn: f64,
    /// Liftoff speed (kt); exceeding it starts the climb.
    pub liftoff_speed: f64,
    /// One-off altitude step applied at liftoff (ft).
    pub liftoff_altitude_step: f64,

    // Climb
    pub climb_acceleration: f64,
    /// Fixed drag term subtracted from the climb acceleration (kt/tick).
    pub climb_drag: f64,
    /// Altitude gained per knot of speed (ft/tick per kt).
    pub climb_rate_factor: f64,
    pub climb_fuel_burn: f64,

    // Cruise
    /// Target cruise altitude (ft), capped by the aircraft ceiling.
    pub cruise_altitude: f64,
    /// Cruise speed target per unit throttle (kt).
    pub cruise_speed_gain: f64,
    pub cruise_speed_response: f64,
    pub cruise_altitude_response: f64,
    pub cruise_fuel_burn: f64,
    /// Distance remaining (nm) at which the descent starts.
    pub descent_distance: f64,
    /// Flap setting deployed at top of descent (deg).
    pub descent_flaps: u8,

    // Descent
    pub descent_speed_gain: f64,
    pub descent_speed_response: f64,
    /// Altitude lost per knot of speed (ft/tick per kt).
    pub descent_rate_factor: f64,
    pub descent_fuel_burn: f64,
    /// Altitude (ft) below which the approach starts.
    pub approach_altitude: f64,
    /// Flap setting on entering the approach (deg).
    pub approach_flaps: u8,

    // Landing
    pub landing_deceleration: f64,
    pub landing_rate_factor: f64,
    pub landing_fuel_burn: f64,
    /// Approach speed floor as a multiple of the stall speed.
    pub approach_speed_factor: f64,
    /// Distance (nm) inside which a landing clearance is requested.
    pub landing_clearance_distance: f64,
    /// Height (ft) below which a landing clearance is requested regardless of distance.
    pub landing_clearance_altitude: f64,

    /// Throttle-independent burn while the engines are turning (gal/tick).
    pub idle_fuel_burn: f64,
    /// Maximum autopilot heading change (deg/tick).
    pub autopilot_turn_rate: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            ground_deceleration: 1.0,
            ground_fuel_burn: 0.05,

            takeoff_acceleration: 10.0,
            takeoff_fuel_burn: 0.3,
            liftoff_speed: 120.0,
            liftoff_altitude_step: 50.0,

            climb_acceleration: 2.0,
            climb_drag: 0.5,
            climb_rate_factor: 0.5,
            climb_fuel_burn: 0.2,

            cruise_altitude: 30000.0,
            cruise_speed_gain: 400.0,
            cruise_speed_response: 0.05,
            cruise_altitude_response: 0.1,
            cruise_fuel_burn: 0.15,
            descent_distance: 100.0,
            descent_flaps: 10,

            descent_speed_gain: 300.0,
            descent_speed_response: 0.05,
            descent_rate_factor: 0.4,
            descent_fuel_burn: 0.1,
            approach_altitude: 5000.0,
            approach_flaps: 20,

            landing_deceleration: 5.0,
            landing_rate_factor: 0.2,
            landing_fuel_burn: 0.05,
            approach_speed_factor: 1.3,
            landing_clearance_distance: 10.0,
            landing_clearance_altitude: 1000.0,

            idle_fuel_burn: 0.01,
            autopilot_turn_rate: 3.0,
        }
    }
}

impl DynamicsConfig {
    /// Rejects settings the integrators cannot fly: non-positive rates and speeds, negative
    /// burns or thresholds, responses outside (0, 1] and flap settings outside the flap range.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("takeoff_acceleration", self.takeoff_acceleration),
            ("liftoff_speed", self.liftoff_speed),
            ("climb_rate_factor", self.climb_rate_factor),
            ("cruise_altitude", self.cruise_altitude),
            ("cruise_speed_gain", self.cruise_speed_gain),
            ("descent_speed_gain", self.descent_speed_gain),
            ("descent_rate_factor", self.descent_rate_factor),
            ("landing_rate_factor", self.landing_rate_factor),
            ("approach_speed_factor", self.approach_speed_factor),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "dynamics.{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("ground_deceleration", self.ground_deceleration),
            ("ground_fuel_burn", self.ground_fuel_burn),
            ("takeoff_fuel_burn", self.takeoff_fuel_burn),
            ("liftoff_altitude_step", self.liftoff_altitude_step),
            ("climb_acceleration", self.climb_acceleration),
            ("climb_drag", self.climb_drag),
            ("climb_fuel_burn", self.climb_fuel_burn),
            ("cruise_fuel_burn", self.cruise_fuel_burn),
            ("descent_distance", self.descent_distance),
            ("descent_fuel_burn", self.descent_fuel_burn),
            ("approach_altitude", self.approach_altitude),
            ("landing_deceleration", self.landing_deceleration),
            ("landing_fuel_burn", self.landing_fuel_burn),
            ("landing_clearance_distance", self.landing_clearance_distance),
            ("landing_clearance_altitude", self.landing_clearance_altitude),
            ("idle_fuel_burn", self.idle_fuel_burn),
            ("autopilot_turn_rate", self.autopilot_turn_rate),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "dynamics.{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        let responses = [
            ("cruise_speed_response", self.cruise_speed_response),
            ("cruise_altitude_response", self.cruise_altitude_response),
            ("descent_speed_response", self.descent_speed_response),
        ];
        for (name, value) in responses {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SimError::InvalidConfig(format!(
                    "dynamics.{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        for (name, flaps) in [
            ("descent_flaps", self.descent_flaps),
            ("approach_flaps", self.approach_flaps),
        ] {
            if !(MIN_FLAPS..=MAX_FLAPS).contains(&i32::from(flaps)) {
                return Err(SimError::InvalidConfig(format!(
                    "dynamics.{} must be within [{}, {}] deg, got {}",
                    name, MIN_FLAPS, MAX_FLAPS, flaps
                )));
            }
        }

        Ok(())
    }
}
