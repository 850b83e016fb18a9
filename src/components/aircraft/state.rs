use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::Phase;

/// Landing gear position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gear {
    Up,
    #[default]
    Down,
}

impl Gear {
    pub fn toggled(self) -> Self {
        match self {
            Gear::Up => Gear::Down,
            Gear::Down => Gear::Up,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Up => f.write_str("UP"),
            Gear::Down => f.write_str("DOWN"),
        }
    }
}

/// The aircraft's complete physical state at a tick boundary.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Altitude (ft).
    pub altitude: f64,
    /// Indicated speed (kt).
    pub speed: f64,
    /// Fuel remaining (gal).
    pub fuel: f64,
    /// Throttle setting (0-1).
    pub throttle: f64,
    /// Heading (deg, [0, 360)).
    pub heading: f64,
    /// Bank angle (deg).
    pub bank_angle: f64,
    /// Radius of the current turn (nm), zero when flying straight.
    pub turn_radius: f64,
    /// Distance remaining to the destination (nm).
    pub distance_remaining: f64,
    pub latitude: f64,
    pub longitude: f64,

    // Derived each tick
    /// Vertical speed (ft/min).
    pub vertical_speed: f64,
    /// Ground speed (kt).
    pub ground_speed: f64,
    /// True airspeed (kt).
    pub true_airspeed: f64,
    /// Indicated airspeed (kt).
    pub indicated_airspeed: f64,
    pub mach: f64,
    /// Load factor (G).
    pub g_force: f64,
    /// Density altitude (ft).
    pub density_altitude: f64,

    /// Flap setting (deg).
    pub flaps: u8,
    pub gear: Gear,
    pub autopilot: bool,
    pub transponder: bool,
    pub cleared_to_land: bool,
    pub phase: Phase,
    /// Whole ticks integrated since `phase` was entered.
    pub phase_ticks: u32,
    /// Altitude at the start of the current tick (ft).
    pub prev_altitude: f64,
}

impl Default for FlightState {
    /// A parked aircraft at sea level with gear down and transponder on.
    fn default() -> Self {
        Self {
            altitude: 0.0,
            speed: 0.0,
            fuel: 0.0,
            throttle: 0.0,
            heading: 0.0,
            bank_angle: 0.0,
            turn_radius: 0.0,
            distance_remaining: 0.0,
            latitude: 0.0,
            longitude: 0.0,
            vertical_speed: 0.0,
            ground_speed: 0.0,
            true_airspeed: 0.0,
            indicated_airspeed: 0.0,
            mach: 0.0,
            g_force: 1.0,
            density_altitude: 0.0,
            flaps: 0,
            gear: Gear::Down,
            autopilot: false,
            transponder: true,
            cleared_to_land: false,
            phase: Phase::Ground,
            phase_ticks: 0,
            prev_altitude: 0.0,
        }
    }
}

impl FlightState {
    /// Switches to `phase` and restarts the time-in-phase count.
    pub fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_ticks = 0;
    }
}

impl fmt::Display for FlightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Phase: {}, Alt: {:.0} ft, Speed: {:.0} kt (GS: {:.0} kt), Heading: {:.0}, \
             Bank: {:.0}, VS: {:.0} ft/min, Fuel: {:.1} gal, Dist: {:.0} nm, \
             Flaps: {}, Gear: {}, AP: {}, XPDR: {}",
            self.phase,
            self.altitude,
            self.speed,
            self.ground_speed,
            self.heading,
            self.bank_angle,
            self.vertical_speed,
            self.fuel,
            self.distance_remaining,
            self.flaps,
            self.gear,
            if self.autopilot { "ON" } else { "OFF" },
            if self.transponder { "ON" } else { "OFF" },
        )
    }
}

/// Marker for the simulated aircraft entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Aircraft;
