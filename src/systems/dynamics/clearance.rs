use bevy::prelude::*;
use std::fmt;

use crate::components::{FlightState, Gear, Phase};
use crate::resources::Airport;
use crate::systems::great_circle_distance_nm;

/// Answer to a pilot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    Granted,
    Denied,
}

impl Clearance {
    pub fn is_granted(&self) -> bool {
        *self == Clearance::Granted
    }
}

impl fmt::Display for Clearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clearance::Granted => f.write_str("granted"),
            Clearance::Denied => f.write_str("denied"),
        }
    }
}

/// Starts the takeoff roll. Only valid while on the ground.
pub fn request_takeoff_clearance(state: &mut FlightState) -> Clearance {
    if state.phase != Phase::Ground {
        debug!("Takeoff clearance denied in {}", state.phase);
        return Clearance::Denied;
    }
    state.enter(Phase::Takeoff);
    info!("Cleared for takeoff");
    Clearance::Granted
}

/// Acknowledges the landing. Only valid on approach.
pub fn request_landing_clearance(state: &mut FlightState) -> Clearance {
    if state.phase != Phase::Landing {
        debug!("Landing clearance denied in {}", state.phase);
        return Clearance::Denied;
    }
    state.cleared_to_land = true;
    info!("Cleared to land");
    Clearance::Granted
}

/// Aborts the approach and returns to a clean cruise configuration.
///
/// The distance remaining is recomputed from the current position, since the along-track
/// figure flown down during the approach no longer describes the route ahead.
pub fn go_around(state: &mut FlightState, destination: &Airport) -> Clearance {
    if state.phase != Phase::Landing || state.altitude <= 0.0 {
        debug!(
            "Go-around denied in {} at {:.0} ft",
            state.phase, state.altitude
        );
        return Clearance::Denied;
    }

    state.enter(Phase::Cruise);
    state.flaps = 0;
    state.gear = Gear::Up;
    state.cleared_to_land = false;
    state.distance_remaining = great_circle_distance_nm(
        (state.latitude, state.longitude),
        (destination.latitude, destination.longitude),
    );
    info!(
        "Going around, {:.0} nm to {}",
        state.distance_remaining, destination.code
    );
    Clearance::Granted
}
