use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::FlightState;
use crate::resources::Environment;

/// Why a flight stopped advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightOutcome {
    Landed,
    FuelExhausted,
}

impl fmt::Display for FlightOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightOutcome::Landed => f.write_str("landed"),
            FlightOutcome::FuelExhausted => f.write_str("fuel exhausted"),
        }
    }
}

/// Route of the active flight, as indices into the airport table.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub departure: usize,
    pub destination: usize,
}

/// Bookkeeping for the running session.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FlightSession {
    /// Ticks completed so far.
    pub ticks: u64,
    /// Set once the flight reaches a terminal condition.
    pub outcome: Option<FlightOutcome>,
    /// Set while the aircraft is inside the landing gate without clearance.
    pub landing_clearance_requested: bool,
}

impl FlightSession {
    pub fn in_progress(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Read-only copy of the simulation for observers, refreshed at the end of every tick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub tick: u64,
    pub state: FlightState,
    pub environment: Environment,
}

/// Run condition for systems that only advance an unfinished flight.
pub fn flight_in_progress(session: Option<Res<FlightSession>>) -> bool {
    session.is_some_and(|session| session.in_progress())
}
