use bevy::prelude::*;

use crate::components::{FlightState, Phase};
use crate::resources::FlightOutcome;
use crate::systems::Transition;

pub use crate::systems::EnvelopeWarning;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChanged {
    pub from: Phase,
    pub to: Phase,
}

impl From<Transition> for PhaseChanged {
    fn from(transition: Transition) -> Self {
        Self {
            from: transition.from,
            to: transition.to,
        }
    }
}

/// Sent once, on the tick the flight reaches a terminal condition.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FlightTerminated {
    pub outcome: FlightOutcome,
    pub tick: u64,
    pub state: FlightState,
}

/// Sent once per approach when the pilot has to clear the landing or go around.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LandingClearanceRequired {
    /// Distance to the destination (nm).
    pub distance_remaining: f64,
}
