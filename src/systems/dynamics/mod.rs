mod clearance;
mod integrator;

pub use clearance::{go_around, request_landing_clearance, request_takeoff_clearance, Clearance};
pub use integrator::{advance, cruise_altitude, Transition};

use bevy::prelude::*;

use crate::components::{Aircraft, FlightState, PerformanceProfile};
use crate::plugins::PhaseChanged;
use crate::resources::DynamicsConfig;

/// Integrates the current phase of every aircraft for one tick.
pub fn dynamics_system(
    mut query: Query<(&mut FlightState, &PerformanceProfile), With<Aircraft>>,
    config: Res<DynamicsConfig>,
    mut phase_events: EventWriter<PhaseChanged>,
) {
    for (mut state, profile) in query.iter_mut() {
        let (next, transition) = advance(&state, profile, &config);
        *state = next;

        if let Some(transition) = transition {
            info!(
                "{} -> {} at {:.0} ft, {:.0} kt",
                transition.from, transition.to, state.altitude, state.speed
            );
            phase_events.send(transition.into());
        }
    }
}
