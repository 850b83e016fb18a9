use bevy::prelude::*;

use crate::components::{Aircraft, FlightState, Phase};
use crate::plugins::{FlightTerminated, LandingClearanceRequired};
use crate::resources::{
    AirportTable, DynamicsConfig, Environment, FlightOutcome, FlightPlan, FlightSession,
    FlightSnapshot,
};

/// Terminal condition reached by `state`, if any. Running out of fuel takes priority.
pub fn check_termination(state: &FlightState) -> Option<FlightOutcome> {
    if state.fuel <= 0.0 {
        Some(FlightOutcome::FuelExhausted)
    } else if state.phase == Phase::Landing && state.altitude <= 0.0 {
        Some(FlightOutcome::Landed)
    } else {
        None
    }
}

/// On short final, still airborne and not yet cleared to land.
pub fn landing_clearance_required(state: &FlightState, config: &DynamicsConfig) -> bool {
    let short_final = state.distance_remaining <= config.landing_clearance_distance
        || state.altitude <= config.landing_clearance_altitude;

    state.phase == Phase::Landing && !state.cleared_to_land && state.altitude > 0.0 && short_final
}

/// Closes the tick: counts it, publishes the snapshot and detects the end of the flight.
#[allow(clippy::too_many_arguments)]
pub fn termination_system(
    query: Query<&FlightState, With<Aircraft>>,
    environment: Res<Environment>,
    config: Res<DynamicsConfig>,
    plan: Res<FlightPlan>,
    airports: Res<AirportTable>,
    mut session: ResMut<FlightSession>,
    mut snapshot: ResMut<FlightSnapshot>,
    mut terminated_events: EventWriter<FlightTerminated>,
    mut clearance_events: EventWriter<LandingClearanceRequired>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };

    session.ticks += 1;
    *snapshot = FlightSnapshot {
        tick: session.ticks,
        state: *state,
        environment: environment.clone(),
    };

    if landing_clearance_required(state, &config) {
        if !session.landing_clearance_requested {
            session.landing_clearance_requested = true;
            let destination = airports
                .get(plan.destination)
                .map(|airport| airport.code.clone())
                .unwrap_or_default();
            info!(
                "{:.1} nm from {}, landing clearance required",
                state.distance_remaining, destination
            );
            clearance_events.send(LandingClearanceRequired {
                distance_remaining: state.distance_remaining,
            });
        }
    } else if state.phase != Phase::Landing {
        // Re-arm the prompt for the next approach
        session.landing_clearance_requested = false;
    }

    if let Some(outcome) = check_termination(state) {
        info!(
            "Flight {} after {} s with {:.1} gal remaining",
            outcome, session.ticks, state.fuel
        );
        session.outcome = Some(outcome);
        terminated_events.send(FlightTerminated {
            outcome,
            tick: session.ticks,
            state: *state,
        });
    }
}
