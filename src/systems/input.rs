use bevy::prelude::*;

use crate::components::{Aircraft, ClearanceRequest, ControlInputs, FlightState};
use crate::plugins::PhaseChanged;
use crate::resources::{Airport, AirportTable, ControlQueue, FlightPlan};
use crate::systems::{
    go_around, request_landing_clearance, request_takeoff_clearance, Clearance, Transition,
};

/// Applies one tick's worth of pilot inputs.
///
/// Settings are written first, then clearance requests are answered in arrival order.
///
/// # Returns
/// The phase changes caused by granted clearances.
pub fn apply_controls(
    state: &mut FlightState,
    inputs: &ControlInputs,
    destination: &Airport,
) -> Vec<Transition> {
    inputs.apply(state);

    let mut transitions = Vec::new();
    for request in &inputs.clearances {
        let from = state.phase;
        let clearance = match request {
            ClearanceRequest::Takeoff => request_takeoff_clearance(state),
            ClearanceRequest::Landing => request_landing_clearance(state),
            ClearanceRequest::GoAround => go_around(state, destination),
        };

        if clearance == Clearance::Denied {
            warn!("{:?} request {} in {}", request, clearance, from);
        } else if state.phase != from {
            transitions.push(Transition {
                from,
                to: state.phase,
            });
        }
    }
    transitions
}

/// Drains the control queue into the aircraft at the tick boundary.
pub fn input_system(
    mut query: Query<&mut FlightState, With<Aircraft>>,
    queue: Res<ControlQueue>,
    plan: Res<FlightPlan>,
    airports: Res<AirportTable>,
    mut phase_events: EventWriter<PhaseChanged>,
) {
    let inputs = queue.drain();
    if inputs.is_empty() {
        return;
    }
    let Some(destination) = airports.get(plan.destination) else {
        error!("Destination index {} missing from airport table", plan.destination);
        return;
    };

    for mut state in query.iter_mut() {
        for transition in apply_controls(&mut state, &inputs, destination) {
            phase_events.send(transition.into());
        }
    }
}
