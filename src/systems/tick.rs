use rand::Rng;

use crate::components::{ControlInputs, FlightState, PerformanceProfile};
use crate::resources::{Airport, DynamicsConfig, Environment, FlightOutcome, WeatherConfig};
use crate::systems::{
    advance, apply_controls, apply_wind, check_termination, clamp, landing_clearance_required,
    load_factor, navigate, steer, update_instruments, EnvelopeWarning, Transition,
};

/// Everything a tick reads but never changes.
#[derive(Debug, Clone, Copy)]
pub struct FlightContext<'a> {
    pub profile: &'a PerformanceProfile,
    pub destination: &'a Airport,
    pub dynamics: &'a DynamicsConfig,
    pub weather: &'a WeatherConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub state: FlightState,
    pub environment: Environment,
    pub warnings: Vec<EnvelopeWarning>,
    /// Phase changes in the order they happened.
    pub transitions: Vec<Transition>,
    pub outcome: Option<FlightOutcome>,
    /// True while on approach inside the clearance gate without a landing clearance.
    pub landing_clearance_required: bool,
}

/// Advances the whole simulation by one second without an ECS world.
///
/// Runs the same stages, in the same order, as the systems scheduled by `FlightPlugin`.
/// A state that is already terminal is returned unchanged.
pub fn tick<R: Rng + ?Sized>(
    state: &FlightState,
    inputs: &ControlInputs,
    environment: &Environment,
    context: &FlightContext,
    rng: &mut R,
) -> TickResult {
    if let Some(outcome) = check_termination(state) {
        return TickResult {
            state: *state,
            environment: environment.clone(),
            warnings: Vec::new(),
            transitions: Vec::new(),
            outcome: Some(outcome),
            landing_clearance_required: false,
        };
    }

    let mut state = *state;
    let mut transitions = apply_controls(&mut state, inputs, context.destination);

    let mut environment = environment.clone();
    environment.update(context.weather, rng);

    let (mut state, transition) = advance(&state, context.profile, context.dynamics);
    transitions.extend(transition);
    (state.heading, state.turn_radius) = steer(&state, context.destination, context.dynamics);

    let air_data = apply_wind(&state, &environment);
    state.ground_speed = air_data.ground_speed;
    state.true_airspeed = air_data.true_airspeed;
    state.indicated_airspeed = air_data.indicated_airspeed;
    state.mach = air_data.mach;
    state.g_force = load_factor(&state);

    let fix = navigate(&state, state.ground_speed, state.heading);
    state.latitude = fix.latitude;
    state.longitude = fix.longitude;
    state.distance_remaining = fix.distance_remaining;

    let (mut state, warnings) = clamp(&state, context.profile);
    update_instruments(&mut state, &environment);

    TickResult {
        outcome: check_termination(&state),
        landing_clearance_required: landing_clearance_required(&state, context.dynamics),
        state,
        environment,
        warnings,
        transitions,
    }
}
