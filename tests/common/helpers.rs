use apm::{
    components::{ClearanceRequest, ControlCommand, FlightState, Phase},
    plugins::LandingClearanceRequired,
};

use crate::common::TestApp;

pub fn takeoff_clearance() -> ControlCommand {
    ControlCommand::Clearance(ClearanceRequest::Takeoff)
}

/// Ticks until the landing prompt is raised, returning the state at that tick.
pub fn fly_to_landing_prompt(app: &mut TestApp, max_ticks: usize) -> Option<FlightState> {
    for _ in 0..max_ticks {
        app.tick();
        if !app.drain_events::<LandingClearanceRequired>().is_empty() {
            return Some(app.state());
        }
        if app.session().outcome.is_some() {
            return None;
        }
    }
    None
}

/// A state established in cruise at 30000 ft, `distance` nm from the destination.
pub fn cruising_state(from: FlightState, distance: f64) -> FlightState {
    FlightState {
        phase: Phase::Cruise,
        altitude: 30000.0,
        prev_altitude: 30000.0,
        speed: 320.0,
        distance_remaining: distance,
        gear: apm::components::Gear::Up,
        ..from
    }
}
