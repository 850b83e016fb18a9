use approx::assert_relative_eq;
use apm::{
    components::{ClearanceRequest, ControlCommand, Gear, Phase},
    plugins::{LandingClearanceRequired, PhaseChanged},
    resources::{AirportTable, FlightOutcome},
    systems::great_circle_distance_nm,
};

use crate::common::{
    assert_phase_sequence, fly_to_landing_prompt, takeoff_clearance, TestAppBuilder,
};

#[test]
fn test_go_around_returns_to_clean_cruise() {
    let mut app = TestAppBuilder::new().build();
    app.send(takeoff_clearance());

    let prompted = fly_to_landing_prompt(&mut app, 2000).expect("landing prompt expected");
    assert_eq!(prompted.phase, Phase::Landing);
    assert!(prompted.altitude > 0.0);
    app.drain_events::<PhaseChanged>();

    app.send(ControlCommand::Clearance(ClearanceRequest::GoAround));
    app.tick();

    let state = app.state();
    assert_eq!(state.phase, Phase::Cruise);
    assert_eq!(state.flaps, 0);
    assert_eq!(state.gear, Gear::Up);
    assert!(!state.cleared_to_land);
    assert!(state.altitude > prompted.altitude);

    // Distance is the great-circle distance from where the go-around started
    let airports = AirportTable::default();
    let (_, bangalore) = airports.find("BLR").unwrap();
    let from_prompt = great_circle_distance_nm(
        (prompted.latitude, prompted.longitude),
        (bangalore.latitude, bangalore.longitude),
    );
    assert_relative_eq!(
        state.distance_remaining,
        from_prompt - state.speed / 3600.0,
        epsilon = 1e-6
    );
    assert!(state.distance_remaining > prompted.distance_remaining);

    let phases = app.drain_events::<PhaseChanged>();
    assert_eq!(
        phases.first(),
        Some(&PhaseChanged { from: Phase::Landing, to: Phase::Cruise })
    );
    assert_phase_sequence(&phases);

    // The second approach prompts again and ends on the runway
    assert_eq!(app.run_until_terminated(5000), Some(FlightOutcome::Landed));
    assert_eq!(app.drain_events::<LandingClearanceRequired>().len(), 1);
}

#[test]
fn test_landing_clearance_acknowledged() {
    let mut app = TestAppBuilder::new().build();
    app.send(takeoff_clearance());

    fly_to_landing_prompt(&mut app, 2000).expect("landing prompt expected");
    app.send(ControlCommand::Clearance(ClearanceRequest::Landing));
    app.tick();
    assert!(app.state().cleared_to_land);

    assert_eq!(app.run_until_terminated(500), Some(FlightOutcome::Landed));
    assert!(app.drain_events::<LandingClearanceRequired>().is_empty());
}

#[test]
fn test_takeoff_clearance_ignored_in_flight() {
    let mut app = TestAppBuilder::new().build();
    app.send(takeoff_clearance());
    app.run_ticks(20);
    assert_eq!(app.state().phase, Phase::Climb);
    app.drain_events::<PhaseChanged>();

    app.send(takeoff_clearance());
    app.send(ControlCommand::Clearance(ClearanceRequest::GoAround));
    app.tick();
    assert_eq!(app.state().phase, Phase::Climb);
    assert!(app.drain_events::<PhaseChanged>().is_empty());
}

#[test]
fn test_out_of_range_controls_fall_back_to_defaults() {
    let mut app = TestAppBuilder::new().build();
    app.send(ControlCommand::SetThrottle(1.7));
    app.send(ControlCommand::SetBankAngle(-10.0));
    app.send(ControlCommand::SetFlaps(90));
    app.send(ControlCommand::ToggleTransponder);
    app.tick();

    let state = app.state();
    assert_eq!(state.throttle, 0.8);
    assert_eq!(state.bank_angle, 15.0);
    assert_eq!(state.flaps, 0);
    assert!(!state.transponder);
}
