use approx::assert_relative_eq;
use apm::{
    components::{Gear, Phase},
    plugins::{EnvelopeWarning, FlightTerminated, LandingClearanceRequired, PhaseChanged},
    resources::FlightOutcome,
};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_phase_sequence, assert_state_valid, cruising_state, takeoff_clearance, TestAppBuilder,
};

#[test]
fn test_parked_until_cleared() {
    let mut app = TestAppBuilder::new().build();
    let initial = app.state();

    app.run_ticks(5);
    let state = app.state();
    assert_eq!(state.phase, Phase::Ground);
    assert_eq!(state.speed, 0.0);
    assert_eq!(state.altitude, initial.altitude);
    assert!(state.fuel < initial.fuel);
    assert!(app.drain_events::<PhaseChanged>().is_empty());
}

#[test]
fn test_takeoff_through_control_queue() {
    let mut app = TestAppBuilder::new().build();
    let elevation = app.state().altitude;

    app.send(takeoff_clearance());
    app.run_ticks(15);
    let rolling = app.state();
    assert_eq!(rolling.phase, Phase::Takeoff);
    assert_relative_eq!(rolling.speed, 120.0, epsilon = 1e-9);
    assert_eq!(rolling.altitude, elevation);

    app.tick();
    let airborne = app.state();
    assert_eq!(airborne.phase, Phase::Climb);
    assert!(airborne.speed > 120.0);
    assert_relative_eq!(airborne.altitude, elevation + 50.0);
    assert_eq!(airborne.gear, Gear::Up);
    assert_relative_eq!(airborne.vertical_speed, 3000.0);

    assert_eq!(
        app.drain_events::<PhaseChanged>(),
        vec![
            PhaseChanged { from: Phase::Ground, to: Phase::Takeoff },
            PhaseChanged { from: Phase::Takeoff, to: Phase::Climb },
        ]
    );
    assert!(!app
        .drain_events::<EnvelopeWarning>()
        .iter()
        .any(|w| matches!(w, EnvelopeWarning::HighG { .. })));

    // Liftoff only steps the altitude once
    app.tick();
    let climbing = app.state();
    assert_relative_eq!(
        climbing.altitude,
        airborne.altitude + climbing.speed * 0.5,
        epsilon = 1e-9
    );
}

#[test]
fn test_full_flight_lands() {
    let mut app = TestAppBuilder::new().with_seed(3).build();
    let profile = app.profile();
    let initial_fuel = app.state().fuel;

    app.send(takeoff_clearance());
    let mut previous_fuel = initial_fuel;
    while app.session().outcome.is_none() && app.session().ticks < 2000 {
        app.tick();
        let state = app.state();
        assert_state_valid(&state, &profile);
        assert!(state.fuel < previous_fuel, "fuel must burn every tick");
        previous_fuel = state.fuel;
    }

    assert_eq!(app.session().outcome, Some(FlightOutcome::Landed));
    let ticks = app.session().ticks;
    assert!((950..1020).contains(&ticks), "landed after {} ticks", ticks);

    let landed = app.state();
    assert_eq!(landed.altitude, 0.0);
    assert_eq!(landed.flaps, 0);
    assert!(landed.fuel > 0.0);

    let phases = app.drain_events::<PhaseChanged>();
    assert_phase_sequence(&phases);
    assert_eq!(
        phases.iter().map(|p| p.to).collect::<Vec<_>>(),
        vec![
            Phase::Takeoff,
            Phase::Climb,
            Phase::Cruise,
            Phase::Descent,
            Phase::Landing
        ]
    );

    assert_eq!(app.drain_events::<LandingClearanceRequired>().len(), 1);
    assert!(!app
        .drain_events::<EnvelopeWarning>()
        .iter()
        .any(|w| matches!(w, EnvelopeWarning::HighG { .. })));
    let terminated = app.drain_events::<FlightTerminated>();
    assert_eq!(terminated.len(), 1);
    assert_eq!(terminated[0].outcome, FlightOutcome::Landed);
    assert_eq!(terminated[0].tick, ticks);
    assert_eq!(app.snapshot().tick, ticks);
    assert_eq!(app.snapshot().state, landed);

    // Nothing advances after touchdown
    app.run_ticks(10);
    assert_eq!(app.state(), landed);
    assert_eq!(app.session().ticks, ticks);
}

#[test]
fn test_cruise_inside_descent_distance() {
    let mut app = TestAppBuilder::new().build();
    let state = cruising_state(app.state(), 50.0);
    app.set_state(state);

    app.tick();
    let next = app.state();
    assert_eq!(next.phase, Phase::Descent);
    assert_eq!(next.flaps, 10);
    assert_eq!(
        app.drain_events::<PhaseChanged>(),
        vec![PhaseChanged { from: Phase::Cruise, to: Phase::Descent }]
    );
}

#[test]
fn test_overspeed_clamped_in_climb() {
    let mut app = TestAppBuilder::new().build();
    let profile = app.profile();
    let mut state = app.state();
    state.phase = Phase::Climb;
    state.speed = profile.vne;
    state.altitude = 12000.0;
    state.prev_altitude = 12000.0;
    app.set_state(state);

    app.tick();
    assert_eq!(app.state().speed, profile.vne);
    let warnings = app.drain_events::<EnvelopeWarning>();
    match warnings[..] {
        [EnvelopeWarning::Overspeed { speed, vne }] => {
            assert_relative_eq!(speed, profile.vne + 1.1, epsilon = 1e-9);
            assert_eq!(vne, profile.vne);
        }
        _ => panic!("expected a single overspeed warning, got {:?}", warnings),
    }
}
