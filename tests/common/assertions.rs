use apm::{
    components::{FlightState, PerformanceProfile, Phase},
    plugins::PhaseChanged,
};

/// Assert that a state sits inside the envelope after a completed tick
#[track_caller]
pub fn assert_state_valid(state: &FlightState, profile: &PerformanceProfile) {
    assert!(state.fuel >= 0.0, "Fuel must not be negative: {}", state.fuel);
    assert!(
        (0.0..=profile.max_altitude).contains(&state.altitude),
        "Altitude {} outside [0, {}]",
        state.altitude,
        profile.max_altitude
    );
    assert!(
        state.speed <= profile.vne,
        "Speed {} above vne {}",
        state.speed,
        profile.vne
    );
    if !state.phase.allows_low_speed() {
        assert!(
            state.speed >= profile.stall_speed,
            "Speed {} below stall speed {} in {}",
            state.speed,
            profile.stall_speed,
            state.phase
        );
    }
    assert!(
        (0.0..360.0).contains(&state.heading),
        "Heading {} not wrapped",
        state.heading
    );
    assert!(state.distance_remaining >= 0.0);
    assert!(state.latitude.is_finite() && state.longitude.is_finite());
}

/// Assert that every phase change is a forward step or a go-around
#[track_caller]
pub fn assert_phase_sequence(events: &[PhaseChanged]) {
    for event in events {
        assert!(
            event.from.can_transition_to(event.to) && event.from != event.to,
            "Illegal transition {} -> {}",
            event.from,
            event.to
        );
        if event.to < event.from {
            assert_eq!((event.from, event.to), (Phase::Landing, Phase::Cruise));
        }
    }
    for pair in events.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "Transitions must chain");
    }
}
