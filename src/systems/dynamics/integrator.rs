use crate::components::{FlightState, Gear, PerformanceProfile, Phase};
use crate::resources::DynamicsConfig;
use crate::utils::{relax, SECONDS_PER_HOUR};

/// A phase change, as observed across one tick or one clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

/// One-off configuration applied when a phase is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ConfigChange {
    flaps: Option<u8>,
    gear: Option<Gear>,
    /// Altitude added on entry (ft).
    altitude_step: f64,
}

impl ConfigChange {
    fn apply(&self, state: &mut FlightState) {
        if let Some(flaps) = self.flaps {
            state.flaps = flaps;
        }
        if let Some(gear) = self.gear {
            state.gear = gear;
        }
        state.altitude += self.altitude_step;
    }
}

/// Outcome of integrating one phase for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PhaseStep {
    Stay,
    Enter(Phase, ConfigChange),
}

/// Integrates one one-second tick of the current phase.
///
/// Controls are expected to be written into `state` already. The returned state carries the
/// new phase together with any configuration change that entering it implies.
///
/// # Arguments
/// * `state` - State at the start of the tick.
/// * `profile` - Limits of the aircraft, used for the ceiling and the approach floor.
/// * `config` - Per-phase rate constants.
///
/// # Returns
/// The integrated state and the transition taken, if any.
pub fn advance(
    state: &FlightState,
    profile: &PerformanceProfile,
    config: &DynamicsConfig,
) -> (FlightState, Option<Transition>) {
    let mut next = *state;

    let step = match state.phase {
        Phase::Ground => ground(&mut next, config),
        Phase::Takeoff => takeoff(&mut next, config),
        Phase::Climb => climb(&mut next, profile, config),
        Phase::Cruise => cruise(&mut next, profile, config),
        Phase::Descent => descent(&mut next, config),
        Phase::Landing => landing(&mut next, profile, config),
    };

    match step {
        PhaseStep::Stay => {
            next.phase_ticks = state.phase_ticks.saturating_add(1);
            (next, None)
        }
        PhaseStep::Enter(phase, change) => {
            change.apply(&mut next);
            next.enter(phase);
            let transition = Transition {
                from: state.phase,
                to: phase,
            };
            (next, Some(transition))
        }
    }
}

/// Cruise altitude the aircraft can actually reach.
pub fn cruise_altitude(profile: &PerformanceProfile, config: &DynamicsConfig) -> f64 {
    config.cruise_altitude.min(profile.max_altitude)
}

fn burn(state: &mut FlightState, rate: f64, config: &DynamicsConfig) {
    state.fuel -= rate * state.throttle + config.idle_fuel_burn;
}

fn fly_along_track(state: &mut FlightState) {
    state.distance_remaining -= state.speed / SECONDS_PER_HOUR;
}

fn ground(state: &mut FlightState, config: &DynamicsConfig) -> PhaseStep {
    let rolling = state.speed > 0.0;
    if rolling {
        state.speed = (state.speed - config.ground_deceleration).max(0.0);
    }

    // Engines are idle unless parked at zero throttle
    if rolling || state.throttle > 0.0 {
        burn(state, config.ground_fuel_burn, config);
    }

    // Leaving the ground needs a takeoff clearance
    PhaseStep::Stay
}

fn takeoff(state: &mut FlightState, config: &DynamicsConfig) -> PhaseStep {
    state.speed += config.takeoff_acceleration * state.throttle;
    burn(state, config.takeoff_fuel_burn, config);

    if state.speed > config.liftoff_speed {
        PhaseStep::Enter(
            Phase::Climb,
            ConfigChange {
                gear: Some(Gear::Up),
                altitude_step: config.liftoff_altitude_step,
                ..Default::default()
            },
        )
    } else {
        PhaseStep::Stay
    }
}

fn climb(
    state: &mut FlightState,
    profile: &PerformanceProfile,
    config: &DynamicsConfig,
) -> PhaseStep {
    state.speed += config.climb_acceleration * state.throttle - config.climb_drag;
    state.altitude += state.speed * config.climb_rate_factor;
    burn(state, config.climb_fuel_burn, config);
    fly_along_track(state);

    if state.altitude >= cruise_altitude(profile, config) {
        PhaseStep::Enter(
            Phase::Cruise,
            ConfigChange {
                flaps: Some(0),
                ..Default::default()
            },
        )
    } else {
        PhaseStep::Stay
    }
}

fn cruise(
    state: &mut FlightState,
    profile: &PerformanceProfile,
    config: &DynamicsConfig,
) -> PhaseStep {
    state.speed = relax(
        state.speed,
        state.throttle * config.cruise_speed_gain,
        config.cruise_speed_response,
    );
    state.altitude = relax(
        state.altitude,
        cruise_altitude(profile, config),
        config.cruise_altitude_response,
    );
    burn(state, config.cruise_fuel_burn, config);
    fly_along_track(state);

    if state.distance_remaining <= config.descent_distance {
        PhaseStep::Enter(
            Phase::Descent,
            ConfigChange {
                flaps: Some(config.descent_flaps),
                ..Default::default()
            },
        )
    } else {
        PhaseStep::Stay
    }
}

fn descent(state: &mut FlightState, config: &DynamicsConfig) -> PhaseStep {
    state.speed = relax(
        state.speed,
        state.throttle * config.descent_speed_gain,
        config.descent_speed_response,
    );
    state.altitude -= state.speed * config.descent_rate_factor;
    burn(state, config.descent_fuel_burn, config);
    fly_along_track(state);

    if state.altitude <= config.approach_altitude {
        PhaseStep::Enter(
            Phase::Landing,
            ConfigChange {
                flaps: Some(config.approach_flaps),
                gear: Some(Gear::Down),
                ..Default::default()
            },
        )
    } else {
        PhaseStep::Stay
    }
}

fn landing(
    state: &mut FlightState,
    profile: &PerformanceProfile,
    config: &DynamicsConfig,
) -> PhaseStep {
    let approach_speed = profile.stall_speed * config.approach_speed_factor;
    if state.speed > approach_speed {
        state.speed = (state.speed - config.landing_deceleration).max(approach_speed);
    }
    state.altitude -= state.speed * config.landing_rate_factor;
    burn(state, config.landing_fuel_burn, config);
    fly_along_track(state);

    // Touchdown
    if state.altitude <= 0.0 {
        state.altitude = 0.0;
        state.flaps = 0;
    }
    PhaseStep::Stay
}
