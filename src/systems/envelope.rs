use bevy::prelude::*;
use std::fmt;

use crate::components::{Aircraft, FlightState, PerformanceProfile};
use crate::utils::{HIGH_G_THRESHOLD, MIN_ALTITUDE};

/// Non-fatal envelope exceedance, reported after the state has been corrected.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeWarning {
    Overspeed { speed: f64, vne: f64 },
    Stall { speed: f64, stall_speed: f64 },
    Ceiling { altitude: f64, max_altitude: f64 },
    BelowGround { altitude: f64 },
    HighG { g_force: f64 },
}

impl fmt::Display for EnvelopeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeWarning::Overspeed { speed, vne } => {
                write!(f, "Exceeding VNE: {:.0} kt > {:.0} kt", speed, vne)
            }
            EnvelopeWarning::Stall { speed, stall_speed } => {
                write!(f, "Below stall speed: {:.0} kt < {:.0} kt", speed, stall_speed)
            }
            EnvelopeWarning::Ceiling {
                altitude,
                max_altitude,
            } => write!(
                f,
                "Exceeding maximum altitude: {:.0} ft > {:.0} ft",
                altitude, max_altitude
            ),
            EnvelopeWarning::BelowGround { altitude } => {
                write!(f, "Below minimum altitude: {:.0} ft", altitude)
            }
            EnvelopeWarning::HighG { g_force } => write!(f, "High G-force: {:.2} G", g_force),
        }
    }
}

/// Clamps the state back into the aircraft's envelope.
///
/// Every check runs in the same pass. The stall check is skipped in the phases where
/// low speed is expected, and load factor is only reported since it is derived.
/// Clamping an already-clamped state changes nothing.
pub fn clamp(state: &FlightState, profile: &PerformanceProfile) -> (FlightState, Vec<EnvelopeWarning>) {
    let mut next = *state;
    let mut warnings = Vec::new();

    if next.speed > profile.vne {
        warnings.push(EnvelopeWarning::Overspeed {
            speed: next.speed,
            vne: profile.vne,
        });
        next.speed = profile.vne;
    }
    if next.speed < profile.stall_speed && !next.phase.allows_low_speed() {
        warnings.push(EnvelopeWarning::Stall {
            speed: next.speed,
            stall_speed: profile.stall_speed,
        });
        next.speed = profile.stall_speed;
    }
    if next.altitude > profile.max_altitude {
        warnings.push(EnvelopeWarning::Ceiling {
            altitude: next.altitude,
            max_altitude: profile.max_altitude,
        });
        next.altitude = profile.max_altitude;
    }
    if next.altitude < MIN_ALTITUDE {
        warnings.push(EnvelopeWarning::BelowGround {
            altitude: next.altitude,
        });
        next.altitude = MIN_ALTITUDE;
    }
    if next.g_force > HIGH_G_THRESHOLD {
        warnings.push(EnvelopeWarning::HighG {
            g_force: next.g_force,
        });
    }

    next.speed = next.speed.max(0.0);
    next.fuel = next.fuel.max(0.0);

    (next, warnings)
}

pub fn envelope_system(
    mut query: Query<(&mut FlightState, &PerformanceProfile), With<Aircraft>>,
    mut warning_events: EventWriter<EnvelopeWarning>,
) {
    for (mut state, profile) in query.iter_mut() {
        let (next, warnings) = clamp(&state, profile);
        *state = next;

        for warning in warnings {
            warn!("{}", warning);
            warning_events.send(warning);
        }
    }
}
