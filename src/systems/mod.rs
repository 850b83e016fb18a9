mod air_data;
mod dynamics;
mod envelope;
mod input;
mod instruments;
mod navigation;
mod startup;
mod termination;
mod tick;
mod weather;

pub use air_data::{air_data_system, apply_wind, density_altitude, load_factor, AirData};
pub use dynamics::{
    advance, cruise_altitude, dynamics_system, go_around, request_landing_clearance,
    request_takeoff_clearance, Clearance, Transition,
};
pub use envelope::{clamp, envelope_system, EnvelopeWarning};
pub use input::{apply_controls, input_system};
pub use instruments::{derive, instruments_system, update_instruments};
pub use navigation::{
    coordinated_turn_rate, great_circle_distance_nm, initial_bearing, navigate,
    navigation_system, steer, steering_system, turn_radius_nm, NavFix,
};
pub use startup::{initialize, initialize_with_profile, spawn_aircraft, FUEL_PER_NM, RESERVE_FUEL};
pub use termination::{check_termination, landing_clearance_required, termination_system};
pub use tick::{tick, FlightContext, TickResult};
pub use weather::weather_system;
