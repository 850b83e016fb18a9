pub mod config;
pub mod controls;
pub mod phase;
pub mod state;

pub use config::{AircraftType, PerformanceProfile, ProfileSource};
pub use controls::{
    sanitize_bank_angle, sanitize_flaps, sanitize_throttle, ClearanceRequest, ControlCommand,
    ControlInputs, DEFAULT_BANK_ANGLE, DEFAULT_FLAPS, DEFAULT_THROTTLE,
};
pub use phase::Phase;
pub use state::{Aircraft, FlightState, Gear};
