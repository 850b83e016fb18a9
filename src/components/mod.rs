pub mod aircraft;

pub use aircraft::{
    sanitize_bank_angle, sanitize_flaps, sanitize_throttle, Aircraft, AircraftType,
    ClearanceRequest, ControlCommand, ControlInputs, FlightState, Gear, PerformanceProfile, Phase,
    ProfileSource, DEFAULT_BANK_ANGLE, DEFAULT_FLAPS, DEFAULT_THROTTLE,
};
