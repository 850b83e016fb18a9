mod environment;
mod events;
mod flight;

pub use environment::EnvironmentPlugin;
pub use events::{EnvelopeWarning, FlightTerminated, LandingClearanceRequired, PhaseChanged};
pub use flight::{FlightPlugin, FlightSet};
