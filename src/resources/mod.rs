mod airports;
pub mod config;
mod controls;
mod environment;
mod session;

pub use airports::{Airport, AirportTable};
pub use config::{DynamicsConfig, FlightPlanConfig, SimulationConfig, WeatherConfig};
pub use controls::{ControlQueue, ControlSender};
pub use environment::{standard_pressure, Environment, Precipitation, WeatherRng};
pub use session::{flight_in_progress, FlightOutcome, FlightPlan, FlightSession, FlightSnapshot};
