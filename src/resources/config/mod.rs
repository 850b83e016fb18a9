pub mod dynamics;
pub mod simulation;
pub mod weather;

pub use dynamics::DynamicsConfig;
pub use simulation::{FlightPlanConfig, SimulationConfig};
pub use weather::WeatherConfig;
