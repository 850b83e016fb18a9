mod performance;

pub use performance::{AircraftType, PerformanceProfile, ProfileSource};
