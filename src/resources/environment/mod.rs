mod environment;

pub use environment::{standard_pressure, Environment, Precipitation, WeatherRng};
