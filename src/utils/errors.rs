use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Unknown aircraft type: {0}")]
    UnknownAircraftType(String),

    #[error("Unknown airport: {0}")]
    UnknownAirport(String),

    #[error("Departure and destination are the same airport: {0}")]
    SameAirport(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
