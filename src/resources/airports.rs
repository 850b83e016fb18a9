use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    /// IATA code, e.g. "CMB".
    pub code: String,
    /// Latitude (deg, north positive).
    pub latitude: f64,
    /// Longitude (deg, east positive).
    pub longitude: f64,
    /// Field elevation (ft).
    pub elevation: f64,
    /// Runway length (ft).
    pub runway_length: f64,
    /// Magnetic heading of the active runway (deg).
    pub runway_heading: f64,
    pub has_ils: bool,
}

impl Airport {
    pub fn new(
        name: &str,
        code: &str,
        (latitude, longitude): (f64, f64),
        elevation: f64,
        runway_length: f64,
        runway_heading: f64,
        has_ils: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            latitude,
            longitude,
            elevation,
            runway_length,
            runway_heading,
            has_ils,
        }
    }
}

/// Read-only table of airports available for route selection.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportTable {
    airports: Vec<Airport>,
}

impl Default for AirportTable {
    fn default() -> Self {
        Self::new(vec![
            Airport::new("Colombo", "CMB", (6.9271, 79.8612), 7.0, 11000.0, 40.0, true),
            Airport::new("Delhi", "DEL", (28.6139, 77.2090), 777.0, 12500.0, 280.0, true),
            Airport::new("Mumbai", "BOM", (19.0887, 72.8679), 37.0, 11400.0, 90.0, true),
            Airport::new("Bangalore", "BLR", (13.1979, 77.7063), 3016.0, 12000.0, 90.0, true),
            Airport::new("Chennai", "MAA", (12.9900, 80.1634), 52.0, 12000.0, 70.0, true),
            Airport::new("Kathmandu", "KTM", (27.6966, 85.3591), 4390.0, 10000.0, 20.0, false),
            Airport::new("Dhaka", "DAC", (23.8433, 90.4082), 30.0, 10500.0, 140.0, true),
            Airport::new("Singapore", "SIN", (1.3644, 103.9915), 22.0, 13000.0, 20.0, true),
            Airport::new("Kuala Lumpur", "KUL", (2.7456, 101.7071), 69.0, 12400.0, 140.0, true),
            Airport::new("Bangkok", "BKK", (13.9125, 100.6068), 5.0, 12000.0, 190.0, true),
        ])
    }
}

impl AirportTable {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Case-insensitive lookup by code, returning the index and entry.
    pub fn find(&self, code: &str) -> Option<(usize, &Airport)> {
        self.airports
            .iter()
            .enumerate()
            .find(|(_, airport)| airport.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn get(&self, index: usize) -> Option<&Airport> {
        self.airports.get(index)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }
}
