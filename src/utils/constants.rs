pub const GRAVITY: f64 = 32.174; // ft/s^2
pub const FEET_PER_NM: f64 = 6076.0; // ft
pub const KNOTS_TO_FPS: f64 = 1.68781; // (ft/s) per kt
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const EARTH_RADIUS_NM: f64 = 3440.0; // nm
pub const NM_PER_DEGREE_LAT: f64 = 60.0; // nm

// Standard atmosphere
pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 1013.25; // hPa
pub const ISA_LAPSE_RATE: f64 = 0.0065; // K/m
pub const ISA_PRESSURE_EXPONENT: f64 = 5.256;
pub const SEA_LEVEL_SPEED_OF_SOUND: f64 = 661.0; // kt
pub const DENSITY_ALTITUDE_PER_HPA: f64 = 30.0; // ft/hPa

// Control limits
pub const MIN_THROTTLE: f64 = 0.0;
pub const MAX_THROTTLE: f64 = 1.0;
pub const MIN_BANK_ANGLE: f64 = 0.0; // deg
pub const MAX_BANK_ANGLE: f64 = 30.0; // deg
pub const MIN_FLAPS: i32 = 0; // deg
pub const MAX_FLAPS: i32 = 40; // deg

// Envelope
pub const HIGH_G_THRESHOLD: f64 = 2.5; // G
pub const MIN_ALTITUDE: f64 = 0.0; // ft
