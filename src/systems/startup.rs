use bevy::prelude::*;

use crate::components::{
    Aircraft, AircraftType, FlightState, Gear, PerformanceProfile, Phase, DEFAULT_THROTTLE,
};
use crate::resources::{AirportTable, FlightPlan};
use crate::systems::great_circle_distance_nm;
use crate::utils::{wrap_degrees, SimError};

/// Fuel carried beyond the trip burn estimate (gal).
pub const RESERVE_FUEL: f64 = 500.0;
/// Trip fuel planned per nautical mile (gal/nm).
pub const FUEL_PER_NM: f64 = 3.0;

/// Builds the initial state of a flight parked on the departure runway.
///
/// Initialization is deterministic: the same inputs always produce the same state.
///
/// # Arguments
/// * `aircraft` - Type whose performance profile is used for the whole flight.
/// * `airports` - Table the airport codes are resolved against.
/// * `departure` - Departure airport code.
/// * `destination` - Destination airport code.
///
/// # Returns
/// The initial state, the selected profile and the route, or an error when the codes are
/// unknown or identical.
pub fn initialize(
    aircraft: AircraftType,
    airports: &AirportTable,
    departure: &str,
    destination: &str,
) -> Result<(FlightState, PerformanceProfile, FlightPlan), SimError> {
    initialize_with_profile(
        PerformanceProfile::for_type(aircraft),
        airports,
        departure,
        destination,
    )
}

/// Same as [`initialize`] for a profile that has already been loaded.
pub fn initialize_with_profile(
    profile: PerformanceProfile,
    airports: &AirportTable,
    departure: &str,
    destination: &str,
) -> Result<(FlightState, PerformanceProfile, FlightPlan), SimError> {
    let (departure_index, origin) = airports
        .find(departure)
        .ok_or_else(|| SimError::UnknownAirport(departure.to_string()))?;
    let (destination_index, target) = airports
        .find(destination)
        .ok_or_else(|| SimError::UnknownAirport(destination.to_string()))?;

    if departure_index == destination_index {
        return Err(SimError::SameAirport(origin.code.clone()));
    }

    let distance = great_circle_distance_nm(
        (origin.latitude, origin.longitude),
        (target.latitude, target.longitude),
    );
    let fuel = distance * FUEL_PER_NM + RESERVE_FUEL;
    if fuel > profile.max_fuel {
        warn!(
            "Planned fuel {:.0} gal exceeds {} capacity of {:.0} gal",
            fuel, profile.name, profile.max_fuel
        );
    }

    let state = FlightState {
        altitude: origin.elevation,
        prev_altitude: origin.elevation,
        speed: 0.0,
        fuel,
        throttle: DEFAULT_THROTTLE,
        heading: wrap_degrees(origin.runway_heading),
        bank_angle: 0.0,
        distance_remaining: distance,
        latitude: origin.latitude,
        longitude: origin.longitude,
        density_altitude: origin.elevation,
        flaps: 0,
        gear: Gear::Down,
        autopilot: false,
        transponder: true,
        cleared_to_land: false,
        phase: Phase::Ground,
        ..Default::default()
    };

    info!(
        "{} from {} to {}: {:.0} nm, {:.0} gal",
        profile.name, origin.code, target.code, distance, fuel
    );

    Ok((
        state,
        profile,
        FlightPlan {
            departure: departure_index,
            destination: destination_index,
        },
    ))
}

/// Startup system that spawns the aircraft entity with its initial state.
pub fn spawn_aircraft(
    state: FlightState,
    profile: PerformanceProfile,
) -> impl FnMut(Commands) + Send + Sync + 'static {
    move |mut commands: Commands| {
        commands.spawn((Aircraft, state, profile.clone()));
    }
}
