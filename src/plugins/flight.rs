use bevy::prelude::*;

use crate::components::{FlightState, PerformanceProfile};
use crate::plugins::{
    EnvelopeWarning, EnvironmentPlugin, FlightTerminated, LandingClearanceRequired, PhaseChanged,
};
use crate::resources::{
    flight_in_progress, AirportTable, ControlQueue, Environment, FlightPlan, FlightSession,
    FlightSnapshot, SimulationConfig,
};
use crate::systems::{
    air_data_system, dynamics_system, envelope_system, initialize_with_profile, input_system,
    instruments_system, navigation_system, spawn_aircraft, steering_system, termination_system,
    weather_system,
};
use crate::utils::SimError;

/// Stages of one tick, run in declaration order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Environment,
    Dynamics,
    AirData,
    Navigation,
    Envelope,
    Instruments,
    Termination,
}

/// Runs one flight between two airports on the fixed timestep.
pub struct FlightPlugin {
    config: SimulationConfig,
    airports: AirportTable,
    state: FlightState,
    profile: PerformanceProfile,
    plan: FlightPlan,
}

impl FlightPlugin {
    /// Validates the configuration and initializes the flight against the default airports.
    ///
    /// # Returns
    /// The plugin, or the initialization error that prevents the session from starting.
    pub fn try_new(config: SimulationConfig) -> Result<Self, SimError> {
        Self::with_airports(config, AirportTable::default())
    }

    pub fn with_airports(config: SimulationConfig, airports: AirportTable) -> Result<Self, SimError> {
        config.validate()?;
        let profile = PerformanceProfile::new(config.flight.profile_source())?;
        let (state, profile, plan) = initialize_with_profile(
            profile,
            &airports,
            &config.flight.departure,
            &config.flight.destination,
        )?;

        Ok(Self {
            config,
            airports,
            state,
            profile,
            plan,
        })
    }

    pub fn initial_state(&self) -> &FlightState {
        &self.state
    }

    pub fn profile(&self) -> &PerformanceProfile {
        &self.profile
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EnvironmentPlugin>() {
            app.add_plugins(EnvironmentPlugin::with_config(
                self.config.weather.clone(),
                self.config.seed,
            ));
        }

        let environment = Environment::from_config(&self.config.weather);

        app.insert_resource(self.config.clone())
            .insert_resource(self.config.dynamics.clone())
            .insert_resource(self.airports.clone())
            .insert_resource(self.plan)
            .insert_resource(FlightSession::default())
            .insert_resource(FlightSnapshot {
                tick: 0,
                state: self.state,
                environment,
            })
            .init_resource::<ControlQueue>()
            .insert_resource(Time::<Fixed>::from_seconds(self.config.tick_interval))
            .add_event::<PhaseChanged>()
            .add_event::<EnvelopeWarning>()
            .add_event::<LandingClearanceRequired>()
            .add_event::<FlightTerminated>()
            .configure_sets(
                FixedUpdate,
                (
                    FlightSet::Input,
                    FlightSet::Environment,
                    FlightSet::Dynamics,
                    FlightSet::AirData,
                    FlightSet::Navigation,
                    FlightSet::Envelope,
                    FlightSet::Instruments,
                    FlightSet::Termination,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                spawn_aircraft(self.state, self.profile.clone()),
            )
            .add_systems(
                FixedUpdate,
                (
                    input_system.in_set(FlightSet::Input),
                    weather_system.in_set(FlightSet::Environment),
                    (dynamics_system, steering_system)
                        .chain()
                        .in_set(FlightSet::Dynamics),
                    air_data_system.in_set(FlightSet::AirData),
                    navigation_system.in_set(FlightSet::Navigation),
                    envelope_system.in_set(FlightSet::Envelope),
                    instruments_system.in_set(FlightSet::Instruments),
                    termination_system.in_set(FlightSet::Termination),
                )
                    .run_if(flight_in_progress),
            );
    }
}
