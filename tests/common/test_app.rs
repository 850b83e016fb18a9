use bevy::{ecs::event::Events, prelude::*};
use apm::{
    components::{AircraftType, ControlCommand, FlightState, PerformanceProfile},
    plugins::FlightPlugin,
    resources::{
        ControlQueue, DynamicsConfig, FlightOutcome, FlightSession, FlightSnapshot,
        SimulationConfig, WeatherConfig,
    },
    utils::SimError,
};

// Builder for creating a test application around a single flight
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let mut config = SimulationConfig::default();
        config.flight.aircraft = AircraftType::Boeing737;
        config.flight.departure = "MAA".to_string();
        config.flight.destination = "BLR".to_string();
        Self { config }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, aircraft: AircraftType, departure: &str, destination: &str) -> Self {
        self.config.flight.aircraft = aircraft;
        self.config.flight.departure = departure.to_string();
        self.config.flight.destination = destination.to_string();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_dynamics(mut self, dynamics: DynamicsConfig) -> Self {
        self.config.dynamics = dynamics;
        self
    }

    pub fn with_weather(mut self, weather: WeatherConfig) -> Self {
        self.config.weather = weather;
        self
    }

    pub fn try_build(self) -> Result<TestApp, SimError> {
        let flight = FlightPlugin::try_new(self.config)?;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins).add_plugins(flight);
        app.finish();
        app.cleanup();

        // Run an initial update so Startup spawns the aircraft
        app.update();

        Ok(TestApp { app })
    }

    pub fn build(self) -> TestApp {
        self.try_build().expect("flight should initialize")
    }
}

/// Main test application wrapper. Ticks are stepped explicitly, independent of wall time.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Ticks until the flight ends or `max_ticks` have run.
    pub fn run_until_terminated(&mut self, max_ticks: usize) -> Option<FlightOutcome> {
        for _ in 0..max_ticks {
            if let Some(outcome) = self.session().outcome {
                return Some(outcome);
            }
            self.tick();
        }
        self.session().outcome
    }

    pub fn send(&self, command: ControlCommand) {
        self.app.world().resource::<ControlQueue>().send(command);
    }

    pub fn state(&mut self) -> FlightState {
        *self
            .query_single::<FlightState>()
            .expect("aircraft should be spawned")
    }

    pub fn profile(&mut self) -> PerformanceProfile {
        self.query_single::<PerformanceProfile>()
            .expect("aircraft should be spawned")
            .clone()
    }

    pub fn set_state(&mut self, state: FlightState) {
        *self
            .query_single_mut::<FlightState>()
            .expect("aircraft should be spawned") = state;
    }

    pub fn session(&self) -> &FlightSession {
        self.app.world().resource::<FlightSession>()
    }

    pub fn snapshot(&self) -> &FlightSnapshot {
        self.app.world().resource::<FlightSnapshot>()
    }

    /// Takes every event of type `E` sent since the last call.
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
