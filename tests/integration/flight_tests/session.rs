use apm::{
    components::{AircraftType, PerformanceProfile, Phase},
    plugins::{FlightPlugin, FlightTerminated},
    resources::{Environment, FlightOutcome, SimulationConfig, WeatherConfig},
    utils::SimError,
};
use pretty_assertions::assert_eq;
use std::io::Write;

use crate::common::{cruising_state, takeoff_clearance, TestAppBuilder};

#[test]
fn test_initialization_is_deterministic() {
    let mut first = TestAppBuilder::new()
        .with_route(AircraftType::AirbusA320, "CMB", "DEL")
        .with_seed(1)
        .build();
    let mut second = TestAppBuilder::new()
        .with_route(AircraftType::AirbusA320, "CMB", "DEL")
        .with_seed(2)
        .build();

    assert_eq!(first.state(), second.state());
    assert_eq!(first.profile(), second.profile());
    assert_eq!(first.state().phase, Phase::Ground);
}

#[test]
fn test_seeded_sessions_replay() {
    let run = |seed| {
        let mut app = TestAppBuilder::new().with_seed(seed).build();
        app.send(takeoff_clearance());
        app.run_ticks(300);
        app.snapshot().clone()
    };

    let a = run(42);
    let b = run(42);
    assert_eq!(a, b);
    assert_eq!(a.tick, 300);
    assert_ne!(a.environment, Environment::from_config(&WeatherConfig::default()));
}

#[test]
fn test_invalid_initialization_rejected() {
    let same = TestAppBuilder::new()
        .with_route(AircraftType::Boeing737, "DEL", "del")
        .try_build();
    assert!(matches!(same, Err(SimError::SameAirport(_))));

    let unknown = TestAppBuilder::new()
        .with_route(AircraftType::Boeing737, "DEL", "LHR")
        .try_build();
    assert!(matches!(unknown, Err(SimError::UnknownAirport(code)) if code == "LHR"));

    let mut config = SimulationConfig::default();
    config.tick_interval = -1.0;
    assert!(matches!(
        FlightPlugin::try_new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_fuel_exhaustion_ends_session() {
    for phase in [Phase::Ground, Phase::Cruise] {
        let mut app = TestAppBuilder::new().build();
        let mut state = match phase {
            Phase::Ground => app.state(),
            _ => cruising_state(app.state(), 400.0),
        };
        state.fuel = 0.05;
        state.throttle = 0.8;
        app.set_state(state);

        app.tick();
        let exhausted = app.state();
        assert_eq!(exhausted.fuel, 0.0);
        assert_eq!(app.session().outcome, Some(FlightOutcome::FuelExhausted));

        let terminated = app.drain_events::<FlightTerminated>();
        assert_eq!(terminated.len(), 1);
        assert_eq!(terminated[0].outcome, FlightOutcome::FuelExhausted);

        app.run_ticks(5);
        assert_eq!(app.state(), exhausted);
        assert_eq!(app.session().ticks, 1);
    }
}

#[test]
fn test_session_from_config_file() -> Result<(), SimError> {
    let yaml = r#"
seed: 5
flight:
  aircraft: cessna172
  departure: MAA
  destination: BLR
dynamics:
  cruise_altitude: 9000.0
"#;
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;

    let config = SimulationConfig::from_file(file.path())?;
    let flight = FlightPlugin::try_new(config)?;
    assert_eq!(flight.profile().name, "Cessna 172");
    assert_eq!(flight.initial_state().altitude, 52.0);
    Ok(())
}

#[test]
fn test_session_with_profile_file() -> Result<(), SimError> {
    let tuned = PerformanceProfile {
        name: "Cessna 172 (tuned)".to_string(),
        max_altitude: 12000.0,
        stall_speed: 50.0,
        ..PerformanceProfile::cessna_172()
    };
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_yaml::to_string(&tuned)?.as_bytes())?;

    let mut config = SimulationConfig::default();
    config.flight.aircraft = AircraftType::Cessna172;
    config.flight.profile = Some(file.path().to_path_buf());
    let flight = FlightPlugin::try_new(config.clone())?;
    assert_eq!(flight.profile(), &tuned);

    let broken = PerformanceProfile {
        vne: 40.0,
        ..tuned
    };
    let mut broken_file = tempfile::NamedTempFile::new()?;
    broken_file.write_all(serde_yaml::to_string(&broken)?.as_bytes())?;
    config.flight.profile = Some(broken_file.path().to_path_buf());
    assert!(matches!(
        FlightPlugin::try_new(config.clone()),
        Err(SimError::InvalidConfig(_))
    ));

    config.flight.profile = Some("missing_profile.yaml".into());
    assert!(matches!(FlightPlugin::try_new(config), Err(SimError::Io(_))));
    Ok(())
}
