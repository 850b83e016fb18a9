use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, time::Duration};

use apm::{
    components::{ClearanceRequest, ControlCommand, Phase},
    plugins::{FlightPlugin, FlightTerminated, LandingClearanceRequired, PhaseChanged},
    resources::{ControlQueue, FlightSnapshot, SimulationConfig},
};

/// Ticks between two status lines.
const STATUS_INTERVAL: u64 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    let frame = Duration::from_secs_f64(config.tick_interval.min(1.0 / 60.0));
    let flight = FlightPlugin::try_new(config)?;

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)))
        .add_plugins(LogPlugin::default())
        .add_plugins(flight)
        .add_systems(
            Update,
            (request_takeoff, fly_the_approach, log_status, exit_on_termination),
        )
        .run();

    Ok(())
}

fn request_takeoff(queue: Res<ControlQueue>, mut requested: Local<bool>) {
    if !*requested {
        queue.send(ControlCommand::Clearance(ClearanceRequest::Takeoff));
        *requested = true;
    }
}

/// Engages the autopilot once airborne and accepts every landing prompt.
fn fly_the_approach(
    queue: Res<ControlQueue>,
    mut phase_events: EventReader<PhaseChanged>,
    mut clearance_events: EventReader<LandingClearanceRequired>,
) {
    for event in phase_events.read() {
        if event.to == Phase::Climb && event.from == Phase::Takeoff {
            queue.send(ControlCommand::ToggleAutopilot);
        }
    }
    for _ in clearance_events.read() {
        queue.send(ControlCommand::Clearance(ClearanceRequest::Landing));
    }
}

fn log_status(snapshot: Res<FlightSnapshot>, mut last_logged: Local<u64>) {
    if snapshot.tick >= *last_logged + STATUS_INTERVAL {
        *last_logged = snapshot.tick;
        info!("[{} s] {}", snapshot.tick, snapshot.state);
    }
}

fn exit_on_termination(
    mut terminated: EventReader<FlightTerminated>,
    mut exit: EventWriter<AppExit>,
) {
    if let Some(event) = terminated.read().next() {
        info!("[{} s] {}", event.tick, event.state);
        exit.send(AppExit::Success);
    }
}
