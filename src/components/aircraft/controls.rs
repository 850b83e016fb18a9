use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::FlightState;
use crate::utils::{MAX_BANK_ANGLE, MAX_FLAPS, MAX_THROTTLE, MIN_BANK_ANGLE, MIN_FLAPS, MIN_THROTTLE};

pub const DEFAULT_THROTTLE: f64 = 0.8;
pub const DEFAULT_BANK_ANGLE: f64 = 15.0;
pub const DEFAULT_FLAPS: u8 = 0;

/// Explicit pilot acknowledgments that gate phase changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearanceRequest {
    Takeoff,
    Landing,
    GoAround,
}

/// A single pilot input, as produced by a keyboard, script or network collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlCommand {
    SetThrottle(f64),
    SetBankAngle(f64),
    SetFlaps(i32),
    ToggleGear,
    ToggleAutopilot,
    ToggleTransponder,
    Clearance(ClearanceRequest),
}

/// All pilot inputs collected between two ticks, applied atomically at tick start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlInputs {
    pub throttle: Option<f64>,
    pub bank_angle: Option<f64>,
    pub flaps: Option<i32>,
    pub toggle_gear: bool,
    pub toggle_autopilot: bool,
    pub toggle_transponder: bool,
    /// Clearance requests in arrival order.
    pub clearances: Vec<ClearanceRequest>,
}

impl ControlInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one command in: settings are last-write-wins, toggles cancel in pairs.
    pub fn push(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::SetThrottle(value) => self.throttle = Some(value),
            ControlCommand::SetBankAngle(value) => self.bank_angle = Some(value),
            ControlCommand::SetFlaps(value) => self.flaps = Some(value),
            ControlCommand::ToggleGear => self.toggle_gear ^= true,
            ControlCommand::ToggleAutopilot => self.toggle_autopilot ^= true,
            ControlCommand::ToggleTransponder => self.toggle_transponder ^= true,
            ControlCommand::Clearance(request) => self.clearances.push(request),
        }
    }

    pub fn from_commands<I: IntoIterator<Item = ControlCommand>>(commands: I) -> Self {
        let mut inputs = Self::new();
        for command in commands {
            inputs.push(command);
        }
        inputs
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the control settings into the state. Clearances are handled separately.
    pub fn apply(&self, state: &mut FlightState) {
        if let Some(throttle) = self.throttle {
            state.throttle = sanitize_throttle(throttle);
        }
        if let Some(bank_angle) = self.bank_angle {
            state.bank_angle = sanitize_bank_angle(bank_angle);
        }
        if let Some(flaps) = self.flaps {
            state.flaps = sanitize_flaps(flaps);
        }
        if self.toggle_gear {
            state.gear = state.gear.toggled();
        }
        if self.toggle_autopilot {
            state.autopilot = !state.autopilot;
        }
        if self.toggle_transponder {
            state.transponder = !state.transponder;
        }
    }
}

pub fn sanitize_throttle(value: f64) -> f64 {
    if (MIN_THROTTLE..=MAX_THROTTLE).contains(&value) {
        value
    } else {
        warn!(
            "Throttle {} outside [{}, {}], using {}",
            value, MIN_THROTTLE, MAX_THROTTLE, DEFAULT_THROTTLE
        );
        DEFAULT_THROTTLE
    }
}

pub fn sanitize_bank_angle(value: f64) -> f64 {
    if (MIN_BANK_ANGLE..=MAX_BANK_ANGLE).contains(&value) {
        value
    } else {
        warn!(
            "Bank angle {} outside [{}, {}] deg, using {}",
            value, MIN_BANK_ANGLE, MAX_BANK_ANGLE, DEFAULT_BANK_ANGLE
        );
        DEFAULT_BANK_ANGLE
    }
}

pub fn sanitize_flaps(value: i32) -> u8 {
    if (MIN_FLAPS..=MAX_FLAPS).contains(&value) {
        value as u8
    } else {
        warn!(
            "Flaps {} outside [{}, {}] deg, using {}",
            value, MIN_FLAPS, MAX_FLAPS, DEFAULT_FLAPS
        );
        DEFAULT_FLAPS
    }
}
