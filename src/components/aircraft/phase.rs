use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete stage of flight. Declaration order is the order of progression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Phase {
    #[default]
    Ground,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Landing,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Ground => "Ground",
            Phase::Takeoff => "Takeoff",
            Phase::Climb => "Climb",
            Phase::Cruise => "Cruise",
            Phase::Descent => "Descent",
            Phase::Landing => "Landing",
        }
    }

    /// Wheels off the runway.
    pub fn is_airborne(&self) -> bool {
        matches!(
            self,
            Phase::Climb | Phase::Cruise | Phase::Descent | Phase::Landing
        )
    }

    /// Phases in which flying below the stall speed is expected.
    pub fn allows_low_speed(&self) -> bool {
        matches!(self, Phase::Ground | Phase::Takeoff | Phase::Landing)
    }

    /// Whether moving from `self` to `next` is a legal progression.
    /// Only the go-around (Landing -> Cruise) may move backwards.
    pub fn can_transition_to(&self, next: Phase) -> bool {
        next >= *self || (*self == Phase::Landing && next == Phase::Cruise)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
