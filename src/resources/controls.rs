use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};

use crate::components::{ControlCommand, ControlInputs};

/// Handle for producers outside the schedule to submit pilot commands.
pub type ControlSender = Sender<ControlCommand>;

/// Commands submitted between ticks, drained once at the start of each tick.
#[derive(Resource, Debug, Clone)]
pub struct ControlQueue {
    sender: Sender<ControlCommand>,
    receiver: Receiver<ControlCommand>,
}

impl Default for ControlQueue {
    fn default() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }
}

impl ControlQueue {
    pub fn sender(&self) -> ControlSender {
        self.sender.clone()
    }

    pub fn send(&self, command: ControlCommand) {
        // The queue owns a receiver, so the channel can never be disconnected here
        let _ = self.sender.send(command);
    }

    /// Takes everything queued so far and merges it into one input set.
    pub fn drain(&self) -> ControlInputs {
        ControlInputs::from_commands(self.receiver.try_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ClearanceRequest;
    use std::thread;

    #[test]
    fn test_drain_merges_and_empties() {
        let queue = ControlQueue::default();
        queue.send(ControlCommand::SetThrottle(0.5));
        queue.send(ControlCommand::Clearance(ClearanceRequest::Takeoff));
        queue.send(ControlCommand::SetThrottle(0.7));

        let inputs = queue.drain();
        assert_eq!(inputs.throttle, Some(0.7));
        assert_eq!(inputs.clearances, vec![ClearanceRequest::Takeoff]);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_sender_from_other_thread() {
        let queue = ControlQueue::default();
        let sender = queue.sender();
        thread::spawn(move || {
            sender.send(ControlCommand::ToggleAutopilot).unwrap();
        })
        .join()
        .unwrap();

        assert!(queue.drain().toggle_autopilot);
    }
}
