//! Actions returned by the simulation state machines.

use crate::{TimerId, TimerScheduler};
use std::time::Duration;

/// Timer work the runner performs on behalf of a state machine.
///
/// The state machines themselves never touch a clock; entering a running
/// state emits `SetTimer` and every exit path (pause, reset, completion)
/// emits `CancelTimer`, so the timer subscription is released regardless
/// of how a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Arm a periodic timer.
    SetTimer { id: TimerId, period: Duration },

    /// Disarm a timer. No-op if the timer is not armed.
    CancelTimer { id: TimerId },
}

impl Action {
    /// Get a human-readable name for this action type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::SetTimer { .. } => "SetTimer",
            Action::CancelTimer { .. } => "CancelTimer",
        }
    }

    /// Execute this action against a timer scheduler.
    pub fn apply(self, timers: &mut impl TimerScheduler) {
        match self {
            Action::SetTimer { id, period } => timers.set_timer(id, period),
            Action::CancelTimer { id } => timers.cancel_timer(id),
        }
    }
}
