//! Timer scheduling abstraction.
//!
//! The state machines emit `Action::SetTimer` and `Action::CancelTimer`.
//! This trait abstracts the runtime side:
//! - Production: `TimerManager` spawns tokio interval tasks
//! - Simulation: inserts into a deterministic deadline queue

use crate::Event;
use std::time::Duration;

/// Timer identification for periodic ticks.
///
/// Each component owns exactly one timer; setting an id that is already
/// armed replaces its period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerId {
    /// Stage-advance tick for the encapsulation pipeline.
    PipelineTick,
    /// Progress tick for the topology trace.
    TraceTick,
}

impl TimerId {
    /// The event a firing of this timer delivers.
    pub fn event(&self) -> Event {
        match self {
            TimerId::PipelineTick => Event::PipelineTick,
            TimerId::TraceTick => Event::TraceTick,
        }
    }
}

/// Abstraction for scheduling and cancelling periodic timers.
///
/// `set_timer` arms a repeating tick: the first firing happens one full
/// `period` after the call, then every `period` thereafter until cancelled.
/// Cancelling an id that is not armed is a no-op.
pub trait TimerScheduler {
    fn set_timer(&mut self, id: TimerId, period: Duration);
    fn cancel_timer(&mut self, id: TimerId);
}
