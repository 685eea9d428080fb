//! Virtual periodic timers ordered by deadline.

use otnsim_core::{TimerId, TimerScheduler};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    next_fire: Duration,
    period: Duration,
}

/// A deadline queue over virtual time.
///
/// Arming an id that is already armed replaces its period and restarts
/// its deadline from the current virtual instant, matching the scheduler
/// contract.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    armed: BTreeMap<TimerId, ArmedTimer>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual instant.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether any timer is still armed.
    pub fn is_idle(&self) -> bool {
        self.armed.is_empty()
    }

    /// Advance virtual time to the earliest deadline and fire that timer.
    ///
    /// Ties are broken by timer id order, so interleavings are stable.
    /// The fired timer is rescheduled one period later; periodic timers
    /// keep firing until cancelled.
    pub fn fire_next(&mut self) -> Option<TimerId> {
        let mut next: Option<(Duration, TimerId)> = None;
        for (&id, timer) in &self.armed {
            let candidate = (timer.next_fire, id);
            if next.map_or(true, |current| candidate < current) {
                next = Some(candidate);
            }
        }
        let (deadline, id) = next?;

        self.now = deadline;
        let timer = self.armed.get_mut(&id).expect("timer selected above");
        timer.next_fire = deadline + timer.period;
        Some(id)
    }
}

impl TimerScheduler for VirtualTimers {
    fn set_timer(&mut self, id: TimerId, period: Duration) {
        self.armed.insert(
            id,
            ArmedTimer {
                next_fire: self.now + period,
                period,
            },
        );
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.armed.remove(&id);
    }
}
