//! Tokio-backed timer scheduling.

use otnsim_core::{Event, TimerId, TimerScheduler};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Executes timer actions by spawning one tokio interval task per armed
/// timer id. Each firing sends the timer's event over the channel; the
/// receiving loop feeds it to the state machine.
///
/// Must be used from within a tokio runtime. Dropping the manager aborts
/// every armed task.
#[derive(Debug)]
pub struct TimerManager {
    events: mpsc::UnboundedSender<Event>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TimerManager {
    /// Create a manager sending events into the given channel.
    pub fn new(events: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            events,
            tasks: HashMap::new(),
        }
    }

    /// Create a manager together with the receiving half of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Whether any timer task is still armed.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TimerScheduler for TimerManager {
    fn set_timer(&mut self, id: TimerId, period: Duration) {
        // Re-arming replaces the existing task.
        self.cancel_timer(id);
        debug!(timer = ?id, period_ms = period.as_millis() as u64, "arming timer");

        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            // First fire one full period after arming, not immediately.
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if events.send(id.event()).is_err() {
                    // Receiver gone; nothing left to tick for.
                    break;
                }
            }
        });
        self.tasks.insert(id, handle);
    }

    fn cancel_timer(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            debug!(timer = ?id, "cancelling timer");
            handle.abort();
        }
    }
}

impl Drop for TimerManager {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delivers_periodic_events() {
        let (mut manager, mut events) = TimerManager::channel();
        manager.set_timer(TimerId::TraceTick, Duration::from_millis(50));

        assert_eq!(events.recv().await, Some(Event::TraceTick));
        assert_eq!(events.recv().await, Some(Event::TraceTick));

        manager.cancel_timer(TimerId::TraceTick);
        assert!(manager.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_task() {
        let (mut manager, mut events) = TimerManager::channel();
        manager.set_timer(TimerId::PipelineTick, Duration::from_secs(1000));
        manager.set_timer(TimerId::PipelineTick, Duration::from_millis(10));

        assert_eq!(events.recv().await, Some(Event::PipelineTick));
        assert_eq!(manager.tasks.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_unarmed_is_noop() {
        let (mut manager, _events) = TimerManager::channel();
        manager.cancel_timer(TimerId::PipelineTick);
        assert!(manager.is_idle());
    }
}
