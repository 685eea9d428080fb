//! Trace progress state machine.

use crate::telemetry::Telemetry;
use otnsim_core::{Action, TimerId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::debug;

/// Fixed tick period of the trace animation.
pub const TRACE_TICK_PERIOD: Duration = Duration::from_millis(50);

/// Progress gained per tick.
pub const PROGRESS_PER_TICK: f64 = 0.4;

/// Progress value at which a trace run completes.
pub const COMPLETE_PROGRESS: f64 = 100.0;

/// The topology trace progress controller.
///
/// Progress is derived from an integer tick count rather than accumulated
/// as a float, so 250 ticks land exactly on the completion value instead
/// of drifting past or short of it.
#[derive(Debug)]
pub struct TraceState {
    ticks: u32,
    running: bool,
    telemetry: Telemetry,
    rng: ChaCha8Rng,
}

impl TraceState {
    /// Create an idle trace. The seed fixes the telemetry jitter.
    pub fn new(seed: u64) -> Self {
        Self {
            ticks: 0,
            running: false,
            telemetry: Telemetry::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Begin a trace run from zero progress.
    pub fn start_trace(&mut self) -> Vec<Action> {
        self.ticks = 0;
        self.running = true;
        self.telemetry = Telemetry::default();
        debug!("trace started");
        vec![Action::SetTimer {
            id: TimerId::TraceTick,
            period: TRACE_TICK_PERIOD,
        }]
    }

    /// One timer tick: advance progress, resample telemetry.
    ///
    /// Reaching the completion value halts the run, wraps progress back to
    /// zero, and releases the timer.
    pub fn on_tick(&mut self) -> Vec<Action> {
        if !self.running {
            return Vec::new();
        }
        self.ticks += 1;
        if self.progress() >= COMPLETE_PROGRESS {
            self.running = false;
            self.ticks = 0;
            debug!("trace complete");
            return vec![Action::CancelTimer {
                id: TimerId::TraceTick,
            }];
        }
        self.telemetry = Telemetry::sample(self.progress(), &mut self.rng);
        Vec::new()
    }

    /// Path completion in [0, 100).
    pub fn progress(&self) -> f64 {
        f64::from(self.ticks) * PROGRESS_PER_TICK
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The most recently sampled link telemetry.
    pub fn telemetry(&self) -> Telemetry {
        self.telemetry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_arms_trace_timer() {
        let mut trace = TraceState::new(1);
        let actions = trace.start_trace();
        assert_eq!(
            actions,
            vec![Action::SetTimer {
                id: TimerId::TraceTick,
                period: Duration::from_millis(50),
            }]
        );
        assert!(trace.is_running());
        assert_eq!(trace.progress(), 0.0);
    }

    #[test]
    fn test_progress_advances_per_tick() {
        let mut trace = TraceState::new(1);
        trace.start_trace();
        trace.on_tick();
        assert_eq!(trace.progress(), 0.4);
        trace.on_tick();
        assert_eq!(trace.progress(), 0.8);
    }

    #[test]
    fn test_run_completes_after_250_ticks() {
        let mut trace = TraceState::new(1);
        trace.start_trace();
        let mut ticks = 0;
        while trace.is_running() {
            let actions = trace.on_tick();
            ticks += 1;
            assert!(ticks <= 250, "trace failed to complete");
            if !trace.is_running() {
                assert_eq!(
                    actions,
                    vec![Action::CancelTimer {
                        id: TimerId::TraceTick,
                    }]
                );
            }
        }
        assert_eq!(ticks, 250);
        assert_eq!(trace.progress(), 0.0);
    }

    #[test]
    fn test_tick_ignored_when_idle() {
        let mut trace = TraceState::new(1);
        assert!(trace.on_tick().is_empty());
        assert_eq!(trace.progress(), 0.0);
        assert!(!trace.is_running());
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut trace = TraceState::new(1);
        trace.start_trace();
        for _ in 0..100 {
            trace.on_tick();
        }
        assert!(trace.progress() > 0.0);

        trace.start_trace();
        assert_eq!(trace.progress(), 0.0);
        assert!(trace.is_running());
        assert_eq!(trace.telemetry(), Telemetry::default());
    }
}
