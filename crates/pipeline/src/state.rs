//! Pipeline controller state machine.

use crate::stages::{stage_sequence, PipelineStage};
use otnsim_core::{Action, TimerId};
use otnsim_types::{ErrorStats, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::debug;

/// Bits accrued per tick while transmitting.
pub const TRANSMISSION_BITS_PER_TICK: u64 = 1_000_000;

/// Bits accrued per tick in any other active processing stage.
pub const PROCESSING_BITS_PER_TICK: u64 = 100_000;

/// Kind of error burst to inject into the transmitted signal.
///
/// Modeled on the RS(255,239) guarantee of correcting up to 8 errored
/// bytes per block: a `Burst` draws 3-7 bytes, so injected errors are
/// always within the correctable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorInjection {
    /// One errored byte.
    Single,
    /// A burst of 3-7 errored bytes, drawn uniformly.
    Burst,
}

/// The encapsulation pipeline controller.
///
/// Owns the current stage, the running flag, and the error counters.
/// Advancement happens only through [`PipelineState::on_tick`], driven by
/// the `PipelineTick` timer this controller arms on `start`.
#[derive(Debug)]
pub struct PipelineState {
    stages: Vec<PipelineStage>,
    current: PipelineStage,
    running: bool,
    stats: ErrorStats,
    tick_period: Duration,
    enable_fec: bool,
    rng: ChaCha8Rng,
}

impl PipelineState {
    /// Create an idle controller from the host-validated config.
    ///
    /// The seed fixes the burst-size draws, so a given seed replays the
    /// same injection amounts.
    pub fn new(config: &SimulationConfig, seed: u64) -> Self {
        Self {
            stages: stage_sequence(config.enable_fec),
            current: PipelineStage::Idle,
            running: false,
            stats: ErrorStats::new(),
            tick_period: config.simulation_speed,
            enable_fec: config.enable_fec,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Begin (or resume) the automatic stage walk.
    ///
    /// Marks the controller running and arms the tick timer; the stage
    /// itself only moves on ticks. Starting at `Transmission` is allowed
    /// and halts again on the next tick.
    pub fn start(&mut self) -> Vec<Action> {
        if self.running {
            return Vec::new();
        }
        self.running = true;
        debug!(period_ms = self.tick_period.as_millis() as u64, "pipeline started");
        vec![Action::SetTimer {
            id: TimerId::PipelineTick,
            period: self.tick_period,
        }]
    }

    /// Stop advancing without touching the stage or the counters.
    pub fn pause(&mut self) -> Vec<Action> {
        self.running = false;
        debug!(stage = self.current.as_str(), "pipeline paused");
        vec![Action::CancelTimer {
            id: TimerId::PipelineTick,
        }]
    }

    /// Return to idle and restore the counters to their initial values.
    pub fn reset(&mut self) -> Vec<Action> {
        self.running = false;
        self.current = PipelineStage::Idle;
        self.stats = ErrorStats::new();
        debug!("pipeline reset");
        vec![Action::CancelTimer {
            id: TimerId::PipelineTick,
        }]
    }

    /// Recompute the stage sequence for a new FEC setting.
    ///
    /// A mid-run change never moves the current stage; it only changes
    /// which transitions the next ticks take.
    pub fn set_enable_fec(&mut self, enabled: bool) {
        if self.enable_fec == enabled {
            return;
        }
        self.enable_fec = enabled;
        self.stages = stage_sequence(enabled);
        debug!(enabled, "fec setting changed");
    }

    /// Change the tick period, re-arming the timer when running.
    pub fn set_speed(&mut self, period: Duration) -> Vec<Action> {
        self.tick_period = period;
        if self.running {
            vec![Action::SetTimer {
                id: TimerId::PipelineTick,
                period,
            }]
        } else {
            Vec::new()
        }
    }

    /// One timer tick: accrue bits for the stage just spent, then advance.
    ///
    /// Reaching (or sitting at) the terminal `Transmission` stage halts
    /// the automatic run and releases the timer. If the current stage was
    /// dropped from the sequence by a mid-run FEC change, advancement
    /// restarts at the sequence head.
    pub fn on_tick(&mut self) -> Vec<Action> {
        if !self.running {
            return Vec::new();
        }

        match self.current {
            PipelineStage::Idle => {}
            PipelineStage::Transmission => self.stats.record_bits(TRANSMISSION_BITS_PER_TICK),
            _ => self.stats.record_bits(PROCESSING_BITS_PER_TICK),
        }

        let position = self.stages.iter().position(|&s| s == self.current);
        self.current = match position {
            Some(i) if i + 1 < self.stages.len() => self.stages[i + 1],
            Some(_) => {
                // Already terminal: stay put and stop auto-advance.
                return self.halt();
            }
            None => self.stages[0],
        };
        debug!(stage = self.current.as_str(), "pipeline advanced");

        if Some(&self.current) == self.stages.last() {
            return self.halt();
        }
        Vec::new()
    }

    fn halt(&mut self) -> Vec<Action> {
        self.running = false;
        debug!(stage = self.current.as_str(), "pipeline run complete");
        vec![Action::CancelTimer {
            id: TimerId::PipelineTick,
        }]
    }

    /// Inject errored bytes into the link.
    ///
    /// Silently ignored while FEC is disabled: an unprotected pipeline has
    /// no correction concept. Injected amounts are always correctable, so
    /// the pre-FEC and corrected counters move together and the post-FEC
    /// counter stays untouched. Callers gate this to the `Transmission`
    /// stage; the controller itself does not.
    pub fn inject_error(&mut self, kind: ErrorInjection) {
        if !self.enable_fec {
            debug!("error injection ignored: FEC disabled");
            return;
        }
        let amount = match kind {
            ErrorInjection::Single => 1,
            ErrorInjection::Burst => self.rng.gen_range(3..=7),
        };
        self.stats.record_corrected(amount);
        debug!(
            amount,
            pre_fec = self.stats.pre_fec_errors,
            "errors injected and corrected"
        );
    }

    pub fn current_stage(&self) -> PipelineStage {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stats(&self) -> &ErrorStats {
        &self.stats
    }

    /// The stage sequence currently in force.
    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn fec_enabled(&self) -> bool {
        self.enable_fec
    }

    /// The frame-map section to highlight for the current stage.
    pub fn active_frame_section(&self) -> Option<&'static str> {
        self.current.frame_section()
    }
}
