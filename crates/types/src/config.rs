//! Simulation configuration.

use crate::{OduLevel, SignalType};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Capacity bound of the simulated wrapper: at most four tributaries.
pub const MAX_TRIBUTARIES: usize = 4;

/// Default milliseconds per pipeline stage tick.
pub const DEFAULT_SIMULATION_SPEED: Duration = Duration::from_millis(1000);

/// One client signal multiplexed into the wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TributarySignal {
    /// Host-assigned identifier, opaque to the core.
    pub id: String,
    pub signal: SignalType,
    /// Display color token, owned by the host's styling layer.
    pub color: String,
}

impl TributarySignal {
    pub fn new(id: &str, signal: SignalType, color: &str) -> Self {
        Self {
            id: id.to_owned(),
            signal,
            color: color.to_owned(),
        }
    }
}

/// Configuration for one encapsulation simulation run.
///
/// The hosting application owns this and validates numeric bounds
/// (`simulation_speed` is offered as 200-3000 ms in 100 ms steps) before
/// passing it in; the core only enforces the tributary non-empty fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Legacy single-signal field, kept so older persisted configs load.
    /// Used as the fallback tributary type when `tributaries` is empty.
    pub client_signal: SignalType,

    /// Client signals multiplexed into the wrapper, 1-4 entries.
    pub tributaries: Vec<TributarySignal>,

    /// Wrapper capacity level.
    pub odu_level: OduLevel,

    /// Whether the FEC stage participates in the pipeline.
    pub enable_fec: bool,

    /// Delay between pipeline stage ticks.
    pub simulation_speed: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            client_signal: SignalType::Ethernet10G,
            tributaries: vec![TributarySignal::new(
                "1",
                SignalType::Ethernet10G,
                "bg-blue-500",
            )],
            odu_level: OduLevel::default(),
            enable_fec: true,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }
    }
}

impl SimulationConfig {
    /// Set the wrapper level.
    pub fn with_odu_level(mut self, level: OduLevel) -> Self {
        self.odu_level = level;
        self
    }

    /// Enable or disable the FEC stage.
    pub fn with_fec(mut self, enabled: bool) -> Self {
        self.enable_fec = enabled;
        self
    }

    /// Set the per-stage tick delay.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.simulation_speed = speed;
        self
    }

    /// Replace the tributary list.
    pub fn with_tributaries(mut self, tributaries: Vec<TributarySignal>) -> Self {
        self.tributaries = tributaries;
        self
    }

    /// The tributaries actually simulated.
    ///
    /// Older persisted configs carry only `client_signal`; an empty list is
    /// substituted with a single default tributary of that type rather than
    /// rejected.
    pub fn effective_tributaries(&self) -> Vec<TributarySignal> {
        if self.tributaries.is_empty() {
            vec![TributarySignal::new("1", self.client_signal, "bg-blue-500")]
        } else {
            self.tributaries.clone()
        }
    }
}
