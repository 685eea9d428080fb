//! Runner driving the simulator over virtual time.

use crate::timers::VirtualTimers;
use otnsim_core::{Action, Event, StateMachine};
use otnsim_simulator::Simulator;
use std::time::Duration;
use tracing::trace;

/// Drives a [`Simulator`] with a virtual clock.
///
/// Events fire strictly in deadline order and each is processed to
/// completion (state change plus action execution) before the next, so
/// the serialized-tick ordering guarantee holds by construction.
#[derive(Debug)]
pub struct SimulationRunner {
    simulator: Simulator,
    timers: VirtualTimers,
}

impl SimulationRunner {
    pub fn new(simulator: Simulator) -> Self {
        Self {
            simulator,
            timers: VirtualTimers::new(),
        }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Mutable access for control operations. Pass any returned actions
    /// to [`SimulationRunner::apply`].
    pub fn simulator_mut(&mut self) -> &mut Simulator {
        &mut self.simulator
    }

    /// Execute actions against the virtual timers.
    pub fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            trace!(action = action.type_name(), "applying action");
            action.apply(&mut self.timers);
        }
    }

    /// Elapsed virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Whether any timer is still armed.
    pub fn is_idle(&self) -> bool {
        self.timers.is_idle()
    }

    /// Fire the next due timer, if any, and process its event fully.
    pub fn step(&mut self) -> Option<Event> {
        let id = self.timers.fire_next()?;
        let event = id.event();
        trace!(
            event = event.type_name(),
            now_ms = self.timers.now().as_millis() as u64,
            "firing"
        );
        let actions = self.simulator.handle(event);
        self.apply(actions);
        Some(event)
    }

    /// Step until no timers remain armed, returning the number of events
    /// processed. `max_events` bounds runaway schedules.
    pub fn run_until_idle(&mut self, max_events: usize) -> usize {
        let mut processed = 0;
        while processed < max_events && self.step().is_some() {
            processed += 1;
        }
        processed
    }
}
