//! Event types for the simulation state machines.

/// All events a simulation component can receive.
///
/// Events are **passive data** - they describe something that happened.
/// The state machine processes events and returns actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Time to advance the encapsulation pipeline one stage.
    PipelineTick,

    /// Time to advance the topology trace by one progress increment.
    TraceTick,
}

impl Event {
    /// Get the event type name for telemetry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::PipelineTick => "PipelineTick",
            Event::TraceTick => "TraceTick",
        }
    }
}
