//! Core traits for state machines.

use crate::{Action, Event};

/// A state machine that processes events.
///
/// All simulation logic is implemented as state machines that are:
///
/// - **Synchronous**: No async, no `.await`
/// - **Deterministic**: Same state + event = same actions
/// - **Pure-ish**: Mutates self, but performs no I/O
///
/// Timer management is expressed through the returned actions; the hosting
/// runner executes them. Ticks are serialized per instance, so any state a
/// reader observes after `handle` returns reflects the tick's complete
/// effect.
pub trait StateMachine {
    /// Process an event, returning actions to perform.
    fn handle(&mut self, event: Event) -> Vec<Action>;
}
