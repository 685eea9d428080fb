//! Event loop connecting the timer channel to the simulator.

use crate::timer_manager::TimerManager;
use otnsim_core::{Event, StateMachine};
use otnsim_simulator::Simulator;
use tokio::sync::mpsc;
use tracing::trace;

/// Drive the simulator from timer events until it quiesces.
///
/// Each received event is processed to completion (state change plus
/// resulting timer actions) before the next is taken, preserving the
/// serialized-tick guarantee. Returns when every timer has been
/// cancelled (both components halted) or the channel closes.
pub async fn drive(
    simulator: &mut Simulator,
    timers: &mut TimerManager,
    events: &mut mpsc::UnboundedReceiver<Event>,
) {
    if timers.is_idle() {
        return;
    }
    while let Some(event) = events.recv().await {
        trace!(event = event.type_name(), "handling");
        let actions = simulator.handle(event);
        for action in actions {
            action.apply(timers);
        }
        if timers.is_idle() {
            break;
        }
    }
}
