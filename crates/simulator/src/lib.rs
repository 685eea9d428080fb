//! Combined simulator state machine.
//!
//! This crate composes the encapsulation pipeline and the topology trace
//! into a single [`Simulator`] that a rendering layer talks to. The two
//! components are independent: each owns its transient run state and its
//! own timer, and a tick for one never touches the other.

mod state;
mod view;

pub use state::Simulator;
pub use view::{PipelineView, TraceView};
