//! Deterministic simulation runner.
//!
//! This crate provides a fully deterministic environment for driving the
//! simulator without wall-clock timers. Timer actions land in a virtual
//! deadline queue; [`SimulationRunner::step`] pops the earliest deadline,
//! advances virtual time to it, and feeds the corresponding event back
//! into the state machine. Given the same seed and the same operation
//! sequence, every run is identical.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   SimulationRunner                      │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  VirtualTimers (deadline per armed TimerId)        │ │
//! │  │  Ordered by: next fire time, then timer id         │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │ Event                       │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  Simulator (pipeline + trace state machines)       │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  Actions → arm / disarm virtual timers             │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod runner;
mod timers;

pub use runner::SimulationRunner;
pub use timers::VirtualTimers;
