//! Core types for the OTN simulation.
//!
//! This crate defines the domain vocabulary shared by every other crate:
//! client signal and wrapper-level identifiers, the simulation
//! configuration, error-counter bookkeeping, and the static optical
//! topology (nodes, fiber links, and the designated trace path).
//!
//! Nothing here performs real G.709 framing or Reed-Solomon math; these
//! types name the concepts the simulation animates.

mod config;
mod identifiers;
mod stats;
mod topology;

pub use config::{SimulationConfig, TributarySignal, DEFAULT_SIMULATION_SPEED, MAX_TRIBUTARIES};
pub use identifiers::{NodeId, OduLevel, SignalType};
pub use stats::ErrorStats;
pub use topology::{
    FiberLink, NodeKind, Position, TimelineStep, TopologyError, TopologyGraph, TopologyNode,
    TraceStepId,
};
