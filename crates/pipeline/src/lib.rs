//! Encapsulation pipeline stage controller.
//!
//! Walks a client signal through the digital-wrapper stages (client
//! mapping, path overhead, section overhead, optional FEC, transmission)
//! on a configurable tick, and keeps the error counters the FEC display
//! reads. The walk is cosmetic: stages are named states, not real G.709
//! framing.
//!
//! The controller is a synchronous state machine in the sense of
//! [`otnsim_core`]: every operation returns the timer actions the hosting
//! runner must execute.

mod stages;
mod state;

pub use stages::{stage_sequence, PipelineStage};
pub use state::{
    ErrorInjection, PipelineState, PROCESSING_BITS_PER_TICK, TRANSMISSION_BITS_PER_TICK,
};
