//! Renderer-facing snapshots.
//!
//! Views are plain data produced by pure read accessors; deriving one has
//! no side effect on the simulation.

use otnsim_pipeline::PipelineStage;
use otnsim_trace::{Telemetry, TraceSubStage};
use otnsim_types::{ErrorStats, Position, TraceStepId};

/// Snapshot of the encapsulation pipeline for one render frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineView {
    pub stage: PipelineStage,
    /// Frame-map section to highlight, if the stage maps to one.
    pub active_section: Option<&'static str>,
    pub running: bool,
    pub stats: ErrorStats,
}

/// Snapshot of the topology trace for one render frame.
///
/// The step-derived fields are `None` while no trace run is active; the
/// renderer shows its waiting card in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceView {
    pub running: bool,
    pub progress: f64,
    pub step: Option<TraceStepId>,
    /// Timeline card label for the active step.
    pub label: Option<String>,
    /// Log line for the active step.
    pub detail: Option<String>,
    pub sub_stage: Option<TraceSubStage>,
    /// Interpolated marker coordinate.
    pub position: Option<Position>,
    pub telemetry: Telemetry,
}
