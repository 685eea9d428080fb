//! Topology trace progress mapper.
//!
//! Drives a scalar progress value (0-100) along a fixed multi-segment
//! path on a 50 ms tick, and derives everything a renderer needs from it:
//! the active timeline step, its log line, the interpolated marker
//! position, and decorative link telemetry.
//!
//! The progress-to-step and progress-to-position mappings live in an
//! explicit ordered segment table ([`TraceSchedule`]), so the breakpoints
//! are independently testable and replaceable for other topologies.

mod schedule;
mod state;
mod telemetry;

pub use schedule::{Segment, SegmentKind, ScheduleError, TraceSchedule, TraceSubStage};
pub use state::{TraceState, COMPLETE_PROGRESS, PROGRESS_PER_TICK, TRACE_TICK_PERIOD};
pub use telemetry::Telemetry;
