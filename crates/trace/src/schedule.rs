//! Progress-to-step mapping over an explicit segment table.

use otnsim_types::{Position, TopologyGraph, TraceStepId};
use std::fmt;

/// What the trace marker does inside a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// The marker dwells at a node's fixed coordinate.
    Dwell { at: Position },
    /// The marker moves linearly along a fiber span.
    Span { from: Position, to: Position },
}

/// Processing phase shown alongside the active step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSubStage {
    /// Source terminal: client signal is wrapped for transport.
    Mapping,
    /// In flight on a fiber span.
    Transmission,
    /// Transit node: the wavelength is switched optically.
    Switching,
    /// Destination terminal: the client signal is recovered.
    Demapping,
}

impl TraceSubStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceSubStage::Mapping => "MAPPING",
            TraceSubStage::Transmission => "TRANSMISSION",
            TraceSubStage::Switching => "SWITCHING",
            TraceSubStage::Demapping => "DEMAPPING",
        }
    }
}

impl fmt::Display for TraceSubStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One progress range of the trace.
///
/// Ranges are half-open `[start, end)`; the final segment is closed at
/// the completion value so progress 100 still maps to the destination.
#[derive(Debug, Clone)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub step: TraceStepId,
    /// Timeline card label, e.g. `Mumbai (Source)`.
    pub label: String,
    /// Canned log line for the trace console.
    pub detail: String,
    pub sub_stage: TraceSubStage,
    pub kind: SegmentKind,
}

/// Errors detected while building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A timeline of N steps needs exactly N+1 breakpoints.
    #[error("expected {expected} breakpoints for {steps} timeline steps, got {actual}")]
    BreakpointCount {
        steps: usize,
        expected: usize,
        actual: usize,
    },

    /// Breakpoints must be strictly increasing.
    #[error("breakpoints must be strictly increasing")]
    NotIncreasing,

    /// One log detail string per timeline step.
    #[error("expected {steps} log details, got {actual}")]
    DetailCount { steps: usize, actual: usize },
}

/// An ordered, contiguous table of progress segments covering one trace.
#[derive(Debug, Clone)]
pub struct TraceSchedule {
    segments: Vec<Segment>,
}

impl TraceSchedule {
    /// Build a schedule by pairing a topology's timeline with breakpoint
    /// ranges and per-step log details.
    pub fn from_breakpoints(
        topology: &TopologyGraph,
        breakpoints: &[f64],
        details: &[&str],
    ) -> Result<Self, ScheduleError> {
        let timeline = topology.timeline();
        if breakpoints.len() != timeline.len() + 1 {
            return Err(ScheduleError::BreakpointCount {
                steps: timeline.len(),
                expected: timeline.len() + 1,
                actual: breakpoints.len(),
            });
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScheduleError::NotIncreasing);
        }
        if details.len() != timeline.len() {
            return Err(ScheduleError::DetailCount {
                steps: timeline.len(),
                actual: details.len(),
            });
        }

        let last = timeline.len() - 1;
        let segments = timeline
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let (kind, sub_stage) = match entry.step {
                    TraceStepId::Node(id) => {
                        let at = topology
                            .node(id)
                            .expect("timeline nodes exist in topology")
                            .position;
                        let sub = match i {
                            0 => TraceSubStage::Mapping,
                            n if n == last => TraceSubStage::Demapping,
                            _ => TraceSubStage::Switching,
                        };
                        (SegmentKind::Dwell { at }, sub)
                    }
                    TraceStepId::Link(a, b) => {
                        let from = topology
                            .node(a)
                            .expect("timeline nodes exist in topology")
                            .position;
                        let to = topology
                            .node(b)
                            .expect("timeline nodes exist in topology")
                            .position;
                        (SegmentKind::Span { from, to }, TraceSubStage::Transmission)
                    }
                };
                Segment {
                    start: breakpoints[i],
                    end: breakpoints[i + 1],
                    step: entry.step,
                    label: entry.label,
                    detail: details[i].to_owned(),
                    sub_stage,
                    kind,
                }
            })
            .collect();

        Ok(Self { segments })
    }

    /// The canonical schedule over the reference backbone: breakpoints at
    /// 0, 10, 30, 45, 65, 75, 90, 100 across the A→B→D→E trace.
    pub fn reference() -> Self {
        let topology = TopologyGraph::reference();
        let breakpoints = [0.0, 10.0, 30.0, 45.0, 65.0, 75.0, 90.0, 100.0];
        let details = [
            "Encapsulating Ethernet -> ODU4 -> OTU4 Frame. Adding FEC overhead.",
            "Long Haul Transmission (1400km). Signal passes through EDFA Amplifiers.",
            "Wavelength Selective Switch (WSS) routes λ to Chennai port without OEO.",
            "Ultra Long Haul (2100km). Coherent detection handles chromatic dispersion.",
            "Express path switching. Dropping/Adding local wavelengths if configured.",
            "Final Span (1600km). Signal entering metro network.",
            "DSP signal recovery. FEC corrects errors. De-mapping to client port.",
        ];
        Self::from_breakpoints(&topology, &breakpoints, &details)
            .expect("reference schedule is well-formed")
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Index of the segment containing `progress`.
    ///
    /// Inputs at or past the final breakpoint clamp to the last segment,
    /// so the completion value maps to the destination dwell.
    pub fn segment_index_at(&self, progress: f64) -> usize {
        self.segments
            .iter()
            .position(|s| progress < s.end)
            .unwrap_or(self.segments.len() - 1)
    }

    /// The segment containing `progress`.
    pub fn segment_at(&self, progress: f64) -> &Segment {
        &self.segments[self.segment_index_at(progress)]
    }

    /// The interpolated marker coordinate for `progress`.
    ///
    /// Node dwells return the node coordinate exactly; spans interpolate
    /// with `(progress - start) / (end - start)` clamped to [0, 1].
    pub fn position_at(&self, progress: f64) -> Position {
        let segment = self.segment_at(progress);
        match segment.kind {
            SegmentKind::Dwell { at } => at,
            SegmentKind::Span { from, to } => {
                let local = (progress - segment.start) / (segment.end - segment.start);
                from.lerp(to, local)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otnsim_types::NodeId;

    fn step_at(schedule: &TraceSchedule, progress: f64) -> String {
        schedule.segment_at(progress).step.to_string()
    }

    #[test]
    fn test_reference_shape() {
        let schedule = TraceSchedule::reference();
        assert_eq!(schedule.segments().len(), 7);
        assert_eq!(schedule.segments()[0].start, 0.0);
        assert_eq!(schedule.segments()[6].end, 100.0);
    }

    #[test]
    fn test_step_lookup_at_landmarks() {
        let schedule = TraceSchedule::reference();
        assert_eq!(step_at(&schedule, 0.0), "NODE_A");
        assert_eq!(step_at(&schedule, 50.0), "LINK_BD");
        assert_eq!(step_at(&schedule, 100.0), "NODE_E");
    }

    #[test]
    fn test_ranges_are_half_open() {
        let schedule = TraceSchedule::reference();
        assert_eq!(step_at(&schedule, 9.999), "NODE_A");
        assert_eq!(step_at(&schedule, 10.0), "LINK_AB");
        assert_eq!(step_at(&schedule, 89.999), "LINK_DE");
        assert_eq!(step_at(&schedule, 90.0), "NODE_E");
    }

    #[test]
    fn test_step_index_is_monotonic() {
        let schedule = TraceSchedule::reference();
        let mut last_index = 0;
        let mut progress = 0.0;
        while progress <= 100.0 {
            let index = schedule.segment_index_at(progress);
            assert!(index >= last_index, "step went backwards at {progress}");
            last_index = index;
            progress += 0.4;
        }
    }

    #[test]
    fn test_span_interpolation() {
        let schedule = TraceSchedule::reference();
        // LINK_AB covers [10, 30): A (100,200) -> B (300,100).
        assert_eq!(schedule.position_at(10.0), Position::new(100.0, 200.0));
        assert_eq!(schedule.position_at(20.0), Position::new(200.0, 150.0));
        // 30 falls in the NODE_B dwell, which pins the marker to B.
        assert_eq!(schedule.position_at(30.0), Position::new(300.0, 100.0));
    }

    #[test]
    fn test_dwell_positions_are_exact() {
        let schedule = TraceSchedule::reference();
        assert_eq!(schedule.position_at(0.0), Position::new(100.0, 200.0));
        assert_eq!(schedule.position_at(70.0), Position::new(500.0, 200.0));
        assert_eq!(schedule.position_at(100.0), Position::new(700.0, 200.0));
    }

    #[test]
    fn test_sub_stages_by_role() {
        let schedule = TraceSchedule::reference();
        assert_eq!(schedule.segment_at(0.0).sub_stage, TraceSubStage::Mapping);
        assert_eq!(
            schedule.segment_at(20.0).sub_stage,
            TraceSubStage::Transmission
        );
        assert_eq!(schedule.segment_at(35.0).sub_stage, TraceSubStage::Switching);
        assert_eq!(schedule.segment_at(95.0).sub_stage, TraceSubStage::Demapping);
    }

    #[test]
    fn test_log_details_follow_segments() {
        let schedule = TraceSchedule::reference();
        assert!(schedule.segment_at(50.0).detail.starts_with("Ultra Long Haul"));
        assert!(schedule.segment_at(0.0).detail.starts_with("Encapsulating"));
    }

    #[test]
    fn test_rejects_wrong_breakpoint_count() {
        let topology = TopologyGraph::reference();
        let err =
            TraceSchedule::from_breakpoints(&topology, &[0.0, 50.0, 100.0], &[""; 7]).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::BreakpointCount {
                steps: 7,
                expected: 8,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_rejects_unordered_breakpoints() {
        let topology = TopologyGraph::reference();
        let breakpoints = [0.0, 10.0, 30.0, 30.0, 65.0, 75.0, 90.0, 100.0];
        let err = TraceSchedule::from_breakpoints(&topology, &breakpoints, &[""; 7]).unwrap_err();
        assert_eq!(err, ScheduleError::NotIncreasing);
    }

    #[test]
    fn test_rejects_wrong_detail_count() {
        let topology = TopologyGraph::reference();
        let breakpoints = [0.0, 10.0, 30.0, 45.0, 65.0, 75.0, 90.0, 100.0];
        let err = TraceSchedule::from_breakpoints(&topology, &breakpoints, &[""; 3]).unwrap_err();
        assert_eq!(err, ScheduleError::DetailCount { steps: 7, actual: 3 });
    }

    #[test]
    fn test_segment_steps_alternate() {
        let schedule = TraceSchedule::reference();
        for (i, segment) in schedule.segments().iter().enumerate() {
            match segment.step {
                TraceStepId::Node(_) => assert_eq!(i % 2, 0),
                TraceStepId::Link(a, b) => {
                    assert_eq!(i % 2, 1);
                    assert_ne!(a, b);
                }
            }
        }
        assert_eq!(
            schedule.segments()[0].step,
            TraceStepId::Node(NodeId('A'))
        );
    }
}
