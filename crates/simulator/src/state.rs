//! The composed simulator.

use crate::view::{PipelineView, TraceView};
use otnsim_core::{Action, Event, StateMachine};
use otnsim_pipeline::{ErrorInjection, PipelineState};
use otnsim_trace::{TraceSchedule, TraceState};
use otnsim_types::{SimulationConfig, TopologyGraph};
use tracing::debug;

/// The complete simulation: one pipeline controller, one trace controller,
/// and the static tables both derive from.
///
/// Control operations return the timer actions the hosting runner must
/// execute; read accessors are side-effect free.
#[derive(Debug)]
pub struct Simulator {
    config: SimulationConfig,
    topology: TopologyGraph,
    schedule: TraceSchedule,
    pipeline: PipelineState,
    trace: TraceState,
}

impl Simulator {
    /// Create a simulator over the given static tables.
    ///
    /// The caller is responsible for building `schedule` from `topology`,
    /// so the two describe the same trace path. The seed fixes both the
    /// burst-size draws and the telemetry jitter.
    pub fn new(
        config: SimulationConfig,
        topology: TopologyGraph,
        schedule: TraceSchedule,
        seed: u64,
    ) -> Self {
        let pipeline = PipelineState::new(&config, seed);
        let trace = TraceState::new(seed.wrapping_add(1));
        Self {
            config,
            topology,
            schedule,
            pipeline,
            trace,
        }
    }

    /// Create a simulator over the bundled reference backbone.
    pub fn with_reference_topology(config: SimulationConfig, seed: u64) -> Self {
        Self::new(
            config,
            TopologyGraph::reference(),
            TraceSchedule::reference(),
            seed,
        )
    }

    // ───────────────────────── control operations ─────────────────────────

    pub fn start_pipeline(&mut self) -> Vec<Action> {
        self.pipeline.start()
    }

    pub fn pause_pipeline(&mut self) -> Vec<Action> {
        self.pipeline.pause()
    }

    pub fn reset_pipeline(&mut self) -> Vec<Action> {
        self.pipeline.reset()
    }

    /// Inject errored bytes. The rendering layer offers this control only
    /// during the transmission stage; the core accepts it unconditionally
    /// (and ignores it while FEC is disabled).
    pub fn inject_error(&mut self, kind: ErrorInjection) {
        self.pipeline.inject_error(kind);
    }

    pub fn start_trace(&mut self) -> Vec<Action> {
        self.trace.start_trace()
    }

    /// Replace the whole configuration.
    ///
    /// Recomputes the pipeline stage sequence for the new FEC setting and
    /// re-arms the pipeline timer when the tick period changed mid-run.
    pub fn apply_config(&mut self, config: SimulationConfig) -> Vec<Action> {
        self.pipeline.set_enable_fec(config.enable_fec);
        let mut actions = Vec::new();
        if config.simulation_speed != self.config.simulation_speed {
            actions.extend(self.pipeline.set_speed(config.simulation_speed));
        }
        debug!(
            odu = config.odu_level.as_str(),
            fec = config.enable_fec,
            "config applied"
        );
        self.config = config;
        actions
    }

    // ─────────────────────────── read accessors ───────────────────────────

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn topology(&self) -> &TopologyGraph {
        &self.topology
    }

    pub fn schedule(&self) -> &TraceSchedule {
        &self.schedule
    }

    /// Snapshot of the pipeline for rendering.
    pub fn pipeline_view(&self) -> PipelineView {
        PipelineView {
            stage: self.pipeline.current_stage(),
            active_section: self.pipeline.active_frame_section(),
            running: self.pipeline.is_running(),
            stats: *self.pipeline.stats(),
        }
    }

    /// Snapshot of the trace for rendering.
    ///
    /// While no run is active the step-derived fields are `None`; the
    /// trace panel shows its waiting card.
    pub fn trace_view(&self) -> TraceView {
        let progress = self.trace.progress();
        let running = self.trace.is_running();
        if !running {
            return TraceView {
                running,
                progress,
                step: None,
                label: None,
                detail: None,
                sub_stage: None,
                position: None,
                telemetry: self.trace.telemetry(),
            };
        }
        let segment = self.schedule.segment_at(progress);
        TraceView {
            running,
            progress,
            step: Some(segment.step),
            label: Some(segment.label.clone()),
            detail: Some(segment.detail.clone()),
            sub_stage: Some(segment.sub_stage),
            position: Some(self.schedule.position_at(progress)),
            telemetry: self.trace.telemetry(),
        }
    }
}

impl StateMachine for Simulator {
    /// Route a timer event to the owning component.
    ///
    /// The components share no state: a pipeline tick can never affect the
    /// trace, and vice versa.
    fn handle(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::PipelineTick => self.pipeline.on_tick(),
            Event::TraceTick => self.trace.on_tick(),
        }
    }
}
