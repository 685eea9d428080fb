//! End-to-end runs of both simulation components over virtual time.

use otnsim_pipeline::{ErrorInjection, PipelineStage, PROCESSING_BITS_PER_TICK};
use otnsim_simulation::SimulationRunner;
use otnsim_simulator::Simulator;
use otnsim_types::SimulationConfig;
use std::time::Duration;
use tracing_test::traced_test;

fn make_runner(config: SimulationConfig) -> SimulationRunner {
    SimulationRunner::new(Simulator::with_reference_topology(config, 23))
}

#[test]
#[traced_test]
fn test_pipeline_run_to_transmission() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);

    let events = runner.run_until_idle(100);
    assert_eq!(events, 5, "idle->transmission is five ticks with FEC on");
    assert!(runner.is_idle(), "completion releases the timer");
    assert_eq!(runner.now(), Duration::from_millis(5000));

    let view = runner.simulator().pipeline_view();
    assert_eq!(view.stage, PipelineStage::Transmission);
    assert!(!view.running);
    assert_eq!(view.stats.total_bits, 1 + 4 * PROCESSING_BITS_PER_TICK);
    assert!(logs_contain("pipeline run complete"));
}

#[test]
fn test_pipeline_run_without_fec_is_shorter() {
    let config = SimulationConfig::default().with_fec(false);
    let mut runner = make_runner(config);

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);

    assert_eq!(runner.run_until_idle(100), 4);
    assert_eq!(
        runner.simulator().pipeline_view().stage,
        PipelineStage::Transmission
    );
}

#[test]
fn test_trace_run_to_completion() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_trace();
    runner.apply(actions);

    let events = runner.run_until_idle(1000);
    assert_eq!(events, 250, "0.4 per 50 ms tick reaches 100 in 250 ticks");
    assert!(runner.is_idle());
    assert_eq!(runner.now(), Duration::from_millis(250 * 50));

    let view = runner.simulator().trace_view();
    assert!(!view.running);
    assert_eq!(view.progress, 0.0, "completion wraps progress back to zero");
}

#[test]
fn test_components_run_independently() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);
    let actions = runner.simulator_mut().start_trace();
    runner.apply(actions);

    let events = runner.run_until_idle(1000);
    assert_eq!(events, 255, "5 pipeline ticks interleaved with 250 trace ticks");

    let pipeline = runner.simulator().pipeline_view();
    assert_eq!(pipeline.stage, PipelineStage::Transmission);
    assert_eq!(pipeline.stats.total_bits, 1 + 4 * PROCESSING_BITS_PER_TICK);

    let trace = runner.simulator().trace_view();
    assert!(!trace.running);
    assert_eq!(trace.progress, 0.0);
}

#[test]
fn test_pause_releases_timer() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);
    runner.step();
    runner.step();

    let actions = runner.simulator_mut().pause_pipeline();
    runner.apply(actions);
    assert!(runner.is_idle());
    assert_eq!(runner.step(), None);

    let view = runner.simulator().pipeline_view();
    assert_eq!(view.stage, PipelineStage::PathOverhead);
    assert!(!view.running);
}

#[test]
fn test_reset_restores_counters_mid_run() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);
    runner.run_until_idle(100);
    runner.simulator_mut().inject_error(ErrorInjection::Burst);

    let actions = runner.simulator_mut().reset_pipeline();
    runner.apply(actions);

    let view = runner.simulator().pipeline_view();
    assert_eq!(view.stage, PipelineStage::Idle);
    assert_eq!(view.stats.total_bits, 1);
    assert_eq!(view.stats.pre_fec_errors, 0);
    assert_eq!(view.stats.corrected_errors, 0);
}

#[test]
fn test_speed_change_rearms_mid_run() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_pipeline();
    runner.apply(actions);
    runner.step();
    assert_eq!(runner.now(), Duration::from_millis(1000));

    let faster = SimulationConfig::default().with_speed(Duration::from_millis(200));
    let actions = runner.simulator_mut().apply_config(faster);
    runner.apply(actions);

    runner.step();
    assert_eq!(runner.now(), Duration::from_millis(1200));
}

#[test]
fn test_trace_marker_follows_schedule() {
    let mut runner = make_runner(SimulationConfig::default());

    let actions = runner.simulator_mut().start_trace();
    runner.apply(actions);

    // 50 ticks -> progress 20, the midpoint of the A->B span.
    for _ in 0..50 {
        runner.step();
    }
    let view = runner.simulator().trace_view();
    assert_eq!(view.progress, 20.0);
    assert_eq!(view.step.map(|s| s.to_string()).as_deref(), Some("LINK_AB"));
    let position = view.position.expect("trace is running");
    assert_eq!((position.x, position.y), (200.0, 150.0));
}
