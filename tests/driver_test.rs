// Step driver state machine, driven with synthetic instants

use algotty::driver::{DriverError, DriverState, StepDriver};
use algotty::params::{ParamError, ParamValue, Params};
use algotty::registry::Registry;
use algotty::value::{values, Value};
use algotty::visual::{ArrayView, Outcome};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

const STEP: Duration = Duration::from_millis(100);

fn list(array: &[i32]) -> Params {
    Params::new()
        .with("array", ParamValue::List(values(array)))
        .with("speed", ParamValue::Number(Value::from(100)))
}

fn search(array: &[i32], target: i32) -> Params {
    list(array).with("target", ParamValue::Number(Value::from(target)))
}

fn driver() -> StepDriver<Vec<ArrayView>> {
    StepDriver::new(Registry::builtin(), Vec::new())
}

/// Tick at every deadline until the run ends; returns the final instant
fn run_to_end(driver: &mut StepDriver<Vec<ArrayView>>) -> Instant {
    let mut now = Instant::now();
    while let Some(due) = driver.next_due() {
        now = due;
        driver.tick(now);
    }
    now
}

fn messages(views: &[ArrayView]) -> Vec<String> {
    views
        .iter()
        .filter_map(|v| v.message.as_ref().map(|m| m.text.clone()))
        .collect()
}

#[test]
fn test_run_to_completion() {
    let mut d = driver();
    d.start("linear-search", &search(&[2, 6, -2, 4], -2), Instant::now())
        .unwrap();
    run_to_end(&mut d);

    assert_eq!(d.state(), DriverState::Idle);
    assert!(d.is_finished());
    let completion = d.completion().unwrap();
    assert_eq!(completion.algorithm, "linear-search");
    assert_eq!(completion.outcome, Outcome::Found(2));
    assert_eq!(completion.frames, 4);
    assert_eq!(d.canvas().len(), 4);
    assert!(d.canvas().last().unwrap().is_terminal);
}

#[test]
fn test_pause_cancels_pending_pull() {
    let mut d = driver();
    let t0 = Instant::now();
    d.start("bubble-sort", &list(&[3, 2, 1]), t0).unwrap();
    assert!(d.pause());
    assert_eq!(d.next_due(), None);
    assert!(!d.tick(t0 + STEP * 10));
    assert_eq!(d.canvas().len(), 1);
}

#[test]
fn test_resume_pulls_immediately() {
    let mut d = driver();
    let t0 = Instant::now();
    d.start("bubble-sort", &list(&[3, 2, 1]), t0).unwrap();
    d.pause();
    let t1 = t0 + STEP * 50;
    assert!(d.resume(t1));
    assert_eq!(d.state(), DriverState::Running);
    assert_eq!(d.canvas().len(), 2);
    assert_eq!(d.next_due(), Some(t1 + STEP));
}

#[test]
fn test_step_while_paused() {
    let mut d = driver();
    let t0 = Instant::now();
    d.start("bubble-sort", &list(&[3, 2, 1]), t0).unwrap();
    d.pause();
    assert!(d.step(t0));
    assert!(d.step(t0));
    assert_eq!(d.canvas().len(), 3);
    assert_eq!(d.state(), DriverState::Paused);
    assert_eq!(d.next_due(), None);
}

#[test]
fn test_stop_then_start_other_algorithm() {
    let mut d = driver();
    let t0 = Instant::now();
    d.start("bubble-sort", &list(&[3, 2, 1]), t0).unwrap();
    let stale_due = d.next_due().unwrap();
    assert!(d.stop());
    assert_eq!(d.state(), DriverState::Idle);

    d.start("linear-search", &search(&[9, 8], 8), t0).unwrap();
    assert_eq!(d.canvas().len(), 1);
    run_to_end(&mut d);

    // nothing in the canvas came from the bubble sort run
    assert!(messages(d.canvas())
        .iter()
        .all(|m| !m.starts_with("Comparing") && !m.starts_with("Swap")));
    assert!(!d.tick(stale_due));
}

#[test]
fn test_restart_drops_stale_pull() {
    let mut d = driver();
    let t0 = Instant::now();
    d.start("bubble-sort", &list(&[3, 2, 1]), t0).unwrap();
    let first_run = d.run_id().unwrap();

    // a second start while the first pull is pending
    let t1 = t0 + STEP / 2;
    d.start("bubble-sort", &list(&[3, 2, 1]), t1).unwrap();
    assert_ne!(d.run_id(), Some(first_run));
    assert_eq!(d.canvas().len(), 1);

    // the old deadline passes without a pull
    assert!(!d.tick(t0 + STEP));
    assert!(d.tick(t1 + STEP));
    assert_eq!(d.canvas().len(), 2);
}

#[test]
fn test_start_clears_previous_completion() {
    let mut d = driver();
    d.start("linear-search", &search(&[1], 1), Instant::now())
        .unwrap();
    run_to_end(&mut d);
    assert!(d.completion().is_some());

    d.start("linear-search", &search(&[1, 2], 2), Instant::now())
        .unwrap();
    assert!(d.completion().is_none());
    assert_eq!(d.state(), DriverState::Running);
}

#[test]
fn test_start_errors_leave_state_untouched() {
    let mut d = driver();
    let missing = d.start("quick-sort", &Params::new(), Instant::now());
    assert!(matches!(
        missing,
        Err(DriverError::Params(ParamError::Missing(_)))
    ));
    assert_eq!(d.state(), DriverState::Idle);
    assert!(d.canvas().is_empty());
}

#[test]
fn test_start_from_inputs_parses_schema() {
    let mut d = driver();
    let mut inputs = FxHashMap::default();
    inputs.insert("array".to_string(), " 3, 1 ,2 ".to_string());
    d.start_from_inputs("insertion-sort", &inputs, Instant::now())
        .unwrap();
    run_to_end(&mut d);
    assert_eq!(
        d.completion().unwrap().outcome,
        Outcome::Sorted(values(&[1, 2, 3]))
    );

    inputs.insert("array".to_string(), "3,one".to_string());
    let err = d
        .start_from_inputs("insertion-sort", &inputs, Instant::now())
        .unwrap_err();
    assert!(matches!(
        err,
        DriverError::Params(ParamError::InvalidNumber { .. })
    ));
}

#[test]
fn test_empty_array_finishes_on_start() {
    let mut d = driver();
    d.start("quick-sort", &list(&[]), Instant::now()).unwrap();
    assert_eq!(d.state(), DriverState::Idle);
    assert_eq!(d.completion().unwrap().outcome, Outcome::Sorted(Vec::new()));
    assert_eq!(d.canvas().len(), 1);
}
