//! Property-based invariant tests for the runners and the step driver.
//!
//! 1. Every sort ends with the input sorted ascending.
//! 2. Identical inputs produce identical frame sequences, for every runner.
//! 3. Linear search returns the lowest matching index, or -1.
//! 4. Binary search on sorted input returns a matching index iff one exists.
//! 5. Bubble sort on sorted input stops after a single pass.
//! 6. Pausing and resuming changes timing only, never the frames.
//! 7. After stop + start, no frame from the stopped run is presented.
//! 8. Quick sort partitions put smaller elements left of the pivot and the
//!    rest right of it.

use algotty::algorithms::{
    drain, BinarySearch, BubbleSort, FrameSequence, InsertionSort, LinearSearch, QuickSort,
    SelectionSort, Step,
};
use algotty::driver::StepDriver;
use algotty::params::{ParamValue, Params};
use algotty::registry::Registry;
use algotty::value::Value;
use algotty::visual::{ArrayView, CommandKind, Outcome};
use proptest::prelude::*;
use std::time::{Duration, Instant};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Quarter steps in -12.5..12.5: decimals plus plenty of duplicates
fn element() -> impl Strategy<Value = Value> {
    (-50i32..50).prop_map(|n| Value::try_from(f64::from(n) / 4.0).unwrap())
}

fn array_strategy() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(element(), 0..12)
}

fn sorters(array: &[Value]) -> Vec<(&'static str, Box<dyn FrameSequence>)> {
    let boxed = |runner: Box<dyn FrameSequence>| runner;
    vec![
        ("bubble", boxed(Box::new(BubbleSort::new(array.to_vec(), None)))),
        ("selection", boxed(Box::new(SelectionSort::new(array.to_vec(), None)))),
        ("insertion", boxed(Box::new(InsertionSort::new(array.to_vec(), None)))),
        ("quick", boxed(Box::new(QuickSort::new(array.to_vec(), None)))),
    ]
}

fn searchers(array: &[Value], target: Value) -> Vec<(&'static str, Box<dyn FrameSequence>)> {
    let boxed = |runner: Box<dyn FrameSequence>| runner;
    let mut sorted = array.to_vec();
    sorted.sort();
    vec![
        ("linear", boxed(Box::new(LinearSearch::new(array.to_vec(), target, None)))),
        ("binary", boxed(Box::new(BinarySearch::new(array.to_vec(), target, None)))),
        ("binary on sorted", boxed(Box::new(BinarySearch::new(sorted, target, None)))),
    ]
}

fn final_outcome(steps: &[Step]) -> Option<Outcome> {
    steps
        .last()
        .filter(|s| s.is_done())
        .and_then(|s| s.frame().outcome.clone())
}

fn sort_params(array: &[Value]) -> Params {
    Params::new()
        .with("array", ParamValue::List(array.to_vec()))
        .with("speed", ParamValue::Number(Value::from(100)))
}

/// Drive a run to the end, pausing after `pause_at` frames and resuming at
/// an arbitrary later instant
fn drive(array: &[Value], pause_at: Option<usize>) -> Vec<ArrayView> {
    let mut driver = StepDriver::new(Registry::builtin(), Vec::new());
    let mut now = Instant::now();
    driver
        .start("quick-sort", &sort_params(array), now)
        .expect("quick sort starts");
    let mut paused_once = false;
    while let Some(due) = driver.next_due() {
        if !paused_once && pause_at.is_some_and(|k| driver.canvas().len() >= k) {
            paused_once = true;
            driver.pause();
            now = due + Duration::from_secs(3);
            driver.resume(now);
            continue;
        }
        now = due;
        driver.tick(now);
    }
    driver.canvas().clone()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Sort correctness and determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sorts_produce_sorted_output(array in array_strategy()) {
        let mut expected = array.clone();
        expected.sort();
        for (name, mut runner) in sorters(&array) {
            let steps = drain(&mut runner);
            prop_assert_eq!(
                final_outcome(&steps),
                Some(Outcome::Sorted(expected.clone())),
                "{} did not sort {:?}",
                name,
                array
            );
            prop_assert!(runner.next_step().is_none());
        }
    }

    #[test]
    fn runs_are_deterministic(array in array_strategy()) {
        for ((name, mut a), (_, mut b)) in sorters(&array).into_iter().zip(sorters(&array)) {
            prop_assert_eq!(drain(&mut a), drain(&mut b), "{} is not deterministic", name);
        }
    }

    #[test]
    fn searches_are_deterministic(array in array_strategy(), target in element()) {
        let runs = searchers(&array, target).into_iter().zip(searchers(&array, target));
        for ((name, mut a), (_, mut b)) in runs {
            prop_assert_eq!(drain(&mut a), drain(&mut b), "{} search is not deterministic", name);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Search correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_search_finds_first_match(array in array_strategy(), target in element()) {
        let steps = drain(&mut LinearSearch::new(array.clone(), target, None));
        let expected = match array.iter().position(|&v| v == target) {
            Some(i) => Outcome::Found(i),
            None => Outcome::NotFound,
        };
        prop_assert_eq!(final_outcome(&steps), Some(expected));
    }

    #[test]
    fn binary_search_on_sorted_input(mut array in array_strategy(), target in element()) {
        array.sort();
        let steps = drain(&mut BinarySearch::new(array.clone(), target, None));
        match final_outcome(&steps) {
            Some(Outcome::Found(i)) => prop_assert_eq!(array[i], target),
            Some(Outcome::NotFound) => prop_assert!(!array.contains(&target)),
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Bubble sort early exit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bubble_sort_single_pass_when_sorted(mut array in prop::collection::vec(element(), 2..12)) {
        array.sort();
        let steps = drain(&mut BubbleSort::new(array.clone(), None));
        let comparisons = steps
            .iter()
            .filter(|s| s.frame().text().is_some_and(|t| t.starts_with("Comparing")))
            .count();
        prop_assert_eq!(comparisons, array.len() - 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Driver fidelity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pause_resume_keeps_frames(array in array_strategy(), pause_at in 1usize..40) {
        prop_assert_eq!(drive(&array, Some(pause_at)), drive(&array, None));
    }

    #[test]
    fn stop_isolates_runs(array in prop::collection::vec(element(), 2..12), pulls in 0usize..20) {
        let mut driver = StepDriver::new(Registry::builtin(), Vec::new());
        let t0 = Instant::now();
        driver.start("bubble-sort", &sort_params(&array), t0).expect("bubble sort starts");
        let mut stale = Vec::new();
        for _ in 0..pulls {
            match driver.next_due() {
                Some(due) => {
                    stale.push(due);
                    driver.tick(due);
                }
                None => break,
            }
        }
        driver.stop();

        let search = sort_params(&array).with("target", ParamValue::Number(array[0]));
        driver.start("linear-search", &search, t0).expect("linear search starts");
        // the old deadlines never reach the new run
        for due in stale {
            driver.tick(due);
        }
        while let Some(due) = driver.next_due() {
            driver.tick(due);
        }

        let views = driver.canvas();
        prop_assert_eq!(views.len(), 2);
        for view in views {
            let text = view.message.as_ref().map(|m| m.text.as_str()).unwrap_or("");
            prop_assert!(!text.starts_with("Comparing") && !text.starts_with("Swap"));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Quick sort pivot invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn quick_sort_partitions_around_pivot(array in array_strategy()) {
        let steps = drain(&mut QuickSort::new(array, None));
        for step in &steps {
            let frame = step.frame();
            if !frame.text().is_some_and(|t| t.starts_with("Partition complete!")) {
                continue;
            }
            let indices = |kind: CommandKind| -> Vec<usize> {
                frame
                    .commands
                    .iter()
                    .filter(|c| c.kind == kind)
                    .flat_map(|c| c.indices.iter().copied())
                    .collect()
            };
            let pivot_at = indices(CommandKind::Pivot);
            prop_assert_eq!(pivot_at.len(), 1);
            let pivot = frame.array[pivot_at[0]];
            for i in indices(CommandKind::LessThanPivot) {
                prop_assert!(i < pivot_at[0] && frame.array[i] < pivot);
            }
            for i in indices(CommandKind::GreaterThanPivot) {
                prop_assert!(i > pivot_at[0] && frame.array[i] >= pivot);
            }
        }
    }
}
