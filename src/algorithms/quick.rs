//! Quick sort runner (Lomuto partition, last element as pivot)
//!
//! Recursion is replaced by an explicit work stack. A [`Task::Sort`] stands for
//! one recursive call; a [`Task::AnnounceRight`] is the continuation that, once
//! the left half is fully sorted, narrates and schedules the right half. Tasks
//! are popped from the end, so the left half always finishes before the right
//! half starts.

use super::{FrameSequence, Step, Workspace};
use crate::value::Value;
use crate::visual::command::{
    disable_range, highlight_index, highlight_index_with, mark_current_subarray,
    mark_greater_than_pivot, mark_less_than_pivot, mark_partition_boundary, mark_pivot,
    mark_swapped, mark_swapped_success,
};
use crate::visual::{palette, VisualCommand};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Sort `low..=high`
    Sort {
        low: usize,
        high: usize,
        depth: usize,
    },
    /// Right half `pivot + 1..=high` is due once the left half is done
    AnnounceRight {
        pivot: usize,
        high: usize,
        depth: usize,
    },
}

/// The subarray being partitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    low: usize,
    high: usize,
    depth: usize,
    pivot_value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Intro,
    Dispatch,
    PartitionStart(Span),
    /// `store` is the next slot for an element smaller than the pivot
    Compare { span: Span, j: usize, store: usize },
    SwapAnnounce { span: Span, j: usize, store: usize },
    SwapDone { span: Span, j: usize, store: usize },
    InPlace { span: Span, j: usize, store: usize },
    Stays { span: Span, j: usize, store: usize },
    PlacePivot { span: Span, store: usize },
    PivotPlaced { span: Span, store: usize },
    Summary { span: Span, pivot: usize },
    Recurse { span: Span, pivot: usize },
    Done,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    ws: Workspace,
    stack: Vec<Task>,
    state: State,
}

impl QuickSort {
    pub fn new(array: Vec<Value>, speed: Option<Duration>) -> Self {
        let n = array.len();
        let (stack, state) = if n >= 2 {
            (
                vec![Task::Sort {
                    low: 0,
                    high: n - 1,
                    depth: 0,
                }],
                State::Intro,
            )
        } else {
            (Vec::new(), State::Dispatch)
        };
        QuickSort {
            ws: Workspace::new(array, speed),
            stack,
            state,
        }
    }

    /// Fade everything outside `low..=high`
    fn outside(&self, low: usize, high: usize) -> [VisualCommand; 2] {
        [
            disable_range(0..low),
            disable_range(high + 1..self.ws.len()),
        ]
    }

    /// Pivot plus the two regions it splits `low..=high` into
    fn split_commands(&self, low: usize, high: usize, pivot: usize) -> Vec<VisualCommand> {
        let mut commands = vec![mark_pivot(pivot)];
        if low < pivot {
            commands.push(mark_less_than_pivot(low..pivot));
        }
        if pivot < high {
            commands.push(mark_greater_than_pivot(pivot + 1..high + 1));
        }
        commands.extend(self.outside(low, high));
        commands
    }
}

impl FrameSequence for QuickSort {
    fn next_step(&mut self) -> Option<Step> {
        loop {
            match self.state {
                State::Intro => {
                    self.state = State::Dispatch;
                    return Some(Step::Continue(self.ws.frame(
                        vec![mark_current_subarray(0..self.ws.len())],
                        "Starting Quick Sort on entire array".to_string(),
                    )));
                }
                State::Dispatch => match self.stack.pop() {
                    None => {
                        self.state = State::Done;
                        return Some(self.ws.sorted());
                    }
                    Some(Task::Sort { low, high, depth }) => {
                        if low >= high {
                            continue;
                        }
                        self.state = State::PartitionStart(Span {
                            low,
                            high,
                            depth,
                            pivot_value: self.ws.array[high],
                        });
                        let mut commands = vec![mark_current_subarray(low..high + 1)];
                        commands.extend(self.outside(low, high));
                        return Some(Step::Continue(self.ws.frame(
                            commands,
                            format!(
                                "Sorting subarray from index {} to {} (depth {})",
                                low, high, depth
                            ),
                        )));
                    }
                    Some(Task::AnnounceRight { pivot, high, depth }) => {
                        self.stack.push(Task::Sort {
                            low: pivot + 1,
                            high,
                            depth: depth + 1,
                        });
                        let commands = vec![
                            mark_current_subarray(pivot + 1..high + 1),
                            mark_pivot(pivot),
                            disable_range(0..pivot + 1),
                            disable_range(high + 1..self.ws.len()),
                        ];
                        return Some(Step::Continue(self.ws.colored(
                            commands,
                            format!(
                                "Recursively sorting right partition [{}...{}]",
                                pivot + 1,
                                high
                            ),
                            palette::MESSAGE_RIGHT,
                        )));
                    }
                },
                State::PartitionStart(span) => {
                    self.state = State::Compare {
                        span,
                        j: span.low,
                        store: span.low,
                    };
                    let mut commands = vec![
                        mark_pivot(span.high),
                        mark_current_subarray(span.low..span.high),
                    ];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "Partitioning with pivot {} at index {}",
                            span.pivot_value, span.high
                        ),
                        palette::MESSAGE_PIVOT,
                    )));
                }
                State::Compare { span, j, store } => {
                    if j >= span.high {
                        self.state = State::PlacePivot { span, store };
                        continue;
                    }
                    let value = self.ws.array[j];
                    self.state = if value < span.pivot_value {
                        if store != j {
                            State::SwapAnnounce { span, j, store }
                        } else {
                            State::InPlace { span, j, store }
                        }
                    } else {
                        State::Stays { span, j, store }
                    };
                    let mut commands = vec![
                        mark_pivot(span.high),
                        highlight_index(j),
                        mark_partition_boundary(store),
                    ];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.frame(
                        commands,
                        format!("Comparing {} with pivot {}", value, span.pivot_value),
                    )));
                }
                State::SwapAnnounce { span, j, store } => {
                    self.state = State::SwapDone { span, j, store };
                    let mut commands = vec![mark_pivot(span.high), mark_swapped([store, j])];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "{} < {}, swapping with position {}",
                            self.ws.array[j], span.pivot_value, store
                        ),
                        palette::MESSAGE_SWAP,
                    )));
                }
                State::SwapDone { span, j, store } => {
                    self.ws.array.swap(store, j);
                    self.state = State::Compare {
                        span,
                        j: j + 1,
                        store: store + 1,
                    };
                    let mut commands =
                        vec![mark_pivot(span.high), mark_swapped_success([store, j])];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "Swapped! {} moved to smaller elements section",
                            self.ws.array[store]
                        ),
                        palette::MESSAGE_LEFT,
                    )));
                }
                State::InPlace { span, j, store } => {
                    self.state = State::Compare {
                        span,
                        j: j + 1,
                        store: store + 1,
                    };
                    let mut commands = vec![mark_pivot(span.high), mark_swapped_success([store])];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "{} < {}, already in correct position",
                            self.ws.array[j], span.pivot_value
                        ),
                        palette::MESSAGE_LEFT,
                    )));
                }
                State::Stays { span, j, store } => {
                    self.state = State::Compare {
                        span,
                        j: j + 1,
                        store,
                    };
                    let mut commands = vec![
                        mark_pivot(span.high),
                        highlight_index_with(j, palette::GREATER_BACKGROUND),
                        mark_partition_boundary(store),
                    ];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "{} >= {}, stays in greater elements section",
                            self.ws.array[j], span.pivot_value
                        ),
                        palette::MESSAGE_RIGHT,
                    )));
                }
                State::PlacePivot { span, store } => {
                    self.state = State::PivotPlaced { span, store };
                    let mut commands = vec![mark_swapped([store, span.high])];
                    commands.extend(self.outside(span.low, span.high));
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!(
                            "Moving pivot {} to its final position {}",
                            span.pivot_value, store
                        ),
                        palette::MESSAGE_SWAP,
                    )));
                }
                State::PivotPlaced { span, store } => {
                    self.ws.array.swap(store, span.high);
                    self.state = State::Summary { span, pivot: store };
                    let frame = self
                        .ws
                        .colored(
                            self.split_commands(span.low, span.high, store),
                            format!(
                                "Partition complete! Pivot {} is in final position {}",
                                self.ws.array[store], store
                            ),
                            palette::MESSAGE_PIVOT,
                        )
                        .with_speed(self.ws.slow_speed());
                    return Some(Step::Continue(frame));
                }
                State::Summary { span, pivot } => {
                    self.state = State::Recurse { span, pivot };
                    let frame = self
                        .ws
                        .colored(
                            self.split_commands(span.low, span.high, pivot),
                            format!(
                                "Partitioned around pivot {} at index {}",
                                self.ws.array[pivot], pivot
                            ),
                            palette::MESSAGE_PARTITIONED,
                        )
                        .with_speed(self.ws.slow_speed());
                    return Some(Step::Continue(frame));
                }
                State::Recurse { span, pivot } => {
                    self.state = State::Dispatch;
                    if pivot + 1 < span.high {
                        self.stack.push(Task::AnnounceRight {
                            pivot,
                            high: span.high,
                            depth: span.depth,
                        });
                    }
                    if pivot > span.low + 1 {
                        self.stack.push(Task::Sort {
                            low: span.low,
                            high: pivot - 1,
                            depth: span.depth + 1,
                        });
                        return Some(Step::Continue(self.ws.colored(
                            vec![
                                mark_current_subarray(span.low..pivot),
                                mark_pivot(pivot),
                                disable_range(0..span.low),
                                disable_range(pivot..self.ws.len()),
                            ],
                            format!(
                                "Recursively sorting left partition [{}...{}]",
                                span.low,
                                pivot - 1
                            ),
                            palette::MESSAGE_LEFT,
                        )));
                    }
                }
                State::Done => return None,
            }
        }
    }
}
