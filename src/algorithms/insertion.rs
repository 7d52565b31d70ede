//! Insertion sort runner

use super::{FrameSequence, Step, Workspace};
use crate::value::Value;
use crate::visual::command::{disable_range, highlight_index, mark_swapped, mark_swapped_success};
use crate::visual::palette;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Select { i: usize },
    Shift { i: usize, current: usize, key: Value },
    Swap { i: usize, current: usize, key: Value },
    Done,
}

/// Walk each element left through the sorted prefix by adjacent swaps
#[derive(Debug, Clone)]
pub struct InsertionSort {
    ws: Workspace,
    state: State,
}

impl InsertionSort {
    pub fn new(array: Vec<Value>, speed: Option<Duration>) -> Self {
        InsertionSort {
            ws: Workspace::new(array, speed),
            state: State::Select { i: 1 },
        }
    }

    fn unprocessed(&self, i: usize) -> std::ops::Range<usize> {
        i + 1..self.ws.len()
    }
}

impl FrameSequence for InsertionSort {
    fn next_step(&mut self) -> Option<Step> {
        loop {
            match self.state {
                State::Select { i } if i < self.ws.len() => {
                    let key = self.ws.array[i];
                    self.state = State::Shift { i, current: i, key };
                    return Some(Step::Continue(self.ws.frame(
                        vec![highlight_index(i), disable_range(self.unprocessed(i))],
                        format!("Inserting {} into sorted portion", key),
                    )));
                }
                State::Select { .. } => {
                    self.state = State::Done;
                    return Some(self.ws.sorted());
                }
                State::Shift { i, current, key } => {
                    if current == 0 || self.ws.array[current - 1] <= self.ws.array[current] {
                        // key has settled; nothing to show until the next element
                        self.state = State::Select { i: i + 1 };
                        continue;
                    }
                    self.state = State::Swap { i, current, key };
                    return Some(Step::Continue(self.ws.colored(
                        vec![
                            mark_swapped([current - 1, current]),
                            disable_range(self.unprocessed(i)),
                        ],
                        format!(
                            "Moving {} left (swapping with {})",
                            self.ws.array[current],
                            self.ws.array[current - 1]
                        ),
                        palette::MESSAGE_SWAP,
                    )));
                }
                State::Swap { i, current, key } => {
                    self.ws.array.swap(current - 1, current);
                    let current = current - 1;
                    self.state = State::Shift { i, current, key };
                    return Some(Step::Continue(self.ws.colored(
                        vec![
                            mark_swapped_success([current, current + 1]),
                            disable_range(self.unprocessed(i)),
                        ],
                        format!("Moved {} to position {}", key, current),
                        palette::MESSAGE_SUCCESS,
                    )));
                }
                State::Done => return None,
            }
        }
    }
}
