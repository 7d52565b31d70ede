//! Selection sort runner

use super::{FrameSequence, Step, Workspace};
use crate::value::Value;
use crate::visual::command::{
    disable_range, highlight_index, mark_minimum, mark_swapped, mark_swapped_success,
};
use crate::visual::palette;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    PassStart { i: usize },
    Scan { i: usize, j: usize, min: usize },
    AboutToSwap { i: usize, min: usize },
    Swap { i: usize, min: usize },
    Done,
}

/// Grow a sorted prefix by swapping the minimum of the rest into place
#[derive(Debug, Clone)]
pub struct SelectionSort {
    ws: Workspace,
    state: State,
}

impl SelectionSort {
    pub fn new(array: Vec<Value>, speed: Option<Duration>) -> Self {
        SelectionSort {
            ws: Workspace::new(array, speed),
            state: State::PassStart { i: 0 },
        }
    }
}

impl FrameSequence for SelectionSort {
    fn next_step(&mut self) -> Option<Step> {
        match self.state {
            State::PassStart { i } if i + 1 < self.ws.len() => {
                self.state = State::Scan {
                    i,
                    j: i + 1,
                    min: i,
                };
                Some(Step::Continue(self.ws.frame(
                    vec![mark_minimum(i), disable_range(0..i)],
                    format!(
                        "Finding minimum in unsorted portion (starting from index {})",
                        i
                    ),
                )))
            }
            State::PassStart { .. } => {
                self.state = State::Done;
                Some(self.ws.sorted())
            }
            State::Scan { i, j, min } => {
                // the candidate is drawn against the minimum known before it
                let commands = vec![mark_minimum(min), highlight_index(j), disable_range(0..i)];
                let min = if self.ws.array[j] < self.ws.array[min] {
                    j
                } else {
                    min
                };
                self.state = if j + 1 < self.ws.len() {
                    State::Scan { i, j: j + 1, min }
                } else if min != i {
                    State::AboutToSwap { i, min }
                } else {
                    State::PassStart { i: i + 1 }
                };
                Some(Step::Continue(self.ws.frame(
                    commands,
                    format!(
                        "Current minimum: {} at index {}",
                        self.ws.array[min], min
                    ),
                )))
            }
            State::AboutToSwap { i, min } => {
                self.state = State::Swap { i, min };
                Some(Step::Continue(self.ws.colored(
                    vec![mark_swapped([i, min]), disable_range(0..i)],
                    format!(
                        "Swapping minimum {} with {}",
                        self.ws.array[min], self.ws.array[i]
                    ),
                    palette::MESSAGE_SWAP,
                )))
            }
            State::Swap { i, min } => {
                self.ws.array.swap(i, min);
                self.state = State::PassStart { i: i + 1 };
                Some(Step::Continue(self.ws.colored(
                    vec![mark_swapped_success([i, min]), disable_range(0..i)],
                    format!("Swapped! {} is now in position {}", self.ws.array[i], i),
                    palette::MESSAGE_SUCCESS,
                )))
            }
            State::Done => None,
        }
    }
}
