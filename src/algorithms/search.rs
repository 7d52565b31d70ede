//! Linear and binary search runners

use super::{FrameSequence, Step, Workspace};
use crate::value::Value;
use crate::visual::command::{disable_range, highlight_index, mark_found};
use crate::visual::{palette, Frame, Outcome, VisualCommand};
use std::time::Duration;

fn not_found(ws: &Workspace) -> Step {
    Step::Done(Frame::new(&ws.array, ws.speed).finish(Outcome::NotFound, "Element not found"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinearState {
    Scan { index: usize },
    Found { index: usize },
    Done,
}

/// Scan left to right for the first element equal to `target`
#[derive(Debug, Clone)]
pub struct LinearSearch {
    ws: Workspace,
    target: Value,
    state: LinearState,
}

impl LinearSearch {
    pub fn new(array: Vec<Value>, target: impl Into<Value>, speed: Option<Duration>) -> Self {
        LinearSearch {
            ws: Workspace::new(array, speed),
            target: target.into(),
            state: LinearState::Scan { index: 0 },
        }
    }
}

impl FrameSequence for LinearSearch {
    fn next_step(&mut self) -> Option<Step> {
        match self.state {
            LinearState::Scan { index } if index < self.ws.len() => {
                let value = self.ws.array[index];
                if value == self.target {
                    self.state = LinearState::Found { index };
                    Some(Step::Continue(self.ws.colored(
                        vec![highlight_index(index), mark_found(index)],
                        format!("Found target {} at index {}", self.target, index),
                        palette::MESSAGE_SUCCESS,
                    )))
                } else {
                    self.state = LinearState::Scan { index: index + 1 };
                    Some(Step::Continue(self.ws.frame(
                        vec![highlight_index(index)],
                        format!("Checking index {}: {} != {}", index, value, self.target),
                    )))
                }
            }
            LinearState::Scan { .. } => {
                self.state = LinearState::Done;
                Some(not_found(&self.ws))
            }
            LinearState::Found { index } => {
                self.state = LinearState::Done;
                Some(Step::Done(
                    Frame::new(&self.ws.array, self.ws.speed)
                        .with_commands(vec![highlight_index(index), mark_found(index)])
                        .finish(
                            Outcome::Found(index),
                            format!("Element found at index {}", index),
                        ),
                ))
            }
            LinearState::Done => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryState {
    /// Candidates are `left..right` (half-open)
    Probe { left: usize, right: usize },
    Found { middle: usize, left: usize, right: usize },
    Done,
}

/// Halve a sorted array around its midpoint until `target` is hit.
///
/// The input must already be sorted in non-decreasing order. This is not
/// checked: unsorted input yields some index or `-1` without failing.
#[derive(Debug, Clone)]
pub struct BinarySearch {
    ws: Workspace,
    target: Value,
    state: BinaryState,
}

impl BinarySearch {
    pub fn new(array: Vec<Value>, target: impl Into<Value>, speed: Option<Duration>) -> Self {
        let right = array.len();
        BinarySearch {
            ws: Workspace::new(array, speed),
            target: target.into(),
            state: BinaryState::Probe { left: 0, right },
        }
    }

    fn window(&self, middle: usize, left: usize, right: usize) -> Vec<VisualCommand> {
        vec![
            highlight_index(middle),
            disable_range(0..left),
            disable_range(right..self.ws.len()),
        ]
    }
}

impl FrameSequence for BinarySearch {
    fn next_step(&mut self) -> Option<Step> {
        match self.state {
            BinaryState::Probe { left, right } if left < right => {
                // floor((left + last) / 2) with last = right - 1
                let middle = left + (right - 1 - left) / 2;
                let value = self.ws.array[middle];
                let mut commands = self.window(middle, left, right);

                if value == self.target {
                    commands.push(mark_found(middle));
                    self.state = BinaryState::Found {
                        middle,
                        left,
                        right,
                    };
                    return Some(Step::Continue(self.ws.colored(
                        commands,
                        format!("Found target {} at index {}", self.target, middle),
                        palette::MESSAGE_SUCCESS,
                    )));
                }

                let direction = if value > self.target { ">" } else { "<" };
                self.state = if value > self.target {
                    BinaryState::Probe {
                        left,
                        right: middle,
                    }
                } else {
                    BinaryState::Probe {
                        left: middle + 1,
                        right,
                    }
                };
                Some(Step::Continue(self.ws.frame(
                    commands,
                    format!(
                        "Checking middle ({}): {} {} {}",
                        middle, value, direction, self.target
                    ),
                )))
            }
            BinaryState::Probe { .. } => {
                self.state = BinaryState::Done;
                Some(not_found(&self.ws))
            }
            BinaryState::Found {
                middle,
                left,
                right,
            } => {
                self.state = BinaryState::Done;
                let mut commands = self.window(middle, left, right);
                commands.push(mark_found(middle));
                Some(Step::Done(
                    Frame::new(&self.ws.array, self.ws.speed)
                        .with_commands(commands)
                        .finish(
                            Outcome::Found(middle),
                            format!("Element found at index {}", middle),
                        ),
                ))
            }
            BinaryState::Done => None,
        }
    }
}
