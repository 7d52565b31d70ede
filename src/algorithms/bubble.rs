//! Bubble sort runner

use super::{FrameSequence, Step, Workspace};
use crate::value::Value;
use crate::visual::command::{disable_range, highlight_multiple, mark_swapped, mark_swapped_success};
use crate::visual::palette;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Compare { pass: usize, j: usize },
    AboutToSwap { pass: usize, j: usize },
    Swap { pass: usize, j: usize },
    Finish,
    Done,
}

/// Repeatedly swap adjacent out-of-order pairs.
///
/// Pass `i` compares pairs `(j, j + 1)` for `j` in `0..n - 1 - i`; the last
/// `i` cells are already in place and shown faded. A pass with no swaps ends
/// the sort early.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    ws: Workspace,
    state: State,
    swapped_this_pass: bool,
}

impl BubbleSort {
    pub fn new(array: Vec<Value>, speed: Option<Duration>) -> Self {
        let state = if array.len() < 2 {
            State::Finish
        } else {
            State::Compare { pass: 0, j: 0 }
        };
        BubbleSort {
            ws: Workspace::new(array, speed),
            state,
            swapped_this_pass: false,
        }
    }

    /// State after finishing pair `j` of `pass`
    fn advance(&mut self, pass: usize, j: usize) -> State {
        let n = self.ws.len();
        if j + 1 < n - 1 - pass {
            return State::Compare { pass, j: j + 1 };
        }
        if !self.swapped_this_pass || pass + 1 >= n - 1 {
            return State::Finish;
        }
        self.swapped_this_pass = false;
        State::Compare {
            pass: pass + 1,
            j: 0,
        }
    }

    fn sorted_suffix(&self, pass: usize) -> std::ops::Range<usize> {
        let n = self.ws.len();
        n - pass..n
    }
}

impl FrameSequence for BubbleSort {
    fn next_step(&mut self) -> Option<Step> {
        match self.state {
            State::Compare { pass, j } => {
                let (a, b) = (self.ws.array[j], self.ws.array[j + 1]);
                self.state = if a > b {
                    State::AboutToSwap { pass, j }
                } else {
                    self.advance(pass, j)
                };
                Some(Step::Continue(self.ws.frame(
                    vec![
                        highlight_multiple([j, j + 1]),
                        disable_range(self.sorted_suffix(pass)),
                    ],
                    format!("Comparing {} and {}", a, b),
                )))
            }
            State::AboutToSwap { pass, j } => {
                self.state = State::Swap { pass, j };
                Some(Step::Continue(self.ws.colored(
                    vec![
                        mark_swapped([j, j + 1]),
                        disable_range(self.sorted_suffix(pass)),
                    ],
                    format!("Swapping {} and {}", self.ws.array[j], self.ws.array[j + 1]),
                    palette::MESSAGE_SWAP,
                )))
            }
            State::Swap { pass, j } => {
                self.ws.array.swap(j, j + 1);
                self.swapped_this_pass = true;
                let frame = self.ws.colored(
                    vec![
                        mark_swapped_success([j, j + 1]),
                        disable_range(self.sorted_suffix(pass)),
                    ],
                    format!(
                        "Swapped! New order: {}, {}",
                        self.ws.array[j],
                        self.ws.array[j + 1]
                    ),
                    palette::MESSAGE_SUCCESS,
                );
                self.state = self.advance(pass, j);
                Some(Step::Continue(frame))
            }
            State::Finish => {
                self.state = State::Done;
                Some(self.ws.sorted())
            }
            State::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::drain;
    use crate::value::values;
    use crate::visual::Outcome;

    #[test]
    fn test_sorted_input_single_pass() {
        let mut sort = BubbleSort::new(values(&[1, 2, 3, 4, 5]), None);
        let steps = drain(&mut sort);
        // n - 1 comparisons, then the terminal frame
        assert_eq!(steps.len(), 5);
        assert!(steps[..4]
            .iter()
            .all(|s| s.frame().text().is_some_and(|t| t.starts_with("Comparing"))));
    }

    #[test]
    fn test_swap_frames_bracket_the_swap() {
        let mut sort = BubbleSort::new(values(&[2, 1]), None);
        let steps = drain(&mut sort);
        assert_eq!(steps[0].frame().text(), Some("Comparing 2 and 1"));
        assert_eq!(steps[1].frame().text(), Some("Swapping 2 and 1"));
        assert_eq!(steps[1].frame().array, values(&[2, 1]));
        assert_eq!(steps[2].frame().text(), Some("Swapped! New order: 1, 2"));
        assert_eq!(steps[2].frame().array, values(&[1, 2]));
        assert_eq!(steps.len(), 4);
        assert_eq!(
            steps[3].frame().outcome,
            Some(Outcome::Sorted(values(&[1, 2])))
        );
    }

    #[test]
    fn test_reverse_input() {
        let mut sort = BubbleSort::new(values(&[5, 4, 3, 2, 1]), None);
        let steps = drain(&mut sort);
        assert_eq!(
            steps.last().and_then(|s| s.frame().outcome.clone()),
            Some(Outcome::Sorted(values(&[1, 2, 3, 4, 5])))
        );
    }

    #[test]
    fn test_sorted_suffix_disabled() {
        let mut sort = BubbleSort::new(values(&[3, 2, 1]), None);
        let steps = drain(&mut sort);
        // first compare of the second pass fades the last cell
        let second_pass = steps
            .iter()
            .filter(|s| s.frame().text().is_some_and(|t| t.starts_with("Comparing")))
            .nth(2)
            .map(|s| s.frame().clone());
        let frame = second_pass.unwrap();
        assert_eq!(frame.commands[1].indices, vec![2]);
    }

    #[test]
    fn test_trivial_inputs() {
        for input in [values(&[]), values(&[5])] {
            let mut sort = BubbleSort::new(input.clone(), None);
            let steps = drain(&mut sort);
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].frame().outcome, Some(Outcome::Sorted(input)));
        }
    }

    #[test]
    fn test_equal_elements_not_swapped() {
        let mut sort = BubbleSort::new(values(&[3, 3, 3]), None);
        let steps = drain(&mut sort);
        assert_eq!(steps.len(), 3);
    }
}
