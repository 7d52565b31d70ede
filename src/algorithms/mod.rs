//! Step-by-step algorithm runners
//!
//! Every runner is an explicit state machine implementing [`FrameSequence`].
//! A runner owns its working array together with its loop indices (or, for
//! quick sort, a work stack standing in for recursion) and each call to
//! [`FrameSequence::next_step`] resumes from where the previous one stopped,
//! runs up to the next point worth showing, and hands back one frame.
//!
//! # Contract
//!
//! - The sequence is finite. Its last step is [`Step::Done`] carrying a
//!   terminal frame with an [`Outcome`](crate::visual::Outcome); after that
//!   `next_step` returns `None` forever.
//! - Identical inputs give identical sequences: no randomness, no clocks.
//! - Comparisons are strict, so equal elements are never swapped past each
//!   other.
//! - Empty and single-element arrays are valid and finish immediately.
//!
//! # Runners
//!
//! - [`search`]: linear and binary search
//! - [`bubble`], [`selection`], [`insertion`], [`quick`]: in-place sorts

pub mod bubble;
pub mod insertion;
pub mod quick;
pub mod search;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use search::{BinarySearch, LinearSearch};
pub use selection::SelectionSort;

use crate::value::Value;
use crate::visual::{Frame, Message, Outcome, VisualCommand};
use ratatui::style::Color;
use std::time::Duration;

/// One pull from a [`FrameSequence`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A narrative frame; more will follow
    Continue(Frame),
    /// The terminal frame carrying the result
    Done(Frame),
}

impl Step {
    pub fn frame(&self) -> &Frame {
        match self {
            Step::Continue(frame) | Step::Done(frame) => frame,
        }
    }

    pub fn into_frame(self) -> Frame {
        match self {
            Step::Continue(frame) | Step::Done(frame) => frame,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Lazy, single-pass sequence of frames
pub trait FrameSequence {
    /// Resume the algorithm up to its next frame.
    ///
    /// Returns `None` once the terminal frame has been handed out.
    fn next_step(&mut self) -> Option<Step>;
}

impl<S: FrameSequence + ?Sized> FrameSequence for Box<S> {
    fn next_step(&mut self) -> Option<Step> {
        (**self).next_step()
    }
}

/// Pull every remaining step
pub fn drain(sequence: &mut dyn FrameSequence) -> Vec<Step> {
    std::iter::from_fn(|| sequence.next_step()).collect()
}

/// Working array plus frame construction helpers shared by the runners
#[derive(Debug, Clone)]
pub(crate) struct Workspace {
    pub(crate) array: Vec<Value>,
    pub(crate) speed: Option<Duration>,
}

impl Workspace {
    pub(crate) fn new(array: Vec<Value>, speed: Option<Duration>) -> Self {
        Workspace { array, speed }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn frame(&self, commands: Vec<VisualCommand>, text: String) -> Frame {
        Frame::new(&self.array, self.speed)
            .with_commands(commands)
            .with_message(Message::plain(text))
    }

    pub(crate) fn colored(
        &self,
        commands: Vec<VisualCommand>,
        text: String,
        color: Color,
    ) -> Frame {
        Frame::new(&self.array, self.speed)
            .with_commands(commands)
            .with_message(Message::colored(text, color))
    }

    /// Delay for frames that summarize a partition
    pub(crate) fn slow_speed(&self) -> Option<Duration> {
        self.speed.map(|speed| speed * 3 / 2)
    }

    /// Terminal frame for the sorts
    pub(crate) fn sorted(&self) -> Step {
        Step::Done(
            Frame::new(&self.array, self.speed)
                .finish(Outcome::Sorted(self.array.clone()), "Array is sorted"),
        )
    }
}
