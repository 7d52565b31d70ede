//! Frames: one unit of algorithm progress

use super::command::VisualCommand;
use crate::value::Value;
use ratatui::style::Color;
use std::fmt;
use std::time::Duration;

/// A line of narration with an optional color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub color: Option<Color>,
}

impl Message {
    pub fn plain(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Message {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// The final answer of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Search hit at this index
    Found(usize),
    /// Search miss; shown as the `-1` sentinel
    NotFound,
    /// The sorted array
    Sorted(Vec<Value>),
}

impl Outcome {
    /// Everything except a search miss counts as success
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::NotFound)
    }

    /// Search result as an index with the `-1` sentinel, `None` for sorts
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Outcome::Found(index) => i64::try_from(*index).ok(),
            Outcome::NotFound => Some(-1),
            Outcome::Sorted(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(index) => write!(f, "{}", index),
            Outcome::NotFound => write!(f, "-1"),
            Outcome::Sorted(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// One emitted step of a run.
///
/// `array` is a snapshot of the working array taken when the frame was
/// produced, so a retained frame keeps showing its own moment of the run.
/// `outcome` and `completion_message` are only set on terminal frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub array: Vec<Value>,
    pub commands: Vec<VisualCommand>,
    pub message: Option<Message>,
    /// Suggested delay before the next frame
    pub speed: Option<Duration>,
    pub outcome: Option<Outcome>,
    pub completion_message: Option<String>,
}

impl Frame {
    pub fn new(array: &[Value], speed: Option<Duration>) -> Self {
        Frame {
            array: array.to_vec(),
            commands: Vec::new(),
            message: None,
            speed,
            outcome: None,
            completion_message: None,
        }
    }

    pub fn with_commands(mut self, commands: Vec<VisualCommand>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_speed(mut self, speed: Option<Duration>) -> Self {
        self.speed = speed;
        self
    }

    /// Turn this frame into a terminal frame
    pub fn finish(mut self, outcome: Outcome, completion: impl Into<String>) -> Self {
        self.outcome = Some(outcome);
        self.completion_message = Some(completion.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Text of the narration, if any
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::values;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Found(4).to_string(), "4");
        assert_eq!(Outcome::NotFound.to_string(), "-1");
        assert_eq!(Outcome::Sorted(values(&[-2, 0, 3])).to_string(), "[-2, 0, 3]");
        let decimals = vec!["0.5".parse().unwrap(), Value::from(2)];
        assert_eq!(Outcome::Sorted(decimals).to_string(), "[0.5, 2]");
        assert_eq!(Outcome::Sorted(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_outcome_index_sentinel() {
        assert_eq!(Outcome::NotFound.as_index(), Some(-1));
        assert_eq!(Outcome::Found(2).as_index(), Some(2));
        assert_eq!(Outcome::Sorted(values(&[1])).as_index(), None);
        assert!(!Outcome::NotFound.is_success());
    }

    #[test]
    fn test_frame_snapshot_is_independent() {
        let mut working = values(&[3, 1, 2]);
        let frame = Frame::new(&working, None);
        working.swap(0, 1);
        assert_eq!(frame.array, values(&[3, 1, 2]));
    }

    #[test]
    fn test_finish_marks_terminal() {
        let frame = Frame::new(&[], None);
        assert!(!frame.is_terminal());
        let frame = frame.finish(Outcome::NotFound, "Element not found");
        assert!(frame.is_terminal());
        assert_eq!(frame.completion_message.as_deref(), Some("Element not found"));
    }
}
