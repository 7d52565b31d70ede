//! Generic array visualizer
//!
//! [`visualize_array`] turns any standard [`Frame`] into an [`ArrayView`]: one
//! styled cell per element plus the narration and, for terminal frames, the
//! completion line. Concrete outputs (the TUI pane, the headless printer) only
//! ever draw views.

use super::command::CommandKind;
use super::frame::{Frame, Message};
use super::palette;
use super::style::{resolve_styles, CellStyle};
use crate::value::Value;
use std::mem;

/// Signature shared by every frame visualizer in the registry
pub type Visualizer = fn(&Frame, bool) -> ArrayView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: Value,
    pub style: CellStyle,
}

/// Render-ready picture of one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayView {
    pub cells: Vec<Cell>,
    pub message: Option<Message>,
    pub completion: Option<Message>,
    /// Command kinds present in the frame, first occurrence order
    pub legend: Vec<CommandKind>,
    pub is_terminal: bool,
}

impl ArrayView {
    /// Rough heap footprint, used to bound the frame history
    pub fn estimated_size(&self) -> usize {
        let text = |m: &Option<Message>| m.as_ref().map_or(0, |m| m.text.len());
        mem::size_of::<ArrayView>()
            + self.cells.len() * mem::size_of::<Cell>()
            + self.legend.len() * mem::size_of::<CommandKind>()
            + text(&self.message)
            + text(&self.completion)
    }
}

/// Build the view for `frame`. `is_terminal` adds the completion line.
pub fn visualize_array(frame: &Frame, is_terminal: bool) -> ArrayView {
    let styles = resolve_styles(frame.array.len(), &frame.commands);
    let cells = frame
        .array
        .iter()
        .zip(styles)
        .map(|(&value, style)| Cell { value, style })
        .collect();

    let mut legend = Vec::new();
    for command in &frame.commands {
        if !command.is_empty() && !legend.contains(&command.kind) {
            legend.push(command.kind);
        }
    }

    let completion = if is_terminal {
        frame.outcome.as_ref().map(|outcome| {
            let success = outcome.is_success();
            let color = if success {
                palette::MESSAGE_SUCCESS
            } else {
                palette::MESSAGE_FAILURE
            };
            let text = match &frame.completion_message {
                Some(text) => text.clone(),
                None if success => format!("Result: {}", outcome),
                None => "Operation completed".to_string(),
            };
            Message::colored(text, color)
        })
    } else {
        None
    };

    ArrayView {
        cells,
        message: frame.message.clone(),
        completion,
        legend,
        is_terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::command::{highlight_index, mark_found};
    use crate::visual::frame::Outcome;
    use crate::visual::style::DEFAULT_CELL_STYLE;
    use crate::value::values;

    #[test]
    fn test_empty_frame() {
        let view = visualize_array(&Frame::new(&[], None), false);
        assert!(view.cells.is_empty());
        assert!(view.message.is_none());
        assert!(view.completion.is_none());
    }

    #[test]
    fn test_cells_follow_commands() {
        let frame = Frame::new(&values(&[5, 6, 7]), None).with_commands(vec![highlight_index(1)]);
        let view = visualize_array(&frame, false);
        assert_eq!(view.cells[0].style, DEFAULT_CELL_STYLE);
        assert_eq!(view.cells[1].style.border, palette::HIGHLIGHT);
        assert_eq!(view.cells[1].value, Value::from(6));
        assert_eq!(view.legend, vec![CommandKind::Highlight]);
    }

    #[test]
    fn test_completion_colors() {
        let hit = Frame::new(&values(&[1]), None)
            .with_commands(vec![mark_found(0)])
            .finish(Outcome::Found(0), "Element found at index 0");
        let view = visualize_array(&hit, true);
        let completion = view.completion.unwrap();
        assert_eq!(completion.color, Some(palette::MESSAGE_SUCCESS));
        assert_eq!(completion.text, "Element found at index 0");

        let mut miss = Frame::new(&values(&[1]), None).finish(Outcome::NotFound, "");
        miss.completion_message = None;
        let completion = visualize_array(&miss, true).completion.unwrap();
        assert_eq!(completion.color, Some(palette::MESSAGE_FAILURE));
        assert_eq!(completion.text, "Operation completed");
    }

    #[test]
    fn test_completion_only_when_terminal() {
        let frame = Frame::new(&values(&[1]), None).finish(Outcome::Found(0), "done");
        assert!(visualize_array(&frame, false).completion.is_none());
    }
}
