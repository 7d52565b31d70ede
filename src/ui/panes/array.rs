//! Array pane: styled cells, index ruler, narration and completion line
//!
//! Cells wrap onto as many rows as the pane width requires. Each row of cells
//! is followed by its index ruler.

use super::utils::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use crate::visual::{palette, ArrayView, Cell, Message};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct ArrayRenderData<'a> {
    pub view: Option<&'a ArrayView>,
    /// 1-based frame number and frames recorded so far
    pub position: Option<(usize, usize)>,
    /// Showing an older frame from history rather than the live one
    pub is_review: bool,
}

/// Span for one cell: value between border-colored brackets
fn cell_spans(cell: &Cell, width: usize) -> [Span<'static>; 3] {
    let mut value_style = Style::default()
        .fg(cell.style.color)
        .bg(cell.style.background);
    let mut border_style = Style::default().fg(cell.style.border);
    if cell.style.bold {
        value_style = value_style.add_modifier(Modifier::BOLD);
        border_style = border_style.add_modifier(Modifier::BOLD);
    }
    if cell.style.is_dimmed() {
        value_style = value_style.add_modifier(Modifier::DIM);
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    [
        Span::styled("[", border_style),
        Span::styled(format!("{:^width$}", cell.value, width = width), value_style),
        Span::styled("]", border_style),
    ]
}

fn message_line(message: &Message) -> Line<'static> {
    Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(message.color.unwrap_or(palette::MESSAGE_DEFAULT)),
    ))
}

/// Every line of the view at the given inner width
fn view_lines(view: &ArrayView, inner_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if view.cells.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        let value_width = view
            .cells
            .iter()
            .map(|c| c.value.to_string().len())
            .chain(std::iter::once((view.cells.len() - 1).to_string().len()))
            .max()
            .unwrap_or(1)
            + 2;
        // brackets plus one column of gap
        let stride = value_width + 3;
        let per_row = (inner_width / stride).max(1);

        for (row, chunk) in view.cells.chunks(per_row).enumerate() {
            let mut cells = Vec::with_capacity(chunk.len() * 4);
            let mut ruler = Vec::with_capacity(chunk.len());
            for (offset, cell) in chunk.iter().enumerate() {
                cells.extend(cell_spans(cell, value_width));
                cells.push(Span::raw(" "));
                ruler.push(Span::styled(
                    format!(" {:^width$}  ", row * per_row + offset, width = value_width),
                    Style::default().fg(DEFAULT_THEME.index),
                ));
            }
            lines.push(Line::from(cells));
            lines.push(Line::from(ruler));
        }
    }

    lines.push(Line::from(""));
    if let Some(message) = &view.message {
        lines.push(message_line(message));
    }
    if let Some(completion) = &view.completion {
        let mut line = message_line(completion);
        line = line.patch_style(Style::default().add_modifier(Modifier::BOLD));
        lines.push(line);
    }

    if !view.legend.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for kind in &view.legend {
            spans.push(Span::styled("■ ", Style::default().fg(kind.swatch())));
            spans.push(Span::styled(
                format!("{}  ", kind.label()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the array pane
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    data: &ArrayRenderData<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match data.position {
        Some((current, total)) if data.is_review => {
            format!(" Visualization (frame {}/{}, history) ", current, total)
        }
        Some((current, _)) => format!(" Visualization (frame {}) ", current),
        None => " Visualization ".to_string(),
    };
    let block = pane_block(&title, is_focused);

    let Some(view) = data.view else {
        let paragraph = Paragraph::new("Select an algorithm and press s to start")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let lines = view_lines(view, inner_width);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();
    frame.render_widget(Paragraph::new(visible).block(block), area);
}
