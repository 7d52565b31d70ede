//! Status bar rendering with keybindings and state indicators

use crate::driver::DriverState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub state: DriverState,
    /// The last run reached its terminal frame
    pub is_finished: bool,
    pub is_review: bool,
    pub is_editing: bool,
}

/// Badge text and color for the current state
fn badge(data: &StatusRenderData<'_>) -> (&'static str, Color) {
    if data.is_editing {
        (" ⌨ EDIT ", DEFAULT_THEME.secondary)
    } else if data.is_review {
        (" ◀ HISTORY ", DEFAULT_THEME.topic)
    } else {
        match data.state {
            DriverState::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
            DriverState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
            DriverState::Idle if data.is_finished => (" DONE ", DEFAULT_THEME.success),
            DriverState::Idle => (" IDLE ", DEFAULT_THEME.comment),
        }
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let (badge_text, badge_color) = badge(data);
    let left_spans = vec![
        Span::styled(
            badge_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    badge_color
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let keys: &[(&str, &str)] = if data.is_editing {
        &[("↵", "commit"), ("esc", "cancel")]
    } else {
        &[
            ("s", "start"),
            ("⎵", "pause/resume"),
            ("x", "stop"),
            ("←/→", "history"),
            ("↵", "select/edit"),
            ("q", "quit"),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
