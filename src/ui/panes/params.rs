//! Parameter pane: description, editable fields and the return value

use super::utils::pane_block;
use crate::driver::Completion;
use crate::registry::AlgorithmMeta;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use rustc_hash::FxHashMap;

pub struct ParamsRenderData<'a> {
    pub meta: &'a AlgorithmMeta,
    /// Current field text by parameter id
    pub inputs: &'a FxHashMap<String, String>,
    /// Selected field
    pub field: usize,
    /// Edit buffer when the selected field is being edited
    pub editing: Option<&'a str>,
    pub completion: Option<&'a Completion>,
}

/// Render the parameter pane
pub fn render_params_pane(
    frame: &mut Frame,
    area: Rect,
    data: &ParamsRenderData<'_>,
    is_focused: bool,
) {
    let title = format!(" {} ", data.meta.name);
    let block = pane_block(&title, is_focused);

    let mut lines = vec![
        Line::from(Span::styled(
            data.meta.description,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(""),
    ];

    let label_width = data
        .meta
        .params
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(0);

    for (i, spec) in data.meta.params.iter().enumerate() {
        let is_selected = i == data.field && is_focused;
        let (value, is_editing) = match data.editing {
            Some(buffer) if i == data.field => (format!("{}▏", buffer), true),
            _ => (
                data.inputs.get(spec.id).cloned().unwrap_or_default(),
                false,
            ),
        };

        let label_style = if is_selected {
            Style::default()
                .fg(DEFAULT_THEME.selected)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.primary)
        };
        let value_style = if is_editing {
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.current_line_bg)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        let mut spans = vec![
            Span::styled(if is_selected { "› " } else { "  " }, label_style),
            Span::styled(format!("{:<width$}  ", spec.label, width = label_width), label_style),
            Span::styled(value, value_style),
        ];
        if let (Some(min), Some(max)) = (spec.min(), spec.max()) {
            spans.push(Span::styled(
                format!("  ({}..={})", min, max),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let result = match data.completion {
        Some(completion) if completion.algorithm == data.meta.id => Span::styled(
            completion.outcome.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.return_value)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::styled("-", Style::default().fg(DEFAULT_THEME.comment)),
    };
    lines.push(Line::from(vec![
        Span::styled("  Return value: ", Style::default().fg(DEFAULT_THEME.primary)),
        result,
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
