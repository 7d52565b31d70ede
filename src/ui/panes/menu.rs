//! Algorithm menu grouped by topic

use super::utils::{clamp_scroll, follow_cursor, pane_block};
use crate::registry::TopicGroup;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Menu cursor and the algorithm currently loaded in the parameter pane
pub struct MenuRenderData<'a> {
    pub topics: &'a [TopicGroup<'a>],
    /// Position of the cursor among algorithms, in menu order
    pub cursor: usize,
    /// Id of the loaded algorithm
    pub active: &'a str,
}

/// Render the algorithm menu
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    data: &MenuRenderData<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Algorithms ", is_focused);

    let mut items = Vec::new();
    let mut cursor_row = 0;
    let mut position = 0;
    for group in data.topics {
        if !items.is_empty() {
            items.push(ListItem::new(""));
        }
        items.push(ListItem::new(Line::from(Span::styled(
            group.topic.to_uppercase(),
            Style::default()
                .fg(DEFAULT_THEME.topic)
                .add_modifier(Modifier::BOLD),
        ))));

        for meta in &group.algorithms {
            let is_cursor = position == data.cursor;
            let is_active = meta.id == data.active;
            if is_cursor {
                cursor_row = items.len();
            }

            let marker = if is_active { "▶ " } else { "  " };
            let mut style = Style::default().fg(if is_active {
                DEFAULT_THEME.selected
            } else {
                DEFAULT_THEME.fg
            });
            if is_cursor && is_focused {
                style = style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }
            items.push(ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.selected)),
                Span::styled(meta.name, style),
            ])));
            position += 1;
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    follow_cursor(scroll_offset, cursor_row, visible_height);
    clamp_scroll(scroll_offset, items.len(), visible_height);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
