//! Helpers shared by the panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full
pub(super) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Scroll just enough to keep row `cursor` inside the window
pub(super) fn follow_cursor(offset: &mut usize, cursor: usize, visible: usize) {
    if cursor < *offset {
        *offset = cursor;
    } else if cursor >= *offset + visible {
        *offset = cursor + 1 - visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 10;
        clamp_scroll(&mut offset, 12, 5);
        assert_eq!(offset, 7);
        clamp_scroll(&mut offset, 3, 5);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_follow_cursor() {
        let mut offset = 0;
        follow_cursor(&mut offset, 6, 4);
        assert_eq!(offset, 3);
        follow_cursor(&mut offset, 1, 4);
        assert_eq!(offset, 1);
    }
}
