//! Cell styles and the ordered merge that applies commands to them

use super::command::VisualCommand;
use super::palette;
use ratatui::style::Color;

/// Fully resolved style of one array cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub border: Color,
    pub background: Color,
    pub color: Color,
    pub bold: bool,
    /// Percent, 0..=100
    pub opacity: u8,
}

pub const DEFAULT_CELL_STYLE: CellStyle = CellStyle {
    border: palette::CELL_BORDER,
    background: palette::CELL_BACKGROUND,
    color: palette::CELL_TEXT,
    bold: false,
    opacity: 100,
};

impl Default for CellStyle {
    fn default() -> Self {
        DEFAULT_CELL_STYLE
    }
}

impl CellStyle {
    /// Whether the cell should be drawn faded
    pub fn is_dimmed(&self) -> bool {
        self.opacity < 100
    }
}

/// A partial style: only the fields that are `Some` override the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StylePatch {
    pub border: Option<Color>,
    pub background: Option<Color>,
    pub color: Option<Color>,
    pub bold: Option<bool>,
    pub opacity: Option<u8>,
}

impl StylePatch {
    pub const fn new() -> Self {
        StylePatch {
            border: None,
            background: None,
            color: None,
            bold: None,
            opacity: None,
        }
    }

    pub const fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub const fn opacity(mut self, percent: u8) -> Self {
        self.opacity = Some(if percent > 100 { 100 } else { percent });
        self
    }

    /// Overwrite the fields this patch sets
    pub fn apply_to(&self, style: &mut CellStyle) {
        if let Some(border) = self.border {
            style.border = border;
        }
        if let Some(background) = self.background {
            style.background = background;
        }
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(opacity) = self.opacity {
            style.opacity = opacity;
        }
    }
}

/// Resolve the style of every cell of an array of length `len`.
///
/// Starts from [`DEFAULT_CELL_STYLE`] and applies `commands` in order, so a
/// later command wins per field and per index. Indices `>= len` are ignored.
pub fn resolve_styles(len: usize, commands: &[VisualCommand]) -> Vec<CellStyle> {
    let mut styles = vec![DEFAULT_CELL_STYLE; len];
    for command in commands {
        for &index in &command.indices {
            if let Some(style) = styles.get_mut(index) {
                command.style.apply_to(style);
            }
        }
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::command::{disable_range, highlight_index, mark_found, mark_pivot};

    #[test]
    fn test_default_when_no_commands() {
        let styles = resolve_styles(3, &[]);
        assert_eq!(styles, vec![DEFAULT_CELL_STYLE; 3]);
    }

    #[test]
    fn test_later_command_wins_per_field() {
        // highlight sets border + bold, found then overrides border and adds background
        let styles = resolve_styles(2, &[highlight_index(1), mark_found(1)]);
        assert_eq!(styles[1].border, palette::FOUND_BORDER);
        assert_eq!(styles[1].background, palette::FOUND_BACKGROUND);
        assert!(styles[1].bold);
        assert_eq!(styles[0], DEFAULT_CELL_STYLE);
    }

    #[test]
    fn test_untouched_fields_survive() {
        let styles = resolve_styles(4, &[disable_range(0..4), highlight_index(2)]);
        assert_eq!(styles[2].background, palette::DISABLED_BACKGROUND);
        assert_eq!(styles[2].opacity, palette::DISABLED_OPACITY);
        assert_eq!(styles[2].border, palette::HIGHLIGHT);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let styles = resolve_styles(2, &[mark_pivot(7)]);
        assert_eq!(styles.len(), 2);
        assert!(styles.iter().all(|s| *s == DEFAULT_CELL_STYLE));
    }

    #[test]
    fn test_opacity_clamped() {
        let patch = StylePatch::new().opacity(250);
        assert_eq!(patch.opacity, Some(100));
    }
}
