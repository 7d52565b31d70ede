//! Visualization commands and their constructors
//!
//! A [`VisualCommand`] names a set of array indices and a [`StylePatch`] to lay
//! over them. Commands are plain data: every constructor here is pure, and a
//! command is never mutated once a runner has put it into a frame.
//!
//! Range constructors take half-open ranges. An empty or inverted range
//! produces an empty index set.

use super::palette;
use super::style::StylePatch;
use ratatui::style::Color;
use std::ops::Range;

/// What a command means, independent of how it is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Highlight,
    Found,
    /// Elements about to be swapped
    Swapping,
    /// Elements that were just swapped
    Swapped,
    Comparing,
    Disabled,
    Minimum,
    Pivot,
    PartitionBoundary,
    LessThanPivot,
    GreaterThanPivot,
    Subarray,
}

impl CommandKind {
    /// Short label used by legends
    pub fn label(self) -> &'static str {
        match self {
            CommandKind::Highlight => "current",
            CommandKind::Found => "found",
            CommandKind::Swapping => "swapping",
            CommandKind::Swapped => "swapped",
            CommandKind::Comparing => "comparing",
            CommandKind::Disabled => "excluded",
            CommandKind::Minimum => "minimum",
            CommandKind::Pivot => "pivot",
            CommandKind::PartitionBoundary => "boundary",
            CommandKind::LessThanPivot => "< pivot",
            CommandKind::GreaterThanPivot => ">= pivot",
            CommandKind::Subarray => "subarray",
        }
    }

    /// Representative color for legends
    pub fn swatch(self) -> Color {
        match self {
            CommandKind::Highlight => palette::HIGHLIGHT,
            CommandKind::Found => palette::FOUND_BACKGROUND,
            CommandKind::Swapping => palette::SWAPPING_BACKGROUND,
            CommandKind::Swapped => palette::SWAPPED_BACKGROUND,
            CommandKind::Comparing => palette::COMPARING_BACKGROUND,
            CommandKind::Disabled => palette::DISABLED_BACKGROUND,
            CommandKind::Minimum => palette::MINIMUM_BORDER,
            CommandKind::Pivot => palette::PIVOT_BACKGROUND,
            CommandKind::PartitionBoundary => palette::BOUNDARY_BACKGROUND,
            CommandKind::LessThanPivot => palette::LESS_BACKGROUND,
            CommandKind::GreaterThanPivot => palette::GREATER_BACKGROUND,
            CommandKind::Subarray => palette::SUBARRAY_BACKGROUND,
        }
    }
}

/// Style instruction for a set of indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualCommand {
    pub kind: CommandKind,
    pub indices: Vec<usize>,
    pub style: StylePatch,
}

impl VisualCommand {
    pub fn new(kind: CommandKind, indices: Vec<usize>, style: StylePatch) -> Self {
        VisualCommand {
            kind,
            indices,
            style,
        }
    }

    pub fn covers(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

const HIGHLIGHT_STYLE: StylePatch = StylePatch::new().border(palette::HIGHLIGHT).bold();

pub fn highlight_index(index: usize) -> VisualCommand {
    highlight_index_with(index, palette::HIGHLIGHT)
}

/// Highlight with a custom border color
pub fn highlight_index_with(index: usize, border: Color) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Highlight,
        vec![index],
        StylePatch::new().border(border).bold(),
    )
}

pub fn highlight_multiple(indices: impl IntoIterator<Item = usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Highlight,
        indices.into_iter().collect(),
        HIGHLIGHT_STYLE,
    )
}

pub fn mark_found(index: usize) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Found,
        vec![index],
        StylePatch::new()
            .background(palette::FOUND_BACKGROUND)
            .border(palette::FOUND_BORDER)
            .bold(),
    )
}

/// Elements about to be swapped
pub fn mark_swapped(indices: impl IntoIterator<Item = usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Swapping,
        indices.into_iter().collect(),
        StylePatch::new()
            .background(palette::SWAPPING_BACKGROUND)
            .border(palette::SWAPPING_BORDER)
            .bold(),
    )
}

/// Elements that have just been swapped (or settled in place)
pub fn mark_swapped_success(indices: impl IntoIterator<Item = usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Swapped,
        indices.into_iter().collect(),
        StylePatch::new()
            .background(palette::SWAPPED_BACKGROUND)
            .border(palette::SWAPPED_BORDER)
            .bold(),
    )
}

pub fn mark_comparing(indices: impl IntoIterator<Item = usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Comparing,
        indices.into_iter().collect(),
        StylePatch::new()
            .background(palette::COMPARING_BACKGROUND)
            .border(palette::HIGHLIGHT)
            .bold(),
    )
}

/// Fade out `range` (half-open)
pub fn disable_range(range: Range<usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Disabled,
        range.collect(),
        StylePatch::new()
            .background(palette::DISABLED_BACKGROUND)
            .opacity(palette::DISABLED_OPACITY),
    )
}

pub fn mark_minimum(index: usize) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Minimum,
        vec![index],
        StylePatch::new().border(palette::MINIMUM_BORDER).bold(),
    )
}

pub fn mark_pivot(index: usize) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Pivot,
        vec![index],
        StylePatch::new()
            .background(palette::PIVOT_BACKGROUND)
            .border(palette::PIVOT_BORDER)
            .color(palette::CELL_TEXT)
            .bold(),
    )
}

pub fn mark_partition_boundary(index: usize) -> VisualCommand {
    VisualCommand::new(
        CommandKind::PartitionBoundary,
        vec![index],
        StylePatch::new()
            .background(palette::BOUNDARY_BACKGROUND)
            .border(palette::BOUNDARY_BORDER)
            .bold(),
    )
}

pub fn mark_less_than_pivot(range: Range<usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::LessThanPivot,
        range.collect(),
        StylePatch::new()
            .background(palette::LESS_BACKGROUND)
            .border(palette::LESS_BORDER)
            .bold(),
    )
}

pub fn mark_greater_than_pivot(range: Range<usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::GreaterThanPivot,
        range.collect(),
        StylePatch::new()
            .background(palette::GREATER_BACKGROUND)
            .border(palette::GREATER_BORDER)
            .bold(),
    )
}

/// Outline the subarray currently being worked on (half-open)
pub fn mark_current_subarray(range: Range<usize>) -> VisualCommand {
    VisualCommand::new(
        CommandKind::Subarray,
        range.collect(),
        StylePatch::new()
            .border(palette::SUBARRAY_BORDER)
            .background(palette::SUBARRAY_BACKGROUND)
            .opacity(palette::SUBARRAY_OPACITY),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_range_half_open() {
        assert_eq!(disable_range(2..5).indices, vec![2, 3, 4]);
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        assert!(disable_range(0..0).is_empty());
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = disable_range(6..2);
        assert!(inverted.is_empty());
        assert!(mark_current_subarray(3..3).is_empty());
        assert!(mark_less_than_pivot(4..1).is_empty());
    }

    #[test]
    fn test_constructors_are_pure() {
        assert_eq!(mark_swapped([1, 2]), mark_swapped([1, 2]));
        assert_eq!(highlight_index(4), highlight_multiple([4]));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(mark_pivot(0).kind, CommandKind::Pivot);
        assert_eq!(mark_swapped_success([0]).kind, CommandKind::Swapped);
        assert_eq!(mark_comparing([0, 1]).kind, CommandKind::Comparing);
        assert!(mark_found(3).covers(3));
        assert!(!mark_found(3).covers(2));
    }
}
