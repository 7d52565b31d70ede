//! Named colors used by visualization commands and narration.
//!
//! These are the cell colors of the array view, kept apart from the TUI chrome
//! colors in [`crate::ui::theme`].

use ratatui::style::Color;

pub const CELL_BACKGROUND: Color = Color::Rgb(34, 34, 34);
pub const CELL_BORDER: Color = Color::Rgb(68, 68, 68);
pub const CELL_TEXT: Color = Color::Rgb(255, 255, 255);

pub const HIGHLIGHT: Color = Color::Rgb(255, 179, 71); // Amber

pub const FOUND_BACKGROUND: Color = Color::Rgb(46, 125, 50);
pub const FOUND_BORDER: Color = Color::Rgb(76, 175, 80);

pub const SWAPPING_BACKGROUND: Color = Color::Rgb(255, 107, 53);
pub const SWAPPING_BORDER: Color = Color::Rgb(255, 140, 66);

pub const SWAPPED_BACKGROUND: Color = Color::Rgb(68, 163, 68);
pub const SWAPPED_BORDER: Color = Color::Rgb(76, 175, 80);

pub const COMPARING_BACKGROUND: Color = Color::Rgb(68, 68, 68);

pub const DISABLED_BACKGROUND: Color = Color::Rgb(24, 24, 24);
pub const DISABLED_OPACITY: u8 = 50;

pub const MINIMUM_BORDER: Color = Color::Rgb(84, 84, 255);

pub const PIVOT_BACKGROUND: Color = Color::Rgb(156, 39, 176);
pub const PIVOT_BORDER: Color = Color::Rgb(233, 30, 99);

pub const BOUNDARY_BACKGROUND: Color = Color::Rgb(255, 152, 0);
pub const BOUNDARY_BORDER: Color = Color::Rgb(245, 124, 0);

pub const LESS_BACKGROUND: Color = Color::Rgb(76, 175, 80);
pub const LESS_BORDER: Color = Color::Rgb(56, 142, 60);

pub const GREATER_BACKGROUND: Color = Color::Rgb(244, 67, 54);
pub const GREATER_BORDER: Color = Color::Rgb(211, 47, 47);

pub const SUBARRAY_BACKGROUND: Color = Color::Rgb(25, 118, 210);
pub const SUBARRAY_BORDER: Color = Color::Rgb(33, 150, 243);
pub const SUBARRAY_OPACITY: u8 = 80;

// Narration
pub const MESSAGE_DEFAULT: Color = Color::Rgb(255, 255, 255);
pub const MESSAGE_SUCCESS: Color = Color::Rgb(144, 238, 144);
pub const MESSAGE_FAILURE: Color = Color::Rgb(255, 111, 111);
pub const MESSAGE_SWAP: Color = SWAPPING_BORDER;
pub const MESSAGE_PIVOT: Color = PIVOT_BACKGROUND;
pub const MESSAGE_PARTITIONED: Color = PIVOT_BORDER;
pub const MESSAGE_LEFT: Color = LESS_BACKGROUND;
pub const MESSAGE_RIGHT: Color = GREATER_BACKGROUND;
