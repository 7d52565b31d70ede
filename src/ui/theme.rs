use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub topic: Color,
    pub index: Color, // Ruler under the cells
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub selected: Color,
    pub return_value: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    topic: Color::Rgb(148, 226, 213),          // Cyan/teal for topic headers
    index: Color::Rgb(88, 91, 112),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the cursor row
    selected: Color::Rgb(249, 226, 175),
    return_value: Color::Rgb(245, 194, 231), // Pink for return values
};
