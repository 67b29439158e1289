use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,
    pub comment: Color,
    pub success: Color,
    pub error: Color,
    pub border: Color,
    pub current_line_bg: Color,
    pub type_name: Color,
    pub identifier: Color,
    pub expression: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),  // Blue
    comment: Color::Rgb(108, 112, 134),  // Grey
    success: Color::Rgb(166, 227, 161),  // Green
    error: Color::Rgb(243, 139, 168),    // Red
    border: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    type_name: Color::Rgb(148, 226, 213),  // Cyan
    identifier: Color::Rgb(249, 226, 175), // Yellow
    expression: Color::Rgb(250, 179, 135), // Orange
};
