use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub bar: Color,         // Bars outside the active subset
    pub bar_subset: Color,  // Bars inside the active subset
    pub compare: Color,     // Operands of the last comparison
    pub moved: Color,       // Elements touched by the last swap/insert/bucket move
    pub index_label: Color, // Register names under the bars
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for procedure headers
    bar: Color::Rgb(88, 91, 112),
    bar_subset: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175),
    moved: Color::Rgb(243, 139, 168),
    index_label: Color::Rgb(148, 226, 213), // Cyan/teal for index registers
};
