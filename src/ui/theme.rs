use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub used_block: Color,
    pub free_block: Color,
    pub coalesced_block: Color,
    pub block_edge: Color, // Separator line between stacked blocks
    pub label: Color,
    pub edge_free: Color, // Free-list links leaving free blocks
    pub edge_used: Color, // Links leaving used blocks
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 30),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    used_block: Color::Rgb(255, 77, 77),       // Red
    free_block: Color::Rgb(0, 255, 136),       // Light green
    coalesced_block: Color::Rgb(0, 102, 51),   // Dark green
    block_edge: Color::Rgb(235, 235, 235),
    label: Color::Rgb(255, 255, 255),
    edge_free: Color::Rgb(137, 220, 235), // Cyan
    edge_used: Color::Rgb(249, 226, 175), // Yellow
};

/// Mix `fg` over `bg` with opacity `alpha`.
///
/// Terminals have no alpha channel, so translucent strokes are pre-blended
/// against the pane background. Non-RGB colors are returned unchanged.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (f as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}
