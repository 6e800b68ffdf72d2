//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2a, 0x36),       // Background
        bg_focus: Color::Rgb(0x44, 0x47, 0x5a), // Current Line
        status_bg: Color::Rgb(0x21, 0x22, 0x2c),
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),       // Foreground
        muted: Color::Rgb(0x62, 0x72, 0xa4),    // Comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9),   // Purple
        divider: Color::Rgb(0x62, 0x72, 0xa4),
        selected: Color::Rgb(0x50, 0xfa, 0x7b), // Green
        unselected: Color::Rgb(0x7a, 0x7c, 0x8d),
    }
}
