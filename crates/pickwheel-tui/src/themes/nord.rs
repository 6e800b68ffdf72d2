//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Nord default theme
pub fn default() -> Theme {
    Theme {
        // Polar Night
        bg: Color::Rgb(0x2e, 0x34, 0x40),       // nord0
        bg_focus: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        status_bg: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        // Snow Storm
        fg: Color::Rgb(0xec, 0xef, 0xf4),       // nord6
        muted: Color::Rgb(0x5e, 0x68, 0x7a),    // nord3 lighter
        // Frost
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),   // nord7
        divider: Color::Rgb(0x4c, 0x56, 0x6a),  // nord3
        selected: Color::Rgb(0x88, 0xc0, 0xd0), // nord8
        unselected: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
    }
}
