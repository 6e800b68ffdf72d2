//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark (medium contrast)
pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),       // bg0
        bg_focus: Color::Rgb(0x32, 0x30, 0x2f), // bg0_s
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),    // grey1
        accent: Color::Rgb(0x89, 0xb4, 0x82),   // aqua
        divider: Color::Rgb(0x7c, 0x6f, 0x64),  // grey0
        selected: Color::Rgb(0xd8, 0xa6, 0x57), // yellow
        unselected: Color::Rgb(0xa8, 0x99, 0x84),
    }
}
