use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg: Color,
    /// Background of the focused wheel
    pub bg_focus: Color,
    pub status_bg: Color,

    // Foreground colors
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,

    // Wheel colors
    pub divider: Color,
    pub selected: Color,
    pub unselected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}
