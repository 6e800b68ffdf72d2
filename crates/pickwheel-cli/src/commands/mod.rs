pub mod config;
pub mod demo;
pub mod pick;
pub mod run;

use pickwheel_core::AppConfig;
use pickwheel_tui::{apply_picker_colors, load_theme, Theme};

/// Theme from config, with the picker's own colours applied on top
pub fn theme_for(config: &AppConfig) -> Theme {
    apply_picker_colors(load_theme(&config.ui.theme), &config.picker)
}
