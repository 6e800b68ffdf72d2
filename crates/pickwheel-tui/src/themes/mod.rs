//! Theme registry and loader
//!
//! Built-in themes plus per-color overrides from the config file and the
//! picker's own text/divider colors.

pub(crate) mod dracula;
pub(crate) mod gruvbox;
pub(crate) mod nord;

use pickwheel_core::config::{PickerConfig, ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        // Short form: each digit is doubled
        3 => Some(Color::Rgb(channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox" | "gruvbox-dark" => gruvbox::dark(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Replace `slot` with the parsed color, keeping it on a bad value
fn override_color(slot: &mut Color, name: &str, value: Option<&String>) {
    let Some(hex) = value else {
        return;
    };
    match parse_hex_color(hex) {
        Some(color) => *slot = color,
        None => warn!("Invalid color '{}' for '{}', keeping theme color", hex, name),
    }
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    override_color(&mut theme.bg, "bg", overrides.bg.as_ref());
    override_color(&mut theme.bg_focus, "bg_focus", overrides.bg_focus.as_ref());
    override_color(&mut theme.fg, "fg", overrides.fg.as_ref());
    override_color(&mut theme.accent, "accent", overrides.accent.as_ref());
    override_color(&mut theme.muted, "muted", overrides.muted.as_ref());
    override_color(&mut theme.divider, "divider", overrides.divider.as_ref());
    override_color(&mut theme.selected, "selected", overrides.selected.as_ref());
    override_color(&mut theme.unselected, "unselected", overrides.unselected.as_ref());
    override_color(&mut theme.status_bg, "status_bg", overrides.status_bg.as_ref());
    theme
}

/// Colors set on the picker styles win over the theme
pub fn apply_picker_colors(mut theme: Theme, picker: &PickerConfig) -> Theme {
    override_color(&mut theme.selected, "picker.selected_text", picker.selected_text.text_color.as_ref());
    override_color(
        &mut theme.unselected,
        "picker.unselected_text",
        picker.unselected_text.text_color.as_ref(),
    );
    override_color(&mut theme.divider, "picker.divider", picker.divider.color.as_ref());
    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula"]
}
