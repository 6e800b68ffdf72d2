use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Axis a picker scrolls along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Text style for one end of the selected/unselected interpolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// CSS-like font weight (100 thin .. 900 black)
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    /// Text size; `None` falls back to `PickerConfig::default_text_size`
    #[serde(default)]
    pub text_size: Option<f32>,
    /// Hex colour; `None` falls back to the theme
    #[serde(default)]
    pub text_color: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_weight: default_font_weight(),
            text_size: None,
            text_color: None,
        }
    }
}

impl TextStyle {
    /// Bold (700) variant used as the default selected style
    pub fn bold() -> Self {
        Self {
            font_weight: 700,
            ..Self::default()
        }
    }
}

/// Divider lines drawn around the centre slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerStyle {
    /// Hex colour; `None` falls back to the theme
    #[serde(default)]
    pub color: Option<String>,
    /// Line thickness (0 hides the dividers)
    #[serde(default = "default_divider_thickness")]
    pub thickness: u16,
}

impl Default for DividerStyle {
    fn default() -> Self {
        Self {
            color: None,
            thickness: default_divider_thickness(),
        }
    }
}

/// Construction-time options shared by every picker widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Gap between the pickers of a composite row
    #[serde(default = "default_item_spacing")]
    pub item_spacing: u16,
    /// First year offered by the date picker
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Last year offered by the date picker
    #[serde(default = "default_max_year")]
    pub max_year: i32,
    /// Default time picker variant
    #[serde(default)]
    pub is_24_hour: bool,
    /// Scroll axis of single pickers
    #[serde(default)]
    pub orientation: Orientation,
    /// Size used when a text style leaves `text_size` unset
    #[serde(default = "default_text_size")]
    pub default_text_size: f32,
    /// Label shown in the third column of a 24-hour time picker
    #[serde(default = "default_time_24h_label")]
    pub time_24h_label: String,
    #[serde(default)]
    pub divider: DividerStyle,
    #[serde(default = "TextStyle::bold")]
    pub selected_text: TextStyle,
    #[serde(default)]
    pub unselected_text: TextStyle,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_spacing: default_item_spacing(),
            min_year: default_min_year(),
            max_year: default_max_year(),
            is_24_hour: false,
            orientation: Orientation::default(),
            default_text_size: default_text_size(),
            time_24h_label: default_time_24h_label(),
            divider: DividerStyle::default(),
            selected_text: TextStyle::bold(),
            unselected_text: TextStyle::default(),
        }
    }
}

/// Easing curve used by settle animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end on the last frame
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate settles (false = jump straight to the target page)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Settle animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate used while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Furthest a single gesture may move the settled page
    #[serde(default = "default_max_snap_pages")]
    pub max_snap_pages: usize,
    /// Release velocity (pages per second) above which a gesture counts as a fling
    #[serde(default = "default_fling_threshold")]
    pub fling_threshold: f64,
    /// How far ahead a fling's velocity is projected before snapping
    #[serde(default = "default_fling_projection")]
    pub fling_projection_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            max_snap_pages: default_max_snap_pages(),
            fling_threshold: default_fling_threshold(),
            fling_projection_ms: default_fling_projection(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with overrides
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Background
    pub bg: Option<String>,
    /// Panel background behind the focused picker
    pub bg_focus: Option<String>,
    /// Default foreground
    pub fg: Option<String>,
    /// Border of the focused panel
    pub accent: Option<String>,
    /// Borders and hints
    pub muted: Option<String>,
    /// Divider lines
    pub divider: Option<String>,
    /// Text of the centred item
    pub selected: Option<String>,
    /// Text of the other items
    pub unselected: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Confirm the current value (one-shot pickers)
    #[serde(default = "default_key_confirm")]
    pub confirm: String,
    /// Focus the column to the left
    #[serde(default = "default_key_focus_left")]
    pub focus_left: String,
    /// Focus the column to the right
    #[serde(default = "default_key_focus_right")]
    pub focus_right: String,
    /// Focus the next panel
    #[serde(default = "default_key_next_panel")]
    pub next_panel: String,
    /// Focus the previous panel
    #[serde(default = "default_key_prev_panel")]
    pub prev_panel: String,
    /// Move the focused wheel one item forward
    #[serde(default = "default_key_next_item")]
    pub next_item: String,
    /// Move the focused wheel one item back
    #[serde(default = "default_key_prev_item")]
    pub prev_item: String,
    /// Fling the focused wheel forward
    #[serde(default = "default_key_fling_forward")]
    pub fling_forward: String,
    /// Fling the focused wheel back
    #[serde(default = "default_key_fling_back")]
    pub fling_back: String,
    /// Jump to the first item
    #[serde(default = "default_key_first_item")]
    pub first_item: String,
    /// Jump to the last item
    #[serde(default = "default_key_last_item")]
    pub last_item: String,
    /// Toggle the help popup
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            confirm: default_key_confirm(),
            focus_left: default_key_focus_left(),
            focus_right: default_key_focus_right(),
            next_panel: default_key_next_panel(),
            prev_panel: default_key_prev_panel(),
            next_item: default_key_next_item(),
            prev_item: default_key_prev_item(),
            fling_forward: default_key_fling_forward(),
            fling_back: default_key_fling_back(),
            first_item: default_key_first_item(),
            last_item: default_key_last_item(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_confirm() -> String { "<CR>".to_string() }
fn default_key_focus_left() -> String { "h".to_string() }
fn default_key_focus_right() -> String { "l".to_string() }
fn default_key_next_panel() -> String { "<Tab>".to_string() }
fn default_key_prev_panel() -> String { "<S-Tab>".to_string() }
fn default_key_next_item() -> String { "j".to_string() }
fn default_key_prev_item() -> String { "k".to_string() }
fn default_key_fling_forward() -> String { "<C-d>".to_string() }
fn default_key_fling_back() -> String { "<C-u>".to_string() }
fn default_key_first_item() -> String { "gg".to_string() }
fn default_key_last_item() -> String { "G".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pickwheel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_font_weight() -> u16 {
    400
}

fn default_divider_thickness() -> u16 {
    1
}

fn default_item_spacing() -> u16 {
    2
}

fn default_min_year() -> i32 {
    1987
}

fn default_max_year() -> i32 {
    2100
}

fn default_text_size() -> f32 {
    16.0
}

fn default_time_24h_label() -> String {
    "24H".to_string()
}

fn default_animation_duration() -> u64 {
    180
}

fn default_animation_fps() -> u32 {
    60
}

fn default_max_snap_pages() -> usize {
    10
}

fn default_fling_threshold() -> f64 {
    2.0 // pages per second
}

fn default_fling_projection() -> u64 {
    300
}

fn default_tick_rate() -> u64 {
    100
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as a TOML document
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pickwheel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pickwheel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pickwheel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_picker_options() {
        let config = PickerConfig::default();
        assert_eq!(config.min_year, 1987);
        assert_eq!(config.max_year, 2100);
        assert!(!config.is_24_hour);
        assert_eq!(config.divider.thickness, 1);
        assert_eq!(config.selected_text.font_weight, 700);
        assert_eq!(config.unselected_text.font_weight, 400);
        assert_eq!(config.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_default_scroll_options() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.max_snap_pages, 10);
        assert_eq!(config.easing, EasingType::Cubic);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [picker]
            min_year = 2000
            is_24_hour = true

            [scroll]
            easing = "ease_out"
            "#,
        )
        .unwrap();

        assert_eq!(config.picker.min_year, 2000);
        assert_eq!(config.picker.max_year, 2100);
        assert!(config.picker.is_24_hour);
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.scroll.max_snap_pages, 10);
        assert_eq!(config.keymap.next_item, "j");
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[picker]\nmin_year = \"soon\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = AppConfig::default();
        config.picker.time_24h_label = "HRS".to_string();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.picker.time_24h_label, "HRS");
    }
}
