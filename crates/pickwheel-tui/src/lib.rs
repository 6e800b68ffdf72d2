pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::{App, Panel, PanelPicker, PanelValue};
pub use theme::Theme;
pub use themes::{apply_picker_colors, load_theme};
