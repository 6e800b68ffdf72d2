pub mod picker_row;
mod popup;
mod status_bar;
mod tabs;
mod wheel;

pub use picker_row::PickerRowWidget;
pub use popup::HelpPopupWidget;
pub use status_bar::StatusBarWidget;
pub use tabs::PanelTabsWidget;
pub use wheel::WheelWidget;
