pub mod composite;
pub mod config;
pub mod error;
pub mod picker;
pub mod scroll;

pub use composite::{
    Calendar, Clock, CompositePicker, Date, DateField, DatePicker, FixedClock, Gregorian, Meridiem,
    SystemClock, Time, Time12, Time24, TimeField, TimePicker,
};
pub use config::{AppConfig, EasingType, Orientation, PickerConfig, ScrollConfig};
pub use error::{Error, Result};
pub use picker::{ItemPicker, PickerRow};
pub use scroll::{SnapScroller, Viewport};
