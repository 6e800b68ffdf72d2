//! Wheel pickers built on [`SnapScroller`](crate::scroll::SnapScroller)
//!
//! - `style` - Proximity driven text style interpolation
//! - `item` - One wheel over a list of labels
//! - `row` - Three wheels laid out side by side

pub mod item;
pub mod row;
pub mod style;

pub use item::{ItemPicker, SelectionListener, Slot};
pub use row::{row_layout, Cell, PickerRow, ROW_CHILDREN};
pub use style::{ColorRole, SlotStyle, StylePair};
