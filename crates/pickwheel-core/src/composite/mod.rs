//! Values assembled from a row of three pickers
//!
//! A composite owns a [`PickerRow`] and one value. Gestures are routed to
//! a column; whenever a column settles on a new item the composite merges
//! that field into its value, fixes up dependent columns (the day range of
//! a date) and hands the full value back.

pub mod calendar;
pub mod clock;
pub mod date;
pub mod time;

use std::time::Instant;

use crate::picker::{PickerRow, ROW_CHILDREN};

pub use calendar::{Calendar, Gregorian};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{Date, DateField, DatePicker};
pub use time::{Meridiem, Time, Time12, Time24, TimeField, TimePicker};

/// Column-addressed gesture routing shared by the date and time pickers
///
/// Methods taking a `column` ignore columns outside the row.
pub trait CompositePicker {
    type Value: Copy;

    fn value(&self) -> Self::Value;

    fn row(&self) -> &PickerRow;

    fn row_mut(&mut self) -> &mut PickerRow;

    /// Fold a newly settled item of `column` into the value
    ///
    /// Notifies the listener and returns the merged value.
    fn merge(&mut self, column: usize, index: usize) -> Self::Value;

    fn needs_update(&self) -> bool {
        self.row().needs_update()
    }

    fn begin_gesture(&mut self, column: usize) {
        if let Some(picker) = self.row_mut().picker_mut(column) {
            picker.begin_gesture();
        }
    }

    fn drag_by(&mut self, column: usize, delta: f64) {
        if let Some(picker) = self.row_mut().picker_mut(column) {
            picker.drag_by(delta);
        }
    }

    fn end_gesture(&mut self, column: usize, velocity: f64, now: Instant) -> Option<Self::Value> {
        let index = self.row_mut().picker_mut(column)?.end_gesture(velocity, now)?;
        Some(self.merge(column, index))
    }

    fn step(&mut self, column: usize, items: isize, now: Instant) -> Option<Self::Value> {
        let index = self.row_mut().picker_mut(column)?.step(items, now)?;
        Some(self.merge(column, index))
    }

    fn animate_to(&mut self, column: usize, index: usize, now: Instant) -> Option<Self::Value> {
        let index = self.row_mut().picker_mut(column)?.animate_to(index, now)?;
        Some(self.merge(column, index))
    }

    fn seek(&mut self, column: usize, index: usize, now: Instant) -> Option<Self::Value> {
        let index = self.row_mut().picker_mut(column)?.seek(index, now)?;
        Some(self.merge(column, index))
    }

    /// Tick all columns; returns the value after the last merge of this tick
    fn update_at(&mut self, now: Instant) -> Option<Self::Value> {
        let changes = self.row_mut().update_at(now);
        self.merge_changes(changes)
    }

    /// Land every settling column on its target, so `value()` is final
    fn complete_settles(&mut self) -> Option<Self::Value> {
        let changes = self.row_mut().complete_settles();
        self.merge_changes(changes)
    }

    /// Merge per-column selections in column order
    fn merge_changes(&mut self, changes: [Option<usize>; ROW_CHILDREN]) -> Option<Self::Value> {
        let mut merged = None;
        for (column, change) in changes.into_iter().enumerate() {
            if let Some(index) = change {
                merged = Some(self.merge(column, index));
            }
        }
        merged
    }
}
