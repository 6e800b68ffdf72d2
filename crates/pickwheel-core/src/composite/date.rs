//! Year / month / day composite

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::calendar::{Calendar, Gregorian};
use super::clock::Clock;
use super::CompositePicker;
use crate::config::PickerConfig;
use crate::error::{Error, Result};
use crate::picker::{ItemPicker, PickerRow};

/// Calendar date whose day always fits its month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Validated constructor
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidValue(format!("month {} is not in 1..=12", month)));
        }
        let days = Gregorian.days_in_month(year, month);
        if !(1..=days).contains(&day) {
            return Err(Error::InvalidValue(format!(
                "day {} is not in 1..={} for {}-{:02}",
                day, days, year, month
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Clamp month into 1..=12 and day into the month
    pub fn clamped(year: i32, month: u32, day: u32) -> Self {
        Self::clamped_in(&Gregorian, year, month, day)
    }

    pub(crate) fn clamped_in(calendar: &dyn Calendar, year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        let day = day.clamp(1, calendar.days_in_month(year, month));
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn days_in_month(&self) -> u32 {
        Gregorian.days_in_month(self.year, self.month)
    }

    /// Same date in `year`, day clamped (Feb 29 becomes Feb 28)
    pub fn with_year(self, year: i32) -> Self {
        Self::clamped(year, self.month, self.day)
    }

    pub fn with_month(self, month: u32) -> Self {
        Self::clamped(self.year, month, self.day)
    }

    pub fn with_day(self, day: u32) -> Self {
        Self::clamped(self.year, self.month, day)
    }

    /// None for years chrono cannot represent
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date::from)
            .map_err(|e| Error::InvalidValue(format!("invalid date '{}': {}", s, e)))
    }
}

/// Columns of the date row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    pub const ALL: [DateField; 3] = [DateField::Year, DateField::Month, DateField::Day];

    pub fn column(self) -> usize {
        self as usize
    }

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }
}

/// Three wheels editing a [`Date`]
///
/// The day wheel always lists exactly the days of the selected month.
pub struct DatePicker {
    row: PickerRow,
    value: Date,
    min_year: i32,
    max_year: i32,
    calendar: Box<dyn Calendar>,
    listener: Option<Box<dyn FnMut(Date)>>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("value", &self.value)
            .field("min_year", &self.min_year)
            .field("max_year", &self.max_year)
            .field("row", &self.row)
            .finish()
    }
}

impl DatePicker {
    pub fn new(initial: Date, config: &PickerConfig) -> Self {
        Self::with_calendar(initial, config, Gregorian)
    }

    /// Start on the clock's current date
    pub fn today(clock: &dyn Clock, config: &PickerConfig) -> Self {
        Self::new(clock.today(), config)
    }

    /// Build with a custom month length source
    ///
    /// The year is clamped into the configured bounds (swapped when
    /// reversed) and the day into the month.
    pub fn with_calendar(initial: Date, config: &PickerConfig, calendar: impl Calendar + 'static) -> Self {
        let (min_year, max_year) = if config.min_year <= config.max_year {
            (config.min_year, config.max_year)
        } else {
            (config.max_year, config.min_year)
        };
        let year = initial.year.clamp(min_year, max_year);
        let value = Date::clamped_in(&calendar, year, initial.month, initial.day);
        let days = calendar.days_in_month(value.year, value.month);

        let years = ItemPicker::range(i64::from(min_year)..=i64::from(max_year), i64::from(value.year))
            .with_config(config);
        let months = ItemPicker::numbers(1..=12u32, (value.month - 1) as usize).with_config(config);
        let day_picker = ItemPicker::new(day_labels(days), (value.day - 1) as usize).with_config(config);

        Self {
            row: PickerRow::new([years, months, day_picker], u32::from(config.item_spacing)),
            value,
            min_year,
            max_year,
            calendar: Box::new(calendar),
            listener: None,
        }
    }

    /// Called with the merged date after every field change
    pub fn on_value_changed(mut self, listener: impl FnMut(Date) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Length of the day wheel
    pub fn days_in_month(&self) -> u32 {
        self.calendar.days_in_month(self.value.year, self.value.month)
    }

    pub fn picker(&self, field: DateField) -> &ItemPicker {
        &self.row.pickers()[field.column()]
    }

    /// Rebuild the day wheel for the current month and clamp the day into it
    fn recompute_days(&mut self) {
        let days = self.days_in_month();
        self.value.day = self.value.day.clamp(1, days);

        let day = self.value.day;
        if let Some(picker) = self.row.picker_mut(DateField::Day.column()) {
            if picker.len() != days as usize {
                picker.set_items(day_labels(days));
            }
            if picker.scroller().is_settled() && picker.selected_index() != Some((day - 1) as usize) {
                picker.select((day - 1) as usize);
            }
        }
    }
}

impl CompositePicker for DatePicker {
    type Value = Date;

    fn value(&self) -> Date {
        self.value
    }

    fn row(&self) -> &PickerRow {
        &self.row
    }

    fn row_mut(&mut self) -> &mut PickerRow {
        &mut self.row
    }

    fn merge(&mut self, column: usize, index: usize) -> Date {
        let before = self.value;
        match DateField::from_column(column) {
            Some(DateField::Year) => {
                let offset = i32::try_from(index).unwrap_or(i32::MAX);
                self.value.year = self.min_year.saturating_add(offset).min(self.max_year);
                self.recompute_days();
            }
            Some(DateField::Month) => {
                self.value.month = (index as u32 + 1).min(12);
                self.recompute_days();
            }
            Some(DateField::Day) => {
                self.value.day = (index as u32 + 1).min(self.days_in_month());
            }
            None => return self.value,
        }

        debug!(from = %before, to = %self.value, column, "Date field merged");
        let value = self.value;
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
        value
    }
}

fn day_labels(days: u32) -> Vec<String> {
    (1..=days).map(|d| d.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::new(year, month, day).unwrap()
    }

    fn settle<P: CompositePicker>(picker: &mut P, field: usize, target: usize, now: Instant) -> Option<P::Value> {
        let current = picker.row().pickers()[field].selected_index().unwrap();
        let delta = target as isize - current as isize;
        picker.step(field, delta, now);
        picker.update_at(now + Duration::from_secs(5))
    }

    #[test]
    fn test_date_validation() {
        assert!(Date::new(2024, 2, 29).is_ok());
        assert!(matches!(Date::new(2023, 2, 29), Err(Error::InvalidValue(_))));
        assert!(Date::new(2024, 13, 1).is_err());
        assert!(Date::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_date_with_methods_clamp_day() {
        let d = date(2024, 1, 31);
        assert_eq!(d.with_month(2), date(2024, 2, 29));
        assert_eq!(date(2024, 2, 29).with_year(2023), date(2023, 2, 28));
        assert_eq!(d.with_day(40), date(2024, 1, 31));
        assert_eq!(Date::clamped(2024, 0, 0), date(2024, 1, 1));
    }

    #[test]
    fn test_date_parse_and_display() {
        let d: Date = "2024-04-30".parse().unwrap();
        assert_eq!(d, date(2024, 4, 30));
        assert_eq!(d.to_string(), "2024-04-30");
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("yesterday".parse::<Date>().is_err());
    }

    #[test]
    fn test_initial_state() {
        let picker = DatePicker::new(date(2024, 3, 15), &PickerConfig::default());
        assert_eq!(picker.value(), date(2024, 3, 15));
        assert_eq!(picker.picker(DateField::Year).selected_label(), Some("2024"));
        assert_eq!(picker.picker(DateField::Month).selected_label(), Some("3"));
        assert_eq!(picker.picker(DateField::Day).selected_label(), Some("15"));
        assert_eq!(picker.picker(DateField::Day).len(), 31);
    }

    #[test]
    fn test_initial_year_is_clamped_and_bounds_swapped() {
        let config = PickerConfig {
            min_year: 2030,
            max_year: 2000,
            ..Default::default()
        };
        let picker = DatePicker::new(date(1950, 6, 1), &config);
        assert_eq!(picker.min_year(), 2000);
        assert_eq!(picker.max_year(), 2030);
        assert_eq!(picker.value().year(), 2000);
        assert_eq!(picker.picker(DateField::Year).len(), 31);
    }

    #[test]
    fn test_day_range_follows_leap_years() {
        let now = Instant::now();
        let mut picker = DatePicker::new(date(2024, 2, 29), &PickerConfig::default());
        assert_eq!(picker.picker(DateField::Day).len(), 29);

        // 2024 -> 2023
        let year_index = picker.picker(DateField::Year).selected_index().unwrap();
        let value = settle(&mut picker, 0, year_index - 1, now);
        assert_eq!(value, Some(date(2023, 2, 28)));
        assert_eq!(picker.picker(DateField::Day).len(), 28);
        assert_eq!(picker.picker(DateField::Day).selected_label(), Some("28"));
    }

    #[test]
    fn test_month_change_to_february_clamps_day() {
        let now = Instant::now();
        let mut picker = DatePicker::new(date(2023, 1, 30), &PickerConfig::default());
        let value = settle(&mut picker, 1, 1, now);
        assert_eq!(value, Some(date(2023, 2, 28)));
        assert_eq!(picker.picker(DateField::Day).selected_index(), Some(27));
    }

    #[test]
    fn test_month_change_to_leap_february_keeps_29th() {
        let now = Instant::now();
        let mut picker = DatePicker::new(date(2024, 1, 30), &PickerConfig::default());
        let value = settle(&mut picker, 1, 1, now);
        assert_eq!(value, Some(date(2024, 2, 29)));
        assert_eq!(picker.picker(DateField::Day).len(), 29);
        assert_eq!(picker.picker(DateField::Day).selected_index(), Some(28));
    }

    #[test]
    fn test_complete_settles_merges_pending_columns() {
        let now = Instant::now();
        let mut picker = DatePicker::new(date(2024, 1, 31), &PickerConfig::default());
        assert_eq!(picker.step(1, 1, now), None);
        assert_eq!(picker.value(), date(2024, 1, 31));

        assert_eq!(picker.complete_settles(), Some(date(2024, 2, 29)));
        assert_eq!(picker.value(), date(2024, 2, 29));
        assert!(!picker.needs_update());
    }

    #[test]
    fn test_january_31_to_april_emits_april_30() {
        let now = Instant::now();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut picker = DatePicker::new(date(2024, 1, 31), &PickerConfig::default())
            .on_value_changed(move |d| sink.borrow_mut().push(d));

        let value = settle(&mut picker, DateField::Month.column(), 3, now);
        assert_eq!(value, Some(date(2024, 4, 30)));
        assert_eq!(*seen.borrow(), vec![date(2024, 4, 30)]);
        assert_eq!(picker.picker(DateField::Day).len(), 30);
        assert_eq!(picker.picker(DateField::Day).selected_label(), Some("30"));
    }

    #[test]
    fn test_day_change_replaces_day_only() {
        let now = Instant::now();
        let mut picker = DatePicker::new(date(2024, 5, 10), &PickerConfig::default());
        let value = settle(&mut picker, 2, 19, now);
        assert_eq!(value, Some(date(2024, 5, 20)));
    }

    #[test]
    fn test_today_uses_clock() {
        use crate::composite::clock::FixedClock;
        use crate::composite::time::Time24;

        let clock = FixedClock::new(date(2025, 12, 24), Time24::clamped(8, 30));
        let picker = DatePicker::today(&clock, &PickerConfig::default());
        assert_eq!(picker.value(), date(2025, 12, 24));
    }

    struct ShortMonths;

    impl Calendar for ShortMonths {
        fn days_in_month(&self, _year: i32, _month: u32) -> u32 {
            20
        }
    }

    #[test]
    fn test_custom_calendar() {
        let picker = DatePicker::with_calendar(date(2024, 1, 31), &PickerConfig::default(), ShortMonths);
        assert_eq!(picker.value().day(), 20);
        assert_eq!(picker.picker(DateField::Day).len(), 20);
    }
}
