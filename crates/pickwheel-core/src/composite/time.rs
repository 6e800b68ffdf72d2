//! Hour / minute composite in 12-hour and 24-hour flavours

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use tracing::debug;

use super::clock::Clock;
use super::CompositePicker;
use crate::config::PickerConfig;
use crate::error::{Error, Result};
use crate::picker::{ItemPicker, PickerRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const ALL: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall-clock time on a 12-hour dial (hour 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Time12 {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl Time12 {
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self> {
        if !(1..=12).contains(&hour) {
            return Err(Error::InvalidValue(format!("hour {} is not in 1..=12", hour)));
        }
        if minute > 59 {
            return Err(Error::InvalidValue(format!("minute {} is not in 0..=59", minute)));
        }
        Ok(Self { hour, minute, meridiem })
    }

    pub fn clamped(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        Self {
            hour: hour.clamp(1, 12),
            minute: minute.min(59),
            meridiem,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    pub fn with_hour(self, hour: u8) -> Self {
        Self::clamped(hour, self.minute, self.meridiem)
    }

    pub fn with_minute(self, minute: u8) -> Self {
        Self::clamped(self.hour, minute, self.meridiem)
    }

    pub fn with_meridiem(self, meridiem: Meridiem) -> Self {
        Self { meridiem, ..self }
    }

    /// 12 AM is midnight, 12 PM is noon
    pub fn to_24h(&self) -> Time24 {
        let hour = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Time24 {
            hour,
            minute: self.minute,
        }
    }
}

impl fmt::Display for Time12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Wall-clock time on a 24-hour dial (hour 0-23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Time24 {
    hour: u8,
    minute: u8,
}

impl Time24 {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::InvalidValue(format!("hour {} is not in 0..=23", hour)));
        }
        if minute > 59 {
            return Err(Error::InvalidValue(format!("minute {} is not in 0..=59", minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn clamped(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn with_hour(self, hour: u8) -> Self {
        Self::clamped(hour, self.minute)
    }

    pub fn with_minute(self, minute: u8) -> Self {
        Self::clamped(self.hour, minute)
    }

    pub fn to_12h(&self) -> Time12 {
        let meridiem = if self.hour < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        Time12 {
            hour,
            minute: self.minute,
            meridiem,
        }
    }
}

impl fmt::Display for Time24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time24 {
    type Err = Error;

    /// Parses `HH:MM`
    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| Error::InvalidValue(format!("invalid time '{}': {}", s, e)))?;
        Ok(Self::from(time))
    }
}

impl From<NaiveTime> for Time24 {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for Time12 {
    type Err = Error;

    /// Parses `hh:mm AM` / `hh:mm pm`
    fn from_str(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(&s.trim().to_uppercase(), "%I:%M %p")
            .map_err(|e| Error::InvalidValue(format!("invalid time '{}': {}", s, e)))?;
        Ok(Time24::from(time).to_12h())
    }
}

/// Value of a [`TimePicker`]; the dial is fixed for the picker's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Time {
    Twelve(Time12),
    TwentyFour(Time24),
}

impl Time {
    pub fn hour(&self) -> u8 {
        match self {
            Time::Twelve(t) => t.hour(),
            Time::TwentyFour(t) => t.hour(),
        }
    }

    pub fn minute(&self) -> u8 {
        match self {
            Time::Twelve(t) => t.minute(),
            Time::TwentyFour(t) => t.minute(),
        }
    }

    pub fn is_24_hour(&self) -> bool {
        matches!(self, Time::TwentyFour(_))
    }

    pub fn to_24h(&self) -> Time24 {
        match self {
            Time::Twelve(t) => t.to_24h(),
            Time::TwentyFour(t) => *t,
        }
    }
}

impl From<Time12> for Time {
    fn from(time: Time12) -> Self {
        Time::Twelve(time)
    }
}

impl From<Time24> for Time {
    fn from(time: Time24) -> Self {
        Time::TwentyFour(time)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Time::Twelve(t) => fmt::Display::fmt(t, f),
            Time::TwentyFour(t) => fmt::Display::fmt(t, f),
        }
    }
}

/// Columns of the time row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    /// AM/PM on a 12-hour dial, a fixed label on a 24-hour dial
    Meridiem,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hour, TimeField::Minute, TimeField::Meridiem];

    pub fn column(self) -> usize {
        self as usize
    }

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }
}

/// Three wheels editing a [`Time`]
pub struct TimePicker {
    row: PickerRow,
    value: Time,
    listener: Option<Box<dyn FnMut(Time)>>,
}

impl fmt::Debug for TimePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimePicker")
            .field("value", &self.value)
            .field("row", &self.row)
            .finish()
    }
}

impl TimePicker {
    pub fn new(initial: Time, config: &PickerConfig) -> Self {
        let gap = u32::from(config.item_spacing);
        let minutes = ItemPicker::new(two_digit(0..=59), usize::from(initial.minute())).with_config(config);

        let row = match initial {
            Time::Twelve(t) => {
                let hours = ItemPicker::numbers(1..=12u8, usize::from(t.hour() - 1)).with_config(config);
                let meridiem = ItemPicker::numbers(Meridiem::ALL.iter().map(Meridiem::as_str), t.meridiem().index())
                    .with_config(config);
                PickerRow::new([hours, minutes, meridiem], gap)
            }
            Time::TwentyFour(t) => {
                let hours = ItemPicker::new(two_digit(0..=23), usize::from(t.hour())).with_config(config);
                let label = ItemPicker::new(vec![config.time_24h_label.clone()], 0).with_config(config);
                PickerRow::new([hours, minutes, label], gap)
            }
        };

        Self {
            row,
            value: initial,
            listener: None,
        }
    }

    /// Start on the clock's current time, on the dial `config.is_24_hour` picks
    pub fn now(clock: &dyn Clock, config: &PickerConfig) -> Self {
        let initial = if config.is_24_hour {
            Time::TwentyFour(clock.now_24h())
        } else {
            Time::Twelve(clock.now_12h())
        };
        Self::new(initial, config)
    }

    /// Called with the merged time after every field change
    pub fn on_value_changed(mut self, listener: impl FnMut(Time) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn is_24_hour(&self) -> bool {
        self.value.is_24_hour()
    }

    pub fn picker(&self, field: TimeField) -> &ItemPicker {
        &self.row.pickers()[field.column()]
    }
}

impl CompositePicker for TimePicker {
    type Value = Time;

    fn value(&self) -> Time {
        self.value
    }

    fn row(&self) -> &PickerRow {
        &self.row
    }

    fn row_mut(&mut self) -> &mut PickerRow {
        &mut self.row
    }

    fn merge(&mut self, column: usize, index: usize) -> Time {
        let before = self.value;
        let index = u8::try_from(index).unwrap_or(u8::MAX);
        self.value = match (self.value, TimeField::from_column(column)) {
            (Time::Twelve(t), Some(TimeField::Hour)) => Time::Twelve(t.with_hour(index.saturating_add(1))),
            (Time::Twelve(t), Some(TimeField::Minute)) => Time::Twelve(t.with_minute(index)),
            (Time::Twelve(t), Some(TimeField::Meridiem)) => {
                let meridiem = if index == 0 { Meridiem::Am } else { Meridiem::Pm };
                Time::Twelve(t.with_meridiem(meridiem))
            }
            (Time::TwentyFour(t), Some(TimeField::Hour)) => Time::TwentyFour(t.with_hour(index)),
            (Time::TwentyFour(t), Some(TimeField::Minute)) => Time::TwentyFour(t.with_minute(index)),
            // Label column and unknown columns carry no field
            _ => return self.value,
        };

        debug!(from = %before, to = %self.value, column, "Time field merged");
        let value = self.value;
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
        value
    }
}

fn two_digit(range: std::ops::RangeInclusive<u8>) -> Vec<String> {
    range.map(|v| format!("{:02}", v)).collect()
}
