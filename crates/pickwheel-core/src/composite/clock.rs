use chrono::{Local, Timelike};

use super::date::Date;
use super::time::{Time12, Time24};

/// Source of the default date and time of a composite
pub trait Clock {
    fn today(&self) -> Date;

    fn now_24h(&self) -> Time24;

    fn now_12h(&self) -> Time12 {
        self.now_24h().to_12h()
    }
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Date::from(Local::now().date_naive())
    }

    fn now_24h(&self) -> Time24 {
        let now = Local::now();
        Time24::clamped(now.hour() as u8, now.minute() as u8)
    }
}

/// Clock frozen at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: Date,
    time: Time24,
}

impl FixedClock {
    pub fn new(date: Date, time: Time24) -> Self {
        Self { date, time }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.date
    }

    fn now_24h(&self) -> Time24 {
        self.time
    }
}
