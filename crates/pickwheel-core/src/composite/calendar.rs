use chrono::NaiveDate;

/// Month lengths for the date picker
pub trait Calendar {
    /// Days in `month` (1-12) of `year`
    fn days_in_month(&self, year: i32, month: u32) -> u32;
}

/// Proleptic Gregorian calendar backed by chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl Calendar for Gregorian {
    /// Invalid months and years outside chrono's range count as 28 days
    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        (29..=31)
            .rev()
            .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
            .unwrap_or(28)
    }
}
