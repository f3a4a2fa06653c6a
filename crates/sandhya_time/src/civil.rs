//! Proleptic Gregorian calendar dates.
//!
//! Day-of-year numbering is 1-based (Jan 1 = 1), which is the convention
//! the solar declination approximation expects.

use crate::error::TimeError;

/// Cumulative days before each month in a common year (index 0 = January).
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1 = January).
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl CivilDate {
    /// Create a date without validation. Prefer [`CivilDate::checked`]
    /// for externally supplied values.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Create a date, rejecting out-of-range month/day combinations.
    pub fn checked(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let mut parts = text.splitn(3, '-');
        let year = parts
            .next()
            .and_then(|s| s.parse::<i32>().ok())
            .ok_or(TimeError::ParseFailure("expected YYYY-MM-DD"))?;
        let month = parts
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or(TimeError::ParseFailure("expected YYYY-MM-DD"))?;
        let day = parts
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or(TimeError::ParseFailure("expected YYYY-MM-DD"))?;
        Self::checked(year, month, day)
    }

    /// 1-based ordinal day within the year (Jan 1 = 1, Dec 31 = 365/366).
    pub fn day_of_year(&self) -> u32 {
        let mut n = CUMULATIVE_DAYS[(self.month - 1) as usize] + self.day;
        if self.month > 2 && is_leap_year(self.year) {
            n += 1;
        }
        n
    }

    /// The following calendar day.
    pub fn next_day(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::new(self.year, self.month + 1, 1)
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }

    /// The preceding calendar day.
    pub fn prev_day(&self) -> Self {
        if self.day > 1 {
            Self::new(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            Self::new(self.year, self.month - 1, days_in_month(self.year, self.month - 1))
        } else {
            Self::new(self.year - 1, 12, 31)
        }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
