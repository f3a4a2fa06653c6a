//! Wall-clock instants as a date plus fractional minute-of-day.
//!
//! Sun-event arithmetic produces minute offsets from a day's midnight
//! that can be negative or exceed 1440 at extreme longitudes; the
//! constructor normalizes those into the neighboring calendar days.

use crate::civil::CivilDate;
use crate::error::TimeError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// A local wall-clock instant: calendar date plus minute-of-day.
///
/// Invariant: `minute_of_day` is finite and in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LocalMoment {
    date: CivilDate,
    minute_of_day: f64,
}

impl LocalMoment {
    /// Instant at `minutes` past the midnight that starts `date`.
    ///
    /// Offsets outside `[0, 1440)` roll into adjacent days, so the
    /// returned date may differ from `date`.
    pub fn from_day_offset(date: CivilDate, minutes: f64) -> Self {
        let mut date = date;
        let mut minutes = minutes;
        while minutes < 0.0 {
            minutes += MINUTES_PER_DAY;
            date = date.prev_day();
        }
        while minutes >= MINUTES_PER_DAY {
            minutes -= MINUTES_PER_DAY;
            date = date.next_day();
        }
        Self {
            date,
            minute_of_day: minutes,
        }
    }

    /// Instant at an exact hour and minute of `date`.
    pub fn at(date: CivilDate, hour: u32, minute: u32) -> Self {
        Self::from_day_offset(date, hour as f64 * 60.0 + minute as f64)
    }

    /// Parse `YYYY-MM-DDThh:mm` (local wall-clock, 24-hour).
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let (date_part, time_part) = text
            .split_once('T')
            .ok_or(TimeError::ParseFailure("expected YYYY-MM-DDThh:mm"))?;
        let date = CivilDate::parse(date_part)?;
        let (h, m) = time_part
            .split_once(':')
            .ok_or(TimeError::ParseFailure("expected hh:mm time"))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| TimeError::ParseFailure("bad hour"))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| TimeError::ParseFailure("bad minute"))?;
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        Ok(Self::at(date, hour, minute))
    }

    /// The calendar date this instant falls on.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Fractional minutes past this date's midnight, in `[0, 1440)`.
    pub fn minute_of_day(&self) -> f64 {
        self.minute_of_day
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        (self.minute_of_day / 60.0).floor() as u32
    }

    /// Minute within the hour, 0-59.
    pub fn minute(&self) -> u32 {
        (self.minute_of_day % 60.0).floor() as u32
    }

    /// 12-hour clock rendering: unpadded hour, zero-padded minutes,
    /// `AM`/`PM` marker. Midnight is `12:00 AM`, noon `12:00 PM`.
    pub fn format_clock(&self) -> String {
        let hour = self.hour();
        let marker = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, self.minute(), marker)
    }
}

impl std::fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}
