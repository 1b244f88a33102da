//! Temporal payloads as delivered on the wire.
//!
//! All fields are UTC. Localization happens in `wrapper::temporal`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i16,
    pub month: i8,
    pub day: i8,
}

impl Date {
    pub fn new(year: i16, month: i8, day: i8) -> Self {
        Self { year, month, day }
    }
}

/// Time of day with microsecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    pub hour: i8,
    pub minute: i8,
    pub sec: i8,
    pub microsec: i32,
}

impl Time {
    pub fn new(hour: i8, minute: i8, sec: i8, microsec: i32) -> Self {
        Self { hour, minute, sec, microsec }
    }
}

/// Date and time of day with microsecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub sec: i8,
    pub microsec: i32,
}

impl DateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            sec: time.sec,
            microsec: time.microsec,
        }
    }

    pub fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    pub fn time(&self) -> Time {
        Time::new(self.hour, self.minute, self.sec, self.microsec)
    }
}

/// Elapsed-time payload. `seconds` already includes whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub seconds: i64,
    pub microseconds: i32,
    pub months: i32,
}

impl Duration {
    pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

    pub fn new(months: i32, seconds: i64, microseconds: i32) -> Self {
        Self { seconds, microseconds, months }
    }

    /// Whole days contained in `seconds` (truncating).
    pub fn days(&self) -> i64 {
        self.seconds / Self::SECONDS_PER_DAY
    }
}

/// Legacy text form `P{months}M{days}DT{seconds}S`.
///
/// `seconds` is printed as the full total, not the remainder after days;
/// existing clients parse this exact shape.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}M{}DT{}S", self.months, self.days(), self.seconds)
    }
}
