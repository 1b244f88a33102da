//! Timezone-aware views over the raw temporal payloads.
//!
//! The wire carries UTC fields. `TimeWrapper` and `DateTimeWrapper` shift
//! them by the session offset, normalizing fields the engine let out of
//! range; `DateWrapper` keeps its fields as delivered, since a bare calendar
//! date has no instant to shift. Only an unusable offset is an error.

use std::fmt;

use chrono::{Datelike, FixedOffset, NaiveDate, TimeDelta, Timelike};

use crate::model::{Date, DateTime, Time};
use crate::{Error, Result};
use super::TimezoneInfo;

fn fixed_offset(offset: i32, name: &str) -> Result<FixedOffset> {
    FixedOffset::east_opt(offset).ok_or_else(|| {
        tracing::warn!(offset, name, "unusable timezone offset");
        Error::TemporalConstruction(format!("invalid timezone offset {offset}s ({name})"))
    })
}

const MICROS_PER_DAY: i64 = 86_400_000_000;

fn time_of_day_micros(t: &Time) -> i64 {
    let secs = (i64::from(t.hour) * 60 + i64::from(t.minute)) * 60 + i64::from(t.sec);
    secs * 1_000_000 + i64::from(t.microsec)
}

// Out-of-range fields carry into the next unit, wrapping at midnight.
fn shift_time(raw: &Time, offset: FixedOffset) -> Time {
    let shift = i64::from(offset.local_minus_utc()) * 1_000_000;
    let us = (time_of_day_micros(raw) + shift).rem_euclid(MICROS_PER_DAY);
    Time::new(
        (us / 3_600_000_000) as i8,
        (us / 60_000_000 % 60) as i8,
        (us / 1_000_000 % 60) as i8,
        (us % 1_000_000) as i32,
    )
}

// Months carry into years, then days and clock fields are added as spans
// from the first of the month, so `2021-02-30` lands on March 2nd.
fn shift_date_time(raw: &DateTime, offset: FixedOffset) -> Result<DateTime> {
    let months = i32::from(raw.month) - 1;
    let year = i32::from(raw.year) + months.div_euclid(12);
    let month = (months.rem_euclid(12) + 1) as u32;
    let local = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.and_hms_opt(0, 0, 0))
        .and_then(|dt| dt.checked_add_signed(TimeDelta::days(i64::from(raw.day) - 1)))
        .and_then(|dt| dt.checked_add_signed(TimeDelta::microseconds(time_of_day_micros(&raw.time()))))
        .and_then(|dt| dt.checked_add_signed(TimeDelta::seconds(offset.local_minus_utc().into())));
    let (local, year) = local
        .and_then(|dt| Some((dt, i16::try_from(dt.year()).ok()?)))
        .ok_or_else(|| {
            Error::TemporalConstruction(format!(
                "localized year of {}-{}-{} out of range", raw.year, raw.month, raw.day
            ))
        })?;
    let date = Date::new(year, local.month() as i8, local.day() as i8);
    Ok(DateTime::new(date, time_fields(&local)))
}

// Timelike fields are range-bounded, so the narrowing casts are lossless.
fn time_fields(t: &impl Timelike) -> Time {
    Time::new(t.hour() as i8, t.minute() as i8, t.second() as i8, (t.nanosecond() / 1_000) as i32)
}

// ============================================================================
// Date
// ============================================================================

/// Calendar date, fields as delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWrapper {
    raw: Date,
}

impl DateWrapper {
    pub fn new(raw: Date, tz: &TimezoneInfo) -> Result<Self> {
        fixed_offset(tz.offset, &tz.name)?;
        Ok(Self { raw })
    }

    pub fn raw_date(&self) -> Date { self.raw }
    pub fn year(&self) -> i16 { self.raw.year }
    pub fn month(&self) -> i8 { self.raw.month }
    pub fn day(&self) -> i8 { self.raw.day }
}

impl fmt::Display for DateWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.raw.year, self.raw.month, self.raw.day)
    }
}

// ============================================================================
// Time
// ============================================================================

/// Time of day, kept both as delivered (UTC) and localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWrapper {
    raw: Time,
    local: Time,
}

impl TimeWrapper {
    pub fn new(raw: Time, tz: &TimezoneInfo) -> Result<Self> {
        let offset = fixed_offset(tz.offset, &tz.name)?;
        let local = shift_time(&raw, offset);
        Ok(Self { raw, local })
    }

    /// UTC fields as delivered.
    pub fn raw_time(&self) -> Time {
        self.raw
    }

    /// Fields shifted by the session timezone.
    pub fn local_time(&self) -> Time {
        self.local
    }

    /// Fields shifted by an arbitrary offset (seconds east of UTC).
    pub fn local_time_with_offset(&self, offset: i32) -> Result<Time> {
        Ok(shift_time(&self.raw, fixed_offset(offset, "")?))
    }
}

impl fmt::Display for TimeWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.local;
        write!(f, "{:02}:{:02}:{:02}.{:06}", t.hour, t.minute, t.sec, t.microsec)
    }
}

// ============================================================================
// DateTime
// ============================================================================

/// Date-time, kept both as delivered (UTC) and localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeWrapper {
    raw: DateTime,
    local: DateTime,
}

impl DateTimeWrapper {
    pub fn new(raw: DateTime, tz: &TimezoneInfo) -> Result<Self> {
        let offset = fixed_offset(tz.offset, &tz.name)?;
        let local = shift_date_time(&raw, offset)?;
        Ok(Self { raw, local })
    }

    pub fn raw_date_time(&self) -> DateTime {
        self.raw
    }

    pub fn local_date_time(&self) -> DateTime {
        self.local
    }

    pub fn local_date_time_with_offset(&self, offset: i32) -> Result<DateTime> {
        shift_date_time(&self.raw, fixed_offset(offset, "")?)
    }
}

impl fmt::Display for DateTimeWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.local;
        write!(
            f,
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}",
            d.year, d.month, d.day, d.hour, d.minute, d.sec, d.microsec
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tz(offset: i32) -> TimezoneInfo {
        TimezoneInfo::new(offset, "test")
    }

    #[test]
    fn test_time_wraps_past_midnight() {
        let t = TimeWrapper::new(Time::new(23, 30, 0, 5), &tz(8 * 3600)).unwrap();
        assert_eq!(t.to_string(), "07:30:00.000005");
        assert_eq!(t.raw_time(), Time::new(23, 30, 0, 5));
    }

    #[test]
    fn test_time_with_explicit_offset() {
        let t = TimeWrapper::new(Time::new(1, 0, 0, 0), &tz(0)).unwrap();
        assert_eq!(t.local_time_with_offset(-2 * 3600).unwrap(), Time::new(23, 0, 0, 0));
    }

    #[test]
    fn test_datetime_crosses_day_boundary() {
        let raw = DateTime::new(Date::new(2021, 12, 31), Time::new(20, 15, 1, 123));
        let dt = DateTimeWrapper::new(raw, &tz(5 * 3600)).unwrap();
        assert_eq!(dt.to_string(), "2022-01-01T01:15:01.000123");
        assert_eq!(dt.local_date_time_with_offset(0).unwrap(), raw);
    }

    #[test]
    fn test_date_not_shifted() {
        let d = DateWrapper::new(Date::new(2020, 3, 1), &tz(-12 * 3600)).unwrap();
        assert_eq!(d.to_string(), "2020-03-01");
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let err = TimeWrapper::new(Time::default(), &tz(90_000)).unwrap_err();
        assert!(matches!(err, Error::TemporalConstruction(_)));
    }

    #[test]
    fn test_date_fields_rendered_as_delivered() {
        let d = DateWrapper::new(Date::new(2021, 2, 30), &tz(0)).unwrap();
        assert_eq!(d.to_string(), "2021-02-30");
        assert_eq!(DateWrapper::new(Date::new(999, 13, 0), &tz(0)).unwrap().to_string(), "0999-13-00");
    }

    #[test]
    fn test_time_fields_carry() {
        let render = |t: Time| TimeWrapper::new(t, &tz(0)).unwrap().to_string();
        assert_eq!(render(Time::new(23, 59, 60, 0)), "00:00:00.000000");
        assert_eq!(render(Time::new(24, 0, 0, 0)), "00:00:00.000000");
        assert_eq!(render(Time::new(1, 0, 0, 1_000_000)), "01:00:01.000000");
        assert_eq!(render(Time::new(-1, 0, 0, 0)), "23:00:00.000000");
        assert_eq!(render(Time::new(0, 90, 0, 0)), "01:30:00.000000");
    }

    #[test]
    fn test_datetime_fields_carry() {
        let render = |d: Date, t: Time| DateTimeWrapper::new(DateTime::new(d, t), &tz(0)).unwrap().to_string();
        assert_eq!(render(Date::new(2021, 2, 30), Time::default()), "2021-03-02T00:00:00.000000");
        assert_eq!(render(Date::new(2021, 2, 28), Time::new(23, 59, 60, 0)), "2021-03-01T00:00:00.000000");
        assert_eq!(render(Date::new(2021, 13, 1), Time::default()), "2022-01-01T00:00:00.000000");
        assert_eq!(render(Date::new(2021, 0, 0), Time::default()), "2020-11-30T00:00:00.000000");
        assert_eq!(render(Date::new(2021, 3, 1), Time::new(-1, 0, 0, 0)), "2021-02-28T23:00:00.000000");
    }

    #[test]
    fn test_datetime_year_unpadded() {
        let raw = DateTime::new(Date::new(999, 1, 2), Time::new(1, 2, 3, 4));
        let dt = DateTimeWrapper::new(raw, &tz(0)).unwrap();
        assert_eq!(dt.to_string(), "999-01-02T01:02:03.000004");
    }
}
