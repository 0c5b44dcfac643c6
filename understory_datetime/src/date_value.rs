// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw selections and their normalization into a stored date-time.

use alloc::string::String;
use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Textual layouts accepted for [`RawDate::Text`], tried in order after RFC 3339.
const DATE_TIME_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// A value handed to the picker by the calendar when the user selects something.
///
/// Every variant normalizes to a [`NaiveDateTime`]: dates become midnight,
/// timestamps are read as UTC, and RFC 3339 strings keep their local wall-clock
/// time with the offset dropped. No timezone conversion beyond that is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawDate {
    /// A calendar day, selected at midnight.
    Date(NaiveDate),
    /// A day plus a time of day.
    DateTime(NaiveDateTime),
    /// Milliseconds since the Unix epoch.
    TimestampMillis(i64),
    /// `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS[.fff]]`, `YYYY-MM-DDTHH:MM[:SS[.fff]]`
    /// or RFC 3339.
    Text(String),
}

impl RawDate {
    /// Converts the raw selection into the value the picker stores.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use understory_datetime::RawDate;
    ///
    /// let raw = RawDate::from("2024-03-20 14:05");
    /// let value = raw.normalize().unwrap();
    /// assert_eq!(value.date(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    ///
    /// assert!(RawDate::from("next tuesday").normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<NaiveDateTime, InvalidDate> {
        match self {
            Self::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            Self::DateTime(value) => Ok(*value),
            Self::TimestampMillis(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|utc| utc.naive_utc())
                .ok_or(InvalidDate::OutOfRange(*millis)),
            Self::Text(text) => parse_text(text.trim())
                .ok_or_else(|| InvalidDate::Unparseable(text.clone())),
        }
    }
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_local());
    }
    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_LAYOUT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

impl From<NaiveDate> for RawDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for RawDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<&str> for RawDate {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for RawDate {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Error returned when a [`RawDate`] does not describe a representable date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidDate {
    /// The text matched none of the accepted layouts.
    Unparseable(String),
    /// The timestamp lies outside the range `chrono` can represent.
    OutOfRange(i64),
}

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(text) => write!(f, "`{text}` is not a recognized date"),
            Self::OutOfRange(millis) => {
                write!(f, "timestamp {millis}ms is outside the representable range")
            }
        }
    }
}

impl core::error::Error for InvalidDate {}
