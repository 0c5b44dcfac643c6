// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Localization bundle and week layout.

use alloc::string::String;
use core::fmt;

fn strings<const N: usize>(items: [&str; N]) -> [String; N] {
    items.map(String::from)
}

/// Textual content shown by the picker and its calendar.
///
/// The default is English. Hosts supply another bundle through
/// [`DatetimeProps::content`](crate::DatetimeProps::content); nothing in this
/// crate keeps module-level text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Content {
    /// One- or two-letter day names, Sunday first.
    pub days_short: [String; 7],
    /// Full day names, Sunday first.
    pub days_full: [String; 7],
    /// Full month names, January first.
    pub months: [String; 12],
    /// Abbreviated month names, January first.
    pub months_short: [String; 12],
    /// Label of the "jump to today" action.
    pub today: String,
    /// Label of the "jump to now" action in time mode.
    pub now: String,
    /// Ante meridiem marker.
    pub am: String,
    /// Post meridiem marker.
    pub pm: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            days_short: strings(["S", "M", "T", "W", "T", "F", "S"]),
            days_full: strings([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            months: strings([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            months_short: strings([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            today: String::from("Today"),
            now: String::from("Now"),
            am: String::from("AM"),
            pm: String::from("PM"),
        }
    }
}

impl Content {
    /// Short day names in grid-column order for the given first day of week.
    ///
    /// ```
    /// use understory_datetime::{Content, FirstDayOfWeek};
    ///
    /// let content = Content::default();
    /// let headers = content.weekday_headers(FirstDayOfWeek::Monday);
    /// assert_eq!(headers, ["M", "T", "W", "T", "F", "S", "S"]);
    /// ```
    #[must_use]
    pub fn weekday_headers(&self, first: FirstDayOfWeek) -> [&str; 7] {
        let offset = first.index();
        core::array::from_fn(|column| self.days_short[(column + offset) % 7].as_str())
    }

    /// Full month name for a 1-based month number, as used by `chrono`.
    ///
    /// Returns `None` outside `1..=12`.
    #[must_use]
    pub fn month_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.months.get(index).map(String::as_str)
    }

    /// Abbreviated month name for a 1-based month number.
    #[must_use]
    pub fn month_short_name(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        self.months_short.get(index).map(String::as_str)
    }

    /// The meridiem label for a 24-hour clock hour.
    #[must_use]
    pub fn meridiem(&self, hour: u32) -> &str {
        if hour % 24 < 12 { &self.am } else { &self.pm }
    }
}

/// The weekday that starts each row of the calendar grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum FirstDayOfWeek {
    /// Weeks start on Sunday (index 0).
    #[default]
    Sunday = 0,
    /// Weeks start on Monday (index 1).
    Monday = 1,
}

impl FirstDayOfWeek {
    /// Column offset into a Sunday-first list of day names.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The matching `chrono` weekday.
    #[must_use]
    pub const fn weekday(self) -> chrono::Weekday {
        match self {
            Self::Sunday => chrono::Weekday::Sun,
            Self::Monday => chrono::Weekday::Mon,
        }
    }
}

impl TryFrom<u8> for FirstDayOfWeek {
    type Error = InvalidFirstDayOfWeek;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            other => Err(InvalidFirstDayOfWeek(other)),
        }
    }
}

impl From<FirstDayOfWeek> for u8 {
    fn from(first: FirstDayOfWeek) -> Self {
        first as Self
    }
}

/// Error returned when converting an index other than 0 or 1 into a
/// [`FirstDayOfWeek`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidFirstDayOfWeek(pub u8);

impl fmt::Display for InvalidFirstDayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first day of week must be 0 (Sunday) or 1 (Monday), got {}",
            self.0
        )
    }
}

impl core::error::Error for InvalidFirstDayOfWeek {}
