// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatter collaborators.
//!
//! Formatters are pure `NaiveDateTime → String` functions supplied through the
//! picker's props. The picker never formats dates itself; it only decides
//! which formatters to call and how to join their output.
//!
//! Formatters always receive a valid date. An empty selection is a distinct
//! "no selection" display state, handled by the picker without calling them.

use alloc::rc::Rc;
use alloc::string::{String, ToString};

use chrono::NaiveDateTime;

/// A pluggable formatting function.
pub type Formatter = Rc<dyn Fn(&NaiveDateTime) -> String>;

/// Default date formatter: `YYYY-MM-DD`.
///
/// ```
/// use chrono::NaiveDate;
/// use understory_datetime::format::format_date;
///
/// let value = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(format_date(&value), "2024-03-05");
/// ```
#[must_use]
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Default time formatter: 24-hour `HH:MM`.
///
/// ```
/// use chrono::NaiveDate;
/// use understory_datetime::format::format_time;
///
/// let value = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(8, 7, 0).unwrap();
/// assert_eq!(format_time(&value), "08:07");
/// ```
#[must_use]
pub fn format_time(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

/// Joins date and (optionally) time output the way the trigger field shows it.
///
/// With `time` off the result is exactly `date(value)`; with it on, the result
/// is `date(value) + " " + time(value)`.
#[must_use]
pub fn compose(
    value: &NaiveDateTime,
    time: bool,
    date: &dyn Fn(&NaiveDateTime) -> String,
    time_of_day: &dyn Fn(&NaiveDateTime) -> String,
) -> String {
    let mut out = date(value);
    if time {
        out.push(' ');
        out.push_str(&time_of_day(value));
    }
    out
}

pub(crate) fn default_date_formatter() -> Formatter {
    Rc::new(format_date)
}

pub(crate) fn default_time_formatter() -> Formatter {
    Rc::new(format_time)
}
