// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The calendar collaborator contract.

use alloc::rc::Rc;

use chrono::{Datelike, NaiveDate};

use crate::content::{Content, FirstDayOfWeek};
use crate::date_value::RawDate;

/// What the picker hands to the calendar that renders inside its overlay.
///
/// Derived from the picker's props by
/// [`Datetime::calendar_props`](crate::Datetime::calendar_props). `range` is a
/// pure pass-through: the picker's state machine never branches on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarProps {
    /// Localized labels.
    pub content: Rc<Content>,
    /// First column of the month grid.
    pub first_day_of_week: FirstDayOfWeek,
    /// Whether time-of-day selection is shown.
    pub time: bool,
    /// Whether two months (range start and end) are shown.
    pub range: bool,
}

impl CalendarProps {
    /// Short weekday headers in grid-column order.
    #[must_use]
    pub fn weekday_headers(&self) -> [&str; 7] {
        self.content.weekday_headers(self.first_day_of_week)
    }

    /// Number of empty cells before `date`'s month starts in the first grid row.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use std::rc::Rc;
    /// use understory_datetime::{CalendarProps, Content, FirstDayOfWeek};
    ///
    /// let props = CalendarProps {
    ///     content: Rc::new(Content::default()),
    ///     first_day_of_week: FirstDayOfWeek::Monday,
    ///     time: false,
    ///     range: false,
    /// };
    /// // March 2024 starts on a Friday.
    /// let march = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    /// assert_eq!(props.leading_blanks(march), 4);
    /// ```
    #[must_use]
    pub fn leading_blanks(&self, date: NaiveDate) -> u32 {
        let first = date.with_day(1).unwrap_or(date);
        first
            .weekday()
            .days_since(self.first_day_of_week.weekday())
    }
}

/// Receiver of calendar selections.
///
/// The calendar invokes [`DateSelect::select_date`] exactly once per user
/// selection. [`Datetime`](crate::Datetime) implements it by forwarding to
/// [`Datetime::handle_date_selection`](crate::Datetime::handle_date_selection).
pub trait DateSelect<E> {
    /// Reports that the user picked `date` during `event`.
    fn select_date(&mut self, date: RawDate, event: &mut E);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(first_day_of_week: FirstDayOfWeek) -> CalendarProps {
        CalendarProps {
            content: Rc::new(Content::default()),
            first_day_of_week,
            time: false,
            range: false,
        }
    }

    #[test]
    fn leading_blanks_follow_first_day() {
        // September 2024 starts on a Sunday.
        let september = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        assert_eq!(props(FirstDayOfWeek::Sunday).leading_blanks(september), 0);
        assert_eq!(props(FirstDayOfWeek::Monday).leading_blanks(september), 6);
    }

    #[test]
    fn headers_use_the_bundle() {
        let mut content = Content::default();
        content.days_short[0] = "Su".into();
        let props = CalendarProps {
            content: Rc::new(content),
            first_day_of_week: FirstDayOfWeek::Monday,
            time: true,
            range: false,
        };
        assert_eq!(props.weekday_headers()[6], "Su");
    }
}
