// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_datetime --heading-base-level=0

//! Understory Datetime: a headless date/time picker state machine.
//!
//! [`Datetime`] owns two dual-mode values, overlay visibility (`open`) and the
//! selected date-time (`value`). Each can be *controlled* by the parent
//! through [`DatetimeProps`] or left to the picker, seeded from an optional
//! default. Ownership is reconciled by [`understory_controlled`]: a value the
//! parent controls always wins, and internal transitions on it are dropped.
//!
//! The crate draws nothing. It derives render-ready descriptions
//! ([`DatetimeView`], [`OverlayProps`], [`CalendarProps`], [`DayCell`]) that a
//! host toolkit turns into widgets, and it consumes host events through the
//! small [`Interaction`] trait.
//!
//! ## Transitions
//!
//! - [`Datetime::open`] / [`Datetime::close`] / [`Datetime::toggle`]: notify,
//!   then request the `open` change. `disabled` suppresses opening only.
//! - [`Datetime::handle_activation`]: notify `on_click`, stop propagation,
//!   toggle. The click that opens the overlay never reaches the click-away
//!   listener ([`Datetime::handle_document_click`]).
//! - [`Datetime::handle_date_selection`]: stop propagation, normalize the
//!   [`RawDate`], notify `on_change`, request the `value` change, close.
//! - [`Datetime::set_props`]: the re-render entry point; syncs controlled
//!   values down before any later event is handled.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_datetime::{Datetime, DatetimeProps, UiEvent};
//!
//! let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut picker = Datetime::new(
//!     DatetimeProps::new()
//!         .default_value(jan_1.and_hms_opt(0, 0, 0).unwrap())
//!         .placeholder("Pick a date"),
//! );
//! assert_eq!(picker.view().field.text, "2024-01-01");
//!
//! picker.open(&mut UiEvent::click());
//! picker.handle_date_selection("2024-02-10", &mut UiEvent::select());
//!
//! let view = picker.view();
//! assert_eq!(view.field.text, "2024-02-10");
//! assert!(!view.overlay.open);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `chrono/std` and `understory_controlled/std`.
//! - `serde`: `Serialize`/`Deserialize` for [`Content`] and [`FirstDayOfWeek`].
//!
//! Transitions are logged at `debug` level and discarded selections at `warn`
//! level through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod calendar;
mod content;
mod controller;
mod date_value;
mod day_cell;
mod event;
pub mod format;
mod overlay;
mod props;
mod view;

pub use calendar::{CalendarProps, DateSelect};
pub use content::{Content, FirstDayOfWeek, InvalidFirstDayOfWeek};
pub use controller::{Datetime, OverlayState};
pub use date_value::{InvalidDate, RawDate};
pub use day_cell::{AriaAttributes, DayCell, DayCellData, DayClickHandler};
pub use event::{EventKind, Interaction, UiEvent};
pub use format::Formatter;
pub use overlay::{ClickAway, OverlayProps, OverlayTrigger, Position};
pub use props::{Callback, ChangeCallback, ChangeData, DatetimeKeys, DatetimeProps};
pub use view::{DatetimeView, TriggerField};
