// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker's public configuration surface.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use chrono::NaiveDateTime;
use understory_controlled::{ControlledKey, ControlledPropSet, ExternalProps};

use crate::content::{Content, FirstDayOfWeek};
use crate::event::UiEvent;
use crate::format::{Formatter, default_date_formatter, default_time_formatter};

/// Event notification receiving the event and the full props snapshot.
pub type Callback<E> = Rc<dyn Fn(&mut E, &DatetimeProps<E>)>;

/// Change notification receiving the event, the props and the proposed value.
pub type ChangeCallback<E> = Rc<dyn Fn(&mut E, &ChangeData<'_, E>)>;

/// Payload of [`DatetimeProps::on_change`].
pub struct ChangeData<'a, E> {
    /// The props snapshot at the time of selection.
    pub props: &'a DatetimeProps<E>,
    /// The proposed value, before the picker tries to store it.
    pub value: NaiveDateTime,
}

impl<E> fmt::Debug for ChangeData<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeData")
            .field("props", self.props)
            .field("value", &self.value)
            .finish()
    }
}

/// The keys the picker declares as dual-mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DatetimeKeys {
    /// Overlay visibility. Empty value `false`.
    pub open: ControlledKey<bool>,
    /// Selected date-time. Empty value `None`.
    pub value: ControlledKey<Option<NaiveDateTime>>,
}

impl DatetimeKeys {
    /// Declares `open` and `value` in a fresh key set.
    #[must_use]
    pub fn declare() -> (ControlledPropSet, Self) {
        let mut set = ControlledPropSet::new();
        let open = set.declare("open", false);
        let value = set.declare("value", None);
        (set, Self { open, value })
    }
}

/// Props of a [`Datetime`](crate::Datetime) picker.
///
/// Built with consuming setters and re-supplied whole on every render through
/// [`Datetime::set_props`](crate::Datetime::set_props).
///
/// `open` and `value` are *controlled* when set: the picker then mirrors them
/// and never changes them itself. `default_open` and `default_value` only seed
/// an uncontrolled picker when it is created.
///
/// ```
/// use understory_datetime::{DatetimeProps, FirstDayOfWeek};
///
/// let props: DatetimeProps = DatetimeProps::new()
///     .time(true)
///     .first_day_of_week(FirstDayOfWeek::Monday)
///     .placeholder("Pick a date")
///     .default_open(false);
///
/// assert!(props.time);
/// assert_eq!(props.icon, "calendar");
/// assert!(props.open.is_none());
/// ```
pub struct DatetimeProps<E = UiEvent> {
    /// Controlled overlay visibility.
    pub open: Option<bool>,
    /// Initial overlay visibility when uncontrolled.
    pub default_open: Option<bool>,
    /// Controlled selection. `Some(None)` controls the picker to "no selection".
    pub value: Option<Option<NaiveDateTime>>,
    /// Initial selection when uncontrolled.
    pub default_value: Option<NaiveDateTime>,
    /// Suppresses every transition that would open the overlay.
    pub disabled: bool,
    /// Enables time-of-day selection and combined formatting.
    pub time: bool,
    /// Asks the calendar for a two-month range view.
    pub range: bool,
    /// First column of the calendar grid.
    pub first_day_of_week: FirstDayOfWeek,
    /// Formats the date part of the value.
    pub date_formatter: Formatter,
    /// Formats the time part of the value when `time` is on.
    pub time_formatter: Formatter,
    /// Localized labels.
    pub content: Rc<Content>,
    /// Opens the overlay when the trigger gains focus.
    pub open_on_focus: bool,
    /// Closes the overlay when the trigger loses focus.
    pub close_on_blur: bool,
    /// Hint shown while there is no selection.
    pub placeholder: Option<String>,
    /// Icon name; rendered as `"<icon> icon"`.
    pub icon: String,
    /// Form field name.
    pub name: Option<String>,
    /// Shows the field in its error style.
    pub error: bool,
    /// Stretches the field to its container's width.
    pub fluid: bool,
    /// Extra classes for the field container.
    pub class_name: Option<String>,
    /// Called before the overlay opens.
    pub on_open: Option<Callback<E>>,
    /// Called before the overlay closes.
    pub on_close: Option<Callback<E>>,
    /// Called with the proposed value before a selection is stored.
    pub on_change: Option<ChangeCallback<E>>,
    /// Called when the trigger is activated.
    pub on_click: Option<Callback<E>>,
    /// Called when the trigger loses focus.
    pub on_blur: Option<Callback<E>>,
    /// Called when the trigger gains focus.
    pub on_focus: Option<Callback<E>>,
    /// Called when a pointer is pressed on the trigger.
    pub on_mouse_down: Option<Callback<E>>,
}

impl<E> DatetimeProps<E> {
    /// Creates props with every default: uncontrolled, English content,
    /// `YYYY-MM-DD` / `HH:MM` formatters, Sunday first, `"calendar"` icon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: None,
            default_open: None,
            value: None,
            default_value: None,
            disabled: false,
            time: false,
            range: false,
            first_day_of_week: FirstDayOfWeek::Sunday,
            date_formatter: default_date_formatter(),
            time_formatter: default_time_formatter(),
            content: Rc::new(Content::default()),
            open_on_focus: false,
            close_on_blur: false,
            placeholder: None,
            icon: String::from("calendar"),
            name: None,
            error: false,
            fluid: false,
            class_name: None,
            on_open: None,
            on_close: None,
            on_change: None,
            on_click: None,
            on_blur: None,
            on_focus: None,
            on_mouse_down: None,
        }
    }

    /// Controls overlay visibility.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Seeds overlay visibility of an uncontrolled picker.
    #[must_use]
    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = Some(open);
        self
    }

    /// Controls the selection.
    #[must_use]
    pub fn value(mut self, value: NaiveDateTime) -> Self {
        self.value = Some(Some(value));
        self
    }

    /// Controls the selection to "no selection".
    #[must_use]
    pub fn value_cleared(mut self) -> Self {
        self.value = Some(None);
        self
    }

    /// Seeds the selection of an uncontrolled picker.
    #[must_use]
    pub fn default_value(mut self, value: NaiveDateTime) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets `disabled`.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets `time`.
    #[must_use]
    pub fn time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    /// Sets `range`.
    #[must_use]
    pub fn range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    /// Sets the first day of the week.
    #[must_use]
    pub fn first_day_of_week(mut self, first: FirstDayOfWeek) -> Self {
        self.first_day_of_week = first;
        self
    }

    /// Replaces the date formatter.
    #[must_use]
    pub fn date_formatter(mut self, formatter: impl Fn(&NaiveDateTime) -> String + 'static) -> Self {
        self.date_formatter = Rc::new(formatter);
        self
    }

    /// Replaces the time formatter.
    #[must_use]
    pub fn time_formatter(mut self, formatter: impl Fn(&NaiveDateTime) -> String + 'static) -> Self {
        self.time_formatter = Rc::new(formatter);
        self
    }

    /// Replaces the localization bundle.
    #[must_use]
    pub fn content(mut self, content: impl Into<Rc<Content>>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets `open_on_focus`.
    #[must_use]
    pub fn open_on_focus(mut self, enabled: bool) -> Self {
        self.open_on_focus = enabled;
        self
    }

    /// Sets `close_on_blur`.
    #[must_use]
    pub fn close_on_blur(mut self, enabled: bool) -> Self {
        self.close_on_blur = enabled;
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Sets the form field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `error`.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Sets `fluid`.
    #[must_use]
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Sets extra container classes.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the `on_open` notification.
    #[must_use]
    pub fn on_open(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_open = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_close` notification.
    #[must_use]
    pub fn on_close(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_close = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_change` notification.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn(&mut E, &ChangeData<'_, E>) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_click` notification.
    #[must_use]
    pub fn on_click(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_blur` notification.
    #[must_use]
    pub fn on_blur(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_blur = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_focus` notification.
    #[must_use]
    pub fn on_focus(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_focus = Some(Rc::new(callback));
        self
    }

    /// Sets the `on_mouse_down` notification.
    #[must_use]
    pub fn on_mouse_down(mut self, callback: impl Fn(&mut E, &Self) + 'static) -> Self {
        self.on_mouse_down = Some(Rc::new(callback));
        self
    }

    /// The engine-facing part of this snapshot: controlled and default layers
    /// for `open` and `value`.
    #[must_use]
    pub fn external(&self, keys: &DatetimeKeys) -> ExternalProps {
        let mut external = ExternalProps::new();
        if let Some(open) = self.open {
            external.set_controlled(keys.open, open);
        }
        if let Some(open) = self.default_open {
            external.set_default(keys.open, open);
        }
        if let Some(value) = self.value {
            external.set_controlled(keys.value, value);
        }
        if let Some(value) = self.default_value {
            external.set_default(keys.value, Some(value));
        }
        external
    }
}

impl<E> Default for DatetimeProps<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for DatetimeProps<E> {
    fn clone(&self) -> Self {
        Self {
            open: self.open,
            default_open: self.default_open,
            value: self.value,
            default_value: self.default_value,
            disabled: self.disabled,
            time: self.time,
            range: self.range,
            first_day_of_week: self.first_day_of_week,
            date_formatter: self.date_formatter.clone(),
            time_formatter: self.time_formatter.clone(),
            content: self.content.clone(),
            open_on_focus: self.open_on_focus,
            close_on_blur: self.close_on_blur,
            placeholder: self.placeholder.clone(),
            icon: self.icon.clone(),
            name: self.name.clone(),
            error: self.error,
            fluid: self.fluid,
            class_name: self.class_name.clone(),
            on_open: self.on_open.clone(),
            on_close: self.on_close.clone(),
            on_change: self.on_change.clone(),
            on_click: self.on_click.clone(),
            on_blur: self.on_blur.clone(),
            on_focus: self.on_focus.clone(),
            on_mouse_down: self.on_mouse_down.clone(),
        }
    }
}

impl<E> fmt::Debug for DatetimeProps<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatetimeProps")
            .field("open", &self.open)
            .field("default_open", &self.default_open)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("disabled", &self.disabled)
            .field("time", &self.time)
            .field("range", &self.range)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("open_on_focus", &self.open_on_focus)
            .field("close_on_blur", &self.close_on_blur)
            .field("placeholder", &self.placeholder)
            .field("icon", &self.icon)
            .field("name", &self.name)
            .field("error", &self.error)
            .field("fluid", &self.fluid)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}
