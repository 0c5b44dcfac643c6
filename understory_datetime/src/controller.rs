// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker's state machine.

use alloc::string::String;
use core::fmt;

use chrono::NaiveDateTime;
use log::{debug, warn};
use understory_controlled::{AutoControlled, Reconciled, StateUpdate};

use crate::calendar::{CalendarProps, DateSelect};
use crate::date_value::RawDate;
use crate::event::{Interaction, UiEvent};
use crate::format::compose;
use crate::overlay::{ClickAway, OverlayProps, OverlayTrigger, Position};
use crate::props::{ChangeData, DatetimeKeys, DatetimeProps};
use crate::view::{DatetimeView, TriggerField, class_list};

/// Whether the overlay is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// The overlay is hidden.
    Closed,
    /// The overlay is shown.
    Open,
}

/// A date/time picker instance.
///
/// Owns the shadow state for `open` and `value` and routes every internal
/// transition through the controlled-state engine, so whatever the parent
/// controls always wins. Notifications run before the state write they
/// announce, so callbacks observe pre-transition state.
///
/// ```
/// use chrono::NaiveDate;
/// use understory_datetime::{Datetime, DatetimeProps, OverlayState, UiEvent};
///
/// let mut picker = Datetime::new(DatetimeProps::new());
///
/// picker.handle_activation(&mut UiEvent::click());
/// assert_eq!(picker.state(), OverlayState::Open);
///
/// let day = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// picker.handle_date_selection(day, &mut UiEvent::select());
///
/// assert_eq!(picker.state(), OverlayState::Closed);
/// assert_eq!(picker.formatted_date().as_deref(), Some("2024-02-10"));
/// ```
pub struct Datetime<E = UiEvent> {
    keys: DatetimeKeys,
    state: AutoControlled,
    props: DatetimeProps<E>,
}

impl<E> Datetime<E> {
    /// Creates a picker from its first props snapshot.
    ///
    /// `open` and `value` resolve as controlled, then default, then empty
    /// (`false` and no selection).
    #[must_use]
    pub fn new(props: DatetimeProps<E>) -> Self {
        let (set, keys) = DatetimeKeys::declare();
        let state = AutoControlled::new(set, props.external(&keys));
        Self { keys, state, props }
    }

    /// Returns the current props snapshot.
    #[must_use]
    pub fn props(&self) -> &DatetimeProps<E> {
        &self.props
    }

    /// Re-render entry point: replaces the props and syncs controlled keys down.
    ///
    /// Call this before handling events of the next render pass.
    pub fn set_props(&mut self, next: DatetimeProps<E>) -> Reconciled {
        let report = self.state.set_props(next.external(&self.keys));
        self.props = next;
        report
    }

    /// Returns the declared keys, for inspecting the underlying state.
    #[must_use]
    pub fn keys(&self) -> DatetimeKeys {
        self.keys
    }

    /// Returns the underlying controlled state.
    #[must_use]
    pub fn controlled_state(&self) -> &AutoControlled {
        &self.state
    }

    /// Returns `true` if the overlay is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.state.get(self.keys.open)
    }

    /// Returns the overlay state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        if self.is_open() {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    /// Returns the selected value, if any.
    #[must_use]
    pub fn value(&self) -> Option<NaiveDateTime> {
        *self.state.get(self.keys.value)
    }

    /// Returns a counter that changes whenever `open` or `value` changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// Opens the overlay unless the picker is disabled.
    ///
    /// Notifies `on_open` first. A controlled `open` stays as the parent set it.
    pub fn open(&mut self, event: &mut E) {
        debug!("open()");
        if self.props.disabled {
            return;
        }
        if let Some(on_open) = &self.props.on_open {
            on_open(event, &self.props);
        }
        self.state
            .try_set(StateUpdate::new().set(self.keys.open, true));
    }

    /// Closes the overlay after notifying `on_close`.
    pub fn close(&mut self, event: &mut E) {
        debug!("close()");
        if let Some(on_close) = &self.props.on_close {
            on_close(event, &self.props);
        }
        self.state
            .try_set(StateUpdate::new().set(self.keys.open, false));
    }

    /// Closes an open overlay, opens a closed one.
    pub fn toggle(&mut self, event: &mut E) {
        if self.is_open() {
            self.close(event);
        } else {
            self.open(event);
        }
    }

    /// The trigger gained focus.
    pub fn handle_focus(&mut self, event: &mut E) {
        debug!("handle_focus()");
        if let Some(on_focus) = &self.props.on_focus {
            on_focus(event, &self.props);
        }
        if self.props.open_on_focus {
            self.open(event);
        }
    }

    /// The trigger lost focus.
    pub fn handle_blur(&mut self, event: &mut E) {
        debug!("handle_blur()");
        if let Some(on_blur) = &self.props.on_blur {
            on_blur(event, &self.props);
        }
        if self.props.close_on_blur && self.is_open() {
            self.close(event);
        }
    }

    /// A pointer was pressed on the trigger. Notifies only.
    pub fn handle_mouse_down(&mut self, event: &mut E) {
        debug!("handle_mouse_down()");
        if let Some(on_mouse_down) = &self.props.on_mouse_down {
            on_mouse_down(event, &self.props);
        }
    }

    /// The trigger text: the composed formatter output, or `None` with no
    /// selection. Formatters are only ever called with a value.
    #[must_use]
    pub fn formatted_date(&self) -> Option<String> {
        self.value().map(|value| {
            compose(
                &value,
                self.props.time,
                &*self.props.date_formatter,
                &*self.props.time_formatter,
            )
        })
    }

    /// What the calendar inside the overlay receives.
    #[must_use]
    pub fn calendar_props(&self) -> CalendarProps {
        CalendarProps {
            content: self.props.content.clone(),
            first_day_of_week: self.props.first_day_of_week,
            time: self.props.time,
            range: self.props.range,
        }
    }

    /// What the overlay receives.
    #[must_use]
    pub fn overlay_props(&self) -> OverlayProps {
        OverlayProps {
            open: self.is_open(),
            position: Position::BottomLeft,
            on: OverlayTrigger::Click,
        }
    }

    /// Derives the trigger field, overlay and calendar from reconciled state.
    #[must_use]
    pub fn view(&self) -> DatetimeView {
        let props = &self.props;
        let field = TriggerField {
            text: self.formatted_date().unwrap_or_default(),
            placeholder: props.placeholder.clone().unwrap_or_default(),
            name: props.name.clone(),
            icon_classes: class_list([props.icon.as_str(), "icon"]),
            classes: class_list([
                "ui input left icon",
                if props.error { "error" } else { "" },
                if props.fluid { "fluid" } else { "" },
                props.class_name.as_deref().unwrap_or_default(),
            ]),
        };
        DatetimeView {
            field,
            overlay: self.overlay_props(),
            calendar: self.calendar_props(),
        }
    }
}

impl<E: Interaction> Datetime<E> {
    /// The trigger was activated.
    ///
    /// Notifies `on_click`, stops the event before any state changes so the
    /// click-away listener never sees it, then toggles.
    pub fn handle_activation(&mut self, event: &mut E) {
        debug!("handle_click()");
        if let Some(on_click) = &self.props.on_click {
            on_click(event, &self.props);
        }
        event.stop_propagation();
        self.toggle(event);
    }

    /// The calendar reported a selection.
    ///
    /// Stops the event, notifies `on_change` with the normalized value, tries
    /// to store it, then closes. A raw value that does not normalize is
    /// logged and skipped; the picker still closes.
    pub fn handle_date_selection(&mut self, date: impl Into<RawDate>, event: &mut E) {
        let date = date.into();
        debug!("handle_date_selection({date:?})");
        event.stop_propagation();
        match date.normalize() {
            Ok(value) => {
                if let Some(on_change) = &self.props.on_change {
                    let data = ChangeData {
                        props: &self.props,
                        value,
                    };
                    on_change(event, &data);
                }
                self.state
                    .try_set(StateUpdate::new().set(self.keys.value, Some(value)));
            }
            Err(err) => warn!("ignoring selection: {err}"),
        }
        self.close(event);
    }

    /// A click reached the document-level listener.
    ///
    /// Closes an open overlay unless the event's propagation was stopped.
    /// Returns `true` if it closed.
    pub fn handle_document_click(&mut self, event: &mut E) -> bool {
        if ClickAway.should_close(self.is_open(), event) {
            self.close(event);
            true
        } else {
            false
        }
    }
}

impl<E: Interaction> DateSelect<E> for Datetime<E> {
    fn select_date(&mut self, date: RawDate, event: &mut E) {
        self.handle_date_selection(date, event);
    }
}

impl<E> fmt::Debug for Datetime<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datetime")
            .field("open", &self.is_open())
            .field("value", &self.value())
            .field("revision", &self.revision())
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}
