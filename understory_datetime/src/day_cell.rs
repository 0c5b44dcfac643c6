// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single selectable day within a calendar month.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::view::class_list;

/// Click handler for a [`DayCell`].
pub type DayClickHandler<E> = Rc<dyn Fn(&mut E, DayCellData)>;

/// The state a day cell reports to its click handler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DayCellData {
    /// The currently chosen day.
    pub active: bool,
    /// Not selectable.
    pub disabled: bool,
    /// Highlighted by keyboard navigation; distinct from `active`.
    pub selected: bool,
    /// Day of month this cell stands for.
    pub day: Option<u32>,
}

/// Accessibility attributes of a day cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AriaAttributes {
    /// Always `"option"`.
    pub role: &'static str,
    /// `aria-disabled`.
    pub disabled: bool,
    /// `aria-checked`, mirrors `active`.
    pub checked: bool,
    /// `aria-selected`, mirrors `selected`.
    pub selected: bool,
}

/// A day cell.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_datetime::{DayCell, UiEvent};
///
/// let clicked = Rc::new(Cell::new(None));
/// let seen = clicked.clone();
/// let cell = DayCell::<UiEvent>::new()
///     .day(14)
///     .text("14")
///     .active(true)
///     .on_click(move |_, data| seen.set(data.day));
///
/// assert_eq!(cell.classes(), "active item");
/// assert_eq!(cell.display_text(), Some("14"));
///
/// cell.handle_click(&mut UiEvent::click());
/// assert_eq!(clicked.get(), Some(14));
/// ```
pub struct DayCell<E> {
    data: DayCellData,
    text: Option<String>,
    children: Option<String>,
    class_name: Option<String>,
    on_click: Option<DayClickHandler<E>>,
}

impl<E> DayCell<E> {
    /// Creates an inactive, enabled, unselected cell with no day.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: DayCellData::default(),
            text: None,
            children: None,
            class_name: None,
            on_click: None,
        }
    }

    /// Marks the cell as the currently chosen day.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.data.active = active;
        self
    }

    /// Marks the cell as not selectable.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.data.disabled = disabled;
        self
    }

    /// Marks the cell as keyboard-highlighted.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.data.selected = selected;
        self
    }

    /// Sets the day of month.
    #[must_use]
    pub fn day(mut self, day: u32) -> Self {
        self.data.day = Some(day);
        self
    }

    /// Sets the display text, used when there is no primary content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the primary content, which takes precedence over `text`.
    #[must_use]
    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Adds an extra class after the state classes.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl Fn(&mut E, DayCellData) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Returns a copy of the cell's state.
    #[must_use]
    pub fn data(&self) -> DayCellData {
        self.data
    }

    /// Space-separated classes: `active`, `disabled`, `selected` as set, then
    /// `item`, then the extra class.
    #[must_use]
    pub fn classes(&self) -> String {
        let flags = [
            (self.data.active, "active"),
            (self.data.disabled, "disabled"),
            (self.data.selected, "selected"),
            (true, "item"),
        ];
        class_list(
            flags
                .into_iter()
                .filter_map(|(on, name)| on.then_some(name))
                .chain(self.class_name.as_deref()),
        )
    }

    /// Accessibility attributes for the cell.
    #[must_use]
    pub fn aria(&self) -> AriaAttributes {
        AriaAttributes {
            role: "option",
            disabled: self.data.disabled,
            checked: self.data.active,
            selected: self.data.selected,
        }
    }

    /// The text to render: primary content if present, else `text`.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.children.as_deref().or(self.text.as_deref())
    }

    /// Forwards a click to the handler, if one is set.
    pub fn handle_click(&self, event: &mut E) {
        if let Some(on_click) = &self.on_click {
            on_click(event, self.data);
        }
    }
}

impl<E> Default for DayCell<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for DayCell<E> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            text: self.text.clone(),
            children: self.children.clone(),
            class_name: self.class_name.clone(),
            on_click: self.on_click.clone(),
        }
    }
}

impl<E> fmt::Debug for DayCell<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayCell")
            .field("data", &self.data)
            .field("text", &self.text)
            .field("children", &self.children)
            .field("class_name", &self.class_name)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::UiEvent;
    use core::cell::Cell;

    #[test]
    fn class_order_is_state_then_item_then_extra() {
        let cell = DayCell::<UiEvent>::new()
            .selected(true)
            .disabled(true)
            .active(true)
            .class_name("weekend");
        assert_eq!(cell.classes(), "active disabled selected item weekend");
        assert_eq!(DayCell::<UiEvent>::new().classes(), "item");
    }

    #[test]
    fn aria_mirrors_flags() {
        let aria = DayCell::<UiEvent>::new().active(true).aria();
        assert_eq!(
            aria,
            AriaAttributes {
                role: "option",
                disabled: false,
                checked: true,
                selected: false,
            }
        );
    }

    #[test]
    fn children_win_over_text() {
        let cell = DayCell::<UiEvent>::new().text("3").children("3rd");
        assert_eq!(cell.display_text(), Some("3rd"));
        assert_eq!(DayCell::<UiEvent>::new().display_text(), None);
    }

    #[test]
    fn click_without_handler_is_a_no_op() {
        DayCell::<UiEvent>::new().handle_click(&mut UiEvent::click());
    }

    #[test]
    fn click_receives_a_copy_of_the_state() {
        let seen = Rc::new(Cell::new(DayCellData::default()));
        let sink = seen.clone();
        let cell = DayCell::<UiEvent>::new()
            .day(3)
            .selected(true)
            .on_click(move |_, data| sink.set(data));
        cell.handle_click(&mut UiEvent::click());
        assert_eq!(
            seen.get(),
            DayCellData {
                active: false,
                disabled: false,
                selected: true,
                day: Some(3),
            }
        );
    }
}
