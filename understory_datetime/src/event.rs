// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction events as seen by the picker.
//!
//! The controller only needs one thing from the host toolkit's events: a way to
//! stop them from reaching ancestor listeners (in particular the overlay's
//! "click elsewhere closes" listener). [`Interaction`] captures that; [`UiEvent`]
//! is a small concrete event for hosts without their own type.

/// An event the picker can stop from propagating to ancestor listeners.
pub trait Interaction {
    /// Stops the event from reaching listeners further along the dispatch path.
    fn stop_propagation(&mut self);

    /// Returns `true` once [`Interaction::stop_propagation`] has been called.
    fn is_propagation_stopped(&self) -> bool;
}

/// The kind of user interaction that produced a [`UiEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary activation (click, tap, Enter on the trigger).
    Click,
    /// Pointer pressed on the trigger.
    MouseDown,
    /// The trigger gained focus.
    Focus,
    /// The trigger lost focus.
    Blur,
    /// A day or time was picked in the calendar.
    Select,
}

/// A minimal interaction event.
///
/// ```
/// use understory_datetime::{EventKind, Interaction, UiEvent};
///
/// let mut event = UiEvent::new(EventKind::Click);
/// assert!(!event.is_propagation_stopped());
/// event.stop_propagation();
/// assert!(event.is_propagation_stopped());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UiEvent {
    /// What produced the event.
    pub kind: EventKind,
    propagation_stopped: bool,
}

impl UiEvent {
    /// Creates a fresh, still-propagating event.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            propagation_stopped: false,
        }
    }

    /// Shorthand for `UiEvent::new(EventKind::Click)`.
    #[must_use]
    pub const fn click() -> Self {
        Self::new(EventKind::Click)
    }

    /// Shorthand for `UiEvent::new(EventKind::Select)`.
    #[must_use]
    pub const fn select() -> Self {
        Self::new(EventKind::Select)
    }
}

impl Interaction for UiEvent {
    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
