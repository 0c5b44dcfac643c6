// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay collaborator contract and its click-away listener.
//!
//! The overlay anchors the calendar to the trigger field. It reads the picker's
//! `open` state and never mutates it; closing on outside clicks goes back
//! through the picker (see [`Datetime::handle_document_click`](crate::Datetime::handle_document_click)).

use crate::event::Interaction;

/// Where the overlay is anchored relative to its trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Below the trigger, aligned to its left edge.
    #[default]
    BottomLeft,
    /// Below the trigger, aligned to its right edge.
    BottomRight,
    /// Above the trigger, aligned to its left edge.
    TopLeft,
    /// Above the trigger, aligned to its right edge.
    TopRight,
}

impl Position {
    /// The textual anchor name, e.g. `"bottom left"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom left",
            Self::BottomRight => "bottom right",
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
        }
    }
}

/// The interaction that toggles the overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayTrigger {
    /// Clicking the trigger.
    #[default]
    Click,
}

impl OverlayTrigger {
    /// The textual trigger name, e.g. `"click"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
        }
    }
}

/// What the picker hands to its overlay each render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OverlayProps {
    /// Whether the overlay is shown.
    pub open: bool,
    /// Anchor position.
    pub position: Position,
    /// Trigger mode.
    pub on: OverlayTrigger,
}

/// Document-level "click elsewhere closes" listener.
///
/// The picker stops propagation of the click that toggles it, so the same
/// dispatch pass can never reach this listener and undo the toggle.
///
/// ```
/// use understory_datetime::{ClickAway, Interaction, UiEvent};
///
/// let mut event = UiEvent::click();
/// assert!(ClickAway.should_close(true, &event));
///
/// event.stop_propagation();
/// assert!(!ClickAway.should_close(true, &event));
/// assert!(!ClickAway.should_close(false, &UiEvent::click()));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickAway;

impl ClickAway {
    /// Returns `true` if a document click should close an overlay whose
    /// current visibility is `open`.
    #[must_use]
    pub fn should_close<E: Interaction>(self, open: bool, event: &E) -> bool {
        open && !event.is_propagation_stopped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_trigger_field_layout() {
        let props = OverlayProps::default();
        assert!(!props.open);
        assert_eq!(props.position.as_str(), "bottom left");
        assert_eq!(props.on.as_str(), "click");
    }
}
