// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready output derived from reconciled picker state.

use alloc::string::String;

use crate::calendar::CalendarProps;
use crate::overlay::OverlayProps;

/// Joins non-empty class names with single spaces.
pub(crate) fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for class in classes.into_iter().filter(|c| !c.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// The text input that triggers the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerField {
    /// Formatted selection, or empty with no selection.
    pub text: String,
    /// Hint shown while `text` is empty.
    pub placeholder: String,
    /// Form field name.
    pub name: Option<String>,
    /// Classes of the leading icon, e.g. `"calendar icon"`.
    pub icon_classes: String,
    /// Classes of the field container, e.g. `"ui input left icon error"`.
    pub classes: String,
}

/// Everything a host needs to draw one picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatetimeView {
    /// The trigger field.
    pub field: TriggerField,
    /// Overlay configuration.
    pub overlay: OverlayProps,
    /// Calendar configuration.
    pub calendar: CalendarProps,
}
