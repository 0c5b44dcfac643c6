// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-supplied snapshots and proposed internal updates.
//!
//! [`ExternalProps`] is the engine-facing view of one render's props: a
//! *controlled* layer (`open`, `value`, ...) and a *default* layer
//! (`defaultOpen`, `defaultValue`, ...). [`StateUpdate`] is a partial update a
//! component proposes from inside an event handler.

use crate::id::{ControlledKey, KeyId};
use crate::keyset::KeySet;
use crate::sparse::SparseValues;
use crate::value::{ErasedValue, Value};

/// An immutable-per-render snapshot of the dual-mode props a parent supplied.
///
/// A key is *controlled* when it has an entry in the controlled layer. The
/// controlled value may itself be the key's empty value: a parent can control
/// a selection to "nothing selected".
///
/// # Example
///
/// ```rust
/// use understory_controlled::{ControlledPropSet, ExternalProps};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
/// let value = keys.declare("value", None::<u32>);
///
/// let props = ExternalProps::new()
///     .control(open, true)
///     .with_default(value, Some(7));
///
/// assert!(props.is_controlled(open));
/// assert_eq!(props.controlled(open), Some(&true));
/// assert!(!props.is_controlled(value));
/// assert_eq!(props.default_for(value), Some(&Some(7)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExternalProps {
    controlled: SparseValues,
    defaults: SparseValues,
}

impl ExternalProps {
    /// Creates a snapshot with nothing controlled and no defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ExternalProps::set_controlled`].
    #[must_use]
    pub fn control<T: Value>(mut self, key: ControlledKey<T>, value: T) -> Self {
        self.set_controlled(key, value);
        self
    }

    /// Builder form of [`ExternalProps::set_default`].
    #[must_use]
    pub fn with_default<T: Value>(mut self, key: ControlledKey<T>, value: T) -> Self {
        self.set_default(key, value);
        self
    }

    /// Marks `key` as controlled by the parent with the given value.
    pub fn set_controlled<T: Value>(&mut self, key: ControlledKey<T>, value: T) {
        self.controlled.insert(key.id(), ErasedValue::new(value));
    }

    /// Hands ownership of `key` back to the component.
    ///
    /// Returns `true` if the key was controlled.
    pub fn release<T: Value>(&mut self, key: ControlledKey<T>) -> bool {
        self.controlled.remove(key.id()).is_some()
    }

    /// Sets the initial value used for `key` when it is not controlled.
    pub fn set_default<T: Value>(&mut self, key: ControlledKey<T>, value: T) {
        self.defaults.insert(key.id(), ErasedValue::new(value));
    }

    /// Returns `true` if the parent controls `key`.
    #[must_use]
    #[inline]
    pub fn is_controlled<T: Value>(&self, key: ControlledKey<T>) -> bool {
        self.is_controlled_id(key.id())
    }

    /// Returns `true` if the parent controls the key with this id.
    #[must_use]
    #[inline]
    pub fn is_controlled_id(&self, id: KeyId) -> bool {
        self.controlled.contains(id)
    }

    /// Returns the controlled value of `key`, if the parent controls it.
    #[must_use]
    pub fn controlled<T: Value>(&self, key: ControlledKey<T>) -> Option<&T> {
        self.controlled
            .get(key.id())
            .and_then(ErasedValue::downcast_ref)
    }

    /// Returns the default value supplied for `key`, if any.
    #[must_use]
    pub fn default_for<T: Value>(&self, key: ControlledKey<T>) -> Option<&T> {
        self.defaults.get(key.id()).and_then(ErasedValue::downcast_ref)
    }

    /// Returns the set of keys the parent currently controls.
    #[must_use]
    pub fn controlled_keys(&self) -> KeySet {
        self.controlled.keys()
    }

    pub(crate) fn controlled_erased(&self, id: KeyId) -> Option<&ErasedValue> {
        self.controlled.get(id)
    }

    pub(crate) fn default_erased(&self, id: KeyId) -> Option<&ErasedValue> {
        self.defaults.get(id)
    }
}

/// A partial update proposed by a component from one of its event handlers.
///
/// Only the keys present in the update are considered by
/// [`try_set`](crate::try_set); everything else in the shadow state is left
/// alone.
///
/// ```rust
/// use understory_controlled::{ControlledPropSet, StateUpdate};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
///
/// let update = StateUpdate::new().set(open, true);
/// assert_eq!(update.len(), 1);
/// assert!(update.keys().contains(open.id()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateUpdate {
    values: SparseValues,
}

impl StateUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StateUpdate::insert`].
    #[must_use]
    pub fn set<T: Value>(mut self, key: ControlledKey<T>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Proposes `value` for `key`, replacing an earlier proposal for the same key.
    pub fn insert<T: Value>(&mut self, key: ControlledKey<T>, value: T) {
        self.values.insert(key.id(), ErasedValue::new(value));
    }

    /// Returns the proposed value for `key`, if any.
    #[must_use]
    pub fn get<T: Value>(&self, key: ControlledKey<T>) -> Option<&T> {
        self.values.get(key.id()).and_then(ErasedValue::downcast_ref)
    }

    /// Returns the number of keys in the update.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the update proposes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the set of keys this update touches.
    #[must_use]
    pub fn keys(&self) -> KeySet {
        self.values.keys()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (KeyId, ErasedValue)> {
        self.values.into_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ControlledPropSet;

    #[test]
    fn controlled_and_default_layers_are_independent() {
        let mut keys = ControlledPropSet::new();
        let open = keys.declare("open", false);

        let props = ExternalProps::new()
            .with_default(open, true)
            .control(open, false);

        assert_eq!(props.controlled(open), Some(&false));
        assert_eq!(props.default_for(open), Some(&true));
    }

    #[test]
    fn controlling_to_the_empty_value_still_counts() {
        let mut keys = ControlledPropSet::new();
        let value = keys.declare("value", None::<u32>);

        let props = ExternalProps::new().control(value, None);
        assert!(props.is_controlled(value));
        assert_eq!(props.controlled(value), Some(&None));
    }

    #[test]
    fn release_hands_the_key_back() {
        let mut keys = ControlledPropSet::new();
        let open = keys.declare("open", false);

        let mut props = ExternalProps::new().control(open, true);
        assert!(props.release(open));
        assert!(!props.is_controlled(open));
        assert!(!props.release(open));
        assert!(props.controlled_keys().is_empty());
    }

    #[test]
    fn later_proposals_replace_earlier_ones() {
        let mut keys = ControlledPropSet::new();
        let open = keys.declare("open", false);

        let update = StateUpdate::new().set(open, true).set(open, false);
        assert_eq!(update.len(), 1);
        assert_eq!(update.get(open), Some(&false));
    }
}
