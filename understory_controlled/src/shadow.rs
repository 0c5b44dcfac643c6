// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance shadow state.

use crate::id::{ControlledKey, KeyId};
use crate::keys::ControlledPropSet;
use crate::keyset::KeySet;
use crate::sparse::SparseValues;
use crate::value::{ErasedValue, Value};

/// A component instance's internally held mirror of its dual-mode values.
///
/// The shadow state is created by [`initialize`](crate::initialize) and only
/// mutated by [`reconcile`](crate::reconcile) (sync-down) and
/// [`try_set`](crate::try_set) (guarded internal writes).
///
/// The revision counter is bumped only when a stored value actually changes,
/// so it doubles as a cheap "does this instance need to re-render?" marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadowState {
    values: SparseValues,
    revision: u64,
}

impl ShadowState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `key`.
    ///
    /// Returns `None` if the key has never been written or the type doesn't
    /// match. Every declared key is present after [`initialize`](crate::initialize).
    #[must_use]
    pub fn get<T: Value>(&self, key: ControlledKey<T>) -> Option<&T> {
        self.values.get(key.id()).and_then(ErasedValue::downcast_ref)
    }

    /// Returns the current value of `key`, falling back to its declared empty value.
    ///
    /// # Panics
    ///
    /// Panics if `key` is neither present in this state nor declared in `keys`
    /// with type `T`.
    #[must_use]
    pub fn get_or_empty<'a, T: Value>(
        &'a self,
        key: ControlledKey<T>,
        keys: &'a ControlledPropSet,
    ) -> &'a T {
        if let Some(value) = self.get(key) {
            return value;
        }
        if let Some(empty) = keys.empty(key) {
            return empty;
        }
        panic!("Key {:?} not declared with this type", key.id());
    }

    /// Returns `true` if a value is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: KeyId) -> bool {
        self.values.contains(id)
    }

    /// Returns the set of keys with a stored value.
    #[must_use]
    pub fn keys(&self) -> KeySet {
        self.values.keys()
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the current revision counter.
    ///
    /// A freshly initialized state starts at revision 0.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn get_erased(&self, id: KeyId) -> Option<&ErasedValue> {
        self.values.get(id)
    }

    /// Seeds a value during initialization without touching the revision.
    pub(crate) fn seed(&mut self, id: KeyId, value: ErasedValue) {
        self.values.insert(id, value);
    }

    /// Writes `value` under `id`, bumping the revision if it changed anything.
    pub(crate) fn write(&mut self, id: KeyId, value: &ErasedValue) -> bool {
        let changed = self.values.replace_if_changed(id, value);
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }
}
