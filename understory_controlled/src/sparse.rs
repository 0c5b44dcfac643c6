// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse per-key value storage shared by props, updates and shadow state.
//!
//! Following the `WinUI` `vector_map` approach, entries live in a sorted
//! `SmallVec` searched by [`KeyId`]. Components declare a handful of dual-mode
//! keys, so the common case stays inline without heap allocation.

use smallvec::SmallVec;

use crate::id::KeyId;
use crate::keyset::KeySet;
use crate::value::ErasedValue;

/// Most components declare fewer than four dual-mode keys.
const INLINE_CAPACITY: usize = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SparseValues {
    entries: SmallVec<[(KeyId, ErasedValue); INLINE_CAPACITY]>,
}

impl SparseValues {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn find(&self, id: KeyId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(kid, _)| *kid)
    }

    pub(crate) fn get(&self, id: KeyId) -> Option<&ErasedValue> {
        self.find(id).ok().map(|idx| &self.entries[idx].1)
    }

    pub(crate) fn contains(&self, id: KeyId) -> bool {
        self.find(id).is_ok()
    }

    /// Stores `value` under `id`, replacing any previous entry.
    pub(crate) fn insert(&mut self, id: KeyId, value: ErasedValue) {
        match self.find(id) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (id, value)),
        }
    }

    /// Stores a copy of `value` under `id` unless an equal value is already there.
    ///
    /// Returns `true` if the stored value changed.
    pub(crate) fn replace_if_changed(&mut self, id: KeyId, value: &ErasedValue) -> bool {
        match self.find(id) {
            Ok(idx) if self.entries[idx].1 == *value => false,
            Ok(idx) => {
                self.entries[idx].1 = value.clone();
                true
            }
            Err(idx) => {
                self.entries.insert(idx, (id, value.clone()));
                true
            }
        }
    }

    pub(crate) fn remove(&mut self, id: KeyId) -> Option<ErasedValue> {
        self.find(id).ok().map(|idx| self.entries.remove(idx).1)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn keys(&self) -> KeySet {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (KeyId, ErasedValue)> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_stay_sorted() {
        let mut values = SparseValues::new();
        values.insert(KeyId::new(5), ErasedValue::new(5_u8));
        values.insert(KeyId::new(1), ErasedValue::new(1_u8));
        values.insert(KeyId::new(3), ErasedValue::new(3_u8));
        assert_eq!(values.len(), 3);

        let ids: alloc::vec::Vec<u8> = values
            .into_entries()
            .map(|(id, _)| id.index())
            .collect();
        assert_eq!(ids, [1, 3, 5]);
    }

    #[test]
    fn replace_if_changed_reports_changes_only() {
        let id = KeyId::new(0);
        let mut values = SparseValues::new();

        assert!(values.replace_if_changed(id, &ErasedValue::new(true)));
        assert!(!values.replace_if_changed(id, &ErasedValue::new(true)));
        assert!(values.replace_if_changed(id, &ErasedValue::new(false)));
        assert_eq!(values.get(id), Some(&ErasedValue::new(false)));
    }

    #[test]
    fn remove_returns_previous_value() {
        let id = KeyId::new(2);
        let mut values = SparseValues::new();
        values.insert(id, ErasedValue::new(9_i32));

        assert_eq!(values.remove(id), Some(ErasedValue::new(9_i32)));
        assert!(values.remove(id).is_none());
        assert!(values.is_empty());
    }
}
