// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact sets of controlled keys.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::id::KeyId;

/// A compact bitfield representing a set of up to 64 keys.
///
/// Reports from [`reconcile`](crate::reconcile) and [`try_set`](crate::try_set)
/// use `KeySet` to say which keys were synced down, written, or dropped.
///
/// # Example
///
/// ```
/// use understory_controlled::{KeyId, KeySet};
///
/// let open = KeyId::new(0);
/// let value = KeyId::new(1);
///
/// let mut set = KeySet::empty();
/// set.insert(open);
///
/// assert!(set.contains(open));
/// assert!(!set.contains(value));
///
/// let both = set | KeySet::from(value);
/// assert_eq!(both.len(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeySet(u64);

impl KeySet {
    /// An empty key set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty key set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if this set contains no keys.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this set contains the given key.
    #[must_use]
    pub const fn contains(self, id: KeyId) -> bool {
        (self.0 & (1_u64 << id.index())) != 0
    }

    /// Inserts a key into the set.
    pub fn insert(&mut self, id: KeyId) {
        self.0 |= 1_u64 << id.index();
    }

    /// Removes a key from the set.
    pub fn remove(&mut self, id: KeyId) {
        self.0 &= !(1_u64 << id.index());
    }

    /// Returns the number of keys in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the keys in this set, in ascending id order.
    #[must_use]
    pub const fn iter(self) -> KeySetIter {
        KeySetIter { bits: self.0 }
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for KeySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for KeySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for KeySet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl From<KeyId> for KeySet {
    fn from(id: KeyId) -> Self {
        Self(1_u64 << id.index())
    }
}

impl FromIterator<KeyId> for KeySet {
    fn from_iter<I: IntoIterator<Item = KeyId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for KeySet {
    type Item = KeyId;
    type IntoIter = KeySetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys in a [`KeySet`].
#[derive(Clone, Debug)]
pub struct KeySetIter {
    bits: u64,
}

impl Iterator for KeySetIter {
    type Item = KeyId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, reason = "trailing_zeros < 64")]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(KeyId::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for KeySetIter {}
