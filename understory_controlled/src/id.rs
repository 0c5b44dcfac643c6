// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled key identification types.
//!
//! This module provides [`KeyId`] for runtime key identification and
//! [`ControlledKey<T>`] for type-safe compile-time keys.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A runtime identifier for a dual-mode key.
///
/// This is a lightweight handle (u8) that identifies a key within a
/// [`ControlledPropSet`](crate::ControlledPropSet). Ids are dense and assigned
/// in declaration order, so at most 64 keys fit in one set (the capacity of
/// [`KeySet`](crate::KeySet)).
///
/// # Example
///
/// ```rust
/// use understory_controlled::KeyId;
///
/// let id = KeyId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyId(u8);

impl KeyId {
    /// The maximum number of keys a single component can declare.
    pub const MAX_KEYS: usize = 64;

    /// Creates a new key ID from the given index.
    ///
    /// This is typically called by
    /// [`ControlledPropSet::declare`](crate::ControlledPropSet::declare)
    /// rather than directly.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 64`.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!(index < 64, "KeyId index must be less than 64");
        Self(index)
    }

    /// Returns the underlying index of this key ID.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyId").field(&self.0).finish()
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self.0)
    }
}

/// A type-safe dual-mode key with a phantom value type.
///
/// The phantom type ties a [`KeyId`] to the type of value stored under it, so
/// that controlled values, defaults, updates and reads are all checked at
/// compile time:
///
/// ```rust
/// use understory_controlled::{ControlledKey, ControlledPropSet};
///
/// let mut keys = ControlledPropSet::new();
/// let open: ControlledKey<bool> = keys.declare("open", false);
///
/// assert_eq!(keys.name(open.id()), Some("open"));
/// // ExternalProps::new().control(open, "yes"); // Would not compile!
/// ```
///
/// `ControlledKey<T>` is the same size as [`KeyId`].
pub struct ControlledKey<T> {
    id: KeyId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ControlledKey<T> {
    /// Creates a typed key from a key ID.
    ///
    /// The caller must ensure that the `KeyId` was declared with the same type
    /// `T`. Mismatched types make typed reads of that key return `None`.
    #[must_use]
    #[inline]
    pub const fn from_id(id: KeyId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying key ID.
    #[must_use]
    #[inline]
    pub const fn id(self) -> KeyId {
        self.id
    }
}

// Manual trait implementations to avoid requiring T: Clone, etc.

impl<T> Copy for ControlledKey<T> {}

impl<T> Clone for ControlledKey<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for ControlledKey<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ControlledKey<T> {}

impl<T> Hash for ControlledKey<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for ControlledKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledKey")
            .field("id", &self.id)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn key_id_basics() {
        let id = KeyId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id, KeyId::new(42));
        assert_ne!(id, KeyId::new(43));
    }

    #[test]
    fn key_id_debug_and_display() {
        let id = KeyId::new(7);
        assert_eq!(format!("{:?}", id), "KeyId(7)");
        assert_eq!(format!("{}", id), "KeyId(7)");
    }

    #[test]
    #[should_panic(expected = "KeyId index must be less than 64")]
    fn key_id_out_of_range_panics() {
        let _ = KeyId::new(64);
    }

    #[test]
    fn typed_keys_share_ids() {
        let id = KeyId::new(1);
        let flag: ControlledKey<bool> = ControlledKey::from_id(id);
        let text: ControlledKey<String> = ControlledKey::from_id(id);
        assert_eq!(flag.id(), text.id());
    }

    #[test]
    fn key_size() {
        use core::mem::size_of;
        assert_eq!(size_of::<KeyId>(), 1);
        assert_eq!(size_of::<ControlledKey<String>>(), 1);
    }
}
