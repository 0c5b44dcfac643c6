// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared dual-mode key sets.
//!
//! This module provides [`ControlledPropSet`], the per-component-type list of
//! keys that may be either controlled by a parent or managed internally.

use alloc::vec::Vec;
use core::any::TypeId;
use hashbrown::HashMap;

use crate::id::{ControlledKey, KeyId};
use crate::keyset::KeySet;
use crate::value::{ErasedValue, Value};

/// A declaration entry for a dual-mode key.
#[derive(Clone)]
pub struct KeyDeclaration {
    name: &'static str,
    type_id: TypeId,
    empty: ErasedValue,
}

impl KeyDeclaration {
    /// Returns the key name (for example `"open"`).
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the key's value type.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type-appropriate empty value used when neither a controlled
    /// value nor a default is supplied.
    #[must_use]
    #[inline]
    pub fn empty(&self) -> &ErasedValue {
        &self.empty
    }
}

impl core::fmt::Debug for KeyDeclaration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyDeclaration")
            .field("name", &self.name)
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

/// The set of keys a component type declares as dual-mode.
///
/// Declare keys once, when the component type is defined; every instance of
/// that type then uses an identical set. Ids are assigned densely in
/// declaration order.
///
/// # Example
///
/// ```rust
/// use understory_controlled::ControlledPropSet;
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
/// let value = keys.declare("value", None::<u32>);
///
/// assert_eq!(keys.len(), 2);
/// assert_eq!(keys.by_name("value"), Some(value.id()));
/// assert_eq!(keys.empty(open), Some(&false));
/// assert!(keys.ids().contains(open.id()));
/// ```
#[derive(Clone, Default)]
pub struct ControlledPropSet {
    keys: Vec<KeyDeclaration>,
    by_name: HashMap<&'static str, KeyId>,
}

impl ControlledPropSet {
    /// Creates a new empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new dual-mode key with the given name and empty value.
    ///
    /// Returns a type-safe [`ControlledKey<T>`] handle for the key.
    ///
    /// # Panics
    ///
    /// Panics if a key with the same name is already declared, or if more than
    /// 64 keys are declared.
    pub fn declare<T: Value>(&mut self, name: &'static str, empty: T) -> ControlledKey<T> {
        assert!(
            !self.by_name.contains_key(name),
            "Key '{name}' is already declared"
        );
        assert!(
            self.keys.len() < KeyId::MAX_KEYS,
            "Too many controlled keys declared (max {})",
            KeyId::MAX_KEYS
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = KeyId::new(self.keys.len() as u8);

        self.keys.push(KeyDeclaration {
            name,
            type_id: TypeId::of::<T>(),
            empty: ErasedValue::new(empty),
        });
        self.by_name.insert(name, id);

        ControlledKey::from_id(id)
    }

    /// Returns the number of declared keys.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no keys are declared.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if `id` was declared in this set.
    #[must_use]
    #[inline]
    pub fn contains(&self, id: KeyId) -> bool {
        usize::from(id.index()) < self.keys.len()
    }

    /// Looks up a key by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<KeyId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of a key.
    #[must_use]
    pub fn name(&self, id: KeyId) -> Option<&'static str> {
        self.get(id).map(KeyDeclaration::name)
    }

    /// Returns the declaration for a key.
    #[must_use]
    pub fn get(&self, id: KeyId) -> Option<&KeyDeclaration> {
        self.keys.get(usize::from(id.index()))
    }

    /// Returns the empty value of a typed key.
    ///
    /// Returns `None` if the key is not declared or the type doesn't match.
    #[must_use]
    pub fn empty<T: Value>(&self, key: ControlledKey<T>) -> Option<&T> {
        self.get(key.id())
            .and_then(|declaration| declaration.empty.downcast_ref())
    }

    /// Returns every declared key as a [`KeySet`].
    #[must_use]
    pub fn ids(&self) -> KeySet {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Returns an iterator over all declared keys in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, &KeyDeclaration)> {
        self.keys.iter().enumerate().map(|(i, declaration)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len <= 64")]
            (KeyId::new(i as u8), declaration)
        })
    }

    /// Panics if `id` is declared with a type other than `value`'s.
    pub(crate) fn check_type(&self, id: KeyId, value: &ErasedValue) {
        if let Some(declaration) = self.get(id) {
            assert!(
                declaration.type_id == value.type_id(),
                "Key '{}' was declared with a different value type",
                declaration.name
            );
        }
    }

    /// Returns a printable name for `id`, falling back for undeclared keys.
    pub(crate) fn display_name(&self, id: KeyId) -> &'static str {
        self.name(id).unwrap_or("<undeclared>")
    }
}

impl core::fmt::Debug for ControlledPropSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlledPropSet")
            .field("count", &self.keys.len())
            .field(
                "keys",
                &self.keys.iter().map(|k| k.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
