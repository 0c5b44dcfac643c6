// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made owner for one component instance's auto-controlled state.

use crate::engine::{Applied, Reconciled, initialize, reconcile, try_set};
use crate::id::ControlledKey;
use crate::keys::ControlledPropSet;
use crate::props::{ExternalProps, StateUpdate};
use crate::shadow::ShadowState;
use crate::value::Value;

/// Bundles a component's declared keys, its latest props snapshot and its
/// shadow state, and routes every mutation through the engine.
///
/// Components call [`AutoControlled::set_props`] once per render, before
/// handling any further events, and [`AutoControlled::try_set`] from their
/// event handlers.
///
/// ```rust
/// use understory_controlled::{AutoControlled, ControlledPropSet, ExternalProps, StateUpdate};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
///
/// let mut state = AutoControlled::new(keys, ExternalProps::new());
/// state.try_set(StateUpdate::new().set(open, true));
/// assert!(*state.get(open));
///
/// // The parent takes over and closes it.
/// state.set_props(ExternalProps::new().control(open, false));
/// assert!(!*state.get(open));
///
/// // Internal writes to a controlled key are dropped.
/// state.try_set(StateUpdate::new().set(open, true));
/// assert!(!*state.get(open));
/// ```
#[derive(Clone, Debug)]
pub struct AutoControlled {
    keys: ControlledPropSet,
    props: ExternalProps,
    shadow: ShadowState,
}

impl AutoControlled {
    /// Creates the state for a new instance from its first props snapshot.
    #[must_use]
    pub fn new(keys: ControlledPropSet, props: ExternalProps) -> Self {
        let shadow = initialize(&keys, &props);
        Self {
            keys,
            props,
            shadow,
        }
    }

    /// Replaces the props snapshot and syncs controlled keys down.
    pub fn set_props(&mut self, next: ExternalProps) -> Reconciled {
        let report = reconcile(&self.keys, &self.props, &next, &mut self.shadow);
        self.props = next;
        report
    }

    /// Proposes an internal update against the current props snapshot.
    pub fn try_set(&mut self, update: StateUpdate) -> Applied {
        try_set(update, &self.keys, &self.props, &mut self.shadow)
    }

    /// Returns the reconciled value of a declared key.
    ///
    /// # Panics
    ///
    /// Panics if `key` was not declared in this instance's key set with type `T`.
    #[must_use]
    pub fn get<T: Value>(&self, key: ControlledKey<T>) -> &T {
        self.shadow.get_or_empty(key, &self.keys)
    }

    /// Returns `true` if the parent currently controls `key`.
    #[must_use]
    pub fn is_controlled<T: Value>(&self, key: ControlledKey<T>) -> bool {
        self.props.is_controlled(key)
    }

    /// Returns the declared keys.
    #[must_use]
    pub fn keys(&self) -> &ControlledPropSet {
        &self.keys
    }

    /// Returns the latest props snapshot.
    #[must_use]
    pub fn props(&self) -> &ExternalProps {
        &self.props
    }

    /// Returns the shadow state.
    #[must_use]
    pub fn shadow(&self) -> &ShadowState {
        &self.shadow
    }

    /// Returns the shadow state's revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shadow.revision()
    }
}
