// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three engine entry points: [`initialize`], [`reconcile`] and [`try_set`].
//!
//! Precedence is the same everywhere: a value the parent controls always wins.
//! The guard in [`try_set`] runs before any write, so a dropped internal value
//! is never stored, not even transiently.

use log::debug;

use crate::keys::ControlledPropSet;
use crate::keyset::KeySet;
use crate::props::{ExternalProps, StateUpdate};
use crate::shadow::ShadowState;

/// Outcome of a [`reconcile`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciled {
    /// Keys whose shadow value was overwritten to match the parent.
    pub synced: KeySet,
}

impl Reconciled {
    /// Returns `true` if the pass changed the shadow state.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.synced.is_empty()
    }
}

/// Outcome of a [`try_set`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    /// Keys whose proposed value was accepted (the component owns them).
    pub accepted: KeySet,
    /// Accepted keys whose stored value actually changed.
    pub changed: KeySet,
    /// Keys whose proposed value was dropped because the parent controls them.
    pub dropped: KeySet,
}

impl Applied {
    /// Returns `true` if the call changed the shadow state.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Computes the initial shadow state for a new component instance.
///
/// For each declared key the initial value is, in order of preference: the
/// controlled value, the default value, the key's declared empty value.
///
/// ```rust
/// use understory_controlled::{ControlledPropSet, ExternalProps, initialize};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
/// let value = keys.declare("value", None::<u32>);
///
/// let props = ExternalProps::new().with_default(value, Some(3));
/// let shadow = initialize(&keys, &props);
///
/// assert_eq!(shadow.get(open), Some(&false));
/// assert_eq!(shadow.get(value), Some(&Some(3)));
/// assert_eq!(shadow.revision(), 0);
/// ```
///
/// # Panics
///
/// Panics if `props` holds a value whose type differs from its key's declaration.
#[must_use]
pub fn initialize(keys: &ControlledPropSet, props: &ExternalProps) -> ShadowState {
    let mut shadow = ShadowState::new();
    for (id, declaration) in keys.iter() {
        let initial = props
            .controlled_erased(id)
            .or_else(|| props.default_erased(id))
            .unwrap_or(declaration.empty());
        keys.check_type(id, initial);
        shadow.seed(id, initial.clone());
    }
    shadow
}

/// Synchronizes the shadow state with a new props snapshot.
///
/// Every declared key the parent controls in `next` is synced down if it
/// differs from the shadow; keys the parent does not control keep whatever the
/// component last stored. `previous` is only consulted to log ownership
/// hand-offs.
///
/// Calling this again with the same arguments is a no-op: nothing differs, so
/// nothing is written and the revision is not bumped.
///
/// ```rust
/// use understory_controlled::{ControlledPropSet, ExternalProps, initialize, reconcile};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
///
/// let before = ExternalProps::new();
/// let mut shadow = initialize(&keys, &before);
///
/// let after = ExternalProps::new().control(open, true);
/// assert!(reconcile(&keys, &before, &after, &mut shadow).changed());
/// assert!(!reconcile(&keys, &before, &after, &mut shadow).changed());
/// assert_eq!(shadow.get(open), Some(&true));
/// assert_eq!(shadow.revision(), 1);
/// ```
///
/// # Panics
///
/// Panics if `next` controls a key with a value of a different type than declared.
pub fn reconcile(
    keys: &ControlledPropSet,
    previous: &ExternalProps,
    next: &ExternalProps,
    shadow: &mut ShadowState,
) -> Reconciled {
    let mut synced = KeySet::empty();
    for (id, declaration) in keys.iter() {
        let was_controlled = previous.is_controlled_id(id);
        match next.controlled_erased(id) {
            Some(value) => {
                keys.check_type(id, value);
                if !was_controlled {
                    debug!("`{}` is now controlled by the parent", declaration.name());
                }
                if shadow.write(id, value) {
                    debug!("synced `{}` down to {:?}", declaration.name(), value);
                    synced.insert(id);
                }
            }
            None if was_controlled => {
                debug!(
                    "`{}` released by the parent, keeping {:?}",
                    declaration.name(),
                    shadow.get_erased(id)
                );
            }
            None => {}
        }
    }
    Reconciled { synced }
}

/// Applies a proposed internal update, dropping writes to controlled keys.
///
/// For each key in `update`: if the key is declared in `keys` and `props`
/// controls it, the proposal is silently dropped (the parent is expected to
/// react to the accompanying callback and re-supply the prop). Otherwise the
/// value is written. Keys outside `keys` are plain internal state and are
/// always written.
///
/// ```rust
/// use understory_controlled::{ControlledPropSet, ExternalProps, StateUpdate, initialize, try_set};
///
/// let mut keys = ControlledPropSet::new();
/// let open = keys.declare("open", false);
/// let value = keys.declare("value", None::<u32>);
///
/// let props = ExternalProps::new().control(value, Some(1));
/// let mut shadow = initialize(&keys, &props);
///
/// let update = StateUpdate::new().set(open, true).set(value, Some(2));
/// let applied = try_set(update, &keys, &props, &mut shadow);
///
/// assert!(applied.accepted.contains(open.id()));
/// assert!(applied.dropped.contains(value.id()));
/// assert_eq!(shadow.get(open), Some(&true));
/// assert_eq!(shadow.get(value), Some(&Some(1)));
/// ```
///
/// # Panics
///
/// Panics if `update` writes a declared key with a value of a different type,
/// which is only possible through [`ControlledKey::from_id`](crate::ControlledKey::from_id).
pub fn try_set(
    update: StateUpdate,
    keys: &ControlledPropSet,
    props: &ExternalProps,
    shadow: &mut ShadowState,
) -> Applied {
    let mut applied = Applied::default();
    for (id, value) in update.into_entries() {
        keys.check_type(id, &value);
        if keys.contains(id) && props.is_controlled_id(id) {
            debug!(
                "dropped write of {:?} to controlled `{}`",
                value,
                keys.display_name(id)
            );
            applied.dropped.insert(id);
            continue;
        }
        applied.accepted.insert(id);
        if shadow.write(id, &value) {
            applied.changed.insert(id);
        }
    }
    applied
}
