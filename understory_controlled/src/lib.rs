// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_controlled --heading-base-level=0

//! Understory Controlled: controlled/uncontrolled state reconciliation for UI components.
//!
//! Many widgets need to work in two modes at once. A parent can *control* a
//! value (supply it every render and own every transition), or leave it to the
//! widget, which then manages the value itself after seeding it from an
//! optional default. This crate implements that contract once, for any
//! component, over an explicitly declared set of dual-mode keys.
//!
//! ## Concepts
//!
//! - [`ControlledPropSet`]: the keys a component type declares as dual-mode,
//!   each with a type-appropriate empty value. Declared once per component type.
//! - [`ExternalProps`]: one render's snapshot of what the parent supplied, with
//!   a *controlled* layer and a *default* layer.
//! - [`ShadowState`]: the instance's internal mirror of each declared key, with
//!   a revision counter that bumps only on real changes.
//!
//! ## Operations
//!
//! - [`initialize`]: seed the shadow state (controlled → default → empty).
//! - [`reconcile`]: on every props update, sync controlled keys down; leave
//!   uncontrolled keys alone. Idempotent.
//! - [`try_set`]: the single guarded mutation entry point. Writes to keys the
//!   parent controls are silently dropped; everything else is written.
//!
//! The one rule behind all three: **a value the parent controls always wins.**
//! Components that want the bookkeeping handled for them can use
//! [`AutoControlled`], which owns the keys, the latest snapshot and the shadow
//! state together.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_controlled::{
//!     ControlledPropSet, ExternalProps, StateUpdate, initialize, reconcile, try_set,
//! };
//!
//! let mut keys = ControlledPropSet::new();
//! let open = keys.declare("open", false);
//!
//! // Uncontrolled: the component owns `open`.
//! let props = ExternalProps::new().with_default(open, true);
//! let mut shadow = initialize(&keys, &props);
//! assert_eq!(shadow.get(open), Some(&true));
//!
//! try_set(StateUpdate::new().set(open, false), &keys, &props, &mut shadow);
//! assert_eq!(shadow.get(open), Some(&false));
//!
//! // Controlled: the parent owns `open`; internal writes are dropped.
//! let next = ExternalProps::new().control(open, true);
//! reconcile(&keys, &props, &next, &mut shadow);
//! let applied = try_set(StateUpdate::new().set(open, false), &keys, &next, &mut shadow);
//! assert!(applied.dropped.contains(open.id()));
//! assert_eq!(shadow.get(open), Some(&true));
//! ```
//!
//! ## Logging
//!
//! Sync-down and dropped-write decisions are reported at `debug` level through
//! the [`log`] facade. The crate never installs a logger.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod id;
mod keys;
mod keyset;
mod props;
mod shadow;
mod sparse;
mod state;
mod value;

pub use engine::{Applied, Reconciled, initialize, reconcile, try_set};
pub use id::{ControlledKey, KeyId};
pub use keys::{ControlledPropSet, KeyDeclaration};
pub use keyset::{KeySet, KeySetIter};
pub use props::{ExternalProps, StateUpdate};
pub use shadow::ShadowState;
pub use state::AutoControlled;
pub use value::{ErasedValue, Value};
