// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks and the per-item callback table.
//!
//! ## Overview
//!
//! Every managed item owns a [`CallbackTable`] with one [`CallbackSlot`] per
//! [`Operation`]. The slot shape is fixed by the operation kind:
//!
//! - [`Click`](Operation::Click), [`Drag`](Operation::Drag) and [`Release`](Operation::Release)
//!   are [`BySelection`](CallbackSlot::BySelection) or [`Empty`](CallbackSlot::Empty).
//! - [`Hover`](Operation::Hover) and [`Scroll`](Operation::Scroll)
//!   are [`Direct`](CallbackSlot::Direct) or [`Empty`](CallbackSlot::Empty).
//!
//! A selection map whose entries are all cleared collapses back to `Empty`.

use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::types::{MouseEvent, Operation, Selection, SelectionSet};

/// Error returned by a user callback.
///
/// The manager passes it through to the host untouched.
pub type CallbackError = Box<dyn core::error::Error>;

/// Result of a user callback.
pub type CallbackResult = Result<(), CallbackError>;

type CallbackFn<K> = dyn Fn(Option<&K>, &MouseEvent) -> CallbackResult;

/// A shared, invocable callback.
///
/// Receives the resolved target (`None` for default-hover calls) and the event payload.
/// Extra bound arguments are whatever the closure captures.
pub struct Callback<K>(Rc<CallbackFn<K>>);

impl<K> Callback<K> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Option<&K>, &MouseEvent) -> CallbackResult + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, target: Option<&K>, event: &MouseEvent) -> CallbackResult {
        (self.0)(target, event)
    }

    /// Whether both handles refer to the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<K> Clone for Callback<K> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<K> core::fmt::Debug for Callback<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// Callbacks indexed by [`Selection`].
pub type SelectionMap<K> = [Option<Callback<K>>; 4];

/// Storage for one operation of one item.
#[derive(Clone, Debug)]
pub enum CallbackSlot<K> {
    /// Nothing registered.
    Empty,
    /// A single callback (hover and scroll).
    Direct(Callback<K>),
    /// One optional callback per selection (click, drag and release).
    BySelection(SelectionMap<K>),
}

impl<K> Default for CallbackSlot<K> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<K> CallbackSlot<K> {
    /// Whether nothing is registered in this slot.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Per-item mapping from (operation, selection) to a callback.
#[derive(Clone, Debug)]
pub struct CallbackTable<K> {
    slots: [CallbackSlot<K>; 5],
}

impl<K> Default for CallbackTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> CallbackTable<K> {
    /// Create a table with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| CallbackSlot::Empty),
        }
    }

    /// Set (or with `None`, clear) the callback for `op` under every selection in `selections`.
    ///
    /// The selection set is ignored for operations that are not selection keyed.
    pub fn set(&mut self, op: Operation, selections: SelectionSet, callback: Option<Callback<K>>) {
        let slot = &mut self.slots[op.index()];
        if !op.is_selection_keyed() {
            *slot = callback.map_or(CallbackSlot::Empty, CallbackSlot::Direct);
            return;
        }
        let mut map = match core::mem::take(slot) {
            CallbackSlot::BySelection(map) => map,
            CallbackSlot::Empty | CallbackSlot::Direct(_) => [None, None, None, None],
        };
        for sel in selections.selections() {
            map[sel.index()] = callback.clone();
        }
        if map.iter().any(Option::is_some) {
            *slot = CallbackSlot::BySelection(map);
        }
    }

    /// Look up the callback for `op` under `selection`.
    ///
    /// Selection-keyed operations resolve to nothing when `selection` is `None`.
    pub fn get(&self, op: Operation, selection: Option<Selection>) -> Option<&Callback<K>> {
        match &self.slots[op.index()] {
            CallbackSlot::Empty => None,
            CallbackSlot::Direct(cb) => Some(cb),
            CallbackSlot::BySelection(map) => selection.and_then(|s| map[s.index()].as_ref()),
        }
    }

    /// Raw slot for `op`.
    pub fn slot(&self, op: Operation) -> &CallbackSlot<K> {
        &self.slots[op.index()]
    }

    /// Whether no callback is registered for any operation.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(CallbackSlot::is_empty)
    }

    /// Whether a hover or scroll callback is registered.
    pub fn is_hover_active(&self) -> bool {
        Operation::ALL
            .into_iter()
            .filter(|op| op.is_hover_active())
            .any(|op| !self.slots[op.index()].is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Callback<u32> {
        Callback::new(|_, _| Ok(()))
    }

    #[test]
    fn selection_keyed_ops_store_per_selection() {
        let mut t = CallbackTable::new();
        let cb = noop();
        t.set(Operation::Click, SelectionSet::NORMAL, Some(cb.clone()));
        assert!(matches!(t.slot(Operation::Click), CallbackSlot::BySelection(_)));
        assert!(
            t.get(Operation::Click, Some(Selection::Normal))
                .is_some_and(|c| c.ptr_eq(&cb))
        );
        assert!(t.get(Operation::Click, Some(Selection::Alt)).is_none());
        assert!(t.get(Operation::Click, None).is_none());
        assert!(t.get(Operation::Drag, Some(Selection::Normal)).is_none());
    }

    #[test]
    fn direct_ops_ignore_selection() {
        let mut t = CallbackTable::new();
        t.set(Operation::Hover, SelectionSet::OPEN, Some(noop()));
        assert!(matches!(t.slot(Operation::Hover), CallbackSlot::Direct(_)));
        assert!(t.get(Operation::Hover, None).is_some());
        assert!(t.get(Operation::Hover, Some(Selection::Normal)).is_some());
        assert!(t.is_hover_active());
    }

    #[test]
    fn later_set_overwrites_overlapping_selections() {
        let mut t = CallbackTable::new();
        let a = noop();
        let b = noop();
        t.set(Operation::Drag, SelectionSet::all(), Some(a.clone()));
        t.set(
            Operation::Drag,
            SelectionSet::EXTEND | SelectionSet::ALT,
            Some(b.clone()),
        );
        let got = |s| t.get(Operation::Drag, Some(s)).cloned();
        assert!(got(Selection::Normal).is_some_and(|c| c.ptr_eq(&a)));
        assert!(got(Selection::Extend).is_some_and(|c| c.ptr_eq(&b)));
        assert!(got(Selection::Alt).is_some_and(|c| c.ptr_eq(&b)));
        assert!(got(Selection::Open).is_some_and(|c| c.ptr_eq(&a)));
    }

    #[test]
    fn clearing_every_selection_collapses_to_empty() {
        let mut t = CallbackTable::new();
        t.set(Operation::Release, SelectionSet::NORMAL, Some(noop()));
        t.set(Operation::Release, SelectionSet::ALT, Some(noop()));
        t.set(Operation::Release, SelectionSet::NORMAL, None);
        assert!(!t.is_empty());
        t.set(Operation::Release, SelectionSet::ALT, None);
        assert!(t.slot(Operation::Release).is_empty());
        assert!(t.is_empty());
    }

    #[test]
    fn hover_activity_tracks_hover_and_scroll_only() {
        let mut t = CallbackTable::new();
        t.set(Operation::Click, SelectionSet::all(), Some(noop()));
        assert!(!t.is_hover_active());
        t.set(Operation::Scroll, SelectionSet::all(), Some(noop()));
        assert!(t.is_hover_active());
        t.set(Operation::Scroll, SelectionSet::all(), None);
        assert!(!t.is_hover_active());
    }
}
