// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of managed items, in registration order.
//!
//! Registration merges into an existing entry for the same identity. An item
//! whose callback table becomes empty is dropped from the registry.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::binding::Bindings;
use crate::callback::CallbackTable;

/// A visual object registered for mouse interaction.
#[derive(Clone, Debug)]
pub struct ManagedItem<K> {
    id: K,
    table: CallbackTable<K>,
    hover_active: bool,
}

impl<K: Copy> ManagedItem<K> {
    fn new(id: K) -> Self {
        Self {
            id,
            table: CallbackTable::new(),
            hover_active: false,
        }
    }

    /// Identity of the underlying visual object.
    pub fn id(&self) -> K {
        self.id
    }

    /// Callback table of this item.
    pub fn table(&self) -> &CallbackTable<K> {
        &self.table
    }

    /// Whether the item takes part in region-based hover resolution.
    pub fn is_hover_active(&self) -> bool {
        self.hover_active
    }
}

/// Managed items in registration order.
#[derive(Clone, Debug)]
pub struct Registry<K> {
    items: Vec<ManagedItem<K>>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: Copy + Eq> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of managed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are managed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ManagedItem<K>> {
        self.items.iter()
    }

    /// Position of `id` in registration order.
    pub fn position(&self, id: &K) -> Option<usize> {
        self.items.iter().position(|it| it.id == *id)
    }

    /// Look up an item by identity.
    pub fn get(&self, id: &K) -> Option<&ManagedItem<K>> {
        self.items.iter().find(|it| it.id == *id)
    }

    /// Whether `id` is managed.
    pub fn contains(&self, id: &K) -> bool {
        self.position(id).is_some()
    }

    /// Apply `bindings` to the entry for `id`, creating it if needed.
    ///
    /// Returns whether `id` is still managed afterwards; an entry left with no
    /// callbacks is removed.
    pub fn apply(&mut self, id: K, bindings: &Bindings<K>) -> bool
    where
        K: Debug,
    {
        let idx = match self.position(&id) {
            Some(idx) => idx,
            None => {
                self.items.push(ManagedItem::new(id));
                self.items.len() - 1
            }
        };
        let item = &mut self.items[idx];
        for binding in bindings.entries() {
            for op in binding.operations.operations() {
                item.table
                    .set(op, binding.selections, binding.callback.clone());
            }
        }
        item.hover_active = item.table.is_hover_active();
        if item.table.is_empty() {
            self.items.remove(idx);
            tracing::debug!(item = ?id, "no callbacks left, item dropped");
            return false;
        }
        true
    }

    /// Remove `id` and all of its callbacks. Returns whether it was managed.
    pub fn remove(&mut self, id: &K) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
