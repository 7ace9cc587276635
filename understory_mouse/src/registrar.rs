// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration from inside callbacks.
//!
//! ## Overview
//!
//! Callbacks run while the manager is dispatching, so they cannot borrow it.
//! They capture a [`Registrar`] instead, obtained from
//! [`MouseManager::registrar`](crate::manager::MouseManager::registrar), and queue
//! changes on it. The manager applies the queue after every callback returns,
//! in queue order, before the next step of the event cycle is dispatched.
//!
//! Token arguments are validated when queued. Target validation needs the host
//! and happens when the queue is applied; a failure there is returned from the
//! dispatch entry point like a callback error.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::binding::{Arg, Bindings, parse_args};
use crate::callback::Callback;
use crate::error::Error;

/// A queued registration change.
#[derive(Clone, Debug)]
pub enum Command<K> {
    /// Apply bindings to an item, as [`MouseManager::add`](crate::manager::MouseManager::add).
    Add {
        /// Target item.
        item: K,
        /// Bindings to apply.
        bindings: Bindings<K>,
    },
    /// Stop managing an item.
    Remove(K),
    /// Set or clear the default hover callback.
    SetDefaultHover(Option<Callback<K>>),
}

/// Shared handle for queueing registration changes.
///
/// Cloning is cheap; every clone feeds the same manager.
pub struct Registrar<K> {
    queue: Rc<RefCell<Vec<Command<K>>>>,
}

impl<K> Clone for Registrar<K> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<K> core::fmt::Debug for Registrar<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registrar")
            .field("pending", &self.queue.borrow().len())
            .finish()
    }
}

impl<K> Registrar<K> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Queue `bindings` for `item`.
    pub fn add(&self, item: K, bindings: Bindings<K>) {
        self.push(Command::Add { item, bindings });
    }

    /// Token form of [`add`](Self::add). Nothing is queued if `args` is invalid.
    pub fn add_args(&self, item: K, args: &[Arg<'_, K>]) -> Result<(), Error> {
        let bindings = parse_args(args)?;
        self.add(item, bindings);
        Ok(())
    }

    /// Queue the removal of `item`.
    pub fn remove(&self, item: K) {
        self.push(Command::Remove(item));
    }

    /// Queue a new default hover callback (`None` clears it).
    pub fn set_default_hover(&self, callback: Option<Callback<K>>) {
        self.push(Command::SetDefaultHover(callback));
    }

    /// Number of changes waiting to be applied.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn take(&self) -> Vec<Command<K>> {
        core::mem::take(&mut *self.queue.borrow_mut())
    }

    fn push(&self, command: Command<K>) {
        self.queue.borrow_mut().push(command);
    }
}
