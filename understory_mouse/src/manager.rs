// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mouse manager: one per host window.
//!
//! ## Overview
//!
//! [`MouseManager`] owns the [`Registry`], the [`DispatchState`] and the default
//! hover callback, and is bound to exactly one [`WindowHost`]. The host feeds it
//! pointer events through [`MouseManager::handle`] (or the per-event entry points)
//! and lifecycle signals through [`MouseManager::notify`].
//!
//! ## Event cycle
//!
//! - Down: click target by identity, falling back to the hover region scan; on a
//!   hit, dispatch `click` and become active.
//! - Move: `drag` while active, otherwise re-resolve and dispatch `hover`.
//! - Up: `drag` then `release` against the press target, go idle, re-resolve and
//!   dispatch `hover`.
//! - Scroll: resolve by region and dispatch `scroll` (idle only).
//!
//! A refresh is requested from the host after each completed cycle. A callback
//! error ends the cycle early and is returned to the host as-is.
//!
//! ## Registration from callbacks
//!
//! Callbacks queue changes on a [`Registrar`] (see [`MouseManager::registrar`]).
//! The queue is applied right after each callback returns, so a `click` that
//! removes its own item sees no `drag` or `release` for it, and an item added by
//! `release` takes part in the trailing hover resolution.

use core::fmt::Debug;

use kurbo::Point;

use crate::binding::{Arg, Bindings, parse_args};
use crate::callback::{Callback, CallbackResult};
use crate::dispatch::{DispatchState, Step};
use crate::error::Error;
use crate::hit::{GeometryProvider, resolve_click_target, resolve_hover_target};
use crate::registrar::{Command, Registrar};
use crate::registry::Registry;
use crate::types::{Notification, Operation, PointerEvent, ScrollDelta, Selection};

/// The window a manager is bound to.
///
/// Besides geometry, the host validates registration targets, owns the four
/// event slots (down, motion, up, scroll) the manager is wired into, and
/// performs rate-limited refreshes.
pub trait WindowHost<K>: GeometryProvider<K> {
    /// Whether `item` is a live visual object of this window.
    fn owns(&self, item: &K) -> bool;

    /// Route the window's button, motion and scroll slots to the manager.
    fn attach(&mut self);

    /// Remove the manager from the window's event slots.
    fn detach(&mut self);

    /// Ask for a display refresh; the host decides when it happens.
    fn request_refresh(&mut self);
}

/// Mouse event dispatch for a single window.
pub struct MouseManager<K, H> {
    host: H,
    registry: Registry<K>,
    state: DispatchState<K>,
    default_hover: Option<Callback<K>>,
    registrar: Registrar<K>,
    torn_down: bool,
}

impl<K: Debug, H> Debug for MouseManager<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MouseManager")
            .field("registry", &self.registry)
            .field("state", &self.state)
            .field("registrar", &self.registrar)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Debug, H: WindowHost<K>> MouseManager<K, H> {
    /// Bind a new, disabled manager to `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            registry: Registry::new(),
            state: DispatchState::new(),
            default_hover: None,
            registrar: Registrar::new(),
            torn_down: false,
        }
    }

    /// The bound host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The bound host, mutably (e.g. to move geometry between events).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Managed items.
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// Dispatch state.
    pub fn state(&self) -> &DispatchState<K> {
        &self.state
    }

    /// Whether events are being dispatched.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Whether the bound window has been destroyed.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Fallback hover callback.
    pub fn default_hover(&self) -> Option<&Callback<K>> {
        self.default_hover.as_ref()
    }

    /// A handle for callbacks to queue registration changes on.
    pub fn registrar(&self) -> Registrar<K> {
        self.registrar.clone()
    }

    /// Apply changes queued on the [`Registrar`], in order.
    ///
    /// Runs after every callback; call it directly to flush changes queued
    /// outside of dispatch. On the first failing change the rest of the queue
    /// is discarded.
    pub fn apply_queued(&mut self) -> Result<(), Error> {
        for command in self.registrar.take() {
            match command {
                Command::Add { item, bindings } => {
                    self.add(item, &bindings)?;
                }
                Command::Remove(item) => {
                    self.remove(&item);
                }
                Command::SetDefaultHover(callback) => self.default_hover = callback,
            }
        }
        Ok(())
    }

    /// Apply `bindings` to `item`.
    ///
    /// Returns whether `item` is managed afterwards. Fails with
    /// [`Error::InvalidTarget`] if the host does not own `item`.
    pub fn add(&mut self, item: K, bindings: &Bindings<K>) -> Result<bool, Error> {
        if self.torn_down || !self.host.owns(&item) {
            return Err(Error::InvalidTarget);
        }
        let managed = self.registry.apply(item, bindings);
        if !managed {
            self.state.forget(&item);
        }
        Ok(managed)
    }

    /// Token form of [`add`](Self::add); see [`parse_args`].
    ///
    /// The argument list is fully validated before the registry is touched.
    pub fn add_args(&mut self, item: K, args: &[Arg<'_, K>]) -> Result<bool, Error> {
        if self.torn_down || !self.host.owns(&item) {
            return Err(Error::InvalidTarget);
        }
        let bindings = parse_args(args)?;
        self.add(item, &bindings)
    }

    /// Stop managing `item`. Returns whether it was managed.
    pub fn remove(&mut self, item: &K) -> bool {
        self.state.forget(item);
        self.registry.remove(item)
    }

    /// Set or clear the callback run when hovering over no managed item.
    pub fn set_default_hover(&mut self, callback: Option<Callback<K>>) {
        self.default_hover = callback;
    }

    /// Token form of [`set_default_hover`](Self::set_default_hover).
    ///
    /// Fails with [`Error::InvalidCallback`] for anything but a callback or a clear.
    pub fn set_default_hover_arg(&mut self, arg: Arg<'_, K>) -> Result<(), Error> {
        self.default_hover = match arg {
            Arg::Call(cb) => Some(cb),
            Arg::Clear => None,
            Arg::Word(_) | Arg::Words(_) => return Err(Error::InvalidCallback),
        };
        Ok(())
    }

    /// Wire into (or out of) the host's event slots.
    ///
    /// Disabling returns the dispatch state to idle.
    pub fn enable(&mut self, on: bool) {
        if self.torn_down || on == self.is_enabled() {
            return;
        }
        if on {
            self.host.attach();
            self.state.set_enabled(true);
        } else {
            self.host.detach();
            self.state.reset();
        }
        tracing::debug!(enabled = on, "mouse manager toggled");
    }

    /// Handle a lifecycle signal from the host.
    pub fn notify(&mut self, notification: Notification<K>) {
        match notification {
            Notification::ItemDestroyed(item) => {
                if self.remove(&item) {
                    tracing::debug!(item = ?item, "managed item destroyed");
                }
            }
            Notification::EventSlotsChanged => {
                // The slots are no longer ours; do not detach.
                if self.is_enabled() {
                    self.state.reset();
                    tracing::debug!("event slots changed externally, disabling");
                }
            }
            Notification::WindowDestroyed => {
                self.state.reset();
                self.registry.clear();
                self.default_hover = None;
                drop(self.registrar.take());
                self.torn_down = true;
                tracing::debug!("window destroyed, mouse manager torn down");
            }
        }
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: PointerEvent<K>) -> CallbackResult {
        match event {
            PointerEvent::Down {
                position,
                selection,
                current_object,
            } => self.button_down(position, selection, current_object.as_ref()),
            PointerEvent::Move { position } => self.motion(position),
            PointerEvent::Up { position } => self.button_up(position),
            PointerEvent::Scroll { position, delta } => self.scroll(position, delta),
        }
    }

    /// A button went down; `current_object` is the host's topmost object under the cursor.
    pub fn button_down(
        &mut self,
        position: Point,
        selection: Selection,
        current_object: Option<&K>,
    ) -> CallbackResult {
        if !self.is_enabled() {
            return Ok(());
        }
        let hit = if self.state.is_active() {
            None
        } else {
            resolve_click_target(&self.registry, &self.host, current_object)
                .or_else(|| resolve_hover_target(&self.registry, &self.host, position))
        };
        if let Some(step) = self.state.press(position, selection, hit) {
            self.run(&step)?;
        }
        self.host.request_refresh();
        Ok(())
    }

    /// The pointer moved.
    pub fn motion(&mut self, position: Point) -> CallbackResult {
        if !self.is_enabled() {
            return Ok(());
        }
        let step = self.state.motion(position, || {
            resolve_hover_target(&self.registry, &self.host, position)
        });
        self.run(&step)?;
        self.host.request_refresh();
        Ok(())
    }

    /// A button was released.
    pub fn button_up(&mut self, position: Point) -> CallbackResult {
        if !self.is_enabled() {
            return Ok(());
        }
        if let Some(steps) = self.state.release(position) {
            for step in &steps {
                self.run(step)?;
            }
            let hit = resolve_hover_target(&self.registry, &self.host, position);
            let step = self.state.settle_hover(hit);
            self.run(&step)?;
        }
        self.host.request_refresh();
        Ok(())
    }

    /// The scroll wheel turned.
    pub fn scroll(&mut self, position: Point, delta: ScrollDelta) -> CallbackResult {
        if !self.is_enabled() {
            return Ok(());
        }
        let step = self.state.scroll(position, delta, || {
            resolve_hover_target(&self.registry, &self.host, position)
        });
        if let Some(step) = step {
            self.run(&step)?;
        }
        self.host.request_refresh();
        Ok(())
    }

    fn run(&mut self, step: &Step<K>) -> CallbackResult {
        let callback = match &step.target {
            Some(hit) => self
                .registry
                .get(&hit.item)
                .and_then(|item| item.table().get(step.operation, step.selection))
                .cloned(),
            None if step.operation == Operation::Hover => self.default_hover.clone(),
            None => None,
        };
        let Some(callback) = callback else {
            return Ok(());
        };
        let target = step.target.map(|hit| hit.item);
        tracing::trace!(operation = %step.operation, target = ?target, "dispatch");
        let result = callback.call(target.as_ref(), &self.state.payload(step));
        let applied = self.apply_queued();
        result?;
        applied?;
        Ok(())
    }
}
