// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_mouse --heading-base-level=0

//! Understory Mouse: single-window mouse dispatch to per-item callbacks.
//!
//! ## Overview
//!
//! This crate decides, for each low-level pointer event of one host window, which
//! managed item the pointer is over and which callback to run with which payload.
//! It does not draw and does not hit test primitives itself: geometry and the
//! topmost object under the cursor come from the host through
//! [`WindowHost`](crate::manager::WindowHost).
//!
//! ## Model
//!
//! - Each managed item has a [`CallbackTable`](crate::callback::CallbackTable):
//!   `click`, `drag` and `release` are keyed by [`Selection`](crate::types::Selection)
//!   (`normal`, `extend`, `alt`, `open`); `hover` and `scroll` hold one callback.
//! - Registrations are ordered [`Bindings`](crate::binding::Bindings) lists, or the
//!   loose token form parsed by [`parse_args`](crate::binding::parse_args).
//!   An omitted axis means all values; later entries overwrite earlier ones.
//! - An item with no callbacks left is dropped from the
//!   [`Registry`](crate::registry::Registry).
//!
//! ## Hit resolution
//!
//! A press first matches the host's current object by identity, then falls back
//! to a region scan. Motion and scroll only use the region scan, which returns the
//! first hover-active item in registration order whose region contains the pointer
//! (edges included). See [`hit`](crate::hit).
//!
//! ## Dispatch
//!
//! [`DispatchState`](crate::dispatch::DispatchState) tracks idle/active, the press
//! selection, the pointer position and the current target:
//!
//! - Down → `click` (idle only; becomes active on a hit).
//! - Move → `drag` while active, otherwise `hover`.
//! - Up → `drag`, `release`, then a fresh `hover`.
//! - Scroll → `scroll` (idle only).
//!
//! Hovering over no managed item runs the default hover callback, if any.
//! Callbacks change registrations through a [`Registrar`](crate::registrar::Registrar);
//! queued changes take effect as soon as the callback returns.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_mouse::binding::Bindings;
//! use understory_mouse::callback::Callback;
//! use understory_mouse::hit::GeometryProvider;
//! use understory_mouse::manager::{MouseManager, WindowHost};
//! use understory_mouse::types::{Operation, Selection};
//!
//! struct Window;
//! impl GeometryProvider<u32> for Window {
//!     fn region_of(&self, _item: &u32) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 100.0, 40.0))
//!     }
//! }
//! impl WindowHost<u32> for Window {
//!     fn owns(&self, _item: &u32) -> bool { true }
//!     fn attach(&mut self) {}
//!     fn detach(&mut self) {}
//!     fn request_refresh(&mut self) {}
//! }
//!
//! let mut manager = MouseManager::new(Window);
//! let on_click = Callback::new(|item: Option<&u32>, event| {
//!     assert_eq!(item, Some(&1));
//!     assert_eq!(event.operation, Operation::Click);
//!     Ok(())
//! });
//! manager
//!     .add(1, &Bindings::new().on(Operation::Click, Selection::Normal, on_click))
//!     .unwrap();
//! manager.enable(true);
//! manager
//!     .button_down(Point::new(10.0, 10.0), Selection::Normal, Some(&1))
//!     .unwrap();
//! assert!(manager.state().is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod binding;
pub mod callback;
pub mod dispatch;
pub mod error;
pub mod hit;
pub mod manager;
pub mod registrar;
pub mod registry;
pub mod types;

pub use error::Error;
