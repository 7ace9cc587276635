// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch state machine: which operation to run, against which target, per host event.
//!
//! ## Usage
//!
//! 1) Feed each host event to the matching transition ([`DispatchState::press`],
//!    [`DispatchState::motion`], [`DispatchState::release`], [`DispatchState::scroll`]).
//! 2) Walk the returned [`Step`]s in order and invoke the callbacks they name.
//! 3) After the release steps have run, call [`DispatchState::settle_hover`] with a
//!    fresh hover resolution to get the trailing hover step.
//!
//! Every transition commits its state change before returning, so a failing
//! callback never leaves the machine half-way through an event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_mouse::dispatch::{DispatchState, Phase};
//! use understory_mouse::hit::Hit;
//! use understory_mouse::types::{Operation, Selection};
//!
//! let mut state: DispatchState<u32> = DispatchState::new();
//! let hit = Hit { item: 7, region: Some(Rect::new(0.0, 0.0, 10.0, 10.0)) };
//!
//! let click = state.press(Point::new(1.0, 1.0), Selection::Normal, Some(hit)).unwrap();
//! assert_eq!(click.operation, Operation::Click);
//! assert_eq!(state.phase(), Phase::Active);
//!
//! let drag = state.motion(Point::new(2.0, 2.0), || None);
//! assert_eq!(drag.operation, Operation::Drag);
//! assert_eq!(drag.target.map(|h| h.item), Some(7));
//!
//! let [drag, release] = state.release(Point::new(3.0, 3.0)).unwrap();
//! assert_eq!((drag.operation, release.operation), (Operation::Drag, Operation::Release));
//! assert_eq!(release.selection, Some(Selection::Normal));
//! assert_eq!(state.phase(), Phase::Idle);
//! assert_eq!(state.selection(), None);
//! ```

use kurbo::Point;

use crate::hit::Hit;
use crate::types::{MouseEvent, Operation, ScrollDelta, Selection};

/// Whether a button is currently held.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// No button held; motion produces hover.
    #[default]
    Idle,
    /// A press landed on a managed item; motion produces drag.
    Active,
}

/// One operation to dispatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step<K> {
    /// Operation to look up and invoke.
    pub operation: Operation,
    /// Resolved target; `None` means "over no managed item".
    pub target: Option<Hit<K>>,
    /// Selection used for the callback lookup and the payload.
    pub selection: Option<Selection>,
}

/// Per-manager dispatch state.
#[derive(Clone, Debug)]
pub struct DispatchState<K> {
    enabled: bool,
    phase: Phase,
    selection: Option<Selection>,
    position: Point,
    target: Option<Hit<K>>,
    scroll: Option<ScrollDelta>,
}

impl<K: Copy + Eq> Default for DispatchState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> DispatchState<K> {
    /// Disabled, idle, with the pointer at the origin.
    pub fn new() -> Self {
        Self {
            enabled: false,
            phase: Phase::Idle,
            selection: None,
            position: Point::ORIGIN,
            target: None,
            scroll: None,
        }
    }

    /// Whether the manager is wired into the host.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a button is held over a managed item.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Selection of the press driving the current interaction.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Last pointer position in window coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Currently resolved target.
    pub fn target(&self) -> Option<&Hit<K>> {
        self.target.as_ref()
    }

    /// Scroll payload of the last scroll event, cleared by the next press.
    pub fn pending_scroll(&self) -> Option<ScrollDelta> {
        self.scroll
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Return to a disabled idle state, keeping only the pointer position.
    pub fn reset(&mut self) {
        *self = Self {
            position: self.position,
            ..Self::new()
        };
    }

    /// Drop `item` as the current target (it was destroyed or unregistered).
    ///
    /// The phase is left alone: a held button stays held, later drags simply
    /// find no target.
    pub fn forget(&mut self, item: &K) {
        if self.target.is_some_and(|hit| hit.item == *item) {
            self.target = None;
        }
    }

    /// A button went down. `hit` is the click target, or the hover target as a fallback.
    ///
    /// Ignored while [`Active`](Phase::Active). Without a hit the machine stays idle.
    pub fn press(
        &mut self,
        position: Point,
        selection: Selection,
        hit: Option<Hit<K>>,
    ) -> Option<Step<K>> {
        self.position = position;
        if self.is_active() {
            return None;
        }
        self.scroll = None;
        let hit = hit?;
        self.phase = Phase::Active;
        self.selection = Some(selection);
        self.target = Some(hit);
        Some(self.step(Operation::Click))
    }

    /// The pointer moved. `hover` is only consulted while idle.
    pub fn motion(&mut self, position: Point, hover: impl FnOnce() -> Option<Hit<K>>) -> Step<K> {
        self.position = position;
        if self.is_active() {
            return self.step(Operation::Drag);
        }
        self.target = hover();
        self.step(Operation::Hover)
    }

    /// The button was released.
    ///
    /// Returns the trailing drag and the release against the press target, or
    /// `None` when idle. The machine is idle with no selection on return; follow
    /// up with [`settle_hover`](Self::settle_hover) once the steps have run.
    pub fn release(&mut self, position: Point) -> Option<[Step<K>; 2]> {
        self.position = position;
        if !self.is_active() {
            return None;
        }
        let steps = [self.step(Operation::Drag), self.step(Operation::Release)];
        self.phase = Phase::Idle;
        self.selection = None;
        self.target = None;
        Some(steps)
    }

    /// Record a fresh hover resolution and return the hover step for it.
    pub fn settle_hover(&mut self, hit: Option<Hit<K>>) -> Step<K> {
        self.target = hit;
        self.step(Operation::Hover)
    }

    /// The scroll wheel turned. Ignored while [`Active`](Phase::Active).
    pub fn scroll(
        &mut self,
        position: Point,
        delta: ScrollDelta,
        hover: impl FnOnce() -> Option<Hit<K>>,
    ) -> Option<Step<K>> {
        self.position = position;
        if self.is_active() {
            return None;
        }
        self.scroll = Some(delta);
        self.target = hover();
        Some(self.step(Operation::Scroll))
    }

    /// Build the callback payload for `step`.
    pub fn payload(&self, step: &Step<K>) -> MouseEvent {
        MouseEvent {
            operation: step.operation,
            selection: step.selection,
            position: self.position,
            region: step.target.and_then(|hit| hit.region),
            scroll: match step.operation {
                Operation::Scroll => self.scroll,
                _ => None,
            },
        }
    }

    fn step(&self, operation: Operation) -> Step<K> {
        Step {
            operation,
            target: self.target,
            selection: self.selection,
        }
    }
}
