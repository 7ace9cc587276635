// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the mouse manager: operations, selections, payloads, and host inputs.
//!
//! ## Overview
//!
//! These types describe the dispatch vocabulary and its inputs/outputs.
//! They are consumed by the [`manager`](crate::manager) and handed to user callbacks.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

use crate::error::Error;

/// Kind of mouse interaction a callback is registered for.
///
/// [`Click`](Self::Click), [`Drag`](Self::Drag) and [`Release`](Self::Release)
/// are keyed by [`Selection`]; [`Hover`](Self::Hover) and [`Scroll`](Self::Scroll)
/// hold a single callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// A button went down over the item.
    Click,
    /// The pointer moved (or was released) while a button is held.
    Drag,
    /// The held button was released.
    Release,
    /// The pointer moved with no button held.
    Hover,
    /// The scroll wheel turned with no button held.
    Scroll,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Click,
        Self::Drag,
        Self::Release,
        Self::Hover,
        Self::Scroll,
    ];

    /// Whether callbacks for this operation are stored per [`Selection`].
    pub const fn is_selection_keyed(self) -> bool {
        matches!(self, Self::Click | Self::Drag | Self::Release)
    }

    /// Whether a callback for this operation makes its item hit-testable by region.
    pub const fn is_hover_active(self) -> bool {
        matches!(self, Self::Hover | Self::Scroll)
    }

    /// Token used by the argument parser and [`Display`](fmt::Display).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Drag => "drag",
            Self::Release => "release",
            Self::Hover => "hover",
            Self::Scroll => "scroll",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Click => 0,
            Self::Drag => 1,
            Self::Release => 2,
            Self::Hover => 3,
            Self::Scroll => 4,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::AmbiguousOrInvalidArgument {
                token: s.to_string(),
            })
    }
}

/// Which button or click kind produced a press.
///
/// The names follow the usual desktop conventions: `Normal` is a plain
/// primary click, `Extend` a shift-click or middle button, `Alt` a
/// control-click or secondary button, and `Open` a double click.
/// The absence of a selection (no button held) is `Option<Selection>::None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Selection {
    /// Primary button.
    Normal,
    /// Shift-click or middle button.
    Extend,
    /// Control-click or secondary button.
    Alt,
    /// Double click.
    Open,
}

impl Selection {
    /// All selections in declaration order.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Extend, Self::Alt, Self::Open];

    /// Token used by the argument parser and [`Display`](fmt::Display).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Extend => "extend",
            Self::Alt => "alt",
            Self::Open => "open",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Extend => 1,
            Self::Alt => 2,
            Self::Open => 3,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sel| sel.as_str() == s)
            .ok_or_else(|| Error::AmbiguousOrInvalidArgument {
                token: s.to_string(),
            })
    }
}

bitflags::bitflags! {
    /// A set of [`Operation`]s. `OperationSet::all()` stands for an omitted operation axis.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OperationSet: u8 {
        /// [`Operation::Click`].
        const CLICK   = 0b0000_0001;
        /// [`Operation::Drag`].
        const DRAG    = 0b0000_0010;
        /// [`Operation::Release`].
        const RELEASE = 0b0000_0100;
        /// [`Operation::Hover`].
        const HOVER   = 0b0000_1000;
        /// [`Operation::Scroll`].
        const SCROLL  = 0b0001_0000;
    }
}

impl OperationSet {
    /// Iterate the member operations in declaration order.
    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |op| self.contains(Self::from(*op)))
    }
}

impl From<Operation> for OperationSet {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Click => Self::CLICK,
            Operation::Drag => Self::DRAG,
            Operation::Release => Self::RELEASE,
            Operation::Hover => Self::HOVER,
            Operation::Scroll => Self::SCROLL,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Selection`]s. `SelectionSet::all()` stands for an omitted selection axis.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SelectionSet: u8 {
        /// [`Selection::Normal`].
        const NORMAL = 0b0000_0001;
        /// [`Selection::Extend`].
        const EXTEND = 0b0000_0010;
        /// [`Selection::Alt`].
        const ALT    = 0b0000_0100;
        /// [`Selection::Open`].
        const OPEN   = 0b0000_1000;
    }
}

impl SelectionSet {
    /// Iterate the member selections in declaration order.
    pub fn selections(self) -> impl Iterator<Item = Selection> {
        Selection::ALL
            .into_iter()
            .filter(move |sel| self.contains(Self::from(*sel)))
    }
}

impl From<Selection> for SelectionSet {
    fn from(sel: Selection) -> Self {
        match sel {
            Selection::Normal => Self::NORMAL,
            Selection::Extend => Self::EXTEND,
            Selection::Alt => Self::ALT,
            Selection::Open => Self::OPEN,
        }
    }
}

/// Signed scroll-wheel payload as reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    /// Number of wheel steps; negative is up/away from the user.
    pub count: i32,
    /// Host-defined distance per step.
    pub amount: f64,
}

/// Payload handed to every callback.
///
/// Built by the [`manager`](crate::manager) for each dispatched operation.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Operation being dispatched.
    pub operation: Operation,
    /// Selection of the press that started the current interaction, if any.
    pub selection: Option<Selection>,
    /// Pointer position in window coordinates.
    pub position: Point,
    /// Bounding region of the resolved target in window coordinates.
    ///
    /// Absent for default-hover calls and for click targets the geometry
    /// provider has no region for.
    pub region: Option<Rect>,
    /// Scroll payload; present only for [`Operation::Scroll`].
    pub scroll: Option<ScrollDelta>,
}

/// A low-level pointer event delivered by the host window.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent<K> {
    /// A button went down.
    Down {
        /// Pointer position in window coordinates.
        position: Point,
        /// Button/click kind reported by the host.
        selection: Selection,
        /// Topmost object under the cursor as resolved by the host, if any.
        current_object: Option<K>,
    },
    /// The pointer moved.
    Move {
        /// Pointer position in window coordinates.
        position: Point,
    },
    /// A button was released.
    Up {
        /// Pointer position in window coordinates.
        position: Point,
    },
    /// The scroll wheel turned.
    Scroll {
        /// Pointer position in window coordinates.
        position: Point,
        /// Wheel payload.
        delta: ScrollDelta,
    },
}

impl<K> PointerEvent<K> {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. }
            | Self::Move { position }
            | Self::Up { position }
            | Self::Scroll { position, .. } => *position,
        }
    }
}

/// Out-of-band lifecycle signals from the host.
///
/// Fed to [`MouseManager::notify`](crate::manager::MouseManager::notify).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Notification<K> {
    /// A managed visual object was destroyed.
    ItemDestroyed(K),
    /// Something other than the manager modified the window's event slots.
    EventSlotsChanged,
    /// The bound window was destroyed.
    WindowDestroyed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn tokens_parse_exactly() {
        assert_eq!("drag".parse::<Operation>().ok(), Some(Operation::Drag));
        assert_eq!("open".parse::<Selection>().ok(), Some(Selection::Open));
        assert!("Drag".parse::<Operation>().is_err());
        assert!("normal".parse::<Operation>().is_err());
        assert!("click".parse::<Selection>().is_err());
    }

    #[test]
    fn vocabularies_are_disjoint() {
        for op in Operation::ALL {
            assert!(op.as_str().parse::<Selection>().is_err());
        }
        for sel in Selection::ALL {
            assert!(sel.as_str().parse::<Operation>().is_err());
        }
    }

    #[test]
    fn sets_iterate_in_declaration_order() {
        let ops: Vec<_> = (OperationSet::SCROLL | OperationSet::CLICK)
            .operations()
            .collect();
        assert_eq!(ops, [Operation::Click, Operation::Scroll]);
        assert_eq!(SelectionSet::all().selections().count(), 4);
        assert_eq!(OperationSet::empty().operations().count(), 0);
    }

    #[test]
    fn selection_keyed_and_hover_active_partition_operations() {
        for op in Operation::ALL {
            assert_ne!(op.is_selection_keyed(), op.is_hover_active());
        }
    }

    #[test]
    fn pointer_event_position() {
        let ev: PointerEvent<u32> = PointerEvent::Scroll {
            position: Point::new(3.0, 4.0),
            delta: ScrollDelta {
                count: -1,
                amount: 3.0,
            },
        };
        assert_eq!(ev.position(), Point::new(3.0, 4.0));
    }
}
