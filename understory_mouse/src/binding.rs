// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration arguments: the [`Bindings`] builder and the token parser.
//!
//! ## Overview
//!
//! A registration is an ordered list of [`Binding`] entries. Each entry names a
//! set of operations, a set of selections, and a callback (or `None` to clear).
//! Entries are applied left-to-right, so later entries overwrite earlier ones
//! where their (operation, selection) slots overlap. An omitted axis is the full set.
//!
//! ## Token form
//!
//! [`parse_args`] accepts the loose form `( spec? spec? terminator )+` where a
//! spec is a word or set of words from one vocabulary (`click|drag|release|hover|scroll`
//! or `normal|extend|alt|open`) and a terminator is a callback or [`Arg::Clear`].
//! The whole list is validated before anything is returned.
//!
//! ```
//! use understory_mouse::binding::{Arg, parse_args};
//! use understory_mouse::callback::Callback;
//! use understory_mouse::types::{OperationSet, SelectionSet};
//!
//! let cb: Callback<u32> = Callback::new(|_, _| Ok(()));
//! let bindings = parse_args(&[
//!     Arg::Word("click"),
//!     Arg::Words(&["normal", "extend"]),
//!     Arg::Call(cb),
//!     Arg::Word("hover"),
//!     Arg::Clear,
//! ])
//! .unwrap();
//!
//! let entries = bindings.entries();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].operations, OperationSet::CLICK);
//! assert_eq!(entries[0].selections, SelectionSet::NORMAL | SelectionSet::EXTEND);
//! assert_eq!(entries[1].operations, OperationSet::HOVER);
//! assert_eq!(entries[1].selections, SelectionSet::all());
//! assert!(entries[1].callback.is_none());
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::callback::Callback;
use crate::error::Error;
use crate::types::{Operation, OperationSet, Selection, SelectionSet};

/// One registration entry.
#[derive(Clone, Debug)]
pub struct Binding<K> {
    /// Operations this entry applies to.
    pub operations: OperationSet,
    /// Selections this entry applies to; ignored by hover and scroll.
    pub selections: SelectionSet,
    /// Callback to store, or `None` to clear the slots.
    pub callback: Option<Callback<K>>,
}

/// Ordered list of [`Binding`] entries.
#[derive(Clone, Debug)]
pub struct Bindings<K> {
    entries: Vec<Binding<K>>,
}

impl<K> Default for Bindings<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Bindings<K> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry that stores `callback`.
    pub fn on(
        mut self,
        operations: impl Into<OperationSet>,
        selections: impl Into<SelectionSet>,
        callback: Callback<K>,
    ) -> Self {
        self.push(Binding {
            operations: operations.into(),
            selections: selections.into(),
            callback: Some(callback),
        });
        self
    }

    /// Append an entry that clears the matching slots.
    pub fn clear(
        mut self,
        operations: impl Into<OperationSet>,
        selections: impl Into<SelectionSet>,
    ) -> Self {
        self.push(Binding {
            operations: operations.into(),
            selections: selections.into(),
            callback: None,
        });
        self
    }

    /// Append an entry.
    pub fn push(&mut self, binding: Binding<K>) {
        self.entries.push(binding);
    }

    /// Entries in application order.
    pub fn entries(&self) -> &[Binding<K>] {
        &self.entries
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loosely typed registration argument, see [`parse_args`].
#[derive(Clone, Debug)]
pub enum Arg<'a, K> {
    /// A single operation or selection token.
    Word(&'a str),
    /// An unordered set of tokens from one vocabulary.
    Words(&'a [&'a str]),
    /// Terminator that stores a callback.
    Call(Callback<K>),
    /// Terminator that clears the matching slots.
    Clear,
}

enum Axis {
    Operations(OperationSet),
    Selections(SelectionSet),
}

fn invalid(token: &str) -> Error {
    Error::AmbiguousOrInvalidArgument {
        token: token.to_string(),
    }
}

fn classify(words: &[&str]) -> Result<Axis, Error> {
    let Some((first, rest)) = words.split_first() else {
        return Err(Error::AmbiguousOrInvalidArgument {
            token: String::new(),
        });
    };
    if let Ok(op) = first.parse::<Operation>() {
        let mut set = OperationSet::from(op);
        for w in rest {
            set |= w.parse::<Operation>().map_err(|_| invalid(w))?.into();
        }
        Ok(Axis::Operations(set))
    } else if let Ok(sel) = first.parse::<Selection>() {
        let mut set = SelectionSet::from(sel);
        for w in rest {
            set |= w.parse::<Selection>().map_err(|_| invalid(w))?.into();
        }
        Ok(Axis::Selections(set))
    } else {
        Err(invalid(first))
    }
}

/// Parse a token argument list into [`Bindings`].
///
/// Fails with [`Error::AmbiguousOrInvalidArgument`] for unknown words, empty
/// or mixed word sets, and a repeated axis within one entry; fails with
/// [`Error::MalformedArgumentList`] when the list is empty or does not end
/// with a terminator.
pub fn parse_args<K>(args: &[Arg<'_, K>]) -> Result<Bindings<K>, Error> {
    let mut out = Bindings::new();
    let mut operations: Option<OperationSet> = None;
    let mut selections: Option<SelectionSet> = None;
    for arg in args {
        let (words, callback) = match arg {
            Arg::Word(w) => (core::slice::from_ref(w), None),
            Arg::Words(ws) => (*ws, None),
            Arg::Call(cb) => (&[][..], Some(Some(cb.clone()))),
            Arg::Clear => (&[][..], Some(None)),
        };
        if let Some(callback) = callback {
            out.push(Binding {
                operations: operations.take().unwrap_or(OperationSet::all()),
                selections: selections.take().unwrap_or(SelectionSet::all()),
                callback,
            });
            continue;
        }
        match classify(words)? {
            Axis::Operations(_) if operations.is_some() => return Err(invalid(words[0])),
            Axis::Selections(_) if selections.is_some() => return Err(invalid(words[0])),
            Axis::Operations(set) => operations = Some(set),
            Axis::Selections(set) => selections = Some(set),
        }
    }
    if out.is_empty() || operations.is_some() || selections.is_some() {
        return Err(Error::MalformedArgumentList);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Callback<u32> {
        Callback::new(|_, _| Ok(()))
    }

    #[test]
    fn omitted_axes_default_to_all() {
        let b = parse_args(&[Arg::Call(noop())]).unwrap();
        assert_eq!(b.entries()[0].operations, OperationSet::all());
        assert_eq!(b.entries()[0].selections, SelectionSet::all());
        assert!(b.entries()[0].callback.is_some());
    }

    #[test]
    fn axes_may_appear_in_either_order() {
        let b = parse_args::<u32>(&[Arg::Word("alt"), Arg::Word("drag"), Arg::Clear]).unwrap();
        assert_eq!(b.entries()[0].operations, OperationSet::DRAG);
        assert_eq!(b.entries()[0].selections, SelectionSet::ALT);
        assert!(b.entries()[0].callback.is_none());
    }

    #[test]
    fn repeated_triples_keep_order() {
        let a = noop();
        let c = noop();
        let b = parse_args(&[
            Arg::Word("click"),
            Arg::Call(a.clone()),
            Arg::Words(&["extend", "open"]),
            Arg::Call(c.clone()),
        ])
        .unwrap();
        let e = b.entries();
        assert_eq!(e.len(), 2);
        assert!(e[0].callback.as_ref().is_some_and(|cb| cb.ptr_eq(&a)));
        assert_eq!(e[1].operations, OperationSet::all());
        assert_eq!(e[1].selections, SelectionSet::EXTEND | SelectionSet::OPEN);
        assert!(e[1].callback.as_ref().is_some_and(|cb| cb.ptr_eq(&c)));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = parse_args(&[Arg::Word("press"), Arg::Call(noop())]).unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousOrInvalidArgument {
                token: "press".into()
            }
        );
    }

    #[test]
    fn mixed_vocabulary_set_is_rejected() {
        let err = parse_args::<u32>(&[Arg::Words(&["click", "normal"]), Arg::Clear]).unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousOrInvalidArgument {
                token: "normal".into()
            }
        );
    }

    #[test]
    fn repeated_axis_is_rejected() {
        let err = parse_args::<u32>(&[Arg::Word("click"), Arg::Word("drag"), Arg::Clear]).unwrap_err();
        assert_eq!(
            err,
            Error::AmbiguousOrInvalidArgument {
                token: "drag".into()
            }
        );
    }

    #[test]
    fn empty_word_set_is_rejected() {
        let err = parse_args::<u32>(&[Arg::Words(&[]), Arg::Clear]).unwrap_err();
        assert!(matches!(err, Error::AmbiguousOrInvalidArgument { .. }));
    }

    #[test]
    fn missing_terminator_is_malformed() {
        assert_eq!(
            parse_args(&[Arg::Call(noop()), Arg::Word("hover")]).unwrap_err(),
            Error::MalformedArgumentList
        );
        assert_eq!(
            parse_args::<u32>(&[]).unwrap_err(),
            Error::MalformedArgumentList
        );
    }

    #[test]
    fn builder_matches_parsed_form() {
        let b = Bindings::new()
            .on(Operation::Click, Selection::Normal, noop())
            .clear(OperationSet::HOVER, SelectionSet::all());
        assert_eq!(b.entries()[0].operations, OperationSet::CLICK);
        assert_eq!(b.entries()[0].selections, SelectionSet::NORMAL);
        assert!(b.entries()[1].callback.is_none());
    }
}
