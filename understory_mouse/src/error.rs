// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised synchronously by registration calls.

use alloc::string::String;

/// Registration failure.
///
/// Returned by [`MouseManager::add`](crate::manager::MouseManager::add) and friends.
/// A call that fails leaves the registry unchanged.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The visual object is not alive or belongs to a different window.
    #[error("target is not a live object of the bound window")]
    InvalidTarget,
    /// A non-callback value was supplied where a callback or clear was expected.
    #[error("expected a callback or an empty value")]
    InvalidCallback,
    /// A token matched neither vocabulary, mixed vocabularies, or repeated an axis.
    #[error("invalid or ambiguous argument `{token}`")]
    AmbiguousOrInvalidArgument {
        /// Offending token (empty for an empty token set).
        token: String,
    },
    /// The argument list ended without a terminating callback or clear.
    #[error("argument list must end with a callback or an empty value")]
    MalformedArgumentList,
}
