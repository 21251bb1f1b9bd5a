// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Subjects of [`Lifecycle`] events and their [`Source`] wrapper.
//!
//! Subjects carry textual identity only: the upstream runner owns the parsed
//! Gherkin documents and hands the reporter just the names, keywords and
//! source locations the report is built from.
//!
//! [`Lifecycle`]: super::Lifecycle

use std::{
    fmt,
    hash::{Hash, Hasher},
    path::PathBuf,
    sync::Arc,
};

use derive_more::{AsRef, Deref, From, Into};

/// Wrapper around an event subject ([`Feature`], [`Scenario`], etc.),
/// providing cheap [`Clone`], [`Hash`] and [`PartialEq`] implementations for
/// using it extensively in [`Event`]s.
///
/// [`Event`]: super::Event
#[derive(AsRef, Deref, From, Into)]
#[as_ref(forward)]
#[deref(forward)]
pub struct Source<T: ?Sized>(Arc<T>);

impl<T> Source<T> {
    /// Wraps the provided `value` into a new [`Source`].
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

// Manual implementation is required to omit the redundant `T: Clone` trait
// bound imposed by `#[derive(Clone)]`.
impl<T: ?Sized> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// Manual implementation is required to omit the redundant `T: Eq` trait bound
// imposed by `#[derive(Eq)]`.
impl<T: ?Sized> Eq for Source<T> {}

impl<T: ?Sized> PartialEq for Source<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Hash for Source<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

/// Feature under execution, as announced by the upstream runner.
#[derive(Clone, Debug)]
pub struct Feature {
    /// Raw textual name of this [`Feature`], possibly multiline and prefixed
    /// with its `Feature:` keyword.
    pub name: String,

    /// Path of the `.feature` source this [`Feature`] was loaded from.
    ///
    /// Determines the name of the report file the feature's results are
    /// written to.
    pub path: PathBuf,
}

impl Feature {
    /// Creates a new [`Feature`] subject.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// Scenario under execution.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Keyword text of this [`Scenario`] (e.g. `Scenario` or
    /// `Scenario Outline`).
    pub keyword: String,

    /// Raw textual name of this [`Scenario`].
    pub name: String,

    /// `file:line` location of this [`Scenario`] in its source document.
    ///
    /// Delivered by the runner's contract, but not a part of the report.
    pub location: String,
}

impl Scenario {
    /// Creates a new [`Scenario`] subject.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Single executed step of a [`Scenario`].
#[derive(Clone, Debug)]
pub struct Step {
    /// Keyword of this [`Step`] (`Given`, `When`, `Then`, ...).
    pub keyword: String,

    /// Text of this [`Step`].
    pub text: String,
}

impl Step {
    /// Creates a new [`Step`] subject.
    #[must_use]
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), text: text.into() }
    }
}

/// Single row of a `Scenario Outline`'s examples table.
#[derive(Clone, Debug)]
pub struct ExampleRow {
    /// Display name of this [`ExampleRow`], as rendered by the runner.
    pub name: String,
}

impl ExampleRow {
    /// Creates a new [`ExampleRow`] subject.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_clones_share_identity() {
        let feature = Source::new(Feature::new("Feature: X", "x.feature"));
        let clone = feature.clone();

        assert_eq!(feature, clone);
        assert_eq!(clone.name, "Feature: X");
    }

    #[test]
    fn sources_of_equal_values_are_distinct() {
        let a = Source::new(Step::new("Given", "a step"));
        let b = Source::new(Step::new("Given", "a step"));

        assert_ne!(a, b);
    }
}
