// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Event`] envelope carrying its wall-clock metadata.

use std::time::SystemTime;

use derive_more::{AsRef, Deref, DerefMut};

/// Arbitrary event, paired with the [`SystemTime`] of when it has happened.
///
/// The timestamp is the reporter's only clock: durations of execution units
/// are differences between the timestamps of their bracketing events, so the
/// runner should sample it at the moment the occurrence actually happens.
#[derive(AsRef, Clone, Copy, Debug, Deref, DerefMut)]
pub struct Event<T: ?Sized> {
    /// [`SystemTime`] when this [`Event`] has happened.
    pub at: SystemTime,

    /// Actual value of this [`Event`].
    #[as_ref]
    #[deref]
    #[deref_mut]
    pub value: T,
}

impl<T> Event<T> {
    /// Creates a new [`Event`] out of the given `value`, happening right now.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { at: SystemTime::now(), value }
    }

    /// Unwraps the inner [`Event::value`], losing the attached metadata.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Splits this [`Event`] into the inner [`Event::value`] and its detached
    /// metadata.
    #[must_use]
    pub fn split(self) -> (T, Metadata) {
        self.replace(())
    }

    /// Replaces the inner [`Event::value`] with the given one, dropping the
    /// old one in place.
    #[must_use]
    pub fn insert<V>(self, value: V) -> Event<V> {
        self.replace(value).1
    }

    /// Maps the inner [`Event::value`] with the given function.
    #[must_use]
    pub fn map<V>(self, f: impl FnOnce(T) -> V) -> Event<V> {
        let (val, meta) = self.split();
        meta.insert(f(val))
    }

    /// Replaces the inner [`Event::value`] with the given one, returning the
    /// old one along.
    #[must_use]
    pub fn replace<V>(self, value: V) -> (T, Event<V>) {
        let event = Event { at: self.at, value };
        (self.value, event)
    }
}

/// Shortcut for a detached metadata of an arbitrary [`Event`].
pub type Metadata = Event<()>;

impl Metadata {
    /// Wraps the given `value` with this [`Event`] metadata.
    #[must_use]
    pub fn wrap<V>(self, value: V) -> Event<V> {
        self.replace(value).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_preserves_timestamp() {
        let at = SystemTime::UNIX_EPOCH;
        let event = Event { at, value: 42 };

        let (value, meta) = event.split();

        assert_eq!(value, 42);
        assert_eq!(meta.at, at);
        assert_eq!(meta.wrap("hi").at, at);
    }

    #[test]
    fn map_keeps_metadata_and_transforms_value() {
        let event = Event { at: SystemTime::UNIX_EPOCH, value: 2 };

        let mapped = event.map(|v| v * 10);

        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.at, SystemTime::UNIX_EPOCH);
    }
}
