// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rendering of a [`CapturedFailure`] into a report's `<failure>` body.

use std::iter;

use itertools::Itertools as _;

use crate::event::CapturedFailure;

/// Renders the given [`CapturedFailure`] as the failure-payload text: the
/// message with its kind label in parentheses, followed by each stack-trace
/// line, newline-joined.
#[must_use]
pub fn format_failure(failure: &CapturedFailure) -> String {
    iter::once(format!("{} ({})", failure.message, failure.kind))
        .chain(failure.backtrace.iter().cloned())
        .join("\n")
}
