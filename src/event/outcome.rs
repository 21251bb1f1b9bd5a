// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Execution outcomes delivered with `Finished` events.

use derive_more::Display;

use super::source::{Source, Step};

/// Verdict of an executed unit, as decided by the upstream runner.
///
/// Rendered lowercase into the report (`failed`, `pending`, ...).
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Verdict {
    /// Unit executed and passed.
    #[display("passed")]
    Passed,

    /// Unit executed and failed.
    #[display("failed")]
    Failed,

    /// Unit has a matching step definition that is not implemented yet.
    #[display("pending")]
    Pending,

    /// Unit has no matching step definition.
    #[display("undefined")]
    Undefined,

    /// Unit was not executed.
    #[display("skipped")]
    Skipped,
}

impl Verdict {
    /// Indicates whether this [`Verdict`] classifies as a failure for
    /// reporting purposes.
    ///
    /// [`Failed`] always does; [`Pending`] does only under `strict`
    /// configuration.
    ///
    /// [`Failed`]: Verdict::Failed
    /// [`Pending`]: Verdict::Pending
    #[must_use]
    pub const fn is_failure(self, strict: bool) -> bool {
        matches!(self, Self::Failed) || (strict && matches!(self, Self::Pending))
    }
}

/// Failure captured while executing a unit.
///
/// Not an error of this crate: a regular data value delivered with the event
/// stream and rendered into the report's `<failure>` body.
#[derive(Clone, Debug)]
pub struct CapturedFailure {
    /// Human-readable failure message.
    pub message: String,

    /// Label of the failure's kind (a panic payload type, an assertion
    /// macro's name, etc.).
    pub kind: String,

    /// Captured stack-trace lines, topmost frame first.
    pub backtrace: Vec<String>,
}

impl CapturedFailure {
    /// Creates a new [`CapturedFailure`] without a backtrace.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { message: message.into(), kind: kind.into(), backtrace: vec![] }
    }

    /// Attaches the given stack-trace `lines` to this [`CapturedFailure`].
    #[must_use]
    pub fn with_backtrace<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backtrace = lines.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of a [`Scenario`]'s step sequence.
///
/// [`Scenario`]: super::Scenario
#[derive(Clone, Debug)]
pub struct StepsOutcome {
    /// [`Step`]s executed by the sequence, in their execution order.
    pub steps: Vec<Source<Step>>,

    /// [`Verdict`] of the whole sequence.
    pub verdict: Verdict,

    /// Failure captured by the sequence, if any.
    pub failure: Option<CapturedFailure>,
}

impl StepsOutcome {
    /// Creates a new [`StepsOutcome`] without a [`CapturedFailure`].
    #[must_use]
    pub fn new(steps: Vec<Source<Step>>, verdict: Verdict) -> Self {
        Self { steps, verdict, failure: None }
    }

    /// Attaches the given [`CapturedFailure`] to this [`StepsOutcome`].
    #[must_use]
    pub fn with_failure(mut self, failure: CapturedFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

/// Outcome of a single [`ExampleRow`].
///
/// [`ExampleRow`]: super::ExampleRow
#[derive(Clone, Debug)]
pub struct RowOutcome {
    /// [`Verdict`] of the row's execution.
    pub verdict: Verdict,

    /// Failure captured by the row's execution, if any.
    pub failure: Option<CapturedFailure>,
}

impl RowOutcome {
    /// Creates a new [`RowOutcome`] without a [`CapturedFailure`].
    #[must_use]
    pub const fn new(verdict: Verdict) -> Self {
        Self { verdict, failure: None }
    }

    /// Attaches the given [`CapturedFailure`] to this [`RowOutcome`].
    #[must_use]
    pub fn with_failure(mut self, failure: CapturedFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}
