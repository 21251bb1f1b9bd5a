// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Scenario`]-level events.
//!
//! [`Scenario`]: super::Scenario

use super::{
    outcome::{RowOutcome, StepsOutcome},
    source::{ExampleRow, Source},
};

/// Event specific to a particular [`Scenario`].
///
/// [`Scenario`]: super::Scenario
#[derive(Clone, Debug)]
pub enum ScenarioEvent {
    /// [`Scenario`] execution being started.
    ///
    /// [`Scenario`]: super::Scenario
    Started,

    /// Event of the [`Scenario`]'s own step sequence.
    ///
    /// [`Scenario`]: super::Scenario
    Steps(StepsEvent),

    /// Event of the [`Scenario`]'s examples table (`Scenario Outline` only).
    ///
    /// [`Scenario`]: super::Scenario
    Examples(ExamplesEvent),
}

impl ScenarioEvent {
    /// Constructs an event of a step sequence being started.
    #[must_use]
    pub const fn steps_started() -> Self {
        Self::Steps(StepsEvent::Started)
    }

    /// Constructs an event of a finished step sequence.
    #[must_use]
    pub const fn steps_finished(outcome: StepsOutcome) -> Self {
        Self::Steps(StepsEvent::Finished(outcome))
    }

    /// Constructs an event of an examples table being entered.
    #[must_use]
    pub const fn examples_started() -> Self {
        Self::Examples(ExamplesEvent::Started)
    }

    /// Constructs an event of an [`ExampleRow`] execution being started.
    #[must_use]
    pub const fn row_started(row: Source<ExampleRow>) -> Self {
        Self::Examples(ExamplesEvent::Row(row, RowEvent::Started))
    }

    /// Constructs an event of a finished [`ExampleRow`] execution.
    #[must_use]
    pub const fn row_finished(row: Source<ExampleRow>, outcome: RowOutcome) -> Self {
        Self::Examples(ExamplesEvent::Row(row, RowEvent::Finished(outcome)))
    }
}

/// Event of a step sequence being executed.
///
/// `Started`/`Finished` bracket the whole sequence: the reporter measures the
/// unit's duration from their timestamps, and receives the verdict with the
/// `Finished` payload.
#[derive(Clone, Debug)]
pub enum StepsEvent {
    /// Step sequence execution being started.
    Started,

    /// Step sequence execution being finished.
    Finished(StepsOutcome),
}

/// Event of a `Scenario Outline`'s examples table being executed.
#[derive(Clone, Debug)]
pub enum ExamplesEvent {
    /// Examples table being entered.
    ///
    /// The next row to arrive is the table's header row.
    Started,

    /// [`ExampleRow`] event.
    Row(Source<ExampleRow>, RowEvent),
}

/// Event of a single [`ExampleRow`] being executed.
#[derive(Clone, Debug)]
pub enum RowEvent {
    /// [`ExampleRow`] execution being started.
    Started,

    /// [`ExampleRow`] execution being finished.
    Finished(RowOutcome),
}
