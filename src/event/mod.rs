// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a lifecycle of a test-execution run.
//!
//! The top-level enum here is [`Lifecycle`].
//!
//! Each event enum contains variants indicating what stage of execution the
//! upstream runner is at, and variants with detailed content about the
//! precise sub-event. The runner is required to deliver events in the nesting
//! order described on [`Lifecycle`].

mod feature;
mod meta;
mod outcome;
mod scenario;
mod source;

pub use feature::{BackgroundEvent, FeatureEvent, Lifecycle};
pub use meta::{Event, Metadata};
pub use outcome::{CapturedFailure, RowOutcome, StepsOutcome, Verdict};
pub use scenario::{ExamplesEvent, RowEvent, ScenarioEvent, StepsEvent};
pub use source::{ExampleRow, Feature, Scenario, Source, Step};
