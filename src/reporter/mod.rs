// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] aggregation over [`Lifecycle`] events.
//!
//! [`JUnit`] is the event-facing state machine; [`FeatureRun`] carries the
//! per-feature accumulation it performs between a feature's `Started` and
//! `Finished` events.
//!
//! [`Lifecycle`]: crate::event::Lifecycle
//! [1]: https://llg.cubic.org/docs/junit

pub mod cli;
pub mod config;
pub mod feature_run;
pub mod writer;

pub use cli::Cli;
pub use config::Config;
pub use feature_run::FeatureRun;
pub use writer::JUnit;
