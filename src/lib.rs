// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] generation for [Cucumber] test-execution events.
//!
//! The test runner itself lives elsewhere: it parses `.feature` documents,
//! executes steps and decides verdicts. This crate is the downstream consumer
//! of that run — a [`reporter::JUnit`] receives the runner's [`Lifecycle`]
//! events through the [`EventHandler`] trait and writes one
//! `TEST-<feature>.xml` document per executed feature into a configured
//! directory, suitable for consumption by CI tooling.
//!
//! [1]: https://llg.cubic.org/docs/junit
//! [Cucumber]: https://cucumber.io

pub mod error;
pub mod event;
pub mod report;
pub mod reporter;
pub mod xml;

#[doc(inline)]
pub use self::{
    error::{ConfigError, WriteError},
    event::{Event, Lifecycle, Verdict},
    reporter::{Cli, Config, JUnit},
};

/// Synchronous consumer of test-execution [`Lifecycle`] events.
///
/// The upstream runner invokes [`handle_event()`] in-line, on a single
/// thread, delivering events in their [happened-before] order. Handlers never
/// suspend and never outlive the runner's pass over the features.
///
/// [`handle_event()`]: EventHandler::handle_event
/// [happened-before]: https://en.wikipedia.org/wiki/Happened-before
pub trait EventHandler {
    /// Handles the given [`Lifecycle`] event.
    fn handle_event(&mut self, event: Event<Lifecycle>);
}
