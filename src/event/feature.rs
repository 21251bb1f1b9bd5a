// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Top-level and [`Feature`]-level events.

use super::{
    scenario::ScenarioEvent,
    source::{Feature, Scenario, Source},
};

/// Top-level test-execution run event.
///
/// The runner is required to deliver events in the following nesting order
/// (background and examples being optional):
///
/// ```text
/// Feature(Started)
///   [ Background(Started) .. Background(Finished) ]
///   Scenario(Started)
///     Steps(Started) .. Steps(Finished)
///     [ Examples(Started)
///         Row(Started) .. Row(Finished)   // first row is the header row
///         ...
///     ]
///   ...
/// Feature(Finished)
/// ```
#[derive(Clone, Debug)]
pub enum Lifecycle {
    /// [`Feature`] event.
    Feature(Source<Feature>, FeatureEvent),
}

impl Lifecycle {
    /// Constructs an event of a [`Feature`] execution being started.
    #[must_use]
    pub const fn feature_started(feature: Source<Feature>) -> Self {
        Self::Feature(feature, FeatureEvent::Started)
    }

    /// Constructs an event of a finished [`Feature`] execution.
    #[must_use]
    pub const fn feature_finished(feature: Source<Feature>) -> Self {
        Self::Feature(feature, FeatureEvent::Finished)
    }

    /// Constructs an event of a [`Feature`]'s background being started.
    #[must_use]
    pub const fn background_started(feature: Source<Feature>) -> Self {
        Self::Feature(feature, FeatureEvent::Background(BackgroundEvent::Started))
    }

    /// Constructs an event of a [`Feature`]'s background being finished.
    #[must_use]
    pub const fn background_finished(feature: Source<Feature>) -> Self {
        Self::Feature(feature, FeatureEvent::Background(BackgroundEvent::Finished))
    }

    /// Constructs a [`Scenario`] event happening inside the given
    /// [`Feature`].
    #[must_use]
    pub const fn scenario(
        feature: Source<Feature>,
        scenario: Source<Scenario>,
        event: ScenarioEvent,
    ) -> Self {
        Self::Feature(feature, FeatureEvent::Scenario(scenario, event))
    }
}

/// Event specific to a particular [`Feature`].
#[derive(Clone, Debug)]
pub enum FeatureEvent {
    /// [`Feature`] execution being started.
    Started,

    /// [`Feature`]'s background event.
    Background(BackgroundEvent),

    /// [`Scenario`] event.
    Scenario(Source<Scenario>, ScenarioEvent),

    /// [`Feature`] execution being finished.
    Finished,
}

/// Event specific to a [`Feature`]'s background step sequence.
///
/// Carries no timing or naming semantics of its own: it only brackets the
/// steps that must never produce a test-case record.
///
/// [`Feature`]: super::Feature
#[derive(Clone, Copy, Debug)]
pub enum BackgroundEvent {
    /// Background step sequence being started.
    Started,

    /// Background step sequence being finished.
    Finished,
}
